//! Subcommand handlers.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;
use velocity_devid::{Family, Manifest, Registry};
use velocity_storefront::{MountState, ViewerSession, render_landing};

use crate::cli::{ConfigArgs, RenderArgs};
use crate::config::VelocityConfig;

fn load_config(args: &ConfigArgs) -> Result<VelocityConfig> {
    match &args.config {
        Some(path) => VelocityConfig::try_load_from_path(path),
        None => VelocityConfig::try_load(&args.root),
    }
}

pub fn render(args: RenderArgs) -> Result<()> {
    let config = load_config(&args.config)?;

    let mut options = config.render_options();
    if args.initial {
        options.mount = MountState::Initial;
    }
    if args.no_manifest {
        options.embed_manifest = false;
    }
    let session = match args.viewer {
        Some(name) => ViewerSession::recognized(name),
        None => config.session(),
    };

    let html = render_landing(&config.content, &session, &options)
        .context("invalid landing content")?;

    match args.out {
        Some(path) => {
            std::fs::write(&path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote landing page");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn resolve(family: Family, position: usize) -> Result<()> {
    let id = Registry::builtin().resolve(family, position);
    println!("{id}");
    Ok(())
}

pub fn registry() -> Result<()> {
    let manifest = Manifest::from_registry(Registry::builtin());
    let json = serde_json::to_string_pretty(&manifest).context("failed to serialize manifest")?;
    println!("{json}");
    Ok(())
}

pub fn check(args: ConfigArgs) -> Result<()> {
    let config = load_config(&args)?;
    let registry = Registry::builtin();
    config
        .content
        .bind(registry)
        .context("invalid landing content")?;

    for family in registry.families() {
        let used = match family {
            Family::StatCard => config.content.stats.len(),
            Family::ServiceCard => config.content.services.len(),
            Family::BikeType | Family::BikeBadge => config.content.bike_types.len(),
            Family::TestimonialCard => config.content.testimonials.len(),
        };
        println!("{family}: {used}/{}", registry.capacity(family));
    }
    println!("ok");
    Ok(())
}
