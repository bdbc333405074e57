//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use velocity_devid::Family;

#[derive(Parser, Debug)]
#[command(name = "velocity")]
#[command(about = "Render the Velocity Bikes landing page and query its inspector identifiers")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the landing page as a static HTML document
    Render(RenderArgs),
    /// Print the identifier at a position of a list family
    Resolve {
        /// stat-card, service-card, bike-type, bike-badge or testimonial-card
        family: Family,
        /// Zero-based position in the rendered list
        position: usize,
    },
    /// Print the inspector manifest as JSON
    Registry,
    /// Verify the configured content fits the identifier registry
    Check(ConfigArgs),
}

/// Where to find `.velocity/config.toml`.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Explicit config file (overrides --root)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Project root containing `.velocity/config.toml`
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Write the page here instead of stdout
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Render for a recognized viewer with this display name
    #[arg(long)]
    pub viewer: Option<String>,

    /// Render the pre-paint state (hero hidden)
    #[arg(long)]
    pub initial: bool,

    /// Leave out the embedded inspector manifest
    #[arg(long)]
    pub no_manifest: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}
