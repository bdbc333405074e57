//! # velocity-storefront
//!
//! Leptos renderer for the Velocity Bikes landing page.
//!
//! Every element is rendered through an identity-tagged primitive, so the
//! page carries `data-dev-id` attributes a design/dev inspector can address.
//! Collections are paired with identifiers from the
//! [`velocity_devid::Registry`] before anything renders; content that
//! outgrew its identifier table fails with [`ContentError`] instead of
//! silently producing untracked cards.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "ssr")] {
//! use velocity_storefront::{render_landing, LandingContent, RenderOptions, ViewerSession};
//!
//! let html = render_landing(
//!     &LandingContent::default(),
//!     &ViewerSession::recognized("Sarah Johnson"),
//!     &RenderOptions::default(),
//! )
//! .unwrap();
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Welcome, Sarah!"));
//! # }
//! ```
//!
//! ## Hosts
//!
//! - `ssr` (default): [`render_landing`] produces a complete static document.
//! - `csr`: the `velocity-landing` app mounts [`components::LandingPage`] in
//!   the browser and flips [`MountState`] after first paint.

pub mod components;
pub mod content;
pub mod lifecycle;
pub mod routes;
pub mod sections;
pub mod session;
pub mod styles;

pub use content::{BoundContent, ContentError, LandingContent};
pub use lifecycle::MountState;
pub use routes::Route;
pub use session::ViewerSession;

/// Knobs for one static render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Lifecycle state baked into the document. Static output has no
    /// first-paint event, so it defaults to `Mounted`.
    pub mount: MountState,
    /// Embed the inspector manifest as a JSON `<script>` block.
    pub embed_manifest: bool,
    /// Document `<title>`.
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mount: MountState::Mounted,
            embed_manifest: true,
            title: "Velocity Bikes".to_string(),
        }
    }
}

/// Render the complete landing page as an HTML document.
///
/// Content is validated and bound to [`Registry::builtin`] first, so an
/// overlong collection or an invalid rating is reported before any markup is
/// produced.
///
/// [`Registry::builtin`]: velocity_devid::Registry::builtin
#[cfg(feature = "ssr")]
pub fn render_landing(
    content: &LandingContent,
    session: &ViewerSession,
    options: &RenderOptions,
) -> Result<String, ContentError> {
    use components::LandingDocument;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;
    use velocity_devid::{Manifest, Registry};

    let registry = Registry::builtin();
    let bound = content.bind(registry)?;
    let manifest = if options.embed_manifest {
        Some(serde_json::to_string(&Manifest::from_registry(registry))?)
    } else {
        None
    };

    let title = options.title.clone();
    let session = session.clone();
    let mount = options.mount;
    let html = Owner::new().with(move || {
        view! {
            <LandingDocument
                content=bound
                session=session
                mount=Signal::stored(mount)
                title=title
                manifest=manifest
            />
        }
        .to_html()
    });

    tracing::info!(
        bytes = html.len(),
        mounted = mount.is_mounted(),
        manifest = options.embed_manifest,
        "rendered landing page"
    );

    // Leptos doesn't include DOCTYPE
    Ok(format!("<!DOCTYPE html>\n{html}"))
}

#[cfg(test)]
pub(crate) fn render_html<V>(f: impl FnOnce() -> V) -> String
where
    V: leptos::tachys::view::RenderHtml,
{
    leptos::prelude::Owner::new().with(move || f().to_html())
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use velocity_devid::{Manifest, Registry, RegistryError, landmarks};

    fn render(session: &ViewerSession, options: &RenderOptions) -> String {
        render_landing(&LandingContent::default(), session, options).unwrap()
    }

    fn dev_ids(html: &str) -> Vec<&str> {
        html.split(r#"data-dev-id=""#)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn renders_complete_document() {
        let html = render(&ViewerSession::Guest, &RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains("<title>Velocity Bikes</title>"));
        assert!(html.contains("Velocity Bikes"));
    }

    #[test]
    fn every_builtin_family_id_is_rendered() {
        let html = render(&ViewerSession::Guest, &RenderOptions::default());
        let rendered = dev_ids(&html);
        let registry = Registry::builtin();

        for family in registry.families() {
            for id in registry.ids(family) {
                assert!(rendered.contains(&id.as_str()), "missing {id}");
            }
        }
    }

    #[test]
    fn every_container_is_rendered() {
        let html = render(&ViewerSession::Guest, &RenderOptions::default());
        for container in landmarks::containers::ALL {
            let attr = format!(r#"data-component-id="{container}""#);
            assert!(html.contains(&attr), "missing {container}");
        }
    }

    #[test]
    fn tracked_ids_are_unique_on_the_page() {
        let html = render(&ViewerSession::Guest, &RenderOptions::default());
        let mut tracked: Vec<&str> = dev_ids(&html)
            .into_iter()
            .filter(|id| *id != velocity_devid::NO_ID)
            .collect();
        let total = tracked.len();
        tracked.sort_unstable();
        tracked.dedup();
        assert_eq!(tracked.len(), total);
    }

    #[test]
    fn manifest_is_embedded_by_default() {
        let html = render(&ViewerSession::Guest, &RenderOptions::default());
        let expected =
            serde_json::to_string(&Manifest::from_registry(Registry::builtin())).unwrap();

        assert!(html.contains(r#"id="velocity-dev-registry""#));
        assert!(html.contains(&expected));
    }

    #[test]
    fn manifest_can_be_omitted() {
        let options = RenderOptions {
            embed_manifest: false,
            ..RenderOptions::default()
        };
        let html = render(&ViewerSession::Guest, &options);
        assert!(!html.contains("velocity-dev-registry"));
    }

    #[test]
    fn guest_and_recognized_viewers_differ_only_in_controls() {
        let guest = render(&ViewerSession::Guest, &RenderOptions::default());
        let known = render(
            &ViewerSession::recognized("Mike Chen"),
            &RenderOptions::default(),
        );

        assert!(guest.contains("Start Shopping"));
        assert!(!guest.contains("Welcome,"));
        assert!(known.contains("Welcome, Mike!"));
        assert!(known.contains("Go to Dashboard"));
        assert!(!known.contains("Start Shopping"));
    }

    #[test]
    fn mount_state_controls_hero_reveal() {
        let initial = render(
            &ViewerSession::Guest,
            &RenderOptions {
                mount: MountState::Initial,
                ..RenderOptions::default()
            },
        );
        let mounted = render(&ViewerSession::Guest, &RenderOptions::default());

        assert!(initial.contains(r#"class="reveal reveal-initial""#));
        assert!(mounted.contains(r#"class="reveal reveal-mounted""#));
        assert!(!mounted.contains(r#"class="reveal reveal-initial""#));
    }

    #[test]
    fn overflowing_collection_fails_before_rendering() {
        let mut content = LandingContent::default();
        content.testimonials.push(content.testimonials[0].clone());

        let err = render_landing(&content, &ViewerSession::Guest, &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ContentError::Registry(RegistryError::CapacityExceeded { len: 4, capacity: 3, .. })
        ));
    }

    #[test]
    fn custom_title() {
        let options = RenderOptions {
            title: "Spring Sale".into(),
            ..RenderOptions::default()
        };
        let html = render(&ViewerSession::Guest, &options);
        assert!(html.contains("<title>Spring Sale</title>"));
    }
}
