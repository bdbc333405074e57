//! Identity-tagged rendering primitives.
//!
//! Each primitive renders one HTML element carrying the inspector overlay
//! attributes: `data-dev-id` (always), `data-dev-name` and
//! `data-dev-description` (when known). Sections are wrapped in a
//! [`Container`] carrying `data-component-id`.

use leptos::prelude::*;
use velocity_devid::{DevId, Landmark};

use crate::lifecycle::MountState;

/// Inspector metadata attached to one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DevMeta {
    pub id: DevId,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl DevMeta {
    pub fn new(id: DevId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    /// Metadata for an element the inspector does not track.
    pub fn untracked() -> Self {
        Self::default()
    }
}

impl From<DevId> for DevMeta {
    fn from(id: DevId) -> Self {
        Self {
            id,
            name: None,
            description: None,
        }
    }
}

impl From<Landmark> for DevMeta {
    fn from(landmark: Landmark) -> Self {
        Self::new(landmark.id, landmark.name, landmark.description)
    }
}

/// Visual weight of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Ghost,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn btn-solid",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

fn join_class(base: &str, extra: &str) -> String {
    match (base.is_empty(), extra.is_empty()) {
        (_, true) => base.to_string(),
        (true, false) => extra.to_string(),
        (false, false) => format!("{base} {extra}"),
    }
}

/// Generates a tagged primitive rendering one `$tag` element, with `$base`
/// classes ahead of the caller's.
macro_rules! tagged_element {
    ($(#[$doc:meta])* $name:ident => $tag:ident) => {
        tagged_element!($(#[$doc])* $name => $tag, "");
    };
    ($(#[$doc:meta])* $name:ident => $tag:ident, $base:literal) => {
        $(#[$doc])*
        #[component]
        pub fn $name(
            #[prop(into)] dev: DevMeta,
            #[prop(optional, into)] class: String,
            children: Children,
        ) -> impl IntoView {
            let DevMeta { id, name, description } = dev;
            let class = join_class($base, &class);
            view! {
                <$tag
                    data-dev-id=id.as_str()
                    data-dev-name=name
                    data-dev-description=description
                    class=class
                >
                    {children()}
                </$tag>
            }
        }
    };
}

tagged_element!(Div => div);
tagged_element!(Span => span);
tagged_element!(Header => header);
tagged_element!(Nav => nav);
tagged_element!(Footer => footer);
tagged_element!(H1 => h1);
tagged_element!(H2 => h2);
tagged_element!(P => p);
tagged_element!(
    /// Surface of a list item
    Card => div, "card"
);
tagged_element!(CardContent => div, "card-content");
tagged_element!(Badge => span, "badge");

/// Section boundary addressed by component id.
#[component]
pub fn Container(component_id: DevId, children: Children) -> impl IntoView {
    view! {
        <div data-component-id=component_id.as_str()>
            {children()}
        </div>
    }
}

#[component]
pub fn Section(
    #[prop(into)] dev: DevMeta,
    /// Fragment anchor, for in-page links
    #[prop(optional, into)]
    anchor: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let DevMeta { id, name, description } = dev;
    view! {
        <section
            id=anchor
            data-dev-id=id.as_str()
            data-dev-name=name
            data-dev-description=description
            class=class
        >
            {children()}
        </section>
    }
}

#[component]
pub fn Button(
    #[prop(into)] dev: DevMeta,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let DevMeta { id, name, description } = dev;
    let class = join_class(variant.class(), &class);
    view! {
        <button
            type="button"
            data-dev-id=id.as_str()
            data-dev-name=name
            data-dev-description=description
            class=class
        >
            {children()}
        </button>
    }
}

/// Container whose styling follows the mount lifecycle.
///
/// Renders hidden and offset in [`MountState::Initial`], and settles in place
/// once the host reports [`MountState::Mounted`].
#[component]
pub fn Reveal(
    #[prop(into)] dev: DevMeta,
    #[prop(into)] mount: Signal<MountState>,
    children: Children,
) -> impl IntoView {
    let DevMeta { id, name, description } = dev;
    view! {
        <div
            data-dev-id=id.as_str()
            data-dev-name=name
            data-dev-description=description
            class=move || mount.get().reveal_class()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_html;
    use velocity_devid::landmarks;

    #[test]
    fn landmark_metadata_is_rendered() {
        let html = render_html(|| {
            view! { <Div dev=landmarks::MAIN_NAV class="row">"x"</Div> }
        });

        assert!(html.contains(r#"data-dev-id="main-nav""#));
        assert!(html.contains(r#"data-dev-name="Main Navigation""#));
        assert!(html.contains(r#"data-dev-description="Primary navigation bar""#));
        assert!(html.contains(r#"class="row""#));
    }

    #[test]
    fn untracked_elements_carry_only_the_sentinel() {
        let html = render_html(|| view! { <P dev=DevId::UNTRACKED>"quiet"</P> });

        assert!(html.contains(r#"data-dev-id="noID""#));
        assert!(!html.contains("data-dev-name"));
        assert!(!html.contains("data-dev-description"));
    }

    #[test]
    fn button_variant_classes() {
        let html = render_html(|| {
            view! {
                <Button dev=DevMeta::untracked() variant=ButtonVariant::Ghost class="wide">
                    "Go"
                </Button>
            }
        });
        assert!(html.contains(r#"class="btn btn-ghost wide""#));
    }

    #[test]
    fn generated_primitives_keep_tag_and_base_class() {
        let html = render_html(|| {
            view! {
                <Card dev=landmarks::STATS_GRID class="stat-card">
                    <CardContent dev=DevId::UNTRACKED>
                        <Badge dev=DevId::UNTRACKED>"new"</Badge>
                        <H2 dev=DevId::UNTRACKED>"title"</H2>
                    </CardContent>
                </Card>
            }
        });

        assert!(html.starts_with("<div"));
        assert!(html.contains(r#"class="card stat-card""#));
        assert!(html.contains(r#"class="card-content""#));
        assert!(html.contains("<span"));
        assert!(html.contains(r#"class="badge""#));
        assert!(html.contains("<h2"));
        assert!(html.contains("</h2>"));
    }

    #[test]
    fn container_carries_component_id() {
        let html = render_html(|| {
            view! {
                <Container component_id=landmarks::containers::HERO_SECTION>
                    <Span dev=DevId::UNTRACKED>"hi"</Span>
                </Container>
            }
        });
        assert!(html.contains(r#"data-component-id="hero-section""#));
    }

    #[test]
    fn reveal_follows_mount_state() {
        let initial = render_html(|| {
            view! {
                <Reveal dev=landmarks::HERO_CONTENT_WRAPPER mount=Signal::stored(MountState::Initial)>
                    "hero"
                </Reveal>
            }
        });
        let mounted = render_html(|| {
            view! {
                <Reveal dev=landmarks::HERO_CONTENT_WRAPPER mount=Signal::stored(MountState::Mounted)>
                    "hero"
                </Reveal>
            }
        });

        assert!(initial.contains("reveal-initial"));
        assert!(!initial.contains("reveal-mounted"));
        assert!(mounted.contains("reveal-mounted"));
        assert!(!mounted.contains("reveal-initial"));
    }
}
