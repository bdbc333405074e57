//! Page composer and the complete HTML document around it.

use leptos::prelude::*;
use velocity_devid::landmarks::{self, containers};

use super::{Container, Div};
use crate::content::BoundContent;
use crate::lifecycle::MountState;
use crate::sections::{
    BikeTypesSection, ContactSection, HeroSection, ServicesSection, SiteFooter, SiteHeader,
    StatsSection, TestimonialsSection,
};
use crate::session::ViewerSession;
use crate::styles::LANDING_CSS;

/// Element id of the embedded inspector manifest.
pub const MANIFEST_SCRIPT_ID: &str = "velocity-dev-registry";

/// The landing page body: every section, tagged for the inspector.
///
/// A pure function of bound content, the viewer session and the mount
/// state; hosts own all three.
#[component]
pub fn LandingPage(
    content: BoundContent,
    session: ViewerSession,
    #[prop(into)] mount: Signal<MountState>,
) -> impl IntoView {
    let BoundContent {
        stats,
        services,
        bike_types,
        testimonials,
        contact,
    } = content;

    view! {
        <Container component_id=containers::LANDING_PAGE_ROOT>
            <Div dev=landmarks::MAIN_WRAPPER class="page">
                <SiteHeader session=session.clone() />
                <Container component_id=containers::HERO_SECTION>
                    <HeroSection session=session mount=mount />
                </Container>
                <Container component_id=containers::STATS_SECTION>
                    <StatsSection stats=stats />
                </Container>
                <Container component_id=containers::SERVICES_SECTION>
                    <ServicesSection services=services />
                </Container>
                <Container component_id=containers::BIKE_TYPES_SECTION>
                    <BikeTypesSection bike_types=bike_types />
                </Container>
                <Container component_id=containers::TESTIMONIALS_SECTION>
                    <TestimonialsSection testimonials=testimonials />
                </Container>
                <Container component_id=containers::CONTACT_SECTION>
                    <ContactSection contact=contact />
                </Container>
                <SiteFooter />
            </Div>
        </Container>
    }
}

/// The complete HTML document for static rendering.
#[component]
pub fn LandingDocument(
    content: BoundContent,
    session: ViewerSession,
    #[prop(into)] mount: Signal<MountState>,
    title: String,
    /// Serialized inspector manifest to embed, if any
    manifest: Option<String>,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <LandingPage content=content session=session mount=mount />
                {manifest.map(|json| view! {
                    <script type="application/json" id=MANIFEST_SCRIPT_ID inner_html=json></script>
                })}
            </body>
        </html>
    }
}
