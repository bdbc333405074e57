//! Hero: headline, pitch and the primary call to action.

use leptos::prelude::*;
use velocity_devid::landmarks;

use crate::components::{Button, ButtonVariant, Div, H1, P, Reveal, Section, Span};
use crate::lifecycle::MountState;
use crate::routes::Route;
use crate::session::ViewerSession;

#[component]
pub fn HeroSection(session: ViewerSession, #[prop(into)] mount: Signal<MountState>) -> impl IntoView {
    // Same button either way; only its label and target follow the viewer.
    let (cta_label, cta_route) = match session {
        ViewerSession::Guest => ("Start Shopping", Route::Register),
        ViewerSession::Recognized { .. } => ("Go to Dashboard", Route::Dashboard),
    };

    view! {
        <Section dev=landmarks::HERO_CONTENT class="container hero">
            <Reveal dev=landmarks::HERO_CONTENT_WRAPPER mount=mount>
                <H1 dev=landmarks::HERO_TITLE class="hero-title">
                    "Your Premier"
                    <Span dev=landmarks::BIKE_SHOP_HIGHLIGHT class="highlight">
                        " Bike Shop"
                    </Span>
                </H1>
                <P dev=landmarks::HERO_DESCRIPTION class="hero-description">
                    "From mountain adventures to city commutes, we have the perfect bike for every rider. "
                    "Expert sales, professional repairs, and quality rentals all in one place."
                </P>
                <Div dev=landmarks::HERO_CTA_BUTTONS class="cta-row">
                    <a href=cta_route.path()>
                        <Button dev=landmarks::HERO_START_SHOPPING class="btn-hero">
                            {cta_label}
                        </Button>
                    </a>
                    <Button
                        dev=landmarks::HERO_BROWSE_BIKES
                        variant=ButtonVariant::Outline
                        class="btn-hero"
                    >
                        "Browse Bikes"
                    </Button>
                </Div>
            </Reveal>
        </Section>
    }
}
