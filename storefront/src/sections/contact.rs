//! "Visit Our Shop" panel.

use leptos::prelude::*;
use velocity_devid::{DevId, landmarks};

use crate::components::{
    Button, ButtonVariant, Div, H2, ICON_CLOCK, ICON_MAP_PIN, ICON_PHONE, Icon, P, Section,
};
use crate::content::ContactDetails;

#[component]
pub fn ContactSection(contact: ContactDetails) -> impl IntoView {
    let ContactDetails {
        address,
        phone,
        hours,
    } = contact;

    view! {
        <Section dev=DevId::UNTRACKED anchor="contact" class="container section">
            <Div dev=DevId::UNTRACKED class="contact-panel">
                <H2 dev=DevId::UNTRACKED class="section-title">"Visit Our Shop"</H2>
                <P dev=DevId::UNTRACKED class="section-lead">
                    "Come see our bikes in person and get expert advice from our friendly staff"
                </P>
                <Div dev=DevId::UNTRACKED class="grid grid-3 contact-details">
                    <Div dev=DevId::UNTRACKED class="contact-item">
                        <Icon path=ICON_MAP_PIN size="20" class="tone-orange" />
                        <span>{address}</span>
                    </Div>
                    <Div dev=DevId::UNTRACKED class="contact-item">
                        <Icon path=ICON_PHONE size="20" class="tone-orange" />
                        <span>{phone}</span>
                    </Div>
                    <Div dev=DevId::UNTRACKED class="contact-item">
                        <Icon path=ICON_CLOCK size="20" class="tone-orange" />
                        <span>{hours}</span>
                    </Div>
                </Div>
                <Div dev=DevId::UNTRACKED class="cta-row">
                    <Button dev=landmarks::CONTACT_VISIT_BUTTON class="btn-hero">
                        <span class="btn-icon-row">
                            <Icon path=ICON_MAP_PIN size="20" />
                            "Visit Us Today"
                        </span>
                    </Button>
                    <Button
                        dev=landmarks::CONTACT_CALL_BUTTON
                        variant=ButtonVariant::Outline
                        class="btn-hero"
                    >
                        <span class="btn-icon-row">
                            <Icon path=ICON_PHONE size="20" />
                            "Call Us"
                        </span>
                    </Button>
                </Div>
            </Div>
        </Section>
    }
}
