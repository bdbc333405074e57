//! Services grid.

use leptos::prelude::*;
use velocity_devid::{DevId, Tagged};

use crate::components::{Card, CardContent, DevMeta, Div, H2, Icon, P, Section};
use crate::content::Service;

/// Inspector metadata of a service card.
pub fn service_card_meta(tagged: &Tagged<Service>) -> DevMeta {
    let Service {
        title, description, ..
    } = &tagged.record;
    DevMeta::new(
        tagged.tag,
        format!("{title} Service Card"),
        format!("Service card highlighting {title}: {description}"),
    )
}

#[component]
pub fn ServicesSection(services: Vec<Tagged<Service>>) -> impl IntoView {
    view! {
        <Section dev=DevId::UNTRACKED anchor="services" class="container section">
            <Div dev=DevId::UNTRACKED class="section-heading">
                <H2 dev=DevId::UNTRACKED class="section-title">"Our Services"</H2>
                <P dev=DevId::UNTRACKED class="section-lead">
                    "Everything you need for your cycling journey, from sales to service"
                </P>
            </Div>
            <Div dev=DevId::UNTRACKED class="grid grid-4">
                {services
                    .into_iter()
                    .map(|tagged| {
                        let meta = service_card_meta(&tagged);
                        let Service { icon, title, description } = tagged.record;
                        let icon_class = format!("icon-lg {}", icon.tone());
                        view! {
                            <Card dev=meta class="service-card">
                                <CardContent dev=DevId::UNTRACKED>
                                    <Div dev=DevId::UNTRACKED class="service-icon">
                                        <Icon path=icon.path() size="32" class=icon_class />
                                    </Div>
                                    <h3 class="card-title">{title}</h3>
                                    <P dev=DevId::UNTRACKED class="card-text">{description}</P>
                                </CardContent>
                            </Card>
                        }
                    })
                    .collect_view()}
            </Div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LandingContent;
    use crate::render_html;
    use velocity_devid::Registry;

    #[test]
    fn meta_is_derived_from_record() {
        let services = LandingContent::default()
            .bind(Registry::builtin())
            .unwrap()
            .services;
        let meta = service_card_meta(&services[1]);

        assert_eq!(meta.id.as_str(), "service-card-1");
        assert_eq!(meta.name.as_deref(), Some("Repair & Service Service Card"));
        assert!(
            meta.description
                .as_deref()
                .is_some_and(|d| d.starts_with("Service card highlighting Repair & Service: Professional"))
        );
    }

    #[test]
    fn renders_anchor_and_cards() {
        let services = LandingContent::default()
            .bind(Registry::builtin())
            .unwrap()
            .services;
        let html = render_html(move || view! { <ServicesSection services=services /> });

        assert!(html.contains(r#"id="services""#));
        assert!(html.contains("Our Services"));
        assert!(html.contains(r#"data-dev-id="service-card-3""#));
        assert!(html.contains("Custom Builds"));
        assert!(html.contains("tone-blue"));
    }
}
