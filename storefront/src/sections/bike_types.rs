//! Bike categories: a gradient tile and a name badge per category.

use leptos::prelude::*;
use velocity_devid::DevId;

use crate::components::{Badge, DevMeta, Div, H2, ICON_BIKE, Icon, P, Section};
use crate::content::BoundBikeType;

/// Inspector metadata of a category badge.
pub fn bike_badge_meta(bike: &BoundBikeType) -> DevMeta {
    let name = &bike.category.name;
    DevMeta::new(
        bike.badge,
        format!("{name} Bike Badge"),
        format!("Bike category badge for {name}"),
    )
}

#[component]
pub fn BikeTypesSection(bike_types: Vec<BoundBikeType>) -> impl IntoView {
    view! {
        <Section dev=DevId::UNTRACKED class="container section">
            <Div dev=DevId::UNTRACKED class="section-heading">
                <H2 dev=DevId::UNTRACKED class="section-title">"Bike Categories"</H2>
                <P dev=DevId::UNTRACKED class="section-lead">
                    "Find the perfect bike for your riding style and adventure"
                </P>
            </Div>
            <Div dev=DevId::UNTRACKED class="grid grid-6">
                {bike_types
                    .into_iter()
                    .map(|bike| {
                        let badge = bike_badge_meta(&bike);
                        let tile = bike.tile;
                        let tile_class = format!("bike-tile {}", bike.category.color.class());
                        let name = bike.category.name;
                        view! {
                            <Div dev=DevId::UNTRACKED class="bike-type">
                                <Div dev=tile class=tile_class>
                                    <Icon path=ICON_BIKE size="32" class="icon-on-accent" />
                                </Div>
                                <Badge dev=badge class="bike-badge">{name}</Badge>
                            </Div>
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

    fn bound() -> Vec<BoundBikeType> {
        LandingContent::default()
            .bind(Registry::builtin())
            .unwrap()
            .bike_types
    }

    #[test]
    fn badge_meta_uses_category_name() {
        let bikes = bound();
        let meta = bike_badge_meta(&bikes[0]);
        assert_eq!(meta.id.as_str(), "bike-badge-0");
        assert_eq!(meta.name.as_deref(), Some("Mountain Bike Badge"));
        assert_eq!(meta.description.as_deref(), Some("Bike category badge for Mountain"));
    }

    #[test]
    fn tiles_and_badges_are_tagged_separately() {
        let bikes = bound();
        let html = render_html(move || view! { <BikeTypesSection bike_types=bikes /> });

        for position in 0..6 {
            assert!(html.contains(&format!(r#"data-dev-id="bike-type-{position}""#)));
            assert!(html.contains(&format!(r#"data-dev-id="bike-badge-{position}""#)));
        }
        assert!(html.contains(r#"class="bike-tile gradient-amber""#));
        assert!(html.contains("BMX"));
    }
}
