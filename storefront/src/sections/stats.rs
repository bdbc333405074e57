//! Stats grid: one card per headline number.

use leptos::prelude::*;
use velocity_devid::{DevId, Tagged, landmarks};

use crate::components::{Card, CardContent, Div, DevMeta, Section};
use crate::content::Stat;

/// Inspector metadata of a stat card.
pub fn stat_card_meta(tagged: &Tagged<Stat>) -> DevMeta {
    let Stat { label, value } = &tagged.record;
    DevMeta::new(
        tagged.tag,
        format!("{label} Stat Card"),
        format!("Statistical card showing {label}: {value}"),
    )
}

#[component]
pub fn StatsSection(stats: Vec<Tagged<Stat>>) -> impl IntoView {
    view! {
        <Section dev=landmarks::STATS_CONTENT class="container section-tight">
            <Div dev=landmarks::STATS_GRID class="grid grid-4">
                {stats
                    .into_iter()
                    .map(|tagged| {
                        let meta = stat_card_meta(&tagged);
                        let Stat { label, value } = tagged.record;
                        view! {
                            <Card dev=meta class="stat-card">
                                <CardContent dev=DevId::UNTRACKED>
                                    <Div dev=DevId::UNTRACKED class="stat-value">{value}</Div>
                                    <Div dev=DevId::UNTRACKED class="stat-label">{label}</Div>
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
    use pretty_assertions::assert_eq;
    use velocity_devid::Registry;

    fn bound_stats() -> Vec<Tagged<Stat>> {
        LandingContent::default()
            .bind(Registry::builtin())
            .unwrap()
            .stats
    }

    #[test]
    fn meta_is_derived_from_record() {
        let stats = bound_stats();
        let meta = stat_card_meta(&stats[2]);

        assert_eq!(meta.id.as_str(), "stat-card-2");
        assert_eq!(meta.name.as_deref(), Some("Years Experience Stat Card"));
        assert_eq!(
            meta.description.as_deref(),
            Some("Statistical card showing Years Experience: 15+")
        );
    }

    #[test]
    fn renders_one_card_per_stat() {
        let stats = bound_stats();
        let html = render_html(move || view! { <StatsSection stats=stats /> });

        for position in 0..4 {
            let marker = format!(r#"data-dev-id="stat-card-{position}""#);
            assert_eq!(html.matches(marker.as_str()).count(), 1);
        }
        assert!(html.contains("2,500+"));
        assert!(html.contains("Expert Staff"));
    }
}
