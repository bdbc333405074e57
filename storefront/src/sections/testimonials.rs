//! Customer testimonials with star ratings.

use leptos::prelude::*;
use velocity_devid::{DevId, Tagged};

use crate::components::{Card, CardContent, DevMeta, Div, H2, ICON_STAR, Icon, P, Section};
use crate::content::Testimonial;

/// Inspector metadata of a testimonial card.
pub fn testimonial_card_meta(tagged: &Tagged<Testimonial>) -> DevMeta {
    let name = &tagged.record.name;
    DevMeta::new(
        tagged.tag,
        format!("{name} Testimonial Card"),
        format!("Customer testimonial from {name}"),
    )
}

#[component]
fn RatingStars(rating: u8) -> impl IntoView {
    view! {
        <Div dev=DevId::UNTRACKED class="rating">
            {(0..rating)
                .map(|_| view! { <Icon path=ICON_STAR size="20" class="rating-star" /> })
                .collect_view()}
        </Div>
    }
}

#[component]
pub fn TestimonialsSection(testimonials: Vec<Tagged<Testimonial>>) -> impl IntoView {
    view! {
        <Section dev=DevId::UNTRACKED class="container section">
            <Div dev=DevId::UNTRACKED class="section-heading">
                <H2 dev=DevId::UNTRACKED class="section-title">"What Our Customers Say"</H2>
                <P dev=DevId::UNTRACKED class="section-lead">
                    "Don't just take our word for it - hear from our satisfied customers"
                </P>
            </Div>
            <Div dev=DevId::UNTRACKED class="grid grid-3">
                {testimonials
                    .into_iter()
                    .map(|tagged| {
                        let meta = testimonial_card_meta(&tagged);
                        let Testimonial { name, text, rating } = tagged.record;
                        let quote = format!("\u{201c}{text}\u{201d}");
                        let byline = format!("- {name}");
                        view! {
                            <Card dev=meta class="testimonial-card">
                                <CardContent dev=DevId::UNTRACKED>
                                    <RatingStars rating=rating />
                                    <P dev=DevId::UNTRACKED class="quote">{quote}</P>
                                    <P dev=DevId::UNTRACKED class="byline">{byline}</P>
                                </CardContent>
                            </Card>
                        }
                    })
                    .collect_view()}
            </Div>
        </Section>
    }
}
