//! Landing page sections, in document order.

mod bike_types;
mod contact;
mod footer;
mod header;
mod hero;
mod services;
mod stats;
mod testimonials;

pub use bike_types::{BikeTypesSection, bike_badge_meta};
pub use contact::ContactSection;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::HeroSection;
pub use services::{ServicesSection, service_card_meta};
pub use stats::{StatsSection, stat_card_meta};
pub use testimonials::{TestimonialsSection, testimonial_card_meta};
