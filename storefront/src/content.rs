//! Display content of the landing page.
//!
//! Every collection has a built-in Velocity Bikes default and can be
//! replaced wholesale from configuration. Before rendering, content is
//! validated and bound to the identifier registry with
//! [`LandingContent::bind`]; a collection longer than its identifier table is
//! a configuration error.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use velocity_devid::{DevId, Family, Registry, RegistryError, Tagged};

/// Highest star rating a testimonial may carry.
pub const MAX_RATING: u8 = 5;

/// Content problems caught before anything is rendered.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("testimonial from `{name}` has rating {rating}, maximum is {MAX_RATING}")]
    RatingOutOfRange { name: String, rating: u8 },

    #[error("{family} #{position} has an empty `{field}`")]
    EmptyField {
        family: Family,
        position: usize,
        field: &'static str,
    },

    #[error("failed to serialize inspector manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Icon shown on a service card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Bike,
    Wrench,
    Users,
    Award,
}

impl Glyph {
    /// Accent color class of the glyph.
    pub fn tone(self) -> &'static str {
        match self {
            Glyph::Bike => "tone-orange",
            Glyph::Wrench => "tone-blue",
            Glyph::Users => "tone-green",
            Glyph::Award => "tone-purple",
        }
    }
}

/// Background gradient of a bike category tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gradient {
    Green,
    Blue,
    Amber,
    Purple,
    Red,
    Pink,
}

impl Gradient {
    /// Stylesheet class painting the gradient.
    pub fn class(self) -> &'static str {
        match self {
            Gradient::Green => "gradient-green",
            Gradient::Blue => "gradient-blue",
            Gradient::Amber => "gradient-amber",
            Gradient::Purple => "gradient-purple",
            Gradient::Red => "gradient-red",
            Gradient::Pink => "gradient-pink",
        }
    }
}

/// A headline number in the stats grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// An offering in the services grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub icon: Glyph,
    pub title: String,
    pub description: String,
}

/// A bike category tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BikeCategory {
    pub name: String,
    pub color: Gradient,
}

/// A customer quote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    /// Star count; full marks when omitted
    #[serde(default = "full_marks")]
    pub rating: u8,
}

fn full_marks() -> u8 {
    MAX_RATING
}

/// Shop details in the "Visit Our Shop" panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub address: String,
    pub phone: String,
    pub hours: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            address: "123 Bike Street, City, State 12345".into(),
            phone: "(555) 123-BIKE".into(),
            hours: "Mon-Sat 9AM-7PM".into(),
        }
    }
}

/// All content the page iterates over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingContent {
    pub stats: Vec<Stat>,
    pub services: Vec<Service>,
    pub bike_types: Vec<BikeCategory>,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactDetails,
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            stats: vec![
                stat("Bikes Sold", "2,500+"),
                stat("Happy Clients", "1,800+"),
                stat("Years Experience", "15+"),
                stat("Expert Staff", "8"),
            ],
            services: vec![
                service(
                    Glyph::Bike,
                    "Bike Sales",
                    "Wide selection of mountain bikes, road bikes, electric bikes, and accessories from top brands",
                ),
                service(
                    Glyph::Wrench,
                    "Repair & Service",
                    "Professional bike maintenance, tune-ups, and repairs by certified mechanics",
                ),
                service(
                    Glyph::Users,
                    "Bike Rentals",
                    "Daily and weekly bike rentals for tourists and locals exploring the city",
                ),
                service(
                    Glyph::Award,
                    "Custom Builds",
                    "Build your dream bike with our custom assembly service and expert consultation",
                ),
            ],
            bike_types: vec![
                category("Mountain", Gradient::Green),
                category("Road", Gradient::Blue),
                category("Electric", Gradient::Amber),
                category("Hybrid", Gradient::Purple),
                category("BMX", Gradient::Red),
                category("Kids", Gradient::Pink),
            ],
            testimonials: vec![
                testimonial(
                    "Sarah Johnson",
                    "Amazing service! They helped me find the perfect mountain bike and the staff was incredibly knowledgeable.",
                ),
                testimonial(
                    "Mike Chen",
                    "Quick and professional bike repair. My road bike runs like new after their tune-up service.",
                ),
                testimonial(
                    "Emily Davis",
                    "Great rental experience! Clean bikes and fair prices. Perfect for exploring the city.",
                ),
            ],
            contact: ContactDetails::default(),
        }
    }
}

fn stat(label: &str, value: &str) -> Stat {
    Stat {
        label: label.into(),
        value: value.into(),
    }
}

fn service(icon: Glyph, title: &str, description: &str) -> Service {
    Service {
        icon,
        title: title.into(),
        description: description.into(),
    }
}

fn category(name: &str, color: Gradient) -> BikeCategory {
    BikeCategory {
        name: name.into(),
        color,
    }
}

fn testimonial(name: &str, text: &str) -> Testimonial {
    Testimonial {
        name: name.into(),
        text: text.into(),
        rating: MAX_RATING,
    }
}

/// A bike category with the identifiers of its tile and its badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundBikeType {
    pub tile: DevId,
    pub badge: DevId,
    pub category: BikeCategory,
}

/// Content paired with identifiers, ready for one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundContent {
    pub stats: Vec<Tagged<Stat>>,
    pub services: Vec<Tagged<Service>>,
    pub bike_types: Vec<BoundBikeType>,
    pub testimonials: Vec<Tagged<Testimonial>>,
    pub contact: ContactDetails,
}

impl LandingContent {
    /// Check field-level rules that the registry cannot see.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (position, stat) in self.stats.iter().enumerate() {
            require(Family::StatCard, position, "label", &stat.label)?;
        }
        for (position, service) in self.services.iter().enumerate() {
            require(Family::ServiceCard, position, "title", &service.title)?;
        }
        for (position, bike) in self.bike_types.iter().enumerate() {
            require(Family::BikeType, position, "name", &bike.name)?;
        }
        for (position, quote) in self.testimonials.iter().enumerate() {
            require(Family::TestimonialCard, position, "name", &quote.name)?;
            if quote.rating > MAX_RATING {
                return Err(ContentError::RatingOutOfRange {
                    name: quote.name.clone(),
                    rating: quote.rating,
                });
            }
        }
        Ok(())
    }

    /// Validate the content and pair every record with its identifier.
    pub fn bind(&self, registry: &Registry) -> Result<BoundContent, ContentError> {
        self.validate()?;

        let tiles = registry.bind(Family::BikeType, self.bike_types.iter().cloned())?;
        let bike_types = registry
            .bind(Family::BikeBadge, tiles)?
            .into_iter()
            .map(|badge| BoundBikeType {
                tile: badge.record.tag,
                badge: badge.tag,
                category: badge.record.record,
            })
            .collect();

        let bound = BoundContent {
            stats: registry.bind(Family::StatCard, self.stats.iter().cloned())?,
            services: registry.bind(Family::ServiceCard, self.services.iter().cloned())?,
            bike_types,
            testimonials: registry.bind(Family::TestimonialCard, self.testimonials.iter().cloned())?,
            contact: self.contact.clone(),
        };
        debug!(
            stats = bound.stats.len(),
            services = bound.services.len(),
            bike_types = bound.bike_types.len(),
            testimonials = bound.testimonials.len(),
            "landing content bound"
        );
        Ok(bound)
    }
}

fn require(
    family: Family,
    position: usize,
    field: &'static str,
    value: &str,
) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField {
            family,
            position,
            field,
        });
    }
    Ok(())
}
