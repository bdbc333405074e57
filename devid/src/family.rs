//! Semantic families of repeated elements.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::RegistryError;

/// A category of list-rendered elements sharing one identifier table.
///
/// Adding a new list section to the page means adding a variant here and a
/// table in [`crate::Registry::builtin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    /// Cards in the stats grid
    StatCard,
    /// Cards in the services grid
    ServiceCard,
    /// Gradient tiles above each bike category
    BikeType,
    /// Name badges under each bike category tile
    BikeBadge,
    /// Customer testimonial cards
    TestimonialCard,
}

impl Family {
    /// Every family, in page order.
    pub const ALL: [Family; 5] = [
        Family::StatCard,
        Family::ServiceCard,
        Family::BikeType,
        Family::BikeBadge,
        Family::TestimonialCard,
    ];

    /// Kebab-case label, also the identifier prefix of the family.
    pub fn slug(&self) -> &'static str {
        match self {
            Family::StatCard => "stat-card",
            Family::ServiceCard => "service-card",
            Family::BikeType => "bike-type",
            Family::BikeBadge => "bike-badge",
            Family::TestimonialCard => "testimonial-card",
        }
    }

    /// Human-readable name shown by the inspector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Family::StatCard => "Stat Card",
            Family::ServiceCard => "Service Card",
            Family::BikeType => "Bike Type Tile",
            Family::BikeBadge => "Bike Badge",
            Family::TestimonialCard => "Testimonial Card",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Family {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Family::ALL
            .into_iter()
            .find(|family| family.slug() == wanted)
            .ok_or_else(|| RegistryError::UnknownFamily(s.to_string()))
    }
}
