//! # velocity-devid
//!
//! Stable element identifiers for the Velocity Bikes landing page.
//!
//! Every rendered node carries a `data-dev-id` so a design/dev inspector can
//! address it. Single-instance elements use [`landmarks`]; list-rendered
//! elements take their identifier from a per-[`Family`] table in the
//! [`Registry`], keyed by position.
//!
//! ```rust
//! use velocity_devid::{Family, Registry, NO_ID};
//!
//! let registry = Registry::builtin();
//! assert_eq!(registry.resolve(Family::StatCard, 2).as_str(), "stat-card-2");
//! assert_eq!(registry.resolve(Family::StatCard, 9).as_str(), NO_ID);
//!
//! // Composition binds whole collections and refuses ones that outgrew
//! // their table.
//! assert!(registry.bind(Family::TestimonialCard, 0..4).is_err());
//! ```

mod error;
mod family;
mod id;
pub mod landmarks;
mod manifest;
mod registry;

pub use error::RegistryError;
pub use family::Family;
pub use id::{DevId, NO_ID};
pub use landmarks::Landmark;
pub use manifest::{FamilyEntry, Manifest};
pub use registry::{KeyedRegistry, Registry, Tagged};
