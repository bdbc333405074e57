//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! └── LandingPage                 (landing-page-root)
//!     ├── SiteHeader              viewer-dependent controls
//!     ├── HeroSection             (hero-section) Reveal follows MountState
//!     ├── StatsSection            (stats-section)     stat-card-N
//!     ├── ServicesSection         (services-section)  service-card-N
//!     ├── BikeTypesSection        (bike-types-section) bike-type-N, bike-badge-N
//!     ├── TestimonialsSection     (testimonials-section) testimonial-card-N
//!     ├── ContactSection          (contact-section)
//!     └── SiteFooter
//! ```
//!
//! Every element goes through one of the tagged primitives in [`dev`], so the
//! inspector overlay attributes are never forgotten.

pub mod dev;
mod document;
mod icons;

pub use dev::{
    Badge, Button, ButtonVariant, Card, CardContent, Container, DevMeta, Div, Footer, H1, H2,
    Header, Nav, P, Reveal, Section, Span,
};
pub use document::{LandingDocument, LandingPage};
pub use icons::*;
