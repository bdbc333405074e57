//! Fixed, single-instance elements of the landing page.
//!
//! Each landmark pairs its identifier with the name and description the
//! inspector shows. Section containers only carry a component id.

use serde::Serialize;

use crate::DevId;

/// A registered single-instance element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Landmark {
    pub id: DevId,
    pub name: &'static str,
    pub description: &'static str,
}

const fn landmark(id: &'static str, name: &'static str, description: &'static str) -> Landmark {
    Landmark {
        id: DevId::new(id),
        name,
        description,
    }
}

// Header
pub const MAIN_WRAPPER: Landmark = landmark(
    "main-wrapper",
    "Main Wrapper",
    "Main page wrapper with bike shop gradient background",
);
pub const MAIN_HEADER: Landmark = landmark(
    "main-header",
    "Main Header",
    "Bike shop header with navigation",
);
pub const MAIN_NAV: Landmark = landmark("main-nav", "Main Navigation", "Primary navigation bar");
pub const LOGO_SECTION: Landmark = landmark(
    "logo-section",
    "Logo Section",
    "Bike shop logo and brand name",
);
pub const BRAND_NAME: Landmark = landmark(
    "brand-name",
    "Brand Name",
    "Velocity Bikes brand name",
);
pub const NAV_ACTIONS: Landmark = landmark(
    "nav-actions",
    "Navigation Actions",
    "Navigation buttons and user menu",
);
pub const SERVICES_BUTTON: Landmark = landmark(
    "services-button",
    "Services Button",
    "Link to services section",
);
pub const CONTACT_BUTTON: Landmark = landmark(
    "contact-button",
    "Contact Button",
    "Link to contact section",
);

// Viewer-dependent navigation
pub const USER_SECTION: Landmark = landmark(
    "user-section",
    "User Section",
    "Authenticated user welcome area",
);
pub const WELCOME_MESSAGE: Landmark = landmark(
    "welcome-message",
    "Welcome Message",
    "Welcome message for authenticated user",
);
pub const NAV_DASHBOARD_BUTTON: Landmark = landmark(
    "nav-dashboard-button",
    "Navigation Dashboard Button",
    "Dashboard button in navigation header for authenticated users",
);
pub const AUTH_BUTTONS: Landmark = landmark(
    "auth-buttons",
    "Authentication Buttons",
    "Login and register buttons for unauthenticated users",
);
pub const NAV_LOGIN_BUTTON: Landmark = landmark(
    "nav-login-button",
    "Navigation Login Button",
    "Login button in navigation header",
);
pub const NAV_REGISTER_BUTTON: Landmark = landmark(
    "nav-register-button",
    "Navigation Register Button",
    "Get started button in navigation header",
);

// Hero
pub const HERO_CONTENT: Landmark = landmark(
    "hero-content",
    "Hero Content",
    "Main hero section with bike shop title and call-to-action",
);
pub const HERO_CONTENT_WRAPPER: Landmark = landmark(
    "hero-content-wrapper",
    "Hero Content Wrapper",
    "Animated wrapper for hero content",
);
pub const HERO_TITLE: Landmark = landmark(
    "hero-title",
    "Hero Title",
    "Main hero title showcasing the bike shop",
);
pub const BIKE_SHOP_HIGHLIGHT: Landmark = landmark(
    "bike-shop-highlight",
    "Bike Shop Highlight",
    "Highlighted bike shop text in gradient",
);
pub const HERO_DESCRIPTION: Landmark = landmark(
    "hero-description",
    "Hero Description",
    "Hero section description explaining the bike shop services",
);
pub const HERO_CTA_BUTTONS: Landmark = landmark(
    "hero-cta-buttons",
    "Hero CTA Buttons",
    "Call-to-action buttons in hero section",
);
pub const HERO_START_SHOPPING: Landmark = landmark(
    "hero-start-shopping",
    "Start Shopping Button",
    "Primary call-to-action button for starting to shop",
);
pub const HERO_BROWSE_BIKES: Landmark = landmark(
    "hero-browse-bikes",
    "Browse Bikes Button",
    "Secondary button to browse bike inventory",
);

// Stats
pub const STATS_CONTENT: Landmark = landmark(
    "stats-content",
    "Stats Content",
    "Statistics section showing bike shop metrics",
);
pub const STATS_GRID: Landmark = landmark(
    "stats-grid",
    "Stats Grid",
    "Grid container for statistics cards",
);

// Contact and footer
pub const CONTACT_VISIT_BUTTON: Landmark = landmark(
    "contact-visit-button",
    "Visit Us Button",
    "Primary button to visit the shop",
);
pub const CONTACT_CALL_BUTTON: Landmark = landmark(
    "contact-call-button",
    "Call Us Button",
    "Secondary button to call the shop",
);
pub const MAIN_FOOTER: Landmark = landmark(
    "main-footer",
    "Main Footer",
    "Site footer with links and copyright",
);

/// Every landmark, in document order.
pub const ALL: &[Landmark] = &[
    MAIN_WRAPPER,
    MAIN_HEADER,
    MAIN_NAV,
    LOGO_SECTION,
    BRAND_NAME,
    NAV_ACTIONS,
    SERVICES_BUTTON,
    CONTACT_BUTTON,
    USER_SECTION,
    WELCOME_MESSAGE,
    NAV_DASHBOARD_BUTTON,
    AUTH_BUTTONS,
    NAV_LOGIN_BUTTON,
    NAV_REGISTER_BUTTON,
    HERO_CONTENT,
    HERO_CONTENT_WRAPPER,
    HERO_TITLE,
    BIKE_SHOP_HIGHLIGHT,
    HERO_DESCRIPTION,
    HERO_CTA_BUTTONS,
    HERO_START_SHOPPING,
    HERO_BROWSE_BIKES,
    STATS_CONTENT,
    STATS_GRID,
    CONTACT_VISIT_BUTTON,
    CONTACT_CALL_BUTTON,
    MAIN_FOOTER,
];

/// Component ids of the section containers.
pub mod containers {
    use crate::DevId;

    pub const LANDING_PAGE_ROOT: DevId = DevId::new("landing-page-root");
    pub const HERO_SECTION: DevId = DevId::new("hero-section");
    pub const STATS_SECTION: DevId = DevId::new("stats-section");
    pub const SERVICES_SECTION: DevId = DevId::new("services-section");
    pub const BIKE_TYPES_SECTION: DevId = DevId::new("bike-types-section");
    pub const TESTIMONIALS_SECTION: DevId = DevId::new("testimonials-section");
    pub const CONTACT_SECTION: DevId = DevId::new("contact-section");

    /// Every container, in document order.
    pub const ALL: &[DevId] = &[
        LANDING_PAGE_ROOT,
        HERO_SECTION,
        STATS_SECTION,
        SERVICES_SECTION,
        BIKE_TYPES_SECTION,
        TESTIMONIALS_SECTION,
        CONTACT_SECTION,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn landmark_ids_are_unique() {
        let mut seen = HashSet::new();
        for landmark in ALL {
            assert!(seen.insert(landmark.id), "duplicate landmark {}", landmark.id);
        }
    }

    #[test]
    fn no_landmark_uses_the_sentinel() {
        assert!(ALL.iter().all(|l| !l.id.is_sentinel()));
        assert!(containers::ALL.iter().all(|id| !id.is_sentinel()));
    }
}
