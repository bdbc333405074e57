//! The identifier value attached to every rendered element.

use std::fmt;

use serde::Serialize;

/// Identifier carried by elements the inspector cannot address individually.
///
/// Shared by deliberately untracked elements and by list positions past the
/// registered capacity of their family.
pub const NO_ID: &str = "noID";

/// A registered element identifier, or the [`NO_ID`] sentinel.
///
/// Identifiers are `&'static str` because every registered value is known at
/// load time; nothing is minted during a render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DevId(&'static str);

impl DevId {
    /// The sentinel for untracked or unregistered elements.
    pub const UNTRACKED: DevId = DevId(NO_ID);

    /// Wraps a static identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// The raw identifier string, as written to `data-dev-id`.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether this is the shared sentinel rather than an addressable id.
    pub fn is_sentinel(&self) -> bool {
        self.0 == NO_ID
    }
}

impl Default for DevId {
    fn default() -> Self {
        Self::UNTRACKED
    }
}

impl fmt::Display for DevId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for DevId {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untracked_is_sentinel() {
        assert!(DevId::UNTRACKED.is_sentinel());
        assert_eq!(DevId::default(), DevId::UNTRACKED);
        assert_eq!(DevId::UNTRACKED.as_str(), "noID");
    }

    #[test]
    fn registered_id_is_not_sentinel() {
        let id = DevId::new("hero-title");
        assert!(!id.is_sentinel());
        assert_eq!(id.to_string(), "hero-title");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&DevId::new("stat-card-0")).unwrap();
        assert_eq!(json, "\"stat-card-0\"");
    }
}
