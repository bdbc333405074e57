//! Registry errors.

use thiserror::Error;

/// Configuration errors detected while building or binding the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("identifier `{0}` is registered more than once")]
    DuplicateId(String),

    #[error("family `{0}` already has an identifier table")]
    FamilyAlreadyRegistered(String),

    #[error("unknown family `{0}`")]
    UnknownFamily(String),

    #[error("{len} `{family}` records exceed the {capacity} registered identifiers")]
    CapacityExceeded {
        family: String,
        len: usize,
        capacity: usize,
    },
}
