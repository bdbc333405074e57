//! Serializable snapshot of the registry for the inspector tool.

use serde::Serialize;

use crate::{DevId, Family, NO_ID, Registry, landmarks::{self, Landmark}};

/// Everything the inspector can address on the page.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub sentinel: &'static str,
    pub containers: Vec<DevId>,
    pub landmarks: Vec<Landmark>,
    pub families: Vec<FamilyEntry>,
}

/// The identifier table of one family.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyEntry {
    pub family: Family,
    pub name: &'static str,
    pub ids: Vec<DevId>,
}

impl Manifest {
    pub fn from_registry(registry: &Registry) -> Self {
        Self {
            sentinel: NO_ID,
            containers: landmarks::containers::ALL.to_vec(),
            landmarks: landmarks::ALL.to_vec(),
            families: registry
                .families()
                .map(|family| FamilyEntry {
                    family,
                    name: family.display_name(),
                    ids: registry.ids(family).to_vec(),
                })
                .collect(),
        }
    }

    /// Total number of addressable identifiers.
    pub fn len(&self) -> usize {
        self.containers.len()
            + self.landmarks.len()
            + self.families.iter().map(|f| f.ids.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
