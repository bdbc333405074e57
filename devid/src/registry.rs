//! Keyed identifier registry.
//!
//! A [`KeyedRegistry`] holds, per family key, the ordered identifiers a list
//! section may hand out. Lookups past the end of a table return the
//! [`NO_ID`](crate::NO_ID) sentinel; composition code calls [`KeyedRegistry::bind`]
//! instead, which refuses content that does not fit.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Display;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::{DevId, Family, RegistryError, landmarks};

const STAT_CARD_IDS: &[&str] = &["stat-card-0", "stat-card-1", "stat-card-2", "stat-card-3"];
const SERVICE_CARD_IDS: &[&str] = &[
    "service-card-0",
    "service-card-1",
    "service-card-2",
    "service-card-3",
];
const BIKE_TYPE_IDS: &[&str] = &[
    "bike-type-0",
    "bike-type-1",
    "bike-type-2",
    "bike-type-3",
    "bike-type-4",
    "bike-type-5",
];
const BIKE_BADGE_IDS: &[&str] = &[
    "bike-badge-0",
    "bike-badge-1",
    "bike-badge-2",
    "bike-badge-3",
    "bike-badge-4",
    "bike-badge-5",
];
const TESTIMONIAL_CARD_IDS: &[&str] = &[
    "testimonial-card-0",
    "testimonial-card-1",
    "testimonial-card-2",
];

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    Registry::try_builtin().expect("built-in identifier tables must be globally unique")
});

/// The registry used by the landing page.
pub type Registry = KeyedRegistry<Family>;

/// One record paired with the identifier resolved for its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged<T> {
    pub tag: DevId,
    pub position: usize,
    pub record: T,
}

/// Ordered identifier tables keyed by family, with global uniqueness.
#[derive(Debug, Clone)]
pub struct KeyedRegistry<K> {
    tables: BTreeMap<K, Vec<DevId>>,
    reserved: HashSet<DevId>,
}

impl<K> Default for KeyedRegistry<K> {
    fn default() -> Self {
        Self {
            tables: BTreeMap::new(),
            reserved: HashSet::new(),
        }
    }
}

impl<K: Ord + Copy + Display> KeyedRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a single-instance identifier so no family table can reuse it.
    pub fn reserve(&mut self, id: DevId) -> Result<(), RegistryError> {
        if id.is_sentinel() || !self.reserved.insert(id) {
            return Err(RegistryError::DuplicateId(id.as_str().to_string()));
        }
        Ok(())
    }

    /// Register the ordered identifier table of a family.
    ///
    /// Fails if the family already has a table or if any identifier is
    /// already reserved anywhere in the registry. On failure nothing is
    /// registered.
    pub fn register(&mut self, family: K, ids: &[&'static str]) -> Result<(), RegistryError> {
        if self.tables.contains_key(&family) {
            return Err(RegistryError::FamilyAlreadyRegistered(family.to_string()));
        }

        let mut fresh = HashSet::with_capacity(ids.len());
        for &raw in ids {
            let id = DevId::new(raw);
            if id.is_sentinel() || self.reserved.contains(&id) || !fresh.insert(id) {
                return Err(RegistryError::DuplicateId(raw.to_string()));
            }
        }

        self.reserved.extend(fresh);
        self.tables
            .insert(family, ids.iter().copied().map(DevId::new).collect());
        debug!(family = %family, slots = ids.len(), "registered identifier family");
        Ok(())
    }

    /// Identifier for `position` within `family`, or the sentinel.
    pub fn resolve(&self, family: K, position: usize) -> DevId {
        match self.try_resolve(family, position) {
            Some(id) => id,
            None => {
                warn!(
                    family = %family,
                    position,
                    capacity = self.capacity(family),
                    "no identifier registered for position, falling back to sentinel"
                );
                DevId::UNTRACKED
            }
        }
    }

    /// Identifier for `position` within `family`, if one is registered.
    pub fn try_resolve(&self, family: K, position: usize) -> Option<DevId> {
        self.tables
            .get(&family)
            .and_then(|ids| ids.get(position))
            .copied()
    }

    /// Number of identifiers registered for `family` (zero if unknown).
    pub fn capacity(&self, family: K) -> usize {
        self.tables.get(&family).map_or(0, Vec::len)
    }

    /// The ordered identifiers of `family`.
    pub fn ids(&self, family: K) -> &[DevId] {
        self.tables
            .get(&family)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Registered families, in key order.
    pub fn families(&self) -> impl Iterator<Item = K> + '_ {
        self.tables.keys().copied()
    }

    /// Whether `id` is registered anywhere, as a landmark or a family slot.
    pub fn contains(&self, id: DevId) -> bool {
        self.reserved.contains(&id)
    }

    /// Check that a collection of `len` records fits the family's table.
    pub fn ensure_capacity(&self, family: K, len: usize) -> Result<(), RegistryError> {
        let capacity = self.capacity(family);
        if len > capacity {
            return Err(RegistryError::CapacityExceeded {
                family: family.to_string(),
                len,
                capacity,
            });
        }
        Ok(())
    }

    /// Pair every record with the identifier of its position.
    ///
    /// The whole collection is checked up front, so a list that outgrew its
    /// table is reported instead of rendering sentinel-tagged elements.
    pub fn bind<T>(
        &self,
        family: K,
        records: impl IntoIterator<Item = T>,
    ) -> Result<Vec<Tagged<T>>, RegistryError> {
        let records: Vec<T> = records.into_iter().collect();
        self.ensure_capacity(family, records.len())?;
        debug!(family = %family, records = records.len(), "bound content to identifiers");

        Ok(records
            .into_iter()
            .zip(self.ids(family))
            .enumerate()
            .map(|(position, (record, &tag))| Tagged {
                tag,
                position,
                record,
            })
            .collect())
    }
}

impl KeyedRegistry<Family> {
    /// The landing page registry, built once on first use.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Build the landing page registry from the static tables.
    pub fn try_builtin() -> Result<Registry, RegistryError> {
        let mut registry = Registry::new();

        for landmark in landmarks::ALL {
            registry.reserve(landmark.id)?;
        }
        for &container in landmarks::containers::ALL {
            registry.reserve(container)?;
        }

        registry.register(Family::StatCard, STAT_CARD_IDS)?;
        registry.register(Family::ServiceCard, SERVICE_CARD_IDS)?;
        registry.register(Family::BikeType, BIKE_TYPE_IDS)?;
        registry.register(Family::BikeBadge, BIKE_BADGE_IDS)?;
        registry.register(Family::TestimonialCard, TESTIMONIAL_CARD_IDS)?;

        Ok(registry)
    }
}
