//! In-process scenario registry backed by a lock-guarded map.

use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::sync::{PoisonError, RwLock};

use inimock_domain::device::{BLUEBERR_3, SEED_SCENARIO};
use inimock_domain::id::{DeviceId, ScenarioId};

use crate::ports::ScenarioRegistry;

/// In-memory [`ScenarioRegistry`].
///
/// A single [`RwLock`] guards every read and write. The map only holds plain
/// integers, so a poisoned lock still guards a consistent map and is
/// recovered rather than propagated.
#[derive(Debug)]
pub struct InMemoryScenarioRegistry {
    active: RwLock<HashMap<DeviceId, ScenarioId>>,
}

impl InMemoryScenarioRegistry {
    /// Create a registry with no active scenarios.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            active: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with the catalog device in its seed scenario.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_entries([(BLUEBERR_3.id, SEED_SCENARIO)])
    }

    /// Create a registry pre-populated with `entries`.
    pub fn with_entries(entries: impl IntoIterator<Item = (DeviceId, ScenarioId)>) -> Self {
        Self {
            active: RwLock::new(entries.into_iter().collect()),
        }
    }

    /// Copy of the current mapping, ordered by device id.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<DeviceId, ScenarioId> {
        let active = self.active.read().unwrap_or_else(PoisonError::into_inner);
        active.iter().map(|(k, v)| (*k, *v)).collect()
    }
}

impl Default for InMemoryScenarioRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ScenarioRegistry for InMemoryScenarioRegistry {
    fn active_scenario(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Option<ScenarioId>> + Send {
        let active = self.active.read().unwrap_or_else(PoisonError::into_inner);
        let result = active.get(&device_id).copied();
        async move { result }
    }

    fn activate(
        &self,
        device_id: DeviceId,
        scenario_id: ScenarioId,
    ) -> impl Future<Output = Option<ScenarioId>> + Send {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        let previous = active.insert(device_id, scenario_id);
        async move { previous }
    }
}
