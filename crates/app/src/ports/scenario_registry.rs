//! Scenario registry port — the active scenario of each device.

use std::future::Future;

use inimock_domain::id::{DeviceId, ScenarioId};

/// Shared map from device id to the scenario currently in effect.
///
/// Implementations must be safe to call concurrently: a read never observes a
/// partially applied write, and writes to different devices never overwrite
/// each other. Entries are never removed.
pub trait ScenarioRegistry {
    /// Scenario currently active on `device_id`, if one was ever set.
    fn active_scenario(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Option<ScenarioId>> + Send;

    /// Make `scenario_id` the active scenario of `device_id`, returning the
    /// previous one.
    fn activate(
        &self,
        device_id: DeviceId,
        scenario_id: ScenarioId,
    ) -> impl Future<Output = Option<ScenarioId>> + Send;
}
