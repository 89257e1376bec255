//! Device — the read-only catalog of alarm control units and their scenarios.
//!
//! Only the *active* scenario of a device is mutable, and it lives in the
//! scenario registry, not here.

use serde::Serialize;

use crate::id::{DeviceId, ScenarioId};

/// A named operating mode of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    #[serde(rename = "ScenarioId")]
    pub id: ScenarioId,
    #[serde(rename = "Name")]
    pub name: &'static str,
}

/// Static description of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Device {
    pub id: DeviceId,
    pub name: &'static str,
    /// Scenarios in the order the vendor API lists them.
    pub scenarios: &'static [Scenario],
}

impl Device {
    /// Look up a scenario of this device by id.
    #[must_use]
    pub fn scenario(&self, id: ScenarioId) -> Option<&'static Scenario> {
        self.scenarios.iter().find(|scenario| scenario.id == id)
    }
}

/// The single device the mock exposes.
pub const BLUEBERR_3: Device = Device {
    id: DeviceId::new(545_002),
    name: "BLUEBERR 3",
    scenarios: &[
        Scenario {
            id: ScenarioId::new(0),
            name: "ARM",
        },
        Scenario {
            id: ScenarioId::new(1),
            name: "DISARM",
        },
        Scenario {
            id: ScenarioId::new(2),
            name: "STAY",
        },
    ],
};

/// Every device returned by `GetDevicesExtended`.
pub const CATALOG: &[Device] = &[BLUEBERR_3];

/// Scenario the catalog device starts in.
pub const SEED_SCENARIO: ScenarioId = ScenarioId::new(1);
