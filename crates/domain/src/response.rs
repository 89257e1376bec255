//! Response — the success envelope and method-specific payloads.

use serde::Serialize;
use uuid::Uuid;

use crate::device::{Device, Scenario};
use crate::id::{DeviceId, ScenarioId};

/// Status code of a successful call.
pub const STATUS_OK: i32 = 0;

/// Token handed out by both login methods. Never checked afterwards.
pub const FIXED_TOKEN: Uuid = Uuid::from_u128(0xe255_f93b_467c_4248_9315_879f_a727_d82d);

/// Token validity advertised to the client, in seconds.
pub const TOKEN_TTL_SECS: u32 = 3600;

/// `{"Status": 0, "Data": …}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Envelope {
    pub status: i32,
    pub data: Payload,
}

impl Envelope {
    /// Wrap a payload in a success envelope.
    #[must_use]
    pub fn ok(data: Payload) -> Self {
        Self {
            status: STATUS_OK,
            data,
        }
    }
}

/// Method-specific `Data` of a success envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Token(TokenGrant),
    Devices(DeviceList),
    Empty(Empty),
}

/// Answer to `Authenticate` and `RegisterClient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenGrant {
    #[serde(rename = "Token")]
    pub token: String,
    #[serde(rename = "TTL")]
    pub ttl: u32,
}

impl TokenGrant {
    /// The grant every login call receives.
    #[must_use]
    pub fn fixed() -> Self {
        Self {
            token: FIXED_TOKEN.to_string(),
            ttl: TOKEN_TTL_SECS,
        }
    }
}

/// Answer to `GetDevicesExtended`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceList {
    pub devices: Vec<DeviceStatus>,
}

/// A catalog device together with its current active scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceStatus {
    pub device_id: DeviceId,
    pub active_scenario: ScenarioId,
    pub name: &'static str,
    pub scenarios: &'static [Scenario],
}

impl DeviceStatus {
    #[must_use]
    pub fn new(device: &Device, active_scenario: ScenarioId) -> Self {
        Self {
            device_id: device.id,
            active_scenario,
            name: device.name,
            scenarios: device.scenarios,
        }
    }
}

/// Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Empty {}
