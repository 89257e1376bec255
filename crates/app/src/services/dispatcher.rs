//! Dispatcher — answers one mock API call per request.

use inimock_domain::device::CATALOG;
use inimock_domain::error::InimockError;
use inimock_domain::id::{DeviceId, ScenarioId};
use inimock_domain::method::Method;
use inimock_domain::request::{ActivateScenarioParams, Request};
use inimock_domain::response::{DeviceList, DeviceStatus, Empty, Payload, TokenGrant};

use crate::ports::ScenarioRegistry;

/// Routes a [`Request`] to the handler of its [`Method`].
pub struct Dispatcher<R> {
    registry: R,
}

impl<R: ScenarioRegistry> Dispatcher<R> {
    /// Create a dispatcher backed by the given registry.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Access the underlying registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Run the handler for `request.method` and return its payload.
    ///
    /// # Errors
    ///
    /// Returns [`InimockError::UnknownMethod`] for a method outside the fixed
    /// set, or [`InimockError::InvalidParams`] when `ActivateScenario` params
    /// cannot be extracted. The registry is untouched on error.
    #[tracing::instrument(skip(self, request), fields(method = %request.method))]
    pub async fn dispatch(&self, request: Request) -> Result<Payload, InimockError> {
        match request.method {
            Method::Authenticate => Ok(Payload::Token(Self::authenticate())),
            Method::RegisterClient => Ok(Payload::Token(Self::register_client())),
            Method::GetDevicesExtended => Ok(Payload::Devices(self.devices_extended().await)),
            Method::ActivateScenario => {
                let params = ActivateScenarioParams::from_params(&request.params)?;
                self.activate_scenario(params).await;
                Ok(Payload::Empty(Empty {}))
            }
            Method::Unknown(name) => Err(InimockError::UnknownMethod(name)),
        }
    }

    /// Validate a token. Every token is accepted.
    #[must_use]
    pub fn authenticate() -> TokenGrant {
        TokenGrant::fixed()
    }

    /// Log in and register the client. Credentials are not checked.
    #[must_use]
    pub fn register_client() -> TokenGrant {
        TokenGrant::fixed()
    }

    /// Describe every catalog device with its current active scenario.
    ///
    /// A device with no registry entry reports scenario `0`.
    pub async fn devices_extended(&self) -> DeviceList {
        let mut devices = Vec::with_capacity(CATALOG.len());
        for device in CATALOG {
            let active = self
                .registry
                .active_scenario(device.id)
                .await
                .unwrap_or_default();
            devices.push(DeviceStatus::new(device, active));
        }
        DeviceList { devices }
    }

    /// Overwrite the active scenario of a device.
    pub async fn activate_scenario(&self, params: ActivateScenarioParams) {
        let previous = self
            .registry
            .activate(params.device_id, params.scenario_id)
            .await;
        tracing::info!(
            device_id = %params.device_id,
            scenario_id = %params.scenario_id,
            scenario = scenario_name(params.device_id, params.scenario_id).unwrap_or("unknown"),
            previous = ?previous.map(|id| id.get()),
            "scenario activated"
        );
    }
}

/// Catalog name of `scenario_id` on `device_id`, if both are known.
fn scenario_name(device_id: DeviceId, scenario_id: ScenarioId) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|device| device.id == device_id)
        .and_then(|device| device.scenario(scenario_id))
        .map(|scenario| scenario.name)
}
