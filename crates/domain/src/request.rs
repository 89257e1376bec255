//! Request — the JSON envelope carried in the `req` query parameter.
//!
//! The real client sends a larger envelope (`Node`, `Name`, `ClientIP`,
//! `Token`, `ClientId`, `Context`, …). Only `Method` and `Params` matter to
//! the mock; every other key is ignored.

use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{InimockError, ParamError};
use crate::id::{DeviceId, ScenarioId};
use crate::method::Method;

/// Loosely typed parameter map, as sent by the client.
pub type Params = serde_json::Map<String, Value>;

/// A parsed request envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Request {
    /// Requested method. Missing means an empty, unknown method name.
    #[serde(default)]
    pub method: Method,
    /// Method parameters. Missing or `null` means empty.
    #[serde(default, deserialize_with = "params_or_empty")]
    pub params: Params,
}

fn params_or_empty<'de, D>(deserializer: D) -> Result<Params, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Params>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Request {
    /// Create a request for `method` with the given parameters.
    #[must_use]
    pub fn new(method: Method, params: Params) -> Self {
        Self { method, params }
    }

    /// Parse the raw (already URL-decoded) value of the `req` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`InimockError::MalformedRequest`] when `raw` is not a JSON
    /// object of the expected shape. Arrays are rejected even though a
    /// derived struct deserializer would accept them positionally.
    pub fn from_json(raw: &str) -> Result<Self, InimockError> {
        let value: Value = serde_json::from_str(raw).map_err(InimockError::MalformedRequest)?;
        if !value.is_object() {
            return Err(InimockError::MalformedRequest(serde::de::Error::custom(
                "request envelope must be a JSON object",
            )));
        }
        serde_json::from_value(value).map_err(InimockError::MalformedRequest)
    }
}

/// Typed parameters of the `ActivateScenario` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivateScenarioParams {
    pub device_id: DeviceId,
    pub scenario_id: ScenarioId,
}

impl ActivateScenarioParams {
    pub const DEVICE_ID: &'static str = "DeviceId";
    pub const SCENARIO_ID: &'static str = "ScenarioId";

    /// Extract both ids from the parameter map.
    ///
    /// Each id must be present as a JSON string holding a base-10 integer.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParamError`] encountered, checking `ScenarioId`
    /// before `DeviceId`.
    pub fn from_params(params: &Params) -> Result<Self, ParamError> {
        let scenario_id = integer_param(params, Self::SCENARIO_ID)?;
        let device_id = integer_param(params, Self::DEVICE_ID)?;
        Ok(Self {
            device_id,
            scenario_id,
        })
    }
}

fn integer_param<T>(params: &Params, name: &'static str) -> Result<T, ParamError>
where
    T: FromStr<Err = ParseIntError>,
{
    let value = params.get(name).ok_or(ParamError::Missing { name })?;
    let raw = value.as_str().ok_or(ParamError::NotAString { name })?;
    raw.parse().map_err(|source| ParamError::NotAnInteger {
        name,
        value: raw.to_string(),
        source,
    })
}
