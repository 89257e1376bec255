//! Method — the closed set of remote calls the mock answers.

use std::fmt;

use serde::Deserialize;

/// A vendor API method, matched case-sensitively on its wire name.
///
/// Anything else deserializes into [`Method::Unknown`] so the dispatcher can
/// answer with a method-level error instead of rejecting the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Method {
    /// Validate an existing token.
    Authenticate,
    /// Log in with credentials and register the client.
    RegisterClient,
    /// List devices with their scenarios and active scenario.
    GetDevicesExtended,
    /// Switch a device to another scenario.
    ActivateScenario,
    /// Any other method name, kept verbatim for logging.
    Unknown(String),
}

impl Method {
    /// Wire name of the method.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Authenticate => "Authenticate",
            Self::RegisterClient => "RegisterClient",
            Self::GetDevicesExtended => "GetDevicesExtended",
            Self::ActivateScenario => "ActivateScenario",
            Self::Unknown(name) => name,
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for Method {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Authenticate" => Self::Authenticate,
            "RegisterClient" => Self::RegisterClient,
            "GetDevicesExtended" => Self::GetDevicesExtended,
            "ActivateScenario" => Self::ActivateScenario,
            _ => Self::Unknown(name),
        }
    }
}

impl From<&str> for Method {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
