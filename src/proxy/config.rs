//! Proxy selection, validation, and proxy URL derivation.

use std::{fmt, str::FromStr};

use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::lib::errors::ValidationError;

/// Forwarding mode applied to the launched application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProxyType {
    #[default]
    #[serde(rename = "None")]
    None,
    #[serde(rename = "SOCKS5")]
    Socks5,
    #[serde(rename = "HTTP")]
    Http,
}

impl ProxyType {
    /// Variants in presentation order.
    pub const ALL: [ProxyType; 3] = [ProxyType::None, ProxyType::Socks5, ProxyType::Http];

    /// Label used in the persisted file and in user-facing text.
    pub const fn label(&self) -> &'static str {
        match self {
            ProxyType::None => "None",
            ProxyType::Socks5 => "SOCKS5",
            ProxyType::Http => "HTTP",
        }
    }

    /// URL scheme for the proxy URL, or `None` when no proxy is used.
    pub const fn scheme(&self) -> Option<&'static str> {
        match self {
            ProxyType::None => None,
            ProxyType::Socks5 => Some("socks5"),
            ProxyType::Http => Some("http"),
        }
    }

    /// Exact match against the persisted labels.
    pub fn from_label(label: &str) -> Option<ProxyType> {
        ProxyType::ALL.into_iter().find(|kind| kind.label() == label)
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, ProxyType::None)
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when text does not name a known proxy type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown proxy type `{0}` (expected one of: None, SOCKS5, HTTP)")]
pub struct UnknownProxyType(pub String);

impl FromStr for ProxyType {
    type Err = UnknownProxyType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ProxyType::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownProxyType(trimmed.to_string()))
    }
}

/// Form fields a presentation layer hands over before each launch.
///
/// `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub proxy_type: Option<ProxyType>,
    pub ip: Option<String>,
    pub port: Option<String>,
}

/// The persisted proxy preference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProxyConfig {
    pub proxy_type: ProxyType,
    pub ip: String,
    pub port: String,
}

/// On-disk shape; tolerant of missing fields and unknown labels.
#[derive(Debug, Deserialize)]
struct RawProxyConfig {
    #[serde(default)]
    proxy_type: Option<String>,
    #[serde(default)]
    ip: Option<String>,
    #[serde(default)]
    port: Option<String>,
}

impl ProxyConfig {
    pub fn new(proxy_type: ProxyType, ip: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            proxy_type,
            ip: ip.into(),
            port: port.into(),
        }
    }

    /// Check the fields required by the selected proxy type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.proxy_type.is_none() {
            return Ok(());
        }
        if self.ip.is_empty() {
            return Err(ValidationError::MissingIp);
        }
        match self.port.parse::<u16>() {
            Ok(port) if port >= 1 => Ok(()),
            _ => Err(ValidationError::InvalidPort),
        }
    }

    /// `<scheme>://<ip>:<port>`, or an empty string for `ProxyType::None`.
    ///
    /// Performs no validation; call [`ProxyConfig::validate`] first.
    pub fn proxy_url(&self) -> String {
        match self.proxy_type.scheme() {
            Some(scheme) => format!("{scheme}://{}:{}", self.ip, self.port),
            None => String::new(),
        }
    }

    /// Replace fields from user input, trimming surrounding whitespace.
    pub fn apply_input(&mut self, input: FormInput) {
        if let Some(proxy_type) = input.proxy_type {
            self.proxy_type = proxy_type;
        }
        if let Some(ip) = input.ip {
            self.ip = ip.trim().to_string();
        }
        if let Some(port) = input.port {
            self.port = port.trim().to_string();
        }
    }

    /// Encode as indented JSON with the fields `proxy_type`, `ip`, `port`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Decode persisted JSON.
    ///
    /// The document must be a JSON object. Missing fields default to empty
    /// and a `proxy_type` that is not exactly a persisted label falls back
    /// to `None`; anything else is an error.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("expected a JSON object"));
        }
        let raw: RawProxyConfig = serde_json::from_value(value)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawProxyConfig) -> Self {
        let proxy_type = match raw.proxy_type.as_deref() {
            None => ProxyType::None,
            Some(label) => ProxyType::from_label(label).unwrap_or_else(|| {
                warn!(
                    target: "warpcord::store",
                    proxy_type = label,
                    "Ignoring unrecognized proxy type in saved configuration"
                );
                ProxyType::None
            }),
        };

        Self {
            proxy_type,
            ip: raw.ip.unwrap_or_default(),
            port: raw.port.unwrap_or_default(),
        }
    }
}
