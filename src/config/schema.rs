//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Root configuration for the content gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address, timeouts).
    pub listener: ListenerConfig,

    /// Form-submission routing settings.
    pub forms: FormsConfig,

    /// Dynamic client-library settings.
    pub clientlibs: ClientLibsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Form-submission routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Request suffix identifying form POST requests. Blank falls back
    /// to the built-in default at router construction.
    pub suffix: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            suffix: crate::routing::suffix::DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// Dynamic client-library configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientLibsConfig {
    /// Path of the combined JSON listing endpoint.
    pub path: String,

    /// Categories contributing to the listing; empty selects the
    /// built-in defaults.
    pub categories: Vec<String>,

    /// When true, the listing is empty regardless of categories.
    pub exclude_all: bool,

    /// Serve minified include paths.
    pub minify: bool,

    /// Libraries known to this gateway.
    pub libraries: Vec<LibraryConfig>,
}

impl Default for ClientLibsConfig {
    fn default() -> Self {
        Self {
            path: "/etc/clientlibs/dynamic.json".to_string(),
            categories: Vec::new(),
            exclude_all: false,
            minify: false,
            libraries: Vec::new(),
        }
    }
}

/// One declared client library.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Repository path of the library, without extension.
    pub path: String,

    /// Categories this library belongs to.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
