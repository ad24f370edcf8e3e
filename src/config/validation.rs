//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check endpoint and library paths are absolute
//! - Detect duplicate library declarations
//! - Validate the bind address
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config
//! - Runs before a config is accepted into the system
//! - A blank forms suffix is not an error; the router substitutes the
//!   default at construction

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic configuration problem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("clientlibs endpoint path must be absolute: {0}")]
    RelativeEndpointPath(String),

    #[error("library path must be absolute: {0}")]
    RelativeLibraryPath(String),

    #[error("duplicate library path: {0}")]
    DuplicateLibraryPath(String),
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if !config.clientlibs.path.starts_with('/') {
        errors.push(ValidationError::RelativeEndpointPath(
            config.clientlibs.path.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for library in &config.clientlibs.libraries {
        if !library.path.starts_with('/') {
            errors.push(ValidationError::RelativeLibraryPath(library.path.clone()));
        }
        if !seen.insert(library.path.as_str()) {
            errors.push(ValidationError::DuplicateLibraryPath(library.path.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
