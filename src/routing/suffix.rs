//! Form-submission suffix matching.
//!
//! # Responsibilities
//! - Decide whether a request suffix marks a form submission
//! - Extract the form selector following the configured suffix
//!
//! # Design Decisions
//! - The configured suffix is normalized at construction; a blank value
//!   falls back to the default so the matcher never sees an empty prefix
//! - Matching is exact-or-prefix: the suffix itself, or suffix + "/..."

use crate::config::FormsConfig;

/// Suffix used when the configured value is blank.
pub const DEFAULT_SUFFIX: &str = "/submit/form";

/// Routes form POST requests by their path suffix.
#[derive(Debug, Clone)]
pub struct FormsRouter {
    suffix: String,
}

impl FormsRouter {
    /// Build a router from configuration. A blank suffix is replaced by
    /// [`DEFAULT_SUFFIX`].
    pub fn new(config: &FormsConfig) -> Self {
        let suffix = if config.suffix.trim().is_empty() {
            tracing::debug!(default = DEFAULT_SUFFIX, "Blank forms suffix, using default");
            DEFAULT_SUFFIX.to_string()
        } else {
            config.suffix.clone()
        };
        Self { suffix }
    }

    /// The configured suffix. Never blank.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// True when the request suffix equals the configured suffix or
    /// extends it by at least one more segment.
    pub fn has_valid_suffix(&self, request_suffix: Option<&str>) -> bool {
        match request_suffix {
            Some(s) => s == self.suffix || s.starts_with(&format!("{}/", self.suffix)),
            None => false,
        }
    }

    /// The form selector: the path segment immediately after the
    /// configured suffix, trimmed. `None` when the request does not
    /// extend past the configured suffix.
    pub fn form_selector(&self, request_suffix: Option<&str>) -> Option<String> {
        let request_suffix = request_suffix?;
        if request_suffix == self.suffix
            || !request_suffix.starts_with(&format!("{}/", self.suffix))
        {
            return None;
        }

        let segments = self.suffix.split('/').filter(|s| !s.is_empty()).count();
        if segments < 1 {
            return None;
        }

        let selector = request_suffix
            .split('/')
            .filter(|s| !s.is_empty())
            .nth(segments)?
            .trim();
        if selector.is_empty() {
            None
        } else {
            Some(selector.to_string())
        }
    }
}
