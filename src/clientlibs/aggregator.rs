//! Category-to-include-path aggregation.
//!
//! # Responsibilities
//! - Apply the exclude-all short circuit
//! - Fall back to the built-in default categories
//! - Collect include paths per asset kind, deduplicated
//! - Prepend the request context path when present
//!
//! # Design Decisions
//! - Stateless; every call re-resolves against the manager
//! - Membership is a set; emission order is sorted for determinism but is
//!   not part of the external contract
//! - Both output keys are always present, even when empty

use std::collections::BTreeSet;

use serde::Serialize;

use crate::clientlibs::library::AssetKind;
use crate::clientlibs::manager::{LibraryError, LibraryManager};
use crate::config::ClientLibsConfig;

/// Built-in categories used when none are configured.
pub const DEFAULT_CATEGORIES: [&str; 2] = ["authoring.limit-indicator", "authoring.placeholder"];

/// Combined include listing, grouped by asset kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LibraryIncludes {
    pub js: Vec<String>,
    pub css: Vec<String>,
}

/// Aggregates configured categories into a combined include listing.
#[derive(Debug, Clone)]
pub struct LibraryAggregator {
    categories: Vec<String>,
    exclude_all: bool,
}

impl LibraryAggregator {
    pub fn new(config: &ClientLibsConfig) -> Self {
        Self {
            categories: config.categories.clone(),
            exclude_all: config.exclude_all,
        }
    }

    /// Effective categories: the configured list, or the built-in
    /// defaults when none are configured.
    pub fn effective_categories(&self) -> Vec<String> {
        if self.categories.is_empty() {
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
        } else {
            self.categories.clone()
        }
    }

    /// Resolve the include listing against the given manager.
    ///
    /// A non-blank `context_path` is prepended to every emitted path.
    /// Resolution failure propagates; translating it into a request
    /// failure is the caller's job.
    pub fn resolve(
        &self,
        manager: &dyn LibraryManager,
        context_path: Option<&str>,
    ) -> Result<LibraryIncludes, LibraryError> {
        if self.exclude_all {
            return Ok(LibraryIncludes::default());
        }

        let handles = manager.resolve(&self.effective_categories())?;
        let minified = manager.minify_enabled();
        let prefix = context_path.filter(|p| !p.trim().is_empty()).unwrap_or("");

        let mut js = BTreeSet::new();
        let mut css = BTreeSet::new();
        for handle in &handles {
            js.insert(format!(
                "{}{}",
                prefix,
                handle.include_path(AssetKind::Script, minified)
            ));
            css.insert(format!(
                "{}{}",
                prefix,
                handle.include_path(AssetKind::Stylesheet, minified)
            ));
        }

        Ok(LibraryIncludes {
            js: js.into_iter().collect(),
            css: css.into_iter().collect(),
        })
    }
}
