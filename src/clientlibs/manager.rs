//! Library resolution.
//!
//! # Responsibilities
//! - Resolve category identifiers to library handles (set semantics)
//! - Report the current minification setting
//!
//! # Design Decisions
//! - Trait seam: the aggregator never knows where libraries come from
//! - A category with no match resolves to nothing, silently
//! - A failing backend is a dependency error, propagated to the caller

use std::collections::HashSet;

use thiserror::Error;

use crate::clientlibs::library::LibraryHandle;
use crate::config::ClientLibsConfig;

/// Error raised when library resolution itself fails.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("library backend unavailable: {0}")]
    Unavailable(String),
}

/// Resolves category identifiers to client libraries.
pub trait LibraryManager: Send + Sync {
    /// Resolve the given categories to the set of matching libraries.
    /// Duplicates across categories collapse; unmatched categories are
    /// omitted, not an error.
    fn resolve(&self, categories: &[String]) -> Result<HashSet<LibraryHandle>, LibraryError>;

    /// Whether minified include paths should be served.
    fn minify_enabled(&self) -> bool;
}

/// Library manager backed by the libraries declared in configuration.
pub struct StaticLibraryManager {
    libraries: Vec<(LibraryHandle, Vec<String>)>,
    minify: bool,
}

impl StaticLibraryManager {
    pub fn from_config(config: &ClientLibsConfig) -> Self {
        let libraries = config
            .libraries
            .iter()
            .map(|lib| (LibraryHandle::new(lib.path.clone()), lib.categories.clone()))
            .collect();
        Self {
            libraries,
            minify: config.minify,
        }
    }
}

impl LibraryManager for StaticLibraryManager {
    fn resolve(&self, categories: &[String]) -> Result<HashSet<LibraryHandle>, LibraryError> {
        let mut handles = HashSet::new();
        for (handle, lib_categories) in &self.libraries {
            if categories.iter().any(|c| lib_categories.contains(c)) {
                handles.insert(handle.clone());
            }
        }
        Ok(handles)
    }

    fn minify_enabled(&self) -> bool {
        self.minify
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibraryConfig;

    fn manager() -> StaticLibraryManager {
        StaticLibraryManager::from_config(&ClientLibsConfig {
            libraries: vec![
                LibraryConfig {
                    path: "/etc/clientlibs/limit".to_string(),
                    categories: vec!["authoring.limit-indicator".to_string()],
                },
                LibraryConfig {
                    path: "/etc/clientlibs/shared".to_string(),
                    categories: vec!["site.base".to_string(), "site.extra".to_string()],
                },
            ],
            minify: true,
            ..ClientLibsConfig::default()
        })
    }

    #[test]
    fn test_resolves_matching_categories() {
        let handles = manager()
            .resolve(&["authoring.limit-indicator".to_string()])
            .unwrap();
        assert_eq!(handles.len(), 1);
        assert!(handles.contains(&LibraryHandle::new("/etc/clientlibs/limit")));
    }

    #[test]
    fn test_unknown_category_resolves_to_nothing() {
        let handles = manager().resolve(&["no.such.category".to_string()]).unwrap();
        assert!(handles.is_empty());
    }

    #[test]
    fn test_two_categories_same_library_collapse() {
        let handles = manager()
            .resolve(&["site.base".to_string(), "site.extra".to_string()])
            .unwrap();
        assert_eq!(handles.len(), 1);
    }

    #[test]
    fn test_minify_from_config() {
        assert!(manager().minify_enabled());
    }
}
