//! Client-library handles and asset kinds.

/// Kind of client-side asset a library can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Script,
    Stylesheet,
}

impl AssetKind {
    /// File extension for this kind, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            AssetKind::Script => ".js",
            AssetKind::Stylesheet => ".css",
        }
    }
}

/// Reference to one bundle of client-side assets.
///
/// Identity is the repository path; two categories resolving to the same
/// path collapse to a single handle in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LibraryHandle {
    path: String,
}

impl LibraryHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Repository path of the library, without extension.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Include path for the given kind, optionally the minified variant.
    pub fn include_path(&self, kind: AssetKind, minified: bool) -> String {
        let min = if minified { ".min" } else { "" };
        format!("{}{}{}", self.path, min, kind.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_path_variants() {
        let lib = LibraryHandle::new("/etc/clientlibs/limit");
        assert_eq!(
            lib.include_path(AssetKind::Script, false),
            "/etc/clientlibs/limit.js"
        );
        assert_eq!(
            lib.include_path(AssetKind::Stylesheet, false),
            "/etc/clientlibs/limit.css"
        );
        assert_eq!(
            lib.include_path(AssetKind::Script, true),
            "/etc/clientlibs/limit.min.js"
        );
        assert_eq!(
            lib.include_path(AssetKind::Stylesheet, true),
            "/etc/clientlibs/limit.min.css"
        );
    }

    #[test]
    fn test_handle_identity_is_path() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(LibraryHandle::new("/etc/clientlibs/a"));
        set.insert(LibraryHandle::new("/etc/clientlibs/a"));
        set.insert(LibraryHandle::new("/etc/clientlibs/b"));
        assert_eq!(set.len(), 2);
    }
}
