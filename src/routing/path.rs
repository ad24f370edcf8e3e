//! Path-suffix derivation.
//!
//! The gateway addresses resources as `<resource>.<ext></suffix...>`; the
//! suffix is everything from the first `/` after the extension dot. Paths
//! without an extension carry no suffix.

/// Derive the suffix of a request path, if any.
///
/// `/content/page.html/submit/form/contact` yields
/// `/submit/form/contact`; `/content/page.html` yields `None`.
pub fn suffix_of(path: &str) -> Option<&str> {
    let dot = path.find('.')?;
    let slash = path[dot..].find('/')?;
    Some(&path[dot + slash..])
}
