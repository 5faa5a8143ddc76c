//! Canonical and localized path types.
//!
//! A [`CanonicalPath`] has had its locale prefix removed; a [`LocalizedPath`]
//! is what a visitor sees in the address bar. Only canonical paths can be
//! localized, so a path that already carries a prefix cannot be fed back into
//! [`crate::routing::resolver::localize`] by mistake.
//!
//! A canonical path says nothing about its literal segments: after
//! [`strip_locale_prefix`](crate::routing::resolver::strip_locale_prefix) they
//! are still in the source locale (`/steden`). Table-aware localization
//! therefore takes the source locale alongside the path.

use serde::Serialize;

use crate::locale::Locale;

/// A path with its leading locale prefix stripped.
///
/// Always starts with `/`. Constructed by
/// [`strip_locale_prefix`](crate::routing::resolver::strip_locale_prefix) or by
/// the route table from a matched route. Only one prefix is removed, so a
/// double-prefixed input (`/fr/fr/x`) leaves its second locale segment in
/// place; [`is_prefix_free`](Self::is_prefix_free) reports that case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Strip the locale prefix (if any) from `path`.
    pub fn from_path(path: &str) -> Self {
        super::resolver::strip_locale_prefix(path)
    }

    /// Wrap a string already known to be prefix-free and `/`-rooted.
    pub(crate) fn new_unchecked(path: String) -> Self {
        debug_assert!(path.starts_with('/'));
        Self(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// `false` when the first segment is still a locale code.
    pub fn is_prefix_free(&self) -> bool {
        let first = self.0[1..].split('/').next().unwrap_or_default();
        Locale::from_code(first).is_none()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A concrete, locale-specific path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LocalizedPath {
    locale: Locale,
    path: String,
}

impl LocalizedPath {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn into_string(self) -> String {
        self.path
    }

    /// Absolute URL under `base_url` (no trailing slash expected on the base).
    pub fn absolute(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

impl std::fmt::Display for LocalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for LocalizedPath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

/// Prepend the locale prefix to an unprefixed, `/`-rooted path.
///
/// The prefixed home page is `/fr`, not `/fr/`.
pub(crate) fn with_prefix(path: &str, locale: Locale) -> LocalizedPath {
    let path = match locale.prefix() {
        None => path.to_string(),
        Some(prefix) if path == "/" || path.is_empty() => prefix.to_string(),
        Some(prefix) => format!("{}{}", prefix, path),
    };
    LocalizedPath { locale, path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_prefix_base_locale_is_unchanged() {
        assert_eq!(with_prefix("/antwerpen", Locale::Nl).as_str(), "/antwerpen");
        assert_eq!(with_prefix("/", Locale::Nl).as_str(), "/");
    }

    #[test]
    fn test_with_prefix_home() {
        assert_eq!(with_prefix("/", Locale::Fr).as_str(), "/fr");
        assert_eq!(with_prefix("/", Locale::En).as_str(), "/en");
    }

    #[test]
    fn test_with_prefix_nested() {
        let path = with_prefix("/antwerpen/antwerpen", Locale::En);
        assert_eq!(path.as_str(), "/en/antwerpen/antwerpen");
        assert_eq!(path.locale(), Locale::En);
    }

    #[test]
    fn test_absolute() {
        let path = with_prefix("/gent", Locale::Fr);
        assert_eq!(path.absolute("https://thrifter.be"), "https://thrifter.be/fr/gent");
        assert_eq!(path.absolute("https://thrifter.be/"), "https://thrifter.be/fr/gent");
    }

    #[test]
    fn test_canonical_from_path() {
        assert_eq!(CanonicalPath::from_path("/fr/gent").as_str(), "/gent");
        assert!(CanonicalPath::from_path("").is_root());
    }

    #[test]
    fn test_is_prefix_free() {
        assert!(CanonicalPath::from_path("/fr/gent").is_prefix_free());
        assert!(CanonicalPath::from_path("/friendly").is_prefix_free());
        assert!(CanonicalPath::root().is_prefix_free());
        assert!(!CanonicalPath::from_path("/fr/fr/gent").is_prefix_free());
        assert!(!CanonicalPath::from_path("/en/nl").is_prefix_free());
    }
}
