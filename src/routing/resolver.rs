//! Locale prefix detection and stripping.
//!
//! Everything here is a pure function over strings and never fails: a path
//! that cannot be interpreted is treated as already canonical. Language
//! switching must always go "strip to canonical, then localize", which is
//! what keeps `/fr/fr/...` from ever being produced.

use serde::Serialize;
use url::Url;

use super::path::{with_prefix, CanonicalPath, LocalizedPath};
use crate::locale::Locale;

/// Base used to parse relative paths as URLs.
const DUMMY_BASE: &str = "http://dummy.com";

/// Ensure the path starts with `/`. Empty input becomes `/`.
fn normalize(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Length of the matched prefix, if `normalized` carries `locale`'s prefix as
/// a whole leading segment.
fn matched_prefix_len(normalized: &str, locale: Locale) -> Option<usize> {
    let prefix = locale.prefix()?;
    let rest = normalized.strip_prefix(prefix)?;
    (rest.is_empty() || rest.starts_with('/')).then_some(prefix.len())
}

/// Detect the locale prefix of a path.
///
/// Matches `/fr` exactly or `/fr/...`; `/friendly` and `/french-toast` do not
/// match. Returns `None` for base-locale paths, `/` and empty input.
pub fn detect_locale_prefix(path: &str) -> Option<Locale> {
    if path.is_empty() {
        return None;
    }
    let normalized = normalize(path);
    Locale::PREFIXED
        .into_iter()
        .find(|locale| matched_prefix_len(&normalized, *locale).is_some())
}

/// Remove the locale prefix from a path.
///
/// `/fr/antwerpen` -> `/antwerpen`, `/fr` -> `/`, `/antwerpen` -> `/antwerpen`.
/// Only the first prefix is removed: `/fr/fr/antwerpen` -> `/fr/antwerpen`.
/// Use [`validate_no_double_prefix`] to detect such input.
pub fn strip_locale_prefix(path: &str) -> CanonicalPath {
    if path.is_empty() || path == "/" {
        return CanonicalPath::root();
    }
    let normalized = normalize(path);

    for locale in Locale::PREFIXED {
        if let Some(len) = matched_prefix_len(&normalized, locale) {
            let rest = &normalized[len..];
            return if rest.is_empty() {
                CanonicalPath::root()
            } else {
                CanonicalPath::new_unchecked(rest.to_string())
            };
        }
    }

    CanonicalPath::new_unchecked(normalized)
}

/// `false` if the path starts with two consecutive locale segments
/// (`/fr/fr/...`, `/en/fr`, `/nl/nl/...`). Empty input is valid.
pub fn validate_no_double_prefix(path: &str) -> bool {
    if path.is_empty() {
        return true;
    }
    let normalized = normalize(path);
    let mut segments = normalized[1..].split('/');
    let is_locale = |segment: Option<&str>| {
        segment.is_some_and(|s| Locale::ALL.iter().any(|l| l.code() == s))
    };
    !(is_locale(segments.next()) && is_locale(segments.next()))
}

/// Locale of a path, defaulting to the base locale when no prefix is present.
pub fn get_locale_from_path(path: &str) -> Locale {
    detect_locale_prefix(path).unwrap_or(Locale::BASE)
}

/// Prefix a canonical path for `locale`.
///
/// This is the only way to turn a path into a localized one, and it only
/// accepts canonical input.
pub fn localize(canonical: &CanonicalPath, locale: Locale) -> LocalizedPath {
    with_prefix(canonical.as_str(), locale)
}

/// A full path split for language switching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchParts {
    /// Locale the input path was in
    pub locale: Locale,
    /// Path with the locale prefix stripped
    pub pathname: CanonicalPath,
    /// Query string including the leading `?`, or empty
    pub search: String,
    /// Fragment including the leading `#`, or empty
    pub hash: String,
}

/// Split a full path (`/fr/antwerpen?search=test#section`) into its canonical
/// pathname, query string and fragment.
///
/// Relative input is resolved against a dummy base authority. If parsing
/// fails the whole input is treated as a path.
pub fn get_canonical_path_for_switching(full_path: &str) -> SwitchParts {
    let parsed = Url::parse(DUMMY_BASE).and_then(|base| base.join(full_path));

    match parsed {
        Ok(url) => {
            let search = url
                .query()
                .filter(|q| !q.is_empty())
                .map(|q| format!("?{}", q))
                .unwrap_or_default();
            let hash = url
                .fragment()
                .filter(|f| !f.is_empty())
                .map(|f| format!("#{}", f))
                .unwrap_or_default();
            SwitchParts {
                locale: get_locale_from_path(url.path()),
                pathname: strip_locale_prefix(url.path()),
                search,
                hash,
            }
        }
        Err(e) => {
            tracing::debug!("Treating {:?} as a bare path: {}", full_path, e);
            SwitchParts {
                locale: get_locale_from_path(full_path),
                pathname: strip_locale_prefix(full_path),
                search: String::new(),
                hash: String::new(),
            }
        }
    }
}
