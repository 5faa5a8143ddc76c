//! Locale-aware routing.
//!
//! - [`resolver`]: locale prefix detection and stripping (pure string functions)
//! - [`path`]: canonical vs. localized path types
//! - [`template`]: path templates with named placeholders
//! - [`table`]: the route pattern table shared by the build and the server

pub mod path;
pub mod resolver;
pub mod table;
pub mod template;

pub use path::{CanonicalPath, LocalizedPath};
pub use resolver::{
    detect_locale_prefix, get_canonical_path_for_switching, get_locale_from_path, localize,
    strip_locale_prefix, validate_no_double_prefix, SwitchParts,
};
pub use table::{RouteEntry, RouteKind, RouteMatch, RouteTable};
pub use template::{RouteParams, RouteTemplate, Segment};

use crate::locale::Locale;

/// Route configuration and substitution errors.
///
/// Configuration variants are fatal when the table is compiled at start-up.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("invalid route template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("placeholder {{{name}}} appears twice in {template:?}")]
    DuplicatePlaceholder { template: String, name: String },

    #[error("{kind} ({locale}): localized template {localized:?} has placeholders {found:?}, expected {expected:?}")]
    PlaceholderMismatch {
        kind: RouteKind,
        locale: Locale,
        localized: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("{kind} has no template for locale {locale}")]
    MissingLocale { kind: RouteKind, locale: Locale },

    #[error("localized literal {literal:?} ({locale}) is used for both {first:?} and {second:?}")]
    AmbiguousLiteral {
        locale: Locale,
        literal: String,
        first: String,
        second: String,
    },

    #[error("localized literal {literal:?} ({locale}) collides with a locale prefix")]
    LiteralShadowsLocale { locale: Locale, literal: String },

    #[error("{first} and {second} match the same paths in locale {locale} ({shape})")]
    DuplicateRoute {
        locale: Locale,
        first: RouteKind,
        second: RouteKind,
        shape: String,
    },

    #[error("no route registered for {0}")]
    UnknownRoute(RouteKind),

    #[error("missing value for {{{name}}} in {template:?}")]
    MissingParam { template: String, name: String },

    #[error("invalid value {value:?} for {{{name}}}")]
    InvalidParamValue { name: String, value: String },
}
