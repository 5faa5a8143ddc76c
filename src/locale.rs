//! Supported site locales.
//!
//! Dutch is the base locale and is served without a URL prefix. French and
//! English live under `/fr` and `/en`.

use serde::{Deserialize, Serialize};

/// A site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Dutch (base locale, no prefix)
    Nl,
    /// French
    Fr,
    /// English
    En,
}

impl Locale {
    /// The locale served without a prefix.
    pub const BASE: Locale = Locale::Nl;

    /// Every locale, base first.
    pub const ALL: [Locale; 3] = [Locale::Nl, Locale::Fr, Locale::En];

    /// Locales carrying a URL prefix, in detection order.
    pub const PREFIXED: [Locale; 2] = [Locale::Fr, Locale::En];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Nl => "nl",
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    /// URL prefix (`/fr`), or `None` for the base locale.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Locale::Nl => None,
            Locale::Fr => Some("/fr"),
            Locale::En => Some("/en"),
        }
    }

    pub fn is_base(&self) -> bool {
        *self == Self::BASE
    }

    /// Look up a locale by its code, without allocating.
    pub fn from_code(code: &str) -> Option<Locale> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::BASE
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s.trim()).ok_or_else(|| format!("Invalid locale: {}", s))
    }
}
