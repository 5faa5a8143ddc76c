//! Route pattern table.
//!
//! Every page shape of the site is declared once here, with a canonical
//! template and one localized template per locale. The build-time sitemap
//! enumerator and the request-time reroute both go through this table, so what
//! is generated is exactly what is served.
//!
//! Localized templates are derived from the canonical one by translating
//! literal segments through [`LOCALIZED_LITERALS`]. Placeholders keep their
//! position in every locale.

use serde::Serialize;

use super::path::{with_prefix, CanonicalPath, LocalizedPath};
use super::resolver::{self, get_canonical_path_for_switching};
use super::template::{RouteParams, RouteTemplate, Segment};
use super::RouteError;
use crate::locale::Locale;

/// Canonical literal -> localized literal, per locale.
///
/// Literals missing from this table are the same in every locale.
pub const LOCALIZED_LITERALS: &[(&str, Locale, &str)] = &[
    ("provinces", Locale::Nl, "provincies"),
    ("provinces", Locale::Fr, "provinces"),
    ("provinces", Locale::En, "provinces"),
    ("cities", Locale::Nl, "steden"),
    ("cities", Locale::Fr, "villes"),
    ("cities", Locale::En, "cities"),
    ("categories", Locale::Nl, "categorieen"),
    ("categories", Locale::Fr, "categories"),
    ("categories", Locale::En, "categories"),
];

/// Page shapes of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteKind {
    Home,
    ProvincesList,
    CitiesList,
    CategoriesList,
    CategoryDetail,
    ProvinceDetail,
    ProvinceCategory,
    CityDetail,
    CityCategory,
    StoreDetail,
}

impl RouteKind {
    pub const ALL: [RouteKind; 10] = [
        RouteKind::Home,
        RouteKind::ProvincesList,
        RouteKind::CitiesList,
        RouteKind::CategoriesList,
        RouteKind::CategoryDetail,
        RouteKind::ProvinceDetail,
        RouteKind::ProvinceCategory,
        RouteKind::CityDetail,
        RouteKind::CityCategory,
        RouteKind::StoreDetail,
    ];

    pub fn canonical_template(&self) -> &'static str {
        match self {
            RouteKind::Home => "/",
            RouteKind::ProvincesList => "/provinces",
            RouteKind::CitiesList => "/cities",
            RouteKind::CategoriesList => "/categories",
            RouteKind::CategoryDetail => "/categories/{category}",
            RouteKind::ProvinceDetail => "/{province}",
            RouteKind::ProvinceCategory => "/{province}/categories/{category}",
            RouteKind::CityDetail => "/{province}/{city}",
            RouteKind::CityCategory => "/{province}/{city}/categories/{category}",
            RouteKind::StoreDetail => "/{province}/{city}/{store}",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::Home => "home",
            RouteKind::ProvincesList => "provinces-list",
            RouteKind::CitiesList => "cities-list",
            RouteKind::CategoriesList => "categories-list",
            RouteKind::CategoryDetail => "category-detail",
            RouteKind::ProvinceDetail => "province-detail",
            RouteKind::ProvinceCategory => "province-category",
            RouteKind::CityDetail => "city-detail",
            RouteKind::CityCategory => "city-category",
            RouteKind::StoreDetail => "store-detail",
        }
    }
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Localized form of a canonical literal segment.
pub fn localized_literal<'a>(
    literals: &'a [(&'a str, Locale, &'a str)],
    canonical: &'a str,
    locale: Locale,
) -> &'a str {
    literals
        .iter()
        .find(|(c, l, _)| *c == canonical && *l == locale)
        .map(|(_, _, localized)| *localized)
        .unwrap_or(canonical)
}

/// A matched route: which page, with which placeholder values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RouteMatch {
    pub kind: RouteKind,
    pub params: RouteParams,
}

impl RouteMatch {
    pub fn new(kind: RouteKind, params: RouteParams) -> Self {
        Self { kind, params }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

/// One row of the table: a canonical template and its localized forms.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    kind: RouteKind,
    canonical: RouteTemplate,
    /// Unprefixed localized templates, indexed like [`Locale::ALL`]
    localized: Vec<RouteTemplate>,
}

impl RouteEntry {
    /// Build an entry with localized templates derived from `literals`.
    pub fn derived(
        kind: RouteKind,
        literals: &[(&str, Locale, &str)],
    ) -> Result<Self, RouteError> {
        let canonical = RouteTemplate::parse(kind.canonical_template())?;
        let localized: Vec<(Locale, String)> = Locale::ALL
            .into_iter()
            .map(|locale| (locale, derive_template(&canonical, literals, locale)))
            .collect();
        let borrowed: Vec<(Locale, &str)> =
            localized.iter().map(|(l, t)| (*l, t.as_str())).collect();
        Self::with_templates(kind, kind.canonical_template(), &borrowed)
    }

    /// Build an entry from explicit templates, checking that every locale is
    /// present and uses the canonical placeholders in the same order.
    pub fn with_templates(
        kind: RouteKind,
        canonical: &str,
        localized: &[(Locale, &str)],
    ) -> Result<Self, RouteError> {
        let canonical = RouteTemplate::parse(canonical)?;
        let expected: Vec<String> = canonical.params().map(String::from).collect();

        let mut templates = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let source = localized
                .iter()
                .find(|(l, _)| *l == locale)
                .map(|(_, t)| *t)
                .ok_or(RouteError::MissingLocale { kind, locale })?;
            let template = RouteTemplate::parse(source)?;
            let found: Vec<String> = template.params().map(String::from).collect();
            if found != expected {
                return Err(RouteError::PlaceholderMismatch {
                    kind,
                    locale,
                    localized: source.to_string(),
                    expected,
                    found,
                });
            }
            templates.push(template);
        }

        Ok(Self {
            kind,
            canonical,
            localized: templates,
        })
    }

    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    pub fn canonical(&self) -> &RouteTemplate {
        &self.canonical
    }

    /// Unprefixed template for `locale`.
    pub fn localized(&self, locale: Locale) -> &RouteTemplate {
        &self.localized[locale as usize]
    }

    fn specificity(&self) -> (usize, usize) {
        (self.canonical.literal_count(), self.canonical.param_count())
    }
}

fn derive_template(
    canonical: &RouteTemplate,
    literals: &[(&str, Locale, &str)],
    locale: Locale,
) -> String {
    if canonical.segments().is_empty() {
        return "/".to_string();
    }
    let mut template = String::new();
    for segment in canonical.segments() {
        template.push('/');
        match segment {
            Segment::Literal(lit) => template.push_str(localized_literal(literals, lit, locale)),
            Segment::Param(name) => {
                template.push('{');
                template.push_str(name);
                template.push('}');
            }
        }
    }
    template
}

/// Reject literal tables that would break the canonical <-> localized round trip.
fn validate_literals(literals: &[(&str, Locale, &str)]) -> Result<(), RouteError> {
    for (i, (canonical, locale, localized)) in literals.iter().enumerate() {
        if Locale::from_code(localized).is_some() {
            return Err(RouteError::LiteralShadowsLocale {
                locale: *locale,
                literal: localized.to_string(),
            });
        }
        for (other_canonical, other_locale, other_localized) in &literals[i + 1..] {
            if other_locale == locale && other_localized == localized && other_canonical != canonical {
                return Err(RouteError::AmbiguousLiteral {
                    locale: *locale,
                    literal: localized.to_string(),
                    first: canonical.to_string(),
                    second: other_canonical.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// The compiled, ordered route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// The site's route table: every [`RouteKind`] with the standard literals.
    pub fn standard() -> Result<Self, RouteError> {
        Self::from_literals(&RouteKind::ALL, LOCALIZED_LITERALS)
    }

    /// Table for `kinds` with localized templates derived from `literals`.
    pub fn from_literals(
        kinds: &[RouteKind],
        literals: &[(&str, Locale, &str)],
    ) -> Result<Self, RouteError> {
        validate_literals(literals)?;
        let entries = kinds
            .iter()
            .map(|kind| RouteEntry::derived(*kind, literals))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Validate and order entries, most specific first.
    pub fn new(mut entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        for locale in Locale::ALL {
            let mut seen: Vec<(String, RouteKind)> = Vec::new();
            for entry in &entries {
                let template = entry.localized(locale);
                for segment in template.segments() {
                    if let Segment::Literal(lit) = segment {
                        if Locale::from_code(lit).is_some() {
                            return Err(RouteError::LiteralShadowsLocale {
                                locale,
                                literal: lit.clone(),
                            });
                        }
                    }
                }
                let shape = template.shape();
                if let Some((_, first)) = seen.iter().find(|(s, _)| *s == shape) {
                    return Err(RouteError::DuplicateRoute {
                        locale,
                        first: *first,
                        second: entry.kind,
                        shape,
                    });
                }
                seen.push((shape, entry.kind));
            }
        }

        // Stable: declaration order breaks ties.
        entries.sort_by_key(|e| std::cmp::Reverse(e.specificity()));
        tracing::debug!("Compiled route table with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Entries in match order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn entry(&self, kind: RouteKind) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// Match an unprefixed path against `locale`'s templates. First match wins.
    pub fn match_localized(&self, locale: Locale, unprefixed: &str) -> Option<RouteMatch> {
        self.entries.iter().find_map(|entry| {
            entry
                .localized(locale)
                .matches(unprefixed)
                .map(|params| RouteMatch::new(entry.kind, params))
        })
    }

    /// Resolve an incoming path to its locale and route.
    pub fn resolve(&self, path: &str) -> Option<(Locale, RouteMatch)> {
        let locale = resolver::get_locale_from_path(path);
        let stripped = resolver::strip_locale_prefix(path);
        self.match_localized(locale, stripped.as_str())
            .map(|route| (locale, route))
    }

    /// Localized path for a route in `locale`.
    pub fn url_for(
        &self,
        kind: RouteKind,
        locale: Locale,
        params: &RouteParams,
    ) -> Result<LocalizedPath, RouteError> {
        let entry = self.entry(kind).ok_or(RouteError::UnknownRoute(kind))?;
        let path = entry.localized(locale).render(params)?;
        Ok(with_prefix(&path, locale))
    }

    /// Canonical path of a matched route.
    pub fn canonical_path(&self, route: &RouteMatch) -> Result<CanonicalPath, RouteError> {
        let entry = self
            .entry(route.kind)
            .ok_or(RouteError::UnknownRoute(route.kind))?;
        entry
            .canonical
            .render(&route.params)
            .map(CanonicalPath::new_unchecked)
    }

    /// Reduce any incoming path to its locale and canonical form, translating
    /// localized literals back (`/categorieen/boeken` -> `/categories/boeken`).
    ///
    /// Paths matching no route are only prefix-stripped.
    pub fn canonicalize(&self, path: &str) -> (Locale, CanonicalPath) {
        let locale = resolver::get_locale_from_path(path);
        let stripped = resolver::strip_locale_prefix(path);
        let canonical = self
            .match_localized(locale, stripped.as_str())
            .and_then(|route| self.canonical_path(&route).ok())
            .unwrap_or(stripped);
        (locale, canonical)
    }

    /// Localize a stripped path taken from a `source` page, translating its
    /// literals for `target` (`Nl`, `/categorieen/boeken` -> `/fr/categories/boeken`).
    ///
    /// `stripped` is matched against `source`'s templates, so it must come from
    /// [`strip_locale_prefix`](resolver::strip_locale_prefix) of a `source` path.
    /// Paths matching no route only get the locale prefix.
    pub fn localize(
        &self,
        source: Locale,
        stripped: &CanonicalPath,
        target: Locale,
    ) -> LocalizedPath {
        self.match_localized(source, stripped.as_str())
            .and_then(|route| self.url_for(route.kind, target, &route.params).ok())
            .unwrap_or_else(|| resolver::localize(stripped, target))
    }

    /// The same page in every locale, in [`Locale::ALL`] order.
    pub fn alternates(&self, route: &RouteMatch) -> Vec<LocalizedPath> {
        Locale::ALL
            .into_iter()
            .filter_map(|locale| self.url_for(route.kind, locale, &route.params).ok())
            .collect()
    }

    /// Href for switching the page at `full_path` to `target`.
    ///
    /// The path is reduced to canonical form before re-localizing, so the
    /// result carries at most one prefix however many times it is applied.
    /// Query string and fragment are preserved.
    pub fn switch_locale(&self, full_path: &str, target: Locale) -> String {
        let parts = get_canonical_path_for_switching(full_path);
        let localized = self.localize(parts.locale, &parts.pathname, target);
        format!("{}{}{}", localized, parts.search, parts.hash)
    }
}
