//! Site URL enumeration and sitemap rendering.
//!
//! Every (route, identifier tuple, locale) combination backed by at least one
//! store becomes one URL. Combinations with zero matching stores are left out,
//! so no empty listing page is ever advertised. This depends on the data and
//! is recomputed from the content index on every build.

use std::collections::HashSet;

use crate::content::{all_categories, ContentIndex};
use crate::locale::Locale;
use crate::routing::{LocalizedPath, RouteError, RouteKind, RouteMatch, RouteParams, RouteTable};

/// One advertised page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteUrl {
    pub route: RouteMatch,
    pub path: LocalizedPath,
    /// Absolute URL
    pub loc: String,
}

impl SiteUrl {
    pub fn locale(&self) -> Locale {
        self.path.locale()
    }
}

/// Deduplicated site URLs in generation order.
#[derive(Debug, Clone, Default)]
pub struct SiteUrlSet {
    urls: Vec<SiteUrl>,
    seen: HashSet<String>,
}

impl SiteUrlSet {
    /// Add a URL. Returns `false` (and keeps the first) on a duplicate `loc`.
    fn push(&mut self, url: SiteUrl) -> bool {
        if !self.seen.insert(url.loc.clone()) {
            return false;
        }
        self.urls.push(url);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &SiteUrl> {
        self.urls.iter()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn contains(&self, loc: &str) -> bool {
        self.seen.contains(loc)
    }

}

impl<'a> IntoIterator for &'a SiteUrlSet {
    type Item = &'a SiteUrl;
    type IntoIter = std::slice::Iter<'a, SiteUrl>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.iter()
    }
}

/// Content-backed routes for `kind`, in index order.
///
/// Store routes take their province and city from the index registration the
/// store is filed under, not from the store slug.
pub fn routes_for_kind(kind: RouteKind, index: &ContentIndex) -> Vec<RouteMatch> {
    let mut routes = Vec::new();
    let mut push = |params: RouteParams| routes.push(RouteMatch::new(kind, params));

    match kind {
        RouteKind::Home
        | RouteKind::ProvincesList
        | RouteKind::CitiesList
        | RouteKind::CategoriesList => push(RouteParams::new()),

        RouteKind::CategoryDetail => {
            for category in index.categories() {
                push(RouteParams::new().with("category", category.slug));
            }
        }

        RouteKind::ProvinceDetail => {
            for province in index.provinces() {
                push(RouteParams::new().with("province", province.slug.as_str()));
            }
        }

        RouteKind::ProvinceCategory => {
            for province in index.provinces() {
                for category in all_categories() {
                    if index.has_category_in_province(category.slug, &province.slug) {
                        push(
                            RouteParams::new()
                                .with("province", province.slug.as_str())
                                .with("category", category.slug),
                        );
                    }
                }
            }
        }

        RouteKind::CityDetail => {
            for city in index.cities() {
                push(
                    RouteParams::new()
                        .with("province", city.province_slug.as_str())
                        .with("city", city.slug.as_str()),
                );
            }
        }

        RouteKind::CityCategory => {
            for city in index.cities() {
                for category in all_categories() {
                    if index.has_category_in_city(category.slug, &city.province_slug, &city.slug) {
                        push(
                            RouteParams::new()
                                .with("province", city.province_slug.as_str())
                                .with("city", city.slug.as_str())
                                .with("category", category.slug),
                        );
                    }
                }
            }
        }

        RouteKind::StoreDetail => {
            for city in index.cities() {
                for store in index.stores_by_city(&city.province_slug, &city.slug) {
                    push(
                        RouteParams::new()
                            .with("province", city.province_slug.as_str())
                            .with("city", city.slug.as_str())
                            .with("store", store.slug.as_str()),
                    );
                }
            }
        }
    }

    routes
}

/// Enumerate every page of the site as absolute URLs under `base_url`.
///
/// Order: route kinds in declaration order, then identifier tuples in index
/// order, then locales base first. Kinds missing from `table` are skipped.
///
/// A URL that the table would resolve to a different page (a city slugged
/// `categorieen` turns its store URLs into category URLs) is left out with a
/// warning, so the sitemap only lists URLs that serve their own page.
pub fn enumerate_site_urls(
    table: &RouteTable,
    index: &ContentIndex,
    base_url: &str,
) -> Result<SiteUrlSet, RouteError> {
    let mut set = SiteUrlSet::default();

    for kind in RouteKind::ALL {
        if table.entry(kind).is_none() {
            continue;
        }
        for route in routes_for_kind(kind, index) {
            for locale in Locale::ALL {
                let path = table.url_for(route.kind, locale, &route.params)?;
                let loc = path.absolute(base_url);
                let resolved = table.resolve(path.as_str());
                if resolved.as_ref() != Some(&(locale, route.clone())) {
                    tracing::warn!(
                        "Skipping site URL {} ({}): it resolves to {:?}",
                        loc,
                        kind,
                        resolved.map(|(_, other)| other.kind)
                    );
                    continue;
                }
                if !set.push(SiteUrl {
                    route: route.clone(),
                    path,
                    loc: loc.clone(),
                }) {
                    tracing::warn!("Duplicate site URL {} ({}), keeping the first", loc, kind);
                }
            }
        }
    }

    tracing::debug!("Enumerated {} site URLs", set.len());
    Ok(set)
}

/// Optional per-URL sitemap elements.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapOptions {
    pub changefreq: Option<String>,
    pub priority: Option<f32>,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            changefreq: Some("weekly".to_string()),
            priority: Some(0.8),
        }
    }
}

/// Render a `sitemap.xml` document.
pub fn render_sitemap_xml(urls: &SiteUrlSet, options: &SitemapOptions) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for url in urls {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            html_escape::encode_text(&url.loc)
        ));
        if let Some(changefreq) = &options.changefreq {
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                html_escape::encode_text(changefreq)
            ));
        }
        if let Some(priority) = options.priority {
            xml.push_str(&format!("    <priority>{}</priority>\n", priority));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
