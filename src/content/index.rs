//! In-memory content index.
//!
//! Built once per build (or once per server start) from the loaded stores and
//! then shared read-only. Groups stores by province, city, category and the
//! category x province / category x city combinations.

use serde::Serialize;
use std::collections::BTreeMap;

use super::categories::{all_categories, CategoryConfig};
use super::store::Store;
use crate::slug::sort_key;

/// Content errors that make the data unusable for URL generation.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("store {name:?} has an empty {field} slug")]
    EmptySlug { name: String, field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Province {
    pub name: String,
    pub slug: String,
    pub store_count: usize,
    /// City names, sorted
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub name: String,
    pub slug: String,
    pub province: String,
    pub province_slug: String,
    pub store_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub slug: &'static str,
    pub name_nl: &'static str,
    pub name_fr: &'static str,
    pub name_en: &'static str,
    pub icon: &'static str,
    pub store_count: usize,
}

type Ids = Vec<usize>;

/// Stores grouped for page generation.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    stores: Vec<Store>,
    provinces: Vec<Province>,
    cities: Vec<City>,
    categories: Vec<CategorySummary>,
    by_province: BTreeMap<String, Ids>,
    by_city: BTreeMap<(String, String), Ids>,
    by_category: BTreeMap<&'static str, Ids>,
    by_category_province: BTreeMap<(String, String), Ids>,
    by_category_city: BTreeMap<(String, String, String), Ids>,
}

impl ContentIndex {
    /// Build the index. Stores keep their load order.
    pub fn build(stores: Vec<Store>) -> Result<Self, IndexError> {
        let catalog = all_categories();
        let mut index = ContentIndex::default();

        for (id, store) in stores.iter().enumerate() {
            for (field, value) in [
                ("store", &store.slug),
                ("province", &store.province_slug),
                ("city", &store.city_slug),
            ] {
                // A store slug is "<name>-<city>", so it is never empty; "-" means
                // the name slugified to nothing.
                if value.is_empty() || (field == "store" && value.starts_with('-')) {
                    return Err(IndexError::EmptySlug {
                        name: store.record.name.clone(),
                        field,
                    });
                }
            }

            let province = store.province_slug.clone();
            let city = store.city_slug.clone();

            index.by_province.entry(province.clone()).or_default().push(id);
            index
                .by_city
                .entry((province.clone(), city.clone()))
                .or_default()
                .push(id);

            for category in catalog.iter().filter(|c| c.matches(&store.record.category)) {
                index.by_category.entry(category.slug).or_default().push(id);
                index
                    .by_category_province
                    .entry((category.slug.to_string(), province.clone()))
                    .or_default()
                    .push(id);
                index
                    .by_category_city
                    .entry((category.slug.to_string(), province.clone(), city.clone()))
                    .or_default()
                    .push(id);
            }
        }

        index.provinces = index
            .by_province
            .iter()
            .map(|(slug, ids)| {
                let mut cities: Vec<String> =
                    ids.iter().map(|id| stores[*id].record.city.clone()).collect();
                cities.sort_by_cached_key(|name| sort_key(name));
                cities.dedup();
                Province {
                    name: stores[ids[0]].record.province.clone(),
                    slug: slug.clone(),
                    store_count: ids.len(),
                    cities,
                }
            })
            .collect();
        index
            .provinces
            .sort_by_cached_key(|p| (sort_key(&p.name), p.slug.clone()));

        index.cities = index
            .by_city
            .iter()
            .map(|((province_slug, slug), ids)| {
                let first = &stores[ids[0]].record;
                City {
                    name: first.city.clone(),
                    slug: slug.clone(),
                    province: first.province.clone(),
                    province_slug: province_slug.clone(),
                    store_count: ids.len(),
                }
            })
            .collect();
        index
            .cities
            .sort_by_cached_key(|c| (sort_key(&c.name), c.slug.clone(), c.province_slug.clone()));

        index.categories = catalog
            .iter()
            .filter_map(|c| {
                let count = index.by_category.get(c.slug).map_or(0, Vec::len);
                (count > 0).then(|| summary(c, count))
            })
            .collect();

        index.stores = stores;
        tracing::debug!(
            "Indexed {} stores: {} provinces, {} cities, {} categories",
            index.stores.len(),
            index.provinces.len(),
            index.cities.len(),
            index.categories.len()
        );
        Ok(index)
    }

    fn collect<'a>(&'a self, ids: Option<&'a Ids>) -> Vec<&'a Store> {
        ids.map(|ids| ids.iter().map(|id| &self.stores[*id]).collect())
            .unwrap_or_default()
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Provinces sorted by name (accent and case insensitive).
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    /// Cities sorted by name (accent and case insensitive).
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Catalog categories with at least one store, in catalog order.
    pub fn categories(&self) -> &[CategorySummary] {
        &self.categories
    }

    pub fn province(&self, slug: &str) -> Option<&Province> {
        self.provinces.iter().find(|p| p.slug == slug)
    }

    pub fn city(&self, province_slug: &str, city_slug: &str) -> Option<&City> {
        self.cities
            .iter()
            .find(|c| c.province_slug == province_slug && c.slug == city_slug)
    }

    pub fn cities_for_province(&self, province_slug: &str) -> Vec<&City> {
        self.cities
            .iter()
            .filter(|c| c.province_slug == province_slug)
            .collect()
    }

    pub fn stores_by_province(&self, province: &str) -> Vec<&Store> {
        self.collect(self.by_province.get(province))
    }

    pub fn stores_by_city(&self, province: &str, city: &str) -> Vec<&Store> {
        self.collect(self.by_city.get(&(province.to_string(), city.to_string())))
    }

    pub fn stores_by_category(&self, category: &str) -> Vec<&Store> {
        self.collect(self.by_category.get(category))
    }

    pub fn stores_by_category_and_province(&self, category: &str, province: &str) -> Vec<&Store> {
        self.collect(
            self.by_category_province
                .get(&(category.to_string(), province.to_string())),
        )
    }

    pub fn stores_by_category_and_city(
        &self,
        category: &str,
        province: &str,
        city: &str,
    ) -> Vec<&Store> {
        self.collect(self.by_category_city.get(&(
            category.to_string(),
            province.to_string(),
            city.to_string(),
        )))
    }

    pub fn has_category_in_province(&self, category: &str, province: &str) -> bool {
        self.by_category_province
            .contains_key(&(category.to_string(), province.to_string()))
    }

    pub fn has_category_in_city(&self, category: &str, province: &str, city: &str) -> bool {
        self.by_category_city.contains_key(&(
            category.to_string(),
            province.to_string(),
            city.to_string(),
        ))
    }

    /// Look up a store within the city it is registered under.
    pub fn find_store(&self, province: &str, city: &str, slug: &str) -> Option<&Store> {
        self.by_city
            .get(&(province.to_string(), city.to_string()))?
            .iter()
            .map(|id| &self.stores[*id])
            .find(|s| s.slug == slug)
    }
}

fn summary(config: &'static CategoryConfig, store_count: usize) -> CategorySummary {
    CategorySummary {
        slug: config.slug,
        name_nl: config.name_nl,
        name_fr: config.name_fr,
        name_en: config.name_en,
        icon: config.icon,
        store_count,
    }
}
