//! Page data loading.
//!
//! Turns a matched route into the data a page renderer receives. List pages
//! always exist; detail pages are not found when their identifiers are unknown
//! or select zero stores.

use serde::Serialize;

use crate::content::{
    category_by_slug, CategoryConfig, CategorySummary, City, ContentIndex, Province, Store,
};
use crate::routing::{RouteKind, RouteMatch};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PageError {
    #[error("{0}")]
    NotFound(String),
}

/// Display name and slug of a province or city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub name: String,
    pub slug: String,
}

/// Data for one page, tagged with the page kind.
#[derive(Debug, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageData<'a> {
    Home {
        provinces: &'a [Province],
    },
    ProvincesList {
        provinces: &'a [Province],
    },
    CitiesList {
        cities: &'a [City],
    },
    CategoriesList {
        categories: &'a [CategorySummary],
    },
    CategoryDetail {
        category: &'static CategoryConfig,
        stores: Vec<&'a Store>,
    },
    ProvinceDetail {
        province: Place,
        cities: Vec<&'a City>,
        stores: Vec<&'a Store>,
    },
    ProvinceCategory {
        category: &'static CategoryConfig,
        province: Place,
        stores: Vec<&'a Store>,
    },
    CityDetail {
        city: Place,
        province: Place,
        stores: Vec<&'a Store>,
    },
    CityCategory {
        category: &'static CategoryConfig,
        city: Place,
        province: Place,
        stores: Vec<&'a Store>,
    },
    StoreDetail {
        store: &'a Store,
    },
}

impl PageData<'_> {
    /// Number of stores shown on the page.
    pub fn store_count(&self) -> usize {
        match self {
            PageData::CategoryDetail { stores, .. }
            | PageData::ProvinceDetail { stores, .. }
            | PageData::ProvinceCategory { stores, .. }
            | PageData::CityDetail { stores, .. }
            | PageData::CityCategory { stores, .. } => stores.len(),
            PageData::StoreDetail { .. } => 1,
            PageData::Home { .. }
            | PageData::ProvincesList { .. }
            | PageData::CitiesList { .. }
            | PageData::CategoriesList { .. } => 0,
        }
    }
}

fn param<'r>(route: &'r RouteMatch, name: &str) -> Result<&'r str, PageError> {
    route
        .param(name)
        .ok_or_else(|| PageError::NotFound(format!("Missing {} in {} route", name, route.kind)))
}

fn category(route: &RouteMatch) -> Result<&'static CategoryConfig, PageError> {
    category_by_slug(param(route, "category")?)
        .ok_or_else(|| PageError::NotFound("Category not found".to_string()))
}

fn non_empty<'a>(stores: Vec<&'a Store>, message: &str) -> Result<Vec<&'a Store>, PageError> {
    if stores.is_empty() {
        return Err(PageError::NotFound(message.to_string()));
    }
    Ok(stores)
}

/// Province and city display names come from the first store, falling back
/// to the slug.
fn province_place(stores: &[&Store], slug: &str) -> Place {
    Place {
        name: stores
            .first()
            .map_or_else(|| slug.to_string(), |s| s.record.province.clone()),
        slug: slug.to_string(),
    }
}

fn city_place(stores: &[&Store], slug: &str) -> Place {
    Place {
        name: stores
            .first()
            .map_or_else(|| slug.to_string(), |s| s.record.city.clone()),
        slug: slug.to_string(),
    }
}

/// Load the data for a matched route.
pub fn load_page<'a>(route: &RouteMatch, index: &'a ContentIndex) -> Result<PageData<'a>, PageError> {
    let page = match route.kind {
        RouteKind::Home => PageData::Home {
            provinces: index.provinces(),
        },
        RouteKind::ProvincesList => PageData::ProvincesList {
            provinces: index.provinces(),
        },
        RouteKind::CitiesList => PageData::CitiesList {
            cities: index.cities(),
        },
        RouteKind::CategoriesList => PageData::CategoriesList {
            categories: index.categories(),
        },

        RouteKind::CategoryDetail => {
            let category = category(route)?;
            let stores = non_empty(
                index.stores_by_category(category.slug),
                "No stores found for this category",
            )?;
            PageData::CategoryDetail { category, stores }
        }

        RouteKind::ProvinceDetail => {
            let province = param(route, "province")?;
            let stores = non_empty(index.stores_by_province(province), "Province not found")?;
            PageData::ProvinceDetail {
                province: province_place(&stores, province),
                cities: index.cities_for_province(province),
                stores,
            }
        }

        RouteKind::ProvinceCategory => {
            let category = category(route)?;
            let province = param(route, "province")?;
            let stores = non_empty(
                index.stores_by_category_and_province(category.slug, province),
                "No stores found for this category in this province",
            )?;
            PageData::ProvinceCategory {
                category,
                province: province_place(&stores, province),
                stores,
            }
        }

        RouteKind::CityDetail => {
            let province = param(route, "province")?;
            let city = param(route, "city")?;
            let stores = non_empty(index.stores_by_city(province, city), "City not found")?;
            PageData::CityDetail {
                city: city_place(&stores, city),
                province: province_place(&stores, province),
                stores,
            }
        }

        RouteKind::CityCategory => {
            let category = category(route)?;
            let province = param(route, "province")?;
            let city = param(route, "city")?;
            let stores = non_empty(
                index.stores_by_category_and_city(category.slug, province, city),
                "No stores found for this category in this city",
            )?;
            PageData::CityCategory {
                category,
                city: city_place(&stores, city),
                province: province_place(&stores, province),
                stores,
            }
        }

        RouteKind::StoreDetail => {
            let store = index
                .find_store(
                    param(route, "province")?,
                    param(route, "city")?,
                    param(route, "store")?,
                )
                .ok_or_else(|| PageError::NotFound("Store not found".to_string()))?;
            PageData::StoreDetail { store }
        }
    };

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteParams;
    use crate::testing::sample_index;

    fn route(kind: RouteKind, pairs: &[(&str, &str)]) -> RouteMatch {
        let params = pairs
            .iter()
            .fold(RouteParams::new(), |p, (k, v)| p.with(k, *v));
        RouteMatch::new(kind, params)
    }

    #[test]
    fn test_list_pages_always_load() {
        let index = ContentIndex::build(Vec::new()).unwrap();
        for kind in [
            RouteKind::Home,
            RouteKind::ProvincesList,
            RouteKind::CitiesList,
            RouteKind::CategoriesList,
        ] {
            assert!(load_page(&route(kind, &[]), &index).is_ok(), "{}", kind);
        }
    }

    #[test]
    fn test_province_page() {
        let index = sample_index();
        let page = load_page(&route(RouteKind::ProvinceDetail, &[("province", "antwerpen")]), &index)
            .unwrap();
        match page {
            PageData::ProvinceDetail {
                province,
                cities,
                stores,
            } => {
                assert_eq!(province.name, "Antwerpen");
                assert_eq!(cities.len(), 2);
                assert_eq!(stores.len(), 3);
            }
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_unknown_province_is_not_found() {
        let index = sample_index();
        let result = load_page(&route(RouteKind::ProvinceDetail, &[("province", "limburg")]), &index);
        assert_eq!(result.unwrap_err(), PageError::NotFound("Province not found".to_string()));
    }

    #[test]
    fn test_empty_combination_is_not_found() {
        let index = sample_index();
        let result = load_page(
            &route(
                RouteKind::ProvinceCategory,
                &[("province", "luik"), ("category", "meubels")],
            ),
            &index,
        );
        assert!(matches!(result, Err(PageError::NotFound(_))));

        let page = load_page(
            &route(
                RouteKind::ProvinceCategory,
                &[("province", "antwerpen"), ("category", "meubels")],
            ),
            &index,
        )
        .unwrap();
        assert_eq!(page.store_count(), 1);
    }

    #[test]
    fn test_unknown_category_is_not_found() {
        let index = sample_index();
        let result = load_page(&route(RouteKind::CategoryDetail, &[("category", "fietsen")]), &index);
        assert_eq!(result.unwrap_err(), PageError::NotFound("Category not found".to_string()));
    }

    #[test]
    fn test_city_category_page() {
        let index = sample_index();
        let page = load_page(
            &route(
                RouteKind::CityCategory,
                &[("province", "luik"), ("city", "liege"), ("category", "designer-merken")],
            ),
            &index,
        )
        .unwrap();
        match page {
            PageData::CityCategory { city, province, .. } => {
                assert_eq!(city.name, "Liège");
                assert_eq!(province.name, "Luik");
            }
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_store_page_requires_registered_city() {
        let index = sample_index();
        let found = load_page(
            &route(
                RouteKind::StoreDetail,
                &[("province", "luik"), ("city", "liege"), ("store", "l-armee-du-salut-liege")],
            ),
            &index,
        );
        assert_eq!(found.unwrap().store_count(), 1);

        let wrong_city = load_page(
            &route(
                RouteKind::StoreDetail,
                &[("province", "luik"), ("city", "namen"), ("store", "l-armee-du-salut-liege")],
            ),
            &index,
        );
        assert!(matches!(wrong_city, Err(PageError::NotFound(_))));
    }

    #[test]
    fn test_page_serializes_with_tag() {
        let index = sample_index();
        let page = load_page(&route(RouteKind::CitiesList, &[]), &index).unwrap();
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["page"], "cities-list");
        assert_eq!(value["cities"].as_array().unwrap().len(), 4);
    }
}
