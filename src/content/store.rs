//! Store records as found in the data files.

use serde::{Deserialize, Serialize};

use crate::slug::{generate_store_slug, slugify};

/// One store entry of a `data/stores/*.json` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub city: String,
    pub province: String,
    pub name: String,
    /// Raw Google Maps category (e.g. "Used furniture store")
    pub category: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub stars: String,
    pub review_count: String,
    pub google_maps_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, rename = "openingHours", skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
    #[serde(default, rename = "priceRange", skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, rename = "hasDesigner", skip_serializing_if = "Option::is_none")]
    pub has_designer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "picturesUrlList", skip_serializing_if = "Option::is_none")]
    pub pictures_url_list: Option<Vec<String>>,
}

/// A store with its page slug and its registration in the content index.
///
/// `province_slug` and `city_slug` are the keys the store is filed under in
/// the index. Store URLs are always built from these, never by splitting
/// `slug`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Store {
    #[serde(flatten)]
    pub record: StoreRecord,
    pub slug: String,
    pub province_slug: String,
    pub city_slug: String,
}

impl Store {
    pub fn from_record(record: StoreRecord) -> Self {
        let slug = generate_store_slug(&record.name, &record.city);
        let province_slug = slugify(&record.province);
        let city_slug = slugify(&record.city);
        Self {
            record,
            slug,
            province_slug,
            city_slug,
        }
    }
}
