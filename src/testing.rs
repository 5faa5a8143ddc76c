//! Test utilities: sample store data and a temporary data directory.
//!
//! The sample set is small but covers the interesting shapes: a province with
//! two cities, a city name with diacritics and a category that is present in
//! one province and absent from the others.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::content::{ContentIndex, Store, StoreRecord};

/// Temporary site directory with a `data/stores/` folder.
///
/// Cleaned up when dropped.
pub struct TestEnv {
    /// Temporary directory (kept alive for file persistence)
    pub temp: TempDir,
}

impl TestEnv {
    pub fn new() -> io::Result<Self> {
        let temp = TempDir::new()?;
        fs::create_dir_all(temp.path().join("data").join("stores"))?;
        Ok(Self { temp })
    }

    /// Create an environment with the sample stores written to `stores.json`.
    pub fn with_sample_stores() -> io::Result<Self> {
        let env = Self::new()?;
        env.write_stores("stores.json", &sample_records())?;
        Ok(env)
    }

    /// Get the temporary directory path for creating test files.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.path().join("data")
    }

    pub fn stores_dir(&self) -> PathBuf {
        self.data_dir().join("stores")
    }

    pub fn out_dir(&self) -> PathBuf {
        self.path().join("build")
    }

    /// Write `records` as a JSON array to `stores/<file_name>`.
    pub fn write_stores(&self, file_name: &str, records: &[StoreRecord]) -> io::Result<()> {
        let json = serde_json::to_string_pretty(records).map_err(io::Error::other)?;
        fs::write(self.stores_dir().join(file_name), json)
    }

    /// Site configuration pointing at this environment.
    pub fn config(&self) -> SiteConfig {
        SiteConfig {
            data_dir: self.data_dir(),
            out_dir: self.out_dir(),
            ..SiteConfig::default()
        }
    }
}

/// A store record with only the required fields filled in.
pub fn record(name: &str, city: &str, province: &str, category: &str) -> StoreRecord {
    StoreRecord {
        city: city.to_string(),
        province: province.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        address: format!("Kerkstraat 1, {}", city),
        phone: String::new(),
        website: String::new(),
        stars: "4.2".to_string(),
        review_count: "10".to_string(),
        google_maps_url: String::new(),
        email: None,
        instagram: None,
        facebook: None,
        opening_hours: None,
        specialties: None,
        price_range: None,
        has_designer: None,
        description: None,
        pictures_url_list: None,
    }
}

/// Sample stores:
///
/// | Store               | City      | Province        | Categories                        |
/// |---------------------|-----------|-----------------|-----------------------------------|
/// | De Kringwinkel      | Antwerpen | Antwerpen       | meubels                           |
/// | Vintage Vibes       | Antwerpen | Antwerpen       | vintage-kleding, designer-merken  |
/// | Spullenhulp         | Mechelen  | Antwerpen       | designer-merken                   |
/// | L'Armée du Salut    | Liège     | Luik            | designer-merken                   |
/// | Het Boekenschip     | Gent      | Oost-Vlaanderen | boeken                            |
///
/// `speelgoed` and `elektronica` have no stores; `meubels` only exists in
/// Antwerpen.
pub fn sample_records() -> Vec<StoreRecord> {
    vec![
        record("De Kringwinkel", "Antwerpen", "Antwerpen", "Used furniture store"),
        record("Vintage Vibes", "Antwerpen", "Antwerpen", "Vintage clothing store"),
        record("Spullenhulp", "Mechelen", "Antwerpen", "Used clothing store"),
        record("L'Armée du Salut", "Liège", "Luik", "Used clothing store"),
        record("Het Boekenschip", "Gent", "Oost-Vlaanderen", "Used book store"),
    ]
}

pub fn sample_stores() -> Vec<Store> {
    sample_records().into_iter().map(Store::from_record).collect()
}

pub fn sample_index() -> ContentIndex {
    ContentIndex::build(sample_stores()).expect("sample stores have valid slugs")
}
