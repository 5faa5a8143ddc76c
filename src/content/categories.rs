//! Category catalog.
//!
//! Maps URL slugs to the raw Google Maps categories found in the store data,
//! with display names and descriptions for each locale.

use serde::Serialize;

/// A category of the closed catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryConfig {
    pub slug: &'static str,
    pub name_nl: &'static str,
    pub name_fr: &'static str,
    pub name_en: &'static str,
    pub description_nl: &'static str,
    pub description_fr: &'static str,
    pub description_en: &'static str,
    /// Raw store categories that belong to this category
    pub match_categories: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub icon: &'static str,
}

impl CategoryConfig {
    /// Whether a raw store category belongs here (case and surrounding
    /// whitespace are ignored).
    pub fn matches(&self, store_category: &str) -> bool {
        let normalized = store_category.trim().to_lowercase();
        self.match_categories
            .iter()
            .any(|m| m.trim().to_lowercase() == normalized)
    }
}

pub static CATEGORIES: &[CategoryConfig] = &[
    CategoryConfig {
        slug: "vintage-kleding",
        name_nl: "Vintage Kleding",
        name_fr: "Vêtements Vintage",
        name_en: "Vintage Clothing",
        description_nl: "Ontdek unieke vintage kleding en tweedehands fashion. Van retro jaren 70 tot 90s nostalgie, vind authentieke vintage stukken in kringwinkels door heel België.",
        description_fr: "Découvrez des vêtements vintage uniques et de la mode seconde main. Des années 70 rétro à la nostalgie des années 90, trouvez des pièces vintage authentiques dans les magasins de seconde main à travers la Belgique.",
        description_en: "Discover unique vintage clothing and secondhand fashion. From retro 70s to 90s nostalgia, find authentic vintage pieces in thrift stores across Belgium.",
        match_categories: &["Vintage clothing store", "Vintage Clothing Shop"],
        keywords: &[
            "vintage kleding kringwinkel belgië",
            "vintage fashion tweedehands",
            "retro kleding",
            "jaren 70 kleding",
            "jaren 90 fashion",
        ],
        icon: "👗",
    },
    CategoryConfig {
        slug: "designer-merken",
        name_nl: "Designer Merken",
        name_fr: "Marques de Créateurs",
        name_en: "Designer Brands",
        description_nl: "Luxe designer merken voor betaalbare prijzen. Vind tweedehands designerkleding, tassen en accessoires van topmerken in Belgische kringwinkels.",
        description_fr: "Marques de créateurs de luxe à des prix abordables. Trouvez des vêtements de créateurs d'occasion, des sacs et des accessoires de grandes marques dans les magasins de seconde main belges.",
        description_en: "Luxury designer brands at affordable prices. Find secondhand designer clothing, bags and accessories from top brands in Belgian thrift stores.",
        match_categories: &[
            "Vintage clothing store",
            "Vintage Clothing Shop",
            "Consignment shop",
            "Used clothing store",
            "Clothing store",
        ],
        keywords: &[
            "designer tweedehands belgië",
            "luxe merken kringwinkel",
            "designer tassen tweedehands",
            "goedkope designer kleding",
        ],
        icon: "💎",
    },
    CategoryConfig {
        slug: "meubels",
        name_nl: "Meubels",
        name_fr: "Meubles",
        name_en: "Furniture",
        description_nl: "Betaalbare tweedehands meubels voor elk budget. Van vintage kasten tot moderne design, vind kwalitatieve gebruikte meubels in kringwinkels.",
        description_fr: "Meubles d'occasion abordables pour tous les budgets. Des armoires vintage au design moderne, trouvez des meubles d'occasion de qualité dans les magasins de seconde main.",
        description_en: "Affordable secondhand furniture for every budget. From vintage cabinets to modern design, find quality used furniture in thrift stores.",
        match_categories: &[
            "Used furniture store",
            "Antique furniture store",
            "Used office furniture store",
            "Home goods store",
            "Homewares Store",
        ],
        keywords: &[
            "goedkope meubels kringwinkel",
            "tweedehands meubels belgië",
            "vintage meubels",
            "gebruikte kasten",
        ],
        icon: "🛋️",
    },
    CategoryConfig {
        slug: "boeken",
        name_nl: "Boeken",
        name_fr: "Livres",
        name_en: "Books",
        description_nl: "Tweedehands boeken voor lezers en verzamelaars. Vind romans, studieboeken, strips en meer in kringwinkels door heel België.",
        description_fr: "Livres d'occasion pour les lecteurs et les collectionneurs. Trouvez des romans, des manuels scolaires, des bandes dessinées et plus encore dans les magasins de seconde main à travers la Belgique.",
        description_en: "Secondhand books for readers and collectors. Find novels, textbooks, comics and more in thrift stores across Belgium.",
        match_categories: &["Used book store", "Book store", "Second-hand Book Shop"],
        keywords: &[
            "tweedehands boeken kringwinkel",
            "goedkope boeken belgië",
            "studieboeken tweedehands",
            "strips kringwinkel",
        ],
        icon: "📚",
    },
    CategoryConfig {
        slug: "elektronica",
        name_nl: "Elektronica",
        name_fr: "Électronique",
        name_en: "Electronics",
        description_nl: "Tweedehands elektronica en huishoudapparaten. Vind betaalbare apparaten, gadgets en elektronica in kringwinkels.",
        description_fr: "Électronique d'occasion et appareils électroménagers. Trouvez des appareils, des gadgets et de l'électronique abordables dans les magasins de seconde main.",
        description_en: "Secondhand electronics and household appliances. Find affordable devices, gadgets and electronics in thrift stores.",
        match_categories: &["Appliance store", "Store", "General store"],
        keywords: &[
            "tweedehands elektronica belgië",
            "goedkope apparaten kringwinkel",
            "gebruikte gadgets",
            "huishoudapparaten tweedehands",
        ],
        icon: "📱",
    },
    CategoryConfig {
        slug: "speelgoed",
        name_nl: "Speelgoed",
        name_fr: "Jouets",
        name_en: "Toys",
        description_nl: "Tweedehands speelgoed voor kinderen van alle leeftijden. Vind spelletjes, poppen, puzzels en meer in kringwinkels.",
        description_fr: "Jouets d'occasion pour les enfants de tous âges. Trouvez des jeux, des poupées, des puzzles et plus encore dans les magasins de seconde main.",
        description_en: "Secondhand toys for children of all ages. Find games, dolls, puzzles and more in thrift stores.",
        match_categories: &["Toy store", "Hobby store", "Store", "General store"],
        keywords: &[
            "tweedehands speelgoed kringwinkel",
            "goedkoop speelgoed belgië",
            "gebruikte spelletjes",
            "kinderen speelgoed tweedehands",
        ],
        icon: "🧸",
    },
];

/// All categories in catalog order.
pub fn all_categories() -> &'static [CategoryConfig] {
    CATEGORIES
}

pub fn category_by_slug(slug: &str) -> Option<&'static CategoryConfig> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

/// Check if a raw store category belongs to the category `category_slug`.
///
/// Unknown slugs never match.
pub fn store_matches_category(store_category: &str, category_slug: &str) -> bool {
    category_by_slug(category_slug).is_some_and(|c| c.matches(store_category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::slugify;

    #[test]
    fn test_catalog_slugs_are_unique_and_normalized() {
        let slugs: Vec<&str> = all_categories().iter().map(|c| c.slug).collect();
        for (i, slug) in slugs.iter().enumerate() {
            assert_eq!(slugify(slug), *slug);
            assert!(!slugs[i + 1..].contains(slug), "duplicate slug {}", slug);
        }
        assert_eq!(slugs.len(), 6);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(category_by_slug("boeken").map(|c| c.name_en), Some("Books"));
        assert!(category_by_slug("fietsen").is_none());
    }

    #[test]
    fn test_matching_ignores_case_and_whitespace() {
        assert!(store_matches_category("Used book store", "boeken"));
        assert!(store_matches_category("  used BOOK store ", "boeken"));
        assert!(!store_matches_category("Used book", "boeken"));
        assert!(!store_matches_category("Used book store", "unknown"));
    }

    #[test]
    fn test_store_can_match_several_categories() {
        assert!(store_matches_category("General store", "elektronica"));
        assert!(store_matches_category("General store", "speelgoed"));
        assert!(store_matches_category("Vintage clothing store", "vintage-kleding"));
        assert!(store_matches_category("Vintage clothing store", "designer-merken"));
    }
}
