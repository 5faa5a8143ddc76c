use thrifter::locale::Locale;
use thrifter::routing::{
  detect_locale_prefix, get_canonical_path_for_switching, localize, strip_locale_prefix,
  validate_no_double_prefix, CanonicalPath, RouteKind, RouteTable,
};
use thrifter::sitemap::{enumerate_site_urls, routes_for_kind};
use thrifter::slug::generate_store_slug;
use thrifter::testing::{sample_index, TestEnv};

const BASE: &str = "https://thrifter.be";

#[test]
fn test_strip_is_idempotent_on_canonical_paths() {
  for path in ["/", "/antwerpen", "/antwerpen/mechelen", "/categories/boeken", "/friendly"] {
    let once = strip_locale_prefix(path);
    let twice = strip_locale_prefix(once.as_str());
    assert_eq!(once, twice, "{}", path);
  }
}

#[test]
fn test_every_site_url_round_trips_its_locale() {
  let index = sample_index();
  let table = RouteTable::standard().unwrap();

  for kind in RouteKind::ALL {
    for route in routes_for_kind(kind, &index) {
      for locale in Locale::ALL {
        let path = table.url_for(kind, locale, &route.params).unwrap();
        let expected = if locale.is_base() { None } else { Some(locale) };
        assert_eq!(detect_locale_prefix(path.as_str()), expected, "{}", path);

        let (resolved_locale, resolved) = table.resolve(path.as_str()).unwrap();
        assert_eq!(resolved_locale, locale);
        assert_eq!(resolved, route, "{}", path);
      }
    }
  }
}

#[test]
fn test_no_prefix_accumulation() {
  let start = CanonicalPath::from_path("/antwerpen");

  let fr = localize(&start, Locale::Fr);
  assert_eq!(fr.as_str(), "/fr/antwerpen");
  let back = strip_locale_prefix(fr.as_str());
  let en = localize(&back, Locale::En);
  assert_eq!(en.as_str(), "/en/antwerpen");
  let end = strip_locale_prefix(en.as_str());

  assert_eq!(end, start);
  assert!(!end.as_str().contains("/fr"));
}

#[test]
fn test_prefix_is_a_whole_segment() {
  assert_eq!(detect_locale_prefix("/friendly"), None);
  assert_eq!(detect_locale_prefix("/french-toast"), None);
  assert_eq!(detect_locale_prefix("/english"), None);
  assert_eq!(detect_locale_prefix("/fr/antwerpen"), Some(Locale::Fr));
}

#[test]
fn test_double_prefix_validation() {
  assert!(!validate_no_double_prefix("/fr/fr/antwerpen"));
  assert!(validate_no_double_prefix("/fr/antwerpen"));
}

#[test]
fn test_switching_extraction_keeps_query_and_hash() {
  let parts = get_canonical_path_for_switching("/fr/antwerpen?search=test#section");
  assert_eq!(parts.pathname.as_str(), "/antwerpen");
  assert_eq!(parts.search, "?search=test");
  assert_eq!(parts.hash, "#section");
}

#[test]
fn test_store_slug() {
  assert_eq!(generate_store_slug("L'Armée du Salut", "Liège"), "l-armee-du-salut-liege");
}

#[test]
fn test_zero_match_combination_is_omitted_in_every_locale() {
  let urls = enumerate_site_urls(&RouteTable::standard().unwrap(), &sample_index(), BASE).unwrap();

  for loc in [
    "https://thrifter.be/luik/categorieen/meubels",
    "https://thrifter.be/fr/luik/categories/meubels",
    "https://thrifter.be/en/luik/categories/meubels",
  ] {
    assert!(!urls.contains(loc), "unexpected {}", loc);
  }
  for loc in [
    "https://thrifter.be/antwerpen/categorieen/meubels",
    "https://thrifter.be/fr/antwerpen/categories/meubels",
    "https://thrifter.be/en/antwerpen/categories/meubels",
  ] {
    assert!(urls.contains(loc), "missing {}", loc);
  }
}

#[test]
fn test_switch_sequence() {
  let table = RouteTable::standard().unwrap();
  let mut path = "/antwerpen".to_string();
  for (locale, expected) in [
    (Locale::Fr, "/fr/antwerpen"),
    (Locale::En, "/en/antwerpen"),
    (Locale::Fr, "/fr/antwerpen"),
    (Locale::Nl, "/antwerpen"),
  ] {
    path = table.switch_locale(&path, locale);
    assert_eq!(path, expected);
  }
}

#[test]
fn test_build_output_matches_served_routes() {
  let env = TestEnv::with_sample_stores().unwrap();
  let config = env.config();
  let report = thrifter::generate::run(&config).unwrap();

  let sitemap = std::fs::read_to_string(config.out_dir.join("sitemap.xml")).unwrap();
  assert_eq!(sitemap.matches("<url>").count(), report.urls);
  assert!(!sitemap.contains("/fr/fr/"));
  assert!(!sitemap.contains("/nl/"));
}
