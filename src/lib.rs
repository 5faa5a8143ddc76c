pub mod config;
pub mod content;
pub mod generate;
pub mod handlers;
pub mod locale;
pub mod pages;
pub mod paths;
pub mod routing;
pub mod sitemap;
pub mod slug;
pub mod state;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
