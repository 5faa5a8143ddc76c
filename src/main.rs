use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use thrifter::{
  config::{self, SiteConfig},
  content, generate, handlers,
  locale::Locale,
  routing::RouteTable,
  state::AppState,
};

#[derive(Parser)]
#[command(name = "thrifter")]
#[command(about = "Multilingual thrift store directory: static build and locale-aware server", long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Write sitemap.xml and page data for every page into the output directory
  Build,

  /// Serve page data and the sitemap over HTTP
  Serve,

  /// Show how a path is routed
  Resolve {
    /// Request path, e.g. /fr/antwerpen/villes
    path: String,
  },

  /// Print the href of a page in another locale
  Switch {
    /// Current path, with query string and fragment if any
    path: String,

    /// Target locale (nl, fr, en)
    locale: Locale,
  },
}

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "thrifter=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let cli = Cli::parse();

  let config = match config::load_config() {
    Ok(config) => config,
    Err(e) => {
      tracing::error!("{}", e);
      return ExitCode::FAILURE;
    }
  };

  let routes = RouteTable::standard().expect("Invalid route table");

  match cli.command {
    Commands::Build => match generate::run(&config) {
      Ok(_) => ExitCode::SUCCESS,
      Err(e) => {
        tracing::error!("Build failed: {}", e);
        ExitCode::FAILURE
      }
    },
    Commands::Serve => serve(config, routes).await,
    Commands::Resolve { path } => {
      let (locale, canonical) = routes.canonicalize(&path);
      match routes.resolve(&path) {
        Some((_, route)) => println!("{} {} {}", locale, route.kind, canonical),
        None => println!("{} (no route) {}", locale, canonical),
      }
      ExitCode::SUCCESS
    }
    Commands::Switch { path, locale } => {
      println!("{}", routes.switch_locale(&path, locale));
      ExitCode::SUCCESS
    }
  }
}

async fn serve(config: SiteConfig, routes: RouteTable) -> ExitCode {
  // Computed once; only dev mode reloads it
  let index = match content::load_index(&config.data_dir) {
    Ok(index) => index,
    Err(e) => {
      tracing::error!("Failed to load content: {}", e);
      return ExitCode::FAILURE;
    }
  };

  let bind_addr = config.bind_addr();
  let port = config.port;
  let app = handlers::app(AppState::new(config, routes, index));

  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", port);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
  ExitCode::SUCCESS
}
