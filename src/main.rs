use dioxus_logger::tracing::{self, Level};
use folio::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = match startup::build_catalog_client(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to build catalog client: {}", e);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", config.bind_address, e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting server on {} for catalog {}",
        config.bind_address,
        catalog.api_url()
    );

    let router = router::routes().with_state(AppState {
        catalog,
        cascade: config.cascade,
    });

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
