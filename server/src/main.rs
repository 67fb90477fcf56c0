#![recursion_limit = "256"]

mod config;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if config.listing_api_url.is_none() {
        tracing::warn!("LISTING_API_URL not set; listing API forwarding disabled");
    }

    let state = state::AppState::from_config(&config).expect("listing API client init failed");
    let upstream = state
        .upstream
        .as_ref()
        .map_or_else(|| "none".to_owned(), |u| u.base_url().to_owned());

    let app = routes::app(state).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, %upstream, "listing server listening");
    axum::serve(listener, app).await.expect("server failed");
}
