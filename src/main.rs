use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_map::{config::Config, controllers, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting seat map service ({})", config.app.environment);

    // Load the venue, the occupancy map and generate the seat layout
    let app_state = AppState::new(config.clone())?;
    {
        let map = app_state.seat_map.read().await;
        info!(
            "Venue {} ready: {} seats in {} zones",
            map.venue().name,
            map.layout().len(),
            map.venue().zones.len()
        );
    }

    // --- Start the web server ---

    let app = Router::new()
        .route("/", get(|| async { "Seat Map API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        // Mount the routes from the controllers module
        .nest("/api", controllers::routes())
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((config.app.host.as_str(), config.app.port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
