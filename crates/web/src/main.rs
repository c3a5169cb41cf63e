use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use storage::{Database, MemoryStore, RosterStore};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;
mod state;

use config::{Config, StorageBackend};
use features::{budget, health, players};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        players::handlers::list_players,
        players::handlers::get_players_by_role,
        players::handlers::get_primary_players,
        players::handlers::create_player,
        players::handlers::update_player,
        players::handlers::delete_player,
        budget::handlers::get_budget,
        budget::handlers::update_budget,
        budget::handlers::get_budget_summary,
        health::handlers::health_check,
    ),
    components(
        schemas(
            storage::dto::player::PlayerRequest,
            storage::dto::player::PlayerResponse,
            storage::dto::player::PrimaryPlayerResponse,
            storage::dto::budget::UpdateBudgetRequest,
            storage::dto::budget::BudgetResponse,
            storage::dto::budget::RoleSummary,
            storage::dto::budget::BudgetSummaryResponse,
            storage::models::Role,
            health::handlers::HealthResponse,
            features::MessageResponse,
        )
    ),
    tags(
        (name = "players", description = "Auction roster endpoints"),
        (name = "budget", description = "Budget configuration and spend summary"),
        (name = "health", description = "Service health"),
    )
)]
struct ApiDoc;

async fn connect_store(storage: &StorageBackend) -> anyhow::Result<Arc<dyn RosterStore>> {
    match storage {
        StorageBackend::Postgres { database_url } => {
            tracing::info!(
                "Connecting to database at: {}",
                database_url.split('@').next_back().unwrap_or("unknown")
            );
            let db = Database::new(database_url)
                .await
                .context("Failed to initialize database")?;
            tracing::info!("Database connection established");

            tracing::info!("Running database migrations");
            db.run_migrations()
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Database migrations completed successfully");

            Ok(Arc::new(db))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Fantasy Football Auction Manager API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!(
        organize_policy = ?config.organize_policy,
        "Configuration loaded successfully"
    );

    let store = connect_store(&config.storage).await?;
    let state = AppState::new(store, config.organize_policy);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let app = routes::app(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let bind_address = config.bind_address();
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
