/**
 * Server Initialization
 *
 * Builds the Axum application from loaded configuration.
 *
 * # Initialization Steps
 *
 * 1. Connect the PostgreSQL pool (fatal on failure; the service cannot
 *    operate without its datastore)
 * 2. Run database migrations (logged but non-fatal; they may already have
 *    been applied)
 * 3. Construct the token issuer from the configured secret
 * 4. Assemble the router with all routes and middleware
 */

use axum::Router;
use sqlx::PgPool;

use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application.
pub async fn create_app(config: &AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            // Migrations may already have been applied by a previous deploy.
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - schema might not be up to date");
        }
    }

    let state = AppState::new(config, pool);

    Ok(create_router(state))
}
