/**
 * Application State
 *
 * The central state container shared by all request handlers. It is built
 * once at startup from the loaded configuration and cloned per route.
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe to share: the sqlx pool is
 * internally reference-counted, and the token issuer only holds derived
 * keys.
 */

use sqlx::PgPool;

use crate::auth::tokens::TokenIssuer;
use crate::server::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// JWT signing/verification, built from the configured secret
    pub tokens: TokenIssuer,
    /// Echo internal error detail in catalog 500 responses (development)
    pub expose_errors: bool,
}

impl AppState {
    /// Build application state from configuration and an established pool.
    pub fn new(config: &AppConfig, pool: PgPool) -> Self {
        Self {
            pool,
            tokens: TokenIssuer::new(&config.jwt_secret),
            expose_errors: config.run_env.is_development(),
        }
    }

    /// State for unit tests: a lazy pool that never connects, suitable for
    /// code paths that short-circuit before any query runs.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        let pool = PgPool::connect_lazy("postgres://postgres@localhost/storefront_test")
            .expect("lazy pool");
        Self {
            pool,
            tokens: TokenIssuer::new("test-secret"),
            expose_errors: false,
        }
    }
}
