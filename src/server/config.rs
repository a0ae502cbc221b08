/**
 * Server Configuration
 *
 * Loads and validates process configuration from the environment once at
 * startup. The resulting `AppConfig` is injected into construction of the
 * token issuer and application state; no other module reads the
 * environment.
 *
 * # Required Variables
 *
 * - `JWT_SECRET` - token signing secret; the process refuses to start
 *   without it
 * - `DATABASE_URL` - PostgreSQL connection string
 *
 * # Optional Variables
 *
 * - `PORT` - listen port (default 3000)
 * - `APP_ENV` - `development` (default) or `production`; development echoes
 *   internal error detail in catalog 500 responses
 */

use thiserror::Error;

/// Configuration loading failures. All of these are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Runtime environment flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnv {
    Development,
    Production,
}

impl RunEnv {
    /// Parse an environment string; anything other than "production" is
    /// treated as development.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Process-wide configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub run_env: RunEnv,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Fails fast when the signing secret or database URL is absent, so a
    /// misconfigured process never starts serving.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar("JWT_SECRET"))?;

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar("DATABASE_URL"))?;

        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => 3000,
        };

        let run_env = std::env::var("APP_ENV")
            .map(|raw| RunEnv::parse(&raw))
            .unwrap_or(RunEnv::Development);

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            run_env,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("3000"), Ok(3000));
        assert_eq!(parse_port(" 8080 "), Ok(8080));
        assert!(matches!(parse_port("nope"), Err(ConfigError::InvalidPort(_))));
        assert!(matches!(parse_port("70000"), Err(ConfigError::InvalidPort(_))));
    }

    #[test]
    fn test_run_env_parse() {
        assert_eq!(RunEnv::parse("production"), RunEnv::Production);
        assert_eq!(RunEnv::parse("PROD"), RunEnv::Production);
        assert_eq!(RunEnv::parse("development"), RunEnv::Development);
        assert_eq!(RunEnv::parse("anything-else"), RunEnv::Development);
        assert!(RunEnv::parse("dev").is_development());
    }
}
