use courtside_core::recommendation::ScoringConstants;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upsert the bundled seed catalog before loading it (default: `false`).
    pub seed_catalog: bool,
    /// Normalization constants for the recommendation scorer.
    pub scoring: ScoringConstants,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SEED_CATALOG`          | `false`                 |
    /// | `SYNERGY_SCORE_DIVISOR` | `3.0`                   |
    /// | `STATS_SCORE_CEILING`   | `11000.0`               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let seed_catalog: bool = std::env::var("SEED_CATALOG")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SEED_CATALOG must be true or false");

        let defaults = ScoringConstants::default();
        let scoring = ScoringConstants {
            synergy_divisor: std::env::var("SYNERGY_SCORE_DIVISOR")
                .map(|v| v.parse().expect("SYNERGY_SCORE_DIVISOR must be a number"))
                .unwrap_or(defaults.synergy_divisor),
            stats_ceiling: std::env::var("STATS_SCORE_CEILING")
                .map(|v| v.parse().expect("STATS_SCORE_CEILING must be a number"))
                .unwrap_or(defaults.stats_ceiling),
        };
        scoring
            .validate()
            .unwrap_or_else(|e| panic!("Invalid scoring constants: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            seed_catalog,
            scoring,
        }
    }
}
