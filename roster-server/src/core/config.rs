use std::fmt;
use std::str::FromStr;

use crate::auth::JwtConfig;
use crate::core::{Result, ServerError};

/// Secret used when `JWT_SECRET` is unset outside production
pub const DEV_JWT_SECRET: &str = "dev-secret";

/// The single demo account allowed to log in
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT / PORT | 3002 | listen port |
/// | DATABASE_PATH | roster.db | SQLite file, or `:memory:` |
/// | JWT_SECRET | dev-secret | HS256 key, required in production |
/// | JWT_EXPIRATION_MINUTES | 1440 | token lifetime |
/// | JWT_ISSUER / JWT_AUDIENCE | roster-server / roster-portal | registered claims |
/// | ADMIN_EMAIL / ADMIN_PASSWORD | admin@demo.com / admin123 | demo login |
/// | CORS_ORIGINS | http://localhost:3000,http://localhost:3001 | allowed origins |
/// | ENVIRONMENT | development | development / production |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
/// | SEED_DEMO_DATA | false | upsert demo employees at startup |
/// | LOG_LEVEL / LOG_DIR | info / unset | logging |
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_path: String,
    pub jwt: JwtConfig,
    pub admin: AdminCredentials,
    pub cors_origins: Vec<String>,
    /// development | production
    pub environment: String,
    pub request_timeout_ms: u64,
    pub seed_demo_data: bool,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Built-in defaults, without reading the environment
    pub fn local() -> Self {
        Self {
            http_port: 3002,
            database_path: "roster.db".into(),
            jwt: JwtConfig::new(DEV_JWT_SECRET),
            admin: AdminCredentials {
                email: "admin@demo.com".into(),
                password: "admin123".into(),
            },
            cors_origins: parse_origins("http://localhost:3000,http://localhost:3001"),
            environment: "development".into(),
            request_timeout_ms: 30_000,
            seed_demo_data: false,
            log_level: "info".into(),
            log_dir: None,
        }
    }

    /// Defaults backed by a private in-memory database
    pub fn in_memory() -> Self {
        Self {
            database_path: ":memory:".into(),
            ..Self::local()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to [`Config::local`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::local();
        let environment = env_string("ENVIRONMENT", &defaults.environment);

        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if environment == "production" => {
                return Err(ServerError::Config(
                    "JWT_SECRET must be set in production".into(),
                ));
            }
            _ => defaults.jwt.secret.clone(),
        };

        Ok(Self {
            http_port: env_parse("HTTP_PORT")
                .or_else(|| env_parse("PORT"))
                .unwrap_or(defaults.http_port),
            database_path: env_string("DATABASE_PATH", &defaults.database_path),
            jwt: JwtConfig {
                secret,
                expiration_minutes: env_parse("JWT_EXPIRATION_MINUTES")
                    .unwrap_or(defaults.jwt.expiration_minutes),
                issuer: env_string("JWT_ISSUER", &defaults.jwt.issuer),
                audience: env_string("JWT_AUDIENCE", &defaults.jwt.audience),
            },
            admin: AdminCredentials {
                email: env_string("ADMIN_EMAIL", &defaults.admin.email),
                password: env_string("ADMIN_PASSWORD", &defaults.admin.password),
            },
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or(defaults.cors_origins),
            environment,
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS")
                .unwrap_or(defaults.request_timeout_ms),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_demo_data),
            log_level: env_string("LOG_LEVEL", &defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// True while the built-in development secret is in use
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt.secret == DEV_JWT_SECRET
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::local()
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
