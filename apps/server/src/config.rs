//! Server configuration module.
//!
//! Configuration is loaded from `ACRONYMS_`-prefixed environment
//! variables with fallback to defaults, so a bare `acronyms` invocation
//! works out of the box against `./acronyms.db`.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use acronyms_core::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the SQLite database file
    pub database: PathBuf,

    /// Interface the HTTP server binds to
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Page size used when a listing request omits `limit`
    pub page_size: i64,

    /// Lifetime of cached listing/lookup responses
    pub cache_ttl: Duration,

    /// Lifetime of bearer tokens issued at login, in seconds
    pub token_lifetime_secs: i64,

    /// Directory holding the built frontend (index.html, assets/)
    pub dist_dir: PathBuf,

    /// SMTP delivery settings for registration email
    pub smtp: SmtpSettings,
}

/// SMTP settings for the registration notification email.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    /// Master switch; when false no email is ever sent
    pub enabled: bool,

    /// SMTP relay host
    pub host: String,

    /// SMTP relay port
    pub port: u16,

    /// Relay login, also used as the From address
    pub username: String,

    /// Relay password
    pub password: String,

    /// Use STARTTLS when talking to the relay
    pub tls: bool,
}

impl Settings {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Settings {
            database: PathBuf::from(
                env::var("ACRONYMS_DATABASE").unwrap_or_else(|_| "./acronyms.db".to_string()),
            ),

            host: env::var("ACRONYMS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("ACRONYMS_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ACRONYMS_PORT".to_string()))?,

            page_size: env::var("ACRONYMS_PAGE_SIZE")
                .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ACRONYMS_PAGE_SIZE".to_string()))?,

            cache_ttl: Duration::from_secs(
                env::var("ACRONYMS_CACHE_TTL_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("ACRONYMS_CACHE_TTL_SECS".to_string()))?,
            ),

            token_lifetime_secs: env::var("ACRONYMS_TOKEN_LIFETIME_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("ACRONYMS_TOKEN_LIFETIME_SECS".to_string())
                })?,

            dist_dir: PathBuf::from(
                env::var("ACRONYMS_DIST_DIR").unwrap_or_else(|_| "dist".to_string()),
            ),

            smtp: SmtpSettings {
                enabled: env::var("ACRONYMS_SMTP_ENABLED")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()
                    .unwrap_or(false),

                host: env::var("ACRONYMS_SMTP_HOST").unwrap_or_default(),

                port: env::var("ACRONYMS_SMTP_PORT")
                    .unwrap_or_else(|_| "25".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("ACRONYMS_SMTP_PORT".to_string()))?,

                username: env::var("ACRONYMS_SMTP_USERNAME").unwrap_or_default(),

                password: env::var("ACRONYMS_SMTP_PASSWORD").unwrap_or_default(),

                tls: env::var("ACRONYMS_SMTP_TLS")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .unwrap_or(true),
            },
        };

        // The default page size must itself be a valid request limit
        if settings.page_size < 1 || settings.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidValue("ACRONYMS_PAGE_SIZE".to_string()));
        }

        // SMTP needs a relay host once enabled
        if settings.smtp.enabled && settings.smtp.host.is_empty() {
            return Err(ConfigError::MissingSmtpConfig);
        }

        Ok(settings)
    }
}

impl Default for Settings {
    /// Defaults used by tests; `load()` is the production path.
    fn default() -> Self {
        Settings {
            database: PathBuf::from("./acronyms.db"),
            host: "127.0.0.1".to_string(),
            port: 8000,
            page_size: DEFAULT_PAGE_SIZE,
            cache_ttl: Duration::from_secs(60),
            token_lifetime_secs: 3600,
            dist_dir: PathBuf::from("dist"),
            smtp: SmtpSettings {
                enabled: false,
                host: String::new(),
                port: 25,
                username: String::new(),
                password: String::new(),
                tls: true,
            },
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("SMTP enabled but no relay host provided")]
    MissingSmtpConfig,
}
