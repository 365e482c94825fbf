use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const PLACEHOLDER_SECRETS: [&str; 2] = [
    "your-super-secret-key-change-in-production",
    "jwt-secret-key-change-in-production",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} must be set")]
    Missing { key: &'static str },

    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("DATABASE_URL must be a PostgreSQL URL")]
    InvalidDatabaseUrl,

    #[error("{key} is set to a placeholder value, change it before running")]
    PlaceholderSecret { key: &'static str },
}

/// Log levels accepted by `LOG_LEVEL`.
///
/// `Warning` and `Critical` map onto tracing's `warn` and `error`
/// directives, the closest equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            other => Err(format!(
                "unknown log level '{other}', expected DEBUG, INFO, WARNING, ERROR or CRITICAL"
            )),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub log_level: LogLevel,
    pub security: SecurityConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub cors: CorsConfig,
    pub allowed_hosts: Vec<String>,
    pub smtp: SmtpConfig,
    pub broker: BrokerConfig,
    pub monitoring: MonitoringConfig,
    pub uploads: UploadConfig,
    pub pagination: PaginationConfig,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub debug: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub reload: bool,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub secret_key: String,
    pub jwt_secret_key: String,
    pub jwt_algorithm: String,
    pub access_token_expire_minutes: u64,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub echo: bool,
}

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub broker_url: String,
    pub result_backend: String,
}

#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    pub sentry_dsn: String,
    pub prometheus_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_upload_size: u64,
    pub upload_dir: String,
}

#[derive(Debug, Clone)]
pub struct PaginationConfig {
    pub default_page_size: i64,
    pub max_page_size: i64,
}

#[derive(Debug, Clone)]
pub struct FeatureFlags {
    pub user_registration: bool,
    pub email_verification: bool,
    pub rate_limiting: bool,
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// Called once at startup; the returned value is immutable and shared
    /// by reference with every component that needs it. Unrecognized
    /// environment keys are ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required_var("SECRET_KEY")?;
        ensure_not_placeholder("SECRET_KEY", &secret_key)?;

        let jwt_secret_key = required_var("JWT_SECRET_KEY")?;
        ensure_not_placeholder("JWT_SECRET_KEY", &jwt_secret_key)?;

        let database_url = required_var("DATABASE_URL")?;
        validate_database_url(&database_url)?;

        Ok(Settings {
            app: AppConfig {
                name: string_var("APP_NAME", "user-service"),
                version: string_var("APP_VERSION", "0.1.0"),
                debug: bool_var("DEBUG", false)?,
            },
            server: ServerConfig {
                host: string_var("HOST", "0.0.0.0"),
                port: parse_var("PORT", 8000)?,
                reload: bool_var("RELOAD", false)?,
            },
            log_level: log_level_var("LOG_LEVEL", LogLevel::Info)?,
            security: SecurityConfig {
                secret_key,
                jwt_secret_key,
                jwt_algorithm: string_var("JWT_ALGORITHM", "HS256"),
                access_token_expire_minutes: parse_var("ACCESS_TOKEN_EXPIRE_MINUTES", 30)?,
            },
            database: DatabaseConfig {
                url: database_url,
                echo: bool_var("DATABASE_ECHO", false)?,
            },
            redis: RedisConfig {
                url: string_var("REDIS_URL", "redis://localhost:6379/0"),
            },
            cors: CorsConfig {
                allowed_origins: list_var(
                    "ALLOWED_ORIGINS",
                    &["http://localhost:3000", "http://localhost:8000"],
                ),
                allowed_methods: list_var(
                    "ALLOWED_METHODS",
                    &["GET", "POST", "PUT", "DELETE", "PATCH"],
                )
                .into_iter()
                .map(|method| method.to_ascii_uppercase())
                .collect(),
                allowed_headers: list_var("ALLOWED_HEADERS", &["*"]),
            },
            allowed_hosts: list_var("ALLOWED_HOSTS", &["*"]),
            smtp: SmtpConfig {
                host: string_var("SMTP_HOST", ""),
                port: parse_var("SMTP_PORT", 587)?,
                user: string_var("SMTP_USER", ""),
                password: string_var("SMTP_PASSWORD", ""),
                from: string_var("SMTP_FROM", ""),
            },
            broker: BrokerConfig {
                broker_url: string_var("CELERY_BROKER_URL", "redis://localhost:6379/1"),
                result_backend: string_var("CELERY_RESULT_BACKEND", "redis://localhost:6379/2"),
            },
            monitoring: MonitoringConfig {
                sentry_dsn: string_var("SENTRY_DSN", ""),
                prometheus_enabled: bool_var("PROMETHEUS_ENABLED", false)?,
            },
            uploads: UploadConfig {
                max_upload_size: parse_var("MAX_UPLOAD_SIZE", 10_485_760)?,
                upload_dir: string_var("UPLOAD_DIR", "uploads/"),
            },
            pagination: PaginationConfig {
                default_page_size: parse_var("DEFAULT_PAGE_SIZE", 20)?,
                max_page_size: parse_var("MAX_PAGE_SIZE", 100)?,
            },
            features: FeatureFlags {
                user_registration: bool_var("FEATURE_USER_REGISTRATION", true)?,
                email_verification: bool_var("FEATURE_EMAIL_VERIFICATION", false)?,
                rate_limiting: bool_var("FEATURE_RATE_LIMITING", true)?,
            },
        })
    }
}

/// Split a comma-separated value into trimmed, non-empty elements.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn validate_database_url(url: &str) -> Result<(), ConfigError> {
    // Both scheme spellings that PostgreSQL drivers accept.
    let scheme = url.split("://").next().unwrap_or("");
    match scheme {
        "postgresql" | "postgres" => Ok(()),
        _ => Err(ConfigError::InvalidDatabaseUrl),
    }
}

fn ensure_not_placeholder(key: &'static str, value: &str) -> Result<(), ConfigError> {
    if PLACEHOLDER_SECRETS.contains(&value) {
        return Err(ConfigError::PlaceholderSecret { key });
    }
    Ok(())
}

fn required_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing { key })
}

fn string_var(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn list_var(key: &str, default: &[&str]) -> Vec<String> {
    match env::var(key) {
        Ok(raw) => split_csv(&raw),
        Err(_) => default.iter().map(|item| item.to_string()).collect(),
    }
}

fn bool_var(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
            key,
            message: format!("'{raw}' is not a boolean"),
        }),
        Err(_) => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

fn log_level_var(key: &'static str, default: LogLevel) -> Result<LogLevel, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|message| ConfigError::Invalid { key, message }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_preserves_order() {
        assert_eq!(split_csv("a, b"), vec!["a", "b"]);
        assert_eq!(
            split_csv(" http://a.test ,http://b.test,"),
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn split_csv_drops_empty_elements() {
        assert_eq!(split_csv(",,"), Vec::<String>::new());
    }

    #[test]
    fn database_url_scheme_must_be_postgres() {
        assert!(validate_database_url("postgresql://u:p@localhost/app").is_ok());
        assert!(validate_database_url("postgres://u:p@localhost/app").is_ok());
        assert!(matches!(
            validate_database_url("mysql://u:p@localhost/app"),
            Err(ConfigError::InvalidDatabaseUrl)
        ));
        assert!(matches!(
            validate_database_url("localhost/app"),
            Err(ConfigError::InvalidDatabaseUrl)
        ));
    }

    #[test]
    fn placeholder_secrets_are_rejected() {
        assert!(matches!(
            ensure_not_placeholder("SECRET_KEY", "your-super-secret-key-change-in-production"),
            Err(ConfigError::PlaceholderSecret { key: "SECRET_KEY" })
        ));
        assert!(matches!(
            ensure_not_placeholder("JWT_SECRET_KEY", "jwt-secret-key-change-in-production"),
            Err(ConfigError::PlaceholderSecret { key: "JWT_SECRET_KEY" })
        ));
        assert!(ensure_not_placeholder("SECRET_KEY", "an-actual-secret").is_ok());
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("CRITICAL".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert_eq!(LogLevel::Critical.as_directive(), "error");
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
