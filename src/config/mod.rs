pub mod settings;

pub use settings::{
    AppConfig, BrokerConfig, ConfigError, CorsConfig, DatabaseConfig, FeatureFlags, LogLevel,
    MonitoringConfig, PaginationConfig, RedisConfig, SecurityConfig, ServerConfig, Settings,
    SmtpConfig, UploadConfig,
};
