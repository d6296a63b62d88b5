mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod remote_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use remote_config::RemoteConfig;

const DEFAULT_DATABASE_FILENAME: &str = "directory.db";
const DEFAULT_REMOTE_URL: &str = "http://localhost:9002/graphql";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";
