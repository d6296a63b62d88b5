use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] roster_config::ConfigError),

    #[error(transparent)]
    Db(#[from] roster_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
