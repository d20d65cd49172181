use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("erreur de configuration : {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Validation(#[from] engine::EngineError),
    #[error(transparent)]
    Api(#[from] client::ApiError),
    #[error("erreur d'entrée/sortie : {0}")]
    Io(#[from] std::io::Error),
    #[error("erreur d'écriture CSV : {0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Argument(String),
}
