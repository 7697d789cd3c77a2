use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parsing error: {0}")]
    CatalogParse(String),

    #[error("Duplicate vehicle id in catalog: {0}")]
    DuplicateVehicleId(String),

    #[error("Invalid image URL for vehicle '{id}': {source}")]
    InvalidImageUrl {
        id: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
