pub mod catalog;
pub mod config;
pub mod error;
pub mod motion;
pub mod routes;
pub mod scroll_offset;

pub use catalog::{BodyType, Catalog, ModelType, VehicleRecord};
pub use config::{AppConfig, EasingType, SafeArea, ScrollConfig};
pub use error::{Error, Result};
pub use routes::{resolve_detail, DetailState, Navigator, Route};
pub use scroll_offset::{ScrollOffset, ScrollReader};
