mod filter;
mod models;
mod store;

pub use filter::{filter, FilterOption};
pub use models::{BodyType, ContentFit, ImageRequest, ModelType, VehicleRecord};
pub use store::Catalog;
