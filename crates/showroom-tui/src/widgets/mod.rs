mod brand_header;
mod carousel;
mod detail;
mod filter_bar;
mod help;
mod status_bar;
mod vehicle_card;

pub use brand_header::BrandHeaderWidget;
pub use carousel::{CarouselWidget, PaginationWidget};
pub use detail::DetailWidget;
pub use filter_bar::FilterBarWidget;
pub use help::HelpWidget;
pub use status_bar::StatusBarWidget;
pub use vehicle_card::{CardFrame, VehicleCardWidget};
