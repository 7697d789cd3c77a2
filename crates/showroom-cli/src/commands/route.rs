use anyhow::Result;

use showroom_core::{resolve_detail, Catalog, DetailState, Error, Route};

pub fn run(catalog: &Catalog, path: &str) -> Result<()> {
    let route = Route::parse(path).ok_or_else(|| Error::InvalidRoute(path.to_string()))?;

    match &route {
        Route::Home => {
            println!("{} -> home ({} vehicles)", route, catalog.len());
        }
        Route::Vehicle { id } => match resolve_detail(catalog, id) {
            DetailState::Found(vehicle) => {
                println!("{} -> {} ({})", route, vehicle.model_name, vehicle.model_type);
            }
            DetailState::NotFound { .. } => {
                println!("{} -> {}", route, DetailState::NOT_FOUND_MESSAGE);
            }
        },
    }

    Ok(())
}
