use anyhow::Result;

use showroom_core::catalog::filter;
use showroom_core::{BodyType, Catalog};

pub fn run(catalog: &Catalog, body_type: Option<BodyType>, json: bool) -> Result<()> {
    let vehicles = filter(catalog.vehicles(), body_type);

    if json {
        println!("{}", serde_json::to_string_pretty(&vehicles)?);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("No vehicles match.");
        return Ok(());
    }

    let label = body_type.map(|b| b.label()).unwrap_or_else(|| "All".to_string());
    println!("Vehicles ({}, {}):\n", label, vehicles.len());

    for vehicle in &vehicles {
        println!(
            "  {:<16} {:<16} {:<8} {}",
            vehicle.id,
            vehicle.model_name,
            vehicle.body_type.as_str(),
            vehicle.model_type
        );
    }

    Ok(())
}
