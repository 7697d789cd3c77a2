use anyhow::Result;

use showroom_core::{resolve_detail, Catalog, DetailState, Error};

pub fn run(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let vehicle = match resolve_detail(catalog, id) {
        DetailState::Found(vehicle) => vehicle,
        DetailState::NotFound { id } => return Err(Error::VehicleNotFound(id.to_string()).into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(vehicle)?);
        return Ok(());
    }

    let card = vehicle.card_image();
    let hero = vehicle.hero_image();
    println!("{}", vehicle.model_name);
    println!("  id:         {}", vehicle.id);
    println!("  body type:  {}", vehicle.body_type);
    println!("  powertrain: {}", vehicle.model_type);
    println!("  image:      {}", vehicle.image_url);
    println!("    card:     {} ({})", card.file_name(), card.fit.as_str());
    println!("    hero:     {} ({})", hero.file_name(), hero.fit.as_str());

    Ok(())
}
