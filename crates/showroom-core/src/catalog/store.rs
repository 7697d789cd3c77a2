use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::models::{BodyType, ModelType, VehicleRecord};
use crate::{Error, Result};

const IMAGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/volvo-cars/god-frontend-code-test/master/public";

/// Immutable, ordered vehicle catalog
///
/// Ids are unique. Once built the catalog is never mutated; screens borrow
/// records from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    vehicles: Vec<VehicleRecord>,
}

/// On-disk fixture layout
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    vehicles: Vec<VehicleRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(vehicles: Vec<VehicleRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            if !seen.insert(vehicle.id.as_str()) {
                return Err(Error::DuplicateVehicleId(vehicle.id.clone()));
            }
        }
        Ok(Self { vehicles })
    }

    /// The Recharge lineup shipped with the application
    pub fn builtin() -> Self {
        let entry = |id: &str, name: &str, body: BodyType, model: ModelType, image: &str| {
            VehicleRecord {
                id: id.to_string(),
                model_name: name.to_string(),
                body_type: body,
                model_type: model,
                image_url: format!("{}/images/{}", IMAGE_BASE_URL, image),
            }
        };

        Self {
            vehicles: vec![
                entry("xc90-recharge", "XC90 Recharge", BodyType::Suv, ModelType::PlugInHybrid, "xc90_recharge.jpg"),
                entry("xc60-recharge", "XC60 Recharge", BodyType::Suv, ModelType::PlugInHybrid, "xc60_recharge.jpg"),
                entry("xc40-recharge", "XC40 Recharge", BodyType::Suv, ModelType::PlugInHybrid, "xc40_recharge.jpg"),
                entry("xc40-bev", "XC40 Recharge", BodyType::Suv, ModelType::PureElectric, "xc40_bev.jpg"),
                entry("v90-recharge", "V90 Recharge", BodyType::Estate, ModelType::PlugInHybrid, "v90_recharge.jpg"),
                entry("v60-recharge", "V60 Recharge", BodyType::Estate, ModelType::PlugInHybrid, "v60_recharge.jpg"),
                entry("s90-recharge", "S90 Recharge", BodyType::Sedan, ModelType::PlugInHybrid, "s90_recharge.jpg"),
                entry("s60-recharge", "S60 Recharge", BodyType::Sedan, ModelType::PlugInHybrid, "s60_recharge.jpg"),
            ],
        }
    }

    /// Parse a TOML fixture (`[[vehicles]]` tables)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| Error::CatalogParse(e.to_string()))?;

        for vehicle in &file.vehicles {
            url::Url::parse(&vehicle.image_url).map_err(|source| Error::InvalidImageUrl {
                id: vehicle.id.clone(),
                source,
            })?;
        }

        Self::new(file.vehicles)
    }

    /// Load a TOML fixture from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded {} vehicles from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Load from an optional fixture path, falling back to the built-in lineup
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Serialize back to the fixture format
    pub fn to_toml_string(&self) -> Result<String> {
        let file = CatalogFile {
            vehicles: self.vehicles.clone(),
        };
        toml::to_string_pretty(&file).map_err(|e| Error::CatalogParse(e.to_string()))
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Look up a record by id
    pub fn find(&self, id: &str) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Position of a record in catalog order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.vehicles.iter().position(|v| v.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lineup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);
        let suvs = catalog
            .vehicles()
            .iter()
            .filter(|v| v.body_type == BodyType::Suv)
            .count();
        assert_eq!(suvs, 4);
        assert!(Catalog::new(catalog.vehicles().to_vec()).is_ok());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::builtin();
        let car = catalog.find("xc90-recharge").unwrap();
        assert_eq!(car.model_name, "XC90 Recharge");
        assert!(catalog.find("nonexistent").is_none());
        assert_eq!(catalog.position("v90-recharge"), Some(4));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut vehicles = Catalog::builtin().vehicles().to_vec();
        vehicles.push(vehicles[0].clone());
        match Catalog::new(vehicles) {
            Err(Error::DuplicateVehicleId(id)) => assert_eq!(id, "xc90-recharge"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_fixture_round_trip() {
        let catalog = Catalog::builtin();
        let text = catalog.to_toml_string().unwrap();
        assert!(text.contains("body_type = \"suv\""));
        assert_eq!(Catalog::from_toml_str(&text).unwrap(), catalog);
    }

    #[test]
    fn test_fixture_rejects_bad_url() {
        let text = r#"
            [[vehicles]]
            id = "ex30"
            model_name = "EX30"
            body_type = "suv"
            model_type = "pure electric"
            image_url = "not a url"
        "#;
        assert!(matches!(
            Catalog::from_toml_str(text),
            Err(Error::InvalidImageUrl { .. })
        ));
    }

    #[test]
    fn test_fixture_rejects_unknown_body_type() {
        let text = r#"
            [[vehicles]]
            id = "c40"
            model_name = "C40"
            body_type = "coupe"
            model_type = "pure electric"
            image_url = "https://example.com/c40.jpg"
        "#;
        assert!(matches!(
            Catalog::from_toml_str(text),
            Err(Error::CatalogParse(_))
        ));
    }

    #[test]
    fn test_empty_fixture() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }
}
