use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Chassis style of a vehicle, the only filter dimension of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Suv,
    Estate,
    Sedan,
}

impl BodyType {
    /// All body types in display order
    pub const ALL: [BodyType; 3] = [BodyType::Suv, BodyType::Estate, BodyType::Sedan];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Suv => "suv",
            BodyType::Estate => "estate",
            BodyType::Sedan => "sedan",
        }
    }

    /// Chip label: the identifier with its first letter upper-cased ("Suv")
    pub fn label(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "suv" => Ok(BodyType::Suv),
            "estate" => Ok(BodyType::Estate),
            "sedan" => Ok(BodyType::Sedan),
            other => Err(Error::CatalogParse(format!("unknown body type '{}'", other))),
        }
    }
}

/// Powertrain of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    #[serde(rename = "plug-in hybrid")]
    PlugInHybrid,
    #[serde(rename = "pure electric")]
    PureElectric,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::PlugInHybrid => "plug-in hybrid",
            ModelType::PureElectric => "pure electric",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    pub model_name: String,
    pub body_type: BodyType,
    pub model_type: ModelType,
    pub image_url: String,
}

impl VehicleRecord {
    /// Image reference for a carousel card thumbnail
    pub fn card_image(&self) -> ImageRequest<'_> {
        ImageRequest {
            url: &self.image_url,
            fit: ContentFit::Contain,
        }
    }

    /// Image reference for the detail screen hero
    pub fn hero_image(&self) -> ImageRequest<'_> {
        ImageRequest {
            url: &self.image_url,
            fit: ContentFit::Cover,
        }
    }
}

/// How an image is fitted into its frame by the image loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFit {
    /// Whole image visible, letterboxed
    Contain,
    /// Frame filled, image cropped
    Cover,
}

impl ContentFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFit::Contain => "contain",
            ContentFit::Cover => "cover",
        }
    }
}

/// What the renderer hands to the image loading collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRequest<'a> {
    pub url: &'a str,
    pub fit: ContentFit,
}

impl ImageRequest<'_> {
    /// Last path segment of the URL, used as a placeholder caption
    pub fn file_name(&self) -> &str {
        self.url
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(self.url)
    }
}
