//! Animation metadata document (`merry_metadata.json`).

use crate::animation::AnimationCatalog;
use crate::config::GeneratorConfig;
use crate::palette::Palette;
use serde::{Deserialize, Serialize};

/// Free-text guidance for artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notes {
    pub key_feature: String,
    pub style: String,
    pub priority: String,
}

impl Notes {
    pub fn merry() -> Self {
        Self {
            key_feature: "Ice blue eyes with neon blue (#00D4FF) SemoR brand highlights".to_string(),
            style: "8-bit pixel art, no anti-aliasing".to_string(),
            priority: "idle_01 is the foundation frame for all other animations".to_string(),
        }
    }
}

/// Snapshot of the configuration and planned animations.
///
/// Field order is the key order of the written JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub character: String,
    pub brand: String,
    pub canvas_size: [u32; 2],
    pub character_area: [u32; 2],
    pub color_palette: Palette,
    pub animations: AnimationCatalog,
    pub notes: Notes,
}

impl Metadata {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            character: config.character.clone(),
            brand: config.brand.clone(),
            canvas_size: config.canvas_size,
            character_area: config.character_area,
            color_palette: config.palette.clone(),
            animations: config.animations.clone(),
            notes: Notes::merry(),
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
