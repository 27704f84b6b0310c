//! Configuration types: the resolved [`GeneratorConfig`] and its
//! validation errors.

use super::{BRAND_NAME, CANVAS_SIZE, CHARACTER_AREA, CHARACTER_NAME, DEFAULT_OUTPUT_DIR};
use crate::animation::AnimationCatalog;
use crate::palette::Palette;
use std::path::PathBuf;

/// A single validation problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Everything a generator run needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub character: String,
    pub brand: String,
    pub canvas_size: [u32; 2],
    pub character_area: [u32; 2],
    pub output_dir: PathBuf,
    pub palette: Palette,
    pub animations: AnimationCatalog,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::merry()
    }
}

impl GeneratorConfig {
    /// Merry's built-in configuration, writing under [`DEFAULT_OUTPUT_DIR`].
    pub fn merry() -> Self {
        Self {
            character: CHARACTER_NAME.to_string(),
            brand: BRAND_NAME.to_string(),
            canvas_size: CANVAS_SIZE,
            character_area: CHARACTER_AREA,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            palette: Palette::merry(),
            animations: AnimationCatalog::merry(),
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Validate the configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.canvas_size[0] == 0 || self.canvas_size[1] == 0 {
            errors.push(ConfigValidationError {
                field: "canvas_size".to_string(),
                message: "dimensions must be positive".to_string(),
            });
        }

        if self.character_area[0] > self.canvas_size[0]
            || self.character_area[1] > self.canvas_size[1]
        {
            errors.push(ConfigValidationError {
                field: "character_area".to_string(),
                message: "must fit inside the canvas".to_string(),
            });
        }

        if self.output_dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "output_dir".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        for problem in self.palette.validate() {
            errors.push(ConfigValidationError {
                field: "color_palette".to_string(),
                message: problem,
            });
        }

        for sequence in self.animations.sequences() {
            if sequence.frames.is_empty() {
                errors.push(ConfigValidationError {
                    field: format!("animations.{}", sequence.name),
                    message: "must list at least one frame".to_string(),
                });
            }
        }

        errors
    }
}
