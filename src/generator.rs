//! Runs the generate-and-save sequence once.

use crate::color::ColorError;
use crate::composer::draw_idle_demo;
use crate::config::GeneratorConfig;
use crate::metadata::Metadata;
use crate::output::{save_sprite, write_metadata, OutputError};
use std::path::PathBuf;
use thiserror::Error;

/// Category and frame name of the demo sprite
pub const DEMO_CATEGORY: &str = "idle";
pub const DEMO_FRAME: &str = "idle_01_demo";

/// Error raised while generating assets
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("palette color is invalid: {0}")]
    Color(#[from] ColorError),
    #[error("{0}")]
    Output(#[from] OutputError),
}

/// Where the files went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub sprite_path: PathBuf,
    pub sprite_size: (u32, u32),
    pub metadata_path: PathBuf,
}

/// Generates Merry's placeholder assets from a resolved configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw and save the idle_01 demo frame.
    ///
    /// Returns the saved path and the image dimensions.
    pub fn generate_idle_demo(&self) -> Result<(PathBuf, (u32, u32)), GenerateError> {
        let image = draw_idle_demo(&self.config)?;
        let path = save_sprite(&image, &self.config.output_dir, DEMO_CATEGORY, DEMO_FRAME)?;
        Ok((path, image.dimensions()))
    }

    /// Write the metadata document for all planned animations.
    pub fn write_metadata(&self) -> Result<PathBuf, GenerateError> {
        let metadata = Metadata::from_config(&self.config);
        Ok(write_metadata(&metadata, &self.config.output_dir)?)
    }

    /// Demo frame first, then metadata.
    pub fn run(&self) -> Result<GenerateReport, GenerateError> {
        let (sprite_path, sprite_size) = self.generate_idle_demo()?;
        let metadata_path = self.write_metadata()?;
        tracing::info!(
            sprite = %sprite_path.display(),
            metadata = %metadata_path.display(),
            "generated assets"
        );
        Ok(GenerateReport {
            sprite_path,
            sprite_size,
            metadata_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn generator(dir: &TempDir) -> Generator {
        Generator::new(GeneratorConfig::merry().with_output_dir(dir.path().join("merry")))
    }

    #[test]
    fn test_run_writes_both_files() {
        let dir = TempDir::new().unwrap();
        let report = generator(&dir).run().unwrap();

        assert_eq!(report.sprite_path, dir.path().join("merry/idle/idle_01_demo.png"));
        assert_eq!(report.metadata_path, dir.path().join("merry/merry_metadata.json"));
        assert_eq!(report.sprite_size, (64, 64));
        assert!(report.sprite_path.exists());
        assert!(report.metadata_path.exists());
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let generator = generator(&dir);

        let first = generator.run().unwrap();
        let png = std::fs::read(&first.sprite_path).unwrap();
        let json = std::fs::read(&first.metadata_path).unwrap();

        let second = generator.run().unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second.sprite_path).unwrap(), png);
        assert_eq!(std::fs::read(&second.metadata_path).unwrap(), json);
    }

    #[test]
    fn test_saved_sprite_has_alpha() {
        let dir = TempDir::new().unwrap();
        let (path, _) = generator(&dir).generate_idle_demo().unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.color(), image::ColorType::Rgba8);
        let rgba = loaded.to_rgba8();
        assert_eq!(rgba.get_pixel(0, 0)[3], 0);
        assert_eq!(rgba.get_pixel(32, 40)[3], 255);
    }

    #[test]
    fn test_invalid_palette_is_color_error() {
        let dir = TempDir::new().unwrap();
        let mut config = GeneratorConfig::merry().with_output_dir(dir.path());
        config.palette.body_base = "#F5E6D".to_string();

        let result = Generator::new(config).generate_idle_demo();
        assert!(matches!(result, Err(GenerateError::Color(ColorError::InvalidLength(5)))));
    }
}
