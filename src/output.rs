//! PNG and metadata output, and sprite path layout
//!
//! Sprites live at `{output_dir}/{category}/{frame}.png`; the metadata
//! document sits at the root of the output directory.

use crate::config::METADATA_FILE_NAME;
use crate::metadata::Metadata;
use image::RgbaImage;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for output operations
#[derive(Debug)]
pub enum OutputError {
    /// IO error during file operations
    Io(io::Error),
    /// Image encoding error
    Image(image::ImageError),
    /// Metadata serialization error
    Json(serde_json::Error),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "IO error: {}", e),
            OutputError::Image(e) => write!(f, "Image error: {}", e),
            OutputError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Image(e) => Some(e),
            OutputError::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(e: serde_json::Error) -> Self {
        OutputError::Json(e)
    }
}

/// Create `dir` and its parents; succeeds if it already exists.
fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    if !dir.as_os_str().is_empty() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Save an RGBA image to a PNG file, creating parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Path of a sprite frame: `{output_dir}/{category}/{frame}.png`.
///
/// ```
/// use merry_sprites::output::sprite_path;
/// use std::path::{Path, PathBuf};
///
/// let path = sprite_path(Path::new("assets/characters/our_siamese_cat"), "idle", "idle_01_demo");
/// assert_eq!(path, PathBuf::from("assets/characters/our_siamese_cat/idle/idle_01_demo.png"));
/// ```
pub fn sprite_path(output_dir: &Path, category: &str, frame: &str) -> PathBuf {
    output_dir.join(category).join(format!("{}.png", frame))
}

/// Path of the metadata document under `output_dir`.
pub fn metadata_path(output_dir: &Path) -> PathBuf {
    output_dir.join(METADATA_FILE_NAME)
}

/// Save a sprite frame into its category directory.
///
/// Returns the written path. Existing files are overwritten.
pub fn save_sprite(
    image: &RgbaImage,
    output_dir: &Path,
    category: &str,
    frame: &str,
) -> Result<PathBuf, OutputError> {
    let path = sprite_path(output_dir, category, frame);
    save_png(image, &path)?;
    tracing::debug!(path = %path.display(), "saved sprite");
    Ok(path)
}

/// Write the metadata document as pretty JSON.
///
/// Returns the written path. Existing files are overwritten.
pub fn write_metadata(metadata: &Metadata, output_dir: &Path) -> Result<PathBuf, OutputError> {
    ensure_dir(output_dir)?;
    let path = metadata_path(output_dir);
    std::fs::write(&path, metadata.to_json()?)?;
    tracing::debug!(path = %path.display(), "wrote metadata");
    Ok(path)
}
