//! Generator configuration
//!
//! One immutable [`GeneratorConfig`] is built at startup from built-in
//! constants and the CLI's `--output-dir` override.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;

/// Default output root, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "assets/characters/our_siamese_cat";

/// Canvas dimensions of every sprite
pub const CANVAS_SIZE: [u32; 2] = [64, 64];

/// Centered area the character itself should fit in
pub const CHARACTER_AREA: [u32; 2] = [32, 32];

/// File name of the metadata document inside the output root
pub const METADATA_FILE_NAME: &str = "merry_metadata.json";

pub const CHARACTER_NAME: &str = "Merry the Siamese Cat";

pub const BRAND_NAME: &str = "SemoR Alarm App";
