//! Configuration resolution
//!
//! Built-in constants are the only source of settings; the CLI may
//! redirect the output directory. Nothing is read from the working
//! directory or the environment.

use super::schema::GeneratorConfig;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration resolution error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output directory
    pub output_dir: Option<PathBuf>,
}

/// Build the run configuration: built-ins, then CLI overrides.
///
/// # Errors
///
/// Returns `ConfigError::Validation` listing every problem if the result
/// is not usable.
pub fn resolve_config(overrides: &CliOverrides) -> Result<GeneratorConfig, ConfigError> {
    let mut config = GeneratorConfig::merry();

    if let Some(ref dir) = overrides.output_dir {
        tracing::debug!(output_dir = %dir.display(), "output directory overridden");
        config.output_dir = dir.clone();
    }

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_OUTPUT_DIR;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(&CliOverrides::default()).unwrap();
        assert_eq!(config, GeneratorConfig::merry());
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_cli_overrides_output_dir() {
        let overrides = CliOverrides {
            output_dir: Some(PathBuf::from("override")),
        };
        let config = resolve_config(&overrides).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("override"));
        assert_eq!(config.canvas_size, [64, 64]);
    }

    #[test]
    fn test_empty_output_dir_fails_validation() {
        let overrides = CliOverrides {
            output_dir: Some(PathBuf::new()),
        };
        match resolve_config(&overrides) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec!["output_dir: must be a non-empty path".to_string()]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec!["a: bad".to_string(), "b: worse".to_string()]);
        assert_eq!(err.to_string(), "Config validation failed:\n  - a: bad\n  - b: worse");
    }
}
