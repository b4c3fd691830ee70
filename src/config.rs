//! Generator configuration
//!
//! Nothing is read unless a TOML file is passed explicitly; the defaults
//! reproduce a bare run in the working directory.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_LABEL_PX;
use crate::error::{AssetError, AssetResult};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory the PNGs are written to (created if missing)
    pub output_dir: PathBuf,
    /// Label font file; None = probe well-known system fonts
    pub font: Option<PathBuf>,
    /// Label pixel height
    pub font_size: f32,
    /// Render and save assets on rayon's thread pool
    pub parallel: bool,
    /// Print one line per written asset
    pub verbose: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            font: None,
            font_size: DEFAULT_LABEL_PX,
            parallel: false,
            verbose: false,
        }
    }
}

impl GeneratorConfig {
    pub fn from_file(path: &Path) -> AssetResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| AssetError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|message| AssetError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        if !config.font_size.is_finite() || config.font_size <= 0.0 {
            return Err(format!(
                "font_size must be a positive number, got {}",
                config.font_size
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = GeneratorConfig::from_toml("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.font_size, DEFAULT_LABEL_PX);
    }

    #[test]
    fn test_parse_full() {
        let toml = r#"
output_dir = "assets"
font = "/usr/share/fonts/custom.ttf"
font_size = 48.0
parallel = true
verbose = true
"#;
        let config = GeneratorConfig::from_toml(toml).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("assets"));
        assert_eq!(config.font, Some(PathBuf::from("/usr/share/fonts/custom.ttf")));
        assert_eq!(config.font_size, 48.0);
        assert!(config.parallel);
        assert!(config.verbose);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(GeneratorConfig::from_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn test_non_positive_font_size_rejected() {
        let err = GeneratorConfig::from_toml("font_size = 0.0").unwrap_err();
        assert!(err.contains("font_size"));
        assert!(GeneratorConfig::from_toml("font_size = -3.0").is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let path = Path::new("/nonexistent/meitra/assets.toml");
        assert!(matches!(
            GeneratorConfig::from_file(path),
            Err(AssetError::ConfigRead { .. })
        ));
    }
}
