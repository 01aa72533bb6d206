//! Startup configuration: defaults, then an optional JSON file, then CLI flags.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use flat_cube::core::{Cube, Palette};
use flat_cube::types::{DEFAULT_HEIGHT, DEFAULT_PALETTE, DEFAULT_WIDTH, MAX_DIMENSION};

/// Config file contents. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub palette: Option<Vec<String>>,
    pub seed: Option<u32>,
}

impl FileConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing config JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }
}

/// Resolved settings used to build the cube and session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub width: usize,
    pub height: usize,
    pub palette: Vec<String>,
    pub seed: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            seed: 1,
        }
    }
}

impl AppConfig {
    /// Layer `overrides` on top of `self`; set fields win.
    pub fn merge(self, overrides: FileConfig) -> Self {
        Self {
            width: overrides.width.unwrap_or(self.width),
            height: overrides.height.unwrap_or(self.height),
            palette: overrides.palette.unwrap_or(self.palette),
            seed: overrides.seed.unwrap_or(self.seed),
        }
    }

    /// Build the initial cube. Dimension and palette errors come from the model;
    /// the upper bound is a terminal layout limit.
    pub fn build_cube(&self) -> Result<Cube> {
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            bail!(
                "cube {}x{} is larger than the {MAX_DIMENSION}x{MAX_DIMENSION} the terminal view supports",
                self.width,
                self.height
            );
        }
        let palette = Palette::new(&self.palette).context("invalid palette")?;
        let cube = Cube::create(self.width, self.height, palette).context("invalid cube size")?;
        Ok(cube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_the_standard_cube() {
        let cube = AppConfig::default().build_cube().unwrap();
        assert_eq!(cube, Cube::default());
    }

    #[test]
    fn file_fields_override_defaults() {
        let file = FileConfig::from_json(r#"{ "width": 4, "seed": 9 }"#).unwrap();
        let cfg = AppConfig::default().merge(file);
        assert_eq!(cfg.width, 4);
        assert_eq!(cfg.height, DEFAULT_HEIGHT);
        assert_eq!(cfg.seed, 9);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_json(r#"{ "colour": "red" }"#).is_err());
    }

    #[test]
    fn later_layers_win() {
        let file = FileConfig {
            width: Some(5),
            ..FileConfig::default()
        };
        let cli = FileConfig {
            width: Some(2),
            palette: Some(["a", "b", "c", "d", "e", "f"].map(String::from).to_vec()),
            ..FileConfig::default()
        };
        let cfg = AppConfig::default().merge(file).merge(cli);
        assert_eq!(cfg.width, 2);
        assert_eq!(cfg.palette[0], "a");
    }

    #[test]
    fn bad_sizes_fail() {
        let mut cfg = AppConfig::default();
        cfg.width = 0;
        assert!(cfg.build_cube().is_err());
        cfg.width = MAX_DIMENSION + 1;
        assert!(cfg.build_cube().is_err());
    }

    #[test]
    fn short_palette_fails() {
        let cfg = AppConfig {
            palette: vec!["red".into(), "red".into()],
            ..AppConfig::default()
        };
        let err = cfg.build_cube().unwrap_err();
        assert!(format!("{err:#}").contains("distinct"));
    }
}
