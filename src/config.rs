//! Runtime settings, optionally loaded from a TOML file.

use crate::coordinate::DEFAULT_HALF_EXTENT;
use crate::point::DEFAULT_REMOVE_RADIUS;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How LINES mode connects consecutive points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LinesStyle {
    /// One segment between every consecutive pair.
    #[default]
    Connected,
    /// Independent segments for pairs 0-1, 2-3, ...
    Disjoint,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Half-extent of the visible square, in grid units.
    pub view_half_extent: f32,
    /// Grid lines and tick labels cover `-grid_extent..=grid_extent`.
    pub grid_extent: i32,
    /// Pick radius for removing points, in grid units.
    pub remove_radius: f32,
    /// Marker diameter in pixels.
    pub point_size: f32,
    pub font_size: f32,
    pub line_width: f32,
    pub lines_style: LinesStyle,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            window_width: 600.0,
            window_height: 600.0,
            view_half_extent: DEFAULT_HALF_EXTENT,
            grid_extent: 10,
            remove_radius: DEFAULT_REMOVE_RADIUS,
            point_size: 5.0,
            font_size: 12.0,
            line_width: 1.0,
            lines_style: LinesStyle::default(),
        }
    }
}

impl PlotterConfig {
    /// Reads and validates a config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!("Configuration: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("view_half_extent", self.view_half_extent),
            ("remove_radius", self.remove_radius),
            ("point_size", self.point_size),
            ("font_size", self.font_size),
            ("line_width", self.line_width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        if self.grid_extent < 0 || self.grid_extent as f32 > self.view_half_extent {
            return Err(ConfigError::Invalid(format!(
                "grid_extent must be between 0 and view_half_extent ({}), got {}",
                self.view_half_extent, self.grid_extent
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = PlotterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.view_half_extent, 12.0);
        assert_eq!(config.grid_extent, 10);
        assert_eq!(config.lines_style, LinesStyle::Connected);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config =
            PlotterConfig::from_toml("lines_style = \"disjoint\"\npoint_size = 8.0\n").unwrap();
        assert_eq!(config.lines_style, LinesStyle::Disjoint);
        assert_eq!(config.point_size, 8.0);
        assert_eq!(config.window_width, 600.0);
    }

    #[test]
    fn rejects_non_positive_values() {
        let err = PlotterConfig::from_toml("remove_radius = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("remove_radius"));
    }

    #[test]
    fn rejects_grid_larger_than_view() {
        let err = PlotterConfig::from_toml("grid_extent = 13").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_lines_style() {
        let err = PlotterConfig::from_toml("lines_style = \"dashed\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_reads_file_and_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "view_half_extent = 15.0").unwrap();
        let config = PlotterConfig::load(file.path()).unwrap();
        assert_eq!(config.view_half_extent, 15.0);

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "view_half_extent = [").unwrap();
        match PlotterConfig::load(broken.path()) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, broken.path()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PlotterConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
