#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::render::ChartStyle;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "artifacts/results.csv";
pub const DEFAULT_OUTDIR: &str = "artifacts";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub style: ChartStyle,
    pub manifest: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTDIR),
            style: ChartStyle::default(),
            manifest: false,
        }
    }
}

impl PlotConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

impl ConfigProvider for PlotConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn chart_style(&self) -> &ChartStyle {
        &self.style
    }

    fn write_manifest(&self) -> bool {
        self.manifest
    }
}

impl Validate for PlotConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path.to_string_lossy())?;
        validate_path("outdir", &self.output_dir.to_string_lossy())?;
        validate_range("dpi", self.style.dpi, 36, 600)?;
        validate_range("width_in", self.style.width_in, 0.5, 40.0)?;
        validate_range("height_in", self.style.height_in, 0.5, 40.0)?;
        validate_range("cap_size", self.style.cap_size, 0, 20)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlotConfig::default();
        assert_eq!(config.input_path(), Path::new("artifacts/results.csv"));
        assert_eq!(config.output_dir(), Path::new("artifacts"));
        assert_eq!(config.chart_style().dpi, 170);
        assert!(!config.write_manifest());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = PlotConfig::new("", "out");
        assert!(config.validate().is_err());

        config = PlotConfig::default();
        config.style.dpi = 5000;
        assert!(config.validate().is_err());

        config = PlotConfig::default();
        config.style.height_in = 0.0;
        assert!(config.validate().is_err());
    }
}
