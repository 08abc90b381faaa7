use crate::config::PlotConfig;
use crate::utils::error::{PlotError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Optional settings file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub chart: Option<ChartConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: Option<String>,
    pub manifest: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    pub dpi: Option<u32>,
    pub width_in: Option<f64>,
    pub height_in: Option<f64>,
    pub cap_size: Option<u32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlotError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESULTS_DIR})，未定義的變數視為錯誤
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlotError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let mut missing = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.push(var_name.to_string());
                String::new()
            })
        });

        if !missing.is_empty() {
            return Err(PlotError::ConfigError {
                message: format!("undefined environment variables: {}", missing.join(", ")),
            });
        }

        Ok(result.into_owned())
    }

    /// Overlays the values present in this file onto `config`.
    pub fn apply_to(&self, config: &mut PlotConfig) {
        if let Some(path) = self.input.as_ref().and_then(|i| i.path.as_ref()) {
            config.input_path = path.into();
        }

        if let Some(output) = &self.output {
            if let Some(dir) = &output.dir {
                config.output_dir = dir.into();
            }
            if let Some(manifest) = output.manifest {
                config.manifest = manifest;
            }
        }

        if let Some(chart) = &self.chart {
            if let Some(dpi) = chart.dpi {
                config.style.dpi = dpi;
            }
            if let Some(width_in) = chart.width_in {
                config.style.width_in = width_in;
            }
            if let Some(height_in) = chart.height_in {
                config.style.height_in = height_in;
            }
            if let Some(cap_size) = chart.cap_size {
                config.style.cap_size = cap_size;
            }
        }
    }

    pub fn to_plot_config(&self) -> PlotConfig {
        let mut config = PlotConfig::default();
        self.apply_to(&mut config);
        config
    }
}
