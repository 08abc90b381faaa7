use crate::config::toml_config::TomlConfig;
use crate::config::{PlotConfig, DEFAULT_INPUT, DEFAULT_OUTDIR};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "flowshop-plot")]
#[command(about = "Plot flow-shop benchmark results: runtime and makespan vs number of jobs")]
pub struct CliArgs {
    /// Path to the input results CSV [default: artifacts/results.csv]
    #[arg(long = "in", value_name = "PATH")]
    pub input: Option<String>,

    /// Directory the charts are written to [default: artifacts]
    #[arg(long, value_name = "DIR")]
    pub outdir: Option<String>,

    /// Optional TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Raster resolution in dots per inch [default: 170]
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Also write charts.json with the plotted data
    #[arg(long)]
    pub manifest: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliArgs {
    /// Resolves settings: command-line flags, then the TOML file, then
    /// built-in defaults.
    pub fn resolve(&self) -> Result<PlotConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.to_plot_config()
            }
            None => PlotConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input_path = input.into();
        }
        if let Some(outdir) = &self.outdir {
            config.output_dir = outdir.into();
        }
        if let Some(dpi) = self.dpi {
            config.style.dpi = dpi;
        }
        if self.manifest {
            config.manifest = true;
        }

        tracing::debug!(
            "Resolved config (defaults: {}, {}): {:?}",
            DEFAULT_INPUT,
            DEFAULT_OUTDIR,
            config
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let args = CliArgs::try_parse_from(["flowshop-plot"]).unwrap();
        let config = args.resolve().unwrap();
        assert_eq!(config, PlotConfig::default());
    }

    #[test]
    fn test_in_and_outdir_flags() {
        let args =
            CliArgs::try_parse_from(["flowshop-plot", "--in", "r.csv", "--outdir", "plots"]).unwrap();
        let config = args.resolve().unwrap();
        assert_eq!(config.input_path, PathBuf::from("r.csv"));
        assert_eq!(config.output_dir, PathBuf::from("plots"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\npath = \"toml.csv\"\n[output]\ndir = \"toml-out\"\n[chart]\ndpi = 90\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap();

        let args = CliArgs::try_parse_from([
            "flowshop-plot",
            "--config",
            config_path,
            "--outdir",
            "cli-out",
        ])
        .unwrap();
        let config = args.resolve().unwrap();

        assert_eq!(config.input_path, PathBuf::from("toml.csv"));
        assert_eq!(config.output_dir, PathBuf::from("cli-out"));
        assert_eq!(config.style.dpi, 90);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CliArgs::try_parse_from(["flowshop-plot", "--bogus"]).is_err());
    }
}
