pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::LocalStorage;
pub use config::PlotConfig;
pub use crate::core::chart::{ChartSpec, Metric};
pub use crate::core::{engine::PlotEngine, pipeline::PlotPipeline};
pub use utils::error::{PlotError, Result};
