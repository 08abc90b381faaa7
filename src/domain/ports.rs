use crate::core::render::ChartStyle;
use crate::domain::model::{Group, Record, RenderReport};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// Creates the output location if it does not exist yet.
    fn ensure_ready(&self) -> Result<()>;
    fn path_for(&self, file_name: &str) -> PathBuf;
    fn write_file(&self, file_name: &str, data: &[u8]) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_dir(&self) -> &Path;
    fn chart_style(&self) -> &ChartStyle;
    fn write_manifest(&self) -> bool;
}

/// Loader -> Grouper -> Renderer, run in that order by `PlotEngine`.
pub trait Pipeline {
    /// Human-readable name of the input, used in diagnostics.
    fn source(&self) -> String;
    fn extract(&self) -> Result<Vec<Record>>;
    fn prepare_output(&self) -> Result<()>;
    fn transform(&self, records: Vec<Record>) -> Result<Group>;
    fn load(&self, group: Group) -> Result<RenderReport>;
}
