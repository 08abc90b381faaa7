use crate::core::chart::{ChartSpec, Metric};
use crate::core::grouper::group_by_algo;
use crate::core::loader::read_results_csv;
use crate::core::render::{render_line, render_runtime_with_error_bars};
use crate::core::{ConfigProvider, Group, Pipeline, Record, RenderReport, Storage};
use crate::utils::error::Result;

pub const MANIFEST_FILE: &str = "charts.json";

pub struct PlotPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PlotPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for PlotPipeline<S, C> {
    fn source(&self) -> String {
        self.config.input_path().display().to_string()
    }

    fn extract(&self) -> Result<Vec<Record>> {
        read_results_csv(self.config.input_path())
    }

    fn prepare_output(&self) -> Result<()> {
        self.storage.ensure_ready()
    }

    fn transform(&self, records: Vec<Record>) -> Result<Group> {
        Ok(group_by_algo(records))
    }

    fn load(&self, group: Group) -> Result<RenderReport> {
        let style = self.config.chart_style();
        let mut report = RenderReport::default();

        // 1) 執行時間（含標準差誤差線）
        let runtime_path = self.storage.path_for(&Metric::RuntimeMeanMs.file_name());
        report
            .charts
            .push(render_runtime_with_error_bars(&group, &runtime_path, style)?);
        tracing::debug!("Rendered {}", runtime_path.display());

        // 2)-4) makespan 的 best / mean / std
        for metric in [Metric::MakespanBest, Metric::MakespanMean, Metric::MakespanStd] {
            let out_path = self.storage.path_for(&metric.file_name());
            report.charts.push(render_line(
                &group,
                metric,
                metric.title(),
                metric.y_label(),
                &out_path,
                style,
            )?);
            tracing::debug!("Rendered {}", out_path.display());
        }

        if self.config.write_manifest() {
            let specs: Vec<ChartSpec> = Metric::ALL
                .iter()
                .map(|&metric| ChartSpec::build(&group, metric))
                .collect();
            let json = serde_json::to_string_pretty(&specs)?;
            let path = self.storage.write_file(MANIFEST_FILE, json.as_bytes())?;
            tracing::debug!("Chart manifest written to {}", path.display());
            report.manifest = Some(path);
        }

        Ok(report)
    }
}
