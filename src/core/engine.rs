use crate::core::{Pipeline, RenderReport};
use crate::utils::error::{PlotError, Result};

pub struct PlotEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PlotEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs load -> group -> render. An input without data rows fails
    /// before the output directory is touched.
    pub fn run(&self) -> Result<RenderReport> {
        tracing::info!("Starting chart generation");

        // Extract
        tracing::info!("📥 Loading results from {}", self.pipeline.source());
        let records = self.pipeline.extract()?;
        if records.is_empty() {
            return Err(PlotError::EmptyInput {
                path: self.pipeline.source(),
            });
        }
        tracing::info!("Loaded {} records", records.len());

        self.pipeline.prepare_output()?;

        // Transform
        let group = self.pipeline.transform(records)?;
        tracing::info!(
            "Grouped into {} algorithms: {}",
            group.len(),
            group.algorithms().join(", ")
        );

        // Load
        let report = self.pipeline.load(group)?;
        tracing::info!("📊 Wrote {} charts", report.charts.len());

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Group, Record};
    use crate::core::grouper::group_by_algo;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MockPipeline {
        records: Vec<Record>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl Pipeline for MockPipeline {
        fn source(&self) -> String {
            "mock.csv".to_string()
        }

        fn extract(&self) -> Result<Vec<Record>> {
            self.calls.borrow_mut().push("extract");
            Ok(self.records.clone())
        }

        fn prepare_output(&self) -> Result<()> {
            self.calls.borrow_mut().push("prepare_output");
            Ok(())
        }

        fn transform(&self, records: Vec<Record>) -> Result<Group> {
            self.calls.borrow_mut().push("transform");
            Ok(group_by_algo(records))
        }

        fn load(&self, group: Group) -> Result<RenderReport> {
            self.calls.borrow_mut().push("load");
            Ok(RenderReport {
                charts: group.algorithms().iter().map(PathBuf::from).collect(),
                manifest: None,
            })
        }
    }

    fn record(algo: &str) -> Record {
        Record {
            algo: algo.to_string(),
            jobs: 10,
            machines: 5,
            runs: 1,
            time_best_ms: None,
            time_mean_ms: 1.0,
            time_std_ms: 0.0,
            makespan_best: 1,
            makespan_mean: 1.0,
            makespan_std: 0.0,
        }
    }

    #[test]
    fn test_stages_run_in_order() {
        let engine = PlotEngine::new(MockPipeline {
            records: vec![record("GA"), record("SA")],
            ..Default::default()
        });

        let report = engine.run().unwrap();
        assert_eq!(report.charts, vec![PathBuf::from("GA"), PathBuf::from("SA")]);
        assert_eq!(
            *engine.pipeline.calls.borrow(),
            vec!["extract", "prepare_output", "transform", "load"]
        );
    }

    #[test]
    fn test_empty_input_stops_before_output() {
        let engine = PlotEngine::new(MockPipeline::default());

        let err = engine.run().unwrap_err();
        assert!(matches!(err, PlotError::EmptyInput { ref path } if path == "mock.csv"));
        assert_eq!(*engine.pipeline.calls.borrow(), vec!["extract"]);
    }
}
