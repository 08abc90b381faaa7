use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Column names every results CSV must carry.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "algo",
    "jobs",
    "machines",
    "runs",
    "time_mean_ms",
    "time_std_ms",
    "makespan_best",
    "makespan_mean",
    "makespan_std",
];

/// One benchmark observation: an algorithm run `runs` times on a
/// `jobs` x `machines` flow-shop instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub algo: String,
    pub jobs: u32,
    pub machines: u32,
    pub runs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_best_ms: Option<f64>,
    pub time_mean_ms: f64,
    pub time_std_ms: f64,
    pub makespan_best: u64,
    pub makespan_mean: f64,
    pub makespan_std: f64,
}

impl Record {
    pub fn size_key(&self) -> (u32, u32) {
        (self.jobs, self.machines)
    }
}

/// Records partitioned by algorithm name.
///
/// Algorithms iterate in ascending name order; each partition is sorted by
/// `(jobs, machines)`. Duplicate sizes stay in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    by_algo: BTreeMap<String, Vec<Record>>,
}

impl Group {
    pub(crate) fn from_map(by_algo: BTreeMap<String, Vec<Record>>) -> Self {
        Self { by_algo }
    }

    pub fn algorithms(&self) -> Vec<&str> {
        self.by_algo.keys().map(String::as_str).collect()
    }

    pub fn get(&self, algo: &str) -> Option<&[Record]> {
        self.by_algo.get(algo).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.by_algo
            .iter()
            .map(|(algo, rows)| (algo.as_str(), rows.as_slice()))
    }

    /// Number of algorithms.
    pub fn len(&self) -> usize {
        self.by_algo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_algo.is_empty()
    }

    pub fn total_records(&self) -> usize {
        self.by_algo.values().map(Vec::len).sum()
    }
}

/// Files written by one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    /// Chart images in the order they were written.
    pub charts: Vec<PathBuf>,
    pub manifest: Option<PathBuf>,
}
