use crate::domain::model::{Group, Record};
use std::collections::BTreeMap;

/// Partitions records by algorithm and orders every partition by
/// `(jobs, machines)`.
pub fn group_by_algo(records: Vec<Record>) -> Group {
    let mut by_algo: BTreeMap<String, Vec<Record>> = BTreeMap::new();
    for record in records {
        by_algo.entry(record.algo.clone()).or_default().push(record);
    }

    // sort_by_key 是穩定排序，相同 (jobs, machines) 保留輸入順序
    for rows in by_algo.values_mut() {
        rows.sort_by_key(Record::size_key);
    }

    tracing::debug!(
        "Grouped records into {} algorithms: {:?}",
        by_algo.len(),
        by_algo.keys().collect::<Vec<_>>()
    );

    Group::from_map(by_algo)
}
