use crate::domain::model::{Record, REQUIRED_COLUMNS};
use crate::utils::error::{PlotError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Column layout written by the benchmark runner.
const WRITE_HEADER: [&str; 10] = [
    "algo",
    "jobs",
    "machines",
    "runs",
    "time_best_ms",
    "time_mean_ms",
    "time_std_ms",
    "makespan_best",
    "makespan_mean",
    "makespan_std",
];

/// Reads a benchmark results CSV into records, in file order.
///
/// Columns are looked up by header name, so their order does not matter and
/// extra columns are ignored. The first malformed row aborts the whole load.
pub fn read_results_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    tracing::debug!("Reading benchmark results from {}", path.display());

    let file = File::open(path)?;
    let records = read_results(file)?;

    tracing::debug!("Parsed {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn read_results<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        // 完全空白的檔案：沒有標題也沒有資料，交給上層當作空輸入處理
        tracing::warn!("Input has no header row");
        return Ok(Vec::new());
    }
    check_header(&headers)?;

    let mut records = Vec::new();
    let mut raw = StringRecord::new();
    while rdr.read_record(&mut raw)? {
        let line = raw.position().map(|p| p.line()).unwrap_or_default();

        let record: Record = raw
            .deserialize(Some(&headers))
            .map_err(|e| PlotError::ParseError {
                line,
                message: e.to_string(),
            })?;
        check_record(&record, line)?;

        records.push(record);
    }

    Ok(records)
}

fn check_header(headers: &StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PlotError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn check_record(record: &Record, line: u64) -> Result<()> {
    validate_non_empty_string("algo", &record.algo).map_err(|_| PlotError::InvalidRecord {
        line,
        field: "algo".to_string(),
        reason: "must not be empty".to_string(),
    })?;

    validate_non_negative(line, "time_mean_ms", record.time_mean_ms)?;
    validate_non_negative(line, "time_std_ms", record.time_std_ms)?;
    validate_non_negative(line, "makespan_mean", record.makespan_mean)?;
    validate_non_negative(line, "makespan_std", record.makespan_std)?;
    if let Some(best) = record.time_best_ms {
        validate_non_negative(line, "time_best_ms", best)?;
    }
    Ok(())
}

/// Writes records in the benchmark runner's column layout.
pub fn write_results_csv<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(WRITE_HEADER)?;

    for r in records {
        wtr.write_record([
            r.algo.clone(),
            r.jobs.to_string(),
            r.machines.to_string(),
            r.runs.to_string(),
            r.time_best_ms.map(format_float).unwrap_or_default(),
            format_float(r.time_mean_ms),
            format_float(r.time_std_ms),
            r.makespan_best.to_string(),
            format_float(r.makespan_mean),
            format_float(r.makespan_std),
        ])?;
    }

    wtr.flush()?;
    tracing::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn format_float(v: f64) -> String {
    format!("{:.6}", v)
}
