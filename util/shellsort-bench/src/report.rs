//! CSV and JSON reports of benchmark rows.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::benchmark::BenchmarkRow;
use crate::error::Result;

/// By versioning the result files, we can catch compatibility issues early.
const BENCHMARK_RESULT_VERSION: usize = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub version: usize,
    pub results: Vec<BenchmarkRow>,
}

/// Writes `implementation,n,mean_ms,std_ms` followed by one record per row.
pub fn write_csv<W: Write>(writer: W, rows: &[BenchmarkRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    if rows.is_empty() {
        writer.write_record(["implementation", "n", "mean_ms", "std_ms"])?;
    }

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

pub fn write_json<W: Write>(writer: W, rows: &[BenchmarkRow]) -> Result<()> {
    let result = BenchmarkResult {
        version: BENCHMARK_RESULT_VERSION,
        results: rows.to_vec(),
    };
    serde_json::to_writer_pretty(writer, &result)?;

    Ok(())
}

pub fn write_csv_file(path: &Path, rows: &[BenchmarkRow]) -> Result<()> {
    write_csv(BufWriter::new(File::create(path)?), rows)
}

pub fn write_json_file(path: &Path, rows: &[BenchmarkRow]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(&mut writer, rows)?;
    writer.flush()?;

    Ok(())
}
