use crate::error::{ReportError, Result};
use crate::types::{RawRow, ScoreRecord};
use crate::util::parse_score;
use csv::{Reader, ReaderBuilder};
use log::{debug, info};
use std::io::Read;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 8] = [
    "score",
    "iso3",
    "region",
    "country",
    "year",
    "rank",
    "sources",
    "standardError",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub blank_scores: usize,
}

/// Read the whole score file into memory, in file order.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<(Vec<ScoreRecord>, LoadReport)> {
    let path = path.as_ref();
    debug!("loading scores from {}", path.display());
    let rdr = ReaderBuilder::new().from_path(path)?;
    let (records, report) = read_records(rdr)?;
    info!(
        "loaded {} rows from {} ({} blank scores set to 0.0)",
        report.total_rows,
        path.display(),
        report.blank_scores
    );
    Ok((records, report))
}

pub fn read_records<R: Read>(mut rdr: Reader<R>) -> Result<(Vec<ScoreRecord>, LoadReport)> {
    let headers = rdr.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(ReportError::MissingColumn(*missing));
    }

    let mut records = Vec::new();
    let mut blank_scores = 0usize;
    for result in rdr.records() {
        let raw = result?;
        let line = raw.position().map(|p| p.line()).unwrap_or(0);
        let row: RawRow = raw.deserialize(Some(&headers))?;

        if row.score.is_empty() {
            blank_scores += 1;
        }
        let score = parse_score(&row.score, line)?;

        records.push(ScoreRecord {
            row_id: row.row_id,
            country: row.country,
            iso3: row.iso3,
            region: row.region,
            year: row.year,
            score,
            rank: row.rank,
            sources: row.sources,
            standard_error: row.standard_error,
        });
    }

    let report = LoadReport {
        total_rows: records.len(),
        blank_scores,
    };
    Ok((records, report))
}
