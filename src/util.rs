// Small parsing and formatting helpers shared by the loader and the reports.
use crate::error::{ReportError, Result};
use num_format::{Locale, ToFormattedString};

/// Coerce a raw `score` cell.
///
/// - An empty cell means "no score published" and becomes `0.0`.
/// - A non-empty cell must parse as `f64` once surrounding whitespace is
///   dropped, so a whitespace-only cell is an error.
/// - `line` is only used for the error.
pub fn parse_score(raw: &str, line: u64) -> Result<f64> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.trim().parse::<f64>().map_err(|_| ReportError::Parse {
        line,
        value: raw.to_string(),
    })
}

/// Round to `decimals` places; exact halves go to the even neighbour.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}
