use crate::error::{ReportError, Result};
use crate::filters::{distinct_codes, filter_by_country, filter_by_region, filter_by_year};
use crate::types::{
    CodeField, CountryScoreRow, CountrySummaryRow, CountryYearRow, Ranking, Region,
    RegionCountryScoreRow, RegionSummaryRow, ScoreRecord, Summary, YearSelector,
};
use crate::util::round_to;
use std::cmp::Ordering;

/// Sort by score and keep the first `n`.
///
/// The sort is stable, so rows with equal scores stay in their input order.
/// Asking for more rows than exist returns everything available.
pub fn top_or_bottom_n<'a>(
    records: &[&'a ScoreRecord],
    n: usize,
    ranking: Ranking,
) -> Vec<&'a ScoreRecord> {
    let mut sorted = records.to_vec();
    if ranking.descending() {
        sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    } else {
        sorted.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    }
    let keep = n.min(sorted.len());
    sorted.truncate(keep);
    sorted
}

/// Average (rounded to 2 decimals), min and max score of a group.
///
/// `label` names the group in the error returned when it is empty.
pub fn summarize(group: &[&ScoreRecord], label: &str) -> Result<Summary> {
    let Some(first) = group.first() else {
        return Err(ReportError::EmptyGroup(label.to_string()));
    };
    let (mut min, mut max, mut sum) = (first.score, first.score, 0.0);
    for r in group {
        min = min.min(r.score);
        max = max.max(r.score);
        sum += r.score;
    }
    Ok(Summary {
        average: round_to(sum / group.len() as f64, 2),
        min,
        max,
    })
}

/// Report 1: best or worst `n` countries of one year.
pub fn rank_countries(
    records: &[ScoreRecord],
    year: &str,
    n: usize,
    ranking: Ranking,
) -> Result<Vec<CountryScoreRow>> {
    let in_year = filter_by_year(records, year);
    if in_year.is_empty() {
        return Err(ReportError::EmptyGroup(format!("year {year}")));
    }
    Ok(top_or_bottom_n(&in_year, n, ranking)
        .into_iter()
        .map(|r| CountryScoreRow {
            year: year.to_string(),
            country: r.country.clone(),
            score: r.score,
        })
        .collect())
}

/// Report 2: min/max/average per country over every year.
///
/// The country name is taken from the last row seen for the code.
pub fn country_summaries(records: &[ScoreRecord]) -> Result<Vec<CountrySummaryRow>> {
    distinct_codes(records, CodeField::Country)
        .into_iter()
        .map(|code| -> Result<CountrySummaryRow> {
            let rows = filter_by_country(records, code, &YearSelector::All);
            let summary = summarize(&rows, &format!("country {code}"))?;
            let country = rows.last().map(|r| r.country.clone()).unwrap_or_default();
            Ok(CountrySummaryRow {
                country,
                iso3: code.to_string(),
                average: summary.average,
                min_score: summary.min,
                max_score: summary.max,
            })
        })
        .collect()
}

/// Report 3: min/max/average per region over every year.
pub fn region_summaries(records: &[ScoreRecord]) -> Result<Vec<RegionSummaryRow>> {
    distinct_codes(records, CodeField::Region)
        .into_iter()
        .map(|code| -> Result<RegionSummaryRow> {
            let region: Region = code.parse()?;
            let rows = filter_by_region(records, region, &YearSelector::All);
            let summary = summarize(&rows, &format!("region {code}"))?;
            Ok(RegionSummaryRow {
                region: region.name().to_string(),
                region_code: code.to_string(),
                average: summary.average,
                min_score: summary.min,
                max_score: summary.max,
            })
        })
        .collect()
}

/// Report 4: best or worst `n` countries of a region in one year.
pub fn rank_region_countries(
    records: &[ScoreRecord],
    region: Region,
    year: &str,
    n: usize,
    ranking: Ranking,
) -> Result<Vec<RegionCountryScoreRow>> {
    let selected = filter_by_region(records, region, &YearSelector::Year(year.to_string()));
    if selected.is_empty() {
        return Err(ReportError::EmptyGroup(format!("region {region} in {year}")));
    }
    Ok(top_or_bottom_n(&selected, n, ranking)
        .into_iter()
        .map(|r| RegionCountryScoreRow {
            year: year.to_string(),
            region: region.name().to_string(),
            country: r.country.clone(),
            score: r.score,
        })
        .collect())
}

/// Report 6: every source row of one country, in file order.
pub fn country_history(records: &[ScoreRecord], iso3: &str) -> Result<Vec<CountryYearRow>> {
    let rows = filter_by_country(records, iso3, &YearSelector::All);
    if rows.is_empty() {
        return Err(ReportError::EmptyGroup(format!("country {iso3}")));
    }
    Ok(rows.into_iter().map(CountryYearRow::from).collect())
}
