use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tabled::Tabled;

/// One line of `transparency_active.csv` exactly as it appears on disk.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "", default)]
    pub row_id: String,
    pub country: String,
    pub iso3: String,
    pub region: String,
    pub year: String,
    pub score: String,
    pub rank: String,
    pub sources: String,
    #[serde(rename = "standardError")]
    pub standard_error: String,
}

/// A loaded row. `score` is always a number; blank source scores become `0.0`.
/// `region` is the raw code; it is resolved to a `Region` only by the region
/// reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub row_id: String,
    pub country: String,
    pub iso3: String,
    pub region: String,
    pub year: String,
    pub score: f64,
    pub rank: String,
    pub sources: String,
    pub standard_error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    AsiaPacific,
    WesternEurope,
    Americas,
    MiddleEastNorthAfrica,
    SubSaharanAfrica,
    EuropeCentralAsia,
}

impl Region {
    /// Menu order.
    pub const ALL: [Region; 6] = [
        Region::AsiaPacific,
        Region::SubSaharanAfrica,
        Region::EuropeCentralAsia,
        Region::MiddleEastNorthAfrica,
        Region::Americas,
        Region::WesternEurope,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Region::AsiaPacific => "AP",
            Region::WesternEurope => "WE/EU",
            Region::Americas => "AME",
            Region::MiddleEastNorthAfrica => "MENA",
            Region::SubSaharanAfrica => "SSA",
            Region::EuropeCentralAsia => "ECA",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::AsiaPacific => "Asia Pacific",
            Region::WesternEurope => "Western Europe",
            Region::Americas => "Americas",
            Region::MiddleEastNorthAfrica => "Middle East and North Africa",
            Region::SubSaharanAfrica => "Sub Saharan Africa",
            Region::EuropeCentralAsia => "Europe and Central Asia",
        }
    }

    /// Code usable inside a file name (`WE/EU` -> `WE_EU`).
    pub fn slug(self) -> &'static str {
        match self {
            Region::WesternEurope => "WE_EU",
            other => other.code(),
        }
    }

    /// Country count shown next to the region in the menu.
    pub fn expected_countries(self) -> usize {
        match self {
            Region::AsiaPacific => 32,
            Region::WesternEurope => 31,
            Region::Americas => 33,
            Region::MiddleEastNorthAfrica => 18,
            Region::SubSaharanAfrica => 49,
            Region::EuropeCentralAsia => 19,
        }
    }
}

impl FromStr for Region {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| ReportError::UnknownRegion(s.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which end of the score ranking to take. Higher scores mean less corruption,
/// so `Top` is reported as the "lowest" corrupted governments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    Top,
    Bottom,
}

impl Ranking {
    pub fn descending(self) -> bool {
        matches!(self, Ranking::Top)
    }

    pub fn corruption_label(self) -> &'static str {
        match self {
            Ranking::Top => "lowest",
            Ranking::Bottom => "highest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearSelector {
    Year(String),
    All,
}

impl YearSelector {
    pub fn matches(&self, year: &str) -> bool {
        match self {
            YearSelector::Year(y) => y == year,
            YearSelector::All => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeField {
    Country,
    Region,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

/// Output rows. Field order is the column order of the written file.
pub trait ReportRow: Serialize {
    const HEADERS: &'static [&'static str];
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct CountryScoreRow {
    pub year: String,
    pub country: String,
    pub score: f64,
}

impl ReportRow for CountryScoreRow {
    const HEADERS: &'static [&'static str] = &["year", "country", "score"];
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct CountrySummaryRow {
    pub country: String,
    pub iso3: String,
    pub average: f64,
    #[serde(rename = "min score")]
    #[tabled(rename = "min score")]
    pub min_score: f64,
    #[serde(rename = "max score")]
    #[tabled(rename = "max score")]
    pub max_score: f64,
}

impl ReportRow for CountrySummaryRow {
    const HEADERS: &'static [&'static str] = &["country", "iso3", "average", "min score", "max score"];
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct RegionSummaryRow {
    pub region: String,
    #[serde(rename = "region code")]
    #[tabled(rename = "region code")]
    pub region_code: String,
    pub average: f64,
    #[serde(rename = "min score")]
    #[tabled(rename = "min score")]
    pub min_score: f64,
    #[serde(rename = "max score")]
    #[tabled(rename = "max score")]
    pub max_score: f64,
}

impl ReportRow for RegionSummaryRow {
    const HEADERS: &'static [&'static str] = &["region", "region code", "average", "min score", "max score"];
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct RegionCountryScoreRow {
    pub year: String,
    pub region: String,
    pub country: String,
    pub score: f64,
}

impl ReportRow for RegionCountryScoreRow {
    const HEADERS: &'static [&'static str] = &["year", "region", "country", "score"];
}

/// Full source row, used for the per-country export.
#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct CountryYearRow {
    #[serde(rename = "")]
    #[tabled(rename = "")]
    pub row_id: String,
    pub country: String,
    pub iso3: String,
    pub region: String,
    pub year: String,
    pub score: f64,
    pub rank: String,
    pub sources: String,
    #[serde(rename = "standardError")]
    #[tabled(rename = "standardError")]
    pub standard_error: String,
}

impl ReportRow for CountryYearRow {
    const HEADERS: &'static [&'static str] = &[
        "", "country", "iso3", "region", "year", "score", "rank", "sources", "standardError",
    ];
}

impl From<&ScoreRecord> for CountryYearRow {
    fn from(r: &ScoreRecord) -> Self {
        Self {
            row_id: r.row_id.clone(),
            country: r.country.clone(),
            iso3: r.iso3.clone(),
            region: r.region.clone(),
            year: r.year.clone(),
            score: r.score,
            rank: r.rank.clone(),
            sources: r.sources.clone(),
            standard_error: r.standard_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_codes_round_trip_through_parse() {
        for region in Region::ALL {
            assert_eq!(region.code().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn unknown_region_code_is_rejected() {
        let err = "EU".parse::<Region>().unwrap_err();
        assert!(matches!(err, ReportError::UnknownRegion(ref c) if c == "EU"));
        assert!("ap".parse::<Region>().is_err());
    }

    #[test]
    fn western_europe_slug_is_filename_safe() {
        assert_eq!(Region::WesternEurope.code(), "WE/EU");
        assert_eq!(Region::WesternEurope.slug(), "WE_EU");
        assert_eq!(Region::Americas.slug(), "AME");
        assert!(Region::ALL.iter().all(|r| !r.slug().contains('/')));
    }

    #[test]
    fn ranking_labels_follow_score_direction() {
        assert!(Ranking::Top.descending());
        assert_eq!(Ranking::Top.corruption_label(), "lowest");
        assert!(!Ranking::Bottom.descending());
        assert_eq!(Ranking::Bottom.corruption_label(), "highest");
    }

    #[test]
    fn year_selector_all_matches_everything() {
        assert!(YearSelector::All.matches("2012"));
        assert!(YearSelector::Year("2015".into()).matches("2015"));
        assert!(!YearSelector::Year("2015".into()).matches("2016"));
    }
}
