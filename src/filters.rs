// Linear-scan selections over the loaded rows. Nothing here copies or
// mutates a record; results borrow from the input slice.
use crate::types::{CodeField, Region, ScoreRecord, YearSelector};

pub fn filter_by_year<'a>(records: &'a [ScoreRecord], year: &str) -> Vec<&'a ScoreRecord> {
    records.iter().filter(|r| r.year == year).collect()
}

pub fn filter_by_country<'a>(
    records: &'a [ScoreRecord],
    iso3: &str,
    year: &YearSelector,
) -> Vec<&'a ScoreRecord> {
    records
        .iter()
        .filter(|r| r.iso3 == iso3 && year.matches(&r.year))
        .collect()
}

pub fn filter_by_region<'a>(
    records: &'a [ScoreRecord],
    region: Region,
    year: &YearSelector,
) -> Vec<&'a ScoreRecord> {
    records
        .iter()
        .filter(|r| r.region == region.code() && year.matches(&r.year))
        .collect()
}

/// Distinct codes of `field`, in the order they first appear.
pub fn distinct_codes(records: &[ScoreRecord], field: CodeField) -> Vec<&str> {
    let mut codes: Vec<&str> = Vec::new();
    for r in records {
        let code = match field {
            CodeField::Country => r.iso3.as_str(),
            CodeField::Region => r.region.as_str(),
        };
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample;
    use super::*;

    #[test]
    fn year_filter_keeps_file_order() {
        let data = sample();
        let got: Vec<&str> = filter_by_year(&data, "2016").iter().map(|r| r.iso3.as_str()).collect();
        assert_eq!(got, ["DNK", "CHL", "FRA"]);
        assert!(filter_by_year(&data, "1999").is_empty());
    }

    #[test]
    fn country_filter_by_year_or_all_years() {
        let data = sample();
        assert_eq!(filter_by_country(&data, "DNK", &YearSelector::All).len(), 2);
        let one = filter_by_country(&data, "DNK", &YearSelector::Year("2016".into()));
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].score, 90.0);
        assert!(filter_by_country(&data, "dnk", &YearSelector::All).is_empty());
    }

    #[test]
    fn region_filter_by_year_or_all_years() {
        let data = sample();
        assert_eq!(filter_by_region(&data, Region::WesternEurope, &YearSelector::All).len(), 3);
        let y = filter_by_region(&data, Region::WesternEurope, &YearSelector::Year("2016".into()));
        let codes: Vec<&str> = y.iter().map(|r| r.iso3.as_str()).collect();
        assert_eq!(codes, ["DNK", "FRA"]);
        assert!(filter_by_region(&data, Region::SubSaharanAfrica, &YearSelector::All).is_empty());
    }

    #[test]
    fn distinct_codes_are_first_seen_order() {
        let data = sample();
        assert_eq!(distinct_codes(&data, CodeField::Country), ["DNK", "CHL", "JPN", "FRA"]);
        assert_eq!(distinct_codes(&data, CodeField::Region), ["WE/EU", "AME", "AP"]);
    }

    #[test]
    fn filters_do_not_touch_input() {
        let data = sample();
        let before = data.clone();
        let _ = filter_by_year(&data, "2015");
        let _ = distinct_codes(&data, CodeField::Country);
        assert_eq!(data, before);
    }
}
