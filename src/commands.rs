// One menu selection = one Command. `execute` runs the whole pipeline for it:
// load the source file, filter/aggregate, write the CSV, and draw a chart
// for the two graph options.
use crate::chart::{country_trend_chart, region_average_chart, render_bar_chart};
use crate::error::Result;
use crate::loader::load_records;
use crate::output::{preview_table_rows, write_csv};
use crate::reports;
use crate::types::{Ranking, Region};
use crate::util::format_int;
use log::info;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RankCountries { year: String, ranking: Ranking, n: usize },
    CountrySummaries,
    RegionSummaries,
    RankRegionCountries { year: String, region: Region, ranking: Ranking, n: usize },
    RegionChart,
    CountryTrend { iso3: String },
}

impl Command {
    pub fn csv_name(&self) -> String {
        match self {
            Command::RankCountries { year, ranking, n } => {
                format!("top_{}_{}_corrupted_gov_in_{}.csv", n, ranking.corruption_label(), year)
            }
            Command::CountrySummaries => "calculated_score_governments.csv".to_string(),
            Command::RegionSummaries | Command::RegionChart => "calculated_score_regions.csv".to_string(),
            Command::RankRegionCountries { year, region, ranking, n } => format!(
                "top_{}_{}_gov_in_{}_in_{}.csv",
                n,
                ranking.corruption_label(),
                region.slug(),
                year
            ),
            Command::CountryTrend { iso3 } => format!("country_{}_all_year.csv", iso3),
        }
    }

    pub fn chart_name(&self) -> Option<String> {
        match self {
            Command::RegionChart => Some("regions_scores_graph.png".to_string()),
            Command::CountryTrend { iso3 } => Some(format!("country_{}_all_year.png", iso3)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
    pub preview_rows: usize,
    pub chart_size: (u32, u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub csv: PathBuf,
    pub chart: Option<PathBuf>,
}

pub fn execute(cmd: &Command, settings: &Settings) -> Result<Outcome> {
    let (data, load_report) = load_records(&settings.data_path)?;
    info!(
        "running {:?} over {} rows",
        cmd,
        format_int(load_report.total_rows)
    );

    let out = settings.output_dir.as_path();
    let csv_name = cmd.csv_name();
    let mut chart = None;

    let csv = match cmd {
        Command::RankCountries { year, ranking, n } => {
            let rows = reports::rank_countries(&data, year, *n, *ranking)?;
            preview_table_rows(&rows, settings.preview_rows);
            write_csv(out, &csv_name, &rows)?
        }
        Command::CountrySummaries => {
            let rows = reports::country_summaries(&data)?;
            preview_table_rows(&rows, settings.preview_rows);
            write_csv(out, &csv_name, &rows)?
        }
        Command::RegionSummaries | Command::RegionChart => {
            let rows = reports::region_summaries(&data)?;
            preview_table_rows(&rows, settings.preview_rows);
            let csv = write_csv(out, &csv_name, &rows)?;
            if let Some(png) = cmd.chart_name() {
                let path = out.join(png);
                render_bar_chart(&region_average_chart(&rows), &path, settings.chart_size)?;
                chart = Some(path);
            }
            csv
        }
        Command::RankRegionCountries { year, region, ranking, n } => {
            let rows = reports::rank_region_countries(&data, *region, year, *n, *ranking)?;
            preview_table_rows(&rows, settings.preview_rows);
            write_csv(out, &csv_name, &rows)?
        }
        Command::CountryTrend { iso3 } => {
            let rows = reports::country_history(&data, iso3)?;
            preview_table_rows(&rows, settings.preview_rows);
            let csv = write_csv(out, &csv_name, &rows)?;
            if let Some(png) = cmd.chart_name() {
                let path = out.join(png);
                render_bar_chart(&country_trend_chart(iso3, &rows), &path, settings.chart_size)?;
                chart = Some(path);
            }
            csv
        }
    };

    Ok(Outcome { csv, chart })
}
