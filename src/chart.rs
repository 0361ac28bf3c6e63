use crate::error::{ReportError, Result};
use crate::types::{CountryYearRow, RegionSummaryRow};
use log::info;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

/// Category/value pairs plus the labels for one bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTable {
    pub caption: String,
    pub x_desc: String,
    pub y_desc: String,
    pub bars: Vec<(String, f64)>,
}

impl ChartTable {
    /// Top of the value axis, with some headroom above the tallest bar.
    fn y_max(&self) -> f64 {
        let tallest = self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        if tallest > 0.0 {
            tallest * 1.1
        } else {
            1.0
        }
    }
}

pub fn region_average_chart(rows: &[RegionSummaryRow]) -> ChartTable {
    ChartTable {
        caption: "Average score by region".to_string(),
        x_desc: "region".to_string(),
        y_desc: "average score".to_string(),
        bars: rows.iter().map(|r| (r.region_code.clone(), r.average)).collect(),
    }
}

pub fn country_trend_chart(iso3: &str, rows: &[CountryYearRow]) -> ChartTable {
    ChartTable {
        caption: format!("{iso3} score by year"),
        x_desc: "year".to_string(),
        y_desc: "score".to_string(),
        bars: rows.iter().map(|r| (r.year.clone(), r.score)).collect(),
    }
}

/// Render `table` as a PNG bar chart at `path`.
pub fn render_bar_chart(table: &ChartTable, path: &Path, size: (u32, u32)) -> Result<()> {
    if table.bars.is_empty() {
        return Err(ReportError::EmptyGroup(format!("chart \"{}\"", table.caption)));
    }
    draw_bars(table, path, size).map_err(|e| ReportError::Chart(e.to_string()))?;
    info!("wrote {} bars to {}", table.bars.len(), path.display());
    Ok(())
}

fn draw_bars(table: &ChartTable, path: &Path, size: (u32, u32)) -> std::result::Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let n = table.bars.len() as u32;
    let mut chart = ChartBuilder::on(&root)
        .caption(&table.caption, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..n).into_segmented(), 0f64..table.y_max())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(table.bars.len())
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => table
                .bars
                .get(*i as usize)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc(table.x_desc.as_str())
        .y_desc(table.y_desc.as_str())
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RGBColor(94, 60, 153).mix(0.85).filled())
            .margin(8)
            .data(table.bars.iter().enumerate().map(|(i, (_, v))| (i as u32, *v))),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn region_row(code: &str, average: f64) -> RegionSummaryRow {
        RegionSummaryRow {
            region: String::new(),
            region_code: code.to_string(),
            average,
            min_score: 0.0,
            max_score: 0.0,
        }
    }

    #[test]
    fn region_chart_uses_codes_and_averages() {
        let table = region_average_chart(&[region_row("AP", 44.5), region_row("WE/EU", 66.2)]);
        assert_eq!(table.x_desc, "region");
        assert_eq!(table.y_desc, "average score");
        assert_eq!(table.bars, vec![("AP".to_string(), 44.5), ("WE/EU".to_string(), 66.2)]);
    }

    #[test]
    fn country_chart_uses_years_and_scores() {
        let row = CountryYearRow {
            row_id: "0".into(),
            country: "Kenya".into(),
            iso3: "KEN".into(),
            region: "SSA".into(),
            year: "2020".into(),
            score: 31.0,
            rank: "124".into(),
            sources: "9".into(),
            standard_error: "1.6".into(),
        };
        let table = country_trend_chart("KEN", &[row]);
        assert_eq!(table.x_desc, "year");
        assert_eq!(table.bars, vec![("2020".to_string(), 31.0)]);
        assert!(table.caption.contains("KEN"));
    }

    #[test]
    fn value_axis_has_headroom() {
        let table = region_average_chart(&[region_row("AP", 50.0)]);
        assert!((table.y_max() - 55.0).abs() < 1e-9);
        let flat = region_average_chart(&[region_row("AP", 0.0)]);
        assert_eq!(flat.y_max(), 1.0);
    }

    #[test]
    fn empty_table_is_rejected_before_drawing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("none.png");
        let err = render_bar_chart(&region_average_chart(&[]), &path, (640, 480)).unwrap_err();
        assert!(matches!(err, ReportError::EmptyGroup(_)));
        assert!(!path.exists());
    }
}
