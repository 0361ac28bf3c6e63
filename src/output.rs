use crate::error::Result;
use crate::types::ReportRow;
use csv::WriterBuilder;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

/// Write `rows` to `out_dir/file_name`, creating the directory if needed.
///
/// The header row is always written, even when `rows` is empty. An existing
/// file with the same name is overwritten.
pub fn write_csv<T: ReportRow>(out_dir: &Path, file_name: &str, rows: &[T]) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(file_name);
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(&path)?;
    wtr.write_record(T::HEADERS)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(path)
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    if max_rows == 0 {
        return;
    }
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}", table_str);
    if rows.len() > max_rows {
        println!("... {} more rows", rows.len() - max_rows);
    }
    println!();
}
