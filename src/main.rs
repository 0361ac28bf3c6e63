// Entry point and interactive menu.
//
// Each run shows the six report options once, asks the follow-up questions
// for the chosen option, turns the answers into a `Command` and executes it.
// An unknown menu choice is reported and the program exits normally; every
// other bad answer or data problem is a fatal error.
mod chart;
mod commands;
mod error;
mod filters;
mod loader;
mod output;
mod reports;
mod types;
mod util;

use anyhow::Result;
use clap::Parser;
use commands::{Command, Settings};
use error::ReportError;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use types::{Ranking, Region};

#[derive(Parser, Debug)]
#[command(
    name = "cpi_report",
    version,
    about = "Reports and charts over the corruption perception index dataset"
)]
struct Cli {
    /// Source CSV file.
    #[arg(long, default_value = "transparency_active.csv")]
    data: PathBuf,
    /// Directory receiving the CSV and PNG outputs.
    #[arg(long, default_value = "./OUTPUT")]
    output_dir: PathBuf,
    /// Rows shown in the console preview (0 disables it).
    #[arg(long, default_value_t = 5)]
    preview: usize,
    /// Chart size in pixels, WIDTHxHEIGHT.
    #[arg(long, default_value = "1024x768", value_parser = parse_size)]
    chart_size: (u32, u32),
}

fn parse_size(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let w = w.trim().parse::<u32>().map_err(|e| e.to_string())?;
    let h = h.trim().parse::<u32>().map_err(|e| e.to_string())?;
    if w == 0 || h == 0 {
        return Err("chart size must be non-zero".to_string());
    }
    Ok((w, h))
}

/// Print `prompt` and read one trimmed line. EOF reads as an empty answer.
fn ask<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<String> {
    print!("{} ", prompt);
    io::stdout().flush()?;
    let mut buf = String::new();
    input.read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn invalid(prompt: &str, value: &str) -> ReportError {
    ReportError::InvalidInput {
        prompt: prompt.to_string(),
        value: value.to_string(),
    }
}

fn parse_ranking(prompt: &str, answer: &str) -> std::result::Result<Ranking, ReportError> {
    match answer {
        "1" => Ok(Ranking::Top),
        "0" => Ok(Ranking::Bottom),
        other => Err(invalid(prompt, other)),
    }
}

fn parse_count(prompt: &str, answer: &str) -> std::result::Result<usize, ReportError> {
    answer.parse::<usize>().map_err(|_| invalid(prompt, answer))
}

fn print_menu() {
    println!("CORRUPTION PERCEPTION INDEX REPORTS");
    println!("Scores of 182 governments over the past 10 years:");
    println!("[1] Number of top highest or lowest corrupted governments in a year.");
    println!("[2] Min, max and average scores of 182 Governments over the past 10 years.");
    println!("[3] Min, max and average scores of all regions over the past 10 years.");
    println!("[4] Number of countries in a region with top highest or lowest scores in a year.");
    println!("[5] Display all regions with average scores over the past 10 years by graph");
    println!("[6] Display score changes of a country over the past 10 years in graph");
}

/// Ask the follow-up questions for a menu choice.
///
/// Returns `Ok(None)` for an unknown choice.
fn read_command<R: BufRead>(input: &mut R) -> Result<Option<Command>> {
    let choice = ask(input, "Which option do you want to request?[1 | 2 | 3 | 4 | 5 | 6]")?;
    let cmd = match choice.as_str() {
        "1" => {
            let year = ask(input, "Which year do you want to get the data?(2012-2021)")?;
            let q = "Do you want to get the top lowest [1] or top highest [0] corrupted governments?";
            let ranking = parse_ranking(q, &ask(input, q)?)?;
            let q = "Top number of how many countries? (maximum: 182)";
            let n = parse_count(q, &ask(input, q)?)?;
            Command::RankCountries { year, ranking, n }
        }
        "2" => Command::CountrySummaries,
        "3" => Command::RegionSummaries,
        "4" => {
            let year = ask(input, "Which year do you want to get the data?(2012-2021)")?;
            println!("Which region?");
            for region in Region::ALL {
                println!(
                    "{} ({}: {} countries)",
                    region.code(),
                    region.name(),
                    region.expected_countries()
                );
            }
            let region: Region = ask(input, "Enter a region code:")?.to_uppercase().parse()?;
            let q = "Do you want to get the top lowest [1] or top highest [0] corrupted countries?";
            let ranking = parse_ranking(q, &ask(input, q)?)?;
            let q = "How many countries in the list?";
            let n = parse_count(q, &ask(input, q)?)?;
            Command::RankRegionCountries { year, region, ranking, n }
        }
        "5" => Command::RegionChart,
        "6" => {
            let iso3 = ask(input, "Enter the country code:")?.to_uppercase();
            Command::CountryTrend { iso3 }
        }
        _ => return Ok(None),
    };
    Ok(Some(cmd))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let settings = Settings {
        data_path: cli.data,
        output_dir: cli.output_dir,
        preview_rows: cli.preview,
        chart_size: cli.chart_size,
    };

    print_menu();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let Some(cmd) = read_command(&mut input)? else {
        println!("\x1b[91mPlease choose a correct option.\x1b[0m");
        return Ok(());
    };
    println!();

    let outcome = commands::execute(&cmd, &settings)?;
    match outcome.chart {
        Some(png) => println!(
            "REQUESTED SUCCESSFULLY. PLEASE CHECK FILE {}",
            png.display()
        ),
        None => println!(
            "REQUESTED SUCCESSFULLY. PLEASE READ THE OUTPUT IN CSV FILE {}",
            outcome.csv.display()
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(text: &str) -> Result<Option<Command>> {
        read_command(&mut text.as_bytes())
    }

    #[test]
    fn option_one_collects_year_ranking_and_count() {
        let cmd = answers("1\n2015\n1\n3\n").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::RankCountries { year: "2015".into(), ranking: Ranking::Top, n: 3 }
        );
    }

    #[test]
    fn option_four_upper_cases_the_region() {
        let cmd = answers("4\n2019\nwe/eu\n0\n2\n").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::RankRegionCountries {
                year: "2019".into(),
                region: Region::WesternEurope,
                ranking: Ranking::Bottom,
                n: 2,
            }
        );
    }

    #[test]
    fn option_six_upper_cases_the_country() {
        let cmd = answers("6\nken\n").unwrap().unwrap();
        assert_eq!(cmd, Command::CountryTrend { iso3: "KEN".into() });
    }

    #[test]
    fn unknown_choice_is_not_an_error() {
        assert!(answers("9\n").unwrap().is_none());
        assert!(answers("").unwrap().is_none());
    }

    #[test]
    fn bad_follow_up_answers_are_errors() {
        assert!(answers("1\n2015\n1\nfive\n").is_err());
        assert!(answers("1\n2015\n2\n5\n").is_err());
        assert!(answers("1\n2015\n1\n-3\n").is_err());
        let err = answers("4\n2019\nEU\n1\n2\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::UnknownRegion(_))
        ));
    }

    #[test]
    fn chart_size_parses_width_and_height() {
        assert_eq!(parse_size("800x600").unwrap(), (800, 600));
        assert!(parse_size("800").is_err());
        assert!(parse_size("0x600").is_err());
    }
}
