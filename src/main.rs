//! calcount
//!
//! Thin command-line front end for the calorie counter core: loads a food
//! catalog workbook, tallies a ledger over it, and reports the daily
//! energy-need estimate. A stand-in for the real presentation layer.

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use calcount::build_info;
use calcount::catalog::{self, FoodCatalog};
use calcount::energy;
use calcount::ledger::{IntakeLedger, LedgerSummary};
use calcount::models::{Profile, Sex};

/// Full report printed by the CLI
#[derive(Debug, Serialize)]
struct Report {
    foods: Vec<String>,
    summary: LedgerSummary,
    daily_need: Option<i64>,
    remaining: Option<i64>,
}

fn usage() -> ! {
    eprintln!("usage: calcount <catalog.xlsx> [<sex> <age> <height-cm> <weight-kg>] [--json]");
    eprintln!("       sex is 'male' or 'female'; age/height/weight are 0-999");
    std::process::exit(2);
}

fn parse_profile(args: &[String]) -> Result<Profile, Box<dyn std::error::Error>> {
    let sex = Sex::from_str(&args[0]).ok_or_else(|| format!("unknown sex: {:?}", args[0]))?;
    Ok(Profile::parse(sex, &args[1], &args[2], &args[3])?)
}

fn build_report(catalog: &FoodCatalog, profile: Option<Profile>) -> Report {
    // Demo ledger: one entry per catalog food at its reference weight
    let mut ledger = IntakeLedger::new(catalog);
    for record in catalog.iter() {
        if let Err(e) = ledger.add_entry(&record.name) {
            tracing::warn!("skipping {:?}: {}", record.name, e);
        }
    }

    let summary = ledger.summary();
    let consumed = summary.totals.calories.round() as i64;
    let daily_need = profile.as_ref().map(energy::estimate_daily_need);
    let remaining = daily_need.map(|need| energy::remaining_need(need, consumed));

    Report {
        foods: catalog.names().iter().map(|n| n.to_string()).collect(),
        summary,
        daily_need,
        remaining,
    }
}

fn print_report(report: &Report) {
    println!(
        "{:<24} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "food", "grams", "calories", "protein", "fat", "carbs"
    );
    for row in &report.summary.rows {
        println!(
            "{:<24} {:>10.1} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            row.food,
            row.consumed_grams,
            row.nutrition.calories,
            row.nutrition.protein,
            row.nutrition.fat,
            row.nutrition.carbs
        );
    }

    let totals = &report.summary.totals;
    println!(
        "{:<24} {:>10} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
        "total", "", totals.calories, totals.protein, totals.fat, totals.carbs
    );
    let per_100g = &report.summary.per_100g;
    println!(
        "{:<24} {:>10} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
        "per 100g", "", per_100g.calories, per_100g.protein, per_100g.fat, per_100g.carbs
    );

    if let (Some(need), Some(remaining)) = (report.daily_need, report.remaining) {
        println!();
        println!("daily need: {} kcal", need);
        println!("consumed:   {} kcal", totals.calories.round() as i64);
        println!("remaining:  {} kcal", remaining);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("calcount=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with("--") => {
                eprintln!("unknown flag: {}", flag);
                usage();
            }
            _ => positional.push(arg),
        }
    }

    let path = match positional.first() {
        Some(path) => path,
        None => usage(),
    };
    let profile = match positional.len() {
        1 => None,
        5 => Some(parse_profile(&positional[1..])?),
        _ => usage(),
    };

    let catalog = catalog::xlsx::load_catalog(path)?;
    let report = build_report(&catalog, profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
