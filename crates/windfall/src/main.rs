mod loader;
mod logging;
mod writer;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use windfall_core::model::RiskProfile;
use windfall_core::rebalance::RebalancePolicy;
use windfall_core::simulation::{compare_windows, grow_assets_windows};

use crate::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "windfall")]
#[command(about = "Rolling-window portfolio comparisons over a monthly historical return dataset")]
struct Args {
    /// Path to the monthly return dataset (CSV: date column, then one
    /// column per asset class)
    data_file: PathBuf,

    /// Directory the report CSVs are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Report to produce: rebalance compares risk profiles across the three
    /// rebalancing disciplines (expects the large cap/small cap/intl/bonds/
    /// cash dataset layout); growth tracks each asset class on its own
    #[arg(short, long, value_enum, default_value = "rebalance")]
    report: Report,

    /// Starting portfolio value in dollars
    #[arg(short, long, default_value_t = 10.0)]
    start_value: f64,

    /// Rolling window lengths in years
    #[arg(short = 'y', long = "years", num_args = 1.., default_values_t = [5_usize, 10, 20])]
    window_years: Vec<usize>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Report {
    Rebalance,
    Growth,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let series = loader::load_series(&args.data_file)?;
    tracing::info!(
        "loaded {} monthly records across {} asset classes from {}",
        series.len(),
        series.catalog().len(),
        args.data_file.display()
    );

    std::fs::create_dir_all(&args.out_dir)?;

    let profiles = [
        RiskProfile::conservative(),
        RiskProfile::moderate(),
        RiskProfile::aggressive(),
    ];

    for &length in &args.window_years {
        let (table, kind) = match args.report {
            Report::Rebalance => (
                compare_windows(
                    &series,
                    args.start_value,
                    &profiles,
                    &RebalancePolicy::all(),
                    length,
                )?,
                "comparison",
            ),
            Report::Growth => (
                grow_assets_windows(&series, args.start_value, length)?,
                "growth",
            ),
        };

        if table.is_empty() {
            tracing::warn!("dataset too short for {length}-year windows, skipping");
            continue;
        }

        let path = args.out_dir.join(format!("{length}yr_{kind}.csv"));
        writer::write_table(&path, &table)?;
        tracing::info!("wrote {} windows to {}", table.len(), path.display());
    }

    Ok(())
}
