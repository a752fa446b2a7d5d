//! Report CLI commands
//!
//! Generates the category report, saves it when `--output` names a `.json` or
//! `.csv` file, then prints it.

use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::FintrackResult;
use crate::models::Period;
use crate::reports::ReportGenerator;
use crate::storage::Storage;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Period to report on
    #[arg(short, long, value_enum, default_value_t = Period::Month)]
    pub period: Period,

    /// Output file (.json or .csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the `report` command
pub fn handle_report_command(storage: &Storage, settings: &Settings, args: ReportArgs) -> FintrackResult<()> {
    let generator = ReportGenerator::new(storage).with_currency_symbol(&settings.currency_symbol);
    let report = generator.generate_category_report(args.period, args.output.as_deref());

    if report.is_empty() {
        println!("Failed to generate report");
        return Ok(());
    }

    if let Some(path) = args.output.as_deref().filter(|_| generator.last_saved()) {
        println!("Report saved to file: {}", path.display());
    }

    generator.print_report(&report);
    Ok(())
}
