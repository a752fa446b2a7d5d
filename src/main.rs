use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use fintrack::cli::{
    handle_add_command, handle_categories_command, handle_delete_command, handle_list_command,
    handle_report_command, AddArgs, DeleteArgs, ListArgs, ReportArgs,
};
use fintrack::clock::SystemClock;
use fintrack::config::{paths::TrackerPaths, settings::Settings};
use fintrack::interrupt::install_interrupt_handler;
use fintrack::logging::init_tracing;
use fintrack::storage::{Storage, StorageBackend};

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense tracker",
    long_about = "fintrack records expenses against a fixed set of categories, \
                  lists them by period and builds per-category reports that can \
                  be saved as JSON or CSV."
)]
struct Cli {
    /// Data file (.json, or .db/.sqlite for SQLite)
    #[arg(long, global = true, env = "FINTRACK_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Storage backend, overriding the settings file and the file extension
    #[arg(long, global = true, value_enum)]
    backend: Option<StorageBackend>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense
    Add(AddArgs),

    /// List expenses for a period
    List(ListArgs),

    /// Build a per-category report
    Report(ReportArgs),

    /// Show the expense categories
    Categories,

    /// Delete an expense by id
    Delete(DeleteArgs),
}

fn main() -> Result<()> {
    init_tracing();
    install_interrupt_handler()?;
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    // Initialize paths and settings
    let paths = TrackerPaths::new(cli.data_file);
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let backend = StorageBackend::resolve(cli.backend, settings.backend, paths.data_file());
    let storage = Storage::open(&paths, backend, Box::new(SystemClock))?;

    match command {
        Commands::Add(args) => handle_add_command(&storage, &settings, args)?,
        Commands::List(args) => handle_list_command(&storage, &settings, args)?,
        Commands::Report(args) => handle_report_command(&storage, &settings, args)?,
        Commands::Categories => handle_categories_command(&storage)?,
        Commands::Delete(args) => handle_delete_command(&storage, args)?,
    }

    Ok(())
}
