use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use loadout_sheets::cli::{
    handle_export_command, handle_history_command, handle_import_command, ExportCommands,
};
use loadout_sheets::config::{paths::SheetsPaths, settings::Settings};
use loadout_sheets::storage::Storage;
use loadout_sheets::SheetsError;

#[derive(Parser)]
#[command(
    name = "loadouts",
    version,
    about = "Spreadsheet export and import for Destiny loadouts",
    long_about = "Exports saved loadouts and inventory items to CSV files, and \
                  imports item tags and notes back from edited spreadsheets."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export loadouts or items to CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import item tags and notes from CSV files
    Import {
        /// CSV files to import
        files: Vec<PathBuf>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show recent tag and notes changes
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory, settings file and annotation store
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SheetsPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let outcome = match cli.command {
        Some(Commands::Export(cmd)) => handle_export_command(&storage, &settings, cmd),
        Some(Commands::Import { files, yes }) => {
            handle_import_command(&storage, &settings, &files, yes)
        }
        Some(Commands::History { limit }) => handle_history_command(&storage, limit),
        Some(Commands::Init) => {
            println!("Initializing loadout-sheets at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!(
                "Place the inventory snapshot at {} and loadouts at {}.",
                paths.inventory_file().display(),
                paths.loadouts_file().display()
            );
            Ok(())
        }
        Some(Commands::Config) => {
            println!("Loadout Sheets Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!(
                "Export directory: {}",
                settings.resolve_export_dir(&paths).display()
            );
            println!();
            println!("Settings:");
            println!("  Loadouts file:  {}.csv", settings.loadouts_file_name);
            println!("  Date format:    {}", settings.date_format);
            println!("  Confirm import: {}", settings.confirm_import);
            Ok(())
        }
        None => {
            println!("loadouts - spreadsheet export and import for Destiny loadouts");
            println!();
            println!("Run 'loadouts --help' for usage information.");
            Ok(())
        }
    };

    match outcome {
        Err(SheetsError::NotLoaded) => {
            eprintln!("Nothing exported: {}", SheetsError::NotLoaded);
            std::process::exit(2);
        }
        other => other.map_err(Into::into),
    }
}

/// RUST_LOG wins, then the configured level, then warn
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(settings.log_level.as_deref().unwrap_or("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
