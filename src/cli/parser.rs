use clap::Parser;

/// Command-line interface definition for timetracker-migrate
/// Migrates the TimeTracker plugin data-file to the current schema
#[derive(Parser, Debug)]
#[command(
    name = "timetracker-migrate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Migrate the PowerToys Run TimeTracker data-file to the current schema (keeps a .backup copy)",
    long_about = None
)]
pub struct Cli {
    /// Path to data.json (default: the plugin's settings folder)
    pub path: Option<String>,

    /// Do not wait for ENTER before exiting
    #[arg(long = "no-pause")]
    pub no_pause: bool,

    /// Show which migrations would run without touching any file
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Override the configuration file location
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,
}
