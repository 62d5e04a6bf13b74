use clap::{Parser, Subcommand};

/// Command-line interface definition for rDeparture
/// CLI application to compute when the workday ends
#[derive(Parser)]
#[command(
    name = "rdeparture",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute your departure time from arrival, work duration and lunch break, with a live countdown",
    long_about = None
)]
pub struct Cli {
    /// Override the settings file path (useful for tests or multiple profiles)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no settings file is written by `init`)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the settings file with default values
    Init,

    /// Manage the settings file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current settings")]
        print_config: bool,

        #[arg(long = "check", help = "Check the settings file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the settings file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the settings file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Store arrival, work duration and lunch break exactly as typed
    Set {
        /// Arrival time (HH:MM)
        #[arg(long = "arrival", short = 'a', allow_hyphen_values = true)]
        arrival: Option<String>,

        /// Work duration in hours (e.g. 8 or 7.5)
        #[arg(long = "work", short = 'w', allow_hyphen_values = true)]
        work: Option<String>,

        /// Lunch break in minutes
        #[arg(long = "lunch", short = 'l', allow_hyphen_values = true)]
        lunch: Option<String>,
    },

    /// Compute departure time and current status once
    Calc {
        /// Arrival time (HH:MM), overrides the settings file
        #[arg(long = "arrival", short = 'a', allow_hyphen_values = true)]
        arrival: Option<String>,

        /// Work duration in hours, overrides the settings file
        #[arg(long = "work", short = 'w', allow_hyphen_values = true)]
        work: Option<String>,

        /// Lunch break in minutes, overrides the settings file
        #[arg(long = "lunch", short = 'l', allow_hyphen_values = true)]
        lunch: Option<String>,

        /// Evaluate at this time of today instead of the current time (HH:MM)
        #[arg(long = "at", value_name = "HH:MM")]
        at: Option<String>,

        /// Print the result as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Live countdown to departure, refreshed every second (Ctrl+C to stop)
    Watch {
        /// Arrival time (HH:MM), overrides the settings file
        #[arg(long = "arrival", short = 'a', allow_hyphen_values = true)]
        arrival: Option<String>,

        /// Work duration in hours, overrides the settings file
        #[arg(long = "work", short = 'w', allow_hyphen_values = true)]
        work: Option<String>,

        /// Lunch break in minutes, overrides the settings file
        #[arg(long = "lunch", short = 'l', allow_hyphen_values = true)]
        lunch: Option<String>,

        /// Stop once the workday is over
        #[arg(long = "exit-when-done")]
        exit_when_done: bool,
    },
}
