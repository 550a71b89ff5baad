use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for WaterBuddy
#[derive(Parser)]
#[command(
    name = "waterbuddy",
    version = env!("CARGO_PKG_VERSION"),
    about = "A daily hydration companion: log water, track your goal, keep a simple history file",
    long_about = None
)]
pub struct Cli {
    /// Override the daily log file path
    #[arg(global = true, long = "file", value_name = "PATH")]
    pub file: Option<String>,

    /// Act on this day (YYYY-MM-DD) instead of today
    #[arg(global = true, long = "date", value_name = "DATE")]
    pub date: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the daily log file
    Init,

    /// Show today's goal, total, remaining, progress and mascot
    Status {
        #[arg(long = "json", help = "Print the status snapshot as JSON")]
        json: bool,
    },

    /// Set the age group and recalculate the daily goal
    Age {
        /// child (4-8), teen (9-13), adult (14-64) or senior (65+)
        group: String,
    },

    /// Set a manual daily goal in ml
    Goal {
        /// Goal in ml (positive integer)
        value: String,
    },

    /// Log water: without AMOUNT adds the quick amount (250 ml by default)
    Add {
        /// Custom amount in ml (positive integer)
        amount: Option<String>,
    },

    /// Reset today's total to zero
    Reset {
        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Show a random hydration tip
    Tip,

    /// Switch between dark and light output
    Theme {
        #[arg(value_enum, required_unless_present = "toggle")]
        mode: Option<ThemeChoice>,

        #[arg(long = "toggle", conflicts_with = "mode", help = "Flip the current theme")]
        toggle: bool,
    },

    /// List every stored day with its total, goal and whether the goal was met
    History {
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (e.g. 2024-03 or 2024-01:2024-03)"
        )]
        range: Option<String>,
    },

    /// Export stored days
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Create a backup copy of the daily log
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
