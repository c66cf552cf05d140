use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for cycletrack
/// CLI application to track menstrual cycles with SQLite
#[derive(Parser)]
#[command(
    name = "cycletrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A local-first cycle tracking CLI: record periods, predict cycle events, schedule partner reminders",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a period
    Add {
        /// Start date of the period (YYYY-MM-DD)
        start: String,

        /// End date of the period (YYYY-MM-DD)
        end: String,

        /// Flow intensity (L = light, M = medium, H = heavy)
        #[arg(long = "flow", help = "Flow intensity: L=light, M=medium, H=heavy")]
        flow: Option<String>,

        /// Symptom tag, repeatable
        #[arg(long = "symptom", help = "Symptom tag (repeat for several)")]
        symptoms: Vec<String>,

        /// Free-text note
        #[arg(long = "notes", help = "Optional free-text note")]
        notes: Option<String>,
    },

    /// Edit an existing period entry
    Edit {
        /// Entry id to edit
        id: String,

        #[arg(long = "start", help = "New start date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long = "end", help = "New end date (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(long = "flow", help = "New flow intensity: L=light, M=medium, H=heavy")]
        flow: Option<String>,

        /// Replaces the whole symptom set when given
        #[arg(long = "symptom", help = "Symptom tag (repeat for several)")]
        symptoms: Vec<String>,

        #[arg(long = "notes", help = "Replace the note text")]
        notes: Option<String>,

        #[arg(long = "clear-notes", help = "Remove the note entirely")]
        clear_notes: bool,
    },

    /// Delete a period entry by id
    Del {
        /// Entry id to delete
        id: String,
    },

    /// List recorded period entries
    List {
        #[arg(long = "all", help = "Show every entry, not just the most recent")]
        all: bool,

        #[arg(long = "details", help = "Show symptoms and notes per entry")]
        details: bool,
    },

    /// Show predictions for the upcoming cycle
    Predict,

    /// Show observed cycle history and the running average
    History,

    /// View or change cycle settings
    Settings {
        #[arg(long = "cycle-length", help = "Nominal cycle length in days")]
        cycle_length: Option<i64>,

        #[arg(long = "period-length", help = "Nominal period length in days")]
        period_length: Option<i64>,
    },

    /// View or change partner reminder settings
    Partner {
        #[arg(long = "name", help = "Partner display name used in reminders")]
        name: Option<String>,

        #[arg(
            long = "pronouns",
            help = "Partner pronouns: they/them, she/her, he/him or custom"
        )]
        pronouns: Option<String>,

        #[arg(
            long = "custom-pronouns",
            help = "Custom subject/object/possessive/reflexive tuple, e.g. xe/xem/xir/xirself"
        )]
        custom_pronouns: Option<String>,

        #[arg(
            long = "toggle-day",
            help = "Toggle a days-before-period reminder offset"
        )]
        toggle_day: Option<i64>,

        #[arg(
            long = "enable",
            help = "Enable a reminder type: period_start, period_end, ovulation, pms"
        )]
        enable_kind: Option<String>,

        #[arg(
            long = "disable",
            help = "Disable a reminder type: period_start, period_end, ovulation, pms"
        )]
        disable_kind: Option<String>,

        #[arg(
            long = "message-for",
            requires = "message",
            help = "Reminder type whose custom message to set"
        )]
        message_kind: Option<String>,

        #[arg(
            long = "message",
            help = "Custom message text (empty string restores the default)"
        )]
        message: Option<String>,
    },

    /// Schedule and inspect partner reminders
    Notify {
        #[arg(long = "schedule", help = "Re-derive and schedule all reminders")]
        schedule: bool,

        #[arg(long = "upcoming", help = "List reminders scheduled in the future")]
        upcoming: bool,

        #[arg(long = "mark-sent", value_name = "ID", help = "Mark a reminder as sent")]
        mark_sent: Option<String>,

        #[arg(long = "test", help = "Schedule a test reminder 5 seconds out")]
        test: bool,
    },

    /// Export recorded data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "history", help = "Export the derived cycle history instead")]
        history: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
