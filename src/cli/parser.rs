use crate::core::report::ChartView;
use crate::export::{ExportDataset, ExportFormat};
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for studylog
/// CLI application to track study time, tasks and habits with SQLite
#[derive(Parser)]
#[command(
    name = "studylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A study tracker CLI: log study sessions, tasks and habits, and follow your streaks using SQLite",
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
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
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

    /// Manage study subjects
    Subject {
        #[command(subcommand)]
        action: SubjectAction,
    },

    /// Record and manage study sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Manage daily tasks
    Task {
        #[command(subcommand)]
        action: TrackerAction,
    },

    /// Manage habits
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Total time, best day and streaks over all sessions
    Stats {
        #[arg(long = "today", help = "Reference date (YYYY-MM-DD), default: today")]
        today: Option<String>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Daily completion percentages of tasks or habits
    #[command(group(ArgGroup::new("target").required(true).args(["tasks", "habits"])))]
    #[command(group(ArgGroup::new("window").args(["week", "month", "period"])))]
    Progress {
        #[arg(long)]
        tasks: bool,

        #[arg(long)]
        habits: bool,

        #[arg(long, help = "Current week (default)")]
        week: bool,

        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Shift the week by N weeks (negative = past)"
        )]
        offset: Option<i64>,

        #[arg(long, value_name = "YYYY-MM", help = "Every day of a month")]
        month: Option<String>,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Reference date (YYYY-MM-DD), default: today")]
        today: Option<String>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Text charts of study time
    Chart {
        #[arg(long, value_enum, default_value = "weekly")]
        view: ChartView,

        #[arg(
            long,
            default_value_t = 0,
            allow_hyphen_values = true,
            help = "Weekly view: shift by N weeks (negative = past)"
        )]
        offset: i64,

        #[arg(long, value_name = "YYYY-MM", help = "Heatmap month, default: current")]
        month: Option<String>,

        #[arg(long = "today", help = "Reference date (YYYY-MM-DD), default: today")]
        today: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export sessions or completion marks
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_enum, default_value = "sessions")]
        dataset: ExportDataset,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum SubjectAction {
    /// Add a subject
    Add {
        name: String,

        #[arg(long, help = "Display colour (#RRGGBB)")]
        color: Option<String>,
    },

    /// List subjects
    List,

    /// Rename or recolour a subject
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a subject (sessions are kept)
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Record a study session
    Add {
        subject: String,

        /// Duration in minutes
        #[arg(allow_hyphen_values = true)]
        minutes: i64,

        #[arg(long, help = "Date of the session (YYYY-MM-DD), default: today")]
        date: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List sessions, newest first
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's sessions")]
        now: bool,
    },

    /// Change a recorded session
    Edit {
        id: i64,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        minutes: Option<i64>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a session
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum TrackerAction {
    /// Add a task
    Add {
        name: String,

        #[arg(long, help = "First day the task counts (YYYY-MM-DD), default: today")]
        created: Option<String>,
    },

    /// List tasks with today's state
    List,

    /// Rename a task
    Rename { id: i64, name: String },

    /// Delete a task and its completions
    Del { id: i64 },

    /// Mark or unmark a task as done
    Toggle {
        id: i64,

        #[arg(long, help = "Day to toggle (YYYY-MM-DD), default: today")]
        date: Option<String>,
    },

    /// List completion marks
    Completions {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a habit
    Add {
        name: String,

        #[arg(long)]
        emoji: Option<String>,

        #[arg(long, allow_hyphen_values = true, help = "Daily goal in minutes")]
        goal: Option<i64>,

        #[arg(long, help = "First day the habit counts (YYYY-MM-DD), default: today")]
        created: Option<String>,
    },

    /// List habits with this month's count
    List,

    /// Change a habit
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        emoji: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        goal: Option<i64>,
    },

    /// Delete a habit and its completions
    Del { id: i64 },

    /// Mark or unmark a habit as done
    Toggle {
        id: i64,

        #[arg(long)]
        date: Option<String>,
    },

    /// List completion marks
    Completions {
        #[arg(long, short)]
        period: Option<String>,
    },
}
