use clap::builder::styling::{AnsiColor, Effects, Styles};
use ats_chart::error::AppError;
use clap::{Parser, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Output format for the chart written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table with confidence highlighting
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON including unresolved team names
    Json,
}

/// Determines if only configuration operations were requested.
/// These run without reading any input.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.new_output_dir.is_some()
        || args.list_config
}

/// Returns the schedule and stats paths, failing if either is missing.
pub fn input_paths(args: &Args) -> Result<(&str, &str), AppError> {
    match (args.schedule.as_deref(), args.stats.as_deref()) {
        (Some(schedule), Some(stats)) => Ok((schedule, stats)),
        _ => Err(AppError::Custom(
            "Both --schedule and --stats are required".to_string(),
        )),
    }
}

/// Daily against-the-spread chart builder
///
/// Reads a pasted college basketball schedule page (desktop or mobile
/// layout) and a pasted ATS ranking table, then prints one row per game
/// with both teams' cover percentages, the confidence gap between them and
/// the spread re-expressed from the side of the better cover team.
///
/// Pass `-` as a file name to read that input from standard input.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Schedule page text file, or `-` for stdin
    #[arg(
        long,
        short = 's',
        value_name = "FILE",
        help_heading = "Input",
        required_unless_present_any = ["new_log_file_path", "clear_log_file_path", "new_output_dir", "list_config"]
    )]
    pub schedule: Option<String>,

    /// ATS ranking table text file, or `-` for stdin
    #[arg(
        long,
        short = 't',
        value_name = "FILE",
        help_heading = "Input",
        required_unless_present_any = ["new_log_file_path", "clear_log_file_path", "new_output_dir", "list_config"]
    )]
    pub stats: Option<String>,

    /// Format of the chart printed to stdout
    #[arg(
        long,
        short = 'f',
        value_enum,
        default_value_t = OutputFormat::Table,
        help_heading = "Output"
    )]
    pub format: OutputFormat,

    /// Also write the chart as CSV to this file
    #[arg(long, short = 'o', value_name = "FILE", help_heading = "Output")]
    pub output: Option<String>,

    /// Also write the chart as a timestamped CSV file into the export directory
    #[arg(long, short = 'e', help_heading = "Output")]
    pub export: bool,

    /// Disable colors in the table output
    #[arg(long, short = 'p', help_heading = "Output")]
    pub plain: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "FILE", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Update the export directory in config
    #[arg(long = "set-output-dir", value_name = "DIR", help_heading = "Configuration")]
    pub new_output_dir: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr, including debug details of the extraction
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", value_name = "FILE", help_heading = "Debug")]
    pub log_file: Option<String>,
}
