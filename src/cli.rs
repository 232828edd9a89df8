use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

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

/// NBA Regular-Season Dataset Refresher
///
/// Downloads every regular-season game of the target season from the
/// balldontlie API, drops postseason games and games that have not been
/// played yet, and writes the result as a sorted CSV file.
///
/// A bare invocation refreshes the configured season into the configured
/// output directory. All settings can come from the config file, HOOPS_*
/// environment variables, or the flags below (flags win).
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Season to refresh (e.g. 2023 for the 2023-24 season).
    /// Overrides the configured season for this run.
    #[arg(short = 's', long = "season", help_heading = "Dataset Options")]
    pub season: Option<u32>,

    /// Directory the dataset CSV is written into.
    /// Overrides the configured data directory for this run.
    #[arg(short = 'o', long = "output-dir", help_heading = "Dataset Options")]
    pub output_dir: Option<String>,

    /// Cutoff date in YYYY-MM-DD format standing in for "today".
    /// Games on or after this date are excluded. Defaults to the current
    /// local calendar date; useful for reproducible runs and testing.
    #[arg(short = 'd', long = "date", help_heading = "Dataset Options")]
    pub date: Option<String>,

    /// Update the API base URL in the config file and exit.
    #[arg(
        long = "set-api-base-url",
        help_heading = "Configuration",
        value_name = "URL"
    )]
    pub set_api_base_url: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug logging, including a line per skipped postseason game.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs are written to
    /// the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
