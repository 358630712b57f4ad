//! CLI argument definitions.

use clap::{Parser, ValueEnum};

use stockroom_observability::{LogConfig, LogFormat};

#[derive(Debug, Parser)]
#[command(
    name = "stockroom",
    version,
    about = "Inventory manager - list, filter, add, edit and delete products",
    long_about = "Interactive inventory manager.\n\n\
                  Reads commands from stdin (type `help` for the list) and prints the\n\
                  product table, stock statistics and the add/edit form."
)]
pub struct Cli {
    /// Currency symbol printed before every amount.
    #[arg(long, env = "STOCKROOM_CURRENCY", default_value = "$")]
    pub currency: String,

    /// Log output format (logs go to stderr).
    #[arg(
        long = "log-format",
        value_enum,
        env = "STOCKROOM_LOG_FORMAT",
        default_value = "compact"
    )]
    pub log_format: LogFormatArg,

    /// Start with an empty inventory instead of the demo catalog.
    #[arg(long, env = "STOCKROOM_EMPTY")]
    pub empty: bool,

    /// Print query results as JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        LogConfig::default()
            .with_format(format)
            .with_default_filter("warn,stockroom=info")
    }
}
