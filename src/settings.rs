use clap::Parser;
use std::path::PathBuf;

/// List the Lambda functions of an account with their last invoke time.
#[derive(Clone, Debug, Parser, PartialEq)]
#[command(name = "lambda_inventory", version, long_about = None)]
pub struct Settings {
    /// Show debug log
    #[arg(long)]
    pub show_debug_log: bool,

    /// AWS Profile Name
    #[arg(long, default_value = "default")]
    pub aws_profile: String,

    /// The name of the output file
    #[arg(long, default_value = "lambda-list.csv")]
    pub out_name: PathBuf,

    /// Maximum number of log lookups in flight, 0 for no limit
    #[arg(long, default_value_t = 16)]
    pub max_concurrency: usize,
}

impl Settings {
    /// Log level selected by `--show-debug-log`.
    pub fn log_level(&self) -> tracing::Level {
        if self.show_debug_log {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
