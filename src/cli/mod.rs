mod args;

pub use args::Args;
use clap::Parser;

use crate::config::Config;

/// Parses the process arguments into a [`Config`].
pub fn load_config() -> Config {
    Config::from(Args::parse())
}
