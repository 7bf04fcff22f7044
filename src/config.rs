// src/config.rs
use std::path::PathBuf;

use fastqc_summary_infra::OutputTarget;
use log::LevelFilter;

use crate::cli::Args;

/// Runtime configuration derived from CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub archive: PathBuf,
    pub output: OutputTarget,
    pub log_level: LevelFilter,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            archive: args.fastqc_archive,
            output: OutputTarget::from_arg(args.output.as_deref()),
            log_level: level_for(args.verbose),
        }
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
