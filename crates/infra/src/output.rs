// crates/infra/src/output.rs
use std::{
    io::{self, Write},
    path::PathBuf,
};

use fastqc_summary_ports::output::SummaryWriter;
use fastqc_summary_shared_kernel::{InfrastructureError, Result, Summary};
use log::debug;

use crate::persistence::FileWriter;

/// Where the JSON summary goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Maps a `--output` value; `-` and `/dev/stdout` both mean stdout.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") | Some("/dev/stdout") => Self::Stdout,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }
}

/// Serializes the summary as a single JSON object.
#[derive(Debug, Clone)]
pub struct JsonSummaryWriter {
    target: OutputTarget,
}

impl JsonSummaryWriter {
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    /// Writes `summary` followed by a newline to any sink.
    pub fn write_to<W: Write>(summary: &Summary, mut out: W) -> Result<()> {
        serde_json::to_writer(&mut out, summary)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

impl SummaryWriter for JsonSummaryWriter {
    fn write(&self, summary: &Summary) -> Result<()> {
        match &self.target {
            OutputTarget::Stdout => Self::write_to(summary, io::stdout().lock()),
            OutputTarget::File(path) => {
                let mut data = Vec::new();
                Self::write_to(summary, &mut data)?;
                FileWriter::atomic_write(path, &data)
                    .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
                debug!("summary written to {}", path.display());
                Ok(())
            }
        }
    }
}
