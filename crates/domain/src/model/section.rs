use std::fmt;

/// Outcome FastQC assigned to a module.
///
/// The parser stores whatever text follows the module name; values outside
/// the three known outcomes are kept verbatim in [`SectionStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionStatus {
    Pass,
    Warn,
    Fail,
    Other(String),
}

impl SectionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for SectionStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "pass" => Self::Pass,
            "warn" => Self::Warn,
            "fail" => Self::Fail,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `>>Name\tstatus` .. `>>END_MODULE` block of a FastQC report.
///
/// `rows` hold the raw tab-delimited lines in file order. `columns` is the
/// most recent `#` header line seen inside the block, or empty if none was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub status: SectionStatus,
    pub columns: Vec<String>,
    pub rows: Vec<String>,
}

impl Section {
    pub fn new(name: impl Into<String>, status: impl Into<SectionStatus>) -> Self {
        Self { name: name.into(), status: status.into(), columns: Vec::new(), rows: Vec::new() }
    }
}
