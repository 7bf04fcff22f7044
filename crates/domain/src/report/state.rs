use log::warn;

use super::markers::{FIELD_DELIMITER, LineKind, classify};
use crate::model::Section;

/// Parser position between two lines: inside a named module or outside any.
#[derive(Debug, Default)]
pub(crate) enum ParserState {
    #[default]
    Closed,
    Open(Section),
}

impl ParserState {
    /// Applies one trimmed line, returning the next state and the section the
    /// line finalized, if any.
    pub(crate) fn advance(self, line: &str) -> (Self, Option<Section>) {
        match (self, classify(line)) {
            (Self::Open(section), LineKind::End) => (Self::Closed, Some(section)),
            (previous, LineKind::Begin { name, status }) => {
                if let Self::Open(abandoned) = previous {
                    warn!(
                        "module '{}' reopened as '{name}' before its end marker; discarding {} rows",
                        abandoned.name,
                        abandoned.rows.len()
                    );
                }
                if name.is_empty() {
                    (Self::Closed, None)
                } else {
                    (Self::Open(Section::new(name, status)), None)
                }
            }
            (Self::Open(mut section), LineKind::Header(text)) => {
                section.columns = text.split(FIELD_DELIMITER).map(str::to_owned).collect();
                (Self::Open(section), None)
            }
            (Self::Open(mut section), LineKind::Data(row)) => {
                section.rows.push(row.to_owned());
                (Self::Open(section), None)
            }
            (Self::Closed, _) => (Self::Closed, None),
        }
    }

    /// Ends the stream. A module still open here is dropped, never emitted.
    pub(crate) fn finish(self) {
        if let Self::Open(unclosed) = self {
            warn!(
                "report ended inside module '{}'; discarding {} rows",
                unclosed.name,
                unclosed.rows.len()
            );
        }
    }
}
