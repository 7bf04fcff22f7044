/// Prefix of a line opening a module.
pub const SECTION_BEGIN: &str = ">>";
/// Prefix of a line closing the open module.
pub const SECTION_END: &str = ">>END_MODULE";
/// Prefix of a column header line.
pub const HEADER: &str = "#";
pub const FIELD_DELIMITER: char = '\t';

/// Role of a single trimmed report line, independent of parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    End,
    Begin { name: &'a str, status: &'a str },
    /// Header text with the marker removed.
    Header(&'a str),
    Data(&'a str),
}

pub(crate) fn classify(line: &str) -> LineKind<'_> {
    // END shares the BEGIN prefix, so it must be tested first.
    if line.starts_with(SECTION_END) {
        return LineKind::End;
    }
    if let Some(rest) = line.strip_prefix(SECTION_BEGIN) {
        let (name, status) = rest.split_once(FIELD_DELIMITER).unwrap_or((rest, ""));
        return LineKind::Begin { name, status };
    }
    if let Some(rest) = line.strip_prefix(HEADER) {
        return LineKind::Header(rest);
    }
    LineKind::Data(line)
}
