use std::str::FromStr;

use crate::digest::Suffix;

/// One `SUFFIX:COUNT` record from a range response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry {
    pub suffix: Suffix,
    pub count: u64,
}

/// All records the range API returned for a single prefix, in the order received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeResultSet {
    entries: Vec<RangeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: missing ':' between suffix and count")]
    MissingSeparator { line: usize },

    #[error("line {line}: suffix {value:?} is not 35 uppercase hex characters")]
    InvalidSuffix { line: usize, value: String },

    #[error("line {line}: count {value:?} is not a decimal integer")]
    InvalidCount { line: usize, value: String },
}

impl RangeResultSet {
    pub fn new(entries: Vec<RangeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RangeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RangeEntry> for RangeResultSet {
    fn from_iter<T: IntoIterator<Item = RangeEntry>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a RangeResultSet {
    type Item = &'a RangeEntry;
    type IntoIter = std::slice::Iter<'a, RangeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromStr for RangeResultSet {
    type Err = ParseError;

    fn from_str(body: &str) -> Result<Self, Self::Err> {
        parse_range(body)
    }
}

/// Parses a range response body into typed entries.
///
/// Lines end in `\n` or `\r\n`; blank lines are skipped. Every other line must be
/// `SUFFIX:COUNT` with a 35 character uppercase hex suffix and a decimal count.
/// The first malformed line fails the whole body.
pub fn parse_range(body: &str) -> Result<RangeResultSet, ParseError> {
    // A typical prefix has around 800 suffixes
    let mut entries = Vec::with_capacity(1024);

    for (idx, line) in body.lines().enumerate() {
        // lines() leaves a '\r' that is not followed by '\n'
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        entries.push(parse_line(idx + 1, line)?);
    }

    Ok(RangeResultSet { entries })
}

fn parse_line(line_no: usize, line: &str) -> Result<RangeEntry, ParseError> {
    let (suffix, count) =
        line.split_once(':').ok_or(ParseError::MissingSeparator { line: line_no })?;

    let suffix = Suffix::from_hex(suffix.as_bytes())
        .ok_or_else(|| ParseError::InvalidSuffix { line: line_no, value: suffix.to_string() })?;

    // u64::from_str accepts a leading '+', the service never sends one
    let count = Some(count)
        .filter(|c| !c.is_empty() && c.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|c| c.parse::<u64>().ok())
        .ok_or_else(|| ParseError::InvalidCount { line: line_no, value: count.to_string() })?;

    Ok(RangeEntry { suffix, count })
}
