use std::collections::HashSet;

use thiserror::Error;

/// Numeric suffixes are padded to this width; larger indices simply widen.
pub const USN_PAD_WIDTH: usize = 3;

const MIN_PREFIX_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("prefix must be at least 5 characters (e.g. 1BI23EC)")]
    PrefixTooShort,
    #[error("starting number must be at least 1")]
    StartBelowOne,
    #[error("ending number must not be smaller than the starting number")]
    EndBeforeStart,
}

/// Validated prefix/range for sequential USN generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSpec {
    prefix: String,
    start: u32,
    end: u32,
}

impl RangeSpec {
    pub fn new(prefix: &str, start: u32, end: u32) -> Result<Self, RangeError> {
        let prefix = prefix.trim();
        if prefix.len() < MIN_PREFIX_LEN {
            return Err(RangeError::PrefixTooShort);
        }
        if start < 1 {
            return Err(RangeError::StartBelowOne);
        }
        if end < start {
            return Err(RangeError::EndBeforeStart);
        }
        Ok(Self {
            prefix: prefix.to_string(),
            start,
            end,
        })
    }

    pub fn generate(&self) -> Vec<String> {
        generate_usns(&self.prefix, self.start, self.end)
    }
}

/// Emits `UPPERCASE(prefix)` + zero-padded index for every index in
/// `start..=end`, ascending. Pure; prefix length is the caller's problem.
pub fn generate_usns(prefix: &str, start: u32, end: u32) -> Vec<String> {
    let prefix = prefix.to_uppercase();
    (start..=end)
        .map(|index| format!("{prefix}{index:0width$}", width = USN_PAD_WIDTH))
        .collect()
}

/// Turns free-form pasted text into a clean USN list.
///
/// Newlines, commas and semicolons all separate entries; whitespace is
/// stripped anywhere, not just at token edges. Entries are uppercased and
/// deduplicated, keeping the first occurrence in input order. Empty input
/// yields an empty list, never an error.
pub fn normalize_usns(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut roster = Vec::new();
    for token in raw.split(['\n', ',', ';']) {
        let usn: String = token
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        if usn.is_empty() {
            continue;
        }
        if seen.insert(usn.clone()) {
            roster.push(usn);
        }
    }
    roster
}
