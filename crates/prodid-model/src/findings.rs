use std::fmt;

use serde::Serialize;

/// Location recorded when an inventory row has no rack.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Classification of a canonical identifier that is not satisfied by a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Finding {
    /// No entry matches under any casing.
    Missing(String),
    /// Only differently-cased entries match.
    MiscasedMatch(String),
}

impl Finding {
    pub fn identifier(&self) -> &str {
        match self {
            Self::Missing(id) | Self::MiscasedMatch(id) => id,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(id) => f.write_str(id),
            Self::MiscasedMatch(id) => write!(f, "{id} - (found in lowercase)"),
        }
    }
}

/// Findings for one source, in canonical generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationResult {
    pub findings: Vec<Finding>,
}

impl ReconciliationResult {
    pub fn missing_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_missing()).count()
    }

    pub fn miscased_count(&self) -> usize {
        self.findings.len() - self.missing_count()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Rendered findings, sorted case-insensitively.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.findings.iter().map(ToString::to_string).collect();
        sort_case_insensitive(&mut lines);
        lines
    }
}

/// One occurrence of an identifier that appears more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateRecord {
    pub identifier: String,
    /// Rack of this particular occurrence.
    pub location: String,
}

impl fmt::Display for DuplicateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - (Duplicate entry / product present in rack {})",
            self.identifier, self.location
        )
    }
}

/// Sort lines by their uppercase form. Stable, so equal keys keep input order.
pub fn sort_case_insensitive(lines: &mut [String]) {
    lines.sort_by_cached_key(|line| line.to_uppercase());
}
