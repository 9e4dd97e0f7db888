//! Canonical identifier sequence generation.
//!
//! The sequence enumerates the first character over `A..=Z` and the second over
//! `0..=9` then `A..=Z`, and stops after the first entry whose uppercase form is
//! greater than or equal to the uppercase ceiling.

use serde::Serialize;
use tracing::trace;

use prodid_model::{LEADING_ALPHABET, TRAILING_ALPHABET};

/// Every identifier from `A0` up to a ceiling, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CanonicalSequence(Vec<String>);

impl CanonicalSequence {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: generation emits at least one entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a CanonicalSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Generate the canonical sequence up to and including `max_id`.
///
/// Total over any input. A malformed or tiny ceiling yields a short sequence
/// (`""` and `"0"` both give `["A0"]`); a ceiling above `ZZ` yields all 936 entries.
pub fn generate_sequence(max_id: &str) -> CanonicalSequence {
    let ceiling = max_id.to_uppercase();
    let mut entries = Vec::new();
    'outer: for first in LEADING_ALPHABET.chars() {
        for second in TRAILING_ALPHABET.chars() {
            let id = format!("{first}{second}");
            let reached = id.as_str() >= ceiling.as_str();
            entries.push(id);
            if reached {
                break 'outer;
            }
        }
    }
    trace!(ceiling = %ceiling, len = entries.len(), "generated canonical sequence");
    CanonicalSequence(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_yields_single_entry() {
        assert_eq!(generate_sequence("A0").as_slice(), ["A0"]);
    }

    #[test]
    fn digits_precede_letters() {
        let seq = generate_sequence("AB");
        let expected: Vec<&str> = vec![
            "A0", "A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9", "AA", "AB",
        ];
        assert_eq!(seq.as_slice(), expected.as_slice());
    }

    #[test]
    fn lowercase_ceiling_is_uppercased() {
        let seq = generate_sequence("a5");
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.last(), Some("A5"));
    }

    #[test]
    fn degenerate_ceilings_do_not_fail() {
        assert_eq!(generate_sequence("").as_slice(), ["A0"]);
        assert_eq!(generate_sequence("0").as_slice(), ["A0"]);
        assert_eq!(generate_sequence("ZZZ").len(), 26 * 36);
    }
}
