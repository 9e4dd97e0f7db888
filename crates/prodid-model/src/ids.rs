use std::fmt;

use crate::ModelError;

/// Floor used when a source yields no usable ceiling.
pub const DEFAULT_FLOOR_ID: &str = "A0";

/// Alphabet for the first identifier character.
pub const LEADING_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Alphabet for the second identifier character, digits before letters.
pub const TRAILING_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns true when `raw` has the two-character identifier shape.
///
/// Casing is not part of the shape: `"a0"` is well formed, it just is not canonical.
pub fn is_well_formed(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_alphanumeric()
}

/// A product identifier that passed shape validation.
///
/// The raw casing is kept so miscased entries can be reported as found.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ProductId(String);

impl ProductId {
    pub fn parse(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if !is_well_formed(&value) {
            return Err(ModelError::InvalidProductId(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercase form used for case-insensitive comparison.
    pub fn canonical(&self) -> String {
        self.0.to_ascii_uppercase()
    }

    pub fn is_canonical(&self) -> bool {
        !self.0.bytes().any(|b| b.is_ascii_lowercase())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw identifiers collected from one source, in discovery order.
///
/// Duplicates are kept: the inventory source is expected to contain them.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct IdentifierSet(Vec<String>);

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: impl Into<String>) {
        self.0.push(id.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for IdentifierSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for IdentifierSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a IdentifierSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for IdentifierSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_accepts_letter_then_alphanumeric() {
        assert!(is_well_formed("A0"));
        assert!(is_well_formed("zz"));
        assert!(is_well_formed("bQ"));
        assert!(!is_well_formed("0A"));
        assert!(!is_well_formed("A"));
        assert!(!is_well_formed("A00"));
        assert!(!is_well_formed("A-"));
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("Ä0"));
    }

    #[test]
    fn parse_keeps_raw_casing() {
        let id = ProductId::parse("b7").unwrap();
        assert_eq!(id.as_str(), "b7");
        assert_eq!(id.canonical(), "B7");
        assert!(!id.is_canonical());
        assert!(ProductId::parse("B7").unwrap().is_canonical());
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(
            ProductId::parse("ABC"),
            Err(ModelError::InvalidProductId("ABC".to_string()))
        );
    }
}
