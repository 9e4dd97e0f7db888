pub mod error;
pub mod findings;
pub mod ids;

pub use error::{ModelError, Result};
pub use findings::{
    DuplicateRecord, Finding, ReconciliationResult, UNKNOWN_LOCATION, sort_case_insensitive,
};
pub use ids::{
    DEFAULT_FLOOR_ID, IdentifierSet, LEADING_ALPHABET, ProductId, TRAILING_ALPHABET,
    is_well_formed,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconciliation_result_counts() {
        let result = ReconciliationResult {
            findings: vec![
                Finding::Missing("A1".to_string()),
                Finding::MiscasedMatch("A2".to_string()),
                Finding::Missing("A3".to_string()),
            ],
        };
        assert_eq!(result.missing_count(), 2);
        assert_eq!(result.miscased_count(), 1);
        assert!(!result.is_empty());
    }

    #[test]
    fn result_serializes() {
        let result = ReconciliationResult {
            findings: vec![Finding::MiscasedMatch("A0".to_string())],
        };
        let json = serde_json::to_string(&result).expect("serialize result");
        assert_eq!(
            json,
            r#"{"findings":[{"kind":"miscased_match","id":"A0"}]}"#
        );
    }
}
