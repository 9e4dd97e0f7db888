//! Duplicate detection for the inventory source.

use std::collections::BTreeMap;

use tracing::debug;

use prodid_model::{DuplicateRecord, IdentifierSet, UNKNOWN_LOCATION};

/// Emit one record per occurrence of every identifier seen more than once.
///
/// Counting is exact-string: `"a0"` and `"A0"` are different entries here.
/// `locations[i]` belongs to the `i`-th observed entry; absent or missing
/// positions are recorded as [`UNKNOWN_LOCATION`]. Records follow discovery order.
pub fn find_duplicates(
    observed: &IdentifierSet,
    locations: &[Option<String>],
) -> Vec<DuplicateRecord> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for raw in observed {
        *counts.entry(raw.as_str()).or_default() += 1;
    }
    let records: Vec<DuplicateRecord> = observed
        .iter()
        .enumerate()
        .filter(|(_, raw)| counts.get(raw.as_str()).is_some_and(|&n| n > 1))
        .map(|(idx, raw)| DuplicateRecord {
            identifier: raw.clone(),
            location: locations
                .get(idx)
                .and_then(Option::as_deref)
                .unwrap_or(UNKNOWN_LOCATION)
                .to_string(),
        })
        .collect();
    debug!(
        observed = observed.len(),
        duplicates = records.len(),
        "scanned inventory for duplicates"
    );
    records
}
