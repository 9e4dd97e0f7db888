//! Case-insensitive comparison of an observed source against the canonical sequence.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use prodid_model::{Finding, IdentifierSet, ReconciliationResult};

use crate::sequence::CanonicalSequence;

/// Uppercase form mapped to every raw casing seen for it.
///
/// Built once per call so each lookup is a single map probe.
fn casing_index(observed: &IdentifierSet) -> BTreeMap<String, BTreeSet<&str>> {
    let mut index: BTreeMap<String, BTreeSet<&str>> = BTreeMap::new();
    for raw in observed {
        index
            .entry(raw.to_uppercase())
            .or_default()
            .insert(raw.as_str());
    }
    index
}

/// Classify every canonical identifier against `observed`.
///
/// Exact matches produce nothing, case-only matches produce
/// [`Finding::MiscasedMatch`], everything else [`Finding::Missing`].
/// Findings follow canonical generation order.
pub fn reconcile(canonical: &CanonicalSequence, observed: &IdentifierSet) -> ReconciliationResult {
    let index = casing_index(observed);
    let findings: Vec<Finding> = canonical
        .iter()
        .filter_map(|id| match index.get(&id.to_uppercase()) {
            None => Some(Finding::Missing(id.clone())),
            Some(forms) if forms.contains(id.as_str()) => None,
            Some(_) => Some(Finding::MiscasedMatch(id.clone())),
        })
        .collect();
    let result = ReconciliationResult { findings };
    debug!(
        canonical = canonical.len(),
        observed = observed.len(),
        missing = result.missing_count(),
        miscased = result.miscased_count(),
        "reconciled source"
    );
    result
}
