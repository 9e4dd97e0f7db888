//! Ceiling selection for a source's canonical sequence.

use serde::Serialize;
use tracing::warn;

use prodid_model::{DEFAULT_FLOOR_ID, IdentifierSet, is_well_formed};

/// The identifier that bounds a source's canonical sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ceiling {
    /// Highest well-formed identifier, or the floor when there is none.
    pub identifier: String,
    /// True when no well-formed identifier was observed.
    pub defaulted: bool,
    /// Entries that do not have the two-character shape, in discovery order.
    pub malformed: Vec<String>,
}

/// Pick the highest well-formed identifier of `observed`.
///
/// Malformed entries never drive the ceiling. Ties between casings of the same
/// identifier resolve to the last one seen; generation uppercases it anyway.
pub fn select_ceiling(observed: &IdentifierSet) -> Ceiling {
    let mut highest: Option<(String, &str)> = None;
    let mut malformed = Vec::new();
    for raw in observed {
        if !is_well_formed(raw) {
            malformed.push(raw.clone());
            continue;
        }
        let key = raw.to_ascii_uppercase();
        if highest.as_ref().is_none_or(|(best, _)| key >= *best) {
            highest = Some((key, raw.as_str()));
        }
    }
    if !malformed.is_empty() {
        warn!(
            count = malformed.len(),
            examples = ?malformed.iter().take(5).collect::<Vec<_>>(),
            "ignoring malformed product ids for ceiling selection"
        );
    }
    match highest {
        Some((_, raw)) => Ceiling {
            identifier: raw.to_string(),
            defaulted: false,
            malformed,
        },
        None => Ceiling {
            identifier: DEFAULT_FLOOR_ID.to_string(),
            defaulted: true,
            malformed,
        },
    }
}
