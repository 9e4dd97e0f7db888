//! Product identifier reconciliation.
//!
//! Every operation here is a pure function over in-memory collections: no I/O,
//! no failure modes, and output order never depends on container iteration order.

pub mod ceiling;
pub mod duplicates;
pub mod reconcile;
pub mod sequence;

pub use ceiling::{Ceiling, select_ceiling};
pub use duplicates::find_duplicates;
pub use reconcile::reconcile;
pub use sequence::{CanonicalSequence, generate_sequence};
