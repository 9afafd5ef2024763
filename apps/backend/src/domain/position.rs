//! Canonical insertion-rank computation.

use crate::domain::cards::{Card, MisfortuneIndex};
use crate::errors::domain::DomainError;

/// Index in `[0, owned.len()]` at which `candidate` belongs among `owned`,
/// which must already be sorted ascending by misfortune index.
///
/// Scans in order and returns the index of the first card whose index is
/// strictly greater than the candidate's; if none is greater, the candidate
/// goes last. Equal indexes count as "not greater", so the candidate lands
/// after every equal-valued card and the result is reproducible from the
/// data alone.
pub fn correct_position(candidate: MisfortuneIndex, owned: &[Card]) -> Result<usize, DomainError> {
    for (i, card) in owned.iter().enumerate() {
        if card.require_misfortune_index()? > candidate {
            return Ok(i);
        }
    }
    Ok(owned.len())
}
