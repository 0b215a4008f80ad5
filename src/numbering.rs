//! Standard crossword clue numbering.
//!
//! Numbers belong to cells, not words: scanning the finalized grid in
//! row-major order, each cell where at least one word starts receives the next
//! number, and every word is stamped with the number of its own start cell.
//! An across word and a down word starting on the same cell therefore share a
//! number, which is the standard convention.

use std::collections::HashMap;

use crate::placement::PlacedCandidate;

/// Map each word-start cell to its clue number, scanning row-major from 1.
///
/// Re-running this on the same words yields the same map (the counter depends
/// only on cell positions, not on call history).
pub(crate) fn number_start_cells(words: &[PlacedCandidate]) -> HashMap<(i32, i32), u32> {
    let mut starts: Vec<(i32, i32)> = words
        .iter()
        .map(|w| (w.slot.row, w.slot.col))
        .collect();
    // row-major scan order; duplicates collapse to one numbered cell
    starts.sort_unstable();
    starts.dedup();

    starts
        .into_iter()
        .zip(1u32..)
        .collect()
}

/// The clue number for one word: the number of its start cell.
pub(crate) fn position_of(
    numbers: &HashMap<(i32, i32), u32>,
    word: &PlacedCandidate,
) -> u32 {
    // every placed word's start cell was numbered by number_start_cells
    numbers
        .get(&(word.slot.row, word.slot.col))
        .copied()
        .unwrap_or(0)
}
