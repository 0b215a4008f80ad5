//! The `Layout` output type and the `generate_layout` entry point.
//!
//! This is the whole pipeline wired together: placement search over a sparse
//! grid, bounding-box finalization, then clue numbering. One invocation, one
//! fresh grid, no shared state — the engine is a pure synchronous function and
//! safe to call from concurrent requests.
//!
//! The serialized shape (`camelCase`, `{rows, cols, result: [...]}`) matches
//! what the solving frontend consumes.

use log::info;
use serde::{Deserialize, Serialize};

use crate::candidate::WordCandidate;
use crate::{finalize, numbering, placement};

pub use crate::grid::Orientation;

/// A word committed to the finalized grid, with zero-based coordinates and its
/// assigned clue number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    /// Index in placement order; stable across runs for identical input.
    pub id: usize,
    pub answer: String,
    pub clue: String,
    pub orientation: Orientation,
    /// Clue number inherited from the word's start cell.
    pub position: u32,
    pub start_row: usize,
    pub start_col: usize,
}

impl PlacedWord {
    /// Number of glyphs (and cells) in the answer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answer.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// The `(row, col)` cells the word occupies, in glyph order.
    #[must_use]
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (dr, dc) = match self.orientation {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        };
        (0..self.len())
            .map(|i| (self.start_row + dr * i, self.start_col + dc * i))
            .collect()
    }
}

/// The finished puzzle: grid extent plus every placed word.
///
/// Invariants (upheld by construction, verified in tests):
/// - every word's cells lie within `[0, rows) × [0, cols)`;
/// - no two words occupy a cell with different glyphs;
/// - `rows`/`cols` are the tight bounding box of all occupied cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub result: Vec<PlacedWord>,
}

impl Layout {
    /// True for the degenerate zero-word puzzle (e.g., empty candidate list).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}

/// Generate a crossword layout from candidate words.
///
/// Never fails: unplaceable or malformed candidates are dropped, and an empty
/// candidate list yields an empty `Layout`. The output is deterministic for a
/// given candidate list and order.
///
/// # Examples
///
/// ```
/// use lexicross::{generate_layout, WordCandidate};
///
/// let candidates = vec![
///     WordCandidate::new("capital of France", "paris"),
///     WordCandidate::new("flows to the sea", "river"),
/// ];
/// let layout = generate_layout(&candidates);
/// assert_eq!(layout.result.len(), 2);
/// assert_eq!((layout.rows, layout.cols), (5, 5));
/// ```
#[must_use]
pub fn generate_layout(candidates: &[WordCandidate]) -> Layout {
    let placed = placement::place(candidates);
    let grid = finalize::finalize(placed);
    let numbers = numbering::number_start_cells(&grid.words);

    let result = grid
        .words
        .iter()
        .map(|word| PlacedWord {
            id: word.id,
            answer: word.answer.clone(),
            clue: word.clue.clone(),
            orientation: word.slot.orientation,
            position: numbering::position_of(&numbers, word),
            // re-based coordinates are non-negative
            start_row: usize::try_from(word.slot.row).unwrap_or(0),
            start_col: usize::try_from(word.slot.col).unwrap_or(0),
        })
        .collect::<Vec<_>>();

    info!(
        "placed {}/{} candidates on a {}x{} grid",
        result.len(),
        candidates.len(),
        grid.rows,
        grid.cols
    );

    Layout {
        rows: grid.rows,
        cols: grid.cols,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(clue: &str, answer: &str) -> WordCandidate {
        WordCandidate::new(clue, answer)
    }

    #[test]
    fn test_empty_candidate_list_yields_empty_layout() {
        let layout = generate_layout(&[]);
        assert_eq!(layout, Layout::default());
        assert!(layout.is_empty());
    }

    #[test]
    fn test_single_word_layout() {
        let layout = generate_layout(&[cand("capital", "paris")]);
        assert_eq!((layout.rows, layout.cols), (1, 5));
        assert_eq!(layout.result.len(), 1);

        let word = &layout.result[0];
        assert_eq!(word.answer, "paris");
        assert_eq!(word.position, 1);
        assert_eq!((word.start_row, word.start_col), (0, 0));
        assert_eq!(word.orientation, Orientation::Across);
    }

    #[test]
    fn test_crossing_words_share_a_cell() {
        let layout = generate_layout(&[cand("capital", "paris"), cand("stream", "river")]);
        assert_eq!(layout.result.len(), 2);

        let paris = &layout.result[0];
        let river = &layout.result[1];
        assert_eq!(paris.orientation, Orientation::Across);
        assert_eq!(river.orientation, Orientation::Down);

        let shared: Vec<_> = paris
            .cells()
            .into_iter()
            .filter(|c| river.cells().contains(c))
            .collect();
        assert_eq!(shared.len(), 1);
        // both words spell 'r' at the shared cell
        assert_eq!(shared[0], (0, 2));
    }

    #[test]
    fn test_all_cells_inside_grid_bounds() {
        let layout = generate_layout(&[
            cand("capital", "paris"),
            cand("stream", "river"),
            cand("grain", "rice"),
        ]);
        for word in &layout.result {
            for (row, col) in word.cells() {
                assert!(row < layout.rows);
                assert!(col < layout.cols);
            }
        }
    }

    #[test]
    fn test_serialized_shape_matches_consumer_contract() {
        let layout = generate_layout(&[cand("capital", "paris")]);
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["rows"], 1);
        assert_eq!(json["cols"], 5);
        let word = &json["result"][0];
        assert_eq!(word["answer"], "paris");
        assert_eq!(word["clue"], "capital");
        assert_eq!(word["orientation"], "across");
        assert_eq!(word["position"], 1);
        assert_eq!(word["startRow"], 0);
        assert_eq!(word["startCol"], 0);
    }

    #[test]
    fn test_placed_word_cells_follow_orientation() {
        let word = PlacedWord {
            id: 0,
            answer: "rice".to_string(),
            clue: String::new(),
            orientation: Orientation::Down,
            position: 1,
            start_row: 2,
            start_col: 3,
        };
        assert_eq!(word.cells(), vec![(2, 3), (3, 3), (4, 3), (5, 3)]);
    }
}
