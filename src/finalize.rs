//! Grid finalizer: tight bounding box and coordinate re-basing.
//!
//! Placement works in an unbounded signed coordinate space; this pass computes
//! the minimal rectangle enclosing every occupied cell and translates all
//! placements so the minimum occupied row and column become 0. Translation
//! only — no rotation, no reflection, and no padding rows or columns (the box
//! is exactly tight).

use crate::placement::PlacedCandidate;

/// The finalized grid extent plus the re-based words.
#[derive(Debug)]
pub(crate) struct FinalizedGrid {
    pub rows: usize,
    pub cols: usize,
    pub words: Vec<PlacedCandidate>,
}

/// Trim to the minimal bounding rectangle and re-base to a zero origin.
///
/// Zero placed words is the documented degenerate case: a 0×0 grid with no
/// words, which callers must accept without erroring.
pub(crate) fn finalize(mut words: Vec<PlacedCandidate>) -> FinalizedGrid {
    let mut bounds: Option<(i32, i32, i32, i32)> = None;
    for word in &words {
        for (row, col) in word.cells() {
            bounds = Some(match bounds {
                None => (row, row, col, col),
                Some((min_r, max_r, min_c, max_c)) => (
                    min_r.min(row),
                    max_r.max(row),
                    min_c.min(col),
                    max_c.max(col),
                ),
            });
        }
    }

    let Some((min_row, max_row, min_col, max_col)) = bounds else {
        return FinalizedGrid {
            rows: 0,
            cols: 0,
            words: Vec::new(),
        };
    };

    for word in &mut words {
        word.slot.row -= min_row;
        word.slot.col -= min_col;
    }

    FinalizedGrid {
        rows: usize::try_from(max_row - min_row + 1).unwrap_or(0),
        cols: usize::try_from(max_col - min_col + 1).unwrap_or(0),
        words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::WordCandidate;
    use crate::grid::{Orientation, Slot};

    fn placed(answer: &str, row: i32, col: i32, orientation: Orientation) -> PlacedCandidate {
        PlacedCandidate {
            id: 0,
            clue: String::new(),
            answer: answer.to_string(),
            glyphs: answer.chars().collect(),
            slot: Slot { row, col, orientation },
        }
    }

    #[test]
    fn test_empty_input_is_zero_by_zero() {
        let grid = finalize(Vec::new());
        assert_eq!((grid.rows, grid.cols), (0, 0));
        assert!(grid.words.is_empty());
    }

    #[test]
    fn test_single_across_word_is_one_row() {
        let grid = finalize(vec![placed("paris", 0, 0, Orientation::Across)]);
        assert_eq!((grid.rows, grid.cols), (1, 5));
        assert_eq!((grid.words[0].slot.row, grid.words[0].slot.col), (0, 0));
    }

    #[test]
    fn test_negative_coordinates_are_rebased() {
        let grid = finalize(vec![
            placed("paris", -2, -3, Orientation::Across),
            placed("river", -2, -1, Orientation::Down),
        ]);
        assert_eq!((grid.rows, grid.cols), (5, 5));
        assert_eq!((grid.words[0].slot.row, grid.words[0].slot.col), (0, 0));
        assert_eq!((grid.words[1].slot.row, grid.words[1].slot.col), (0, 2));
    }

    #[test]
    fn test_bounding_box_is_tight() {
        let grid = finalize(vec![placed("river", 4, 7, Orientation::Down)]);
        assert_eq!((grid.rows, grid.cols), (5, 1));
        assert_eq!((grid.words[0].slot.row, grid.words[0].slot.col), (0, 0));
    }

    // the engine only calls finalize with the candidates it placed, but the
    // translation itself must not care about word order
    #[test]
    fn test_translation_preserves_relative_positions() {
        let grid = finalize(vec![
            placed("river", -1, 5, Orientation::Down),
            placed("paris", 1, 3, Orientation::Across),
        ]);
        let a = &grid.words[0].slot;
        let b = &grid.words[1].slot;
        assert_eq!((b.row - a.row, b.col - a.col), (2, -2));
        assert_eq!((a.row, a.col), (0, 2));
    }

    #[test]
    fn test_finalize_uses_candidate_cells_not_just_starts() {
        let wc = WordCandidate::new("x", "river");
        let grid = finalize(vec![placed(&wc.answer, 0, 0, Orientation::Down)]);
        // a down word of 5 glyphs spans 5 rows even though it starts at row 0
        assert_eq!(grid.rows, 5);
    }
}
