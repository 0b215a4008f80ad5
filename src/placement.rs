//! Greedy placement search over a sparse grid.
//!
//! Words are attempted once each, in input order, with no backtracking over
//! committed placements. The first candidate seeds the grid at the origin
//! running across; every later candidate must cross an already-placed word on
//! an identical glyph, in the perpendicular orientation. A candidate with no
//! legal crossing is dropped, never an error — partial puzzles are valid
//! output.
//!
//! The scan order is part of the contract, so two runs over the same input
//! produce the same grid: placed words are tried in placement order, candidate
//! glyph positions left to right, then host glyph positions left to right, and
//! the first legal slot wins. This is deliberately a greedy pass, not a
//! search for the densest puzzle; inputs are small random samples.

use log::debug;

use crate::candidate::WordCandidate;
use crate::grid::{Orientation, Slot, SparseGrid, WordId};

/// A candidate successfully committed to the shared grid, still in sparse
/// (possibly negative) coordinates.
#[derive(Debug, Clone)]
pub(crate) struct PlacedCandidate {
    pub id: WordId,
    pub clue: String,
    pub answer: String,
    pub glyphs: Vec<char>,
    pub slot: Slot,
}

impl PlacedCandidate {
    /// Coordinates the word occupies, in glyph order.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.slot.cells(self.glyphs.len())
    }
}

/// Place as many of `candidates` as legally fit on one shared grid.
///
/// Returns the placed subset in placement order; ids are indices into that
/// order. Candidates with empty answers are skipped outright, and answers of
/// a single glyph are seed-eligible only (they cannot meaningfully intersect).
pub(crate) fn place(candidates: &[WordCandidate]) -> Vec<PlacedCandidate> {
    let mut grid = SparseGrid::new();
    let mut placed: Vec<PlacedCandidate> = Vec::new();

    for candidate in candidates {
        let glyphs = candidate.glyphs();
        if glyphs.is_empty() {
            debug!("skipping candidate with empty answer (clue: {:?})", candidate.clue);
            continue;
        }

        let slot = if grid.is_empty() {
            // Seed: the one non-intersecting placement of the run.
            Some(Slot {
                row: 0,
                col: 0,
                orientation: Orientation::Across,
            })
        } else if glyphs.len() < 2 {
            None
        } else {
            find_crossing(&grid, &placed, &glyphs)
        };

        let Some(slot) = slot else {
            debug!("no legal crossing for {:?}; dropping", candidate.answer);
            continue;
        };

        let id = placed.len();
        if grid.commit(&glyphs, &slot, id) {
            placed.push(PlacedCandidate {
                id,
                clue: candidate.clue.clone(),
                answer: candidate.answer.clone(),
                glyphs,
                slot,
            });
        } else {
            // can_place already passed inside find_crossing; reaching this
            // would mean the slot search and the commit check disagree.
            debug!("commit refused slot for {:?}; dropping", candidate.answer);
        }
    }

    placed
}

/// First legal crossing of `glyphs` against the placed words, in the
/// documented deterministic scan order.
fn find_crossing(
    grid: &SparseGrid,
    placed: &[PlacedCandidate],
    glyphs: &[char],
) -> Option<Slot> {
    for host in placed {
        let orientation = host.slot.orientation.perpendicular();
        let (dr, dc) = orientation.step();
        for (i, glyph) in glyphs.iter().enumerate() {
            for (j, host_glyph) in host.glyphs.iter().enumerate() {
                if glyph != host_glyph {
                    continue;
                }
                // Align candidate position i over host position j, running
                // perpendicular through the shared cell.
                let (cross_row, cross_col) = host.slot.cell(j);
                let offset = i32::try_from(i).unwrap_or(i32::MAX);
                let slot = Slot {
                    row: cross_row - dr * offset,
                    col: cross_col - dc * offset,
                    orientation,
                };
                if grid.can_place(glyphs, &slot) {
                    return Some(slot);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(answer: &str) -> WordCandidate {
        WordCandidate::new(format!("clue for {answer}"), answer)
    }

    #[test]
    fn test_empty_input_places_nothing() {
        assert!(place(&[]).is_empty());
    }

    #[test]
    fn test_seed_goes_at_origin_across() {
        let placed = place(&[cand("paris")]);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].slot.row, 0);
        assert_eq!(placed[0].slot.col, 0);
        assert_eq!(placed[0].slot.orientation, Orientation::Across);
    }

    #[test]
    fn test_second_word_crosses_perpendicular() {
        let placed = place(&[cand("paris"), cand("river")]);
        assert_eq!(placed.len(), 2);
        let river = &placed[1];
        assert_eq!(river.slot.orientation, Orientation::Down);
        // first shared glyph in scan order: river[0]='r' over paris[2]='r'
        assert_eq!((river.slot.row, river.slot.col), (0, 2));
    }

    #[test]
    fn test_candidate_without_shared_glyph_is_dropped() {
        let placed = place(&[cand("paris"), cand("zebu")]);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].answer, "paris");
    }

    #[test]
    fn test_empty_answer_is_skipped_even_as_seed() {
        let placed = place(&[cand(""), cand("paris")]);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].answer, "paris");
        assert_eq!(placed[0].id, 0);
    }

    #[test]
    fn test_single_glyph_answer_is_seed_eligible_only() {
        // as a seed it places
        assert_eq!(place(&[cand("a")]).len(), 1);
        // against an existing grid it never intersects, even on a match
        let placed = place(&[cand("paris"), cand("a")]);
        assert_eq!(placed.len(), 1);
    }

    #[test]
    fn test_duplicate_answers_are_attempted_independently() {
        // second "anna" can cross the first on a shared glyph
        let placed = place(&[cand("anna"), cand("anna")]);
        assert_eq!(placed.len(), 2);
        assert_ne!(placed[0].slot.orientation, placed[1].slot.orientation);
    }

    #[test]
    fn test_ids_follow_placement_order() {
        let placed = place(&[cand("paris"), cand("zebu"), cand("river")]);
        let ids: Vec<_> = placed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(placed[1].answer, "river");
    }

    #[test]
    fn test_deterministic_across_runs() {
        let input = vec![cand("garden"), cand("radish"), cand("onion"), cand("nettle")];
        let a = place(&input);
        let b = place(&input);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.slot, y.slot);
            assert_eq!(x.answer, y.answer);
        }
    }
}
