//! Sparse crossword grid: coordinate → cell map with membership tracking.
//!
//! The grid has no pre-allocated extent. During placement the origin is
//! arbitrary and coordinates may go negative; the finalizer translates
//! everything into a zero-based dense rectangle afterwards. Each occupied cell
//! records its letter and the ids of every word covering it, so a true
//! intersection is simply a cell with two members.
//!
//! Placement legality lives here ([`SparseGrid::can_place`]) and is enforced at
//! the single mutation point ([`SparseGrid::commit`]): a commit that would
//! violate the no-conflicting-letter or adjacency rules writes nothing and
//! returns `false`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier of a placed word; assigned in placement order.
pub(crate) type WordId = usize;

/// Signed grid coordinate, `(row, col)`. Negative values are legal until the
/// finalizer re-bases the grid.
pub(crate) type Coord = (i32, i32);

/// Direction a word runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Orientation {
    /// The orientation a word crossing this one must have.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }

    /// Unit step along the run, `(d_row, d_col)`.
    pub(crate) fn step(self) -> (i32, i32) {
        match self {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        }
    }

    /// Offsets of the two cells flanking the run.
    pub(crate) fn side_steps(self) -> [(i32, i32); 2] {
        match self {
            Orientation::Across => [(-1, 0), (1, 0)],
            Orientation::Down => [(0, -1), (0, 1)],
        }
    }
}

/// A candidate bound to a starting cell and orientation (not yet committed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub row: i32,
    pub col: i32,
    pub orientation: Orientation,
}

impl Slot {
    /// Coordinate of the `i`-th cell of the run.
    pub(crate) fn cell(&self, i: usize) -> Coord {
        let (dr, dc) = self.orientation.step();
        let i = i32::try_from(i).unwrap_or(i32::MAX);
        (self.row + dr * i, self.col + dc * i)
    }

    /// Coordinates of all `len` cells of the run, in order.
    pub(crate) fn cells(&self, len: usize) -> impl Iterator<Item = Coord> + '_ {
        (0..len).map(move |i| self.cell(i))
    }
}

/// One occupied cell: its letter plus every word that covers it.
#[derive(Debug, Clone)]
pub(crate) struct Cell {
    pub letter: char,
    pub member_word_ids: Vec<WordId>,
}

/// The sparse grid built up during one placement run.
#[derive(Debug, Default)]
pub(crate) struct SparseGrid {
    cells: HashMap<Coord, Cell>,
}

impl SparseGrid {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been committed yet (the seed word goes here).
    pub(crate) fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn get(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    fn occupied(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Check whether `glyphs` may legally occupy `slot`.
    ///
    /// Legal means, per cell of the run:
    /// - an existing cell must already hold the identical glyph (a true
    ///   intersection), and
    /// - a newly created cell must have empty perpendicular neighbors, so the
    ///   word doesn't spell an unintended fragment alongside a parallel word.
    ///
    /// Additionally the cells immediately before and after the run (in run
    /// direction) must be empty, so the word doesn't extend or merge with a
    /// collinear word.
    pub(crate) fn can_place(&self, glyphs: &[char], slot: &Slot) -> bool {
        if glyphs.is_empty() {
            return false;
        }
        let (dr, dc) = slot.orientation.step();
        let len = i32::try_from(glyphs.len()).unwrap_or(i32::MAX);
        let before = (slot.row - dr, slot.col - dc);
        let after = (slot.row + dr * len, slot.col + dc * len);
        if self.occupied(before) || self.occupied(after) {
            return false;
        }

        for (i, glyph) in glyphs.iter().enumerate() {
            let coord = slot.cell(i);
            match self.cells.get(&coord) {
                // Existing cell: only an exact glyph match is a legal crossing.
                Some(cell) => {
                    if cell.letter != *glyph {
                        return false;
                    }
                }
                // New cell: both flanking cells must be empty.
                None => {
                    for (sr, sc) in slot.orientation.side_steps() {
                        if self.occupied((coord.0 + sr, coord.1 + sc)) {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    /// Validate and apply a placement. Returns `false` (and commits nothing)
    /// if the placement fails [`SparseGrid::can_place`].
    pub(crate) fn commit(&mut self, glyphs: &[char], slot: &Slot, id: WordId) -> bool {
        if !self.can_place(glyphs, slot) {
            return false;
        }
        for (i, glyph) in glyphs.iter().enumerate() {
            let coord = slot.cell(i);
            self.cells
                .entry(coord)
                .or_insert_with(|| Cell {
                    letter: *glyph,
                    member_word_ids: Vec::new(),
                })
                .member_word_ids
                .push(id);
        }
        true
    }
}
