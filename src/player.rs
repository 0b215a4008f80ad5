//! Interactive solve state as a pure transition machine.
//!
//! The solving UI needs an active cell, a typing direction, the user's entered
//! letters, and per-cell check marks. Rather than ambient mutable state, all
//! of it lives in one [`PlayState`] value and every user action is a
//! [`PlayEvent`] applied through [`transition`], a pure
//! `(state, event) -> state` function. Rendering layers (terminal, wasm,
//! anything) subscribe to the state; they never mutate it directly.
//!
//! Behavior notes:
//! - selecting the already-active cell toggles the typing direction;
//! - typed letters land in the active cell and advance along the direction to
//!   the next in-bounds, unblocked cell (no wrap);
//! - backspace clears the active cell and retreats one cell the same way;
//! - check stamps every filled cell correct/incorrect against the answer key
//!   and leaves empty cells unchecked.

use serde::Serialize;

use crate::layout::{Layout, Orientation};

/// One cell of the rendered board: the expected letter, the clue number shown
/// in its corner, and whether it is blocked (not part of any word).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub letter: Option<char>,
    pub number: Option<u32>,
    pub blocked: bool,
}

/// Build the dense per-cell answer-key view of a layout.
///
/// Cells covered by no word are blocked. The degenerate empty layout yields an
/// empty board.
#[must_use]
pub fn board_from_layout(layout: &Layout) -> Vec<Vec<CellView>> {
    let mut board = vec![
        vec![
            CellView {
                letter: None,
                number: None,
                blocked: true,
            };
            layout.cols
        ];
        layout.rows
    ];

    for word in &layout.result {
        for ((row, col), glyph) in word.cells().into_iter().zip(word.answer.chars()) {
            let cell = &mut board[row][col];
            cell.letter = Some(glyph);
            cell.blocked = false;
        }
        let start = &mut board[word.start_row][word.start_col];
        start.number = Some(word.position);
    }

    board
}

/// Result of checking one cell against the answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    #[default]
    Unchecked,
    Correct,
    Incorrect,
}

/// Complete solving-session state. Cheap to clone; transitions clone and
/// modify rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayState {
    rows: usize,
    cols: usize,
    blocked: Vec<Vec<bool>>,
    key: Vec<Vec<Option<char>>>,
    /// Letters the user has typed, per cell.
    pub entries: Vec<Vec<Option<char>>>,
    /// Check marks from the most recent `Check` event.
    pub marks: Vec<Vec<Mark>>,
    /// Currently selected cell, if any.
    pub active: Option<(usize, usize)>,
    /// Typing direction; toggled by reselecting the active cell.
    pub direction: Orientation,
}

/// A user action against the solving session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEvent {
    SelectCell { row: usize, col: usize },
    ToggleDirection,
    Input(char),
    Backspace,
    Check,
}

impl PlayState {
    /// Fresh session over a generated layout: nothing entered, nothing
    /// selected, typing across.
    #[must_use]
    pub fn new(layout: &Layout) -> Self {
        let board = board_from_layout(layout);
        Self {
            rows: layout.rows,
            cols: layout.cols,
            blocked: board
                .iter()
                .map(|row| row.iter().map(|c| c.blocked).collect())
                .collect(),
            key: board
                .iter()
                .map(|row| row.iter().map(|c| c.letter).collect())
                .collect(),
            entries: vec![vec![None; layout.cols]; layout.rows],
            marks: vec![vec![Mark::default(); layout.cols]; layout.rows],
            active: None,
            direction: Orientation::Across,
        }
    }

    fn selectable(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && !self.blocked[row][col]
    }

    /// Neighbor of `(row, col)` one step along `direction`, forward or back,
    /// if it exists and is unblocked.
    fn step_from(&self, row: usize, col: usize, forward: bool) -> Option<(usize, usize)> {
        let (row, col) = match (self.direction, forward) {
            (Orientation::Across, true) => (row, col.checked_add(1)?),
            (Orientation::Across, false) => (row, col.checked_sub(1)?),
            (Orientation::Down, true) => (row.checked_add(1)?, col),
            (Orientation::Down, false) => (row.checked_sub(1)?, col),
        };
        self.selectable(row, col).then_some((row, col))
    }

    /// True once every unblocked cell holds its expected letter.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.key.iter().zip(&self.entries).all(|(key_row, entry_row)| {
            key_row
                .iter()
                .zip(entry_row)
                .all(|(key, entry)| key.is_none() || entry == key)
        })
    }
}

/// Apply one event, returning the successor state. Illegal or meaningless
/// events (selecting a blocked cell, typing with no selection) return the
/// state unchanged.
#[must_use]
pub fn transition(state: &PlayState, event: PlayEvent) -> PlayState {
    let mut next = state.clone();
    match event {
        PlayEvent::SelectCell { row, col } => {
            if !state.selectable(row, col) {
                return next;
            }
            if state.active == Some((row, col)) {
                next.direction = state.direction.perpendicular();
            } else {
                next.active = Some((row, col));
            }
        }
        PlayEvent::ToggleDirection => {
            next.direction = state.direction.perpendicular();
        }
        PlayEvent::Input(glyph) => {
            if glyph.is_whitespace() || glyph.is_ascii_digit() || glyph.is_control() {
                return next;
            }
            if let Some((row, col)) = state.active {
                next.entries[row][col] = Some(glyph);
                next.marks[row][col] = Mark::Unchecked;
                if let Some(cell) = state.step_from(row, col, true) {
                    next.active = Some(cell);
                }
            }
        }
        PlayEvent::Backspace => {
            if let Some((row, col)) = state.active {
                next.entries[row][col] = None;
                next.marks[row][col] = Mark::Unchecked;
                if let Some(cell) = state.step_from(row, col, false) {
                    next.active = Some(cell);
                }
            }
        }
        PlayEvent::Check => {
            for row in 0..state.rows {
                for col in 0..state.cols {
                    if state.blocked[row][col] {
                        continue;
                    }
                    next.marks[row][col] = match state.entries[row][col] {
                        None => Mark::Unchecked,
                        entry if entry == state.key[row][col] => Mark::Correct,
                        Some(_) => Mark::Incorrect,
                    };
                }
            }
        }
    }
    next
}

/// A clue as the clue-list panel shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClueEntry {
    pub number: u32,
    pub clue: String,
}

/// Clues grouped by orientation, each list sorted by number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClueLists {
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
}

#[must_use]
pub fn clue_lists(layout: &Layout) -> ClueLists {
    let mut lists = ClueLists::default();
    for word in &layout.result {
        let entry = ClueEntry {
            number: word.position,
            clue: word.clue.clone(),
        };
        match word.orientation {
            Orientation::Across => lists.across.push(entry),
            Orientation::Down => lists.down.push(entry),
        }
    }
    lists.across.sort_by_key(|e| e.number);
    lists.down.sort_by_key(|e| e.number);
    lists
}
