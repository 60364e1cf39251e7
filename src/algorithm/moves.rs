//! Candidate moves and greedy move selection per segment
//!
//! A move is either a single translation or a bifurcation that applies two
//! unit translations to every source cell. Each segment independently picks
//! the first of twelve candidates with the strictly greatest score, where a
//! move scores only if every cell it produces lands on a filled target cell.

use crate::algorithm::segmentation::Segments;
use crate::io::configuration::SEGMENT_COUNT;
use crate::spatial::{Cell, CellSet, Pattern4};
use std::fmt;

/// Unit and diagonal translation directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, -1)`
    Up,
    /// `(0, 1)`
    Down,
    /// `(-1, 0)`
    Left,
    /// `(1, 0)`
    Right,
    /// `(-1, -1)`
    UpLeft,
    /// `(1, -1)`
    UpRight,
    /// `(-1, 1)`
    DownLeft,
    /// `(1, 1)`
    DownRight,
}

impl Direction {
    /// Translation vector `[dx, dy]`
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Up => [0, -1],
            Self::Down => [0, 1],
            Self::Left => [-1, 0],
            Self::Right => [1, 0],
            Self::UpLeft => [-1, -1],
            Self::UpRight => [1, -1],
            Self::DownLeft => [-1, 1],
            Self::DownRight => [1, 1],
        }
    }

    /// Direction bits `[up, right, down, left]`
    pub const fn bits(self) -> [bool; 4] {
        match self {
            Self::Up => [true, false, false, false],
            Self::Right => [false, true, false, false],
            Self::Down => [false, false, true, false],
            Self::Left => [false, false, false, true],
            Self::UpRight => [true, true, false, false],
            Self::UpLeft => [true, false, false, true],
            Self::DownRight => [false, true, true, false],
            Self::DownLeft => [false, false, true, true],
        }
    }

    /// Lowercase name as used in transmission logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::UpLeft => "up_left",
            Self::UpRight => "up_right",
            Self::DownLeft => "down_left",
            Self::DownRight => "down_right",
        }
    }
}

/// Two-way split into a vertical and a horizontal unit translation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bifurcation {
    /// Up and right
    UpRight,
    /// Up and left
    UpLeft,
    /// Down and right
    DownRight,
    /// Down and left
    DownLeft,
}

impl Bifurcation {
    /// The two translations applied to every source cell
    pub const fn branches(self) -> (Direction, Direction) {
        match self {
            Self::UpRight => (Direction::Up, Direction::Right),
            Self::UpLeft => (Direction::Up, Direction::Left),
            Self::DownRight => (Direction::Down, Direction::Right),
            Self::DownLeft => (Direction::Down, Direction::Left),
        }
    }
}

/// A candidate transformation of a segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Every cell shifts by one vector
    Translate(Direction),
    /// Every cell is copied along both branches
    Bifurcate(Bifurcation),
}

/// All candidates in evaluation order; earlier entries win ties
pub const CANDIDATE_MOVES: [Move; 12] = [
    Move::Translate(Direction::Up),
    Move::Translate(Direction::Down),
    Move::Translate(Direction::Left),
    Move::Translate(Direction::Right),
    Move::Translate(Direction::UpLeft),
    Move::Translate(Direction::UpRight),
    Move::Translate(Direction::DownLeft),
    Move::Translate(Direction::DownRight),
    Move::Bifurcate(Bifurcation::UpRight),
    Move::Bifurcate(Bifurcation::UpLeft),
    Move::Bifurcate(Bifurcation::DownRight),
    Move::Bifurcate(Bifurcation::DownLeft),
];

impl Move {
    /// Translation vectors applied to each source cell
    pub fn offsets(self) -> impl Iterator<Item = [i32; 2]> {
        let (first, second) = match self {
            Self::Translate(direction) => (direction, None),
            Self::Bifurcate(split) => {
                let (a, b) = split.branches();
                (a, Some(b))
            }
        };
        std::iter::once(first.offset()).chain(second.map(Direction::offset))
    }

    /// Direction bits `[up, right, down, left]`
    ///
    /// A bifurcation sets exactly the bits of its two branches.
    pub const fn direction_bits(self) -> [bool; 4] {
        match self {
            Self::Translate(direction) => direction.bits(),
            Self::Bifurcate(Bifurcation::UpRight) => Direction::UpRight.bits(),
            Self::Bifurcate(Bifurcation::UpLeft) => Direction::UpLeft.bits(),
            Self::Bifurcate(Bifurcation::DownRight) => Direction::DownRight.bits(),
            Self::Bifurcate(Bifurcation::DownLeft) => Direction::DownLeft.bits(),
        }
    }

    /// Name such as `"down_left"` or `"bifurcate_up_right"`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Translate(direction) => direction.name(),
            Self::Bifurcate(Bifurcation::UpRight) => "bifurcate_up_right",
            Self::Bifurcate(Bifurcation::UpLeft) => "bifurcate_up_left",
            Self::Bifurcate(Bifurcation::DownRight) => "bifurcate_down_right",
            Self::Bifurcate(Bifurcation::DownLeft) => "bifurcate_down_left",
        }
    }

    /// Look a candidate up by name
    pub fn from_name(name: &str) -> Option<Self> {
        CANDIDATE_MOVES.into_iter().find(|mv| mv.name() == name)
    }

    /// Destinations of a single source cell, `None` if any leaves the frame
    pub fn destinations(self, cell: Cell) -> Option<Vec<Cell>> {
        self.offsets().map(|offset| cell.shifted(offset)).collect()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Translate every cell by the move's vectors
///
/// Returns `None` if any produced coordinate falls outside the frame. The
/// result is deduplicated, so a bifurcation yields at most twice as many
/// cells as it was given.
pub fn apply_move(cells: &CellSet, mv: Move) -> Option<CellSet> {
    let mut moved = CellSet::new();
    for offset in mv.offsets() {
        for cell in cells.iter() {
            moved.insert(cell.shifted(offset)?);
        }
    }
    Some(moved)
}

/// Number of moved cells on filled target cells, or 0 if any lands on an unfilled one
pub fn score(moved: Option<&CellSet>, target: &Pattern4) -> usize {
    let Some(moved) = moved else {
        return 0;
    };
    let mut hits = 0;
    for cell in moved.iter() {
        if !target.get(cell) {
            return 0;
        }
        hits += 1;
    }
    hits
}

/// A chosen move with the cells it produces
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Winning candidate
    pub mv: Move,
    /// Cells produced by applying the move
    pub moved: CellSet,
    /// Score of the move against the target
    pub score: usize,
}

/// First candidate with the strictly greatest non-zero score
pub fn best_move(cells: &CellSet, target: &Pattern4) -> Option<Selection> {
    let mut best: Option<Selection> = None;
    for mv in CANDIDATE_MOVES {
        let moved = apply_move(cells, mv);
        let candidate_score = score(moved.as_ref(), target);
        let best_score = best.as_ref().map_or(0, |selection| selection.score);
        if candidate_score > best_score
            && let Some(moved) = moved
        {
            best = Some(Selection {
                mv,
                moved,
                score: candidate_score,
            });
        }
    }
    best
}

/// Best move for each of the four segments against one shared target
///
/// Empty segments get `None`, as do segments where no candidate scores.
pub fn select_moves(segments: &Segments, target: &Pattern4) -> [Option<Selection>; SEGMENT_COUNT] {
    let mut selections: [Option<Selection>; SEGMENT_COUNT] = Default::default();
    for (slot, (_, cells)) in selections.iter_mut().zip(segments.iter()) {
        if !cells.is_empty() {
            *slot = best_move(cells, target);
        }
    }
    selections
}
