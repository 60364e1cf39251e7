//! Margin assembly: encoding, move validation and block layout
//!
//! A margin is the 32x4 strip
//! `start / sep / header / sep / transmission / sep / footer / sep / end`.
//! When the directionality swap was used, the seven inner blocks are
//! reversed and each rotated 180 degrees so the block next to `start` still
//! belongs to the start side.

use crate::algorithm::corners::{Orientation, apply_directionality_swap, derive_header_footer};
use crate::algorithm::moves::{Move, Selection, select_moves};
use crate::algorithm::segmentation::{SegmentationScheme, Segments, segment};
use crate::io::configuration::{MARGIN_WIDTH, SEGMENT_COUNT, SEPARATOR_ROWS, TRANSMISSION_ROWS};
use crate::io::diagnostics::{DiagnosticSink, LogSink};
use crate::spatial::pattern::render_rows;
use crate::spatial::{CellSet, Pattern4};
use ndarray::{Array2, Axis};
use std::fmt;

/// Role of a block within a margin
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Start corner
    Start,
    /// Two all-filled rows between blocks
    Separator,
    /// Cells that are transmitted
    Header,
    /// Encoded segment indices and move directions
    Transmission,
    /// Cells the transmission lands on
    Footer,
    /// End corner
    End,
}

impl BlockKind {
    /// Lowercase block name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Separator => "separator",
            Self::Header => "header",
            Self::Transmission => "transmission",
            Self::Footer => "footer",
            Self::End => "end",
        }
    }
}

/// A named block of margin rows, always four columns wide
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarginBlock {
    /// Role of the block
    pub kind: BlockKind,
    /// Block contents indexed `[row, col]`
    pub cells: Array2<bool>,
}

impl MarginBlock {
    const fn new(kind: BlockKind, cells: Array2<bool>) -> Self {
        Self { kind, cells }
    }

    /// Copy of this block rotated 180 degrees
    #[must_use]
    pub fn rotated_180(&self) -> Self {
        Self::new(self.kind, rotate_block_180(&self.cells))
    }
}

/// Unsolvability signals collected while building a margin
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarginIssue {
    /// Nothing to transmit even after the directionality swap
    EmptyHeader,
    /// A non-empty segment where every candidate scored zero
    NoValidMove {
        /// Segment index (1-4)
        segment: usize,
    },
    /// No segment found any move
    NoMoves,
    /// Applying the chosen moves to the start corner misses the end corner
    ValidationMismatch {
        /// Corner the reconstruction should equal
        expected: Pattern4,
        /// Reconstruction actually produced
        actual: Pattern4,
    },
}

impl fmt::Display for MarginIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHeader => write!(
                f,
                "Header segment is empty after directionality check (unsolvable margin)"
            ),
            Self::NoValidMove { segment } => {
                write!(f, "Segment {segment} has no valid transmission move")
            }
            Self::NoMoves => write!(f, "No valid transmission moves found for margin"),
            Self::ValidationMismatch { expected, actual } => write!(
                f,
                "Transmission pattern does not reproduce the end corner\n{}",
                actual.side_by_side(expected)
            ),
        }
    }
}

/// Intermediate results of one margin build
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarginReport {
    /// Header, footer and validation corners after the swap decision
    pub orientation: Orientation,
    /// Segmentation of the header
    pub segments: Segments,
    /// Chosen move per segment, `None` where no move was found
    pub selections: [Option<Selection>; SEGMENT_COUNT],
    /// Whether moves were scored against the end corner because the footer was empty
    pub scored_against_end: bool,
    /// Footer block as drawn
    pub actual_footer: Pattern4,
    /// Start corner after applying every chosen move
    pub reconstruction: Pattern4,
    /// Everything that makes this margin unsolved
    pub issues: Vec<MarginIssue>,
}

impl MarginReport {
    /// Scheme used for the header
    pub const fn scheme(&self) -> SegmentationScheme {
        self.segments.scheme()
    }

    /// Chosen move of segment `index` (1-4)
    pub fn move_for(&self, index: usize) -> Option<Move> {
        index
            .checked_sub(1)
            .and_then(|i| self.selections.get(i))
            .and_then(|selection| selection.as_ref().map(|s| s.mv))
    }
}

/// An assembled margin with its build report
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Margin {
    blocks: Vec<MarginBlock>,
    report: MarginReport,
}

impl Margin {
    /// Blocks in drawing order
    pub fn blocks(&self) -> &[MarginBlock] {
        &self.blocks
    }

    /// First block of the given kind
    pub fn block(&self, kind: BlockKind) -> Option<&MarginBlock> {
        self.blocks.iter().find(|block| block.kind == kind)
    }

    /// Build report
    pub const fn report(&self) -> &MarginReport {
        &self.report
    }

    /// Whether the directionality swap was applied
    pub const fn swapped(&self) -> bool {
        self.report.orientation.swapped
    }

    /// Whether the margin is fully valid
    pub const fn is_solved(&self) -> bool {
        self.report.issues.is_empty()
    }

    /// Unsolvability signals, empty when solved
    pub fn issues(&self) -> &[MarginIssue] {
        &self.report.issues
    }

    /// Whether the canvas loop has to stop at this margin
    pub fn halts_loop(&self) -> bool {
        self.report
            .issues
            .iter()
            .any(|issue| matches!(issue, MarginIssue::EmptyHeader | MarginIssue::NoMoves))
    }

    /// All block rows stacked into one strip
    pub fn rows(&self) -> Array2<bool> {
        stack_blocks(&self.blocks)
    }

    /// Split into the block list and the solved flag
    pub fn into_parts(self) -> (Vec<MarginBlock>, bool) {
        let solved = self.is_solved();
        (self.blocks, solved)
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for block in &self.blocks {
            if block.kind == BlockKind::Separator {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;
            let rows: Vec<Vec<bool>> = block
                .cells
                .rows()
                .into_iter()
                .map(|row| row.to_vec())
                .collect();
            writeln!(f, "{}:", block.kind.name())?;
            write!(f, "{}", render_rows(rows.iter().map(Vec::as_slice)))?;
        }
        Ok(())
    }
}

/// Segment index 1-4 as four bits against the masks 8, 4, 2, 1
pub const fn encode_index(index: usize) -> [bool; 4] {
    [
        index & 8 != 0,
        index & 4 != 0,
        index & 2 != 0,
        index & 1 != 0,
    ]
}

/// Direction bits `[up, right, down, left]` of a move, all clear for no move
pub const fn encode_direction(mv: Option<Move>) -> [bool; 4] {
    match mv {
        Some(mv) => mv.direction_bits(),
        None => [false; 4],
    }
}

/// Direction bits of a move given by name; unknown names encode as all clear
pub fn encode_direction_name(name: &str) -> [bool; 4] {
    encode_direction(Move::from_name(name))
}

/// The 8x4 transmission block: an index row and a direction row per segment
pub fn transmission_pattern(selections: &[Option<Selection>; SEGMENT_COUNT]) -> Array2<bool> {
    let mut pattern = Array2::from_elem((TRANSMISSION_ROWS, MARGIN_WIDTH), false);
    for (i, selection) in selections.iter().enumerate() {
        let index_row = encode_index(i + 1);
        let direction_row = encode_direction(selection.as_ref().map(|s| s.mv));
        for (col, (&index_bit, &direction_bit)) in
            index_row.iter().zip(direction_row.iter()).enumerate()
        {
            if let Some(cell) = pattern.get_mut([2 * i, col]) {
                *cell = index_bit;
            }
            if let Some(cell) = pattern.get_mut([2 * i + 1, col]) {
                *cell = direction_bit;
            }
        }
    }
    pattern
}

/// Two all-filled rows
pub fn separator() -> Array2<bool> {
    Array2::from_elem((SEPARATOR_ROWS, MARGIN_WIDTH), true)
}

/// Rotate any block 180 degrees
pub fn rotate_block_180(block: &Array2<bool>) -> Array2<bool> {
    let mut view = block.view();
    view.invert_axis(Axis(0));
    view.invert_axis(Axis(1));
    view.to_owned()
}

/// Clear every source cell and set its destinations, segment by segment
///
/// Segments without a selection leave their cells in place.
pub fn apply_moves_to_pattern(
    start: &Pattern4,
    segments: &Segments,
    selections: &[Option<Selection>; SEGMENT_COUNT],
) -> Pattern4 {
    let mut result = *start;
    for ((_, cells), selection) in segments.iter().zip(selections.iter()) {
        let Some(selection) = selection else {
            continue;
        };
        for cell in cells.iter() {
            result.set(cell, false);
            for destination in selection.mv.destinations(cell).unwrap_or_default() {
                result.set(destination, true);
            }
        }
    }
    result
}

/// Build a margin from `start` to `end`, logging progress through `log`
pub fn build_margin(start: &Pattern4, end: &Pattern4, directionality_check: bool) -> Margin {
    build_margin_with_log(start, end, directionality_check, &mut LogSink)
}

/// Build a margin, reporting progress strings to `sink`
pub fn build_margin_with_log(
    start: &Pattern4,
    end: &Pattern4,
    directionality_check: bool,
    sink: &mut dyn DiagnosticSink,
) -> Margin {
    let pair = derive_header_footer(start, end);
    let orientation = apply_directionality_swap(pair, start, end, directionality_check);
    let mut issues = Vec::new();

    if orientation.swapped {
        sink.emit("Header empty in requested direction, transmitting end to start.");
    }
    let header_empty = orientation.header_is_empty();
    if header_empty {
        sink.emit(&MarginIssue::EmptyHeader.to_string());
        issues.push(MarginIssue::EmptyHeader);
    }

    let segments = segment(&orientation.header);
    sink.emit(&format!("Segmentation type: {}", segments.scheme()));

    let scored_against_end = orientation.footer.is_empty();
    let target = if scored_against_end {
        orientation.end
    } else {
        orientation.footer
    };
    let selections = select_moves(&segments, &target);

    let actual_footer = if scored_against_end {
        let mut landed = CellSet::new();
        for selection in selections.iter().flatten() {
            landed.union_with(&selection.moved);
        }
        Pattern4::from_cells(&landed)
    } else {
        orientation.footer
    };

    if !header_empty {
        if selections.iter().all(Option::is_none) {
            sink.emit(&MarginIssue::NoMoves.to_string());
            issues.push(MarginIssue::NoMoves);
        }
        for ((index, cells), selection) in segments.iter().zip(selections.iter()) {
            if !cells.is_empty() && selection.is_none() {
                issues.push(MarginIssue::NoValidMove { segment: index });
            }
        }
    }

    let reconstruction = apply_moves_to_pattern(&orientation.start, &segments, &selections);
    sink.emit("Checking moves for margin...");
    if reconstruction == orientation.end {
        sink.emit("Transmission Pattern Passed!");
    } else {
        sink.emit("Transmission Pattern Failed!");
        issues.push(MarginIssue::ValidationMismatch {
            expected: orientation.end,
            actual: reconstruction,
        });
    }
    sink.emit(&reconstruction.side_by_side(&orientation.end));
    sink.emit(&format!("Segments: {}", describe_segments(&segments)));
    sink.emit(&format!("Best Moves: {}", describe_selections(&selections)));

    let blocks = assemble_blocks(start, end, &orientation, &selections, &actual_footer);

    Margin {
        blocks,
        report: MarginReport {
            orientation,
            segments,
            selections,
            scored_against_end,
            actual_footer,
            reconstruction,
            issues,
        },
    }
}

fn assemble_blocks(
    start: &Pattern4,
    end: &Pattern4,
    orientation: &Orientation,
    selections: &[Option<Selection>; SEGMENT_COUNT],
    actual_footer: &Pattern4,
) -> Vec<MarginBlock> {
    let mut inner = vec![
        MarginBlock::new(BlockKind::Separator, separator()),
        MarginBlock::new(BlockKind::Header, orientation.header.to_block()),
        MarginBlock::new(BlockKind::Separator, separator()),
        MarginBlock::new(BlockKind::Transmission, transmission_pattern(selections)),
        MarginBlock::new(BlockKind::Separator, separator()),
        MarginBlock::new(BlockKind::Footer, actual_footer.to_block()),
        MarginBlock::new(BlockKind::Separator, separator()),
    ];

    if orientation.swapped {
        inner = inner.iter().rev().map(MarginBlock::rotated_180).collect();
    }

    let mut blocks = Vec::with_capacity(inner.len() + 2);
    blocks.push(MarginBlock::new(BlockKind::Start, start.to_block()));
    blocks.extend(inner);
    blocks.push(MarginBlock::new(BlockKind::End, end.to_block()));
    blocks
}

fn describe_segments(segments: &Segments) -> String {
    segments
        .iter()
        .map(|(index, cells)| format!("{index}: {cells}"))
        .collect::<Vec<_>>()
        .join("; ")
}

fn describe_selections(selections: &[Option<Selection>; SEGMENT_COUNT]) -> String {
    selections
        .iter()
        .enumerate()
        .map(|(i, selection)| {
            selection.as_ref().map_or_else(
                || format!("{}: none", i + 1),
                |selection| format!("{}: {} -> {}", i + 1, selection.mv, selection.moved),
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Stack blocks vertically; used by renderers that only need the rows
pub fn stack_blocks(blocks: &[MarginBlock]) -> Array2<bool> {
    let views: Vec<_> = blocks.iter().map(|block| block.cells.view()).collect();
    ndarray::concatenate(Axis(0), &views)
        .unwrap_or_else(|_| Array2::from_elem((0, MARGIN_WIDTH), false))
}
