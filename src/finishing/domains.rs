//! Line indices each finishing stage reads and writes per side

use crate::spatial::{Canvas, Side};
use std::ops::RangeInclusive;

/// Lines along a side touched by compression
pub const DOMAIN_RANGE: RangeInclusive<usize> = 11..=20;
/// Interior of [`DOMAIN_RANGE`], used by the inner corner and centre stages
pub const DOMAIN_CORE: RangeInclusive<usize> = 12..=19;

/// Direction in which a domain's range advances
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainAxis {
    /// Range indexes rows; inputs and outputs are columns (right and left sides)
    Rows,
    /// Range indexes columns; inputs and outputs are rows (top and bottom sides)
    Columns,
}

/// Input, OR and AND lines of one side
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarginDomain {
    /// Side this domain belongs to
    pub side: Side,
    /// Positions along the side
    pub range: RangeInclusive<usize>,
    /// The four margin lines read as input
    pub inputs: [usize; 4],
    /// The two lines receiving pairwise ORs
    pub or_outputs: [usize; 2],
    /// The line receiving the AND of both OR lines
    pub and_output: usize,
    /// Orientation of the range
    pub axis: DomainAxis,
}

impl MarginDomain {
    /// Domain of a side
    pub const fn for_side(side: Side) -> Self {
        let (inputs, or_outputs, and_output, axis) = match side {
            Side::Right => ([28, 29, 30, 31], [24, 25], 22, DomainAxis::Rows),
            Side::Left => ([0, 1, 2, 3], [6, 7], 9, DomainAxis::Rows),
            Side::Top => ([0, 1, 2, 3], [6, 7], 9, DomainAxis::Columns),
            Side::Bottom => ([28, 29, 30, 31], [24, 25], 22, DomainAxis::Columns),
        };
        Self {
            side,
            range: DOMAIN_RANGE,
            inputs,
            or_outputs,
            and_output,
            axis,
        }
    }

    /// Canvas `(row, col)` of line `line` at position `index` along the side
    pub const fn position(&self, index: usize, line: usize) -> (usize, usize) {
        match self.axis {
            DomainAxis::Rows => (index, line),
            DomainAxis::Columns => (line, index),
        }
    }

    /// Read line `line` at position `index`
    pub fn get(&self, canvas: &Canvas, index: usize, line: usize) -> bool {
        let (row, col) = self.position(index, line);
        canvas.get(row, col)
    }

    /// Set line `line` at position `index`
    pub fn set(&self, canvas: &mut Canvas, index: usize, line: usize, value: bool) {
        let (row, col) = self.position(index, line);
        canvas.set(row, col, value);
    }

    /// Whether the AND line holds any filled cell in the domain core
    pub fn and_band_filled(&self, canvas: &Canvas) -> bool {
        DOMAIN_CORE.clone().any(|index| self.get(canvas, index, self.and_output))
    }
}
