//! Header/footer derivation and the directionality swap
//!
//! A margin transmits filled header cells onto footer cells. When the
//! requested direction has nothing to transmit, the roles of the two corners
//! are exchanged and the margin is later drawn in reverse.

use crate::spatial::Pattern4;

/// Difference grids between a start and an end corner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderFooter {
    /// Cells filled in start and unfilled in end
    pub header: Pattern4,
    /// Cells unfilled in start and filled in end
    pub footer: Pattern4,
}

/// Per cell: `header = start & !end`, `footer = !start & end`
///
/// The two grids never share a filled cell.
pub fn derive_header_footer(start: &Pattern4, end: &Pattern4) -> HeaderFooter {
    HeaderFooter {
        header: start.and_not(end),
        footer: end.and_not(start),
    }
}

/// Header/footer pair together with the corners used for validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orientation {
    /// Grid whose filled cells are segmented and moved
    pub header: Pattern4,
    /// Grid the moves should land on
    pub footer: Pattern4,
    /// Corner the reconstruction starts from
    pub start: Pattern4,
    /// Corner the reconstruction must reproduce
    pub end: Pattern4,
    /// Whether header/footer and start/end were exchanged
    pub swapped: bool,
}

impl Orientation {
    /// Whether there is nothing to transmit in this orientation
    pub fn header_is_empty(&self) -> bool {
        self.header.is_empty()
    }
}

/// Swap header with footer and start with end when the header is empty
///
/// With `enabled == false`, or a non-empty header, the inputs pass through
/// unchanged and `swapped` is false. The header may still be empty after a
/// swap when start and end are identical.
pub fn apply_directionality_swap(
    pair: HeaderFooter,
    start: &Pattern4,
    end: &Pattern4,
    enabled: bool,
) -> Orientation {
    if enabled && pair.header.is_empty() {
        Orientation {
            header: pair.footer,
            footer: pair.header,
            start: *end,
            end: *start,
            swapped: true,
        }
    } else {
        Orientation {
            header: pair.header,
            footer: pair.footer,
            start: *start,
            end: *end,
            swapped: false,
        }
    }
}
