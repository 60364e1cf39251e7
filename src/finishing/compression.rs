//! Margin compression into OR and AND lines

use crate::finishing::domains::MarginDomain;
use crate::spatial::{Canvas, Side};

/// Compress one side's four input lines
///
/// At every position of the domain range: four filled inputs fill both OR
/// lines; otherwise the first OR line takes `in0 | in1` and the second
/// `in2 | in3`. Existing OR cells are never cleared. When both OR cells end
/// up filled the AND cell is filled too.
pub fn compress_margin(canvas: &mut Canvas, side: Side) {
    let domain = MarginDomain::for_side(side);
    let [or_first, or_second] = domain.or_outputs;
    for index in domain.range.clone() {
        let [a, b, c, d] = domain.inputs.map(|line| domain.get(canvas, index, line));
        if a && b && c && d {
            domain.set(canvas, index, or_first, true);
            domain.set(canvas, index, or_second, true);
        } else {
            if a || b {
                domain.set(canvas, index, or_first, true);
            }
            if c || d {
                domain.set(canvas, index, or_second, true);
            }
        }
        if domain.get(canvas, index, or_first) && domain.get(canvas, index, or_second) {
            domain.set(canvas, index, domain.and_output, true);
        }
    }
}

/// Compress right, left, top and bottom in that order
pub fn compress_all_margins(canvas: &mut Canvas) {
    for side in [Side::Right, Side::Left, Side::Top, Side::Bottom] {
        compress_margin(canvas, side);
    }
}
