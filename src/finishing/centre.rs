//! Centre band pulled in from every side

use crate::finishing::domains::{DOMAIN_CORE, MarginDomain};
use crate::spatial::{Canvas, Side};

/// First centre line written for a side
const fn centre_start(side: Side) -> usize {
    match side {
        Side::Right | Side::Bottom => 16,
        Side::Left | Side::Top => 12,
    }
}

/// Copy each side's input lines into the centre band where it is still empty
///
/// Sides are processed right, left, top, bottom; a cell filled by an earlier
/// side is kept.
pub fn pull_centre(canvas: &mut Canvas) {
    for side in [Side::Right, Side::Left, Side::Top, Side::Bottom] {
        let domain = MarginDomain::for_side(side);
        let start = centre_start(side);
        for index in DOMAIN_CORE {
            for (offset, &line) in domain.inputs.iter().enumerate() {
                let target = start + offset;
                if !domain.get(canvas, index, target) {
                    let value = domain.get(canvas, index, line);
                    domain.set(canvas, index, target, value);
                }
            }
        }
    }
}
