//! Square borders and full-width lines drawn last

use crate::io::configuration::CANVAS_SIZE;
use crate::spatial::Canvas;

/// Offsets of the concentric square borders
pub const BORDER_OFFSETS: [usize; 5] = [4, 5, 8, 10, 11];
/// Offset of the lines spanning the whole canvas
pub const LINE_OFFSET: usize = 10;

/// Square border `offset` cells in from every edge
pub fn draw_square_border(canvas: &mut Canvas, offset: usize) {
    if offset >= CANVAS_SIZE {
        return;
    }
    let far = CANVAS_SIZE - offset - 1;
    for i in offset..CANVAS_SIZE - offset {
        canvas.set(offset, i, true);
        canvas.set(far, i, true);
        canvas.set(i, offset, true);
        canvas.set(i, far, true);
    }
}

/// Two rows and two columns `offset` in from the edges, edge to edge
pub fn draw_offset_lines(canvas: &mut Canvas, offset: usize) {
    if offset >= CANVAS_SIZE {
        return;
    }
    let far = CANVAS_SIZE - offset - 1;
    for i in 0..CANVAS_SIZE {
        canvas.set(offset, i, true);
        canvas.set(far, i, true);
        canvas.set(i, offset, true);
        canvas.set(i, far, true);
    }
}

/// Every border in [`BORDER_OFFSETS`], then the lines at [`LINE_OFFSET`]
pub fn draw_gridlines(canvas: &mut Canvas) {
    for offset in BORDER_OFFSETS {
        draw_square_border(canvas, offset);
    }
    draw_offset_lines(canvas, LINE_OFFSET);
}
