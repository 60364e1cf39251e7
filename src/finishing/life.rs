//! Conway's Game of Life used to animate the solvability matrix
//!
//! The matrix is centred on a blank canvas-sized grid and evolved until it
//! dies out, repeats a state, or hits the generation cap. Played in reverse,
//! the frames show the matrix assembling from noise. A single border and
//! then a double border are traced around it, after which the framed matrix
//! is evolved forward until it dissolves.

use crate::algorithm::solvability::SolvabilityMatrix;
use crate::io::configuration::{
    CANVAS_SIZE, EMERGENCE_OFFSET, MATRIX_BORDER_OFFSET, MAX_DISSIPATION_GENERATIONS,
    MAX_LIFE_GENERATIONS, OUTER_BORDER_OFFSETS, SEED_COUNT,
};
use ndarray::Array2;
use std::collections::HashSet;

fn live_neighbours(grid: &Array2<bool>, row: usize, col: usize) -> usize {
    let mut alive = 0;
    for dr in [-1_isize, 0, 1] {
        for dc in [-1_isize, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if grid.get([r, c]).copied().unwrap_or(false) {
                alive += 1;
            }
        }
    }
    alive
}

fn fill(grid: &mut Array2<bool>, row: usize, col: usize) {
    if let Some(cell) = grid.get_mut([row, col]) {
        *cell = true;
    }
}

/// One generation with dead cells beyond the edges
pub fn life_step(grid: &Array2<bool>) -> Array2<bool> {
    Array2::from_shape_fn(grid.dim(), |(row, col)| {
        let alive = live_neighbours(grid, row, col);
        let current = grid.get([row, col]).copied().unwrap_or(false);
        matches!((current, alive), (true, 2 | 3) | (false, 3))
    })
}

/// Generations after `initial` in order, `initial` included
///
/// Stops before a repeated state, after an extinct state, or after
/// `generations` steps.
fn evolve(initial: Array2<bool>, generations: usize) -> Vec<Array2<bool>> {
    let mut frames = vec![initial.clone()];
    let mut seen: HashSet<Vec<bool>> = HashSet::new();
    let mut current = initial;

    for _ in 0..generations {
        let next = life_step(&current);
        if !seen.insert(next.iter().copied().collect()) {
            break;
        }
        frames.push(next.clone());
        let extinct = !next.iter().any(|&cell| cell);
        current = next;
        if extinct {
            break;
        }
    }
    frames
}

/// Canvas-sized grid holding the matrix at [`EMERGENCE_OFFSET`]
pub fn centred_matrix(matrix: &SolvabilityMatrix) -> Array2<bool> {
    let mut grid = Array2::from_elem((CANVAS_SIZE, CANVAS_SIZE), false);
    for i in 0..SEED_COUNT {
        for j in 0..SEED_COUNT {
            if let Some(cell) = grid.get_mut([EMERGENCE_OFFSET + i, EMERGENCE_OFFSET + j]) {
                *cell = matrix.get(i, j);
            }
        }
    }
    grid
}

/// Generations from the centred matrix, reversed so the matrix comes last
///
/// Evolution stops before a repeated state, after an extinct state, or after
/// [`MAX_LIFE_GENERATIONS`] steps.
pub fn emergence_frames(matrix: &SolvabilityMatrix) -> Vec<Array2<bool>> {
    let mut frames = evolve(centred_matrix(matrix), MAX_LIFE_GENERATIONS);
    log::debug!("Emergence animation: {} frames", frames.len());
    frames.reverse();
    frames
}

/// Draw the first `length` cells of each side of the square border `offset` in
///
/// Top and right run from the top-left and top-right corners; bottom and
/// left run back from the bottom-right and bottom-left corners. A length of
/// at least the side length draws the full border.
pub fn trace_square_border(grid: &mut Array2<bool>, offset: usize, length: usize) {
    let size = grid.nrows().min(grid.ncols());
    if offset * 2 >= size {
        return;
    }
    let far = size - offset - 1;
    let steps = length.min(far - offset + 1);
    for step in 0..steps {
        fill(grid, offset, offset + step);
        fill(grid, offset + step, far);
        fill(grid, far, far - step);
        fill(grid, far - step, offset);
    }
}

/// Centred matrix inside its single and double borders
pub fn framed_matrix(matrix: &SolvabilityMatrix) -> Array2<bool> {
    let mut grid = centred_matrix(matrix);
    trace_square_border(&mut grid, MATRIX_BORDER_OFFSET, CANVAS_SIZE);
    for offset in OUTER_BORDER_OFFSETS {
        trace_square_border(&mut grid, offset, CANVAS_SIZE);
    }
    grid
}

/// One frame per traced cell: the single border first, then both outer borders together
///
/// The last frame equals [`framed_matrix`].
pub fn border_frames(matrix: &SolvabilityMatrix) -> Vec<Array2<bool>> {
    let mut grid = centred_matrix(matrix);
    let mut frames = Vec::new();

    let inner_side = CANVAS_SIZE - 2 * MATRIX_BORDER_OFFSET;
    for length in 1..=inner_side {
        trace_square_border(&mut grid, MATRIX_BORDER_OFFSET, length);
        frames.push(grid.clone());
    }

    let outer_side = OUTER_BORDER_OFFSETS
        .iter()
        .map(|offset| CANVAS_SIZE.saturating_sub(2 * offset))
        .max()
        .unwrap_or(0);
    for length in 1..=outer_side {
        for offset in OUTER_BORDER_OFFSETS {
            trace_square_border(&mut grid, offset, length);
        }
        frames.push(grid.clone());
    }
    frames
}

/// Generations of the framed matrix in order, starting with the framed matrix
///
/// Bounded by [`MAX_DISSIPATION_GENERATIONS`].
pub fn dissipation_frames(matrix: &SolvabilityMatrix) -> Vec<Array2<bool>> {
    evolve(framed_matrix(matrix), MAX_DISSIPATION_GENERATIONS)
}

/// Emergence, border tracing and dissipation as one frame sequence
pub fn solvability_animation(matrix: &SolvabilityMatrix) -> Vec<Array2<bool>> {
    let mut frames = emergence_frames(matrix);
    frames.extend(border_frames(matrix));
    frames.extend(dissipation_frames(matrix).into_iter().skip(1));
    log::debug!("Solvability animation: {} frames", frames.len());
    frames
}
