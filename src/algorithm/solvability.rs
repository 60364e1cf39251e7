//! Exhaustive solvability over every ordered pair of 2x2 seeds
//!
//! A pair `(i, j)` is solvable when the canvas seeded with `i` top-right and
//! `j` bottom-right (inverses at the opposite corners) gets a solved margin
//! on all four sides.

use crate::algorithm::executor::CanvasLoop;
use crate::io::configuration::SEED_COUNT;
use crate::spatial::Seed;
use ndarray::Array2;
use rayon::prelude::*;
use std::fmt;

/// 16x16 table indexed `[start seed][end seed]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SolvabilityMatrix {
    cells: [[bool; SEED_COUNT]; SEED_COUNT],
}

impl SolvabilityMatrix {
    /// Wrap a precomputed table
    pub const fn new(cells: [[bool; SEED_COUNT]; SEED_COUNT]) -> Self {
        Self { cells }
    }

    /// Whether pair `(start, end)` is solvable; out-of-range indices are not
    pub fn get(&self, start: usize, end: usize) -> bool {
        self.cells
            .get(start)
            .and_then(|row| row.get(end))
            .copied()
            .unwrap_or(false)
    }

    /// Raw table rows
    pub const fn rows(&self) -> &[[bool; SEED_COUNT]; SEED_COUNT] {
        &self.cells
    }

    /// Number of solvable pairs
    pub fn count_solvable(&self) -> usize {
        self.cells.iter().flatten().filter(|&&solvable| solvable).count()
    }

    /// Solvable `(start, end)` index pairs in row-major order
    pub fn solvable_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &solvable)| solvable)
                .map(move |(j, _)| (i, j))
        })
    }

    /// Table as an `ndarray` grid for rendering
    pub fn to_array(&self) -> Array2<bool> {
        Array2::from_shape_fn((SEED_COUNT, SEED_COUNT), |(i, j)| self.get(i, j))
    }
}

impl fmt::Display for SolvabilityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for j in 0..SEED_COUNT {
            write!(f, " {j:X}")?;
        }
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "\n{i:X}: ")?;
            for &solvable in row {
                write!(f, " {}", if solvable { '✔' } else { '✘' })?;
            }
        }
        Ok(())
    }
}

/// Whether the canvas seeded by `(start, end)` gets four solved margins
pub fn is_solvable(start: &Seed, end: &Seed) -> bool {
    let mut canvas_loop = CanvasLoop::from_seed_pair(start, end);
    canvas_loop.run_with_log(&mut |_: &str| {}).solved
}

/// [`is_solvable`] by seed index
///
/// # Errors
///
/// Returns `InvalidSeed` if either index is not in 0-15
pub fn is_solvable_pair(start: usize, end: usize) -> crate::io::error::Result<bool> {
    Ok(is_solvable(&Seed::from_index(start)?, &Seed::from_index(end)?))
}

/// Compute the full 16x16 matrix
pub fn compute_solvability_matrix() -> SolvabilityMatrix {
    compute_solvability_matrix_with_progress(|| {})
}

/// Compute the full matrix in parallel, calling `on_pair` after each pair
///
/// Pairs are independent; each worker owns its canvas.
pub fn compute_solvability_matrix_with_progress<F>(on_pair: F) -> SolvabilityMatrix
where
    F: Fn() + Sync,
{
    let seeds: Vec<Seed> = Seed::all().collect();
    let pairs: Vec<(usize, usize)> = (0..SEED_COUNT)
        .flat_map(|i| (0..SEED_COUNT).map(move |j| (i, j)))
        .collect();

    let results: Vec<((usize, usize), bool)> = pairs
        .par_iter()
        .filter_map(|&(i, j)| {
            let start = seeds.get(i)?;
            let end = seeds.get(j)?;
            let solvable = is_solvable(start, end);
            on_pair();
            Some(((i, j), solvable))
        })
        .collect();

    let mut cells = [[false; SEED_COUNT]; SEED_COUNT];
    for ((i, j), solvable) in results {
        if let Some(cell) = cells.get_mut(i).and_then(|row| row.get_mut(j)) {
            *cell = solvable;
        }
    }

    let matrix = SolvabilityMatrix::new(cells);
    log::info!(
        "Solvability matrix computed: {} of {} pairs solvable",
        matrix.count_solvable(),
        SEED_COUNT * SEED_COUNT
    );
    matrix
}
