//! Tests for the exhaustive seed pair solvability matrix

#[cfg(test)]
mod tests {
    use marginweave::MarginError;
    use marginweave::algorithm::solvability::{
        SolvabilityMatrix, compute_solvability_matrix, compute_solvability_matrix_with_progress,
        is_solvable, is_solvable_pair,
    };
    use marginweave::spatial::Seed;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SOLVABLE: [(usize, usize); 32] = [
        (1, 6),
        (1, 9),
        (3, 5),
        (3, 6),
        (3, 9),
        (3, 10),
        (5, 3),
        (5, 6),
        (5, 9),
        (5, 12),
        (6, 1),
        (6, 3),
        (6, 5),
        (6, 10),
        (6, 12),
        (6, 14),
        (9, 1),
        (9, 3),
        (9, 5),
        (9, 10),
        (9, 12),
        (9, 14),
        (10, 3),
        (10, 6),
        (10, 9),
        (10, 12),
        (12, 5),
        (12, 6),
        (12, 9),
        (12, 10),
        (14, 6),
        (14, 9),
    ];

    // Tests the full matrix against the known solvable pairs
    // Verified by letting validation mismatches count as solved
    #[test]
    fn test_matrix_solvable_pairs() {
        let matrix = compute_solvability_matrix();
        assert_eq!(matrix.count_solvable(), 32);
        let pairs: Vec<(usize, usize)> = matrix.solvable_pairs().collect();
        assert_eq!(pairs, SOLVABLE);
    }

    // Tests no seed is solvable against itself
    // Verified by treating an empty header as solved
    #[test]
    fn test_diagonal_unsolvable() {
        for seed in Seed::all() {
            assert!(!is_solvable(&seed, &seed));
        }
    }

    // Tests single pair checks by index
    // Verified by swapping the start and end arguments
    #[test]
    fn test_is_solvable_pair() {
        assert!(is_solvable_pair(1, 6).unwrap());
        assert!(is_solvable_pair(1, 9).unwrap());
        assert!(!is_solvable_pair(8, 4).unwrap());
        assert!(!is_solvable_pair(0, 15).unwrap());
        assert!(!is_solvable_pair(1, 3).unwrap());
        assert!(matches!(
            is_solvable_pair(16, 0),
            Err(MarginError::InvalidSeed { .. })
        ));
    }

    // Tests the progress callback runs once per pair
    // Verified by calling it once per row
    #[test]
    fn test_progress_callback_count() {
        let counter = AtomicUsize::new(0);
        let matrix = compute_solvability_matrix_with_progress(|| {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(counter.load(Ordering::Relaxed), 256);
        assert_eq!(matrix, compute_solvability_matrix());
    }

    // Tests table accessors and conversion
    // Verified by transposing in to_array
    #[test]
    fn test_matrix_accessors() {
        let mut cells = [[false; 16]; 16];
        if let Some(cell) = cells.get_mut(2).and_then(|row| row.get_mut(7)) {
            *cell = true;
        }
        let matrix = SolvabilityMatrix::new(cells);
        assert!(matrix.get(2, 7));
        assert!(!matrix.get(7, 2));
        assert!(!matrix.get(20, 20));
        assert_eq!(matrix.rows(), &cells);

        let array = matrix.to_array();
        assert_eq!(array.dim(), (16, 16));
        assert_eq!(array.get([2, 7]), Some(&true));
        assert_eq!(array.get([7, 2]), Some(&false));
        assert_eq!(SolvabilityMatrix::default().count_solvable(), 0);
    }

    // Tests the text table has a hex header and one row per start seed
    // Verified by printing decimal row labels
    #[test]
    fn test_matrix_display() {
        let mut cells = [[false; 16]; 16];
        if let Some(cell) = cells.get_mut(15).and_then(|row| row.get_mut(0)) {
            *cell = true;
        }
        let text = SolvabilityMatrix::new(cells).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert!(lines.first().unwrap().ends_with("E F"));
        assert!(lines.last().unwrap().starts_with("F:  ✔ ✘"));
        assert_eq!(text.matches('✔').count(), 1);
    }
}
