//! Tests for the four-sided canvas loop

#[cfg(test)]
mod tests {
    use marginweave::MarginError;
    use marginweave::algorithm::executor::CanvasLoop;
    use marginweave::algorithm::margin::MarginIssue;
    use marginweave::io::diagnostics::Transcript;
    use marginweave::spatial::{Corner, Seed, Side};
    use ndarray::s;

    fn seeded(start: usize, end: usize) -> CanvasLoop {
        CanvasLoop::from_seed_pair(
            &Seed::from_index(start).unwrap(),
            &Seed::from_index(end).unwrap(),
        )
    }

    // Tests a solvable pair builds and solves all four sides
    // Verified by stopping after the first side
    #[test]
    fn test_full_loop_solved() {
        let mut canvas_loop = seeded(1, 6);
        let outcome = canvas_loop.run();
        assert_eq!(outcome.sides_built, 4);
        assert_eq!(outcome.halted_at, None);
        assert!(outcome.solved);
        assert!(canvas_loop.is_finished());
        assert!(canvas_loop.is_fully_solved());

        let sides: Vec<Side> = canvas_loop.records().iter().map(|r| r.side).collect();
        assert_eq!(sides, [Side::Right, Side::Bottom, Side::Left, Side::Top]);
        let swapped: Vec<bool> = canvas_loop
            .records()
            .iter()
            .map(|r| r.margin.swapped())
            .collect();
        assert_eq!(swapped, [false, true, false, false]);
    }

    // Tests a full loop ends in the starting orientation with the first margin on the right
    // Verified by skipping the rotation after the last side
    #[test]
    fn test_full_loop_orientation() {
        let mut canvas_loop = seeded(1, 6);
        canvas_loop.run();
        let canvas = canvas_loop.canvas();
        assert_eq!(
            canvas.extract_corner(Corner::TopRight),
            Seed::from_index(1).unwrap().expand()
        );
        assert_eq!(
            canvas.extract_corner(Corner::BottomRight),
            Seed::from_index(6).unwrap().expand()
        );
        let first = &canvas_loop.records().first().unwrap().margin;
        assert_eq!(canvas.cells().slice(s![.., 28..]), first.rows());
    }

    // Tests a margin with no moves halts the loop before embedding
    // Verified by embedding halting margins
    #[test]
    fn test_halt_on_no_moves() {
        let mut canvas_loop = seeded(8, 4);
        let outcome = canvas_loop.run();
        assert_eq!(outcome.sides_built, 3);
        assert_eq!(outcome.halted_at, Some(Side::Top));
        assert!(!outcome.solved);
        assert_eq!(canvas_loop.records().len(), 4);

        let last = &canvas_loop.records().last().unwrap().margin;
        assert!(last.halts_loop());
        assert!(last.issues().contains(&MarginIssue::NoMoves));
        assert!(canvas_loop.current_side().is_none());
        assert!(!canvas_loop.execute_iteration());
    }

    // Tests an empty header halts on the first side
    // Verified by continuing after an empty header
    #[test]
    fn test_halt_on_empty_header() {
        let mut canvas_loop = seeded(0, 0);
        let outcome = canvas_loop.run();
        assert_eq!(outcome.sides_built, 0);
        assert_eq!(outcome.halted_at, Some(Side::Right));
        assert_eq!(
            canvas_loop.records().first().unwrap().margin.issues(),
            [MarginIssue::EmptyHeader]
        );
    }

    // Tests a validation mismatch is embedded and the loop carries on
    // Verified by halting on any issue
    #[test]
    fn test_mismatch_continues() {
        let mut canvas_loop = seeded(1, 3);
        let outcome = canvas_loop.run();
        assert_eq!(outcome.sides_built, 4);
        assert_eq!(outcome.halted_at, None);
        assert!(!outcome.solved);

        let second = &canvas_loop.records().get(1).unwrap().margin;
        assert!(matches!(
            second.issues(),
            [MarginIssue::ValidationMismatch { .. }]
        ));
    }

    // Tests disabling the swap halts where a swap would have been needed
    // Verified by ignoring the directionality flag
    #[test]
    fn test_without_directionality() {
        let mut canvas_loop = seeded(1, 6).with_directionality(false);
        let outcome = canvas_loop.run();
        assert_eq!(outcome.sides_built, 1);
        assert_eq!(outcome.halted_at, Some(Side::Bottom));
    }

    // Tests single stepping visits sides in order
    // Verified by reporting the next side before pushing the record
    #[test]
    fn test_execute_iteration_steps() {
        let mut canvas_loop = seeded(6, 1);
        assert_eq!(canvas_loop.current_side(), Some(Side::Right));
        assert!(canvas_loop.execute_iteration());
        assert_eq!(canvas_loop.current_side(), Some(Side::Bottom));
        assert!(canvas_loop.execute_iteration());
        assert!(canvas_loop.execute_iteration());
        assert_eq!(canvas_loop.current_side(), Some(Side::Top));
        assert!(!canvas_loop.execute_iteration());
        assert!(canvas_loop.outcome().solved);
    }

    // Tests a halted loop is turned back upright
    // Verified by rotating only once when restoring
    #[test]
    fn test_restore_orientation_after_halt() {
        let mut canvas_loop = seeded(8, 4);
        canvas_loop.run();
        canvas_loop.restore_orientation();
        let canvas = canvas_loop.into_canvas();
        assert_eq!(
            canvas.extract_corner(Corner::TopRight),
            Seed::from_index(8).unwrap().expand()
        );
        assert_eq!(
            canvas.extract_corner(Corner::TopLeft),
            Seed::from_index(4).unwrap().expand().inverted()
        );
    }

    // Tests restoring a completed loop leaves the canvas alone
    // Verified by always adding four turns
    #[test]
    fn test_restore_orientation_full_loop() {
        let mut canvas_loop = seeded(1, 6);
        canvas_loop.run();
        let before = canvas_loop.canvas().clone();
        canvas_loop.restore_orientation();
        assert_eq!(canvas_loop.canvas(), &before);
    }

    // Tests captured frames per embedding and rotation
    // Verified by recording only rotations
    #[test]
    fn test_capture_frames() {
        let mut canvas_loop = seeded(8, 4);
        canvas_loop.enable_capture(2);
        canvas_loop.run();
        assert_eq!(canvas_loop.capture().map(|c| c.frame_count()), Some(7));
        canvas_loop.restore_orientation();
        assert_eq!(canvas_loop.capture().map(|c| c.frame_count()), Some(8));
    }

    // Tests animation export requires capture
    // Verified by writing an empty GIF
    #[test]
    fn test_export_animation_without_capture() {
        let canvas_loop = seeded(1, 6);
        assert!(matches!(
            canvas_loop.export_animation("unused.gif", 100),
            Err(MarginError::InvalidParameter { .. })
        ));
    }

    // Tests animation export writes a file
    // Verified by returning before encoding frames
    #[test]
    fn test_export_animation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loop.gif");
        let mut canvas_loop = seeded(1, 6);
        canvas_loop.enable_capture(1);
        canvas_loop.run();
        canvas_loop
            .export_animation(path.to_str().unwrap(), 100)
            .unwrap();
        assert!(path.exists());
    }

    // Tests margin narration reaches a custom sink
    // Verified by routing run_with_log through the log facade
    #[test]
    fn test_run_with_log() {
        let mut transcript = Transcript::new();
        let mut canvas_loop = seeded(1, 6);
        canvas_loop.run_with_log(&mut transcript);
        let passed = transcript
            .lines()
            .iter()
            .filter(|line| line.as_str() == "Transmission Pattern Passed!")
            .count();
        assert_eq!(passed, 4);
    }
}
