//! Tests for inner corner pixels and fallback diagonals

#[cfg(test)]
mod tests {
    use marginweave::finishing::fill_inner_corners;
    use marginweave::finishing::inner_corners::{
        adjacent_sides, inner_corner_block, inner_corner_pixel,
    };
    use marginweave::spatial::{Canvas, Corner, Side};

    fn with_and_bands(sides: &[Side]) -> Canvas {
        let mut canvas = Canvas::new();
        for side in sides {
            match side {
                Side::Right => canvas.set(15, 22, true),
                Side::Left => canvas.set(15, 9, true),
                Side::Top => canvas.set(9, 15, true),
                Side::Bottom => canvas.set(22, 15, true),
            }
        }
        canvas
    }

    // Tests corner geometry tables
    // Verified by mirroring the bottom-left block
    #[test]
    fn test_corner_tables() {
        assert_eq!(inner_corner_pixel(Corner::TopRight), (9, 22));
        assert_eq!(inner_corner_pixel(Corner::BottomLeft), (22, 9));
        assert_eq!(inner_corner_block(Corner::TopLeft), (6, 6));
        assert_eq!(inner_corner_block(Corner::BottomLeft), (22, 6));
        assert_eq!(adjacent_sides(Corner::BottomRight), (Side::Bottom, Side::Right));
    }

    // Tests every corner gets its pixel when all bands are filled
    // Verified by requiring only one adjacent band
    #[test]
    fn test_all_bands_filled() {
        let mut canvas = with_and_bands(&[Side::Right, Side::Left, Side::Top, Side::Bottom]);
        fill_inner_corners(&mut canvas);
        for corner in Corner::ALL {
            let (row, col) = inner_corner_pixel(corner);
            assert!(canvas.get(row, col));
        }
        assert_eq!(canvas.count_filled(), 8);
    }

    // Tests empty bands produce the four diagonals
    // Verified by drawing every diagonal top-left to bottom-right
    #[test]
    fn test_empty_bands_draw_diagonals() {
        let mut canvas = Canvas::new();
        fill_inner_corners(&mut canvas);
        assert_eq!(canvas.count_filled(), 16);

        for (row, col) in [(6, 9), (7, 8), (8, 7), (9, 6)] {
            assert!(canvas.get(row, col));
        }
        for (row, col) in [(6, 22), (7, 23), (8, 24), (9, 25)] {
            assert!(canvas.get(row, col));
        }
        for (row, col) in [(22, 6), (23, 7), (24, 8), (25, 9)] {
            assert!(canvas.get(row, col));
        }
        for (row, col) in [(22, 25), (23, 24), (24, 23), (25, 22)] {
            assert!(canvas.get(row, col));
        }
    }

    // Tests a mix of pixel and diagonal corners
    // Verified by reading band state after drawing each corner
    #[test]
    fn test_partial_bands() {
        let mut canvas = with_and_bands(&[Side::Top, Side::Right]);
        fill_inner_corners(&mut canvas);
        assert!(canvas.get(9, 22));
        assert!(!canvas.get(9, 9));
        assert!(canvas.get(9, 6));
        assert!(canvas.get(25, 9));
        assert!(canvas.get(25, 22));
        assert_eq!(canvas.count_filled(), 2 + 1 + 12);
    }
}
