//! Tests for the orthogonal and diagonal header segmentation

#[cfg(test)]
mod tests {
    use marginweave::algorithm::segmentation::{
        SegmentationScheme, classify, diagonal_clear, segment, segment_with,
    };
    use marginweave::spatial::{Cell, CellSet, Pattern4};

    fn cells(list: &[(usize, usize)]) -> CellSet {
        list.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    // Tests orthogonal quadrant labels
    // Verified by comparing x against the half with <=
    #[test]
    fn test_orthogonal_labels() {
        let scheme = SegmentationScheme::Orthogonal;
        assert_eq!(scheme.label(Cell::new(0, 0)), 1);
        assert_eq!(scheme.label(Cell::new(1, 1)), 1);
        assert_eq!(scheme.label(Cell::new(2, 1)), 2);
        assert_eq!(scheme.label(Cell::new(3, 3)), 3);
        assert_eq!(scheme.label(Cell::new(1, 2)), 4);
    }

    // Tests diagonal triangle labels including both diagonals
    // Verified by swapping the east and west conditions
    #[test]
    fn test_diagonal_labels() {
        let scheme = SegmentationScheme::Diagonal;
        assert_eq!(scheme.label(Cell::new(1, 0)), 1);
        assert_eq!(scheme.label(Cell::new(0, 0)), 1);
        assert_eq!(scheme.label(Cell::new(3, 0)), 2);
        assert_eq!(scheme.label(Cell::new(3, 2)), 2);
        assert_eq!(scheme.label(Cell::new(3, 3)), 3);
        assert_eq!(scheme.label(Cell::new(1, 3)), 3);
        assert_eq!(scheme.label(Cell::new(0, 1)), 4);
        assert_eq!(scheme.label(Cell::new(0, 3)), 4);
    }

    // Tests the diagonal clearance check
    // Verified by requiring both diagonals to be clear
    #[test]
    fn test_diagonal_clear() {
        assert!(diagonal_clear(&Pattern4::empty()));
        assert!(!diagonal_clear(&Pattern4::full()));

        let main_only = Pattern4::from_bits([[1, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 1]]);
        assert!(diagonal_clear(&main_only));

        let both = Pattern4::from_bits([[1, 0, 0, 1], [0; 4], [0; 4], [0; 4]]);
        assert!(!diagonal_clear(&both));
        assert_eq!(classify(&both), SegmentationScheme::Orthogonal);
    }

    // Tests four corners segment orthogonally one per group
    // Verified by labelling bottom-left as segment 3
    #[test]
    fn test_corner_header_orthogonal() {
        let header = Pattern4::from_bits([[1, 0, 0, 1], [0; 4], [0; 4], [1, 0, 0, 1]]);
        let segments = segment(&header);
        assert_eq!(segments.scheme(), SegmentationScheme::Orthogonal);
        assert_eq!(segments.get(1), Some(&cells(&[(0, 0)])));
        assert_eq!(segments.get(2), Some(&cells(&[(3, 0)])));
        assert_eq!(segments.get(3), Some(&cells(&[(3, 3)])));
        assert_eq!(segments.get(4), Some(&cells(&[(0, 3)])));
    }

    // Tests edge-middle cells segment diagonally
    // Verified by ignoring the diagonal clearance test
    #[test]
    fn test_edge_header_diagonal() {
        let header = Pattern4::from_bits([[0, 1, 1, 0], [1, 0, 0, 1], [1, 0, 0, 1], [0, 1, 1, 0]]);
        let segments = segment(&header);
        assert_eq!(segments.scheme(), SegmentationScheme::Diagonal);
        assert_eq!(segments.get(1), Some(&cells(&[(1, 0), (2, 0)])));
        assert_eq!(segments.get(2), Some(&cells(&[(3, 1), (3, 2)])));
        assert_eq!(segments.get(3), Some(&cells(&[(1, 3), (2, 3)])));
        assert_eq!(segments.get(4), Some(&cells(&[(0, 1), (0, 2)])));
    }

    // Tests an empty diagonal group falls back to orthogonal
    // Verified by keeping the diagonal grouping regardless
    #[test]
    fn test_diagonal_fallback() {
        let header = Pattern4::from_bits([[0, 1, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(classify(&header), SegmentationScheme::Diagonal);
        assert!(segment_with(&header, SegmentationScheme::Diagonal).has_empty_group());

        let segments = segment(&header);
        assert_eq!(segments.scheme(), SegmentationScheme::Orthogonal);
        assert_eq!(segments.get(1), Some(&cells(&[(1, 0)])));
        assert_eq!(segments.get(2).map(CellSet::count), Some(0));
    }

    // Tests segments partition the header's filled cells
    // Verified by dropping cells whose label is 4
    #[test]
    fn test_segments_partition_header() {
        let header = Pattern4::from_bits([[1, 1, 0, 1], [0, 1, 1, 0], [1, 0, 0, 1], [0, 1, 1, 1]]);
        let segments = segment(&header);
        assert_eq!(segments.all_cells(), header.filled_cells());
        let total: usize = segments.iter().map(|(_, group)| group.count()).sum();
        assert_eq!(total, header.count());
    }

    // Tests segment lookup outside 1-4 yields nothing
    // Verified by indexing groups without the offset
    #[test]
    fn test_segment_index_bounds() {
        let segments = segment(&Pattern4::full());
        assert!(segments.get(0).is_none());
        assert!(segments.get(5).is_none());
        assert_eq!(segments.iter().count(), 4);
    }

    // Tests scheme display names
    // Verified by printing the debug form
    #[test]
    fn test_scheme_display() {
        assert_eq!(SegmentationScheme::Orthogonal.to_string(), "Orthogonal");
        assert_eq!(SegmentationScheme::Diagonal.to_string(), "Diagonal");
    }
}
