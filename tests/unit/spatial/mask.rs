//! Tests for mask orientation alignment and area computation

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use maskquant::spatial::frame::{CoordinateFrame, PixelScale};
    use maskquant::spatial::mask::{BinaryMask, RawMask, mirror_columns, rotate_quarter_ccw};
    use ndarray::{Array2, array};

    // Tests the column mirror in isolation on an asymmetric grid
    // Verified by flipping the row axis instead of the column axis
    #[test]
    fn test_mirror_flips_columns_only() {
        let cells = array![[1u8, 2, 3], [4, 5, 6]];
        let mirrored = mirror_columns(&cells);
        assert_eq!(mirrored, array![[3u8, 2, 1], [6, 5, 4]]);
    }

    // Tests the quarter turn in isolation: out[i][j] = in[j][W-1-i]
    // Verified by rotating clockwise instead
    #[test]
    fn test_rotate_quarter_ccw_moves_last_column_to_first_row() {
        let cells = array![[1u8, 2, 3], [4, 5, 6]];
        let rotated = rotate_quarter_ccw(&cells);
        assert_eq!(rotated, array![[3u8, 6], [2, 5], [1, 4]]);
    }

    // The composed mirror+rotate equals the transpose for any shape, which
    // is the invariant behind mask[x][y] indexing
    #[test]
    fn test_alignment_composition_is_transpose() {
        let cells = array![[1u8, 2, 3], [4, 5, 6]];
        let aligned = RawMask::new(cells.clone()).into_aligned();
        assert_eq!(aligned.cells(), &cells.t().to_owned());
    }

    // Orientation round-trip on a 4x4 grid with one marked corner cell:
    // image (row 0, col 3) must land at aligned (x 3, y 0)
    #[test]
    fn test_marked_corner_lands_where_the_transform_predicts() {
        let mut cells = Array2::<u8>::zeros((4, 4));
        cells[[0, 3]] = 9;
        let aligned = RawMask::new(cells).into_aligned();

        assert_eq!(aligned.value(3, 0), Some(9));
        assert_eq!(aligned.value(0, 3), Some(0));
    }

    #[test]
    fn test_alignment_swaps_dimensions_of_non_square_grids() {
        let raw = RawMask::new(Array2::<u8>::zeros((2, 5)));
        assert_eq!(raw.dimensions(), (2, 5));
        assert_eq!(raw.into_aligned().dimensions(), (5, 2));
    }

    // Tests that any positive intensity counts as foreground
    // Verified by counting only cells equal to 255
    #[test]
    fn test_area_counts_every_positive_cell_once() {
        let mask = BinaryMask::from_aligned(array![[0u8, 1, 0], [7, 0, 255]]);
        assert_eq!(mask.foreground_area_px(), 3);

        let scale = PixelScale::new(108.0, 10.0).unwrap();
        let area = mask.area(&scale);
        assert_eq!(area.px, 3);
        assert_relative_eq!(area.square_um, 3e-4, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_mask_has_zero_area() {
        let mask = BinaryMask::from_aligned(Array2::<u8>::zeros((4, 4)));
        let scale = PixelScale::new(10.0, 10.0).unwrap();
        let area = mask.area(&scale);
        assert_eq!(area.px, 0);
        assert_relative_eq!(area.square_um, 0.0);
    }

    // Area in µm² grows monotonically with the pixel count for a fixed scale
    #[test]
    fn test_physical_area_is_monotone_in_pixel_area() {
        let scale = PixelScale::new(108.0, 10.0).unwrap();
        let mut previous = -1.0;
        for foreground in 0..=4u8 {
            let mut cells = Array2::<u8>::zeros((2, 2));
            for i in 0..foreground {
                cells[[usize::from(i) / 2, usize::from(i) % 2]] = 1;
            }
            let area = BinaryMask::from_aligned(cells).area(&scale);
            assert!(area.square_um > previous);
            previous = area.square_um;
        }
    }

    #[test]
    fn test_value_outside_grid_is_none() {
        let mask = BinaryMask::from_aligned(Array2::<u8>::ones((2, 2)));
        assert_eq!(mask.value(1, 1), Some(1));
        assert_eq!(mask.value(2, 0), None);
        assert_eq!(mask.value(0, 2), None);
    }

    #[test]
    fn test_frames_of_raw_and_aligned_masks() {
        assert_eq!(RawMask::frame(), CoordinateFrame::ImageRowCol);
        assert_eq!(BinaryMask::frame(), CoordinateFrame::ClusterXy);
    }
}
