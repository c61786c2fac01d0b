//! Tests for mask decoding and overlay export

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};
    use maskquant::QuantError;
    use maskquant::analysis::membership::classify;
    use maskquant::io::image::{export_overlay, load_raw_mask};
    use maskquant::spatial::frame::ClusterPoint;
    use maskquant::spatial::mask::BinaryMask;
    use ndarray::Array2;

    // Decoded grids keep the native image frame: row = image y
    #[test]
    fn test_decoded_grid_matches_image_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        let mut img = GrayImage::from_pixel(3, 2, Luma([0]));
        img.put_pixel(2, 0, Luma([200]));
        img.put_pixel(0, 1, Luma([40]));
        img.save(&path).unwrap();

        let raw = load_raw_mask(&path).unwrap();
        assert_eq!(raw.dimensions(), (2, 3));

        let aligned = raw.into_aligned();
        // aligned[x][y] = image pixel (column x, row y)
        assert_eq!(aligned.value(2, 0), Some(200));
        assert_eq!(aligned.value(0, 1), Some(40));
        assert_eq!(aligned.value(1, 1), Some(0));
    }

    #[test]
    fn test_undecodable_file_is_an_image_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(
            load_raw_mask(&path),
            Err(QuantError::ImageRead { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_an_image_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_raw_mask(&dir.path().join("absent.png")),
            Err(QuantError::ImageRead { .. })
        ));
    }

    // The overlay draws members red, non-members blue, and mask background
    // gray, with image row = cluster x
    #[test]
    fn test_overlay_colors_members_and_outsiders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.png");

        let mut cells = Array2::<u8>::zeros((4, 4));
        cells[[1, 2]] = 255;
        let mask = BinaryMask::from_aligned(cells);

        let points = [ClusterPoint::new(1.0, 2.0), ClusterPoint::new(3.0, 0.0)];
        let membership = classify(&points, &mask).unwrap();
        assert_eq!(membership.count(), 1);

        export_overlay(&mask, &points, &membership, &path).unwrap();

        let rendered = image::open(&path).unwrap().into_rgba8();
        assert_eq!(rendered.dimensions(), (4, 4));
        // member (1, 2) -> pixel (col 2, row 1) in red
        assert_eq!(rendered.get_pixel(2, 1).0, [255, 0, 0, 255]);
        // outsider (3, 0) -> pixel (col 0, row 3) in blue
        assert_eq!(rendered.get_pixel(0, 3).0, [0, 0, 255, 255]);
        // untouched background stays black
        assert_eq!(rendered.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_overlay_export_to_invalid_path_fails() {
        let mask = BinaryMask::from_aligned(Array2::<u8>::ones((2, 2)));
        let membership = classify(&[], &mask).unwrap();

        let result = export_overlay(
            &mask,
            &[],
            &membership,
            std::path::Path::new("/nonexistent/dir/overlay.png"),
        );
        assert!(matches!(result, Err(QuantError::ImageExport { .. })));
    }
}
