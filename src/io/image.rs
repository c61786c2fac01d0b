//! Mask image decoding and overlay export

use std::path::Path;

use image::{Rgba, RgbaImage};
use ndarray::Array2;

use crate::analysis::membership::Membership;
use crate::io::error::{QuantError, Result, computation_error};
use crate::spatial::frame::ClusterPoint;
use crate::spatial::mask::{BinaryMask, RawMask};

/// Cluster centers outside the mask foreground
const OUTSIDE_COLOR: Rgba<u8> = Rgba([0, 0, 255, 255]);
/// Cluster centers inside the mask foreground
const INSIDE_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Decode a mask image to a single-channel intensity grid
///
/// Any raster format the `image` crate recognizes is accepted; multi-channel
/// images are converted to luma. The returned grid is still in the native
/// image frame and must be aligned before classification.
///
/// # Errors
///
/// Returns `ImageRead` if the file cannot be decoded.
pub fn load_raw_mask(path: &Path) -> Result<RawMask> {
    let img = image::open(path).map_err(|e| QuantError::ImageRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let gray = img.into_luma8();
    let (width, height) = gray.dimensions();
    let cells = Array2::from_shape_vec((height as usize, width as usize), gray.into_raw())
        .map_err(|e| computation_error("mask buffer conversion", &e))?;

    Ok(RawMask::new(cells))
}

/// Export an overlay of cluster centers on the mask
///
/// Renders the aligned mask as grayscale with every cluster center drawn in
/// blue and the members in red, mirroring the on-screen layout of the mask
/// grid (image row = cluster x). Centers outside the canvas are not drawn.
///
/// # Errors
///
/// Returns `ImageExport` if the image cannot be saved.
pub fn export_overlay(
    mask: &BinaryMask,
    points: &[ClusterPoint],
    membership: &Membership,
    path: &Path,
) -> Result<()> {
    let (x_extent, y_extent) = mask.dimensions();
    let mut img = RgbaImage::new(y_extent as u32, x_extent as u32);

    for ((x, y), &v) in mask.cells().indexed_iter() {
        img.put_pixel(y as u32, x as u32, Rgba([v, v, v, 255]));
    }

    for point in points {
        let x = point.x.round_ties_even() as i64;
        let y = point.y.round_ties_even() as i64;
        if x >= 0 && y >= 0 && (x as usize) < x_extent && (y as usize) < y_extent {
            img.put_pixel(y as u32, x as u32, OUTSIDE_COLOR);
        }
    }

    for &[x, y] in membership.inside() {
        if x >= 0 && y >= 0 && (x as usize) < x_extent && (y as usize) < y_extent {
            img.put_pixel(y as u32, x as u32, INSIDE_COLOR);
        }
    }

    img.save(path).map_err(|e| QuantError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
