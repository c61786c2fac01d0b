//! Mask grids, orientation alignment, and area computation
//!
//! Mask images are decoded in the native image frame (row = image y). The
//! membership test indexes the grid with the cluster x coordinate first, so
//! the grid must be re-oriented before any classification. The two-type split
//! ([`RawMask`] vs [`BinaryMask`]) guarantees the alignment transform is
//! applied exactly once: the only way to obtain a [`BinaryMask`] from decoded
//! pixels is [`RawMask::into_aligned`].

use ndarray::{Array2, Axis};

use crate::spatial::frame::{CoordinateFrame, PixelScale};

/// Mirror a grid horizontally by flipping the column axis
pub fn mirror_columns(cells: &Array2<u8>) -> Array2<u8> {
    let mut mirrored = cells.clone();
    mirrored.invert_axis(Axis(1));
    mirrored
}

/// Rotate a grid a quarter turn counter-clockwise
///
/// In array terms `out[i][j] = in[j][W-1-i]`, so an H×W input becomes W×H.
pub fn rotate_quarter_ccw(cells: &Array2<u8>) -> Array2<u8> {
    let mut rotated = cells.t().to_owned();
    rotated.invert_axis(Axis(0));
    rotated
}

/// Mask intensities as decoded, still in the native image frame
#[derive(Debug, Clone)]
pub struct RawMask {
    cells: Array2<u8>,
}

impl RawMask {
    /// Wrap a decoded intensity grid (row = image y, column = image x)
    pub const fn new(cells: Array2<u8>) -> Self {
        Self { cells }
    }

    /// Frame of the wrapped grid
    pub const fn frame() -> CoordinateFrame {
        CoordinateFrame::ImageRowCol
    }

    /// Grid dimensions as (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Align the grid with the cluster coordinate frame
    ///
    /// Applies, in this order: a horizontal mirror (column axis flip), then a
    /// quarter turn counter-clockwise. The composition equals the transpose
    /// for any grid shape, which is what makes `mask[x][y]` indexing valid
    /// for cluster coordinates. The order is not commutative with respect to
    /// either step alone and must not be changed.
    pub fn into_aligned(self) -> BinaryMask {
        let mirrored = mirror_columns(&self.cells);
        BinaryMask {
            cells: rotate_quarter_ccw(&mirrored),
        }
    }
}

/// Mask area in pixel and physical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskArea {
    /// Count of foreground cells
    pub px: u64,
    /// Foreground area in square micrometers
    pub square_um: f64,
}

/// Binary region mask aligned to the cluster coordinate frame
///
/// Any cell value above zero is foreground. Indexing is `[x][y]` in cluster
/// coordinates.
#[derive(Debug, Clone)]
pub struct BinaryMask {
    cells: Array2<u8>,
}

impl BinaryMask {
    /// Construct from a grid that is already in the cluster frame
    ///
    /// Intended for synthetic masks; decoded images go through
    /// [`RawMask::into_aligned`] instead.
    pub const fn from_aligned(cells: Array2<u8>) -> Self {
        Self { cells }
    }

    /// Frame of the aligned grid
    pub const fn frame() -> CoordinateFrame {
        CoordinateFrame::ClusterXy
    }

    /// Grid dimensions as (x extent, y extent)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Cell value at `[x][y]`, or `None` outside the grid
    pub fn value(&self, x: usize, y: usize) -> Option<u8> {
        self.cells.get((x, y)).copied()
    }

    /// Read access to the aligned grid
    pub const fn cells(&self) -> &Array2<u8> {
        &self.cells
    }

    /// Count of foreground cells
    pub fn foreground_area_px(&self) -> u64 {
        self.cells.iter().filter(|&&v| v > 0).count() as u64
    }

    /// Foreground area in pixel and physical units
    pub fn area(&self, scale: &PixelScale) -> MaskArea {
        let px = self.foreground_area_px();
        MaskArea {
            px,
            square_um: px as f64 * scale.mask_pixel_area_um2(),
        }
    }
}
