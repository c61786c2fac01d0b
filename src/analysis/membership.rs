//! Point-in-mask membership classification
//!
//! Each cluster point is rounded to integer grid indices and looked up in the
//! aligned mask. Rounding uses round-half-to-even (`f64::round_ties_even`),
//! matching the rounding of the acquisition software that produced the
//! coordinates; a point exactly halfway between two pixels lands on the even
//! index.

use crate::io::error::{QuantError, Result};
use crate::spatial::frame::ClusterPoint;
use crate::spatial::mask::BinaryMask;

/// Result of classifying a cluster sequence against one mask
///
/// Holds the rounded `[x, y]` indices of the members in encounter order. The
/// member count never exceeds the length of the classified sequence.
#[derive(Debug, Clone, Default)]
pub struct Membership {
    inside: Vec<[i64; 2]>,
}

impl Membership {
    /// Number of clusters inside the mask
    pub fn count(&self) -> usize {
        self.inside.len()
    }

    /// Rounded indices of the members, in encounter order
    pub fn inside(&self) -> &[[i64; 2]] {
        &self.inside
    }
}

/// Classify each point as inside or outside the mask foreground
///
/// A point is inside iff the mask cell at its rounded `[x][y]` index is
/// non-zero. Points are visited in sequence order and the order of members is
/// preserved.
///
/// # Errors
///
/// Returns `PointOutOfBounds` if any point rounds to an index outside the
/// grid, including negative indices. The whole mask fails; no partial result
/// is produced.
pub fn classify(points: &[ClusterPoint], mask: &BinaryMask) -> Result<Membership> {
    let dimensions = mask.dimensions();
    let mut inside = Vec::new();

    for point in points {
        let x = point.x.round_ties_even() as i64;
        let y = point.y.round_ties_even() as i64;

        if x < 0 || y < 0 || x as usize >= dimensions.0 || y as usize >= dimensions.1 {
            return Err(QuantError::PointOutOfBounds {
                point: [x, y],
                dimensions,
            });
        }

        if mask.value(x as usize, y as usize).is_some_and(|v| v > 0) {
            inside.push([x, y]);
        }
    }

    Ok(Membership { inside })
}
