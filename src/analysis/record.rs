//! Per-mask quantification records

use crate::analysis::membership::Membership;
use crate::spatial::mask::MaskArea;

/// One quantification result per (directory, mask) pair
///
/// Terminal output of the pipeline; assembled once and written out unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskQuantification {
    /// File stem of the mask image
    pub mask_name: String,
    /// Mask foreground area in px²
    pub area_px: u64,
    /// Mask foreground area in µm²
    pub area_um2: f64,
    /// Number of clusters inside the mask
    pub count_inside: usize,
    /// Clusters inside the mask per µm² of mask area; NaN for a zero-area mask
    pub density_per_um2: f64,
    /// Total number of clusters in the field of view
    pub total_clusters: usize,
}

impl MaskQuantification {
    /// Assemble the record for one mask
    ///
    /// A zero-area mask yields a NaN density, a distinguishable result state
    /// instead of a division failure; the record is still written.
    pub fn new(
        mask_name: String,
        area: MaskArea,
        membership: &Membership,
        total_clusters: usize,
    ) -> Self {
        let count_inside = membership.count();
        let density_per_um2 = if area.square_um > 0.0 {
            count_inside as f64 / area.square_um
        } else {
            f64::NAN
        };

        Self {
            mask_name,
            area_px: area.px,
            area_um2: area.square_um,
            count_inside,
            density_per_um2,
            total_clusters,
        }
    }

    /// Whether the density is a defined number
    pub const fn density_defined(&self) -> bool {
        self.density_per_um2.is_finite()
    }
}
