//! Spatial data structures for coordinate/mask reconciliation
//!
//! This module contains the geometric side of the pipeline:
//! - The coordinate frame contract between cluster centers and mask grids
//! - Physical pixel scales and unit conversion
//! - Mask alignment and area computation

/// Coordinate frame contract, pixel scales, and cluster points
pub mod frame;
/// Mask grids, orientation transform, and area computation
pub mod mask;

pub use frame::{ClusterPoint, CoordinateFrame, PixelScale};
pub use mask::{BinaryMask, MaskArea, RawMask};
