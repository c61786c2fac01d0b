//! Membership classification and per-mask result assembly
//!
//! This module contains the classification side of the pipeline:
//! - Point-in-mask membership testing
//! - Assembly of the per-mask quantification record

/// Point-in-mask classification
pub mod membership;
/// Per-mask quantification records
pub mod record;

pub use membership::{Membership, classify};
pub use record::MaskQuantification;
