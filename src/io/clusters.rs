//! Cluster center extraction from localization containers
//!
//! Cluster files are HDF5 containers (Picasso convention) holding a compound
//! dataset named `clusters` with one record per detected cluster. Only the
//! `com_x`/`com_y` center-of-mass fields are read; the rest of the container
//! is ignored. Coordinates are stored in measurement-pixel units and come out
//! rescaled into mask-pixel units.

// The H5Type derive expands to an unsafe trait impl.
#![allow(unsafe_code)]

use std::path::Path;

use hdf5::H5Type;

use crate::io::configuration::CLUSTER_TABLE_NAME;
use crate::io::error::{QuantError, Result, cluster_format};
use crate::spatial::frame::{ClusterPoint, PixelScale};

/// Center-of-mass fields of one cluster record
///
/// A subset of the on-disk compound type; the HDF5 library extracts the named
/// fields and converts them to f64 regardless of their stored width.
#[derive(H5Type, Debug, Clone, Copy)]
#[repr(C)]
struct ClusterCenter {
    com_x: f64,
    com_y: f64,
}

/// Load all cluster centers from a container, rescaled into mask-pixel units
///
/// Every record is kept: the output length equals the record count and the
/// container order is preserved. The rescale is uniform and isotropic; no
/// rotation or offset is applied here.
///
/// # Errors
///
/// Returns `ClusterRead` if the container cannot be opened, and
/// `ClusterFormat` if the `clusters` table is absent, lacks numeric
/// `com_x`/`com_y` fields, or holds non-finite coordinates.
pub fn load_cluster_centers(path: &Path, scale: &PixelScale) -> Result<Vec<ClusterPoint>> {
    let file = hdf5::File::open(path).map_err(|e| QuantError::ClusterRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let table = file
        .dataset(CLUSTER_TABLE_NAME)
        .map_err(|e| cluster_format(path, format!("missing '{CLUSTER_TABLE_NAME}' table: {e}")))?;

    let records = table.read_raw::<ClusterCenter>().map_err(|e| {
        cluster_format(
            path,
            format!("'{CLUSTER_TABLE_NAME}' table lacks numeric com_x/com_y fields: {e}"),
        )
    })?;

    let factor = scale.scale_factor();
    let mut points = Vec::with_capacity(records.len());
    for record in &records {
        if !record.com_x.is_finite() || !record.com_y.is_finite() {
            return Err(cluster_format(
                path,
                "non-finite center-of-mass coordinate",
            ));
        }
        points.push(ClusterPoint::new(
            record.com_x * factor,
            record.com_y * factor,
        ));
    }

    Ok(points)
}
