//! CSV persistence of quantification records

use std::path::Path;

use csv::Writer;

use crate::analysis::record::MaskQuantification;
use crate::io::error::{QuantError, Result};

/// Column headers of a quantification record, with literal unit superscripts
pub const REPORT_HEADER: [&str; 6] = [
    "name",
    "mask area / px\u{b2}",
    "mask area / \u{b5}m\u{b2}",
    "number of clusters in mask",
    "number of clusters in mask / mask area",
    "total number of clusters",
];

/// Write one quantification record as a two-row CSV file
///
/// The file holds the header row and one data row; an undefined density
/// serializes as `NaN`. Output is UTF-8.
///
/// # Errors
///
/// Returns `Report` if the file cannot be created or a row cannot be
/// written, and `FileSystem` if the final flush fails.
pub fn write_record(path: &Path, record: &MaskQuantification) -> Result<()> {
    let report_error = |e| QuantError::Report {
        path: path.to_path_buf(),
        source: e,
    };

    let mut writer = Writer::from_path(path).map_err(report_error)?;
    writer.write_record(REPORT_HEADER).map_err(report_error)?;
    writer
        .write_record([
            record.mask_name.clone(),
            record.area_px.to_string(),
            record.area_um2.to_string(),
            record.count_inside.to_string(),
            record.density_per_um2.to_string(),
            record.total_clusters.to_string(),
        ])
        .map_err(report_error)?;

    writer.flush().map_err(|e| QuantError::FileSystem {
        path: path.to_path_buf(),
        operation: "flush report",
        source: e,
    })?;

    Ok(())
}
