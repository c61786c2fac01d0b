//! Named constants and runtime configuration defaults

// Physical scales of the supported acquisitions
/// Default physical pixel size of the measurement in nanometers
pub const DEFAULT_PX_SIZE_MEASUREMENT_NM: f64 = 108.0;
/// Default physical pixel size of the mask image in nanometers
pub const DEFAULT_PX_SIZE_MASK_NM: f64 = 10.0;

/// Nanometers per micrometer
pub const NM_PER_UM: f64 = 1000.0;

// Input discovery settings
/// File extension of localization containers
pub const CLUSTER_FILE_EXTENSION: &str = "hdf5";
/// Recognized mask image extensions (lower case)
pub const MASK_FILE_EXTENSIONS: [&str; 5] = ["tif", "tiff", "png", "jpg", "jpeg"];

/// Name of the cluster table inside a localization container
pub const CLUSTER_TABLE_NAME: &str = "clusters";

// Output settings
/// Suffix of generated overlay images, also used to exclude them from discovery
pub const OVERLAY_SUFFIX: &str = "_FOV_mask_locs";

// Progress bar display settings
/// Directory count above which a batch bar is shown
pub const MIN_DIRECTORIES_FOR_BATCH_BAR: usize = 2;
