//! Command-line interface for batch quantification of cluster masks
//!
//! Each target directory holds one localization container and one or more
//! mask images; the batch layer loads the cluster sequence once per
//! directory and produces one CSV record per mask. Failures are isolated at
//! the (directory, mask) granularity: a bad mask is logged and skipped, a bad
//! directory skips only its own masks.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, error, info, warn};

use crate::analysis::membership::classify;
use crate::analysis::record::MaskQuantification;
use crate::io::clusters::load_cluster_centers;
use crate::io::configuration::{
    CLUSTER_FILE_EXTENSION, DEFAULT_PX_SIZE_MASK_NM, DEFAULT_PX_SIZE_MEASUREMENT_NM,
    MASK_FILE_EXTENSIONS, OVERLAY_SUFFIX,
};
use crate::io::error::{QuantError, Result};
use crate::io::image::{export_overlay, load_raw_mask};
use crate::io::progress::ProgressManager;
use crate::io::report::write_record;
use crate::spatial::frame::{ClusterPoint, PixelScale};

#[derive(Parser)]
#[command(name = "maskquant")]
#[command(
    author,
    version,
    about = "Quantify cluster counts within binary mask regions"
)]
/// Command-line arguments for the quantification tool
pub struct Cli {
    /// Directories each holding one cluster .hdf5 file and one or more mask images
    #[arg(value_name = "DIRECTORY", required = true)]
    pub directories: Vec<PathBuf>,

    /// Physical pixel size of the measurement in nanometers
    #[arg(long, value_name = "NM", default_value_t = DEFAULT_PX_SIZE_MEASUREMENT_NM)]
    pub px_size_measurement: f64,

    /// Physical pixel size of the mask images in nanometers
    #[arg(long, value_name = "NM", default_value_t = DEFAULT_PX_SIZE_MASK_NM)]
    pub px_size_mask: f64,

    /// Export an overlay image of cluster centers for each mask
    #[arg(short, long)]
    pub overlays: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Validated runtime configuration consumed by the pipeline
#[derive(Debug, Clone, Copy)]
pub struct QuantConfig {
    /// Physical pixel sizes of measurement and mask
    pub scale: PixelScale,
    /// Whether overlay images are exported per mask
    pub overlays: bool,
}

impl QuantConfig {
    /// Build a validated configuration from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either pixel size is not strictly
    /// positive.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            scale: PixelScale::new(cli.px_size_measurement, cli.px_size_mask)?,
            overlays: cli.overlays,
        })
    }
}

/// Orchestrates batch processing of mask directories with progress tracking
pub struct BatchProcessor {
    config: QuantConfig,
    directories: Vec<PathBuf>,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is invalid.
    pub fn new(cli: Cli) -> Result<Self> {
        let config = QuantConfig::from_cli(&cli)?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            config,
            directories: cli.directories,
            progress_manager,
        })
    }

    /// Process every directory, isolating per-directory failures
    ///
    /// A directory that fails to load is logged and skipped; the remaining
    /// directories are still processed.
    ///
    /// # Errors
    ///
    /// Currently infallible per unit of work; reserved for setup failures.
    pub fn process(&mut self) -> Result<()> {
        let directories = self.directories.clone();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(directories.len());
        }

        for directory in &directories {
            if let Err(err) = self.process_directory(directory) {
                error!("Skipping directory '{}': {err}", directory.display());
            }
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_directory();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn process_directory(&mut self, directory: &Path) -> Result<()> {
        let cluster_path = find_cluster_file(directory)?;
        let mask_paths = find_mask_files(directory)?;

        let points = load_cluster_centers(&cluster_path, &self.config.scale)?;
        info!(
            "{}: {} clusters, {} masks",
            directory.display(),
            points.len(),
            mask_paths.len()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_directory(directory, mask_paths.len());
        }

        for mask_path in &mask_paths {
            if let Err(err) = self.process_mask(mask_path, &cluster_path, &points) {
                error!("Skipping mask '{}': {err}", mask_path.display());
            }
            if let Some(ref pm) = self.progress_manager {
                pm.mask_done();
            }
        }

        Ok(())
    }

    fn process_mask(
        &self,
        mask_path: &Path,
        cluster_path: &Path,
        points: &[ClusterPoint],
    ) -> Result<()> {
        let mask_name = mask_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let mask = load_raw_mask(mask_path)?.into_aligned();
        let area = mask.area(&self.config.scale);
        let membership = classify(points, &mask)?;

        let record = MaskQuantification::new(mask_name.clone(), area, &membership, points.len());
        if !record.density_defined() {
            warn!(
                "Mask '{}' has no foreground; density is undefined",
                mask_path.display()
            );
        }

        write_record(&report_path(cluster_path, &mask_name), &record)?;

        if self.config.overlays {
            export_overlay(
                &mask,
                points,
                &membership,
                &overlay_path(mask_path, &mask_name),
            )?;
        }

        debug!(
            "Mask '{mask_name}': {} px², {} of {} clusters inside",
            record.area_px, record.count_inside, record.total_clusters
        );

        Ok(())
    }
}

// First .hdf5 file in lexical order; the directory layout allows exactly one
fn find_cluster_file(directory: &Path) -> Result<PathBuf> {
    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(|e| QuantError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source: e,
    })? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some(CLUSTER_FILE_EXTENSION) {
            candidates.push(path);
        }
    }
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| QuantError::MissingClusterFile {
            directory: directory.to_path_buf(),
        })
}

// All mask images in lexical order, excluding previously generated overlays
fn find_mask_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(|e| QuantError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source: e,
    })? {
        let path = entry?.path();
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        let is_mask = extension.is_some_and(|ext| MASK_FILE_EXTENSIONS.contains(&ext.as_str()));
        let is_overlay = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().contains(OVERLAY_SUFFIX));

        if is_mask && !is_overlay {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// <cluster stem><mask stem>.csv next to the cluster file
fn report_path(cluster_path: &Path, mask_name: &str) -> PathBuf {
    let stem = cluster_path.file_stem().unwrap_or_default();
    let report_name = format!("{}{mask_name}.csv", stem.to_string_lossy());

    cluster_path
        .parent()
        .map_or_else(|| PathBuf::from(&report_name), |p| p.join(&report_name))
}

// <mask stem>_FOV_mask_locs.png next to the mask
fn overlay_path(mask_path: &Path, mask_name: &str) -> PathBuf {
    let overlay_name = format!("{mask_name}{OVERLAY_SUFFIX}.png");

    mask_path
        .parent()
        .map_or_else(|| PathBuf::from(&overlay_name), |p| p.join(&overlay_name))
}
