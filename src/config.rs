//! Fixed-path configuration for the packager.
//!
//! The binary has no CLI surface; every run packages the same source tree
//! into the same output file. The paths live in one struct so library
//! callers (and tests) can point the packager elsewhere without touching
//! the call sites.

use std::path::PathBuf;

/// Directory whose recursive contents are packaged.
pub const SOURCE_DIR: &str = "src";
/// License file appended as the last, root-level archive entry.
pub const LICENSE_PATH: &str = "LICENSE";
/// Name of the produced archive.
pub const OUTPUT_PATH: &str = "debug-stick.mcpack";

/// Paths consumed by one packaging run.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Root of the tree to archive. Must exist and be a directory.
    pub source_dir: PathBuf,
    /// File added at the archive root under its own base filename.
    pub license_path: PathBuf,
    /// Destination of the finished archive; overwritten if present.
    pub output_path: PathBuf,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(SOURCE_DIR),
            license_path: PathBuf::from(LICENSE_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}
