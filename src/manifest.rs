//! Add-on manifest handling for distribution packages.
//!
//! Besides the primary archive, a release run fans the finished `.mcpack`
//! out under version-qualified filenames (one for archiving, one for
//! CurseForge uploads). The versions come from the `manifest.json` at the
//! source-tree root; a tree without a manifest simply gets no copies.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PackagerError;

/// The `header` object of an add-on manifest. Only the version fields are
/// consumed; everything else in the manifest is ignored.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ManifestHeader {
    /// Add-on version triple, e.g. `[1, 4, 0]`.
    pub version: [u32; 3],
    /// Minimum game engine version the add-on targets.
    pub min_engine_version: [u32; 3],
}

/// The subset of `manifest.json` the packager reads.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PackManifest {
    pub header: ManifestHeader,
}

impl PackManifest {
    /// Loads `manifest.json` from the root of `source_dir`.
    ///
    /// Returns `Ok(None)` if the file does not exist; a present but
    /// malformed manifest is an error.
    pub fn load(source_dir: &Path) -> Result<Option<Self>, PackagerError> {
        let path = source_dir.join("manifest.json");
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|e| PackagerError::Io {
            source: e,
            path: path.clone(),
        })?;
        let manifest = serde_json::from_str(&content)?;
        Ok(Some(manifest))
    }

    /// Filenames for the distribution copies of the archive at `output_path`:
    /// `<stem>-<version>.<ext>` and `<stem>-<version>-r<engine>.<ext>`.
    pub fn distribution_names(&self, output_path: &Path) -> Vec<PathBuf> {
        let stem = output_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = output_path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mcpack".to_string());
        let version = dotted(&self.header.version);
        let engine = dotted(&self.header.min_engine_version);

        vec![
            output_path.with_file_name(format!("{stem}-{version}.{ext}")),
            output_path.with_file_name(format!("{stem}-{version}-r{engine}.{ext}")),
        ]
    }
}

fn dotted(triple: &[u32; 3]) -> String {
    format!("{}.{}.{}", triple[0], triple[1], triple[2])
}

/// Copies the finished archive to its distribution names, returning the
/// paths written.
pub fn write_distribution_copies(
    output_path: &Path,
    manifest: &PackManifest,
) -> Result<Vec<PathBuf>, PackagerError> {
    let targets = manifest.distribution_names(output_path);
    for target in &targets {
        fs::copy(output_path, target).map_err(|e| PackagerError::Io {
            source: e,
            path: target.clone(),
        })?;
    }
    Ok(targets)
}
