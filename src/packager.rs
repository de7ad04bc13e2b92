//! The Packager: walks the add-on source tree and writes the `.mcpack` zip.
//!
//! One call to [`pack`] produces the whole archive: every regular file under
//! the source directory becomes one deflate-compressed entry named by its
//! source-relative path, and the license file is appended last as a
//! root-level entry. The archive is staged in a temp file next to the
//! output and renamed into place once finalized, so a failed run never
//! leaves a half-written archive at the output path.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::PackConfig;
use crate::error::PackagerError;

/// Totals reported by a successful packaging run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackSummary {
    /// Number of entries written, the license entry included.
    pub entries: usize,
    /// Uncompressed bytes streamed into the archive.
    pub bytes: u64,
}

/// Collects every regular file under `source_dir`, sorted lexicographically.
///
/// Sorting makes the entry order deterministic across runs and filesystems;
/// the walk itself does not guarantee sibling order. Directories contribute
/// no entries of their own.
pub fn collect_files(source_dir: &Path) -> Result<Vec<PathBuf>, PackagerError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(source_dir) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Computes the archive entry name for `path`: its path relative to
/// `source_dir`, with forward-slash separators for portability.
pub fn entry_name(source_dir: &Path, path: &Path) -> Result<String, PackagerError> {
    let rel = path
        .strip_prefix(source_dir)
        .map_err(|_| PackagerError::StripPrefix {
            prefix: source_dir.to_path_buf(),
            path: path.to_path_buf(),
        })?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

/// Packages `config.source_dir` plus the license file into a zip archive at
/// `config.output_path`.
///
/// Input paths are validated before any output is created, so a missing
/// source directory or license file leaves the filesystem untouched. Any
/// existing file at the output path is replaced on success.
pub fn pack(config: &PackConfig) -> Result<PackSummary, PackagerError> {
    if !config.source_dir.is_dir() {
        return Err(PackagerError::Io {
            source: io::Error::new(io::ErrorKind::NotFound, "source directory not found"),
            path: config.source_dir.clone(),
        });
    }
    if !config.license_path.is_file() {
        return Err(PackagerError::Io {
            source: io::Error::new(io::ErrorKind::NotFound, "license file not found"),
            path: config.license_path.clone(),
        });
    }
    let license_name = config
        .license_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| PackagerError::Io {
            source: io::Error::new(io::ErrorKind::InvalidInput, "license path has no filename"),
            path: config.license_path.clone(),
        })?;

    // Stage the archive next to the output so the final rename stays on one
    // filesystem.
    let staging_dir = match config.output_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(staging_dir).map_err(|e| PackagerError::Io {
        source: e,
        path: staging_dir.to_path_buf(),
    })?;

    let mut zip = ZipWriter::new(temp);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut summary = PackSummary { entries: 0, bytes: 0 };
    for path in collect_files(&config.source_dir)? {
        let name = entry_name(&config.source_dir, &path)?;
        zip.start_file(name, options)?;
        summary.bytes += copy_into(&path, &mut zip)?;
        summary.entries += 1;
    }

    // The license always lands at the archive root, regardless of where the
    // file itself lives.
    zip.start_file(license_name, options)?;
    summary.bytes += copy_into(&config.license_path, &mut zip)?;
    summary.entries += 1;

    let mut temp = zip.finish()?;
    io::Write::flush(&mut temp)?;
    temp.persist(&config.output_path)
        .map_err(|e| PackagerError::Io {
            source: e.error,
            path: config.output_path.clone(),
        })?;

    Ok(summary)
}

fn copy_into<W: io::Write>(path: &Path, writer: &mut W) -> Result<u64, PackagerError> {
    let mut file = File::open(path).map_err(|e| PackagerError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;
    let n = io::copy(&mut file, writer).map_err(|e| PackagerError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn entry_name_uses_forward_slashes() -> Result<(), Box<dyn std::error::Error>> {
        let name = entry_name(Path::new("src"), &Path::new("src").join("sub").join("b.txt"))?;
        assert_eq!(name, "sub/b.txt");
        Ok(())
    }

    #[test]
    fn entry_name_rejects_foreign_paths() {
        let err = entry_name(Path::new("src"), Path::new("elsewhere/a.txt"));
        assert!(matches!(err, Err(PackagerError::StripPrefix { .. })));
    }

    #[test]
    fn collect_files_is_sorted_and_skips_dirs() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("zz"))?;
        fs::create_dir(dir.path().join("empty"))?;
        fs::write(dir.path().join("zz/late.txt"), b"x")?;
        fs::write(dir.path().join("aa.txt"), b"x")?;
        fs::write(dir.path().join("mm.txt"), b"x")?;

        let files = collect_files(dir.path())?;
        let names: Vec<String> = files
            .iter()
            .map(|p| entry_name(dir.path(), p))
            .collect::<Result<_, _>>()?;
        assert_eq!(names, vec!["aa.txt", "mm.txt", "zz/late.txt"]);
        Ok(())
    }

    #[test]
    fn pack_fails_before_creating_output_when_source_missing() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("LICENSE"), b"MIT")?;
        let config = PackConfig {
            source_dir: dir.path().join("no-such-dir"),
            license_path: dir.path().join("LICENSE"),
            output_path: dir.path().join("out.mcpack"),
        };

        let err = pack(&config);
        assert!(matches!(err, Err(PackagerError::Io { .. })));
        assert!(!config.output_path.exists());
        Ok(())
    }
}
