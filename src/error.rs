use std::path::PathBuf;

/// The primary error type for all operations in the `mcpacker` crate.
#[derive(Debug)]
pub enum PackagerError {
    /// An I/O error occurred, typically while reading a source file or writing the archive.
    /// Includes the path where the error happened.
    Io { source: std::io::Error, path: PathBuf },

    /// An error occurred when trying to strip the source-directory prefix from a file path.
    StripPrefix { prefix: PathBuf, path: PathBuf },

    /// An error from the underlying `zip` crate while writing the archive container.
    Zip(zip::result::ZipError),

    /// An error during deserialization of the add-on manifest.
    Manifest(serde_json::Error),
}

impl std::fmt::Display for PackagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackagerError::Io { source, path } => {
                write!(f, "I/O error on path '{}': {}", path.display(), source)
            }
            PackagerError::StripPrefix { prefix, path } => write!(
                f,
                "Could not strip prefix '{}' from path '{}'",
                prefix.display(),
                path.display()
            ),
            PackagerError::Zip(e) => write!(f, "Archive error: {}", e),
            PackagerError::Manifest(e) => write!(f, "Manifest error: {}", e),
        }
    }
}

impl std::error::Error for PackagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackagerError::Io { source, .. } => Some(source),
            PackagerError::Zip(e) => Some(e),
            PackagerError::Manifest(e) => Some(e),
            _ => None,
        }
    }
}

impl From<zip::result::ZipError> for PackagerError {
    fn from(err: zip::result::ZipError) -> Self {
        PackagerError::Zip(err)
    }
}

impl From<serde_json::Error> for PackagerError {
    fn from(err: serde_json::Error) -> Self {
        PackagerError::Manifest(err)
    }
}

// Generic IO error conversion that doesn't require a path
impl From<std::io::Error> for PackagerError {
    fn from(err: std::io::Error) -> Self {
        PackagerError::Io { source: err, path: PathBuf::new() } // Generic path
    }
}

impl From<walkdir::Error> for PackagerError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed"));
        PackagerError::Io { source, path }
    }
}
