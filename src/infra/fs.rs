//! File I/O for portfolio data and exported documents, with atomic writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::domain::PortfolioData;

/// Errors during file system operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse portfolio data at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads portfolio data from a JSON file.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::InvalidEncoding` if the file is not UTF-8.
/// Returns `FsError::Parse` if the JSON is malformed or lacks `personalInfo`.
pub fn read_portfolio(path: &Path) -> Result<PortfolioData, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    parse_portfolio_from_bytes(bytes, path)
}

/// Parses portfolio data from already-read bytes.
///
/// A UTF-8 byte order mark is accepted and ignored.
pub fn parse_portfolio_from_bytes(bytes: Vec<u8>, path: &Path) -> Result<PortfolioData, FsError> {
    if bytes.starts_with(&[0xFF, 0xFE]) || bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 byte order mark detected; convert to UTF-8".into(),
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    PortfolioData::from_json(content).map_err(|e| FsError::Parse {
        path: path.into(),
        source: e,
    })
}

/// Writes an exported document atomically.
///
/// See [`write_atomic`].
pub fn write_document(path: &Path, html: &str) -> Result<(), FsError> {
    write_atomic(path, html)?;
    tracing::info!(path = %path.display(), bytes = html.len(), "wrote portfolio document");
    Ok(())
}

/// Writes `content` to `path` through a temporary file and rename.
///
/// The temporary file is created next to the target so the rename stays on
/// one filesystem. The parent directory must exist; a bare file name is
/// relative to the current directory.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), FsError> {
    let parent = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => return Err(FsError::ParentNotFound { path: path.into() }),
    };

    if !parent.is_dir() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(content.as_bytes())
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{"personalInfo": {"name": "Jane Doe", "title": "Engineer", "bio": "Hi"}}"#;

    fn create_test_file(dir: &TempDir, content: &[u8]) -> PathBuf {
        let path = dir.path().join("portfolio.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn fs_error_not_found_displays_path() {
        let error = FsError::NotFound {
            path: PathBuf::from("/some/data.json"),
        };
        assert!(error.to_string().contains("/some/data.json"));
    }

    #[test]
    fn fs_error_from_io_maps_kinds() {
        let path = Path::new("/test/data.json");
        let not_found = FsError::from_io(path, io::Error::new(io::ErrorKind::NotFound, "x"));
        let denied = FsError::from_io(path, io::Error::new(io::ErrorKind::PermissionDenied, "x"));
        let other = FsError::from_io(path, io::Error::other("x"));

        assert!(matches!(not_found, FsError::NotFound { .. }));
        assert!(matches!(denied, FsError::PermissionDenied { .. }));
        assert!(matches!(other, FsError::Io { .. }));
    }

    #[test]
    fn read_portfolio_parses_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = create_test_file(&dir, MINIMAL.as_bytes());

        let data = read_portfolio(&path).unwrap();
        assert_eq!(data.personal_info.name, "Jane Doe");
        assert!(data.skills.is_empty());
    }

    #[test]
    fn read_portfolio_strips_utf8_bom() {
        let dir = TempDir::new().unwrap();
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(MINIMAL.as_bytes());
        let path = create_test_file(&dir, &bytes);

        assert_eq!(read_portfolio(&path).unwrap().personal_info.name, "Jane Doe");
    }

    #[test]
    fn read_portfolio_rejects_utf16() {
        let dir = TempDir::new().unwrap();
        let path = create_test_file(&dir, &[0xFF, 0xFE, b'{', 0, b'}', 0]);

        let result = read_portfolio(&path);
        assert!(matches!(result, Err(FsError::InvalidEncoding { .. })));
    }

    #[test]
    fn read_portfolio_returns_not_found_for_missing_file() {
        let result = read_portfolio(Path::new("/nonexistent/portfolio.json"));
        assert!(matches!(result, Err(FsError::NotFound { .. })));
    }

    #[test]
    fn read_portfolio_requires_personal_info() {
        let dir = TempDir::new().unwrap();
        let path = create_test_file(&dir, br#"{"skills": []}"#);

        let result = read_portfolio(&path);
        match result {
            Err(FsError::Parse { path: error_path, .. }) => assert_eq!(error_path, path),
            other => panic!("expected FsError::Parse, got {other:?}"),
        }
    }

    #[test]
    fn write_document_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jane-doe-portfolio.html");

        write_document(&path, "<!DOCTYPE html>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<!DOCTYPE html>");
    }

    #[test]
    fn write_document_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.html");

        write_document(&path, "first").unwrap();
        write_document(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn write_atomic_returns_parent_not_found() {
        let result = write_atomic(Path::new("/nonexistent/directory/out.html"), "x");
        match result {
            Err(FsError::ParentNotFound { path }) => {
                assert!(path.to_string_lossy().contains("nonexistent"));
            }
            other => panic!("expected FsError::ParentNotFound, got {other:?}"),
        }
    }

    #[test]
    fn write_atomic_leaves_no_temp_files_on_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.html");

        write_atomic(&path, "content").unwrap();

        let files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name(), "out.html");
    }

    #[test]
    fn written_sample_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        let sample = PortfolioData::sample();

        write_atomic(&path, &sample.to_json_pretty()).unwrap();

        assert_eq!(read_portfolio(&path).unwrap(), sample);
    }
}
