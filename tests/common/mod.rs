//! Test fixture utilities for integration tests.

pub mod harness;

use std::path::PathBuf;

use folio::domain::PortfolioData;

/// Returns the path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Returns the path to a valid fixture file by name.
pub fn valid_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("valid").join(name)
}

/// Returns the path to an invalid fixture file by name.
#[allow(dead_code)]
pub fn invalid_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("invalid").join(name)
}

/// Loads a valid fixture as portfolio data.
///
/// # Panics
///
/// Panics if the file cannot be read or parsed.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> PortfolioData {
    let path = valid_fixture(name);
    folio::infra::read_portfolio(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", path.display(), e))
}
