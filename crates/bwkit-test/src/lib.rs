//! bwkit-test - Regression test framework for bwkit
//!
//! Regression tests record every comparison in a [`RegParams`] and assert
//! once at the end, so a single run reports all failing checks:
//!
//! ```
//! use bwkit_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(3.0, 3.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! Fixture matrices live in `tests/data/` at the workspace root and are
//! read with [`load_test_matrix`].

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use bwkit_core::NdArray;

/// Load a whitespace-separated numeric matrix from the test data directory
///
/// One row per line; blank lines and lines starting with `#` are skipped.
/// `Inf` and `-Inf` are accepted.
///
/// # Arguments
///
/// * `name` - File name (e.g., "bwdist_input.txt")
pub fn load_test_matrix(name: &str) -> TestResult<NdArray<f64>> {
    let path = test_data_path(name);
    let text = std::fs::read_to_string(&path)?;
    parse_matrix(&text).map_err(|message| TestError::MatrixLoad { path, message })
}

fn parse_matrix(text: &str) -> Result<NdArray<f64>, String> {
    let mut rows = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|e| format!("line {}: '{}': {}", lineno + 1, token, e))
            })
            .collect::<Result<Vec<f64>, String>>()?;
        rows.push(row);
    }
    NdArray::from_rows(&rows).map_err(|e| e.to_string())
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // bwkit-test is at crates/bwkit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/{}", workspace_root(), name)
}
