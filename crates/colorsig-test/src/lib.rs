//! colorsig-test - Regression test framework for colorsig
//!
//! Tracks a sequence of numbered comparisons for one regression test and
//! reports every failure at the end instead of stopping at the first one.
//!
//! # Usage
//!
//! ```ignore
//! use colorsig_test::RegParams;
//!
//! let mut rp = RegParams::new("descriptor");
//! rp.compare_values(0.5714, weight, 1e-4);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display". Display mode
//!   additionally prints the values being compared.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::fs;
use std::path::PathBuf;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // colorsig-test is at crates/colorsig-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Path for a generated file in the regout directory, creating the
/// directory if needed
pub fn regout_path(name: &str) -> TestResult<PathBuf> {
    let dir = regout_dir();
    fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(dir).join(name))
}
