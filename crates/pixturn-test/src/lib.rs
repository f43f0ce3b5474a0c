//! pixturn-test - Regression test framework for pixturn
//!
//! Tests record each check in a [`RegParams`], which counts checks, keeps
//! every failure message and reports them all at the end instead of
//! stopping at the first mismatch.
//!
//! Fixtures are synthesized in memory (see [`fixtures`]) rather than read
//! from image files, so every expected value can be computed by hand.
//!
//! # Usage
//!
//! ```ignore
//! use pixturn_test::RegParams;
//!
//! let mut rp = RegParams::new("rotate");
//! rp.compare_values(4.0, rotated.height() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixturn-test is at crates/pixturn-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
