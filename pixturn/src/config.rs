//! Runtime configuration
//!
//! Every field is optional in the JSON file; missing ones take the defaults
//! below, which reproduce the fixed names of the classic tool.
//!
//! ```json
//! {
//!   "input": "photo.bmp",
//!   "output_dir": "out",
//!   "sigma": 2.5
//! }
//! ```

use crate::{PipelineError, PipelineResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths and parameters for one pipeline run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bitmap to read
    pub input: PathBuf,
    /// Directory the three outputs are written to
    pub output_dir: PathBuf,
    /// File name of the clockwise rotation
    pub rotated_right: PathBuf,
    /// File name of the counter-clockwise rotation
    pub rotated_left: PathBuf,
    /// File name of the blurred clockwise rotation
    pub blurred: PathBuf,
    /// Gaussian sigma
    pub sigma: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("smi.bmp"),
            output_dir: PathBuf::from("."),
            rotated_right: PathBuf::from("image90r.bmp"),
            rotated_left: PathBuf::from("image90l.bmp"),
            blurred: PathBuf::from("image90rGaus.bmp"),
            sigma: 6.0,
        }
    }
}

impl Config {
    /// Parse a configuration from JSON text and validate it.
    pub fn from_json(text: &str) -> PipelineResult<Self> {
        let config: Config = serde_json::from_str(text)
            .map_err(|e| PipelineError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file and validate it.
    pub fn load(path: &Path) -> PipelineResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("failed to read config {}: {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> PipelineResult<()> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(PipelineError::Config(format!(
                "sigma must be finite and positive, got {}",
                self.sigma
            )));
        }
        Ok(())
    }

    /// Full path of the clockwise rotation output
    pub fn rotated_right_path(&self) -> PathBuf {
        self.output_dir.join(&self.rotated_right)
    }

    /// Full path of the counter-clockwise rotation output
    pub fn rotated_left_path(&self) -> PathBuf {
        self.output_dir.join(&self.rotated_left)
    }

    /// Full path of the blurred output
    pub fn blurred_path(&self) -> PathBuf {
        self.output_dir.join(&self.blurred)
    }
}
