pub(crate) mod model;
pub(crate) mod validate;

use crate::config::model::VideoConfig;
use crate::config::validate::validate_video_config;
use crate::foundation::error::{ReelError, ReelResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

impl VideoConfig {
    /// Parse a video config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r).map_err(|e| ReelError::serde(format!("parse video config: {e}")))
    }

    /// Parse a video config from a JSON string.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        serde_json::from_str(s).map_err(|e| ReelError::serde(format!("parse video config: {e}")))
    }

    /// Parse a video config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open video config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the invariants serde cannot express (numeric ranges, caption ordering, row names).
    pub fn validate(&self) -> ReelResult<()> {
        validate_video_config(self)
            .map_err(|e| ReelError::validation(format!("video config validation failed: {e}")))
    }
}
