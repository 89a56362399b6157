use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use style_codec::Normalization;

#[derive(Error, Debug)]
pub enum JobError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

/// One image to push through the encode / execute / decode round trip
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StyleJob {
    pub name: String,
    pub input: String,
    pub width: u32,
    pub height: u32,
    /// Normalization window; the codec default (`[0,255]` -> `[0,1]`)
    /// applies when either half is omitted
    pub mean: Option<f32>,
    pub std: Option<f32>,
}

impl StyleJob {
    pub fn normalization(&self) -> Normalization {
        let base = Normalization::default();
        Normalization {
            mean: self.mean.unwrap_or(base.mean),
            std: self.std.unwrap_or(base.std),
        }
    }
}

/// Batch configuration: a set of jobs sharing one output directory
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct JobBatch {
    pub output_dir: String,
    pub jobs: Vec<StyleJob>,
}

impl JobBatch {
    /// Load batch configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, JobError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load batch configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, JobError> {
        let batch: JobBatch = toml::from_str(content)?;
        Ok(batch)
    }

    /// Load batch configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, JobError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load batch configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self, JobError> {
        let batch: JobBatch = serde_json::from_str(content)?;
        Ok(batch)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, JobError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(JobError::UnsupportedFileFormat),
        }
    }

    /// Save batch configuration to a TOML file
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), JobError> {
        let content = toml::to_string_pretty(&self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Save batch configuration to a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), JobError> {
        let content = serde_json::to_string_pretty(&self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
