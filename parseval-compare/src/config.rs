use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use parseval_cliques::OverlapGraphType;

///
/// Settings for a comparison run. Every field is optional in the TOML file:
///
/// ```toml
/// max_transcripts_per_locus = 64
/// overlap_graph = "matrix"
/// threads = 4
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CompareConfig {
    /// Loci with more transcripts than this (reference and prediction
    /// combined) are skipped instead of enumerated.
    pub max_transcripts_per_locus: Option<usize>,
    pub overlap_graph: OverlapGraphType,
    /// Worker threads for [`compare_loci`](crate::engine::compare_loci);
    /// rayon's global pool when unset.
    pub threads: Option<usize>,
}

#[derive(Error, Debug)]
pub enum CompareConfigError {
    #[error("Missing or invalid file extension in comparison config file. It must be `toml`")]
    InvalidFileType,
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type CompareConfigResult<T> = std::result::Result<T, CompareConfigError>;

impl CompareConfig {
    pub fn from_toml_str(raw: &str) -> CompareConfigResult<Self> {
        let config: CompareConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CompareConfigResult<()> {
        if self.threads == Some(0) {
            return Err(CompareConfigError::InvalidValue(
                "threads must be at least 1".to_string(),
            ));
        }
        if self.max_transcripts_per_locus == Some(0) {
            return Err(CompareConfigError::InvalidValue(
                "max_transcripts_per_locus must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl TryFrom<&Path> for CompareConfig {
    type Error = CompareConfigError;

    fn try_from(path: &Path) -> CompareConfigResult<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => {
                let raw = read_to_string(path)?;
                CompareConfig::from_toml_str(&raw)
            }
            _ => Err(CompareConfigError::InvalidFileType),
        }
    }
}
