use crate::error::{CliError, Result};
use koyama::core::omega::PairCounting;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileChainConfig {
    pub sigma: Option<f64>,
    pub bond_length: Option<f64>,
    pub length: Option<usize>,
    pub persistence_length: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileGridConfig {
    pub k_min: Option<f64>,
    pub k_max: Option<f64>,
    pub num_points: Option<usize>,
    pub file: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSolverConfig {
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FilePairCounting {
    Reference,
    AllPairs,
}

impl From<FilePairCounting> for PairCounting {
    fn from(p: FilePairCounting) -> Self {
        match p {
            FilePairCounting::Reference => PairCounting::Reference,
            FilePairCounting::AllPairs => PairCounting::AllPairs,
        }
    }
}

impl std::str::FromStr for FilePairCounting {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "reference" => Ok(FilePairCounting::Reference),
            "all-pairs" => Ok(FilePairCounting::AllPairs),
            other => Err(CliError::Config(format!(
                "Invalid pair counting '{}'. Expected 'reference' or 'all-pairs'.",
                other
            ))),
        }
    }
}

/// Top-level keys must precede the `[chain]`, `[grid]` and `[solver]` tables in the file.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub pair_counting: Option<FilePairCounting>,
    pub chain: Option<FileChainConfig>,
    pub grid: Option<FileGridConfig>,
    pub solver: Option<FileSolverConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
