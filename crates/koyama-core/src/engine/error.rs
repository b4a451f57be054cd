use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::GridError;
use crate::core::omega::OmegaError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Structure factor calculation failed: {source}")]
    Omega {
        #[from]
        source: OmegaError,
    },

    #[error("Wavevector grid error: {source}")]
    Grid {
        #[from]
        source: GridError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
