use crate::core::chain::ChainGeometry;
use crate::core::omega::{OmegaError, PairCounting};
use crate::core::solver::SolverOptions;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Physical description of the chain, validated when turned into a [`ChainGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainSpec {
    pub sigma: f64,
    pub bond_length: f64,
    pub length: usize,
    pub persistence_length: f64,
}

impl ChainSpec {
    pub fn geometry(&self) -> Result<ChainGeometry, OmegaError> {
        ChainGeometry::new(
            self.sigma,
            self.bond_length,
            self.length,
            self.persistence_length,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OmegaConfig {
    pub chain: ChainSpec,
    pub solver: SolverOptions,
    pub pair_counting: PairCounting,
}

#[derive(Default)]
pub struct OmegaConfigBuilder {
    sigma: Option<f64>,
    bond_length: Option<f64>,
    length: Option<usize>,
    persistence_length: Option<f64>,
    solver: Option<SolverOptions>,
    pair_counting: Option<PairCounting>,
}

impl OmegaConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = Some(sigma);
        self
    }
    pub fn bond_length(mut self, bond_length: f64) -> Self {
        self.bond_length = Some(bond_length);
        self
    }
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
    pub fn persistence_length(mut self, persistence_length: f64) -> Self {
        self.persistence_length = Some(persistence_length);
        self
    }
    pub fn solver(mut self, options: SolverOptions) -> Self {
        self.solver = Some(options);
        self
    }
    pub fn pair_counting(mut self, pair_counting: PairCounting) -> Self {
        self.pair_counting = Some(pair_counting);
        self
    }

    /// Chain parameters are required; solver options and pair counting fall back to defaults.
    pub fn build(self) -> Result<OmegaConfig, ConfigError> {
        let chain = ChainSpec {
            sigma: self.sigma.ok_or(ConfigError::MissingParameter("sigma"))?,
            bond_length: self
                .bond_length
                .ok_or(ConfigError::MissingParameter("bond_length"))?,
            length: self.length.ok_or(ConfigError::MissingParameter("length"))?,
            persistence_length: self
                .persistence_length
                .ok_or(ConfigError::MissingParameter("persistence_length"))?,
        };
        Ok(OmegaConfig {
            chain,
            solver: self.solver.unwrap_or_default(),
            pair_counting: self.pair_counting.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> OmegaConfigBuilder {
        OmegaConfigBuilder::new()
            .sigma(1.0)
            .bond_length(1.0)
            .length(10)
            .persistence_length(2.0)
    }

    #[test]
    fn build_with_chain_parameters_uses_defaults_elsewhere() {
        let config = complete_builder().build().unwrap();
        assert_eq!(
            config.chain,
            ChainSpec {
                sigma: 1.0,
                bond_length: 1.0,
                length: 10,
                persistence_length: 2.0,
            }
        );
        assert_eq!(config.solver, SolverOptions::default());
        assert_eq!(config.pair_counting, PairCounting::Reference);
    }

    #[test]
    fn build_keeps_explicit_solver_and_pair_counting() {
        let options = SolverOptions {
            tolerance: 1e-12,
            max_iterations: 7,
            ..Default::default()
        };
        let config = complete_builder()
            .solver(options)
            .pair_counting(PairCounting::AllPairs)
            .build()
            .unwrap();
        assert_eq!(config.solver, options);
        assert_eq!(config.pair_counting, PairCounting::AllPairs);
    }

    #[test]
    fn build_reports_first_missing_parameter() {
        let err = OmegaConfigBuilder::new()
            .sigma(1.0)
            .length(10)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("bond_length"));

        let err = OmegaConfigBuilder::new()
            .sigma(1.0)
            .bond_length(1.0)
            .length(10)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("persistence_length"));
    }

    #[test]
    fn chain_spec_geometry_applies_validation() {
        let spec = ChainSpec {
            sigma: 1.0,
            bond_length: 1.0,
            length: 10,
            persistence_length: 1.0,
        };
        assert_eq!(
            spec.geometry().unwrap_err(),
            OmegaError::InvalidPersistenceLength { lp: 1.0 }
        );
    }
}
