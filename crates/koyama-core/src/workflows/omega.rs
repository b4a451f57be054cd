use crate::core::omega::{DiscreteKoyama, SolvedParameters};
use crate::core::solver::NewtonSolver;
use crate::engine::config::OmegaConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct OmegaResult {
    pub parameters: SolvedParameters,
    pub k: Vec<f64>,
    pub omega: Vec<f64>,
}

#[instrument(skip_all, name = "omega_workflow")]
pub fn run(
    config: &OmegaConfig,
    k: &[f64],
    reporter: &ProgressReporter,
) -> Result<OmegaResult, EngineError> {
    // === Phase 1: Bending energy ===
    reporter.report(Progress::PhaseStart {
        name: "Solving Bending Energy",
    });
    let model = build_model(config)?;
    reporter.report(Progress::StatusUpdate {
        text: format!("epsilon = {:.6}", model.epsilon()),
    });
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Structure factor ===
    reporter.report(Progress::PhaseStart {
        name: "Evaluating Kernels",
    });
    let omega = tasks::structure_factor::run(&model, k, reporter)?;
    reporter.report(Progress::PhaseFinish);

    info!(points = k.len(), "Workflow complete.");
    Ok(OmegaResult {
        parameters: *model.parameters(),
        k: k.to_vec(),
        omega,
    })
}

/// Validates the chain and solves for the bending energy with the configured solver options.
pub fn build_model(config: &OmegaConfig) -> Result<DiscreteKoyama, EngineError> {
    let geometry = config.chain.geometry()?;
    let solver = NewtonSolver::new().with_options(config.solver);
    let model = DiscreteKoyama::from_geometry(geometry, &solver)?;
    Ok(model.with_pair_counting(config.pair_counting))
}
