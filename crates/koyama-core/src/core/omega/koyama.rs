use super::pairs::PairCounting;
use super::{Omega, OmegaError};
use crate::core::chain::ChainGeometry;
use crate::core::kernel::KoyamaKernel;
use crate::core::moments::BondAngleDistribution;
use crate::core::solver::{NewtonSolver, RootFinder};
use std::fmt;
use tracing::{debug, info, instrument, trace};

/// Starting point of the bending-energy search.
pub const INITIAL_ENERGY_GUESS: f64 = 1.0;

/// Quantities fixed once the bending energy has been solved for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvedParameters {
    /// Cosine of the minimum bond angle.
    pub cos0: f64,
    /// First moment of the bond-angle cosine, `l/lp - 1`.
    pub cos1: f64,
    /// Bending-energy parameter reproducing `cos1`.
    pub epsilon: f64,
    /// Second moment of the bond-angle cosine at `epsilon`.
    pub cos2: f64,
    /// Root-finder iterations spent on `epsilon`.
    pub solver_iterations: usize,
}

/// Semi-flexible Koyama chain.
///
/// Construction validates the geometry, solves `cos_avg(epsilon) = l/lp - 1` and fixes the
/// bond-angle moments; afterwards the model is immutable and may be shared across threads.
/// [`Omega::calculate`] returns a fresh structure factor on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteKoyama {
    geometry: ChainGeometry,
    distribution: BondAngleDistribution,
    parameters: SolvedParameters,
    kernel: KoyamaKernel,
    pair_counting: PairCounting,
}

impl DiscreteKoyama {
    /// Builds the model with the default [`NewtonSolver`].
    pub fn new(
        sigma: f64,
        bond_length: f64,
        length: usize,
        persistence_length: f64,
    ) -> Result<Self, OmegaError> {
        let geometry = ChainGeometry::new(sigma, bond_length, length, persistence_length)?;
        Self::from_geometry(geometry, &NewtonSolver::new())
    }

    /// Builds the model from validated geometry using the given root finder.
    #[instrument(skip_all, name = "koyama_setup", fields(length = geometry.length()))]
    pub fn from_geometry<R: RootFinder>(
        geometry: ChainGeometry,
        solver: &R,
    ) -> Result<Self, OmegaError> {
        let distribution = BondAngleDistribution::new(geometry.cos0());
        let cos1 = geometry.cos1();
        debug!(
            cos0 = distribution.cos0(),
            cos1, "Solving for the bending energy."
        );

        let result = solver.solve(|e| distribution.cos_avg(e) - cos1, INITIAL_ENERGY_GUESS);
        if !result.converged {
            return Err(OmegaError::SolverNonConvergence {
                iterations: result.iterations,
                residual: result.residual,
            });
        }

        let epsilon = result.value;
        let cos2 = distribution.cos_sq_avg(epsilon);
        let parameters = SolvedParameters {
            cos0: distribution.cos0(),
            cos1,
            epsilon,
            cos2,
            solver_iterations: result.iterations,
        };
        info!(
            epsilon,
            cos2,
            iterations = result.iterations,
            "Bending energy solved."
        );

        Ok(Self {
            geometry,
            distribution,
            parameters,
            kernel: KoyamaKernel::new(geometry.bond_length(), cos1, cos2),
            pair_counting: PairCounting::default(),
        })
    }

    pub fn with_pair_counting(mut self, pair_counting: PairCounting) -> Self {
        self.pair_counting = pair_counting;
        self
    }

    pub fn geometry(&self) -> &ChainGeometry {
        &self.geometry
    }

    pub fn parameters(&self) -> &SolvedParameters {
        &self.parameters
    }

    pub fn kernel(&self) -> &KoyamaKernel {
        &self.kernel
    }

    pub fn pair_counting(&self) -> PairCounting {
        self.pair_counting
    }

    pub fn epsilon(&self) -> f64 {
        self.parameters.epsilon
    }

    /// First bond-angle moment at an arbitrary bending energy.
    pub fn cos_avg(&self, epsilon: f64) -> f64 {
        self.distribution.cos_avg(epsilon)
    }

    /// Second bond-angle moment at an arbitrary bending energy.
    pub fn cos_sq_avg(&self, epsilon: f64) -> f64 {
        self.distribution.cos_sq_avg(epsilon)
    }

    /// Pair contribution for separation `n` over the grid `k`.
    pub fn pair_kernel(&self, n: usize, k: &[f64]) -> Result<Vec<f64>, OmegaError> {
        self.kernel.evaluate(n, k)
    }

    /// `(n, pair count)` for every separation entering the double sum.
    pub fn separation_weights(&self) -> Vec<(usize, usize)> {
        self.pair_counting.separation_weights(self.geometry.length())
    }

    /// Turns the weighted pair sum into ω(k): scale by `2/length`, add the self term.
    pub fn normalize(&self, accumulator: &mut [f64]) {
        let scale = 2.0 / self.geometry.length() as f64;
        for value in accumulator.iter_mut() {
            *value *= scale;
            *value += 1.0;
        }
    }
}

impl Omega for DiscreteKoyama {
    #[instrument(skip_all, name = "koyama_calculate", fields(points = k.len()))]
    fn calculate(&self, k: &[f64]) -> Result<Vec<f64>, OmegaError> {
        let mut accumulator = vec![0.0; k.len()];

        for (n, count) in self.separation_weights() {
            let dist = self.kernel.pair_distribution(n)?;
            trace!(n, count, c = dist.c, b = dist.b, a_sq = dist.a_sq, "Separation.");
            let weight = count as f64;
            for (acc, &wavevector) in accumulator.iter_mut().zip(k) {
                *acc += weight * dist.at(wavevector);
            }
        }

        self.normalize(&mut accumulator);
        Ok(accumulator)
    }

    fn tag(&self) -> &'static str {
        "Koyama"
    }
}

impl fmt::Display for DiscreteKoyama {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Omega: {}>", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::solver::SolverOptions;

    const TOLERANCE: f64 = 1e-9;
    // Loose enough to absorb root-finder termination differences in epsilon.
    const REFERENCE_TOLERANCE: f64 = 1e-7;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn scenario_a() -> DiscreteKoyama {
        DiscreteKoyama::new(1.0, 1.0, 10, 2.0).unwrap()
    }

    #[test]
    fn construction_solves_for_positive_bending_energy() {
        let model = scenario_a();
        let params = model.parameters();
        assert_eq!(params.cos0, 0.5);
        assert_eq!(params.cos1, -0.5);
        assert!(params.epsilon > 0.0);
        assert!((params.epsilon - 1.4327505332713746).abs() < REFERENCE_TOLERANCE);
        assert!((params.cos2 - 0.401020894154994).abs() < REFERENCE_TOLERANCE);
    }

    #[test]
    fn solved_energy_reproduces_the_target_first_moment() {
        for &(sigma, l, lp) in &[(1.0, 1.0, 2.0), (0.5, 1.3, 3.0), (1.2, 1.0, 1.4), (1.0, 2.0, 1.5)]
        {
            let model = DiscreteKoyama::new(sigma, l, 20, lp).unwrap();
            let target = l / lp - 1.0;
            assert!((model.cos_avg(model.epsilon()) - target).abs() < 1e-6);
        }
    }

    #[test]
    fn persistence_length_below_floor_fails_construction() {
        let err = DiscreteKoyama::new(1.0, 1.0, 10, 1.0).unwrap_err();
        assert_eq!(err, OmegaError::InvalidPersistenceLength { lp: 1.0 });
    }

    #[test]
    fn unreachable_first_moment_fails_with_solver_non_convergence() {
        // cos0 = -0.28 but cos1 = -0.2537: no bending energy reaches a first moment above cos0.
        let err = DiscreteKoyama::new(1.6, 1.0, 10, 1.34).unwrap_err();
        assert!(matches!(err, OmegaError::SolverNonConvergence { .. }));
    }

    #[test]
    fn custom_root_finder_options_are_used() {
        let geometry = ChainGeometry::new(1.0, 1.0, 10, 2.0).unwrap();
        let solver = NewtonSolver::new().with_options(SolverOptions {
            max_iterations: 0,
            ..Default::default()
        });
        let err = DiscreteKoyama::from_geometry(geometry, &solver).unwrap_err();
        assert_eq!(
            err,
            OmegaError::SolverNonConvergence {
                iterations: 0,
                residual: (BondAngleDistribution::new(0.5).cos_avg(1.0) + 0.5).abs(),
            }
        );
    }

    #[test]
    fn zero_wavevector_counts_pairs_exactly() {
        let model = DiscreteKoyama::new(1.0, 1.0, 5, 2.0).unwrap();
        let omega = model.calculate(&[0.0]).unwrap();
        assert_eq!(omega.len(), 1);
        assert_eq!(omega[0], 6.0 * (2.0 / 5.0) + 1.0);
    }

    #[test]
    fn zero_wavevector_matches_pair_count_formula_for_many_lengths() {
        for length in 3..30 {
            let model = DiscreteKoyama::new(1.0, 1.0, length, 2.0).unwrap();
            let pairs = ((length - 1) * (length - 2) / 2) as f64;
            let omega = model.calculate(&[0.0]).unwrap();
            assert_eq!(omega[0], pairs * (2.0 / length as f64) + 1.0);
        }
    }

    #[test]
    fn all_pairs_counting_normalizes_to_chain_length() {
        let model = DiscreteKoyama::new(1.0, 1.0, 12, 2.0)
            .unwrap()
            .with_pair_counting(PairCounting::AllPairs);
        let omega = model.calculate(&[0.0]).unwrap();
        assert!(f64_approx_equal(omega[0], 12.0));
    }

    #[test]
    fn calculate_matches_reference_values() {
        let k = [0.0, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expected = [
            8.2,
            6.470781506411943,
            3.639540895903832,
            1.383186636286601,
            0.753619476969781,
            0.9072102378825814,
        ];
        let omega = scenario_a().calculate(&k).unwrap();
        for (value, want) in omega.iter().zip(expected) {
            assert!(
                (*value - want).abs() < REFERENCE_TOLERANCE,
                "{} vs {}",
                value,
                want
            );
        }
    }

    #[test]
    fn weighted_sum_matches_explicit_double_loop() {
        let model = DiscreteKoyama::new(0.5, 1.3, 25, 3.0).unwrap();
        let k = [0.0, 0.25, 1.0, 4.0];
        let mut naive = vec![0.0; k.len()];
        for i in 1..model.geometry().length() - 1 {
            for j in (i + 1)..model.geometry().length() {
                let term = model.pair_kernel(j - i, &k).unwrap();
                for (acc, t) in naive.iter_mut().zip(term) {
                    *acc += t;
                }
            }
        }
        model.normalize(&mut naive);

        let omega = model.calculate(&k).unwrap();
        for (a, b) in omega.iter().zip(&naive) {
            assert!((a - b).abs() < 1e-10);
        }
    }

    #[test]
    fn pairs_with_equal_separation_contribute_identically() {
        let model = scenario_a();
        let k = [0.3, 1.1, 2.7];
        let first = model.pair_kernel(3, &k).unwrap();
        let second = model.pair_kernel(7 - 4, &k).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn calculate_returns_fresh_results_of_grid_shape() {
        let model = scenario_a();
        assert!(model.calculate(&[]).unwrap().is_empty());
        let first = model.calculate(&[0.0, 1.0]).unwrap();
        let second = model.calculate(&[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 3);
        assert_eq!(first[..], second[..2]);
    }

    #[test]
    fn invalid_moments_abort_calculate_without_partial_result() {
        let geometry = ChainGeometry::new(1.0, 1.0, 20, 2.0).unwrap();
        let model = DiscreteKoyama {
            geometry,
            distribution: BondAngleDistribution::new(geometry.cos0()),
            parameters: SolvedParameters {
                cos0: geometry.cos0(),
                cos1: -0.5,
                epsilon: 1.0,
                cos2: 0.8,
                solver_iterations: 0,
            },
            kernel: KoyamaKernel::new(1.0, -0.5, 0.8),
            pair_counting: PairCounting::Reference,
        };
        let err = model.calculate(&[0.0, 1.0]).unwrap_err();
        assert_eq!(err, OmegaError::InvalidChainParameters { separation: 9 });
    }

    #[test]
    fn display_and_tag_identify_the_model() {
        let model = scenario_a();
        assert_eq!(model.tag(), "Koyama");
        assert_eq!(model.to_string(), "<Omega: Koyama>");
    }

    #[test]
    fn model_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiscreteKoyama>();
    }
}
