use crate::core::omega::{DiscreteKoyama, OmegaError};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

type SeparationResult = Result<(usize, Vec<f64>), OmegaError>;

/// Evaluates ω(k) for `model` over the grid `k`.
///
/// Per-separation kernels are computed independently (on the rayon pool with the `parallel`
/// feature) and then summed in ascending separation, so the result is bitwise identical to
/// [`Omega::calculate`](crate::core::omega::Omega::calculate) regardless of scheduling. When
/// several separations fail, the smallest one is reported.
#[instrument(skip_all, name = "structure_factor_task", fields(points = k.len()))]
pub fn run(
    model: &DiscreteKoyama,
    k: &[f64],
    reporter: &ProgressReporter,
) -> Result<Vec<f64>, EngineError> {
    let weights = model.separation_weights();
    if weights.is_empty() {
        warn!(
            length = model.geometry().length(),
            "Chain has no pairs to sum; structure factor is the self term only."
        );
    }

    reporter.report(Progress::TaskStart {
        total_steps: weights.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = weights.iter();

    #[cfg(feature = "parallel")]
    let iterator = weights.par_iter();

    let contributions: Vec<SeparationResult> = iterator
        .map(|&(n, count)| -> SeparationResult {
            let values = model.pair_kernel(n, k)?;
            reporter.report(Progress::TaskIncrement);
            Ok((count, values))
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let mut accumulator = vec![0.0; k.len()];
    for contribution in contributions {
        let (count, values) = contribution?;
        let weight = count as f64;
        for (acc, value) in accumulator.iter_mut().zip(values) {
            *acc += weight * value;
        }
    }
    model.normalize(&mut accumulator);

    info!(
        separations = weights.len(),
        "Structure factor evaluation finished."
    );
    Ok(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::omega::{Omega, PairCounting};
    use crate::engine::progress::tests::recording_reporter;

    fn grid() -> Vec<f64> {
        (0..64).map(|i| i as f64 * 0.25).collect()
    }

    #[test]
    fn task_matches_model_calculate_exactly() {
        for counting in [PairCounting::Reference, PairCounting::AllPairs] {
            let model = DiscreteKoyama::new(1.0, 1.0, 40, 2.0)
                .unwrap()
                .with_pair_counting(counting);
            let k = grid();
            let expected = model.calculate(&k).unwrap();
            let actual = run(&model, &k, &ProgressReporter::new()).unwrap();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn task_reports_one_increment_per_separation() {
        let model = DiscreteKoyama::new(1.0, 1.0, 10, 2.0).unwrap();
        let (reporter, events) = recording_reporter();
        run(&model, &[0.0, 1.0], &reporter).unwrap();

        let events = events.lock().unwrap();
        assert_eq!(events.first(), Some(&Progress::TaskStart { total_steps: 8 }));
        assert_eq!(events.last(), Some(&Progress::TaskFinish));
        let increments = events
            .iter()
            .filter(|e| **e == Progress::TaskIncrement)
            .count();
        assert_eq!(increments, 8);
    }

    #[test]
    fn chain_without_pairs_yields_self_term() {
        let model = DiscreteKoyama::new(1.0, 1.0, 2, 2.0).unwrap();
        let omega = run(&model, &[0.0, 3.0], &ProgressReporter::new()).unwrap();
        assert_eq!(omega, vec![1.0, 1.0]);
    }

    #[test]
    fn empty_grid_yields_empty_result() {
        let model = DiscreteKoyama::new(1.0, 1.0, 10, 2.0).unwrap();
        let omega = run(&model, &[], &ProgressReporter::new()).unwrap();
        assert!(omega.is_empty());
    }
}
