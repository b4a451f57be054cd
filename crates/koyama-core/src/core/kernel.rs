//! Pair contribution to ω(k) for a single monomer separation.
//!
//! The sub-chain of `n` bonds between two sites is mapped onto a generalized Gaussian whose
//! second and fourth displacement moments match those of the discrete Koyama chain
//! (Honnell, Curro & Schweizer, *Macromolecules* 1990, 23, 3496, eq. 18).

use crate::core::math::sinc;
use crate::core::omega::OmegaError;

/// Generalized-Gaussian parameters of the pair distance distribution for one separation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDistribution {
    /// Mean square separation `<r^2>`.
    pub r2: f64,
    /// Fourth moment `<r^4>`.
    pub r4: f64,
    /// Kurtosis parameter.
    pub c: f64,
    /// Effective shell radius `sqrt(C * <r^2>)`.
    pub b: f64,
    /// Squared Gaussian width `<r^2> (1 - C) / 6`; kept squared, never rooted.
    pub a_sq: f64,
}

impl PairDistribution {
    /// Fourier transform of the distribution at wavevector magnitude `k`.
    #[inline]
    pub fn at(&self, k: f64) -> f64 {
        sinc(self.b * k) * (-self.a_sq * k * k).exp()
    }
}

/// Kernel evaluator built from the bond length and the two bond-angle moments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KoyamaKernel {
    bond_length: f64,
    cos1: f64,
    cos2: f64,
}

impl KoyamaKernel {
    pub fn new(bond_length: f64, cos1: f64, cos2: f64) -> Self {
        Self {
            bond_length,
            cos1,
            cos2,
        }
    }

    pub fn cos1(&self) -> f64 {
        self.cos1
    }

    pub fn cos2(&self) -> f64 {
        self.cos2
    }

    /// Fourth-moment correction `D(n)` in units of `l^4`, including the trailing factor 2/3.
    ///
    /// The terms are kept exactly as published; regrouping them changes the cancellation
    /// behaviour for large `n`.
    pub fn fourth_moment_correction(&self, n: usize) -> f64 {
        let n = n as f64;
        let q = -self.cos1;
        let p = (3.0 * self.cos2 - 1.0) / 2.0;

        let mut d = n * n * ((1.0 + q) / (1.0 - q)).powf(2.0);
        d -= n
            * (1.0 + (2.0 * q / (1.0 - q).powf(3.0)) * (6.0 + 5.0 * q + 3.0 * q * q)
                - 4.0 * p / (1.0 - p) * ((1.0 + q) / (1.0 - q)).powf(2.0));
        d += 2.0 * q / (1.0 - q).powf(4.0) * (4.0 + 11.0 * q + 12.0 * q * q);
        d -= 4.0 * p / (1.0 - p)
            * (1.0
                + 8.0 * q / (1.0 - q).powf(3.0)
                + p / (1.0 - p) * ((1.0 + q) / (1.0 - q)).powf(2.0));
        d -= q.powf(n) * 8.0 * q / (1.0 - q).powf(3.0) * (n * (1.0 + 3.0 * q));
        d -= q.powf(n) * 8.0 * q / (1.0 - q).powf(3.0)
            * ((1.0 + 2.0 * q + 3.0 * q * q) / (1.0 - q));
        d -= q.powf(n) * 8.0 * q / (1.0 - q).powf(3.0)
            * (-2.0 * p / (q - p).powf(2.0)
                * (n * (1.0 - q) * (q - p) + 2.0 * q * q - q * p - p));
        d -= 6.0 * q.powf(2.0 * n + 2.0) / (1.0 - q).powf(4.0);
        d += p.powf(n)
            * (4.0 / (1.0 - p)
                * (1.0 + 8.0 * q / (1.0 - q).powf(3.0)
                    - ((1.0 + q) / (1.0 - q)).powf(2.0) * (1.0 - p / (1.0 - p))));
        d -= p.powf(n)
            * (16.0 * q * q / (1.0 - q).powf(3.0)
                * (1.0 / (q - p).powf(2.0))
                * (q + q * q - 2.0 * p));
        d * (2.0 / 3.0)
    }

    /// Mean square distance between two sites `n` bonds apart.
    pub fn mean_square_distance(&self, n: usize) -> f64 {
        let l = self.bond_length;
        let cos1 = self.cos1;
        let n = n as f64;
        n * l
            * l
            * ((1.0 - cos1) / (1.0 + cos1)
                + 2.0 * cos1 / n * (1.0 - (-cos1).powf(n)) / (1.0 + cos1).powf(2.0))
    }

    /// Maps separation `n` onto its generalized-Gaussian parameters.
    ///
    /// # Errors
    ///
    /// [`OmegaError::InvalidChainParameters`] when the kurtosis or radius argument under a
    /// square root is negative or non-finite.
    pub fn pair_distribution(&self, n: usize) -> Result<PairDistribution, OmegaError> {
        let l2 = self.bond_length * self.bond_length;
        let r2 = self.mean_square_distance(n);
        let r4 = r2 * r2 + l2 * l2 * self.fourth_moment_correction(n);

        let c_arg = 0.5 * (5.0 - 3.0 * r4 / (r2 * r2));
        if !(c_arg >= 0.0) || !c_arg.is_finite() {
            return Err(OmegaError::InvalidChainParameters { separation: n });
        }
        let c = c_arg.sqrt();

        let b_arg = c * r2;
        if !(b_arg >= 0.0) || !b_arg.is_finite() {
            return Err(OmegaError::InvalidChainParameters { separation: n });
        }
        let b = b_arg.sqrt();
        let a_sq = r2 * (1.0 - c) / 6.0;

        Ok(PairDistribution { r2, r4, c, b, a_sq })
    }

    /// Evaluates the pair contribution for separation `n` at every wavevector in `k`.
    pub fn evaluate(&self, n: usize, k: &[f64]) -> Result<Vec<f64>, OmegaError> {
        let dist = self.pair_distribution(n)?;
        Ok(k.iter().map(|&k| dist.at(k)).collect())
    }
}
