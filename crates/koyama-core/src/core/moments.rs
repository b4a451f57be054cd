/// Equilibrium distribution of the bond-angle cosine under the Koyama bending potential.
///
/// With `x` the cosine of the angle between consecutive bond vectors, the density is
/// proportional to `exp(-epsilon * x)` on `[-1, cos0]`; `cos0` encodes the closest 1-3 approach
/// permitted by the site diameter.
///
/// Both moments are closed forms that divide by `epsilon` and by
/// `exp(epsilon) - exp(-epsilon * cos0)`. They lose precision as `epsilon -> 0` (a removable
/// singularity at which the distribution is uniform) and overflow once `|epsilon|` or
/// `|epsilon * cos0|` exceeds roughly 700. Callers that search over `epsilon` must tolerate
/// non-finite values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondAngleDistribution {
    cos0: f64,
}

impl BondAngleDistribution {
    pub fn new(cos0: f64) -> Self {
        Self { cos0 }
    }

    pub fn cos0(&self) -> f64 {
        self.cos0
    }

    /// First moment `<cos>` for bending energy `epsilon`.
    #[inline]
    pub fn cos_avg(&self, epsilon: f64) -> f64 {
        let e = epsilon;
        let cos0 = self.cos0;
        1.0 / e - (e.exp() + cos0 * (-e * cos0).exp()) / (e.exp() - (-e * cos0).exp())
    }

    /// Second moment `<cos^2>` for bending energy `epsilon`, written in terms of the first.
    #[inline]
    pub fn cos_sq_avg(&self, epsilon: f64) -> f64 {
        let e = epsilon;
        let cos0 = self.cos0;
        let cos1 = self.cos_avg(epsilon);
        (2.0 / e) * cos1
            + (e.exp() - cos0 * cos0 * (-e * cos0).exp()) / (e.exp() - (-e * cos0).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn simpson<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, intervals: usize) -> f64 {
        let h = (b - a) / intervals as f64;
        let mut sum = f(a) + f(b);
        for i in 1..intervals {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            sum += weight * f(a + i as f64 * h);
        }
        sum * h / 3.0
    }

    fn quadrature_moments(cos0: f64, epsilon: f64) -> (f64, f64) {
        let weight = |x: f64| (-epsilon * x).exp();
        let z = simpson(weight, -1.0, cos0, 2000);
        let m1 = simpson(|x| x * weight(x), -1.0, cos0, 2000) / z;
        let m2 = simpson(|x| x * x * weight(x), -1.0, cos0, 2000) / z;
        (m1, m2)
    }

    #[test]
    fn cos_avg_matches_known_value() {
        let dist = BondAngleDistribution::new(0.5);
        assert!(f64_approx_equal(dist.cos_avg(1.0), -0.43082537518330244));
    }

    #[test]
    fn cos_sq_avg_matches_known_value() {
        let dist = BondAngleDistribution::new(0.5);
        assert!(f64_approx_equal(dist.cos_sq_avg(1.0), 0.35376193722504645));
    }

    #[test]
    fn moments_agree_with_direct_quadrature_of_the_distribution() {
        for &(cos0, epsilon) in &[(0.5, 1.0), (0.5, -2.0), (0.5, 3.5), (0.875, 1.74), (-0.28, 0.6)]
        {
            let dist = BondAngleDistribution::new(cos0);
            let (m1, m2) = quadrature_moments(cos0, epsilon);
            assert!(f64_approx_equal(dist.cos_avg(epsilon), m1));
            assert!(f64_approx_equal(dist.cos_sq_avg(epsilon), m2));
        }
    }

    #[test]
    fn stiff_limit_pushes_first_moment_towards_minus_one() {
        let dist = BondAngleDistribution::new(0.5);
        let m1 = dist.cos_avg(200.0);
        assert!((m1 - (-1.0 + 1.0 / 200.0)).abs() < 1e-12);
    }

    #[test]
    fn first_moment_lies_inside_the_support() {
        let dist = BondAngleDistribution::new(0.5);
        for &e in &[-20.0, -1.0, 0.3, 1.0, 20.0] {
            let m1 = dist.cos_avg(e);
            assert!(m1 > -1.0 && m1 < 0.5, "cos_avg({}) = {} out of range", e, m1);
        }
    }

    #[test]
    fn second_moment_is_at_least_the_squared_first_moment() {
        let dist = BondAngleDistribution::new(0.5);
        for &e in &[-5.0, -0.5, 0.7, 4.0] {
            let m1 = dist.cos_avg(e);
            assert!(dist.cos_sq_avg(e) >= m1 * m1);
        }
    }

    #[test]
    fn moments_at_zero_energy_are_not_finite() {
        let dist = BondAngleDistribution::new(0.5);
        assert!(!dist.cos_avg(0.0).is_finite());
    }
}
