const SINC_SERIES_THRESHOLD: f64 = 1e-4;

/// Unnormalized sinc, `sin(x)/x`, with the removable singularity at zero filled in.
///
/// Below [`SINC_SERIES_THRESHOLD`] the first terms of the Taylor series are used, which are
/// accurate to machine precision there and return exactly `1.0` at `x == 0.0`.
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x.abs() < SINC_SERIES_THRESHOLD {
        let x2 = x * x;
        return 1.0 - x2 / 6.0 + x2 * x2 / 120.0;
    }
    x.sin() / x
}
