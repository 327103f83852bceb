use std::f64;

/// Evaluates the truncated odd-power series `Σ_{n=1..terms} z^(2n-1) / (2n-1)`.
///
/// The running term is advanced by a single multiplication with `z²` per
/// iteration, so no power is ever recomputed from scratch. For `|z| < 1`
/// every added term is strictly smaller in magnitude than the previous one.
pub fn atanh_kernel(z: f64, terms: usize) -> f64 {
    let z_squared = z * z;

    let mut result = 0.0;
    let mut current_term = z;

    for n in 1..=terms {
        result += current_term / (2 * n - 1) as f64;
        current_term *= z_squared;
    }

    result
}
