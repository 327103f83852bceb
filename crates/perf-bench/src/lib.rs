// ----------------------------
// Benchmark: term evaluation strategies
// ----------------------------

/// Incremental strategy - the odd-power term is carried between iterations
/// and advanced by one multiplication with z².
pub fn ln_incremental(x: f64, terms: usize) -> f64 {
    let z = (x - 1.0) / (x + 1.0);
    let z_squared = z * z;

    let mut result = 0.0;
    let mut current_term = z;
    for n in 1..=terms {
        result += current_term / (2 * n - 1) as f64;
        current_term *= z_squared;
    }

    2.0 * result
}

/// Recompute strategy - every term raises z to its odd power from scratch.
pub fn ln_powi(x: f64, terms: usize) -> f64 {
    let z = (x - 1.0) / (x + 1.0);

    let mut result = 0.0;
    for n in 1..=terms {
        let exponent = (2 * n - 1) as i32;
        result += z.powi(exponent) / (2 * n - 1) as f64;
    }

    2.0 * result
}

pub const NUM_EVALS: usize = 10_000;
pub const TERMS: usize = 500;

/// Generates the shared batch of benchmark inputs.
///
/// The values are slightly varied by index to ensure the compiler cannot
/// optimize away the per-evaluation work during benchmarking
pub fn generate_benchmark_inputs() -> Vec<f64> {
    (0..NUM_EVALS)
        // Input is > 1.0 and varied slightly by index for realism/compiler avoidance
        .map(|i| 1.5 + (i as f64) * 1e-9)
        .collect()
}
