use common::error::Error;

/// Trait for solvers that evaluate a logarithm in an arbitrary base.
pub trait LogSolver {
    /// Computes `log_base(x)` truncating the underlying series at `terms`.
    ///
    /// Returns `Ok(value)` on success, or `Err(e)` when the inputs fall
    /// outside the logarithm's domain.
    fn log_base(&self, x: f64, base: f64, terms: usize) -> Result<f64, Error>;
}
