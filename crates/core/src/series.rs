use super::traits::LogSolver;
use common::error::Error;
use common::numeric_kernel::atanh_kernel;
use std::f64;

/// Default series truncation depth when the caller has no opinion.
pub const DEFAULT_TERMS: usize = 1000;

/// Solver approximating logarithms through the arctanh series
/// `ln(x) = 2 * Σ z^(2n-1) / (2n-1)` with `z = (x-1)/(x+1)`.
///
/// The arctanh substitution is used instead of the direct Taylor series
/// around 1 because `|z| < 1` holds for every positive `x`, so the series
/// converges over the whole domain rather than only on `(0, 2]`.
pub struct AtanhLogSolver;

impl AtanhLogSolver {
    /// Approximates the natural logarithm of `x`, truncating after `terms` terms.
    ///
    /// Inputs in `(0, 1)` are reduced through the identity `ln(x) = -ln(1/x)`;
    /// the reciprocal is guaranteed `> 1`, so the recursion is depth one.
    /// `x == 1` short-circuits to exactly `0.0` with no series evaluation.
    ///
    /// # Arguments
    /// * `x` - The value whose logarithm to approximate. Must be positive.
    /// * `terms` - Number of series terms to sum before truncating.
    ///
    /// # Returns
    /// `Result<f64, Error>` containing the approximation. Accuracy improves
    /// monotonically with `terms` for fixed `x`.
    ///
    /// # Errors
    /// Returns `Error::NonPositiveInput` if `x <= 0`.
    pub fn natural_log(&self, x: f64, terms: usize) -> Result<f64, Error> {
        if x <= 0.0 {
            return Err(Error::NonPositiveInput(x));
        }

        if x == 1.0 {
            return Ok(0.0);
        }

        // Range reduction: ln(x) = -ln(1/x) for x < 1.
        if x < 1.0 {
            return Ok(-self.natural_log(1.0 / x, terms)?);
        }

        let z = (x - 1.0) / (x + 1.0);

        Ok(2.0 * atanh_kernel(z, terms))
    }
}

impl LogSolver for AtanhLogSolver {
    /// Computes `log_base(x)` as the ratio `ln(x) / ln(base)`.
    ///
    /// The domain checks here are strictly more restrictive than the ones
    /// inside `natural_log`, so the two inner calls cannot fail once the
    /// inputs pass them. In particular the `base == 1` rejection runs before
    /// any series evaluation, which keeps the `ln(1)/ln(1)` division
    /// unreachable.
    ///
    /// # Errors
    /// - `Error::NonPositiveInput` if `x <= 0`.
    /// - `Error::NonPositiveBase` if `base <= 0`.
    /// - `Error::UnitBase` if `base == 1`.
    fn log_base(&self, x: f64, base: f64, terms: usize) -> Result<f64, Error> {
        if x <= 0.0 {
            return Err(Error::NonPositiveInput(x));
        }
        if base <= 0.0 {
            return Err(Error::NonPositiveBase(base));
        }
        if base == 1.0 {
            return Err(Error::UnitBase);
        }

        let ln_x = self.natural_log(x, terms)?;
        let ln_base = self.natural_log(base, terms)?;

        Ok(ln_x / ln_base)
    }
}
