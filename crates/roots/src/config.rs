use thiserror::Error;

/// Configuration shared by all root-finding methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1000, 1e-4).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// A method converges once `|f(x)| <= residual_tol` at its latest estimate.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is negative or non-finite.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute residual tolerance.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns true if the residual satisfies the tolerance.
    #[must_use]
    pub fn is_converged(&self, residual: f64) -> bool {
        residual.abs() <= self.residual_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 1000);
        assert_eq!(config.residual_tol(), 1e-4);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(10, -1e-6), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::ResidualTol));
    }

    #[test]
    fn zero_tolerance_requires_exact_root() {
        let config = Config::new(10, 0.0).unwrap();
        assert!(config.is_converged(0.0));
        assert!(config.is_converged(-0.0));
        assert!(!config.is_converged(f64::MIN_POSITIVE));
    }
}
