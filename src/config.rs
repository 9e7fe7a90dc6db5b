//! Runtime configuration for a cipher session.

use serde::{Deserialize, Serialize};

use crate::calculus::numeric::{DEFAULT_PARTITIONS, DEFAULT_STEP};
use crate::error::{CipherError, CipherResult};

/// Numeric parameters shared by encoder and decoder.
///
/// Both sides of a session must use the same configuration; the defaults
/// reproduce the reference mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Central-difference step used when differentiating character functions.
    /// Default: 1e-7.
    pub derivative_step: f64,

    /// Simpson subinterval count. Odd values are rounded up.
    /// Default: 1000.
    pub partitions: usize,

    /// Lower bound of the integration domain.
    /// Default: -1.0.
    pub domain_start: f64,

    /// Upper bound of the integration domain.
    /// Default: 1.0.
    pub domain_end: f64,

    /// Decode ciphertext positions on the rayon thread pool.
    /// Default: true.
    pub parallel_decode: bool,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            derivative_step: DEFAULT_STEP,
            partitions: DEFAULT_PARTITIONS,
            domain_start: -1.0,
            domain_end: 1.0,
            parallel_decode: true,
        }
    }
}

impl CipherConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> CipherResult<()> {
        if !self.derivative_step.is_finite() || self.derivative_step <= 0.0 {
            return Err(CipherError::Config(format!(
                "derivative_step must be finite and > 0, got {}",
                self.derivative_step
            )));
        }
        if self.partitions < 1 {
            return Err(CipherError::Config(format!(
                "partitions must be >= 1, got {}",
                self.partitions
            )));
        }
        if !self.domain_start.is_finite() || !self.domain_end.is_finite() {
            return Err(CipherError::Config(format!(
                "integration domain must be finite, got [{}, {}]",
                self.domain_start, self.domain_end
            )));
        }
        if self.domain_start >= self.domain_end {
            return Err(CipherError::Config(format!(
                "domain_start must be < domain_end, got [{}, {}]",
                self.domain_start, self.domain_end
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CipherResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CipherError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with parallel decoding switched on or off.
    pub fn with_parallel_decode(mut self, parallel: bool) -> Self {
        self.parallel_decode = parallel;
        self
    }
}
