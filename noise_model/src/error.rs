//! Error types for noise estimation.

/// Error type for parameter validation and noise conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoiseError {
    /// Ring dimension is zero or not a power of two.
    #[error("ring dimension must be a power of two, got {0}")]
    InvalidRingDimension(u32),
    /// Plaintext modulus is below 2.
    #[error("plaintext modulus must be at least 2, got {0}")]
    InvalidPlaintextModulus(u64),
    /// Modulus is zero, negative or not a number.
    #[error("modulus must be a finite positive number, got {0}")]
    NonPositiveModulus(f64),
    /// Modulus literal could not be parsed.
    #[error("invalid modulus literal '{0}'")]
    InvalidModulus(String),
    /// Bound passed to the budget conversion is not positive.
    #[error("noise bound must be positive, got {0}")]
    NonPositiveBound(f64),
    /// Variance passed to the tail bound is not positive.
    #[error("noise variance must be positive, got {0}")]
    NonPositiveVariance(f64),
    /// Argument of an inverse error function lies outside its domain.
    #[error("{function} is undefined at {value}")]
    OutOfDomain {
        function: &'static str,
        value: f64,
    },
    /// A value left the finite `f64` range.
    #[error("{0} overflowed the floating point range")]
    Overflow(&'static str),
}
