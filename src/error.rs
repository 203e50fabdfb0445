//! Error type shared by all transforms.
use thiserror::Error;

/// Errors raised by the transforms and the comparator.
///
/// All of them are input-validation failures; none is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DftError {
    /// A transform or matrix was requested for a size below one.
    #[error("Invalid transform size {size}, expected at least 1")]
    InvalidSize {
        /// The offending size.
        size: usize,
    },

    /// Two spectra of different length were handed to the comparator.
    #[error("Length mismatch, got {left} and {right}")]
    LengthMismatch {
        /// Length of the first spectrum.
        left: usize,
        /// Length of the second spectrum.
        right: usize,
    },

    /// The fast transform was asked for a non-power-of-two size while
    /// configured with [`Fallback::Reject`](crate::Fallback::Reject).
    #[error("Unsupported fft size {size}, expected a power of two")]
    UnsupportedSize {
        /// The offending size.
        size: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DftError>;
