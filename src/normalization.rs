//! Scaling of inverse transforms.
use crate::twiddle::from_f64;
use crate::DftNum;
use rustfft::num_complex::Complex;

/// Scaling applied after an inverse transform.
///
/// The forward transforms are never scaled.
#[derive(Clone, Copy)]
pub enum Normalization<T> {
    /// No scaling, the inverse is then `n` times the input.
    None,
    /// Scale by `1/n`, so forward followed by inverse is the identity.
    Default,
    /// Apply a custom function to the coefficients.
    Custom(fn(&mut [Complex<T>])),
}

impl<T: DftNum> Normalization<T> {
    pub(crate) fn apply(&self, data: &mut [Complex<T>]) {
        match self {
            Normalization::None => (),
            Normalization::Default => {
                let scale: T = from_f64(1. / data.len() as f64);
                for d in data.iter_mut() {
                    *d = d.scale(scale);
                }
            }
            Normalization::Custom(f) => f(data),
        }
    }
}

impl<T> Default for Normalization<T> {
    fn default() -> Self {
        Normalization::Default
    }
}

impl<T> std::fmt::Debug for Normalization<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Normalization::None => write!(f, "None"),
            Normalization::Default => write!(f, "Default"),
            Normalization::Custom(_) => write!(f, "Custom"),
        }
    }
}
