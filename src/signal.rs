//! Time-domain input.
use crate::error::{DftError, Result};
use crate::DftNum;
use ndarray::{Array1, ArrayView1};
use rustfft::num_complex::Complex;
use std::convert::TryFrom;

/// Ordered, non-empty sequence of complex samples.
///
/// Real input is stored with a zero imaginary part. A `Signal` never
/// changes after construction; transforms only borrow it.
///
/// # Example
/// ```
/// use dualdft::Signal;
///
/// let x = Signal::<f64>::from_real(&[1., 2., 3., 4.]).unwrap();
/// assert_eq!(x.len(), 4);
/// assert!(Signal::<f64>::from_real(&[]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Signal<T> {
    samples: Array1<Complex<T>>,
}

impl<T: DftNum> Signal<T> {
    /// Creates a signal from complex samples.
    ///
    /// # Errors
    /// [`DftError::InvalidSize`] if `samples` is empty.
    pub fn new(samples: Array1<Complex<T>>) -> Result<Self> {
        if samples.is_empty() {
            return Err(DftError::InvalidSize { size: 0 });
        }
        Ok(Self { samples })
    }

    /// Creates a signal from real samples.
    ///
    /// # Errors
    /// [`DftError::InvalidSize`] if `samples` is empty.
    pub fn from_real(samples: &[T]) -> Result<Self> {
        Self::new(samples.iter().map(|x| Complex::new(*x, T::zero())).collect())
    }

    /// Creates a signal from a slice of complex samples.
    ///
    /// # Errors
    /// [`DftError::InvalidSize`] if `samples` is empty.
    pub fn from_complex(samples: &[Complex<T>]) -> Result<Self> {
        Self::new(Array1::from(samples.to_vec()))
    }

    /// Number of samples, always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Read-only view of the samples.
    pub fn samples(&self) -> ArrayView1<'_, Complex<T>> {
        self.samples.view()
    }

    /// Largest sample magnitude `max |x[n]|`.
    pub fn max_magnitude(&self) -> T {
        self.samples
            .iter()
            .fold(T::zero(), |acc, x| acc.max(x.norm()))
    }

    /// Consumes the signal, returning the samples.
    pub fn into_inner(self) -> Array1<Complex<T>> {
        self.samples
    }
}

impl<T: DftNum> TryFrom<Vec<T>> for Signal<T> {
    type Error = DftError;

    fn try_from(samples: Vec<T>) -> Result<Self> {
        Self::from_real(&samples)
    }
}

impl<T: DftNum> TryFrom<Vec<Complex<T>>> for Signal<T> {
    type Error = DftError;

    fn try_from(samples: Vec<Complex<T>>) -> Result<Self> {
        Self::new(Array1::from(samples))
    }
}
