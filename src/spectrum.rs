//! Frequency-domain output and its amplitude/phase representation.
use crate::DftNum;
use ndarray::{Array1, ArrayView1};
use rustfft::num_complex::Complex;
use std::ops::Index;

/// Magnitudes `|X[k]|`, one per bin.
pub type Amplitude<T> = Array1<T>;

/// Angles `∠X[k]` in `(-π, π]`, one per bin.
pub type Phase<T> = Array1<T>;

/// Complex coefficients `X[k]`, indexed by frequency bin `k`.
///
/// Created fresh by every forward transform and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum<T> {
    bins: Array1<Complex<T>>,
}

impl<T: DftNum> Spectrum<T> {
    pub(crate) fn from_bins(bins: Array1<Complex<T>>) -> Self {
        Self { bins }
    }

    /// Number of bins.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Read-only view of the coefficients.
    pub fn bins(&self) -> ArrayView1<'_, Complex<T>> {
        self.bins.view()
    }

    /// `|X[k]|` for every bin.
    pub fn amplitude(&self) -> Amplitude<T> {
        self.bins.mapv(|x| x.norm())
    }

    /// `∠X[k]` for every bin, see [`extract_spectrum`].
    pub fn phase(&self) -> Phase<T> {
        self.bins.mapv(angle)
    }

    /// Consumes the spectrum, returning the coefficients.
    pub fn into_inner(self) -> Array1<Complex<T>> {
        self.bins
    }
}

impl<T> Index<usize> for Spectrum<T> {
    type Output = Complex<T>;

    fn index(&self, k: usize) -> &Complex<T> {
        &self.bins[k]
    }
}

/// Four-quadrant angle folded into `(-π, π]`.
fn angle<T: DftNum>(x: Complex<T>) -> T {
    let phi = x.im.atan2(x.re);
    if phi == -T::PI() {
        T::PI()
    } else {
        phi
    }
}

/// Splits a spectrum into its amplitude and phase sequences.
///
/// The phase is `atan2(im, re)`, so it lies in `(-π, π]`. For bins whose
/// amplitude is within rounding noise of zero the phase is dominated by
/// that noise and carries no meaning; it is still returned, in range.
///
/// # Example
/// ```
/// use dualdft::{compute_direct, extract_spectrum, Signal};
///
/// let x = Signal::<f64>::from_real(&[1., 1., 1., 1.]).unwrap();
/// let (amplitude, _phase) = extract_spectrum(&compute_direct(&x).unwrap());
/// assert!((amplitude[0] - 4.).abs() < 1e-12);
/// assert!(amplitude[1] < 1e-12);
/// ```
pub fn extract_spectrum<T: DftNum>(spectrum: &Spectrum<T>) -> (Amplitude<T>, Phase<T>) {
    (spectrum.amplitude(), spectrum.phase())
}
