//! Direct transform by dense matrix-vector multiplication.
use crate::error::Result;
use crate::matrix::{MatrixCache, TransformMatrix};
use crate::normalization::Normalization;
use crate::signal::Signal;
use crate::spectrum::Spectrum;
use crate::DftNum;
use log::debug;
use ndarray::{Array1, ArrayView1, ArrayView2};
use rustfft::num_complex::Complex;

/// # Direct Discrete Fourier Transform
///
/// Computes `X = W·x` against the [`TransformMatrix`] of the signal's size.
/// The handler owns a [`MatrixCache`], so the `O(n²)` matrix for a given
/// size is built once and reused by every later call on the same handler.
/// Time is `O(n²)` per call; auxiliary space is the `O(n²)` cached matrix.
///
/// Dropping the handler drops its cache.
///
/// # Example
/// ```
/// use dualdft::{DftHandler, Signal};
///
/// let x = Signal::<f64>::from_real(&[1., 1., 1., 1.]).unwrap();
/// let handler: DftHandler<f64> = DftHandler::new();
/// let xhat = handler.process(&x).unwrap();
/// assert!((xhat[0].re - 4.).abs() < 1e-12);
/// let y = handler.process_inverse(&xhat).unwrap();
/// assert!((y.samples()[2].re - 1.).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct DftHandler<T> {
    cache: MatrixCache<T>,
    norm: Normalization<T>,
}

impl<T: DftNum> DftHandler<T> {
    /// Creates a new `DftHandler` with an empty matrix cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: MatrixCache::new(),
            norm: Normalization::Default,
        }
    }

    /// This function can be used to modify the scaling of the
    /// inverse transform.
    #[must_use]
    pub fn normalization(mut self, norm: Normalization<T>) -> Self {
        self.norm = norm;
        self
    }

    /// The matrices built so far.
    pub fn cache(&self) -> &MatrixCache<T> {
        &self.cache
    }

    /// Forward transform of `signal`.
    ///
    /// # Errors
    /// Only those of [`TransformMatrix::new`], which cannot trigger for a
    /// well-formed [`Signal`].
    pub fn process(&self, signal: &Signal<T>) -> Result<Spectrum<T>> {
        let w = self.cache.get_or_build(signal.len())?;
        debug!("Direct dft of size {}", signal.len());
        Ok(Spectrum::from_bins(matvec(w.as_array(), signal.samples())))
    }

    /// Inverse transform `x = norm(conj(W)·X)`.
    ///
    /// # Errors
    /// Only those of [`TransformMatrix::new`].
    pub fn process_inverse(&self, spectrum: &Spectrum<T>) -> Result<Signal<T>> {
        let w = self.cache.get_or_build(spectrum.len())?;
        Signal::new(inverse(&w, spectrum, &self.norm))
    }
}

impl<T: DftNum> Default for DftHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward transform against a freshly built matrix, no caching.
pub(crate) fn forward<T: DftNum>(signal: &Signal<T>) -> Result<Spectrum<T>> {
    let w = TransformMatrix::new(signal.len())?;
    Ok(Spectrum::from_bins(matvec(w.as_array(), signal.samples())))
}

/// `conj(W)·X = conj(W·conj(X))`, W being symmetric.
pub(crate) fn inverse<T: DftNum>(
    w: &TransformMatrix<T>,
    spectrum: &Spectrum<T>,
    norm: &Normalization<T>,
) -> Array1<Complex<T>> {
    let xhat_conj = spectrum.bins().mapv(|v| v.conj());
    let mut data: Vec<Complex<T>> = matvec(w.as_array(), xhat_conj.view())
        .iter()
        .map(|v| v.conj())
        .collect();
    norm.apply(&mut data);
    Array1::from(data)
}

#[cfg(not(feature = "parallel"))]
fn matvec<T: DftNum>(
    w: ArrayView2<'_, Complex<T>>,
    x: ArrayView1<'_, Complex<T>>,
) -> Array1<Complex<T>> {
    w.dot(&x)
}

/// Row-parallel `W·x`.
#[cfg(feature = "parallel")]
fn matvec<T: DftNum>(
    w: ArrayView2<'_, Complex<T>>,
    x: ArrayView1<'_, Complex<T>>,
) -> Array1<Complex<T>> {
    use ndarray::{Axis, Zip};
    let mut out = Array1::zeros(w.len_of(Axis(0)));
    Zip::from(&mut out)
        .and(w.rows())
        .par_for_each(|y, row| *y = row.dot(&x));
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    fn assert_close(got: &[Complex<f64>], expected: &[Complex<f64>], dif: f64) {
        assert_eq!(got.len(), expected.len());
        for (a, b) in expected.iter().zip(got.iter()) {
            if (a - b).norm() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    #[test]
    fn test_dft_constant_signal() {
        let x = Signal::<f64>::from_real(&[1., 1., 1., 1.]).unwrap();
        let xhat = DftHandler::new().process(&x).unwrap();
        let expected = [
            Complex::new(4., 0.),
            Complex::new(0., 0.),
            Complex::new(0., 0.),
            Complex::new(0., 0.),
        ];
        assert_close(&xhat.bins().to_vec(), &expected, 1e-12);
    }

    #[test]
    fn test_dft_matches_hand_computed_values() {
        // x = [1, 2, 3] -> X = [6, -1.5 + 0.866i, -1.5 - 0.866i]
        let x = Signal::<f64>::from_real(&[1., 2., 3.]).unwrap();
        let xhat = DftHandler::new().process(&x).unwrap();
        let h = 3f64.sqrt() / 2.;
        let expected = [
            Complex::new(6., 0.),
            Complex::new(-1.5, h),
            Complex::new(-1.5, -h),
        ];
        assert_close(&xhat.bins().to_vec(), &expected, 1e-12);
    }

    #[test]
    fn test_dft_single_point() {
        let x = Signal::<f64>::from_complex(&[Complex::new(2., -3.)]).unwrap();
        let xhat = DftHandler::new().process(&x).unwrap();
        assert_close(&xhat.bins().to_vec(), &[Complex::new(2., -3.)], 1e-15);
    }

    #[test]
    fn test_dft_reuses_cached_matrix() {
        let handler: DftHandler<f64> = DftHandler::new();
        let x = Signal::<f64>::from_real(&[1., 0., -1., 0.]).unwrap();
        let y = Signal::<f64>::from_real(&[0., 1., 0., -1.]).unwrap();
        let z = Signal::<f64>::from_real(&[1., 2.]).unwrap();
        handler.process(&x).unwrap();
        handler.process(&y).unwrap();
        assert_eq!(handler.cache().len(), 1);
        handler.process(&z).unwrap();
        assert_eq!(handler.cache().len(), 2);
    }

    #[test]
    /// Successive forward and inverse transform
    fn test_dft_inverse() {
        let data = array![
            Complex::new(1., -1.),
            Complex::new(2., -2.),
            Complex::new(3., -3.),
            Complex::new(4., -4.),
            Complex::new(5., -5.),
        ];
        let x = Signal::<f64>::new(data.clone()).unwrap();
        let handler = DftHandler::new();
        let xhat = handler.process(&x).unwrap();
        let y = handler.process_inverse(&xhat).unwrap();
        assert_close(&y.samples().to_vec(), &data.to_vec(), 1e-12);
    }

    #[test]
    fn test_dft_inverse_without_normalization() {
        let x = Signal::<f64>::from_real(&[1., 2., 3., 4.]).unwrap();
        let handler = DftHandler::new().normalization(Normalization::None);
        let xhat = handler.process(&x).unwrap();
        let y = handler.process_inverse(&xhat).unwrap();
        let expected: Vec<_> = x.samples().iter().map(|v| v.scale(4.)).collect();
        assert_close(&y.samples().to_vec(), &expected, 1e-12);
    }

    #[test]
    fn test_uncached_forward_matches_handler() {
        let x = Signal::<f64>::from_real(&[0.5, -1., 2., 0., 3., 1.]).unwrap();
        let a = forward(&x).unwrap();
        let b = DftHandler::new().process(&x).unwrap();
        assert_close(&a.bins().to_vec(), &b.bins().to_vec(), 1e-15);
    }
}
