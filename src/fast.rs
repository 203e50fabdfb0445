//! Fast transform: recursive radix-2 decimation-in-time, with a chirp-z
//! (Bluestein) path for sizes that are not a power of two.
use crate::error::{DftError, Result};
use crate::normalization::Normalization;
use crate::signal::Signal;
use crate::spectrum::Spectrum;
use crate::twiddle::{chirp, from_f64, table, twiddle};
use crate::DftNum;
use log::{debug, trace};
use ndarray::Array1;
use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;

/// Sub-transform size from which the two recursive halves run on the
/// rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Strategy of [`FftHandler`] for sizes that are not a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Chirp-z transform on top of the radix-2 core, `O(n log n)`.
    Bluestein,
    /// On-the-fly `O(n²)` summation, `O(1)` extra space.
    Direct,
    /// Append zeros up to the next power of two. This changes the
    /// signal, and the spectrum then has the padded length.
    ZeroPad,
    /// Fail with [`DftError::UnsupportedSize`].
    Reject,
}

impl Default for Fallback {
    fn default() -> Self {
        Fallback::Bluestein
    }
}

/// # Fast Fourier Transform
///
/// Computes the same `X[k] = Σ x[n]·exp(-2πi·k·n/N)` as the direct
/// transform in `O(N log N)`. Power-of-two sizes go through a recursive
/// radix-2 decimation in time; other sizes are handled according to the
/// configured [`Fallback`]. The signal is never padded unless
/// [`Fallback::ZeroPad`] is selected.
///
/// # Example
/// ```
/// use dualdft::{Fallback, FftHandler, Signal};
///
/// let x = Signal::<f64>::from_real(&[1., 2., 3., 4., 4., 3., 2., 1.]).unwrap();
/// let handler: FftHandler<f64> = FftHandler::new();
/// let xhat = handler.process(&x).unwrap();
/// assert!((xhat[0].re - 20.).abs() < 1e-12);
///
/// let strict: FftHandler<f64> = FftHandler::new().fallback(Fallback::Reject);
/// let y = Signal::<f64>::from_real(&[1., 2., 3.]).unwrap();
/// assert!(strict.process(&y).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FftHandler<T> {
    fallback: Fallback,
    norm: Normalization<T>,
    parallel_threshold: usize,
}

impl<T: DftNum> FftHandler<T> {
    /// Creates a new `FftHandler` with the [`Fallback::Bluestein`] path and
    /// `1/n` inverse normalization.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fallback: Fallback::default(),
            norm: Normalization::Default,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the strategy for non-power-of-two sizes.
    #[must_use]
    pub fn fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// This function can be used to modify the scaling of the
    /// inverse transform.
    #[must_use]
    pub fn normalization(mut self, norm: Normalization<T>) -> Self {
        self.norm = norm;
        self
    }

    /// Sets the sub-transform size from which the even and odd halves are
    /// computed in parallel. Has no effect without the `parallel` feature.
    #[must_use]
    pub fn parallel_threshold(mut self, n: usize) -> Self {
        self.parallel_threshold = n.max(2);
        self
    }

    /// Forward transform of `signal`.
    ///
    /// # Errors
    /// [`DftError::UnsupportedSize`] for a non-power-of-two length when the
    /// handler is configured with [`Fallback::Reject`].
    pub fn process(&self, signal: &Signal<T>) -> Result<Spectrum<T>> {
        let data = signal.samples().to_vec();
        Ok(Spectrum::from_bins(Array1::from(self.forward(&data)?)))
    }

    /// Inverse transform, computed as `conj(FFT(conj(X)))` followed by the
    /// handler's normalization.
    ///
    /// # Errors
    /// Same as [`process`](Self::process).
    pub fn process_inverse(&self, spectrum: &Spectrum<T>) -> Result<Signal<T>> {
        let data: Vec<_> = spectrum.bins().iter().map(|v| v.conj()).collect();
        let mut out = self.forward(&data)?;
        for v in out.iter_mut() {
            *v = v.conj();
        }
        self.norm.apply(&mut out);
        Signal::new(Array1::from(out))
    }

    fn forward(&self, data: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        let n = data.len();
        if n.is_power_of_two() {
            return Ok(radix2(data, self.parallel_threshold));
        }
        debug!("Fft size {} is not a power of two, using {:?}", n, self.fallback);
        match self.fallback {
            Fallback::Bluestein => Ok(bluestein(data, self.parallel_threshold)),
            Fallback::Direct => Ok(naive(data)),
            Fallback::ZeroPad => {
                let mut padded = data.to_vec();
                padded.resize(n.next_power_of_two(), Complex::zero());
                Ok(radix2(&padded, self.parallel_threshold))
            }
            Fallback::Reject => Err(DftError::UnsupportedSize { size: n }),
        }
    }
}

impl<T: DftNum> Default for FftHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Radix-2 transform of a power-of-two length slice.
fn radix2<T: DftNum>(data: &[Complex<T>], threshold: usize) -> Vec<Complex<T>> {
    let n = data.len();
    let twiddles = table(n);
    let mut out = vec![Complex::zero(); n];
    trace!("Radix-2 fft of size {n}");
    recurse(data, 1, &mut out, &twiddles, threshold);
    out
}

/// Transforms `x[0], x[step], x[2·step], ...` into `out`.
///
/// `twiddles` is the table of the top-level size `N`; a sub-transform of
/// size `n = N/step` reads `exp(-2πi·k/n)` as `twiddles[k·step]`.
fn recurse<T: DftNum>(
    x: &[Complex<T>],
    step: usize,
    out: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    threshold: usize,
) {
    let n = out.len();
    if n == 1 {
        out[0] = x[0];
        return;
    }
    let (even, odd) = out.split_at_mut(n / 2);
    split(x, step, even, odd, twiddles, threshold);
    // X[k] = E[k] + w^k·O[k], X[k + n/2] = E[k] - w^k·O[k]
    for (k, (e, o)) in even.iter_mut().zip(odd.iter_mut()).enumerate() {
        let t = *o * twiddles[k * step];
        let a = *e;
        *e = a + t;
        *o = a - t;
    }
}

#[cfg(not(feature = "parallel"))]
fn split<T: DftNum>(
    x: &[Complex<T>],
    step: usize,
    even: &mut [Complex<T>],
    odd: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    threshold: usize,
) {
    recurse(x, 2 * step, even, twiddles, threshold);
    recurse(&x[step..], 2 * step, odd, twiddles, threshold);
}

#[cfg(feature = "parallel")]
fn split<T: DftNum>(
    x: &[Complex<T>],
    step: usize,
    even: &mut [Complex<T>],
    odd: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    threshold: usize,
) {
    if even.len() + odd.len() >= threshold {
        rayon::join(
            || recurse(x, 2 * step, even, twiddles, threshold),
            || recurse(&x[step..], 2 * step, odd, twiddles, threshold),
        );
    } else {
        recurse(x, 2 * step, even, twiddles, threshold);
        recurse(&x[step..], 2 * step, odd, twiddles, threshold);
    }
}

/// Bluestein's chirp-z transform.
///
/// With `w[j] = exp(-πi·j²/n)` the DFT becomes the convolution
/// `X[k] = w[k]·Σ (x[j]·w[j])·conj(w[k-j])`, evaluated by radix-2
/// transforms of length `m >= 2n - 1` so that the circular convolution
/// does not wrap.
fn bluestein<T: DftNum>(data: &[Complex<T>], threshold: usize) -> Vec<Complex<T>> {
    let n = data.len();
    let m = (2 * n - 1).next_power_of_two();
    let w: Vec<Complex<T>> = (0..n).map(|j| chirp(j, n)).collect();

    let mut a = vec![Complex::zero(); m];
    for ((slot, x), w) in a.iter_mut().zip(data.iter()).zip(w.iter()) {
        *slot = x * w;
    }
    let mut b = vec![Complex::zero(); m];
    b[0] = w[0].conj();
    for j in 1..n {
        b[j] = w[j].conj();
        b[m - j] = w[j].conj();
    }

    let a = radix2(&a, threshold);
    let b = radix2(&b, threshold);
    let c: Vec<_> = a.iter().zip(b.iter()).map(|(a, b)| (a * b).conj()).collect();
    let c = radix2(&c, threshold);

    let scale: T = from_f64(1. / m as f64);
    w.iter()
        .zip(c.iter())
        .map(|(w, c)| w * c.conj().scale(scale))
        .collect()
}

/// Plain summation, twiddles generated per entry.
fn naive<T: DftNum>(data: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = data.len();
    (0..n)
        .map(|k| {
            data.iter()
                .enumerate()
                .fold(Complex::zero(), |acc, (j, x)| acc + x * twiddle::<T>(k * j % n, n))
        })
        .collect()
}
