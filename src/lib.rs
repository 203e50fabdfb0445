//! # dualdft: Discrete Fourier Transform by matrix product and by FFT
//!
//! This library computes the DFT of a finite real- or complex-valued signal
//! in two independent ways and checks that they agree:
//!
//! * [`DftHandler`] multiplies the signal by the complex Vandermonde
//!   [`TransformMatrix`] `W[k, n] = exp(-2πi·k·n/N)`, `O(N²)`.
//! * [`FftHandler`] runs a recursive radix-2 decimation-in-time FFT,
//!   `O(N log N)`, with a configurable [`Fallback`] for sizes that are not
//!   a power of two.
//!
//! [`compare`] reports the largest per-bin difference between two spectra
//! and whether it is within a [`Tolerance`]. [`extract_spectrum`] turns a
//! [`Spectrum`] into its amplitude and phase sequences.
//!
//! The Handlers hold what can be reused between calls: the direct handler
//! caches one matrix per size, the fft handler carries its configuration.
//! The free functions [`compute_direct`] and [`compute_fast`] use throwaway
//! handlers.
//!
//! ## Parallel
//! With the `parallel` feature (on by default) the matrix-vector product
//! is split over rows through ndarray, and large fft sub-transforms run
//! their even and odd halves with `rayon::join`.
//!
//! ## Example
//! ```
//! use dualdft::{compare, compute_direct, compute_fast, extract_spectrum, Signal};
//!
//! let x = Signal::<f64>::from_real(&[1., 2., 3., 4., 4., 3., 2., 1.]).unwrap();
//! let direct = compute_direct(&x).unwrap();
//! let fast = compute_fast(&x).unwrap();
//! assert!(compare(&direct, &fast, None).unwrap().agrees());
//!
//! let (amplitude, _phase) = extract_spectrum(&fast);
//! assert!((amplitude[0] - 20.).abs() < 1e-12);
//! ```
#![warn(missing_docs)]
extern crate ndarray;
extern crate rustfft;
mod compare;
mod direct;
mod error;
mod fast;
mod matrix;
mod normalization;
mod signal;
mod spectrum;
mod twiddle;

pub use compare::{compare, ComparisonReport, Tolerance};
pub use direct::DftHandler;
pub use error::{DftError, Result};
pub use fast::{Fallback, FftHandler, DEFAULT_PARALLEL_THRESHOLD};
pub use matrix::{MatrixCache, TransformMatrix};
pub use normalization::Normalization;
pub use rustfft::num_complex::Complex;
pub use rustfft::num_traits::Zero;
pub use rustfft::FftNum;
pub use signal::Signal;
pub use spectrum::{extract_spectrum, Amplitude, Phase, Spectrum};

use num_traits::{Float, FloatConst};

/// Float types the transforms operate on, in practice `f32` and `f64`.
pub trait DftNum: FftNum + Float + FloatConst {}

impl<T: FftNum + Float + FloatConst> DftNum for T {}

/// Direct `O(N²)` transform against a freshly built [`TransformMatrix`].
///
/// Use a [`DftHandler`] to keep the matrix across calls.
///
/// # Errors
/// Only those of [`TransformMatrix::new`].
pub fn compute_direct<T: DftNum>(signal: &Signal<T>) -> Result<Spectrum<T>> {
    direct::forward(signal)
}

/// Fast transform with a default [`FftHandler`] (Bluestein for sizes that
/// are not a power of two, so this never fails for a valid signal).
///
/// # Errors
/// See [`FftHandler::process`].
pub fn compute_fast<T: DftNum>(signal: &Signal<T>) -> Result<Spectrum<T>> {
    FftHandler::new().process(signal)
}

/// Inverse of [`compute_direct`]: `x = (1/N)·conj(W)·X`.
///
/// # Errors
/// Only those of [`TransformMatrix::new`].
pub fn inverse_direct<T: DftNum>(spectrum: &Spectrum<T>) -> Result<Signal<T>> {
    let w = TransformMatrix::new(spectrum.len())?;
    Signal::new(direct::inverse(&w, spectrum, &Normalization::Default))
}

/// Inverse of [`compute_fast`], scaled by `1/N`.
///
/// # Errors
/// See [`FftHandler::process_inverse`].
pub fn inverse_fast<T: DftNum>(spectrum: &Spectrum<T>) -> Result<Signal<T>> {
    FftHandler::new().process_inverse(spectrum)
}

/// Runs both transforms on `signal` and compares the results.
///
/// `tolerance` defaults to [`Tolerance::for_signal`], which scales with the
/// signal length and its largest sample magnitude.
///
/// # Errors
/// Those of [`compute_direct`] and [`compute_fast`].
pub fn cross_validate<T: DftNum>(
    signal: &Signal<T>,
    tolerance: Option<Tolerance<T>>,
) -> Result<ComparisonReport<T>> {
    let direct = compute_direct(signal)?;
    let fast = compute_fast(signal)?;
    compare(
        &direct,
        &fast,
        Some(tolerance.unwrap_or_else(|| Tolerance::for_signal(signal))),
    )
}
