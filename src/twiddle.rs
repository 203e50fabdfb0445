//! Roots of unity shared by the matrix builder and the fft.
use crate::DftNum;
use rustfft::num_complex::Complex;
use std::f64::consts::PI;

/// Converts an `f64` into the working float type.
///
/// Infallible for `f32` and `f64`, the only types implementing `DftNum`
/// in practice.
pub(crate) fn from_f64<T: DftNum>(x: f64) -> T {
    T::from_f64(x).unwrap()
}

/// `exp(-2πi·r/n)`.
///
/// `r` is reduced modulo `n` first, so the angle handed to `sin_cos`
/// stays in `(-2π, 0]` no matter how large the exponent grew.
pub(crate) fn twiddle<T: DftNum>(r: usize, n: usize) -> Complex<T> {
    let r = r % n;
    let (sin, cos) = (-2. * PI * r as f64 / n as f64).sin_cos();
    Complex::new(from_f64(cos), from_f64(sin))
}

/// Twiddle table `exp(-2πi·j/n)` for `j` in `0..n/2`.
pub(crate) fn table<T: DftNum>(n: usize) -> Vec<Complex<T>> {
    (0..n / 2).map(|j| twiddle(j, n)).collect()
}

/// Chirp `exp(-πi·j²/n)`, with `j²` reduced modulo `2n`.
pub(crate) fn chirp<T: DftNum>(j: usize, n: usize) -> Complex<T> {
    let m = 2 * n;
    let j = (j % m) as u128;
    let r = (j * j % m as u128) as usize;
    twiddle(r, m)
}
