//! Per-bin agreement check between two spectra.
use crate::error::{DftError, Result};
use crate::signal::Signal;
use crate::spectrum::Spectrum;
use crate::twiddle::from_f64;
use crate::DftNum;
use log::{debug, warn};
use std::fmt;

/// Bound on `max_k |A[k] - B[k]|` under which two spectra agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance<T> {
    /// Fixed bound, independent of size and magnitude.
    Absolute(T),
    /// `epsilon · n · max(1, m)`, where `m` estimates the largest sample
    /// magnitude as the largest bin magnitude of either spectrum over `n`.
    Scaled(T),
}

impl<T: DftNum> Tolerance<T> {
    /// Default `epsilon` of [`Tolerance::Scaled`]: 1024 machine epsilons.
    pub fn default_epsilon() -> T {
        T::epsilon() * from_f64(1024.)
    }

    /// Absolute bound `epsilon · n · max(1, max |x[n]|)` for spectra of
    /// `signal`, with the default epsilon.
    pub fn for_signal(signal: &Signal<T>) -> Self {
        let n: T = from_f64(signal.len() as f64);
        let magnitude = signal.max_magnitude().max(T::one());
        Tolerance::Absolute(Self::default_epsilon() * n * magnitude)
    }

    fn bound(&self, a: &Spectrum<T>, b: &Spectrum<T>) -> T {
        match *self {
            Tolerance::Absolute(bound) => bound,
            Tolerance::Scaled(epsilon) => {
                let n: T = from_f64(a.len() as f64);
                let peak = a
                    .bins()
                    .iter()
                    .chain(b.bins().iter())
                    .fold(T::zero(), |acc, x| acc.max(x.norm()));
                epsilon * n * (peak / n).max(T::one())
            }
        }
    }
}

impl<T: DftNum> Default for Tolerance<T> {
    fn default() -> Self {
        Tolerance::Scaled(Self::default_epsilon())
    }
}

/// Outcome of [`compare`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonReport<T> {
    max_difference: T,
    bin: usize,
    tolerance: T,
    agrees: bool,
}

impl<T: DftNum> ComparisonReport<T> {
    /// Largest `|A[k] - B[k]|` over all bins.
    pub fn max_difference(&self) -> T {
        self.max_difference
    }

    /// First bin at which [`max_difference`](Self::max_difference) occurs.
    pub fn bin(&self) -> usize {
        self.bin
    }

    /// The bound the difference was checked against.
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// `true` if `max_difference <= tolerance`.
    pub fn agrees(&self) -> bool {
        self.agrees
    }
}

impl<T: DftNum + fmt::LowerExp> fmt::Display for ComparisonReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (max difference {:e} at bin {}, tolerance {:e})",
            if self.agrees { "agree" } else { "disagree" },
            self.max_difference,
            self.bin,
            self.tolerance
        )
    }
}

/// Checks that two spectra of the same signal agree bin by bin.
///
/// `tolerance` defaults to [`Tolerance::Scaled`] with
/// [`Tolerance::default_epsilon`]. A `NaN` anywhere makes the spectra
/// disagree.
///
/// # Errors
/// [`DftError::LengthMismatch`] if the spectra differ in length. They are
/// never truncated or padded to fit.
///
/// # Example
/// ```
/// use dualdft::{compare, compute_direct, compute_fast, Signal};
///
/// let x = Signal::<f64>::from_real(&[1., 2., 3., 4., 4., 3., 2., 1.]).unwrap();
/// let report = compare(&compute_direct(&x).unwrap(), &compute_fast(&x).unwrap(), None).unwrap();
/// assert!(report.agrees());
/// ```
pub fn compare<T: DftNum>(
    a: &Spectrum<T>,
    b: &Spectrum<T>,
    tolerance: Option<Tolerance<T>>,
) -> Result<ComparisonReport<T>> {
    if a.len() != b.len() {
        return Err(DftError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let mut max_difference = T::zero();
    let mut bin = 0;
    for (k, (x, y)) in a.bins().iter().zip(b.bins().iter()).enumerate() {
        let dif = (x - y).norm();
        if dif.is_nan() {
            max_difference = dif;
            bin = k;
            break;
        }
        if dif > max_difference {
            max_difference = dif;
            bin = k;
        }
    }
    let tolerance = tolerance.unwrap_or_default().bound(a, b);
    let agrees = max_difference <= tolerance;
    if agrees {
        debug!(
            "Spectra of size {} agree, max difference {:?} at bin {}",
            a.len(),
            max_difference,
            bin
        );
    } else {
        warn!(
            "Spectra of size {} disagree, max difference {:?} at bin {} exceeds {:?}",
            a.len(),
            max_difference,
            bin,
            tolerance
        );
    }
    Ok(ComparisonReport {
        max_difference,
        bin,
        tolerance,
        agrees,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;
    use rustfft::num_complex::Complex;

    fn spectrum(values: &[(f64, f64)]) -> Spectrum<f64> {
        Spectrum::from_bins(values.iter().map(|(re, im)| Complex::new(*re, *im)).collect())
    }

    #[test]
    fn test_identical_spectra_agree() {
        let a = spectrum(&[(1., 2.), (3., -4.)]);
        let report = compare(&a, &a.clone(), None).unwrap();
        assert!(report.agrees());
        assert_eq!(report.max_difference(), 0.);
        assert_eq!(report.bin(), 0);
    }

    #[test]
    fn test_locates_largest_difference() {
        let a = spectrum(&[(1., 0.), (1., 0.), (1., 0.), (1., 0.)]);
        let b = spectrum(&[(1., 0.), (1.1, 0.), (1., 0.5), (1., 0.)]);
        let report = compare(&a, &b, Some(Tolerance::Absolute(1e-6))).unwrap();
        assert!(!report.agrees());
        assert_eq!(report.bin(), 2);
        assert!((report.max_difference() - 0.5).abs() < 1e-12);
        assert_eq!(report.tolerance(), 1e-6);
    }

    #[test]
    fn test_absolute_tolerance_is_inclusive() {
        let a = spectrum(&[(0., 0.)]);
        let b = spectrum(&[(0.25, 0.)]);
        assert!(compare(&a, &b, Some(Tolerance::Absolute(0.25))).unwrap().agrees());
        assert!(!compare(&a, &b, Some(Tolerance::Absolute(0.2))).unwrap().agrees());
    }

    #[test]
    fn test_length_mismatch() {
        let a = spectrum(&[(1., 0.), (2., 0.)]);
        let b = spectrum(&[(1., 0.), (2., 0.), (0., 0.)]);
        let err = compare(&a, &b, None).unwrap_err();
        assert_eq!(err, DftError::LengthMismatch { left: 2, right: 3 });
    }

    #[test]
    fn test_nan_disagrees() {
        let a = spectrum(&[(1., 0.), (f64::NAN, 0.), (1., 0.)]);
        let b = spectrum(&[(1., 0.), (1., 0.), (5., 0.)]);
        let report = compare(&a, &b, Some(Tolerance::Absolute(1e3))).unwrap();
        assert!(!report.agrees());
        assert_eq!(report.bin(), 1);
    }

    #[test]
    fn test_scaled_tolerance_grows_with_size_and_magnitude() {
        let eps = Tolerance::<f64>::default_epsilon();
        let small = spectrum(&[(0.5, 0.), (0., 0.)]);
        assert!((Tolerance::Scaled(eps).bound(&small, &small) - 2. * eps).abs() < 1e-30);

        // peak 400 over n = 4 -> magnitude estimate 100
        let large = spectrum(&[(400., 0.), (0., 0.), (0., 0.), (0., 0.)]);
        let bound = Tolerance::Scaled(eps).bound(&large, &large);
        assert!((bound - eps * 4. * 100.).abs() < 1e-24);
    }

    #[test]
    fn test_tolerance_for_signal() {
        let x = Signal::<f64>::new(array![Complex::new(3., 4.), Complex::new(0., 0.)]).unwrap();
        let eps = Tolerance::<f64>::default_epsilon();
        assert_eq!(Tolerance::for_signal(&x), Tolerance::Absolute(eps * 2. * 5.));
    }

    #[test]
    fn test_report_display() {
        let a = spectrum(&[(0., 0.), (1., 0.)]);
        let report = compare(&a, &a, Some(Tolerance::Absolute(0.5))).unwrap();
        assert_eq!(
            report.to_string(),
            "agree (max difference 0e0 at bin 0, tolerance 5e-1)"
        );
    }
}
