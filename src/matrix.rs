//! Dense DFT basis matrix and a size-keyed cache of them.
use crate::error::{DftError, Result};
use crate::twiddle::twiddle;
use crate::DftNum;
use log::trace;
use ndarray::{Array2, ArrayView2};
use rustfft::num_complex::Complex;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// The `n × n` complex Vandermonde matrix `W[k, j] = exp(-2πi·k·j/n)`.
///
/// Every entry is evaluated directly from the reduced exponent
/// `k·j mod n`, never by repeated multiplication of a root of unity, so
/// rounding does not accumulate along rows. The matrix is symmetric and
/// all entries have unit magnitude.
///
/// # Example
/// ```
/// use dualdft::TransformMatrix;
///
/// let w = TransformMatrix::<f64>::new(4).unwrap();
/// assert_eq!(w.size(), 4);
/// // W[1, 1] = exp(-iπ/2) = -i
/// assert!((w.entry(1, 1).im + 1.).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransformMatrix<T> {
    w: Array2<Complex<T>>,
}

impl<T: DftNum> TransformMatrix<T> {
    /// Builds the matrix for size `n`.
    ///
    /// # Errors
    /// [`DftError::InvalidSize`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        if n < 1 {
            return Err(DftError::InvalidSize { size: n });
        }
        trace!("Building {n}x{n} transform matrix");
        let w = Array2::from_shape_fn((n, n), |(k, j)| twiddle(k * j % n, n));
        Ok(Self { w })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.w.nrows()
    }

    /// Entry `W[k, j]`.
    ///
    /// # Panics
    /// If `k` or `j` is not below [`size`](Self::size).
    pub fn entry(&self, k: usize, j: usize) -> Complex<T> {
        self.w[[k, j]]
    }

    /// Read-only view of the underlying array.
    pub fn as_array(&self) -> ArrayView2<'_, Complex<T>> {
        self.w.view()
    }
}

/// Lazily populated store of [`TransformMatrix`] instances keyed by size.
///
/// Matrices are shared read-only through `Arc`. Lookups take the read
/// lock; a miss takes the write lock and checks again before building, so
/// two threads racing on the same size build it only once.
#[derive(Debug)]
pub struct MatrixCache<T> {
    matrices: RwLock<HashMap<usize, Arc<TransformMatrix<T>>>>,
}

impl<T: DftNum> MatrixCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            matrices: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the matrix for size `n`, building it on first request.
    ///
    /// # Errors
    /// [`DftError::InvalidSize`] if `n` is zero.
    pub fn get_or_build(&self, n: usize) -> Result<Arc<TransformMatrix<T>>> {
        if let Some(w) = self
            .matrices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&n)
        {
            return Ok(Arc::clone(w));
        }
        let mut matrices = self
            .matrices
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(w) = matrices.get(&n) {
            return Ok(Arc::clone(w));
        }
        let w = Arc::new(TransformMatrix::new(n)?);
        matrices.insert(n, Arc::clone(&w));
        Ok(w)
    }

    /// Number of cached sizes.
    pub fn len(&self) -> usize {
        self.matrices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all cached matrices.
    pub fn clear(&self) {
        self.matrices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<T: DftNum> Default for MatrixCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
