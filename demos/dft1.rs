//! Perform 1-dimensional Fourier Transform both ways.
//!
//! cargo run --example dft1
use dualdft::{Complex, DftHandler, FftHandler, Signal};
use ndarray::array;

fn main() {
    let x = Signal::new(array![1., 2., 3.].mapv(|x| Complex::new(x, x))).unwrap();
    let direct = DftHandler::<f64>::new();
    let fast = FftHandler::<f64>::new();
    let xhat = direct.process(&x).unwrap();
    let xhat_fast = fast.process(&x).unwrap();
    let y = fast.process_inverse(&xhat_fast).unwrap();
    println!("xhat (direct): {}", xhat.bins());
    println!("xhat (fft): {}", xhat_fast.bins());
    println!("x: {}", y.samples());
}
