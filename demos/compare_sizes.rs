//! Cross-validate both transforms over a range of sizes, powers of two
//! and otherwise.
//!
//! cargo run --example compare_sizes
use dualdft::{compare, DftHandler, Fallback, FftHandler, Signal, Tolerance};

fn main() {
    let direct = DftHandler::<f64>::new();
    let bluestein = FftHandler::<f64>::new();
    let summation = FftHandler::<f64>::new().fallback(Fallback::Direct);

    for n in [1, 2, 5, 8, 12, 64, 100, 128, 333, 512] {
        let samples: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).sin() + 0.1 * i as f64).collect();
        let x = Signal::from_real(&samples).unwrap();
        let xhat = direct.process(&x).unwrap();
        let tolerance = Some(Tolerance::for_signal(&x));
        let a = compare(&xhat, &bluestein.process(&x).unwrap(), tolerance).unwrap();
        let b = compare(&xhat, &summation.process(&x).unwrap(), tolerance).unwrap();
        println!("n = {:>4}: fft {}; summation {}", n, a, b);
    }
    println!("cached matrices: {}", direct.cache().len());
}
