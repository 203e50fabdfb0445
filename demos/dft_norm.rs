//! Perform 1-dimensional inverse Fourier Transform with custom
//! normalization.
//!
//! cargo run --example dft_norm
use dualdft::{Complex, DftHandler, FftHandler, Normalization, Signal};

fn main() {
    let x = Signal::from_real(&[1., 2., 3.]).unwrap();

    // define custom normalization
    fn custom_norm(data: &mut [Complex<f64>]) {
        let n = 2. / data.len() as f64;
        for d in data.iter_mut() {
            *d = *d * n;
        }
    }
    let norm = Normalization::Custom(custom_norm);

    // Init handlers
    let direct = DftHandler::<f64>::new().normalization(norm);
    let fast = FftHandler::<f64>::new().normalization(norm);

    // Perform transforms
    let v_direct = direct.process_inverse(&direct.process(&x).unwrap()).unwrap();
    let v_fast = fast.process_inverse(&fast.process(&x).unwrap()).unwrap();
    println!("2x (direct): {}", v_direct.samples());
    println!("2x (fft): {}", v_fast.samples());
}
