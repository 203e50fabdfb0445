use criterion::{criterion_group, criterion_main, Criterion};
#[cfg(feature = "parallel")]
use dualdft::{Complex, FftHandler, Signal};
#[cfg(feature = "parallel")]
const FFT_SIZES: [usize; 4] = [4096, 16384, 65536, 262144];

#[cfg(feature = "parallel")]
pub fn bench_fft_par(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_par");
    for n in FFT_SIZES.iter() {
        let name = format!("Size: {}", *n);
        let data: Vec<_> = (0..*n).map(|i| Complex::new(i as f64, i as f64)).collect();
        let x = Signal::from_complex(&data).unwrap();
        let serial: FftHandler<f64> = FftHandler::new().parallel_threshold(usize::MAX);
        let parallel: FftHandler<f64> = FftHandler::new().parallel_threshold(1024);
        group.bench_function(&format!("{} serial", name), |b| {
            b.iter(|| serial.process(&x).unwrap())
        });
        group.bench_function(&format!("{} parallel", name), |b| {
            b.iter(|| parallel.process(&x).unwrap())
        });
    }
    group.finish();
}

#[cfg(not(feature = "parallel"))]
pub fn bench_stub(_c: &mut Criterion) {}

#[cfg(feature = "parallel")]
criterion_group!(benches, bench_fft_par);
#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_stub);
criterion_main!(benches);
