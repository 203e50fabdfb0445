use anyhow::Result;
use clap::{Parser, ValueEnum};
use dualdft::{compare, DftHandler, Fallback, FftHandler, Signal, Tolerance};
use log::info;
use std::f64::consts::PI;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// real samples to transform; if not provided, runs the reference signals
    #[arg(allow_negative_numbers = true)]
    samples: Vec<f64>,

    /// reference signal to run when no samples are given
    #[arg(short, long, value_enum, default_value_t = Reference::All)]
    signal: Reference,

    /// absolute tolerance for the comparison, scaled with size and magnitude if omitted
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// fft strategy for sizes that are not a power of two
    #[arg(short, long, value_enum, default_value_t = FallbackArg::Bluestein)]
    fallback: FallbackArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Reference {
    /// symmetric sequence [1, 2, 3, 4, 4, 3, 2, 1]
    X8,
    /// cos(πn/4) for n = 0..15
    X16,
    All,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FallbackArg {
    Bluestein,
    Direct,
    ZeroPad,
    Reject,
}

impl From<FallbackArg> for Fallback {
    fn from(arg: FallbackArg) -> Self {
        match arg {
            FallbackArg::Bluestein => Fallback::Bluestein,
            FallbackArg::Direct => Fallback::Direct,
            FallbackArg::ZeroPad => Fallback::ZeroPad,
            FallbackArg::Reject => Fallback::Reject,
        }
    }
}

fn main() -> Result<()> {
    // initialize the logger
    env_logger::init();

    let args = Args::parse();

    let mut signals = Vec::new();
    if !args.samples.is_empty() {
        signals.push(("input".to_string(), Signal::from_real(&args.samples)?));
    } else {
        if matches!(args.signal, Reference::X8 | Reference::All) {
            let x8 = [1., 2., 3., 4., 4., 3., 2., 1.];
            signals.push(("x8, symmetric (N=8)".to_string(), Signal::from_real(&x8)?));
        }
        if matches!(args.signal, Reference::X16 | Reference::All) {
            let x16: Vec<f64> = (0..16).map(|n| (PI * n as f64 / 4.).cos()).collect();
            signals.push(("x16, cosine (N=16)".to_string(), Signal::from_real(&x16)?));
        }
    }

    let direct = DftHandler::new();
    let fast = FftHandler::new().fallback(args.fallback.into());
    info!("Comparing {} signal(s)", signals.len());

    for (label, signal) in &signals {
        let xhat_direct = direct.process(signal)?;
        let xhat_fast = fast.process(signal)?;

        println!("\n=== {} ===", label);
        println!(
            "{:>3} | {:>20} | {:>20} | {:>20} | {:>20}",
            "k", "|X[k]| (direct)", "∠X[k] (direct)", "|X[k]| (fft)", "∠X[k] (fft)"
        );
        println!("{}", "-".repeat(95));
        let (amp_direct, phase_direct) = dualdft::extract_spectrum(&xhat_direct);
        let (amp_fast, phase_fast) = dualdft::extract_spectrum(&xhat_fast);
        for k in 0..amp_direct.len().max(amp_fast.len()) {
            let cell = |v: Option<&f64>| v.map_or_else(|| "-".to_string(), |v| format!("{:.10}", v));
            println!(
                "{:>3} | {:>20} | {:>20} | {:>20} | {:>20}",
                k,
                cell(amp_direct.get(k)),
                cell(phase_direct.get(k)),
                cell(amp_fast.get(k)),
                cell(phase_fast.get(k)),
            );
        }

        let tolerance = args
            .tolerance
            .map_or_else(|| Tolerance::for_signal(signal), Tolerance::Absolute);
        let report = compare(&xhat_direct, &xhat_fast, Some(tolerance))?;
        println!("\nMethods {}", report);
    }
    Ok(())
}
