//! Integration tests for RdwtScratch reuse.

use atrous::{Atrous, RdwtExecutor, RdwtScratch, ScalingFilterProvider};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::borrow::Cow;
use std::sync::Arc;

const DB2: [f64; 4] = [
    0.4829629131445341,
    0.8365163037378079,
    0.2241438680420134,
    -0.1294095225512604,
];

struct Db2;

impl ScalingFilterProvider<f64> for Db2 {
    fn get_scaling_filter(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(&DB2)
    }
}

/// Preallocated path produces identical results to the allocating one.
#[test]
fn reused_scratch_matches_allocating_path() {
    let executor = Atrous::make_rdwt_f64(Arc::new(Db2)).unwrap();
    let mut scratch = RdwtScratch::new(16, 64, executor.filter_length()).unwrap();

    let shapes = [(1usize, 16usize, 2usize), (1, 64, 3), (4, 8, 1), (8, 16, 2), (16, 16, 2)];
    for (case, &(rows, cols, levels)) in shapes.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(case as u64);
        let signal: Vec<f64> = (0..rows * cols).map(|_| rng.gen_range(-4.0..4.0)).collect();

        let allocated = executor.decompose(&signal, rows, cols, levels).unwrap();

        let size = executor.rdwt_size(rows, cols, levels).unwrap();
        let mut lowpass = vec![0.0; size.lowpass_length];
        let mut highpass = vec![0.0; size.highpass_length];
        executor
            .decompose_into(
                &signal,
                rows,
                cols,
                levels,
                &mut lowpass,
                &mut highpass,
                &mut scratch,
            )
            .unwrap();

        assert_eq!(allocated.lowpass, lowpass, "lowpass diverged for case {case}");
        assert_eq!(allocated.highpass, highpass, "highpass diverged for case {case}");
    }
}

/// One scratch survives a long loop of calls with varying levels.
#[test]
fn looped_reuse_stays_consistent() {
    let executor = Atrous::make_rdwt_f64(Arc::new(Db2)).unwrap();
    let mut scratch = RdwtScratch::new(1, 32, executor.filter_length()).unwrap();

    for iteration in 0..100u64 {
        let mut rng = StdRng::seed_from_u64(iteration);
        let signal: Vec<f64> = (0..32).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let levels = (iteration % 4) as usize;

        let size = executor.rdwt_size(1, 32, levels).unwrap();
        let mut lowpass = vec![0.0; size.lowpass_length];
        let mut highpass = vec![0.0; size.highpass_length];
        executor
            .decompose_into(
                &signal,
                1,
                32,
                levels,
                &mut lowpass,
                &mut highpass,
                &mut scratch,
            )
            .unwrap();

        let reference = executor.decompose(&signal, 1, 32, levels).unwrap();
        assert_eq!(reference.lowpass, lowpass);
        assert_eq!(reference.highpass, highpass);
    }
}
