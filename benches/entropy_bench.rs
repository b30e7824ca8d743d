//! Criterion benchmarks for braid entropy estimation.
//!
//! Compares the reference and native iteration kernels on:
//!   - the Hironaka–Kin braid σ(2,2) (low dilatation, slow convergence)
//!   - a random 8-strand word (fixed seed)
//!   - single-step FTBE on a long time-stamped braid

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use braid_dynamics::{
    act_word, BraidWord, ChronoBraid, EntropyConfig, EntropyEstimator, FtbeConfig,
    KernelStrategy, LoopCoordinates,
};

// ── Helpers ───────────────────────────────────────────────────────────

fn hironaka_kin() -> BraidWord {
    BraidWord::hironaka_kin(2, 2).expect("valid family parameters")
}

fn random_word() -> BraidWord {
    let mut rng = StdRng::seed_from_u64(7);
    BraidWord::random(8, 40, &mut rng).expect("valid random braid")
}

fn estimator(strategy: KernelStrategy) -> EntropyEstimator {
    EntropyEstimator::new(EntropyConfig::default().with_strategy(strategy))
        .expect("default configuration is valid")
}

// ── Action benchmarks ─────────────────────────────────────────────────

fn bench_act_word(c: &mut Criterion) {
    let word = random_word();
    let start = LoopCoordinates::fundamental(word.strands());
    c.bench_function("act_word_random_8x40", |b| {
        b.iter(|| {
            let mut coords = start.clone();
            let (a, bb) = coords.parts_mut();
            act_word(black_box(word.generators()), a, bb);
            coords
        })
    });
}

// ── Kernel benchmarks ─────────────────────────────────────────────────

fn bench_kernels_hironaka_kin(c: &mut Criterion) {
    let word = hironaka_kin();
    let reference = estimator(KernelStrategy::Reference);
    let native = estimator(KernelStrategy::Native);

    c.bench_function("entropy_hk22_reference", |b| {
        b.iter(|| reference.estimate(black_box(&word)))
    });
    c.bench_function("entropy_hk22_native", |b| {
        b.iter(|| native.estimate(black_box(&word)))
    });
}

fn bench_kernels_random(c: &mut Criterion) {
    let word = random_word();
    let reference = estimator(KernelStrategy::Reference);
    let native = estimator(KernelStrategy::Native);

    c.bench_function("entropy_random_8x40_reference", |b| {
        b.iter(|| reference.estimate(black_box(&word)))
    });
    c.bench_function("entropy_random_8x40_native", |b| {
        b.iter(|| native.estimate(black_box(&word)))
    });
}

// ── FTBE benchmarks ───────────────────────────────────────────────────

fn bench_ftbe(c: &mut Criterion) {
    let braid = ChronoBraid::from_word(random_word().pow(10));
    let config = FtbeConfig::default();
    c.bench_function("ftbe_random_8x400", |b| {
        b.iter(|| braid.ftbe(black_box(&config)))
    });
}

criterion_group!(action, bench_act_word);
criterion_group!(kernels, bench_kernels_hironaka_kin, bench_kernels_random);
criterion_group!(ftbe, bench_ftbe);

criterion_main!(action, kernels, ftbe);
