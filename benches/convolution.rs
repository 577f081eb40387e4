use criterion::{criterion_group, criterion_main, Criterion};
use distribution_algebra::stats::{Compare, Discrete, Normal, Poisson, Uniform};

fn d6() -> Discrete<f64> {
    Discrete::new((1..=6).map(|k| (f64::from(k), 1.0 / 6.0))).unwrap()
}

// ---------------------------------------------------------------------------
// Discrete convolution
// ---------------------------------------------------------------------------

fn convolution(c: &mut Criterion) {
    let mut g = c.benchmark_group("convolution");

    g.bench_function("two_dice", |b| {
        let die = d6();
        b.iter(|| std::hint::black_box(&die) + std::hint::black_box(&die))
    });

    g.bench_function("hundred_dice", |b| {
        let die = d6();
        b.iter(|| {
            let mut sum = die.clone();
            for _ in 0..99 {
                sum = (&sum + std::hint::black_box(&die)).unwrap();
            }
            sum
        })
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Comparisons
// ---------------------------------------------------------------------------

fn comparison(c: &mut Criterion) {
    let mut g = c.benchmark_group("comparison");

    g.bench_function("discrete_vs_scalar", |b| {
        let sum = (&(&d6() + &d6()).unwrap() + &d6()).unwrap();
        b.iter(|| std::hint::black_box(&sum).greater_equal(std::hint::black_box(11.0)))
    });

    g.bench_function("discrete_vs_discrete", |b| {
        let x = (&d6() + &d6()).unwrap();
        let y = (&x + &d6()).unwrap();
        b.iter(|| std::hint::black_box(&x).less_than(std::hint::black_box(&y)))
    });

    g.bench_function("poisson_vs_poisson", |b| {
        let (x, y) = (Poisson::new(20.0).unwrap(), Poisson::new(25.0).unwrap());
        b.iter(|| std::hint::black_box(x).less_than(std::hint::black_box(y)))
    });

    g.bench_function("normal_vs_normal", |b| {
        let (x, y) = (Normal::new(657.0, 3.0).unwrap(), Normal::new(661.0, 2.0).unwrap());
        b.iter(|| std::hint::black_box(x).greater_than(std::hint::black_box(y)))
    });

    g.bench_function("uniform_vs_uniform", |b| {
        let (x, y) = (Uniform::new(1.0, 2.0).unwrap(), Uniform::new(0.0, 3.0).unwrap());
        b.iter(|| std::hint::black_box(x).less_than(std::hint::black_box(y)))
    });

    g.finish();
}

criterion_group!(benches, convolution, comparison);
criterion_main!(benches);
