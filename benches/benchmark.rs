use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fraction32::Fraction;

// sum 1/1 + 1/2 + ... until the guard trips
fn harmonic_fraction() -> (u16, Fraction) {
    let mut sum = Fraction::ZERO;
    for k in 1..=u16::MAX {
        match sum.try_add(Fraction::ONE / Fraction::from(k)) {
            Ok(next) => sum = next,
            Err(_) => return (k, sum),
        }
    }
    (u16::MAX, sum)
}

fn harmonic_f64(terms: u16) -> f64 {
    (1..terms).map(|k| 1.0 / k as f64).sum()
}

fn random_fraction() -> Fraction {
    let deno = rand::random_range(1..=10_000);
    Fraction::new(rand::random_range(-10_000..=10_000), deno).unwrap_or_default()
}

fn benchmark_fraction(c: &mut Criterion) {
    c.bench_function(
        "harmonic(fraction)",
        |b| b.iter(|| harmonic_fraction()));

    c.bench_function(
        "mul_div(fraction)",
        |b| b.iter(|| {
            let (x, y) = (random_fraction(), random_fraction());
            black_box(x.try_mul(y).and_then(|p| p.try_div(y)))
        }));
}

fn benchmark_f64(c: &mut Criterion) {
    let (terms, _) = harmonic_fraction();
    c.bench_function(
        "harmonic(f64)",
        |b| b.iter(|| harmonic_f64(black_box(terms))));
}

fn benchmark_parse(c: &mut Criterion) {
    let text: String = (0..256)
        .map(|_| random_fraction().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    c.bench_function(
        "parse_all",
        |b| b.iter(|| Fraction::parse_all(black_box(&text)).filter(Result::is_ok).count()));
}

criterion_group!(benches, benchmark_fraction, benchmark_f64, benchmark_parse);
criterion_main!(benches);
