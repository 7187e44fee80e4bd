use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use interval::{Dyadic, Interval, Rational};
use rug::Integer;
use sampling::source::Source;
use std::hint::black_box;

#[derive(Clone, Copy)]
struct Params {
    limbs: usize,
}

fn rational_range(source: &mut Source, limbs: usize) -> Interval<Rational> {
    let mut next = || -> Rational {
        let num: Integer = source.next_integer(limbs);
        let den: Integer = source.next_integer(limbs).abs() + 1;
        Rational::from((num, den))
    };
    let x: Rational = next();
    let y: Rational = next();
    if x < y {
        Interval::new(x, false, y, true)
    } else {
        Interval::new(y, true, x, false)
    }
}

fn dyadic_range(source: &mut Source, limbs: usize) -> Interval<Dyadic> {
    let exp: u32 = 64 * limbs as u32;
    let x: Dyadic = Dyadic::new(source.next_integer(limbs), exp);
    let y: Dyadic = Dyadic::new(source.next_integer(limbs) + Integer::from(1), exp);
    if x < y {
        Interval::new(x, false, y, true)
    } else {
        Interval::new(y, true, x, false)
    }
}

fn bench_interval_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_mul");

    fn runner_rational(p: Params) -> impl FnMut() {
        let mut source: Source = Source::new([0u8; 32]);
        let i: Interval<Rational> = rational_range(&mut source, p.limbs);
        let j: Interval<Rational> = rational_range(&mut source, p.limbs);
        let mut out: Interval<Rational> = Interval::zero();
        move || {
            black_box(&i).mul_into(black_box(&j), &mut out);
        }
    }

    fn runner_dyadic(p: Params) -> impl FnMut() {
        let mut source: Source = Source::new([0u8; 32]);
        let i: Interval<Dyadic> = dyadic_range(&mut source, p.limbs);
        let j: Interval<Dyadic> = dyadic_range(&mut source, p.limbs);
        let mut out: Interval<Dyadic> = Interval::zero();
        move || {
            black_box(&i).mul_into(black_box(&j), &mut out);
        }
    }

    for limbs in [1, 4, 16] {
        let params: Params = Params { limbs };
        let mut runner = runner_rational(params);
        group.bench_with_input(BenchmarkId::new("rational", limbs), &(), |b, _| {
            b.iter(&mut runner)
        });
        let mut runner = runner_dyadic(params);
        group.bench_with_input(BenchmarkId::new("dyadic", limbs), &(), |b, _| {
            b.iter(&mut runner)
        });
    }

    group.finish();
}

fn bench_interval_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_pow");

    for (limbs, n) in [(1, 2u32), (1, 7), (4, 2), (4, 7)] {
        let mut source: Source = Source::new([1u8; 32]);
        let i: Interval<Rational> = rational_range(&mut source, limbs);
        let d: Interval<Dyadic> = dyadic_range(&mut source, limbs);
        let mut out_i: Interval<Rational> = Interval::zero();
        let mut out_d: Interval<Dyadic> = Interval::zero();
        let id: String = format!("limbs={}/n={}", limbs, n);
        group.bench_with_input(BenchmarkId::new("rational", &id), &n, |b, &n| {
            b.iter(|| black_box(&i).pow_into(n, &mut out_i))
        });
        group.bench_with_input(BenchmarkId::new("dyadic", &id), &n, |b, &n| {
            b.iter(|| black_box(&d).pow_into(n, &mut out_d))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_interval_mul, bench_interval_pow);
criterion_main!(benches);
