//! Benchmarks for fieldstream field arithmetic and the byte generator.

use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fieldstream::{FieldElement, FiniteField, Generator, Poly};

fn bench_element_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("FieldElement GF(2^8)");

    let field = Rc::new(FiniteField::byte_field());
    let a = FieldElement::from_byte(&field, 0x57).unwrap();
    let b = FieldElement::from_byte(&field, 0x83).unwrap();

    group.bench_function("add", |bencher| {
        bencher.iter(|| black_box(&a).add(black_box(&b)))
    });

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(&a).mul(black_box(&b)))
    });

    group.bench_function("invert", |bencher| bencher.iter(|| black_box(&a).invert()));

    group.bench_function("div", |bencher| {
        bencher.iter(|| black_box(&a).div(black_box(&b)))
    });

    group.bench_function("pow_254", |bencher| {
        bencher.iter(|| black_box(&a).pow(254))
    });

    group.finish();
}

fn bench_prime_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("FieldElement GF(251)");

    let field = Rc::new(FiniteField::prime(251).unwrap());
    let a = FieldElement::from_coeffs(&field, &[123]).unwrap();
    let b = FieldElement::from_coeffs(&field, &[201]).unwrap();

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(&a).mul(black_box(&b)))
    });

    group.bench_function("invert", |bencher| bencher.iter(|| black_box(&a).invert()));

    group.finish();
}

fn bench_poly_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Poly");

    let coeffs_small: Vec<u8> = (0..16).map(|i| i as u8 + 1).collect();
    let coeffs_large: Vec<u8> = (0..128).map(|i| (i % 250) as u8 + 1).collect();

    let p_small = Poly::new(251, coeffs_small);
    let p_large = Poly::new(251, coeffs_large);

    group.bench_function("mul_16x16", |bencher| {
        bencher.iter(|| black_box(&p_small) * black_box(&p_small))
    });

    group.bench_function("mul_128x128", |bencher| {
        bencher.iter(|| black_box(&p_large) * black_box(&p_large))
    });

    let modulus = Poly::from_be_coeffs(2, &[1, 1, 1, 1, 1, 1, 0, 0, 1]);
    let wide = Poly::new(2, vec![1; 16]);
    group.bench_function("rem_deg15_by_deg8", |bencher| {
        bencher.iter(|| black_box(&wide).rem(black_box(&modulus)))
    });

    group.bench_function("is_irreducible_deg8", |bencher| {
        bencher.iter(|| black_box(&modulus).is_irreducible())
    });

    group.finish();
}

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generator");

    group.bench_function("configure_from_bytes_k2", |bencher| {
        let buf = [2, 1, 18, 125, 17, 8];
        let mut gen = Generator::for_bytes();
        bencher.iter(|| gen.configure_from_bytes(black_box(&buf)))
    });

    for k in [2usize, 16, 64] {
        let mut buf = vec![0u8; 2 * k + 2];
        buf[0] = k as u8;
        for i in 0..k {
            buf[1 + i] = (i as u8).wrapping_mul(5).wrapping_add(1);
            buf[1 + k + i] = (i as u8).wrapping_add(11);
        }
        buf[2 * k + 1] = 0x17;

        let mut gen = Generator::for_bytes();
        gen.configure_from_bytes(&buf).unwrap();

        group.bench_with_input(BenchmarkId::new("step", k), &k, |bencher, _| {
            bencher.iter(|| gen.step())
        });
    }

    let mut gen = Generator::for_bytes();
    gen.configure_from_bytes(&[2, 1, 18, 125, 17, 8]).unwrap();
    let mut out = [0u8; 1024];
    group.bench_function("generate_1024", |bencher| {
        bencher.iter(|| gen.generate(black_box(&mut out)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_element_operations,
    bench_prime_field,
    bench_poly_operations,
    bench_generator,
);
criterion_main!(benches);
