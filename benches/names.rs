//! Benchmarks for decoding and interning names.
//!
//! Measures the accessors that re-scan the identifier on every call:
//! - Type names (simple, nested generic)
//! - Method names (parameter lists, type parameters)
//! - Interning through the pool
//! - CoRe translation

extern crate dotnames;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use dotnames::{
    core::ToCoReName,
    names::{MethodName, NamePool, TypeName},
};
use std::hint::black_box;

const GENERIC_TYPE: &str = "System.Collections.Generic.Dictionary`2[[TKey -> System.String, mscorlib, 4.0.0.0],[TValue -> System.Collections.Generic.List`1[[T -> System.Int32, mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0";

const METHOD: &str = "static [System.Boolean, mscorlib, 4.0.0.0] [My.Cache`1[[T -> System.String, mscorlib, 4.0.0.0]], App, 1.0.0.0].TryGet`1[[U]](this [My.Cache`1[[T]], App, 1.0.0.0] cache, [System.String, mscorlib, 4.0.0.0] key, out [U] value)";

/// Benchmark decoding a simple type name.
fn bench_type_simple(c: &mut Criterion) {
    c.bench_function("type_simple", |b| {
        b.iter(|| {
            let ty = TypeName::new(black_box("System.String, mscorlib, 4.0.0.0"));
            black_box(ty.name())
        });
    });
}

/// Benchmark decoding the arguments of a nested generic type.
fn bench_type_generic(c: &mut Criterion) {
    let mut group = c.benchmark_group("type_generic");
    group.throughput(Throughput::Bytes(GENERIC_TYPE.len() as u64));
    group.bench_function("new", |b| {
        b.iter(|| black_box(TypeName::new(black_box(GENERIC_TYPE))));
    });

    let ty = TypeName::new(GENERIC_TYPE);
    group.bench_function("type_parameters", |b| {
        b.iter(|| black_box(ty.type_parameters()));
    });
    group.finish();
}

/// Benchmark the method accessors.
fn bench_method(c: &mut Criterion) {
    let method = MethodName::new(METHOD);
    let mut group = c.benchmark_group("method");
    group.bench_function("parameters", |b| {
        b.iter(|| black_box(method.parameters()));
    });
    group.bench_function("type_parameters", |b| {
        b.iter(|| black_box(method.type_parameters()));
    });
    group.bench_function("is_extension_method", |b| {
        b.iter(|| black_box(method.is_extension_method()));
    });
    group.finish();
}

/// Benchmark interning an identifier that is already live in the pool.
fn bench_pool_hit(c: &mut Criterion) {
    let pool = NamePool::new();
    let _held = pool.method(METHOD);

    c.bench_function("pool_hit", |b| {
        b.iter(|| black_box(pool.method(black_box(METHOD))));
    });
}

/// Benchmark translating a method into its CoRe name.
fn bench_core_translation(c: &mut Criterion) {
    let method = MethodName::new(METHOD);

    c.bench_function("core_method", |b| {
        b.iter(|| black_box(method.to_core_name().unwrap()));
    });
}

criterion_group!(
    benches,
    bench_type_simple,
    bench_type_generic,
    bench_method,
    bench_pool_hit,
    bench_core_translation,
);
criterion_main!(benches);
