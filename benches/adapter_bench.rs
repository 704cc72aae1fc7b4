#![allow(dead_code)]
//! 委托适配器的性能基准测试

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use locbridge::LocatorAdapter;

/// 测试用的简单服务
#[derive(Default, Clone)]
struct SimpleService {
    value: i32,
}

/// 测试用的复杂服务（包含多个字段）
#[derive(Default)]
struct ComplexService {
    id: u64,
    name: String,
    dependencies: Vec<String>,
}

/// 基准测试：瞬态解析吞吐
fn bench_transient_resolution(c: &mut Criterion) {
    let adapter = LocatorAdapter::new();
    adapter.register::<SimpleService, SimpleService>();

    c.bench_function("transient_resolution", |b| {
        b.iter(|| {
            let service = adapter.resolve::<SimpleService>().unwrap();
            black_box(service.value)
        })
    });
    adapter.dispose();
}

/// 基准测试：单例解析吞吐（首次之后全部命中缓存）
fn bench_singleton_resolution(c: &mut Criterion) {
    let adapter = LocatorAdapter::new();
    adapter.register_singleton::<ComplexService, ComplexService>();

    c.bench_function("singleton_resolution", |b| {
        b.iter(|| {
            let service = adapter.resolve::<ComplexService>().unwrap();
            black_box(service.id)
        })
    });
    adapter.dispose();
}

/// 基准测试：常量绑定解析
fn bench_constant_resolution(c: &mut Criterion) {
    let adapter = LocatorAdapter::new();
    adapter.register_instance(SimpleService { value: 42 });

    c.bench_function("constant_resolution", |b| {
        b.iter(|| {
            let service = adapter.resolve::<SimpleService>().unwrap();
            black_box(service.value)
        })
    });
    adapter.dispose();
}

/// 基准测试：具名注册的解析开销
fn bench_named_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("named_resolution");

    for contract_count in [1usize, 10, 100].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(contract_count),
            contract_count,
            |b, &contract_count| {
                let adapter = LocatorAdapter::new();
                for i in 0..contract_count {
                    adapter.register_named::<SimpleService, SimpleService>(&format!("c{}", i));
                }
                b.iter(|| {
                    let service = adapter
                        .resolve_named::<SimpleService>("c0")
                        .unwrap();
                    black_box(service.value)
                });
                adapter.dispose();
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_transient_resolution,
    bench_singleton_resolution,
    bench_constant_resolution,
    bench_named_resolution
);
criterion_main!(benches);
