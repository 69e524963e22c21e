//! Criterion benchmarks for routemap.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use tempfile::NamedTempFile;

use routemap::format::{RmapReader, RmapWriter};
use routemap::graph::RouteMap;

/// Build a connected map: a chain through every city plus random
/// extra links.
fn make_large_map(city_count: usize, extra_links: usize) -> RouteMap {
    let mut rng = rand::thread_rng();
    let mut map = RouteMap::new();
    for i in 0..city_count {
        map.add_city(&format!("city_{}", i));
    }
    for i in 1..city_count {
        map.link_cities(&format!("city_{}", i - 1), &format!("city_{}", i));
    }
    for _ in 0..extra_links {
        let a = rng.gen_range(0..city_count);
        let b = rng.gen_range(0..city_count);
        map.link_cities(&format!("city_{}", a), &format!("city_{}", b));
    }
    map
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_1k_cities", |b| {
        b.iter(|| make_large_map(black_box(1_000), black_box(2_000)));
    });
}

fn bench_find_path(c: &mut Criterion) {
    let map = make_large_map(1_000, 2_000);
    c.bench_function("find_path_chain_ends", |b| {
        b.iter(|| map.find_path(black_box("city_0"), black_box("city_999")));
    });
}

fn bench_roundtrip(c: &mut Criterion) {
    let map = make_large_map(1_000, 2_000);
    c.bench_function("write_read_roundtrip", |b| {
        b.iter(|| {
            let file = NamedTempFile::new().unwrap();
            RmapWriter::write_to_file(&map, file.path()).unwrap();
            RmapReader::read_from_file(file.path()).unwrap()
        });
    });
}

criterion_group!(benches, bench_build, bench_find_path, bench_roundtrip);
criterion_main!(benches);
