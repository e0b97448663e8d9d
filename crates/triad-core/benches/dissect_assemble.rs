//! Benchmarks for dissection, assembly and slice selection.
//!
//! Each case moves every element of the tensor once, so throughput is
//! reported in elements.
//!
//! Run with:
//! ```bash
//! cargo bench --bench dissect_assemble
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use triad_core::{Group, GroupSizes, Mat, StructuredIndex};

fn cases() -> Vec<(&'static str, GroupSizes, usize)> {
    vec![
        ("n2_222", GroupSizes::new(2, 2, 2), 2),
        ("n2_444", GroupSizes::new(4, 4, 4), 2),
        ("n3_222", GroupSizes::new(2, 2, 2), 3),
        ("n4_232", GroupSizes::new(2, 3, 2), 4),
    ]
}

fn bench_dissect(c: &mut Criterion) {
    let mut group = c.benchmark_group("dissect");

    for (name, sizes, radix) in cases() {
        let mat = Mat::<f64>::iota(sizes, radix).unwrap();
        group.throughput(Throughput::Elements(mat.len() as u64));

        for axis_group in Group::ALL {
            group.bench_with_input(
                BenchmarkId::new(name, axis_group),
                &(&mat, axis_group),
                |b, (mat, axis_group)| {
                    b.iter(|| black_box(mat.dissect(black_box(*axis_group)).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");

    for (name, sizes, radix) in cases() {
        let mat = Mat::<f64>::iota(sizes, radix).unwrap();
        group.throughput(Throughput::Elements(mat.len() as u64));

        for axis_group in Group::ALL {
            let sections = mat.dissect(axis_group).unwrap();
            group.bench_with_input(
                BenchmarkId::new(name, axis_group),
                &(sections, axis_group),
                |b, (sections, axis_group)| {
                    b.iter(|| black_box(Mat::<f64>::assemble(sections, *axis_group).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    let mat = Mat::<f64>::iota(GroupSizes::new(3, 3, 3), 3).unwrap();
    let indices: [(&str, StructuredIndex<'static>); 3] = [
        ("fix_free", StructuredIndex::new(&[1, 2, 0], &[], &[])),
        ("fix_caly", StructuredIndex::new(&[], &[], &[2, 1, 0])),
        ("fix_leading", StructuredIndex::new(&[1], &[1], &[1])),
    ];

    for (name, index) in indices {
        group.bench_with_input(BenchmarkId::from_parameter(name), &index, |b, index| {
            b.iter(|| black_box(mat.select(black_box(index)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dissect, bench_assemble, bench_select);
criterion_main!(benches);
