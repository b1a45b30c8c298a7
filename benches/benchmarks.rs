use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nw_rust::align::{self, build_score_matrix, highroad_traceback};
use nw_rust::scoring::{MatchMismatch, SubstitutionMatrix};

const DNA_TABLE: &str = "\
   A  C  G  T
A  5 -4 -4 -4
C -4  5 -4 -4
G -4 -4  5 -4
T -4 -4 -4  5
";

fn make_sequence(len: usize, seed: u32) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = seed;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

fn bench_build_matrix(c: &mut Criterion) {
    let s1 = make_sequence(500, 42);
    let s2 = make_sequence(500, 7);
    let table: SubstitutionMatrix = DNA_TABLE.parse().expect("valid table");

    c.bench_function("build_matrix_500x500", |b| {
        b.iter(|| {
            black_box(build_score_matrix(black_box(&s1), black_box(&s2), -6, &table).expect("aligned"));
        })
    });
}

fn bench_traceback(c: &mut Criterion) {
    let s1 = make_sequence(500, 42);
    let s2 = make_sequence(500, 7);
    let table: SubstitutionMatrix = DNA_TABLE.parse().expect("valid table");
    let matrix = build_score_matrix(&s1, &s2, -6, &table).expect("matrix");

    c.bench_function("highroad_traceback_500x500", |b| {
        b.iter(|| {
            black_box(highroad_traceback(&s1, &s2, black_box(&matrix), -6, &table).expect("traceback"));
        })
    });
}

fn bench_align_global(c: &mut Criterion) {
    let s1 = make_sequence(200, 1);
    // one substitution and a 5bp deletion
    let mut s2 = [&s1[..120], &s1[125..]].concat();
    s2[50] = if s2[50] == b'A' { b'C' } else { b'A' };
    let scorer = MatchMismatch::default();

    c.bench_function("align_global_200bp", |b| {
        b.iter(|| {
            black_box(align::align_global(black_box(&s1), black_box(&s2), -1, &scorer).expect("aligned"));
        })
    });
}

criterion_group!(benches, bench_build_matrix, bench_traceback, bench_align_global);
criterion_main!(benches);
