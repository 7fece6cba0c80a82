/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use criterion::{criterion_group, Criterion};

use bayes_potential::PotentialTable;

fn get_table() -> PotentialTable {
    // six binary variables, 64 entries
    let data: Vec<f64> = (0..64).map(|i| 1.0 + (i % 9) as f64).collect();
    PotentialTable::new(vec![0, 1, 2, 3, 4, 5], vec![2; 6], data).unwrap()
}

fn marginalize_suffix_benchmark(criterion: &mut Criterion) {
    let table = get_table();
    criterion.bench_function("table_marginalize_trailing_suffix", |bencher| {
        bencher.iter(|| table.marginalize_to(&[3, 4, 5]).unwrap())
    });
}

fn marginalize_general_benchmark(criterion: &mut Criterion) {
    let table = get_table();
    criterion.bench_function("table_marginalize_general", |bencher| {
        bencher.iter(|| table.marginalize_to(&[4, 2, 0]).unwrap())
    });
}

fn extend_benchmark(criterion: &mut Criterion) {
    let small = PotentialTable::new(vec![4, 5], vec![2, 2], vec![0.1, 0.2, 0.3, 0.4]).unwrap();
    criterion.bench_function("table_extend_broadcast", |bencher| {
        bencher.iter(|| small.extend(&[0, 1, 2, 3, 4, 5], &[2; 6]).unwrap())
    });
}

fn reduce_benchmark(criterion: &mut Criterion) {
    let table = get_table();
    criterion.bench_function("table_reduce", |bencher| {
        bencher.iter(|| table.reduce(2, 1).unwrap())
    });
}

criterion_group! {
    name = potential_table;
    config = Criterion::default();
    targets =
        marginalize_suffix_benchmark,
        marginalize_general_benchmark,
        extend_benchmark,
        reduce_benchmark,
}
