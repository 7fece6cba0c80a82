/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use criterion::{criterion_group, Criterion};

use bayes_inference::utils_test::test_utils::{get_evidence, get_long_chain_network};
use bayes_inference::JunctionTree;

const CHAIN_LENGTH: usize = 64;

fn compile_benchmark(criterion: &mut Criterion) {
    let net = get_long_chain_network(CHAIN_LENGTH);
    criterion.bench_function("junction_tree_compile_chain_64", |bencher| {
        bencher.iter(|| JunctionTree::with_defaults(&net).unwrap())
    });
}

fn posterior_benchmark(criterion: &mut Criterion) {
    let net = get_long_chain_network(CHAIN_LENGTH);
    let mut tree = JunctionTree::with_defaults(&net).unwrap();
    let evidence = get_evidence(&[(0, 1), (CHAIN_LENGTH / 2, 0)]);

    criterion.bench_function("junction_tree_posterior_chain_64", |bencher| {
        bencher.iter(|| tree.posterior(&evidence, CHAIN_LENGTH - 1).unwrap())
    });
}

fn posterior_all_benchmark(criterion: &mut Criterion) {
    let net = get_long_chain_network(CHAIN_LENGTH);
    let mut tree = JunctionTree::with_defaults(&net).unwrap();
    let evidence = get_evidence(&[(0, 1)]);

    criterion.bench_function("junction_tree_posterior_all_chain_64", |bencher| {
        bencher.iter(|| tree.posterior_all(&evidence).unwrap())
    });
}

criterion_group! {
    name = junction_tree;
    config = Criterion::default().sample_size(50);
    targets = compile_benchmark, posterior_benchmark, posterior_all_benchmark,
}
