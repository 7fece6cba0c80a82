/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use bayes_inference::utils_test::test_utils::*;
use bayes_inference::{InferenceError, JunctionTree, VariableElimination};
use bayes_network::{Evidence, EvidencePolicy, NetworkView};

fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < tol, "{actual:?} != {expected:?}");
    }
}

#[test]
fn test_single_bernoulli_node() {
    let net = get_bernoulli_network();
    let engine = VariableElimination::new(&net).unwrap();

    let posterior = engine.posterior(&Evidence::new(), 0).unwrap();
    assert_close(posterior.probabilities(), &[0.3, 0.7], 1e-9);
    assert_eq!(engine.predict(&Evidence::new(), 0).unwrap(), 1);
}

#[test]
fn test_chain_queries() {
    let net = get_chain_network();
    let engine = VariableElimination::new(&net).unwrap();

    let posterior = engine.posterior(&Evidence::new(), 2).unwrap();
    assert_close(posterior.probabilities(), &[0.565, 0.435], 1e-9);

    let posterior = engine.posterior(&get_evidence(&[(0, 1)]), 2).unwrap();
    assert_close(posterior.probabilities(), &[0.46, 0.54], 1e-9);

    // diagnostic reasoning against the arrow direction
    let posterior = engine.posterior(&get_evidence(&[(2, 1)]), 1).unwrap();
    let expected = [0.55 * 0.3 / 0.435, 0.45 * 0.6 / 0.435];
    assert_close(posterior.probabilities(), &expected, 1e-9);
}

#[test]
fn test_xor_queries() {
    let net = get_xor_network();
    let engine = VariableElimination::new(&net).unwrap();

    let posterior = engine.posterior(&get_evidence(&[(2, 1)]), 0).unwrap();
    assert_close(posterior.probabilities(), &[0.5, 0.5], 1e-9);

    let posterior = engine
        .posterior(&get_evidence(&[(2, 1), (1, 0)]), 0)
        .unwrap();
    assert_eq!(posterior.probabilities(), &[0.0, 1.0]);
}

#[test]
fn test_impossible_evidence_is_degenerate() {
    let net = get_xor_chain_network();
    let engine = VariableElimination::new(&net).unwrap();

    let impossible = get_evidence(&[(0, 0), (1, 0), (2, 1)]);
    let posterior = engine.posterior(&impossible, 3).unwrap();
    assert!(posterior.is_degenerate());
    assert_eq!(
        engine.predict(&impossible, 3),
        Err(InferenceError::DegenerateEvidence)
    );
}

#[test]
fn test_elimination_order_is_topological() {
    let net = get_sprinkler_network();
    let engine = VariableElimination::new(&net).unwrap();

    let order = engine.elimination_order();
    assert_eq!(order.len(), 4);
    let rank = |v: usize| order.iter().position(|&x| x == v).unwrap();
    for v in 0..4 {
        for &p in net.parents(v) {
            assert!(rank(p) < rank(v));
        }
    }
}

#[test]
fn test_query_guards() {
    let net = get_chain_network();
    let engine = VariableElimination::new(&net).unwrap();

    assert_eq!(
        engine.posterior(&Evidence::new(), 5),
        Err(InferenceError::QueryVariableOutOfRange {
            variable: 5,
            num_variables: 3
        })
    );
    assert_eq!(
        engine.posterior(&get_evidence(&[(1, 0)]), 1),
        Err(InferenceError::QueryVariableObserved { variable: 1 })
    );
}

#[test]
fn test_evidence_policies() {
    let net = get_chain_network();

    let dropping = VariableElimination::new(&net).unwrap();
    let posterior = dropping
        .posterior(&get_evidence(&[(9, 0), (0, 1)]), 2)
        .unwrap();
    assert_close(posterior.probabilities(), &[0.46, 0.54], 1e-9);

    let failing = VariableElimination::with_policy(&net, EvidencePolicy::Fail).unwrap();
    assert_eq!(
        failing.posterior(&get_evidence(&[(9, 0)]), 2),
        Err(InferenceError::EvidenceVariableOutOfRange {
            variable: 9,
            num_variables: 3
        })
    );
}

/// The two engines are independent implementations of the same posterior;
/// they must agree on every query of every fixture, with and without
/// evidence.
#[test]
fn test_junction_tree_agrees_with_variable_elimination() {
    let networks = [
        get_chain_network(),
        get_xor_network(),
        get_xor_chain_network(),
        get_sprinkler_network(),
        get_star_network(),
        get_ternary_network(),
        get_long_chain_network(8),
    ];

    for net in &networks {
        let mut tree = JunctionTree::with_defaults(net).unwrap();
        let engine = VariableElimination::new(net).unwrap();
        let n = net.num_variables();

        // no evidence
        for query in 0..n {
            let jt = tree.posterior(&Evidence::new(), query).unwrap();
            let ve = engine.posterior(&Evidence::new(), query).unwrap();
            assert_close(jt.probabilities(), ve.probabilities(), 1e-9);
        }

        // every single-variable observation
        for observed in 0..n {
            for value in 0..net.domain_size(observed) {
                let evidence = get_evidence(&[(observed, value)]);
                for query in 0..n {
                    if query == observed {
                        continue;
                    }
                    let jt = tree.posterior(&evidence, query).unwrap();
                    let ve = engine.posterior(&evidence, query).unwrap();
                    assert_eq!(jt.is_degenerate(), ve.is_degenerate());
                    assert_close(jt.probabilities(), ve.probabilities(), 1e-9);
                }
            }
        }
    }
}

#[test]
fn test_engines_agree_on_pairwise_evidence() {
    let net = get_sprinkler_network();
    let mut tree = JunctionTree::with_defaults(&net).unwrap();
    let engine = VariableElimination::new(&net).unwrap();

    for a in 0..4 {
        for b in (a + 1)..4 {
            for va in 0..2 {
                for vb in 0..2 {
                    let evidence = get_evidence(&[(a, va), (b, vb)]);
                    for query in 0..4 {
                        if query == a || query == b {
                            continue;
                        }
                        let jt = tree.posterior(&evidence, query).unwrap();
                        let ve = engine.posterior(&evidence, query).unwrap();
                        assert_close(jt.probabilities(), ve.probabilities(), 1e-9);
                    }
                }
            }
        }
    }
}
