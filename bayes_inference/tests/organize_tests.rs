/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use bayes_inference::utils_test::test_utils::*;
use bayes_inference::JunctionTree;

#[test]
fn test_levels_alternate_cliques_and_separators() {
    let networks = [
        get_chain_network(),
        get_sprinkler_network(),
        get_long_chain_network(16),
    ];

    for net in &networks {
        let tree = JunctionTree::with_defaults(net).unwrap();
        for (level, ids) in tree.levels().iter().enumerate() {
            assert!(!ids.is_empty(), "no empty levels are recorded");
            for &id in ids {
                assert_eq!(
                    tree.node(id).is_separator(),
                    level % 2 == 1,
                    "node {id} at level {level}"
                );
            }
        }
    }
}

#[test]
fn test_levels_cover_every_node_once() {
    let net = get_long_chain_network(10);
    let tree = JunctionTree::with_defaults(&net).unwrap();

    let mut counts = vec![0usize; tree.num_nodes()];
    for ids in tree.levels() {
        for &id in ids {
            counts[id] += 1;
        }
    }
    assert!(counts.iter().all(|&c| c == 1));
}

#[test]
fn test_roots_have_no_upstream() {
    let net = get_sprinkler_network();
    let tree = JunctionTree::with_defaults(&net).unwrap();

    assert_eq!(tree.roots().len(), 1);
    let root = tree.roots()[0];
    assert!(tree.node(root).upstream().is_none());
    assert_eq!(tree.levels()[0], vec![root]);
}

#[test]
fn test_upstream_downstream_are_mutual() {
    let net = get_long_chain_network(12);
    let tree = JunctionTree::with_defaults(&net).unwrap();

    for id in 0..tree.num_nodes() {
        let node = tree.node(id);
        if let Some(up) = node.upstream() {
            assert!(tree.node(up).downstream().contains(&id));
            assert!(node.neighbors().contains(&up));
        }
        for &down in node.downstream() {
            assert_eq!(tree.node(down).upstream(), Some(id));
        }
    }
}

#[test]
fn test_separators_have_one_child() {
    let net = get_long_chain_network(12);
    let tree = JunctionTree::with_defaults(&net).unwrap();

    for id in 0..tree.num_nodes() {
        let node = tree.node(id);
        if node.is_separator() {
            assert_eq!(node.downstream().len(), 1);
            assert!(node.upstream().is_some());
        }
    }
}

#[test]
fn test_non_root_cliques_end_with_upstream_separator_variables() {
    let networks = [
        get_chain_network(),
        get_sprinkler_network(),
        get_ternary_network(),
        get_long_chain_network(16),
    ];

    for net in &networks {
        let tree = JunctionTree::with_defaults(net).unwrap();
        for id in 0..tree.num_nodes() {
            let node = tree.node(id);
            if node.is_separator() {
                continue;
            }
            let Some(up) = node.upstream() else {
                continue;
            };
            let separator_vars = tree.node(up).scope();
            assert!(
                node.table().is_trailing(separator_vars),
                "clique {id} does not end with its upstream separator variables"
            );
        }
    }
}

#[test]
fn test_star_root_has_multiple_children() {
    let net = get_star_network();
    let tree = JunctionTree::with_defaults(&net).unwrap();

    let root = tree.roots()[0];
    assert_eq!(tree.node(root).downstream().len(), 2);
    // one separator level with two separators, batched together
    assert_eq!(tree.levels().len(), 3);
    assert_eq!(tree.levels()[1].len(), 2);
}

#[test]
fn test_single_clique_tree_has_one_level() {
    let net = get_bernoulli_network();
    let tree = JunctionTree::with_defaults(&net).unwrap();
    assert_eq!(tree.levels().len(), 1);
    assert_eq!(tree.num_separators(), 0);
}
