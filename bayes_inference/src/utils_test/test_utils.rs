/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

//! Fixture networks shared by the integration tests and benches.

use bayes_network::{DiscreteBayesNet, DiscreteNode, Evidence};

pub fn get_evidence(pairs: &[(usize, usize)]) -> Evidence {
    Evidence::from(pairs)
}

/// A single Bernoulli variable with prior [0.3, 0.7].
pub fn get_bernoulli_network() -> DiscreteBayesNet {
    let nodes = vec![DiscreteNode::root(0, 2, vec![0.3, 0.7])];
    DiscreteBayesNet::new(nodes).expect("fixture network is valid")
}

/// The chain A -> B -> C over binary domains.
///
/// P(A) = [0.5, 0.5]; P(B|A=0) = [0.9, 0.1], P(B|A=1) = [0.2, 0.8];
/// P(C|B=0) = [0.7, 0.3], P(C|B=1) = [0.4, 0.6].
pub fn get_chain_network() -> DiscreteBayesNet {
    let nodes = vec![
        DiscreteNode::root(0, 2, vec![0.5, 0.5]),
        DiscreteNode::new(1, 2, vec![0], vec![0.9, 0.1, 0.2, 0.8]),
        DiscreteNode::new(2, 2, vec![1], vec![0.7, 0.3, 0.4, 0.6]),
    ];
    DiscreteBayesNet::new(nodes).expect("fixture network is valid")
}

/// The v-structure A -> C <- B where C is the deterministic XOR of A and B,
/// with uniform priors on A and B.
pub fn get_xor_network() -> DiscreteBayesNet {
    let nodes = vec![
        DiscreteNode::root(0, 2, vec![0.5, 0.5]),
        DiscreteNode::root(1, 2, vec![0.5, 0.5]),
        // rows are (a, b) configurations; within a row, the value of C
        DiscreteNode::new(2, 2, vec![0, 1], vec![1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0]),
    ];
    DiscreteBayesNet::new(nodes).expect("fixture network is valid")
}

/// The XOR v-structure with a fourth variable that deterministically
/// copies C. Observing the full (A, B, C) assignment leaves D queryable,
/// including under impossible evidence.
pub fn get_xor_chain_network() -> DiscreteBayesNet {
    let nodes = vec![
        DiscreteNode::root(0, 2, vec![0.5, 0.5]),
        DiscreteNode::root(1, 2, vec![0.5, 0.5]),
        DiscreteNode::new(2, 2, vec![0, 1], vec![1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0]),
        DiscreteNode::new(3, 2, vec![2], vec![1.0, 0.0, 0.0, 1.0]),
    ];
    DiscreteBayesNet::new(nodes).expect("fixture network is valid")
}

/// The sprinkler diamond: cloudy -> sprinkler, cloudy -> rain,
/// (sprinkler, rain) -> wet grass. Exercises a network whose moral graph
/// needs a marriage edge and whose junction tree has a 3-variable clique.
pub fn get_sprinkler_network() -> DiscreteBayesNet {
    let nodes = vec![
        // 0: cloudy
        DiscreteNode::root(0, 2, vec![0.5, 0.5]),
        // 1: sprinkler | cloudy
        DiscreteNode::new(1, 2, vec![0], vec![0.5, 0.5, 0.9, 0.1]),
        // 2: rain | cloudy
        DiscreteNode::new(2, 2, vec![0], vec![0.8, 0.2, 0.2, 0.8]),
        // 3: wet | sprinkler, rain
        DiscreteNode::new(
            3,
            2,
            vec![1, 2],
            vec![1.0, 0.0, 0.1, 0.9, 0.1, 0.9, 0.01, 0.99],
        ),
    ];
    DiscreteBayesNet::new(nodes).expect("fixture network is valid")
}

/// A star: one binary root with three noisy readers. The root's clique
/// ends up with several downstream separators, exercising the per-child
/// rounds of the collect sweep and multi-node separator levels.
pub fn get_star_network() -> DiscreteBayesNet {
    let nodes = vec![
        DiscreteNode::root(0, 2, vec![0.6, 0.4]),
        DiscreteNode::new(1, 2, vec![0], vec![0.9, 0.1, 0.3, 0.7]),
        DiscreteNode::new(2, 2, vec![0], vec![0.8, 0.2, 0.1, 0.9]),
        DiscreteNode::new(3, 2, vec![0], vec![0.7, 0.3, 0.4, 0.6]),
    ];
    DiscreteBayesNet::new(nodes).expect("fixture network is valid")
}

/// A chain of `length` binary variables, each flipping its parent with
/// probability 0.2. Used for deeper trees and benches.
pub fn get_long_chain_network(length: usize) -> DiscreteBayesNet {
    let mut nodes = vec![DiscreteNode::root(0, 2, vec![0.5, 0.5])];
    for i in 1..length {
        nodes.push(DiscreteNode::new(
            i,
            2,
            vec![i - 1],
            vec![0.8, 0.2, 0.2, 0.8],
        ));
    }
    DiscreteBayesNet::new(nodes).expect("fixture network is valid")
}

/// A ternary-domain collider: two three-valued parents and a child whose
/// distribution depends on their sum. Exercises non-binary mixed-radix
/// addressing.
pub fn get_ternary_network() -> DiscreteBayesNet {
    let mut cpt = Vec::with_capacity(27);
    for a in 0..3usize {
        for b in 0..3usize {
            let mut row = [0.1, 0.1, 0.1];
            row[(a + b) % 3] = 0.8;
            cpt.extend_from_slice(&row);
        }
    }
    let nodes = vec![
        DiscreteNode::root(0, 3, vec![0.5, 0.3, 0.2]),
        DiscreteNode::root(1, 3, vec![0.2, 0.5, 0.3]),
        DiscreteNode::new(2, 3, vec![0, 1], cpt),
    ];
    DiscreteBayesNet::new(nodes).expect("fixture network is valid")
}
