/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use crate::errors::NetworkError;
use crate::traits::network_view::NetworkView;
use crate::types::discrete_node::DiscreteNode;
use crate::utils::topological_order;

/// A validated discrete Bayesian network: a DAG of densely indexed
/// variables, each carrying a CPT over its family.
///
/// Construction rejects non-dense indexing, out-of-range or duplicate
/// parents, self loops, cycles, malformed CPT lengths, and negative CPT
/// entries, so every constructed network is safe to compile and query.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteBayesNet {
    nodes: Vec<DiscreteNode>,
    order: Vec<usize>,
}

impl DiscreteBayesNet {
    pub fn new(nodes: Vec<DiscreteNode>) -> Result<Self, NetworkError> {
        if nodes.is_empty() {
            return Err(NetworkError::EmptyNetwork);
        }
        let n = nodes.len();

        for (i, node) in nodes.iter().enumerate() {
            if node.index() != i {
                return Err(NetworkError::NonDenseIndex {
                    expected: i,
                    found: node.index(),
                });
            }
            if node.domain_size() == 0 {
                return Err(NetworkError::ZeroDomain(i));
            }
            for (j, &p) in node.parents().iter().enumerate() {
                if p >= n {
                    return Err(NetworkError::ParentOutOfRange { node: i, parent: p });
                }
                if p == i {
                    return Err(NetworkError::SelfLoop(i));
                }
                if node.parents()[..j].contains(&p) {
                    return Err(NetworkError::DuplicateParent { node: i, parent: p });
                }
            }
        }

        for (i, node) in nodes.iter().enumerate() {
            let expected: usize = node
                .parents()
                .iter()
                .map(|&p| nodes[p].domain_size())
                .product::<usize>()
                * node.domain_size();
            if node.cpt().len() != expected {
                return Err(NetworkError::CptLengthMismatch {
                    node: i,
                    expected,
                    found: node.cpt().len(),
                });
            }
            if !node.cpt().iter().all(|p| *p >= 0.0) {
                return Err(NetworkError::NegativeProbability(i));
            }
        }

        let mut net = Self {
            nodes,
            order: Vec::new(),
        };
        net.order = topological_order(&net)?;
        Ok(net)
    }

    #[inline(always)]
    pub fn node(&self, variable: usize) -> &DiscreteNode {
        &self.nodes[variable]
    }

    #[inline(always)]
    pub fn nodes(&self) -> &[DiscreteNode] {
        &self.nodes
    }

    /// A topological order of the variables, computed once at construction.
    #[inline(always)]
    pub fn topological_order(&self) -> &[usize] {
        &self.order
    }
}

impl NetworkView for DiscreteBayesNet {
    fn num_variables(&self) -> usize {
        self.nodes.len()
    }

    fn domain_size(&self, variable: usize) -> usize {
        self.nodes[variable].domain_size()
    }

    fn parents(&self, variable: usize) -> &[usize] {
        self.nodes[variable].parents()
    }

    fn cpt(&self, variable: usize) -> &[f64] {
        self.nodes[variable].cpt()
    }
}
