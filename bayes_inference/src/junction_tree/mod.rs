/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use bayes_network::NetworkView;
use bayes_potential::PotentialTable;

use crate::errors::TreeBuildError;
use crate::types::config::EngineOptions;
use crate::types::tree_node::TreeNode;

mod organize;
mod propagate;
mod query;
mod structure;

/// A Bayesian network compiled into a junction tree for exact inference.
///
/// Compilation moralizes and triangulates the network, extracts the cliques
/// and separators, roots and layers the tree, reorganizes the clique tables
/// so that marginalizing toward the upstream separator is a contiguous
/// strided sum, and snapshots all tables. Queries mutate the live tables
/// and restore the snapshot afterwards, so the compiled tree serves one
/// query at a time; callers wishing to serve queries in parallel hold one
/// compiled tree per worker.
#[derive(Debug, Clone)]
pub struct JunctionTree {
    nodes: Vec<TreeNode>,
    levels: Vec<Vec<usize>>,
    roots: Vec<usize>,
    snapshot: Vec<PotentialTable>,
    domain_sizes: Vec<usize>,
    options: EngineOptions,
}

impl JunctionTree {
    /// Compile a network into a junction tree.
    pub fn new<N>(network: &N, options: EngineOptions) -> Result<Self, TreeBuildError>
    where
        N: NetworkView + ?Sized,
    {
        let mut nodes = structure::build(network, &options)?;
        let shape = organize::organize(&mut nodes)?;
        let snapshot = nodes.iter().map(|node| node.table.clone()).collect();
        let domain_sizes = (0..network.num_variables())
            .map(|v| network.domain_size(v))
            .collect();

        Ok(Self {
            nodes,
            levels: shape.levels,
            roots: shape.roots,
            snapshot,
            domain_sizes,
            options,
        })
    }

    /// Compile a network with the default options.
    pub fn with_defaults<N>(network: &N) -> Result<Self, TreeBuildError>
    where
        N: NetworkView + ?Sized,
    {
        Self::new(network, EngineOptions::default())
    }

    #[inline(always)]
    pub fn num_variables(&self) -> usize {
        self.domain_sizes.len()
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_cliques(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_separator()).count()
    }

    pub fn num_separators(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_separator()).count()
    }

    #[inline(always)]
    pub fn node(&self, id: usize) -> &TreeNode {
        &self.nodes[id]
    }

    /// The breadth-first layering: even levels hold cliques, odd levels
    /// hold separators.
    #[inline(always)]
    pub fn levels(&self) -> &[Vec<usize>] {
        &self.levels
    }

    /// The root clique of every tree component.
    #[inline(always)]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    #[inline(always)]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The domain size of one network variable.
    #[inline(always)]
    pub fn domain_size(&self, variable: usize) -> usize {
        self.domain_sizes[variable]
    }
}
