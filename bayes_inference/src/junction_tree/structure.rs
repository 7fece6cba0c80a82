/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

//! Compilation of a network into the clique/separator node set: moralize,
//! triangulate along an elimination order, prune redundant candidates,
//! extract a maximum-weight spanning tree over the candidate separators,
//! and multiply each CPT into one covering clique.

use bayes_network::{NetworkError, NetworkView};
use bayes_potential::PotentialTable;

use crate::errors::TreeBuildError;
use crate::types::config::{EliminationStrategy, EngineOptions};
use crate::types::tree_node::{NodeKind, TreeNode};

pub(crate) fn build<N>(
    network: &N,
    options: &EngineOptions,
) -> Result<Vec<TreeNode>, TreeBuildError>
where
    N: NetworkView + ?Sized,
{
    let n = network.num_variables();
    if n == 0 {
        return Err(TreeBuildError::Network(NetworkError::EmptyNetwork));
    }

    let mut adjacency = moralize(network);

    let order = match &options.elimination {
        EliminationStrategy::MinNeighbors => min_neighbors_order(&adjacency),
        EliminationStrategy::Custom(order) => {
            validate_order(order, n)?;
            order.clone()
        }
    };

    let mut scopes = triangulate(&mut adjacency, &order);
    if options.eliminate_redundant_cliques {
        scopes = prune_redundant(scopes);
    }

    let mut nodes = clique_nodes(network, &scopes)?;
    let separator_edges = spanning_tree_edges(&scopes);
    add_separators(network, &mut nodes, &separator_edges)?;
    assign_potentials(network, &mut nodes, scopes.len())?;

    Ok(nodes)
}

/// Form the moral graph: connect every variable to its parents, marry all
/// co-parents, and drop directions.
fn moralize<N>(network: &N) -> Vec<Vec<bool>>
where
    N: NetworkView + ?Sized,
{
    let n = network.num_variables();
    let mut adjacency = vec![vec![false; n]; n];
    for v in 0..n {
        let parents = network.parents(v);
        for (i, &p) in parents.iter().enumerate() {
            adjacency[v][p] = true;
            adjacency[p][v] = true;
            for &q in &parents[i + 1..] {
                adjacency[p][q] = true;
                adjacency[q][p] = true;
            }
        }
    }
    adjacency
}

/// Heuristic elimination order: repeatedly eliminate a variable with the
/// fewest remaining neighbors, lowest index on ties, filling in edges among
/// its neighbors as it goes.
fn min_neighbors_order(adjacency: &[Vec<bool>]) -> Vec<usize> {
    let n = adjacency.len();
    let mut work: Vec<Vec<bool>> = adjacency.to_vec();
    let mut alive = vec![true; n];
    let mut order = Vec::with_capacity(n);

    for _ in 0..n {
        let mut best = usize::MAX;
        let mut best_count = usize::MAX;
        for v in 0..n {
            if !alive[v] {
                continue;
            }
            let count = (0..n).filter(|&u| alive[u] && work[v][u]).count();
            if count < best_count {
                best_count = count;
                best = v;
            }
        }

        let neighbors: Vec<usize> = (0..n).filter(|&u| alive[u] && work[best][u]).collect();
        for (i, &a) in neighbors.iter().enumerate() {
            for &b in &neighbors[i + 1..] {
                work[a][b] = true;
                work[b][a] = true;
            }
        }
        alive[best] = false;
        order.push(best);
    }
    order
}

fn validate_order(order: &[usize], n: usize) -> Result<(), TreeBuildError> {
    if order.len() != n {
        return Err(TreeBuildError::InvalidEliminationOrder(format!(
            "expected {n} variables, got {}",
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v >= n {
            return Err(TreeBuildError::InvalidEliminationOrder(format!(
                "variable {v} out of range"
            )));
        }
        if seen[v] {
            return Err(TreeBuildError::InvalidEliminationOrder(format!(
                "variable {v} appears twice"
            )));
        }
        seen[v] = true;
    }
    Ok(())
}

/// Process the variables in elimination order. Each eliminated variable
/// yields a candidate clique scope, {v} plus its not-yet-eliminated
/// neighbors, and its fill-in edges are added to the graph.
fn triangulate(adjacency: &mut [Vec<bool>], order: &[usize]) -> Vec<Vec<usize>> {
    let n = adjacency.len();
    let mut alive = vec![true; n];
    let mut scopes = Vec::with_capacity(n);

    for &v in order {
        let neighbors: Vec<usize> = (0..n).filter(|&u| alive[u] && adjacency[v][u]).collect();

        let mut scope = neighbors.clone();
        scope.push(v);
        scope.sort_unstable();
        scopes.push(scope);

        for (i, &a) in neighbors.iter().enumerate() {
            for &b in &neighbors[i + 1..] {
                adjacency[a][b] = true;
                adjacency[b][a] = true;
            }
        }
        alive[v] = false;
    }
    scopes
}

/// Discard candidate cliques whose scope is contained in another
/// candidate's scope. Exact duplicates collapse to one.
fn prune_redundant(mut scopes: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    scopes.sort();
    scopes.dedup();

    let keep: Vec<bool> = (0..scopes.len())
        .map(|i| {
            !(0..scopes.len()).any(|j| j != i && is_subset(&scopes[i], &scopes[j]))
        })
        .collect();

    scopes
        .into_iter()
        .zip(keep)
        .filter_map(|(scope, k)| k.then_some(scope))
        .collect()
}

fn is_subset(a: &[usize], b: &[usize]) -> bool {
    a.iter().all(|x| b.contains(x))
}

fn clique_nodes<N>(network: &N, scopes: &[Vec<usize>]) -> Result<Vec<TreeNode>, TreeBuildError>
where
    N: NetworkView + ?Sized,
{
    let mut nodes = Vec::with_capacity(scopes.len());
    for (id, scope) in scopes.iter().enumerate() {
        let dims: Vec<usize> = scope.iter().map(|&v| network.domain_size(v)).collect();
        let table = PotentialTable::unit(scope.clone(), dims)?;
        nodes.push(TreeNode::new(id, NodeKind::Clique, table));
    }
    Ok(nodes)
}

/// Every pair of cliques with a non-empty scope intersection is a candidate
/// edge, weighted by the intersection size. A maximum-weight spanning tree
/// (forest, when the clique graph is disconnected) over these candidates
/// yields a junction tree with the running-intersection property.
fn spanning_tree_edges(scopes: &[Vec<usize>]) -> Vec<(usize, usize, Vec<usize>)> {
    let mut candidates = Vec::new();
    for i in 0..scopes.len() {
        for j in i + 1..scopes.len() {
            let intersection: Vec<usize> = scopes[i]
                .iter()
                .copied()
                .filter(|v| scopes[j].contains(v))
                .collect();
            if !intersection.is_empty() {
                candidates.push((i, j, intersection));
            }
        }
    }
    candidates.sort_by(|a, b| b.2.len().cmp(&a.2.len()));

    let mut union_find = UnionFind::new(scopes.len());
    candidates
        .into_iter()
        .filter(|(i, j, _)| union_find.union(*i, *j))
        .collect()
}

fn add_separators<N>(
    network: &N,
    nodes: &mut Vec<TreeNode>,
    edges: &[(usize, usize, Vec<usize>)],
) -> Result<(), TreeBuildError>
where
    N: NetworkView + ?Sized,
{
    for (i, j, scope) in edges {
        let id = nodes.len();
        let dims: Vec<usize> = scope.iter().map(|&v| network.domain_size(v)).collect();
        let table = PotentialTable::unit(scope.clone(), dims)?;
        let mut separator = TreeNode::new(id, NodeKind::Separator, table);
        separator.neighbors.push(*i);
        separator.neighbors.push(*j);
        nodes[*i].neighbors.push(id);
        nodes[*j].neighbors.push(id);
        nodes.push(separator);
    }
    Ok(())
}

/// Initialize every clique to the all-ones potential and multiply each
/// variable's CPT into one clique whose scope covers the variable and its
/// parents. Triangulation guarantees such a clique exists, so a miss is an
/// internal error.
fn assign_potentials<N>(
    network: &N,
    nodes: &mut [TreeNode],
    num_cliques: usize,
) -> Result<(), TreeBuildError>
where
    N: NetworkView + ?Sized,
{
    for v in 0..network.num_variables() {
        let mut family: Vec<usize> = network.parents(v).to_vec();
        family.push(v);

        let clique_id = (0..num_cliques)
            .find(|&c| nodes[c].table.contains_all(&family))
            .unwrap_or_else(|| {
                panic!("internal error: no clique covers variable {v} and its parents")
            });

        let parent_dims: Vec<usize> = network
            .parents(v)
            .iter()
            .map(|&p| network.domain_size(p))
            .collect();
        let cpt = PotentialTable::from_cpt(
            v,
            network.domain_size(v),
            network.parents(v),
            &parent_dims,
            network.cpt(v),
        )?;

        let (variables, dims) = {
            let table = &nodes[clique_id].table;
            (table.variables().to_vec(), table.dims().to_vec())
        };
        let message = cpt.extend(&variables, &dims)?;
        nodes[clique_id].update_message(message)?;
    }
    Ok(())
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            // path halving
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the two sets; false if already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}
