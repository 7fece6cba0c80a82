/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

//! Level-synchronous message passing: evidence loading, the upward collect
//! sweep and the downward distribute sweep.
//!
//! Every level is processed in three phases. The serial pre-phase walks the
//! level's nodes and builds one table-operation plan per node plus the
//! prefix sum of the per-node output sizes. The main phase is a single flat
//! loop over the concatenated work; each flat index is mapped back to its
//! (node, row) pair by a binary search on the prefix sum, and the row value
//! is a pure function of the live tables. The serial post-phase installs
//! the new tables. Within a level no row depends on another, which is what
//! the `parallel` feature exploits.

use bayes_network::{Evidence, EvidencePolicy};

use crate::errors::InferenceError;
use crate::junction_tree::JunctionTree;
use crate::utils::exec;

/// Which neighbor a separator marginalizes from: its child clique during
/// collect, its parent clique during distribute.
#[derive(Debug, Clone, Copy)]
enum MessageSource {
    Downstream,
    Upstream,
}

impl JunctionTree {
    /// Restore every clique and separator to its freshly compiled state.
    pub fn reset(&mut self) {
        for (node, table) in self.nodes.iter_mut().zip(self.snapshot.iter()) {
            node.table = table.clone();
            node.old_table = None;
        }
    }

    /// Load an evidence assignment by reducing every clique and separator
    /// whose scope contains an observed variable, then normalize every
    /// node once.
    ///
    /// Out-of-range pairs are dropped with a diagnostic or rejected,
    /// depending on the configured evidence policy.
    pub fn load_evidence(&mut self, evidence: &Evidence) -> Result<(), InferenceError> {
        for (variable, value) in evidence.iter() {
            match self.validate_pair(variable, value) {
                Ok(()) => self.reduce_all(variable, value)?,
                Err(err) => match self.options.evidence_policy {
                    EvidencePolicy::Drop => {
                        log::warn!("dropping evidence pair ({variable}, {value}): {err}");
                    }
                    EvidencePolicy::Fail => return Err(err),
                },
            }
        }
        self.normalize_all();
        Ok(())
    }

    /// Run the two message passing phases. Collect and distribute must not
    /// interleave; their order does not matter.
    pub fn propagate(&mut self) -> Result<(), InferenceError> {
        self.collect()?;
        self.distribute()
    }

    pub(crate) fn validate_pair(&self, variable: usize, value: usize) -> Result<(), InferenceError> {
        let num_variables = self.domain_sizes.len();
        if variable >= num_variables {
            return Err(InferenceError::EvidenceVariableOutOfRange {
                variable,
                num_variables,
            });
        }
        let domain_size = self.domain_sizes[variable];
        if value >= domain_size {
            return Err(InferenceError::EvidenceValueOutOfRange {
                variable,
                value,
                domain_size,
            });
        }
        Ok(())
    }

    /// Reduce every node containing the observed variable, batched into one
    /// flat loop over the reduced tables' rows.
    fn reduce_all(&mut self, variable: usize, value: usize) -> Result<(), InferenceError> {
        let ids: Vec<usize> = (0..self.nodes.len())
            .filter(|&id| self.nodes[id].table.contains(variable))
            .collect();

        let mut plans = Vec::with_capacity(ids.len());
        let mut cum_sum = Vec::with_capacity(ids.len() + 1);
        cum_sum.push(0usize);
        for &id in &ids {
            let plan = self.nodes[id].table.reduce_pre(variable, value)?;
            cum_sum.push(cum_sum.last().copied().unwrap_or(0) + plan.new_size());
            plans.push(plan);
        }
        let total = *cum_sum.last().unwrap_or(&0);

        let nodes = &self.nodes;
        let flat = exec::map_flat(total, |s| {
            let j = exec::locate(&cum_sum, s);
            let k = s - cum_sum[j];
            nodes[ids[j]].table.as_slice()[plans[j].source_index(k)]
        });

        for (j, plan) in plans.into_iter().enumerate() {
            let values = flat[cum_sum[j]..cum_sum[j + 1]].to_vec();
            self.nodes[ids[j]].table = plan.into_table(values);
        }
        Ok(())
    }

    /// Upward sweep: from the deepest processed level up to the roots.
    /// Every level ends with a renormalization of all cliques and
    /// separators, the sole defense against multiplication underflow on
    /// deep trees.
    fn collect(&mut self) -> Result<(), InferenceError> {
        let max_level = self.levels.len();
        for level in (0..max_level.saturating_sub(1)).rev() {
            if level % 2 == 1 {
                self.separator_level(level, MessageSource::Downstream)?;
            } else {
                self.clique_level_collect(level)?;
            }
            self.normalize_all();
        }
        Ok(())
    }

    /// Downward sweep: from level 1 down to the deepest level. Per-level
    /// renormalization is optional here; the collect sweep already keeps
    /// the magnitudes in range.
    fn distribute(&mut self) -> Result<(), InferenceError> {
        let max_level = self.levels.len();
        for level in 1..max_level {
            if level % 2 == 1 {
                self.separator_level(level, MessageSource::Upstream)?;
            } else {
                self.clique_level_distribute(level)?;
            }
            if self.options.normalize_on_distribute {
                self.normalize_all();
            }
        }
        Ok(())
    }

    /// One separator level: every separator saves its table, receives the
    /// marginal of its source clique over the separator scope, and divides
    /// by the saved table.
    fn separator_level(
        &mut self,
        level: usize,
        source: MessageSource,
    ) -> Result<(), InferenceError> {
        let separators = self.levels[level].clone();

        let mut sources = Vec::with_capacity(separators.len());
        let mut plans = Vec::with_capacity(separators.len());
        let mut cum_sum = Vec::with_capacity(separators.len() + 1);
        cum_sum.push(0usize);
        for &s in &separators {
            let src = match source {
                // a separator has exactly one child clique
                MessageSource::Downstream => self.nodes[s].downstream[0],
                MessageSource::Upstream => self.nodes[s]
                    .upstream
                    .expect("a separator is never a root, so it has an upstream clique"),
            };
            let plan = self.nodes[src]
                .table
                .marginalize_to_pre(self.nodes[s].table.variables())?;
            cum_sum.push(cum_sum.last().copied().unwrap_or(0) + plan.new_size());
            sources.push(src);
            plans.push(plan);
        }
        let total = *cum_sum.last().unwrap_or(&0);

        let nodes = &self.nodes;
        let flat = exec::map_flat(total, |s| {
            let j = exec::locate(&cum_sum, s);
            let k = s - cum_sum[j];
            plans[j].row_value(nodes[sources[j]].table.as_slice(), k)
        });

        for (j, plan) in plans.into_iter().enumerate() {
            let s = separators[j];
            let message = plan.into_table(flat[cum_sum[j]..cum_sum[j + 1]].to_vec());
            self.nodes[s].update_message(message)?;

            let old = self.nodes[s]
                .old_table
                .take()
                .expect("the separator saved its previous table");
            self.nodes[s].table.divide_assign(&old)?;
            self.nodes[s].old_table = Some(old);
        }
        Ok(())
    }

    /// One clique level of the collect sweep. A clique can have several
    /// downstream separators; round k processes the k-th child of every
    /// clique in the level that has one, so each clique's table is updated
    /// once per round.
    fn clique_level_collect(&mut self, level: usize) -> Result<(), InferenceError> {
        let cliques = self.levels[level].clone();
        let max_children = cliques
            .iter()
            .map(|&c| self.nodes[c].downstream.len())
            .max()
            .unwrap_or(0);

        for k in 0..max_children {
            let pairs: Vec<(usize, usize)> = cliques
                .iter()
                .filter(|&&c| self.nodes[c].downstream.len() > k)
                .map(|&c| (c, self.nodes[c].downstream[k]))
                .collect();
            self.clique_level_pairs(&pairs)?;
        }
        Ok(())
    }

    /// One clique level of the distribute sweep: every clique receives the
    /// message of its upstream separator.
    fn clique_level_distribute(&mut self, level: usize) -> Result<(), InferenceError> {
        let pairs: Vec<(usize, usize)> = self.levels[level]
            .iter()
            .map(|&c| {
                let up = self.nodes[c]
                    .upstream
                    .expect("a non-root clique has an upstream separator");
                (c, up)
            })
            .collect();
        self.clique_level_pairs(&pairs)
    }

    /// Process a batch of (clique, separator) pairs: extend the separator
    /// table to the clique scope and multiply it in, fused into one
    /// gather-multiply per clique row.
    fn clique_level_pairs(&mut self, pairs: &[(usize, usize)]) -> Result<(), InferenceError> {
        let mut plans = Vec::with_capacity(pairs.len());
        let mut cum_sum = Vec::with_capacity(pairs.len() + 1);
        cum_sum.push(0usize);
        for &(c, s) in pairs {
            let clique_table = &self.nodes[c].table;
            let plan = self.nodes[s]
                .table
                .extend_pre(clique_table.variables(), clique_table.dims())?;
            cum_sum.push(cum_sum.last().copied().unwrap_or(0) + plan.new_size());
            plans.push(plan);
        }
        let total = *cum_sum.last().unwrap_or(&0);

        let nodes = &self.nodes;
        let flat = exec::map_flat(total, |s| {
            let j = exec::locate(&cum_sum, s);
            let k = s - cum_sum[j];
            let (c, sep) = pairs[j];
            nodes[c].table.as_slice()[k] * nodes[sep].table.as_slice()[plans[j].source_index(k)]
        });

        for (j, &(c, _)) in pairs.iter().enumerate() {
            self.nodes[c]
                .table
                .set_potentials(flat[cum_sum[j]..cum_sum[j + 1]].to_vec())?;
        }
        Ok(())
    }

    /// Renormalize every clique and separator, independently per node.
    pub(crate) fn normalize_all(&mut self) {
        exec::for_each_mut(&mut self.nodes, |node| {
            node.table.normalize();
        });
    }
}
