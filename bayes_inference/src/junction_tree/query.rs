/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

//! Posterior extraction from a propagated tree, plus the one-shot query
//! drivers that bracket load / propagate / extract with a reset.

use bayes_network::Evidence;

use crate::errors::InferenceError;
use crate::junction_tree::JunctionTree;
use crate::types::posterior::Posterior;

impl JunctionTree {
    /// The posterior marginal of one variable, read off the already
    /// propagated tree.
    ///
    /// Picks the smallest-scope clique containing the variable and
    /// marginalizes its table down to the variable. Zero-probability
    /// evidence yields the all-zero vector with the degeneracy flag set.
    pub fn marginal(&self, query: usize) -> Result<Posterior, InferenceError> {
        let num_variables = self.domain_sizes.len();
        if query >= num_variables {
            return Err(InferenceError::QueryVariableOutOfRange {
                variable: query,
                num_variables,
            });
        }

        // the smallest covering clique minimizes the summation work
        let clique = self
            .nodes
            .iter()
            .filter(|node| !node.is_separator() && node.table.contains(query))
            .min_by_key(|node| node.table.num_variables());

        let Some(clique) = clique else {
            // evidence reduction removed the variable from every scope
            return Err(InferenceError::QueryVariableObserved { variable: query });
        };

        let mut marginal = clique.table.marginalize_to(&[query])?;
        let sum = marginal.normalize();
        Ok(Posterior::new(
            marginal.as_slice().to_vec(),
            sum == 0.0,
        ))
    }

    /// Posterior of the query variable given the evidence: load, propagate,
    /// extract, then reset the tree for the next query.
    pub fn posterior(
        &mut self,
        evidence: &Evidence,
        query: usize,
    ) -> Result<Posterior, InferenceError> {
        self.guard_query(evidence, query)?;
        let result = self.run_query(evidence, query);
        self.reset();
        result
    }

    /// The most probable value of the query variable given the evidence.
    /// Ties break toward the lowest value index; zero-probability evidence
    /// is an error here.
    pub fn predict(&mut self, evidence: &Evidence, query: usize) -> Result<usize, InferenceError> {
        let posterior = self.posterior(evidence, query)?;
        posterior.argmax().ok_or(InferenceError::DegenerateEvidence)
    }

    /// Posteriors of every non-evidence variable from one propagation: the
    /// tree is propagated once and each variable is read off it in turn.
    pub fn posterior_all(
        &mut self,
        evidence: &Evidence,
    ) -> Result<Vec<(usize, Posterior)>, InferenceError> {
        let result = self.run_all(evidence);
        self.reset();
        result
    }

    fn guard_query(&self, evidence: &Evidence, query: usize) -> Result<(), InferenceError> {
        let num_variables = self.domain_sizes.len();
        if query >= num_variables {
            return Err(InferenceError::QueryVariableOutOfRange {
                variable: query,
                num_variables,
            });
        }
        // a pair the evidence policy will drop does not observe the variable
        if let Some(value) = evidence.value_of(query) {
            if self.validate_pair(query, value).is_ok() {
                return Err(InferenceError::QueryVariableObserved { variable: query });
            }
        }
        Ok(())
    }

    fn run_query(
        &mut self,
        evidence: &Evidence,
        query: usize,
    ) -> Result<Posterior, InferenceError> {
        self.load_evidence(evidence)?;
        self.propagate()?;
        self.marginal(query)
    }

    fn run_all(&mut self, evidence: &Evidence) -> Result<Vec<(usize, Posterior)>, InferenceError> {
        self.load_evidence(evidence)?;
        self.propagate()?;

        let mut posteriors = Vec::new();
        for variable in 0..self.domain_sizes.len() {
            let observed = match evidence.value_of(variable) {
                Some(value) => self.validate_pair(variable, value).is_ok(),
                None => false,
            };
            if observed {
                continue;
            }
            posteriors.push((variable, self.marginal(variable)?));
        }
        Ok(posteriors)
    }
}
