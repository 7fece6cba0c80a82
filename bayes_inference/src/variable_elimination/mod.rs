/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

//! Sum-product variable elimination: a second exact-inference backend over
//! the same potential-table kernel.
//!
//! Each query starts from one factor per network variable (its CPT),
//! applies the evidence by reduction, and eliminates the remaining
//! variables along the reverse topological order; eliminating a variable
//! multiplies the factors containing it over their union scope and sums it
//! out. The factors left at the end cover at most the query variable and
//! multiply into the posterior.

use bayes_network::{topological_order, Evidence, EvidencePolicy, NetworkError, NetworkView};
use bayes_potential::{PotentialTable, PotentialTableError};

use crate::errors::InferenceError;
use crate::types::posterior::Posterior;

pub struct VariableElimination<'a, N>
where
    N: NetworkView + ?Sized,
{
    network: &'a N,
    order: Vec<usize>,
    policy: EvidencePolicy,
}

impl<'a, N> VariableElimination<'a, N>
where
    N: NetworkView + ?Sized,
{
    pub fn new(network: &'a N) -> Result<Self, NetworkError> {
        Self::with_policy(network, EvidencePolicy::default())
    }

    pub fn with_policy(network: &'a N, policy: EvidencePolicy) -> Result<Self, NetworkError> {
        let order = topological_order(network)?;
        Ok(Self {
            network,
            order,
            policy,
        })
    }

    /// The elimination order: the reverse topological order, with evidence
    /// and query variables skipped at query time.
    pub fn elimination_order(&self) -> &[usize] {
        &self.order
    }

    /// Posterior of the query variable given the evidence.
    pub fn posterior(
        &self,
        evidence: &Evidence,
        query: usize,
    ) -> Result<Posterior, InferenceError> {
        let n = self.network.num_variables();
        if query >= n {
            return Err(InferenceError::QueryVariableOutOfRange {
                variable: query,
                num_variables: n,
            });
        }

        let observed = self.screen_evidence(evidence)?;
        if observed.contains(query) {
            return Err(InferenceError::QueryVariableObserved { variable: query });
        }

        let mut factors = self.build_factors()?;

        // apply the evidence to every factor mentioning an observed variable
        for (variable, value) in observed.iter() {
            for factor in factors.iter_mut() {
                if factor.contains(variable) {
                    *factor = factor.reduce(variable, value)?;
                }
            }
        }

        // eliminate along the reverse topological order
        for &variable in self.order.iter().rev() {
            if variable == query || observed.contains(variable) {
                continue;
            }
            let (with, without): (Vec<PotentialTable>, Vec<PotentialTable>) = factors
                .into_iter()
                .partition(|factor| factor.contains(variable));
            let product = multiply_factors(&with)?;
            factors = without;
            factors.push(product.marginalize(variable)?);
        }

        let mut result = multiply_factors(&factors)?.marginalize_to(&[query])?;
        let sum = result.normalize();
        Ok(Posterior::new(result.as_slice().to_vec(), sum == 0.0))
    }

    /// The most probable value of the query variable given the evidence.
    pub fn predict(&self, evidence: &Evidence, query: usize) -> Result<usize, InferenceError> {
        let posterior = self.posterior(evidence, query)?;
        posterior.argmax().ok_or(InferenceError::DegenerateEvidence)
    }

    /// Validate the evidence against the network, dropping or rejecting
    /// out-of-range pairs per the configured policy.
    fn screen_evidence(&self, evidence: &Evidence) -> Result<Evidence, InferenceError> {
        let n = self.network.num_variables();
        let mut observed = Evidence::new();
        for (variable, value) in evidence.iter() {
            let err = if variable >= n {
                Some(InferenceError::EvidenceVariableOutOfRange {
                    variable,
                    num_variables: n,
                })
            } else if value >= self.network.domain_size(variable) {
                Some(InferenceError::EvidenceValueOutOfRange {
                    variable,
                    value,
                    domain_size: self.network.domain_size(variable),
                })
            } else {
                None
            };

            match err {
                None => observed.set(variable, value),
                Some(err) => match self.policy {
                    EvidencePolicy::Drop => {
                        log::warn!("dropping evidence pair ({variable}, {value}): {err}");
                    }
                    EvidencePolicy::Fail => return Err(err),
                },
            }
        }
        Ok(observed)
    }

    fn build_factors(&self) -> Result<Vec<PotentialTable>, PotentialTableError> {
        let n = self.network.num_variables();
        let mut factors = Vec::with_capacity(n);
        for v in 0..n {
            let parent_dims: Vec<usize> = self
                .network
                .parents(v)
                .iter()
                .map(|&p| self.network.domain_size(p))
                .collect();
            factors.push(PotentialTable::from_cpt(
                v,
                self.network.domain_size(v),
                self.network.parents(v),
                &parent_dims,
                self.network.cpt(v),
            )?);
        }
        Ok(factors)
    }
}

/// Multiply a factor list over the union of their scopes (sorted order).
/// An empty list yields the scalar one.
fn multiply_factors(factors: &[PotentialTable]) -> Result<PotentialTable, PotentialTableError> {
    let mut variables: Vec<usize> = factors
        .iter()
        .flat_map(|f| f.variables().iter().copied())
        .collect();
    variables.sort_unstable();
    variables.dedup();

    let dims: Vec<usize> = variables
        .iter()
        .map(|&v| {
            factors
                .iter()
                .find_map(|f| f.dim_of(v))
                .expect("union variable comes from some factor")
        })
        .collect();

    let mut product = PotentialTable::unit(variables.clone(), dims.clone())?;
    for factor in factors {
        let extended = factor.extend(&variables, &dims)?;
        product.multiply_assign(&extended)?;
    }
    Ok(product)
}
