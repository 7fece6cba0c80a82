/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use bayes_potential::PotentialTableError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// An evidence variable index lies outside the network (surfaced only
    /// under the `Fail` evidence policy).
    EvidenceVariableOutOfRange { variable: usize, num_variables: usize },
    /// An evidence value lies outside the variable's domain (surfaced only
    /// under the `Fail` evidence policy).
    EvidenceValueOutOfRange {
        variable: usize,
        value: usize,
        domain_size: usize,
    },
    /// The query variable index lies outside the network.
    QueryVariableOutOfRange { variable: usize, num_variables: usize },
    /// The query variable is itself part of the evidence.
    QueryVariableObserved { variable: usize },
    /// The evidence has zero probability under the network, so no posterior
    /// exists (the prediction case; `posterior` reports this through the
    /// degeneracy flag instead).
    DegenerateEvidence,
    /// A table operation failed during propagation.
    Table(PotentialTableError),
}

impl Error for InferenceError {}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InferenceError::EvidenceVariableOutOfRange {
                variable,
                num_variables,
            } => {
                write!(
                    f,
                    "InferenceError: Evidence variable {variable} out of range for network with {num_variables} variables"
                )
            }
            InferenceError::EvidenceValueOutOfRange {
                variable,
                value,
                domain_size,
            } => {
                write!(
                    f,
                    "InferenceError: Evidence value {value} out of range for variable {variable} with domain size {domain_size}"
                )
            }
            InferenceError::QueryVariableOutOfRange {
                variable,
                num_variables,
            } => {
                write!(
                    f,
                    "InferenceError: Query variable {variable} out of range for network with {num_variables} variables"
                )
            }
            InferenceError::QueryVariableObserved { variable } => {
                write!(
                    f,
                    "InferenceError: Query variable {variable} is observed as evidence"
                )
            }
            InferenceError::DegenerateEvidence => {
                write!(
                    f,
                    "InferenceError: Evidence has zero probability under the network"
                )
            }
            InferenceError::Table(e) => write!(f, "InferenceError: {e}"),
        }
    }
}

impl From<PotentialTableError> for InferenceError {
    fn from(err: PotentialTableError) -> Self {
        InferenceError::Table(err)
    }
}
