/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use bayes_network::NetworkError;
use bayes_potential::PotentialTableError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TreeBuildError {
    /// The network itself is malformed or unsupported.
    Network(NetworkError),
    /// A caller-supplied elimination order is not a permutation of the
    /// variable indices.
    InvalidEliminationOrder(String),
    /// A table operation failed during compilation.
    Table(PotentialTableError),
}

impl Error for TreeBuildError {}

impl fmt::Display for TreeBuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TreeBuildError::Network(e) => write!(f, "TreeBuildError: {e}"),
            TreeBuildError::InvalidEliminationOrder(reason) => {
                write!(f, "TreeBuildError: Invalid elimination order: {reason}")
            }
            TreeBuildError::Table(e) => write!(f, "TreeBuildError: {e}"),
        }
    }
}

/// This implementation allows for the automatic conversion of a
/// `NetworkError` into a `TreeBuildError`. This is essential for using the
/// `?` operator to propagate errors cleanly.
impl From<NetworkError> for TreeBuildError {
    fn from(err: NetworkError) -> Self {
        TreeBuildError::Network(err)
    }
}

impl From<PotentialTableError> for TreeBuildError {
    fn from(err: PotentialTableError) -> Self {
        TreeBuildError::Table(err)
    }
}
