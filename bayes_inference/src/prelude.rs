/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

pub use crate::errors::{InferenceError, TreeBuildError};
pub use crate::junction_tree::JunctionTree;
pub use crate::types::config::{EliminationStrategy, EngineOptions};
pub use crate::types::posterior::Posterior;
pub use crate::types::tree_node::{NodeKind, TreeNode};
pub use crate::variable_elimination::VariableElimination;

pub use bayes_network::prelude::*;
pub use bayes_potential::prelude::*;
