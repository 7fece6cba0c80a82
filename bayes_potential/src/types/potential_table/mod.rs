/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use crate::errors::PotentialTableError;

mod getters;
mod indexing;
mod op_arithmetic;
mod op_extend;
mod op_marginalize;
mod op_reduce;
mod op_reorganize;

pub use op_extend::ExtendPlan;
pub use op_marginalize::MarginalizePlan;
pub use op_reduce::ReducePlan;
pub use op_reorganize::ReorganizePlan;

/// The derived storage layout of a potential table: an ordered variable
/// tuple, the domain size of each variable, and the mixed-radix strides.
///
/// `cum_levels[n - 1] == 1` and `cum_levels[i] == cum_levels[i + 1] * dims[i + 1]`,
/// so the entry at linear index `k` encodes the configuration whose i-th
/// coordinate is `(k / cum_levels[i]) % dims[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub(crate) variables: Vec<usize>,
    pub(crate) dims: Vec<usize>,
    pub(crate) cum_levels: Vec<usize>,
}

impl TableLayout {
    pub(crate) fn new(
        variables: Vec<usize>,
        dims: Vec<usize>,
    ) -> Result<Self, PotentialTableError> {
        if variables.len() != dims.len() {
            return Err(PotentialTableError::ShapeMismatch);
        }
        for (i, &v) in variables.iter().enumerate() {
            if variables[..i].contains(&v) {
                return Err(PotentialTableError::DuplicateVariable(v));
            }
            if dims[i] == 0 {
                return Err(PotentialTableError::ZeroDimension(v));
            }
        }
        let cum_levels = cum_levels_of(&dims);
        Ok(Self {
            variables,
            dims,
            cum_levels,
        })
    }

    pub fn variables(&self) -> &[usize] {
        &self.variables
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn size(&self) -> usize {
        self.dims.iter().product()
    }
}

/// Compute the mixed-radix strides for a dimension tuple, right to left.
pub(crate) fn cum_levels_of(dims: &[usize]) -> Vec<usize> {
    let n = dims.len();
    let mut cum = vec![1; n];
    for i in (0..n.saturating_sub(1)).rev() {
        cum[i] = cum[i + 1] * dims[i + 1];
    }
    cum
}

/// A dense, non-negative potential over an ordered tuple of discrete
/// variables.
///
/// The variable order defines the mixed-radix storage layout; the scope
/// (the unordered variable set) is recovered through membership queries on
/// the ordered tuple. The empty scope is valid and holds exactly one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialTable {
    variables: Vec<usize>,
    dims: Vec<usize>,
    cum_levels: Vec<usize>,
    potentials: Vec<f64>,
}

impl PotentialTable {
    /// Build a table from an ordered variable tuple, the matching domain
    /// sizes, and a dense potentials array in mixed-radix order.
    pub fn new(
        variables: Vec<usize>,
        dims: Vec<usize>,
        potentials: Vec<f64>,
    ) -> Result<Self, PotentialTableError> {
        let layout = TableLayout::new(variables, dims)?;
        if potentials.len() != layout.size() {
            return Err(PotentialTableError::ShapeMismatch);
        }
        if !potentials.iter().all(|p| *p >= 0.0) {
            return Err(PotentialTableError::NegativePotential);
        }
        Ok(Self::from_layout(layout, potentials))
    }

    /// Build the all-ones potential over the given variables.
    pub fn unit(variables: Vec<usize>, dims: Vec<usize>) -> Result<Self, PotentialTableError> {
        let layout = TableLayout::new(variables, dims)?;
        let size = layout.size();
        Ok(Self::from_layout(layout, vec![1.0; size]))
    }

    /// Build the scalar table over the empty scope holding the given value.
    pub fn scalar(value: f64) -> Result<Self, PotentialTableError> {
        Self::new(Vec::new(), Vec::new(), vec![value])
    }

    /// Build a table from a conditional probability table.
    ///
    /// The variable order is `parents ++ [node]`, matching the natural
    /// row-major CPT layout: the rows are indexed by the parents' joint
    /// configuration and the node's value is the fastest-varying digit.
    pub fn from_cpt(
        node: usize,
        node_dim: usize,
        parents: &[usize],
        parent_dims: &[usize],
        cpt: &[f64],
    ) -> Result<Self, PotentialTableError> {
        if parents.len() != parent_dims.len() {
            return Err(PotentialTableError::ShapeMismatch);
        }
        let mut variables = parents.to_vec();
        variables.push(node);
        let mut dims = parent_dims.to_vec();
        dims.push(node_dim);
        Self::new(variables, dims, cpt.to_vec())
    }

    /// Build a unit-mass potential over a single variable: one at the given
    /// value, zero elsewhere.
    pub fn delta(variable: usize, dim: usize, value: usize) -> Result<Self, PotentialTableError> {
        if value >= dim {
            return Err(PotentialTableError::ValueOutOfRange {
                variable,
                value,
                dim,
            });
        }
        let mut potentials = vec![0.0; dim];
        potentials[value] = 1.0;
        Self::new(vec![variable], vec![dim], potentials)
    }

    pub(crate) fn from_layout(layout: TableLayout, potentials: Vec<f64>) -> Self {
        debug_assert_eq!(layout.size(), potentials.len());
        Self {
            variables: layout.variables,
            dims: layout.dims,
            cum_levels: layout.cum_levels,
            potentials,
        }
    }

    /// Replace the potentials array, keeping the layout.
    pub fn set_potentials(&mut self, potentials: Vec<f64>) -> Result<(), PotentialTableError> {
        if potentials.len() != self.potentials.len() {
            return Err(PotentialTableError::ShapeMismatch);
        }
        self.potentials = potentials;
        Ok(())
    }

    pub(crate) fn variables_ref(&self) -> &Vec<usize> {
        &self.variables
    }

    pub(crate) fn dims_ref(&self) -> &Vec<usize> {
        &self.dims
    }

    pub(crate) fn cum_levels_ref(&self) -> &Vec<usize> {
        &self.cum_levels
    }

    pub(crate) fn potentials_ref(&self) -> &Vec<f64> {
        &self.potentials
    }

    pub(crate) fn potentials_mut_ref(&mut self) -> &mut Vec<f64> {
        &mut self.potentials
    }
}
