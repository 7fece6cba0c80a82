/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use super::{PotentialTable, TableLayout};
use crate::errors::PotentialTableError;

/// The pre-computed layout and index arithmetic for one reduction.
///
/// Reduction drops one variable and keeps only the entries consistent with
/// the observed value, shrinking the table by the variable's domain size.
/// With `inner` the stride of the reduced variable, the source row of new
/// index `i` is `(i / inner) * inner * dim + value * inner + i % inner`,
/// so the main phase needs no digit decoding at all.
#[derive(Debug, Clone)]
pub struct ReducePlan {
    layout: TableLayout,
    inner: usize,
    expand: usize,
    offset: usize,
}

impl ReducePlan {
    /// The size of the reduced table.
    #[inline(always)]
    pub fn new_size(&self) -> usize {
        self.layout.size()
    }

    /// Map a reduced-table index to the source index in the old table.
    #[inline(always)]
    pub fn source_index(&self, new_index: usize) -> usize {
        (new_index / self.inner) * self.expand + self.offset + new_index % self.inner
    }

    /// Install the layout around a freshly computed potentials array.
    pub fn into_table(self, potentials: Vec<f64>) -> PotentialTable {
        PotentialTable::from_layout(self.layout, potentials)
    }
}

impl PotentialTable {
    /// Pre-phase of reduction: compute the reduced layout and the stride
    /// arithmetic of the index mapping.
    pub fn reduce_pre(
        &self,
        variable: usize,
        value: usize,
    ) -> Result<ReducePlan, PotentialTableError> {
        let loc = self
            .position(variable)
            .ok_or(PotentialTableError::VariableNotFound(variable))?;
        let dim = self.dims_ref()[loc];
        if value >= dim {
            return Err(PotentialTableError::ValueOutOfRange {
                variable,
                value,
                dim,
            });
        }

        let mut variables = self.variables_ref().clone();
        variables.remove(loc);
        let mut dims = self.dims_ref().clone();
        dims.remove(loc);
        let layout = TableLayout::new(variables, dims)?;

        let inner = self.cum_levels_ref()[loc];
        Ok(ReducePlan {
            layout,
            inner,
            expand: inner * dim,
            offset: value * inner,
        })
    }

    /// Drop the variable from the scope, keeping only the entries where it
    /// takes the observed value.
    pub fn reduce(
        &self,
        variable: usize,
        value: usize,
    ) -> Result<PotentialTable, PotentialTableError> {
        let plan = self.reduce_pre(variable, value)?;
        let old = self.potentials_ref();
        let potentials = (0..plan.new_size())
            .map(|i| old[plan.source_index(i)])
            .collect();
        Ok(plan.into_table(potentials))
    }
}
