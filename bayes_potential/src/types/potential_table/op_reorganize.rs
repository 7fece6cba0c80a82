/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use super::{PotentialTable, TableLayout};
use crate::errors::PotentialTableError;

/// The pre-computed layout and index mapping for one storage
/// reorganization.
///
/// Reorganization permutes the variable tuple, and with it the potentials
/// array, without changing the scope or any entry value.
#[derive(Debug, Clone)]
pub struct ReorganizePlan {
    layout: TableLayout,
    source_strides: Vec<usize>,
}

impl ReorganizePlan {
    /// The size of the reorganized table (unchanged by the permutation).
    #[inline(always)]
    pub fn new_size(&self) -> usize {
        self.layout.size()
    }

    /// Map a reorganized-table index to the source index in the old table.
    #[inline(always)]
    pub fn source_index(&self, new_index: usize) -> usize {
        let mut index = 0;
        let mut rem = new_index;
        for (p, &cl) in self.layout.cum_levels.iter().enumerate() {
            index += (rem / cl) * self.source_strides[p];
            rem %= cl;
        }
        index
    }

    /// Install the layout around a freshly computed potentials array.
    pub fn into_table(self, potentials: Vec<f64>) -> PotentialTable {
        PotentialTable::from_layout(self.layout, potentials)
    }
}

impl PotentialTable {
    /// True if the table's variable tuple already ends with the given
    /// variables in the given order.
    pub fn is_trailing(&self, trailing: &[usize]) -> bool {
        self.variables_ref().ends_with(trailing)
    }

    /// Pre-phase of reorganization: compute the permuted layout that ends
    /// with the given variables, leading variables keeping their relative
    /// order, plus the source strides of the index mapping.
    pub fn reorganize_trailing_pre(
        &self,
        trailing: &[usize],
    ) -> Result<ReorganizePlan, PotentialTableError> {
        for (i, &v) in trailing.iter().enumerate() {
            if trailing[..i].contains(&v) {
                return Err(PotentialTableError::DuplicateVariable(v));
            }
            if !self.contains(v) {
                return Err(PotentialTableError::VariableNotFound(v));
            }
        }

        let mut variables: Vec<usize> = self
            .variables_ref()
            .iter()
            .copied()
            .filter(|v| !trailing.contains(v))
            .collect();
        variables.extend_from_slice(trailing);

        let dims: Vec<usize> = variables
            .iter()
            .map(|&v| self.dim_of(v).expect("scope variable has a dim"))
            .collect();
        let source_strides: Vec<usize> = variables
            .iter()
            .map(|&v| {
                let loc = self.position(v).expect("scope variable has a position");
                self.cum_levels_ref()[loc]
            })
            .collect();
        let layout = TableLayout::new(variables, dims)?;

        Ok(ReorganizePlan {
            layout,
            source_strides,
        })
    }

    /// Rebuild the table so its variable tuple ends with the given variables
    /// in the given order. Pure permutation of the potentials array.
    pub fn reorganize_trailing(
        &self,
        trailing: &[usize],
    ) -> Result<PotentialTable, PotentialTableError> {
        if self.is_trailing(trailing) {
            return Ok(self.clone());
        }
        let plan = self.reorganize_trailing_pre(trailing)?;
        let source = self.potentials_ref();
        let potentials = (0..plan.new_size())
            .map(|i| source[plan.source_index(i)])
            .collect();
        Ok(plan.into_table(potentials))
    }
}
