/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use super::{cum_levels_of, PotentialTable, TableLayout};
use crate::errors::PotentialTableError;

#[derive(Debug, Clone)]
enum MarginalizeKind {
    /// The kept variables are exactly the trailing variables of the source
    /// table, so the source row of new index `i` at summation step `t` is
    /// `t * new_size + i` and the sum is a contiguous strided walk.
    TrailingSuffix,
    /// General gather: decode the new index, re-encode the kept digits
    /// against the source strides, then walk the eliminated block.
    General {
        kept_strides: Vec<usize>,
        elim_cum: Vec<usize>,
        elim_strides: Vec<usize>,
    },
}

/// The pre-computed layout and index mappings for one marginalization.
///
/// The main phase iterates the new table's linear indices; each row value
/// is the sum of the source entries over every configuration of the
/// eliminated variables.
#[derive(Debug, Clone)]
pub struct MarginalizePlan {
    layout: TableLayout,
    elim_size: usize,
    kind: MarginalizeKind,
}

impl MarginalizePlan {
    /// The size of the marginalized table.
    #[inline(always)]
    pub fn new_size(&self) -> usize {
        self.layout.size()
    }

    /// Compute the value of one row of the new table by summing the source
    /// entries of the eliminated block.
    pub fn row_value(&self, source: &[f64], new_index: usize) -> f64 {
        match &self.kind {
            MarginalizeKind::TrailingSuffix => {
                let new_size = self.layout.size();
                let mut sum = 0.0;
                for t in 0..self.elim_size {
                    sum += source[t * new_size + new_index];
                }
                sum
            }
            MarginalizeKind::General {
                kept_strides,
                elim_cum,
                elim_strides,
            } => {
                let mut base = 0;
                let mut rem = new_index;
                for (j, &cl) in self.layout.cum_levels.iter().enumerate() {
                    base += (rem / cl) * kept_strides[j];
                    rem %= cl;
                }
                let mut sum = 0.0;
                for t in 0..self.elim_size {
                    let mut offset = 0;
                    let mut r = t;
                    for (m, &cl) in elim_cum.iter().enumerate() {
                        offset += (r / cl) * elim_strides[m];
                        r %= cl;
                    }
                    sum += source[base + offset];
                }
                sum
            }
        }
    }

    /// Install the layout around a freshly computed potentials array.
    pub fn into_table(self, potentials: Vec<f64>) -> PotentialTable {
        PotentialTable::from_layout(self.layout, potentials)
    }
}

impl PotentialTable {
    /// Pre-phase of marginalization down to a target variable tuple: compute
    /// the target layout and the index mappings from target rows to the
    /// eliminated blocks of this table.
    ///
    /// The target must be a sub-tuple of this table's scope; the resulting
    /// table carries the target's exact variable order.
    pub fn marginalize_to_pre(
        &self,
        target_variables: &[usize],
    ) -> Result<MarginalizePlan, PotentialTableError> {
        let mut positions = Vec::with_capacity(target_variables.len());
        for (i, &v) in target_variables.iter().enumerate() {
            if target_variables[..i].contains(&v) {
                return Err(PotentialTableError::DuplicateVariable(v));
            }
            let loc = self
                .position(v)
                .ok_or(PotentialTableError::VariableNotFound(v))?;
            positions.push(loc);
        }

        let target_dims: Vec<usize> = positions.iter().map(|&loc| self.dims_ref()[loc]).collect();
        let layout = TableLayout::new(target_variables.to_vec(), target_dims)?;

        let elim_size = self.size() / layout.size();

        // the hot path after storage reorganization: the kept variables sit
        // at the end of the source tuple in the same order
        if self.variables_ref().ends_with(target_variables) {
            return Ok(MarginalizePlan {
                layout,
                elim_size,
                kind: MarginalizeKind::TrailingSuffix,
            });
        }

        let kept_strides: Vec<usize> = positions
            .iter()
            .map(|&loc| self.cum_levels_ref()[loc])
            .collect();
        let mut elim_dims = Vec::new();
        let mut elim_strides = Vec::new();
        for (loc, &v) in self.variables_ref().iter().enumerate() {
            if !target_variables.contains(&v) {
                elim_dims.push(self.dims_ref()[loc]);
                elim_strides.push(self.cum_levels_ref()[loc]);
            }
        }
        let elim_cum = cum_levels_of(&elim_dims);

        Ok(MarginalizePlan {
            layout,
            elim_size,
            kind: MarginalizeKind::General {
                kept_strides,
                elim_cum,
                elim_strides,
            },
        })
    }

    /// Sum out every variable outside the target tuple; the result carries
    /// the target's exact variable order.
    pub fn marginalize_to(
        &self,
        target_variables: &[usize],
    ) -> Result<PotentialTable, PotentialTableError> {
        let plan = self.marginalize_to_pre(target_variables)?;
        let source = self.potentials_ref();
        let potentials = (0..plan.new_size())
            .map(|i| plan.row_value(source, i))
            .collect();
        Ok(plan.into_table(potentials))
    }

    /// Drop one variable by summing over its values; the remaining variables
    /// keep their relative order.
    pub fn marginalize(&self, variable: usize) -> Result<PotentialTable, PotentialTableError> {
        if !self.contains(variable) {
            return Err(PotentialTableError::VariableNotFound(variable));
        }
        let target: Vec<usize> = self
            .variables_ref()
            .iter()
            .copied()
            .filter(|v| *v != variable)
            .collect();
        self.marginalize_to(&target)
    }
}
