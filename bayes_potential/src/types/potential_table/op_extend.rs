/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use super::{PotentialTable, TableLayout};
use crate::errors::PotentialTableError;

#[derive(Debug, Clone)]
enum ExtendKind {
    /// The source variables are exactly the trailing variables of the new
    /// tuple, so the source row of new index `i` is `i % source_size` and
    /// the extension is a strided broadcast.
    TrailingSuffix { source_size: usize },
    /// General gather: decode the new index and re-encode against the
    /// source strides; positions carrying a new variable contribute zero.
    General { source_strides: Vec<usize> },
}

/// The pre-computed layout and index mapping for one extension.
///
/// Extension projects a table onto a superset scope by replicating values;
/// the main phase iterates the new table's linear indices and reads the
/// corresponding source entry.
#[derive(Debug, Clone)]
pub struct ExtendPlan {
    layout: TableLayout,
    kind: ExtendKind,
}

impl ExtendPlan {
    /// The size of the extended table.
    #[inline(always)]
    pub fn new_size(&self) -> usize {
        self.layout.size()
    }

    /// Map an extended-table index to the source index in the old table.
    #[inline(always)]
    pub fn source_index(&self, new_index: usize) -> usize {
        match &self.kind {
            ExtendKind::TrailingSuffix { source_size } => new_index % source_size,
            ExtendKind::General { source_strides } => {
                let mut index = 0;
                let mut rem = new_index;
                for (p, &cl) in self.layout.cum_levels.iter().enumerate() {
                    index += (rem / cl) * source_strides[p];
                    rem %= cl;
                }
                index
            }
        }
    }

    /// Install the layout around a freshly computed potentials array.
    pub fn into_table(self, potentials: Vec<f64>) -> PotentialTable {
        PotentialTable::from_layout(self.layout, potentials)
    }
}

impl PotentialTable {
    /// Pre-phase of extension onto a superset scope: compute the new layout
    /// and the per-position source strides of the index mapping.
    pub fn extend_pre(
        &self,
        new_variables: &[usize],
        new_dims: &[usize],
    ) -> Result<ExtendPlan, PotentialTableError> {
        let layout = TableLayout::new(new_variables.to_vec(), new_dims.to_vec())?;

        // every source variable must appear in the new tuple, with its dim
        for (loc, &v) in self.variables_ref().iter().enumerate() {
            match layout.variables.iter().position(|nv| *nv == v) {
                Some(p) if layout.dims[p] == self.dims_ref()[loc] => {}
                _ => return Err(PotentialTableError::ScopeMismatch),
            }
        }

        if new_variables.ends_with(self.variables_ref()) {
            return Ok(ExtendPlan {
                layout,
                kind: ExtendKind::TrailingSuffix {
                    source_size: self.size(),
                },
            });
        }

        let mut source_strides = vec![0; layout.variables.len()];
        for (loc, &v) in self.variables_ref().iter().enumerate() {
            let p = layout
                .variables
                .iter()
                .position(|nv| *nv == v)
                .expect("source variable present in the new tuple");
            source_strides[p] = self.cum_levels_ref()[loc];
        }

        Ok(ExtendPlan {
            layout,
            kind: ExtendKind::General { source_strides },
        })
    }

    /// Project the table onto a superset scope by replicating values.
    ///
    /// A no-op (plain copy) when the new tuple equals the current one.
    pub fn extend(
        &self,
        new_variables: &[usize],
        new_dims: &[usize],
    ) -> Result<PotentialTable, PotentialTableError> {
        if new_variables == self.variables() {
            if new_dims != self.dims() {
                return Err(PotentialTableError::ScopeMismatch);
            }
            return Ok(self.clone());
        }
        let plan = self.extend_pre(new_variables, new_dims)?;
        let source = self.potentials_ref();
        let potentials = (0..plan.new_size())
            .map(|i| source[plan.source_index(i)])
            .collect();
        Ok(plan.into_table(potentials))
    }
}
