/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use super::PotentialTable;

impl PotentialTable {
    #[inline(always)]
    pub fn variables(&self) -> &[usize] {
        self.variables_ref()
    }

    #[inline(always)]
    pub fn dims(&self) -> &[usize] {
        self.dims_ref()
    }

    #[inline(always)]
    pub fn cum_levels(&self) -> &[usize] {
        self.cum_levels_ref()
    }

    /// The number of variables in the table's scope, i.e. the clique size.
    #[inline(always)]
    pub fn num_variables(&self) -> usize {
        self.variables_ref().len()
    }

    /// The number of table entries, i.e. the product of all domain sizes.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.potentials_ref().len()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[f64] {
        self.potentials_ref()
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&f64> {
        self.potentials_ref().get(index)
    }

    /// The sum of all potential entries.
    pub fn sum(&self) -> f64 {
        self.potentials_ref().iter().sum()
    }

    /// True if the variable is part of the table's scope.
    pub fn contains(&self, variable: usize) -> bool {
        self.variables_ref().contains(&variable)
    }

    /// True if every given variable is part of the table's scope.
    pub fn contains_all(&self, variables: &[usize]) -> bool {
        variables.iter().all(|v| self.contains(*v))
    }

    /// The position of the variable within the ordered variable tuple.
    pub fn position(&self, variable: usize) -> Option<usize> {
        self.variables_ref().iter().position(|v| *v == variable)
    }

    /// The domain size of one scope variable.
    pub fn dim_of(&self, variable: usize) -> Option<usize> {
        self.position(variable).map(|loc| self.dims_ref()[loc])
    }
}
