/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use super::PotentialTable;
use crate::errors::PotentialTableError;

impl PotentialTable {
    /// Pointwise product with a table over the same scope in the same order.
    pub fn multiply_assign(&mut self, other: &PotentialTable) -> Result<(), PotentialTableError> {
        if self.variables_ref() != other.variables_ref() || self.dims_ref() != other.dims_ref() {
            return Err(PotentialTableError::ScopeMismatch);
        }
        for (a, b) in self
            .potentials_mut_ref()
            .iter_mut()
            .zip(other.potentials_ref().iter())
        {
            *a *= *b;
        }
        Ok(())
    }

    /// Pointwise quotient with a table over the same scope in the same order.
    ///
    /// Zero conventions for zero-messages: `x / 0 -> 0` and `0 / x -> 0`.
    pub fn divide_assign(&mut self, other: &PotentialTable) -> Result<(), PotentialTableError> {
        if self.variables_ref() != other.variables_ref() || self.dims_ref() != other.dims_ref() {
            return Err(PotentialTableError::ScopeMismatch);
        }
        for (a, b) in self
            .potentials_mut_ref()
            .iter_mut()
            .zip(other.potentials_ref().iter())
        {
            if *b == 0.0 {
                *a = 0.0;
            } else {
                *a /= *b;
            }
        }
        Ok(())
    }

    /// Divide every entry by the sum of all entries and return the
    /// pre-normalization sum.
    ///
    /// A zero-sum table is left unchanged; the returned sum lets the caller
    /// detect that degenerate case.
    pub fn normalize(&mut self) -> f64 {
        let sum: f64 = self.potentials_ref().iter().sum();
        if sum != 0.0 {
            for p in self.potentials_mut_ref().iter_mut() {
                *p /= sum;
            }
        }
        sum
    }
}
