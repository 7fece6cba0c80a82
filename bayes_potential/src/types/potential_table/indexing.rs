/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use super::PotentialTable;
use crate::errors::PotentialTableError;

impl PotentialTable {
    /// Decode a linear table index into the configuration it encodes, one
    /// value per scope variable in tuple order.
    ///
    /// Repeated division by the strides yields the digits left to right.
    pub fn config_of(&self, index: usize) -> Result<Vec<usize>, PotentialTableError> {
        if index >= self.size() {
            return Err(PotentialTableError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        let mut config = vec![0; self.num_variables()];
        let mut rem = index;
        for (i, &cl) in self.cum_levels_ref().iter().enumerate() {
            config[i] = rem / cl;
            rem %= cl;
        }
        Ok(config)
    }

    /// Encode a configuration (one value per scope variable in tuple order)
    /// into its linear table index.
    pub fn index_of(&self, config: &[usize]) -> Result<usize, PotentialTableError> {
        if config.len() != self.num_variables() {
            return Err(PotentialTableError::ShapeMismatch);
        }
        let mut index = 0;
        for (i, &value) in config.iter().enumerate() {
            if value >= self.dims_ref()[i] {
                return Err(PotentialTableError::ValueOutOfRange {
                    variable: self.variables_ref()[i],
                    value,
                    dim: self.dims_ref()[i],
                });
            }
            index += value * self.cum_levels_ref()[i];
        }
        Ok(index)
    }
}
