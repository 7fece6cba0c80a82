/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

pub use crate::errors::PotentialTableError;
pub use crate::types::potential_table::{
    ExtendPlan, MarginalizePlan, PotentialTable, ReducePlan, ReorganizePlan, TableLayout,
};
