/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

//! Bulk-synchronous execution of the flattened per-level work.
//!
//! Each level of the tree is processed as one flat iteration space: a
//! prefix sum over the per-node output sizes concatenates the work, every
//! row is computed by a pure function of its flat index, and a barrier
//! (the end of the loop) separates the main phase from the serial
//! post-phase. With the `parallel` feature the loops run on the Rayon
//! thread pool; without it they are plain iterators with identical
//! behavior.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compute every row of a flat iteration space.
#[cfg(feature = "parallel")]
pub(crate) fn map_flat<F>(total: usize, row: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    (0..total).into_par_iter().map(row).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn map_flat<F>(total: usize, row: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    (0..total).map(row).collect()
}

/// Apply a mutation to every item, independently.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_mut<T, F>(items: &mut [T], f: F)
where
    T: Send,
    F: Fn(&mut T) + Sync + Send,
{
    items.par_iter_mut().for_each(f);
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_mut<T, F>(items: &mut [T], f: F)
where
    T: Send,
    F: Fn(&mut T) + Sync + Send,
{
    items.iter_mut().for_each(f);
}

/// Recover the owning segment of a flat index from the prefix sum of the
/// per-node sizes. `cum_sum` starts with 0 and ends with the total.
#[inline(always)]
pub(crate) fn locate(cum_sum: &[usize], flat_index: usize) -> usize {
    cum_sum.partition_point(|&start| start <= flat_index) - 1
}
