/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use bayes_potential::{PotentialTable, PotentialTableError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Clique,
    Separator,
}

/// One vertex of the junction tree.
///
/// Cliques and separators share this representation; a separator is a
/// clique-shaped node carrying the intersection scope of its two neighbor
/// cliques plus a persisted copy of its table taken before each
/// marginalization, which forms the division ratio at its next visit.
/// Neighbor, upstream and downstream relations are dense node ids into the
/// tree's node vector.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub(crate) id: usize,
    pub(crate) kind: NodeKind,
    pub(crate) table: PotentialTable,
    pub(crate) old_table: Option<PotentialTable>,
    pub(crate) neighbors: Vec<usize>,
    pub(crate) upstream: Option<usize>,
    pub(crate) downstream: Vec<usize>,
}

impl TreeNode {
    pub(crate) fn new(id: usize, kind: NodeKind, table: PotentialTable) -> Self {
        Self {
            id,
            kind,
            table,
            old_table: None,
            neighbors: Vec::new(),
            upstream: None,
            downstream: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline(always)]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline(always)]
    pub fn is_separator(&self) -> bool {
        self.kind == NodeKind::Separator
    }

    /// The node's scope as its ordered variable tuple.
    #[inline(always)]
    pub fn scope(&self) -> &[usize] {
        self.table.variables()
    }

    #[inline(always)]
    pub fn table(&self) -> &PotentialTable {
        &self.table
    }

    #[inline(always)]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    #[inline(always)]
    pub fn upstream(&self) -> Option<usize> {
        self.upstream
    }

    #[inline(always)]
    pub fn downstream(&self) -> &[usize] {
        &self.downstream
    }

    /// Receive a message table.
    ///
    /// A separator saves its current table as the division base and installs
    /// the message; a clique multiplies the message into its table, which
    /// must already share the clique's scope and order.
    pub(crate) fn update_message(
        &mut self,
        message: PotentialTable,
    ) -> Result<(), PotentialTableError> {
        match self.kind {
            NodeKind::Separator => {
                self.old_table = Some(std::mem::replace(&mut self.table, message));
                Ok(())
            }
            NodeKind::Clique => self.table.multiply_assign(&message),
        }
    }
}
