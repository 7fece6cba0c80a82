/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use bayes_potential::{PotentialTable, PotentialTableError};

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
    }
}

#[test]
fn test_marginalize_leading_variable() {
    let table = PotentialTable::new(
        vec![0, 1],
        vec![2, 3],
        vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
    )
    .unwrap();

    let marginal = table.marginalize(0).unwrap();
    assert_eq!(marginal.variables(), &[1]);
    assert_close(marginal.as_slice(), &[0.5, 0.7, 0.9]);
}

#[test]
fn test_marginalize_trailing_variable() {
    let table = PotentialTable::new(
        vec![0, 1],
        vec![2, 3],
        vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
    )
    .unwrap();

    let marginal = table.marginalize(1).unwrap();
    assert_eq!(marginal.variables(), &[0]);
    assert_close(marginal.as_slice(), &[0.6, 1.5]);
}

#[test]
fn test_marginalize_preserves_sum() {
    let data: Vec<f64> = (0..24).map(|i| i as f64 * 0.5).collect();
    let table = PotentialTable::new(vec![3, 1, 7], vec![2, 3, 4], data).unwrap();
    let total = table.sum();

    for &v in &[3, 1, 7] {
        let marginal = table.marginalize(v).unwrap();
        assert!((marginal.sum() - total).abs() < 1e-9);
    }
}

#[test]
fn test_marginalize_to_trailing_suffix() {
    // the kept variables are the trailing tuple, the contiguous fast path
    let data: Vec<f64> = (0..12).map(|i| i as f64).collect();
    let table = PotentialTable::new(vec![0, 1, 2], vec![2, 3, 2], data).unwrap();

    let marginal = table.marginalize_to(&[1, 2]).unwrap();
    assert_eq!(marginal.variables(), &[1, 2]);
    // entry (b, c) sums the two a values: x and x + 6
    assert_close(marginal.as_slice(), &[6.0, 8.0, 10.0, 12.0, 14.0, 16.0]);
}

#[test]
fn test_marginalize_to_reordered_target() {
    let data: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let table = PotentialTable::new(vec![0, 1, 2], vec![2, 2, 2], data).unwrap();

    // target order differs from the source order
    let marginal = table.marginalize_to(&[2, 0]).unwrap();
    assert_eq!(marginal.variables(), &[2, 0]);

    // entry (c, a) = sum over b of table[(a, b, c)]
    let direct = table.marginalize(1).unwrap(); // variables [0, 2]
    for c in 0..2 {
        for a in 0..2 {
            let lhs = marginal.as_slice()[marginal.index_of(&[c, a]).unwrap()];
            let rhs = direct.as_slice()[direct.index_of(&[a, c]).unwrap()];
            assert!((lhs - rhs).abs() < 1e-12);
        }
    }
}

#[test]
fn test_marginalize_to_whole_scope_is_identity() {
    let table = PotentialTable::new(vec![0, 1], vec![2, 2], vec![0.1, 0.2, 0.3, 0.4]).unwrap();
    let marginal = table.marginalize_to(&[0, 1]).unwrap();
    assert_eq!(marginal, table);
}

#[test]
fn test_marginalize_to_empty_scope_sums_everything() {
    let table = PotentialTable::new(vec![0, 1], vec![2, 2], vec![0.1, 0.2, 0.3, 0.4]).unwrap();
    let marginal = table.marginalize_to(&[]).unwrap();
    assert_eq!(marginal.num_variables(), 0);
    assert_eq!(marginal.size(), 1);
    assert!((marginal.as_slice()[0] - 1.0).abs() < 1e-12);
}

#[test]
fn test_marginalize_unknown_variable() {
    let table = PotentialTable::unit(vec![0], vec![2]).unwrap();
    assert_eq!(
        table.marginalize(3),
        Err(PotentialTableError::VariableNotFound(3))
    );
}

#[test]
fn test_marginalize_to_duplicate_target() {
    let table = PotentialTable::unit(vec![0, 1], vec![2, 2]).unwrap();
    assert_eq!(
        table.marginalize_to(&[0, 0]),
        Err(PotentialTableError::DuplicateVariable(0))
    );
}

#[test]
fn test_marginalize_plan_matches_whole_op() {
    let data: Vec<f64> = (0..36).map(|i| (i as f64).sqrt()).collect();
    let table = PotentialTable::new(vec![2, 0, 5], vec![3, 4, 3], data).unwrap();

    let plan = table.marginalize_to_pre(&[0]).unwrap();
    let values: Vec<f64> = (0..plan.new_size())
        .map(|i| plan.row_value(table.as_slice(), i))
        .collect();
    let from_plan = plan.into_table(values);

    assert_eq!(from_plan, table.marginalize_to(&[0]).unwrap());
}
