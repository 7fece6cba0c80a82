/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.
 */

use bayes_network::{Evidence, EvidencePolicy};

#[test]
fn test_empty_evidence() {
    let evidence = Evidence::new();
    assert!(evidence.is_empty());
    assert_eq!(evidence.len(), 0);
    assert_eq!(evidence.value_of(0), None);
    assert!(!evidence.contains(0));
}

#[test]
fn test_set_and_lookup() {
    let mut evidence = Evidence::new();
    evidence.set(3, 1);
    evidence.set(0, 2);

    assert_eq!(evidence.len(), 2);
    assert_eq!(evidence.value_of(3), Some(1));
    assert_eq!(evidence.value_of(0), Some(2));
    assert!(evidence.contains(3));
    assert!(!evidence.contains(1));
}

#[test]
fn test_set_overwrites_earlier_observation() {
    let mut evidence = Evidence::new();
    evidence.set(3, 1);
    evidence.set(3, 0);

    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence.value_of(3), Some(0));
}

#[test]
fn test_iteration_keeps_insertion_order() {
    let mut evidence = Evidence::new();
    evidence.set(5, 0);
    evidence.set(2, 1);
    evidence.set(9, 1);

    let pairs: Vec<(usize, usize)> = evidence.iter().collect();
    assert_eq!(pairs, vec![(5, 0), (2, 1), (9, 1)]);
}

#[test]
fn test_from_pairs() {
    let evidence = Evidence::from(&[(0, 1), (2, 0), (0, 0)][..]);
    assert_eq!(evidence.len(), 2);
    // the later duplicate wins
    assert_eq!(evidence.value_of(0), Some(0));
    assert_eq!(evidence.value_of(2), Some(0));
}

#[test]
fn test_from_iterator() {
    let evidence: Evidence = vec![(1, 1), (4, 2)].into_iter().collect();
    assert_eq!(evidence.len(), 2);
    assert_eq!(evidence.value_of(4), Some(2));
}

#[test]
fn test_default_policy_is_drop() {
    assert_eq!(EvidencePolicy::default(), EvidencePolicy::Drop);
}
