// SPDX-FileCopyrightText: The formula-fixtures authors
// SPDX-License-Identifier: MPL-2.0

// Exact comparisons are intentional where the summands are representable.
#![allow(clippy::float_cmp)]

use super::{
    euler_identity,
    zeta::{ZETA_2, partial_sum},
    zeta_function,
};

#[test]
fn euler_identity_residue_is_almost_zero() {
    let residue = euler_identity();
    assert!(residue.re.abs() < 1e-9);
    assert!(residue.im.abs() < 1e-9);
}

#[test]
fn euler_identity_is_bit_stable() {
    let first = euler_identity();
    let second = euler_identity();
    assert_eq!(first.re.to_bits(), second.re.to_bits());
    assert_eq!(first.im.to_bits(), second.im.to_bits());
}

#[test]
fn zeta_2_matches_the_basel_limit() {
    assert!((ZETA_2 - 1.644_934_066_848_226_4).abs() < 1e-12);
}

#[test]
fn zeta_function_approximates_the_basel_limit() {
    assert!((zeta_function() - ZETA_2).abs() < 1e-3);
}

#[test]
fn zeta_function_truncation_error_matches_the_tail_bound() {
    // The dropped tail is strictly positive and close to 1e-4.
    let error = ZETA_2 - zeta_function();
    assert!(error > 9e-5);
    assert!(error < 2e-4);
}

#[test]
fn zeta_function_is_bit_stable() {
    assert_eq!(zeta_function().to_bits(), zeta_function().to_bits());
}

#[test]
fn zeta_function_sums_in_ascending_order() {
    let mut sum = 0.0_f64;
    for n in 1..=9999_u32 {
        let n = f64::from(n);
        sum += 1.0 / (n * n);
    }
    assert_eq!(sum.to_bits(), zeta_function().to_bits());
}

#[test]
fn partial_sum_of_no_terms_is_empty() {
    assert_eq!(partial_sum(0), 0.0);
}

#[test]
fn partial_sum_of_the_first_terms_is_exact() {
    assert_eq!(partial_sum(1), 1.0);
    assert_eq!(partial_sum(2), 1.25);
}

#[test]
fn partial_sum_is_strictly_increasing() {
    let mut last = partial_sum(0);
    for terms in [1, 2, 10, 100, 9999] {
        let next = partial_sum(terms);
        assert!(next > last);
        last = next;
    }
}

#[test]
fn zeta_function_is_the_fixed_truncation() {
    assert_eq!(partial_sum(9999).to_bits(), zeta_function().to_bits());
}
