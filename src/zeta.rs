// SPDX-FileCopyrightText: The formula-fixtures authors
// SPDX-License-Identifier: MPL-2.0

//! Riemann zeta at 2 (Basel problem)

use std::f64::consts::PI;

/// The limit of the series: $\zeta(2) = \pi^2/6$.
pub const ZETA_2: f64 = PI * PI / 6.0;

/// Sum the first `terms` terms of the series.
///
/// $$\sum_{n=1}^{N} \frac{1}{n^2}$$
///
/// Terms are accumulated in strictly ascending order of $n$. The order is
/// part of the contract: floating-point addition is not associative, so
/// reordering would change the least-significant bits of the result.
///
/// An empty sum (`terms == 0`) is `0.0`.
#[must_use]
pub fn partial_sum(terms: u32) -> f64 {
    (1..=terms)
        .map(|n| {
            let n = f64::from(n);
            1.0 / (n * n)
        })
        .sum()
}

/// Approximate the Basel sum with a fixed truncation.
///
/// Zeta function: it is defined as below:
///
/// $$\sum_{n=1}^{\infty} \frac{1}{n^2} = \frac{\pi^2}{6}$$
///
/// Evaluated as the partial sum over $n = 1..9999$. The truncation error
/// is bounded by the tail $\sum_{n=10^4}^{\infty} 1/n^2 \approx 10^{-4}$,
/// so the result matches [`ZETA_2`] to about four decimal places.
#[must_use]
pub fn zeta_function() -> f64 {
    partial_sum(9999)
}
