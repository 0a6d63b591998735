// SPDX-FileCopyrightText: The formula-fixtures authors
// SPDX-License-Identifier: MPL-2.0

//! Euler's identity

use std::f64::consts::PI;

use num_complex::Complex64;

/// Evaluate Euler's identity numerically.
///
/// Euler's identity: $e^{i\pi} + 1 = 0$
///
/// The left-hand side is evaluated with double-precision $\pi$ through the
/// complex exponential, which maps the purely imaginary argument $i\pi$
/// onto the unit circle. The result is the rounding residue of the
/// identity: both components are within machine epsilon of zero, with
/// indeterminate sign.
#[must_use]
pub fn euler_identity() -> Complex64 {
    (Complex64::i() * PI).exp() + 1.0
}
