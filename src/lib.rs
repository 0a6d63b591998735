// SPDX-FileCopyrightText: The formula-fixtures authors
// SPDX-License-Identifier: MPL-2.0

#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

//! Numeric debug fixtures for exercising a documentation-comment
//! formula renderer.
//!
//! The computations are deliberately trivial. The payload is the LaTeX in
//! the doc comments: a renderer that typesets formulas embedded in
//! documentation text is pointed at this crate and must handle both inline
//! and display math attached to real, callable items.
//!
//! Two fixtures are callable: [`euler_identity`] and [`zeta_function`].
//! A third fixture, [`spline`], is prose only and exposes no items.

pub mod docs {
    //! Documentation and specification

    // Code blocks in the README are rendering samples, not Rust.
    #![allow(rustdoc::invalid_rust_codeblocks)]
    #![doc = include_str!("../README.md")]
}

pub mod euler;
pub mod spline;
pub mod zeta;

pub use euler::euler_identity;
pub use zeta::zeta_function;

#[cfg(test)]
mod tests;
