//! The `primordial` crate provides physical constants and closed-form
//! formulas for early-universe cosmology and the chemistry and cooling of
//! primordial gas.
//!
//! Formulas in `cosmology` and `chemistry` accept any input and follow
//! IEEE 754 semantics outside their domain. The same formulas with input
//! validation are available in `checked`.
pub mod checked;
pub mod chemistry;
pub mod constants;
pub mod cosmology;
pub mod error;
pub mod num;
