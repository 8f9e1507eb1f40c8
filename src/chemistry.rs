//! Microphysics of primordial gas.

pub mod cooling;
pub mod cross_sections;
pub mod lines;
pub mod rates;

/// Floating-point precision to use for chemistry.
#[allow(non_camel_case_types)]
pub type fch = f64;
