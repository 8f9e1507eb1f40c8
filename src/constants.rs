//! Physical and mathematical constants.
//!
//! Values are given in the mixed eV/cgs unit system the fitting formulas
//! in this crate were calibrated with. Note that `PI` and `E` are the
//! truncated values used in those fits, not the exact ones.

/// Floating-point precision to use for constants.
#[allow(non_camel_case_types)]
pub type fcn = f64;

// Mathematical constants

#[allow(clippy::approx_constant)]
pub const PI: fcn = 3.141_592_65;
#[allow(clippy::approx_constant)]
pub const E: fcn = 2.718_281_828;

// Physical constants

/// Planck constant [eV s].
pub const HPLANCK: fcn = 4.135_667_696e-15;
/// Speed of light in vacuum [cm/s].
pub const CLIGHT: fcn = 29_979_245_800.0;
/// Rydberg energy [eV].
pub const E_RYDBERG: fcn = 13.605_692_3;
/// Energy of the Lyman alpha transition [eV].
pub const E_LYMAN_ALPHA: fcn = 10.198_810_993_784;
/// Boltzmann constant [eV/K].
pub const KBOLTZMANN: fcn = 8.617_343e-5;
/// Gravitational constant [dyn cm^2/g^2].
pub const GRAVITY: fcn = 6.674e-8;

// Particle masses

/// Proton mass [g].
pub const M_PROTON: fcn = 1.672_621_71e-24;
/// Proton rest energy [eV].
pub const MC2_PROTON: fcn = 938.272_029e6;
/// Electron mass [g].
pub const M_ELECTRON: fcn = 9.109_383_632e-28;
/// Electron rest energy [eV].
pub const MC2_ELECTRON: fcn = 510_998.946_1;

// Unit conversion factors

/// Conversion factor from parsecs to centimeters.
pub const PC_TO_CM: fcn = 3.085_677_6e18;
/// Conversion factor from megaparsecs to kilometers.
pub const MPC_TO_KM: fcn = PC_TO_CM * 10.0;
/// Conversion factor from solar masses to grams.
pub const MSOL_TO_G: fcn = 1.9891e33;
/// Conversion factor from electron volts to ergs.
pub const EV_TO_ERG: fcn = 1.602_176_53e-12;
/// Conversion factor from GeV to inverse seconds (natural units).
pub const GEV_TO_INV_SEC: fcn = 1.52e24;
/// Conversion factor from years to seconds.
pub const YR_TO_SEC: fcn = 3.154e7;
