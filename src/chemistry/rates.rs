//! Collisional rate coefficients [cm^3/s].
//!
//! The fits are evaluated for any temperature; keeping the temperature
//! within the range a fit was made for is left to the caller.

use super::fch;
use crate::constants::E;

/// Highest temperature [K] the H- attachment fit is valid for.
pub const H_MINUS_ATTACHMENT_MAX_TEMPERATURE: fch = 1e4;

/// Computes the case B recombination coefficient of hydrogen [cm^3/s].
pub fn case_b_recombination_coefficient(temperature: fch) -> fch {
    2.54e-13 * fch::powf(temperature / 1e4, -0.8163)
}

/// Computes the rate coefficient for H- formation by radiative electron
/// attachment to neutral hydrogen [cm^3/s] (Hirata & Padmanabhan 2006).
///
/// Valid for temperatures up to `H_MINUS_ATTACHMENT_MAX_TEMPERATURE`.
pub fn h_minus_attachment_coefficient(temperature: fch) -> fch {
    3e-16 * fch::powf(temperature / 300.0, 0.95) * fch::powf(E, -temperature / 9320.0)
}

/// Computes the rate coefficient for H2 formation through associative
/// detachment of H- with neutral hydrogen [cm^3/s].
pub fn h2_formation_coefficient(temperature: fch) -> fch {
    1.5e-9 * fch::powf(temperature / 300.0, -0.1)
}
