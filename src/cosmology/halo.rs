//! Properties of virialized dark matter halos.
//!
//! Halo masses are given in solar masses. The fits are only defined for
//! positive masses; negative masses give NaN.

use super::{fco, Cosmology, PLANCK18};
use crate::constants::PI;

impl Cosmology {
    /// Computes the virial temperature [K] of a halo with mass `halo_mass`
    /// [solar masses] collapsing at redshift `z`.
    ///
    /// Fit from Barkana & Loeb (2001) for a primordial gas with mean
    /// molecular weight 1.22, scaled by 0.75.
    pub fn virial_temperature(&self, z: fco, halo_mass: fco) -> fco {
        let overdensity_factor = fco::powf(
            self.omega_matter / self.matter_density_parameter(z) * self.critical_overdensity()
                / (18.0 * PI * PI),
            1.0 / 3.0,
        );
        0.75 * 1.98e4
            * (1.22 / 0.6)
            * overdensity_factor
            * fco::powf(halo_mass / 1e8, 2.0 / 3.0)
            * (1.0 + z)
            / 10.0
            * fco::powf(self.little_h(), 2.0 / 3.0)
    }
}

/// Computes the virial temperature [K] of a halo in the Planck 2018 cosmology.
pub fn virial_temperature(z: fco, halo_mass: fco) -> fco {
    PLANCK18.virial_temperature(z, halo_mass)
}

/// Computes the virial radius [pc] of a halo with mass `halo_mass`
/// [solar masses] collapsing at redshift `z`.
pub fn virial_radius(z: fco, halo_mass: fco) -> fco {
    323.0 * fco::powf(halo_mass / 1e6, 1.0 / 3.0) / ((1.0 + z) / 10.0)
}
