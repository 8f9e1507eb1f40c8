#![allow(dead_code)]

use ndarray::Array1;
use primordial::cosmology::{fco, Cosmology, CosmologyParameters};

/// Redshifts spanning today to recombination.
pub const REDSHIFTS: [fco; 8] = [0.0, 0.5, 1.0, 6.0, 10.0, 20.0, 50.0, 1100.0];

/// Gas temperatures [K] within the range of the cooling and rate fits.
pub const TEMPERATURES: [fco; 6] = [20.0, 100.0, 500.0, 1e3, 5e3, 1e4];

/// Photon energies [eV] from below to well above the H- detachment threshold.
pub fn photon_energies(n_energies: usize) -> Array1<fco> {
    Array1::logspace(10.0, -2.0, 2.0, n_energies)
}

/// Cosmologies with different matter contents that all remain flat.
pub fn alternative_cosmologies() -> Vec<Cosmology> {
    [(0.6, 0.10), (0.7, 0.12), (0.8, 0.2)]
        .into_iter()
        .map(|(little_h, omega_cdm_h2)| {
            Cosmology::new(CosmologyParameters {
                little_h,
                omega_cdm_h2,
                ..CosmologyParameters::default()
            })
        })
        .collect()
}
