//! Background cosmology of a flat universe with matter and a cosmological constant.

pub mod halo;

use crate::{
    constants::{CLIGHT, EV_TO_ERG, GRAVITY, MC2_PROTON, MPC_TO_KM, PI},
    error::{DomainError, DomainResult},
};
use lazy_static::lazy_static;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Floating-point precision to use for cosmology.
#[allow(non_camel_case_types)]
pub type fco = f64;

lazy_static! {
    /// Cosmology with the Planck 2018 parameters, used by the free functions of this crate.
    pub static ref PLANCK18: Cosmology = Cosmology::new(CosmologyParameters::PLANCK18);
}

/// Primary cosmological parameters, from which all other quantities are derived.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CosmologyParameters {
    /// Dimensionless Hubble parameter, H0 = 100 h km/s/Mpc.
    pub little_h: fco,
    /// Physical cold dark matter density Omega_c h^2.
    pub omega_cdm_h2: fco,
    /// Physical baryon density Omega_b h^2.
    pub omega_baryon_h2: fco,
    /// Primordial helium mass fraction Y_p.
    pub helium_mass_fraction: fco,
    /// Mean density of a virialized halo in units of the critical density.
    pub critical_overdensity: fco,
}

impl CosmologyParameters {
    /// Parameters from the Planck 2018 results.
    pub const PLANCK18: Self = Self {
        little_h: 0.674,
        omega_cdm_h2: 0.12,
        omega_baryon_h2: 0.0224,
        helium_mass_fraction: 0.245,
        critical_overdensity: 200.0,
    };

    /// Checks that every parameter is finite and physically meaningful.
    pub fn validate(&self) -> DomainResult<()> {
        let requirements = [
            ("little_h", self.little_h, self.little_h > 0.0),
            ("omega_cdm_h2", self.omega_cdm_h2, self.omega_cdm_h2 >= 0.0),
            (
                "omega_baryon_h2",
                self.omega_baryon_h2,
                self.omega_baryon_h2 > 0.0,
            ),
            (
                "helium_mass_fraction",
                self.helium_mass_fraction,
                (0.0..1.0).contains(&self.helium_mass_fraction),
            ),
            (
                "critical_overdensity",
                self.critical_overdensity,
                self.critical_overdensity > 0.0,
            ),
        ];
        match requirements
            .iter()
            .find(|(_, value, satisfied)| !(value.is_finite() && *satisfied))
        {
            Some(&(name, value, _)) => Err(DomainError::InvalidParameter { name, value }),
            None => Ok(()),
        }
    }

    /// Reads parameters from a JSON object with one field per parameter.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Writes the parameters as a pretty-printed JSON object.
    #[cfg(feature = "json")]
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for CosmologyParameters {
    fn default() -> Self {
        Self::PLANCK18
    }
}

/// Cosmological quantities derived from a set of `CosmologyParameters`.
///
/// All derived values are computed once on construction and never change.
#[derive(Clone, Debug)]
pub struct Cosmology {
    parameters: CosmologyParameters,
    /// Hubble constant [1/s].
    hubble_constant: fco,
    omega_cdm: fco,
    omega_baryon: fco,
    omega_matter: fco,
    omega_lambda: fco,
    /// Critical density today [eV/cm^3].
    critical_density: fco,
    /// Hydrogen number density today [1/cm^3].
    hydrogen_number_density: fco,
    /// Helium number density today [1/cm^3].
    helium_number_density: fco,
    /// Total number density of atoms today [1/cm^3].
    atom_number_density: fco,
}

impl Cosmology {
    /// Derives the cosmology for the given parameters without validating them.
    ///
    /// Derivation order is Hubble constant, density parameters, critical
    /// density and finally the present-day number densities.
    pub fn new(parameters: CosmologyParameters) -> Self {
        let h = parameters.little_h;
        let hubble_constant = 100.0 * h / MPC_TO_KM;

        let omega_cdm = parameters.omega_cdm_h2 / (h * h);
        let omega_baryon = parameters.omega_baryon_h2 / (h * h);
        let omega_matter = omega_cdm + omega_baryon;
        let omega_lambda = 1.0 - omega_matter;

        let critical_density = 3.0 * hubble_constant * hubble_constant / (8.0 * PI * GRAVITY)
            * CLIGHT
            * CLIGHT
            / EV_TO_ERG;

        let yp = parameters.helium_mass_fraction;
        let hydrogen_number_density = critical_density * omega_baryon * (1.0 - yp) / MC2_PROTON;
        let helium_number_density = critical_density * omega_baryon * yp / MC2_PROTON;
        let atom_number_density = hydrogen_number_density + helium_number_density;

        log::debug!(
            "Derived cosmology: H0 = {:e} 1/s, Omega_m = {}, Omega_lambda = {}, \
             rho_crit = {} eV/cm^3, nH0 = {:e} 1/cm^3, nHe0 = {:e} 1/cm^3",
            hubble_constant,
            omega_matter,
            omega_lambda,
            critical_density,
            hydrogen_number_density,
            helium_number_density
        );

        Self {
            parameters,
            hubble_constant,
            omega_cdm,
            omega_baryon,
            omega_matter,
            omega_lambda,
            critical_density,
            hydrogen_number_density,
            helium_number_density,
            atom_number_density,
        }
    }

    /// Validates the given parameters and derives the cosmology.
    pub fn try_new(parameters: CosmologyParameters) -> DomainResult<Self> {
        parameters.validate()?;
        Ok(Self::new(parameters))
    }

    pub fn parameters(&self) -> &CosmologyParameters {
        &self.parameters
    }

    pub fn little_h(&self) -> fco {
        self.parameters.little_h
    }

    /// Hubble constant H0 [1/s].
    pub fn hubble_constant(&self) -> fco {
        self.hubble_constant
    }

    pub fn omega_cdm(&self) -> fco {
        self.omega_cdm
    }

    pub fn omega_baryon(&self) -> fco {
        self.omega_baryon
    }

    pub fn omega_matter(&self) -> fco {
        self.omega_matter
    }

    pub fn omega_lambda(&self) -> fco {
        self.omega_lambda
    }

    pub fn helium_mass_fraction(&self) -> fco {
        self.parameters.helium_mass_fraction
    }

    pub fn critical_overdensity(&self) -> fco {
        self.parameters.critical_overdensity
    }

    /// Critical density today [eV/cm^3].
    pub fn critical_density(&self) -> fco {
        self.critical_density
    }

    /// Hydrogen number density today [1/cm^3].
    pub fn hydrogen_number_density(&self) -> fco {
        self.hydrogen_number_density
    }

    /// Helium number density today [1/cm^3].
    pub fn helium_number_density(&self) -> fco {
        self.helium_number_density
    }

    /// Number density of hydrogen and helium atoms today [1/cm^3].
    pub fn atom_number_density(&self) -> fco {
        self.atom_number_density
    }

    /// Computes the Hubble rate H(z) [1/s].
    pub fn hubble_rate(&self, z: fco) -> fco {
        self.hubble_constant * fco::sqrt(self.omega_lambda + self.omega_matter * (1.0 + z).powi(3))
    }

    /// Computes the matter density parameter at redshift `z`.
    pub fn matter_density_parameter(&self, z: fco) -> fco {
        self.omega_matter * (1.0 + z).powi(3) / self.squared_expansion_ratio(z)
    }

    /// Computes the dark energy density parameter at redshift `z`.
    pub fn dark_energy_density_parameter(&self, z: fco) -> fco {
        self.omega_lambda / self.squared_expansion_ratio(z)
    }

    /// Computes the linear growth factor of density perturbations,
    /// normalized to unity today.
    ///
    /// Uses the Carroll, Press & Turner (1992) approximation for the
    /// growth suppression relative to an Einstein-de Sitter universe.
    pub fn growth_factor(&self, z: fco) -> fco {
        let today = growth_suppression(self.omega_matter, self.omega_lambda);
        let at_z = growth_suppression(
            self.matter_density_parameter(z),
            self.dark_energy_density_parameter(z),
        );
        at_z / today / (1.0 + z)
    }

    /// (H(z)/H0)^2
    fn squared_expansion_ratio(&self, z: fco) -> fco {
        let ratio = self.hubble_rate(z) / self.hubble_constant;
        ratio * ratio
    }
}

fn growth_suppression(omega_matter: fco, omega_lambda: fco) -> fco {
    omega_matter
        / (omega_matter.powf(4.0 / 7.0) - omega_lambda
            + (1.0 + 0.5 * omega_matter) * (1.0 + omega_lambda / 70.0))
}

/// Computes the Hubble rate H(z) [1/s] in the Planck 2018 cosmology.
pub fn hubble_rate(z: fco) -> fco {
    PLANCK18.hubble_rate(z)
}

/// Computes the matter density parameter at redshift `z` in the Planck 2018 cosmology.
pub fn matter_density_parameter(z: fco) -> fco {
    PLANCK18.matter_density_parameter(z)
}

/// Computes the dark energy density parameter at redshift `z` in the Planck 2018 cosmology.
pub fn dark_energy_density_parameter(z: fco) -> fco {
    PLANCK18.dark_energy_density_parameter(z)
}

/// Computes the linear growth factor in the Planck 2018 cosmology.
pub fn growth_factor(z: fco) -> fco {
    PLANCK18.growth_factor(z)
}

/// Computes the temperature of the intergalactic medium [K], assuming it
/// has cooled adiabatically since thermal decoupling from the CMB.
pub fn igm_temperature(z: fco) -> fco {
    (1.0 + z).powi(2) / 40.0
}

/// Computes the temperature of the cosmic microwave background [K].
pub fn cmb_temperature(z: fco) -> fco {
    2.725 * (1.0 + z)
}
