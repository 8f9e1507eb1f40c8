//! Validated evaluation of the formulas in this crate.
//!
//! The functions in the rest of the crate accept any input and let values
//! outside the domain of a formula propagate as NaN or infinity. Every
//! function here first checks its inputs, evaluates the corresponding
//! formula and then rejects non-finite results, so callers either get a
//! finite value or a `DomainError`.
//!
//! Inputs are required to satisfy:
//! - redshift: `z >= -1`
//! - halo mass: `> 0` solar masses
//! - temperature: `> 0` K
//! - number densities and species fractions: `>= 0`
//! - photon energies: `>= 0` eV
//!
//! All inputs must also be finite. Using a fit outside the temperature range
//! it was made for is not an error, but is reported as a warning through `log`.

use crate::{
    chemistry::{
        cooling::{self, H2_LOW_DENSITY_FIT_TEMPERATURE_RANGE},
        cross_sections, fch, lines,
        rates::{self, H_MINUS_ATTACHMENT_MAX_TEMPERATURE},
    },
    cosmology::{self, fco, halo, Cosmology, PLANCK18},
    error::{DomainError, DomainResult},
    num::{BFloat, Broadcast},
};

/// View of a `Cosmology` that validates inputs and outputs of its formulas.
#[derive(Clone, Copy, Debug)]
pub struct CheckedCosmology<'a> {
    cosmology: &'a Cosmology,
}

impl Cosmology {
    /// Returns a view of this cosmology whose formulas validate their inputs.
    pub fn checked(&self) -> CheckedCosmology<'_> {
        CheckedCosmology { cosmology: self }
    }
}

impl<'a> CheckedCosmology<'a> {
    pub fn cosmology(&self) -> &'a Cosmology {
        self.cosmology
    }

    /// Computes the Hubble rate H(z) [1/s].
    pub fn hubble_rate(&self, z: fco) -> DomainResult<fco> {
        let z = validate_redshift(z)?;
        require_finite("the Hubble rate", self.cosmology.hubble_rate(z))
    }

    /// Computes the matter density parameter at redshift `z`.
    pub fn matter_density_parameter(&self, z: fco) -> DomainResult<fco> {
        let z = validate_redshift(z)?;
        require_finite(
            "the matter density parameter",
            self.cosmology.matter_density_parameter(z),
        )
    }

    /// Computes the dark energy density parameter at redshift `z`.
    pub fn dark_energy_density_parameter(&self, z: fco) -> DomainResult<fco> {
        let z = validate_redshift(z)?;
        require_finite(
            "the dark energy density parameter",
            self.cosmology.dark_energy_density_parameter(z),
        )
    }

    /// Computes the linear growth factor, normalized to unity today.
    pub fn growth_factor(&self, z: fco) -> DomainResult<fco> {
        let z = validate_redshift(z)?;
        require_finite("the growth factor", self.cosmology.growth_factor(z))
    }

    /// Computes the virial temperature [K] of a halo.
    pub fn virial_temperature(&self, z: fco, halo_mass: fco) -> DomainResult<fco> {
        let z = validate_redshift(z)?;
        let halo_mass = validate_halo_mass(halo_mass)?;
        require_finite(
            "the virial temperature",
            self.cosmology.virial_temperature(z, halo_mass),
        )
    }
}

/// Computes the Hubble rate H(z) [1/s] in the Planck 2018 cosmology.
pub fn hubble_rate(z: fco) -> DomainResult<fco> {
    PLANCK18.checked().hubble_rate(z)
}

/// Computes the matter density parameter at redshift `z` in the Planck 2018 cosmology.
pub fn matter_density_parameter(z: fco) -> DomainResult<fco> {
    PLANCK18.checked().matter_density_parameter(z)
}

/// Computes the dark energy density parameter at redshift `z` in the Planck 2018 cosmology.
pub fn dark_energy_density_parameter(z: fco) -> DomainResult<fco> {
    PLANCK18.checked().dark_energy_density_parameter(z)
}

/// Computes the linear growth factor in the Planck 2018 cosmology.
pub fn growth_factor(z: fco) -> DomainResult<fco> {
    PLANCK18.checked().growth_factor(z)
}

/// Computes the virial temperature [K] of a halo in the Planck 2018 cosmology.
pub fn virial_temperature(z: fco, halo_mass: fco) -> DomainResult<fco> {
    PLANCK18.checked().virial_temperature(z, halo_mass)
}

/// Computes the virial radius [pc] of a halo.
pub fn virial_radius(z: fco, halo_mass: fco) -> DomainResult<fco> {
    let z = validate_redshift(z)?;
    let halo_mass = validate_halo_mass(halo_mass)?;
    require_finite("the virial radius", halo::virial_radius(z, halo_mass))
}

/// Computes the temperature of the intergalactic medium [K].
pub fn igm_temperature(z: fco) -> DomainResult<fco> {
    let z = validate_redshift(z)?;
    require_finite("the IGM temperature", cosmology::igm_temperature(z))
}

/// Computes the temperature of the cosmic microwave background [K].
pub fn cmb_temperature(z: fco) -> DomainResult<fco> {
    let z = validate_redshift(z)?;
    require_finite("the CMB temperature", cosmology::cmb_temperature(z))
}

/// Computes the case B recombination coefficient of hydrogen [cm^3/s].
pub fn case_b_recombination_coefficient(temperature: fch) -> DomainResult<fch> {
    let temperature = validate_temperature(temperature)?;
    require_finite(
        "the case B recombination coefficient",
        rates::case_b_recombination_coefficient(temperature),
    )
}

/// Computes the rate coefficient for H- formation by electron attachment [cm^3/s].
pub fn h_minus_attachment_coefficient(temperature: fch) -> DomainResult<fch> {
    let temperature = validate_temperature(temperature)?;
    if temperature > H_MINUS_ATTACHMENT_MAX_TEMPERATURE {
        log::warn!(
            "H- attachment coefficient evaluated at {} K, above the {} K limit of its fit",
            temperature,
            H_MINUS_ATTACHMENT_MAX_TEMPERATURE
        );
    }
    require_finite(
        "the H- attachment coefficient",
        rates::h_minus_attachment_coefficient(temperature),
    )
}

/// Computes the rate coefficient for H2 formation via H- [cm^3/s].
pub fn h2_formation_coefficient(temperature: fch) -> DomainResult<fch> {
    let temperature = validate_temperature(temperature)?;
    require_finite(
        "the H2 formation coefficient",
        rates::h2_formation_coefficient(temperature),
    )
}

/// Computes the H- photodetachment cross section [cm^2] for each of the
/// given photon energies [eV].
///
/// Fails on the first negative or non-finite energy. Finite non-negative
/// energies always give finite cross sections.
pub fn h_minus_photodetachment_cross_section<B>(energies: &B) -> DomainResult<B::Output>
where
    B: Broadcast + ?Sized,
{
    match energies.find_element(|energy| !is_valid_photon_energy(energy)) {
        Some(energy) => Err(DomainError::InvalidPhotonEnergy(to_f64_lossy(energy))),
        None => Ok(cross_sections::h_minus_photodetachment_cross_section(
            energies,
        )),
    }
}

/// Computes the H2 cooling rate [erg/(cm^3 s)] from a single power law in temperature.
pub fn h2_power_law_cooling_rate(h2_fraction: fch, nh: fch, temperature: fch) -> DomainResult<fch> {
    let h2_fraction = validate_fraction(h2_fraction)?;
    let nh = validate_number_density(nh)?;
    let temperature = validate_temperature(temperature)?;
    require_finite(
        "the power-law H2 cooling rate",
        cooling::h2_power_law_cooling_rate(h2_fraction, nh, temperature),
    )
}

/// Computes the H2 cooling rate [erg/(cm^3 s)] bridging the low density and LTE limits.
pub fn h2_cooling_rate(h2_fraction: fch, nh: fch, temperature: fch) -> DomainResult<fch> {
    let h2_fraction = validate_fraction(h2_fraction)?;
    let nh = validate_number_density(nh)?;
    let temperature = validate_temperature(temperature)?;

    let (min_temperature, max_temperature) = H2_LOW_DENSITY_FIT_TEMPERATURE_RANGE;
    if !(min_temperature..=max_temperature).contains(&temperature) {
        log::warn!(
            "H2 cooling rate evaluated at {} K, outside the {}-{} K range of its fit",
            temperature,
            min_temperature,
            max_temperature
        );
    }
    require_finite(
        "the H2 cooling rate",
        cooling::h2_cooling_rate(h2_fraction, nh, temperature),
    )
}

/// Computes the atomic hydrogen cooling rate [erg/(cm^3 s)].
pub fn h_cooling_rate(electron_fraction: fch, nh: fch, temperature: fch) -> DomainResult<fch> {
    let electron_fraction = validate_fraction(electron_fraction)?;
    let nh = validate_number_density(nh)?;
    let temperature = validate_temperature(temperature)?;
    require_finite(
        "the atomic hydrogen cooling rate",
        cooling::h_cooling_rate(electron_fraction, nh, temperature),
    )
}

/// Computes the energy [eV] of the Lyman series line from level `n`.
pub fn lyman_level_energy(n: u32) -> DomainResult<fch> {
    if n < 2 {
        return Err(DomainError::InvalidLevel(n));
    }
    Ok(lines::lyman_level_energy(n))
}

fn validate_redshift(z: fco) -> DomainResult<fco> {
    if z.is_finite() && z >= -1.0 {
        Ok(z)
    } else {
        Err(DomainError::InvalidRedshift(z))
    }
}

fn validate_halo_mass(halo_mass: fco) -> DomainResult<fco> {
    if halo_mass.is_finite() && halo_mass > 0.0 {
        Ok(halo_mass)
    } else {
        Err(DomainError::InvalidHaloMass(halo_mass))
    }
}

fn validate_temperature(temperature: fch) -> DomainResult<fch> {
    if temperature.is_finite() && temperature > 0.0 {
        Ok(temperature)
    } else {
        Err(DomainError::InvalidTemperature(temperature))
    }
}

fn validate_number_density(number_density: fch) -> DomainResult<fch> {
    if number_density.is_finite() && number_density >= 0.0 {
        Ok(number_density)
    } else {
        Err(DomainError::InvalidNumberDensity(number_density))
    }
}

fn validate_fraction(fraction: fch) -> DomainResult<fch> {
    if fraction.is_finite() && fraction >= 0.0 {
        Ok(fraction)
    } else {
        Err(DomainError::InvalidFraction(fraction))
    }
}

fn is_valid_photon_energy<F: BFloat>(energy: F) -> bool {
    energy.is_finite() && energy >= F::zero()
}

fn to_f64_lossy<F: BFloat>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn require_finite(quantity: &'static str, value: f64) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFiniteResult { quantity })
    }
}
