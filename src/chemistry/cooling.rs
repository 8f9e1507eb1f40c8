//! Radiative cooling rates of primordial gas [erg/(cm^3 s)].
//!
//! Arguments are a species fraction relative to hydrogen, the hydrogen
//! number density `nh` [1/cm^3] and the gas temperature [K].

use super::fch;

/// Temperature range [K] covered by the low density H2 cooling fit.
pub const H2_LOW_DENSITY_FIT_TEMPERATURE_RANGE: (fch, fch) = (10.0, 1e4);

/// Computes the H2 cooling rate from a single power law in temperature.
pub fn h2_power_law_cooling_rate(h2_fraction: fch, nh: fch, temperature: fch) -> fch {
    3.41e-35 * fch::powf(temperature, 3.4) * h2_fraction * nh * nh
}

/// Computes the H2 cooling rate following Galli & Palla (1998).
///
/// The rate per molecule is the harmonic combination of the rate in the
/// low density limit and the rate in local thermodynamic equilibrium,
/// `low*lte/(low + lte)`, which approaches the smaller of the two. It is
/// then multiplied by the H2 number density.
pub fn h2_cooling_rate(h2_fraction: fch, nh: fch, temperature: fch) -> fch {
    let low_density_rate = compute_h2_low_density_cooling_per_molecule(nh, temperature);
    let lte_rate = compute_h2_lte_cooling_per_molecule(temperature);
    let rate_per_molecule = low_density_rate * lte_rate / (low_density_rate + lte_rate);
    rate_per_molecule * nh * h2_fraction
}

/// Computes the atomic hydrogen collisional excitation cooling rate
/// following Cen (1992).
pub fn h_cooling_rate(electron_fraction: fch, nh: fch, temperature: fch) -> fch {
    7.5e-19 / (1.0 + fch::sqrt(temperature / 1e5)) * fch::exp(-118_348.0 / temperature)
        * electron_fraction
        * nh
        * nh
}

/// Cooling rate per H2 molecule [erg/s] in the low density limit, where
/// every collisional excitation is followed by a radiative decay.
fn compute_h2_low_density_cooling_per_molecule(nh: fch, temperature: fch) -> fch {
    let x = fch::log10(temperature);
    let exponent = -103.0 + 97.59 * x - 48.05 * x.powi(2) + 10.80 * x.powi(3) - 0.9032 * x.powi(4);
    fch::powf(10.0, exponent) * nh
}

/// Cooling rate per H2 molecule [erg/s] in local thermodynamic
/// equilibrium. Independent of density.
fn compute_h2_lte_cooling_per_molecule(temperature: fch) -> fch {
    let t3 = temperature / 1e3;

    let rotational = 9.5e-22 * fch::powf(t3, 3.76) / (1.0 + 0.12 * fch::powf(t3, 2.1))
        * fch::exp(-(0.13 / t3).powi(3))
        + 3e-24 * fch::exp(-0.51 / t3);

    let vibrational = 6.7e-19 * fch::exp(-5.86 / t3) + 1.6e-18 * fch::exp(-11.7 / t3);

    rotational + vibrational
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TEMPERATURES: [fch; 5] = [100.0, 300.0, 1e3, 3e3, 8e3];

    #[test]
    fn power_law_cooling_matches_closed_form() {
        assert_relative_eq!(
            h2_power_law_cooling_rate(1e-4, 10.0, 1e3),
            3.41e-35 * 1e3_f64.powf(3.4) * 1e-4 * 100.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn lte_rate_sums_rotational_and_vibrational_terms() {
        let t3: fch = 2.0;
        let expected = 9.5e-22 * t3.powf(3.76) / (1.0 + 0.12 * t3.powf(2.1))
            * (-(0.13 / t3).powi(3)).exp()
            + 3e-24 * (-0.51 / t3).exp()
            + 6.7e-19 * (-5.86 / t3).exp()
            + 1.6e-18 * (-11.7 / t3).exp();
        assert_relative_eq!(
            compute_h2_lte_cooling_per_molecule(2e3),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn low_density_rate_is_linear_in_density() {
        for &temperature in &TEMPERATURES {
            assert_relative_eq!(
                compute_h2_low_density_cooling_per_molecule(1e3, temperature),
                1e3 * compute_h2_low_density_cooling_per_molecule(1.0, temperature),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn bridged_rate_lies_below_both_limits() {
        for &temperature in &TEMPERATURES {
            for nh in [1e-2, 1.0, 1e2, 1e4, 1e6] {
                let per_molecule = h2_cooling_rate(1.0, nh, temperature) / nh;
                assert!(per_molecule < compute_h2_low_density_cooling_per_molecule(nh, temperature));
                assert!(per_molecule < compute_h2_lte_cooling_per_molecule(temperature));
            }
        }
    }

    #[test]
    fn bridged_rate_approaches_each_limit() {
        let temperature = 1e3;
        let sparse = 1e-6;
        assert_relative_eq!(
            h2_cooling_rate(1.0, sparse, temperature) / sparse,
            compute_h2_low_density_cooling_per_molecule(sparse, temperature),
            max_relative = 1e-6
        );

        let dense = 1e14;
        assert_relative_eq!(
            h2_cooling_rate(1.0, dense, temperature) / dense,
            compute_h2_lte_cooling_per_molecule(temperature),
            max_relative = 1e-6
        );
    }

    #[test]
    fn bridged_rate_is_linear_in_h2_fraction() {
        let (nh, temperature) = (1e2, 2e3);
        let reference = h2_cooling_rate(1e-3, nh, temperature);
        assert!(reference > 0.0);
        assert_relative_eq!(
            h2_cooling_rate(2e-3, nh, temperature),
            2.0 * reference,
            max_relative = 1e-12
        );
        assert_eq!(h2_cooling_rate(0.0, nh, temperature), 0.0);
    }

    #[test]
    fn atomic_cooling_is_exponentially_suppressed_at_low_temperature() {
        assert!(h_cooling_rate(1.0, 1.0, 3e3) < 1e-30);
        assert_relative_eq!(
            h_cooling_rate(0.1, 2.0, 1e5),
            7.5e-19 / 2.0 * (-1.183_48_f64).exp() * 0.1 * 4.0,
            max_relative = 1e-12
        );
    }
}
