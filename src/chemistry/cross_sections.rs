//! Photoionization and photodetachment cross sections.

use super::fch;
use crate::{
    constants::HPLANCK,
    num::{evaluate_as_f64, Broadcast},
};
use lazy_static::lazy_static;

/// Photon energy [eV] below which H- cannot be photodetached.
pub const H_MINUS_DETACHMENT_THRESHOLD: fch = 0.755;

lazy_static! {
    static ref H_MINUS_CROSS_SECTION_SCALE: fch = 7.928e5 * fch::powf(HPLANCK, 1.5);
}

/// Computes the H- photodetachment cross section [cm^2] for each of the
/// given photon energies [eV].
///
/// Energies below `H_MINUS_DETACHMENT_THRESHOLD` give exactly zero. Accepts
/// a single number or any sequence or array of numbers and returns a
/// result of the same shape.
pub fn h_minus_photodetachment_cross_section<B>(energies: &B) -> B::Output
where
    B: Broadcast + ?Sized,
{
    energies.broadcast(|energy| evaluate_as_f64(energy, evaluate_h_minus_cross_section))
}

fn evaluate_h_minus_cross_section(energy: fch) -> fch {
    if energy >= H_MINUS_DETACHMENT_THRESHOLD {
        (*H_MINUS_CROSS_SECTION_SCALE) * fch::powf(energy - H_MINUS_DETACHMENT_THRESHOLD, 1.5)
            / energy.powi(3)
    } else if energy.is_nan() {
        energy
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{arr1, Array1, Array2};

    #[test]
    fn cross_section_vanishes_below_threshold() {
        for energy in [-1.0_f64, 0.0, 0.5, 0.754_999_999] {
            assert_eq!(h_minus_photodetachment_cross_section(&energy), 0.0);
        }
        assert_eq!(
            h_minus_photodetachment_cross_section(&H_MINUS_DETACHMENT_THRESHOLD),
            0.0
        );
    }

    #[test]
    fn cross_section_rises_continuously_above_threshold() {
        let just_above = h_minus_photodetachment_cross_section(&0.755_001_f64);
        let further_above = h_minus_photodetachment_cross_section(&0.76_f64);
        assert!(just_above > 0.0);
        assert!(just_above < further_above);

        let at_edge = h_minus_photodetachment_cross_section(&(0.755_f64 + 1e-12));
        assert!(at_edge > 0.0);
        assert!(at_edge < 1e-12 * further_above);
    }

    #[test]
    fn cross_section_matches_closed_form_above_threshold() {
        let energy: fch = 1.5;
        let expected = 7.928e5 * HPLANCK.powf(1.5) * (energy - 0.755_f64).powf(1.5) / energy.powi(3);
        assert_relative_eq!(
            h_minus_photodetachment_cross_section(&energy),
            expected,
            max_relative = 1e-14
        );
    }

    #[test]
    fn arrays_are_evaluated_element_wise() {
        let energies = arr1(&[0.1_f64, 0.755, 0.8, 1.2, 3.0, 10.0]);
        let cross_sections = h_minus_photodetachment_cross_section(&energies);
        assert_eq!(cross_sections.shape(), energies.shape());
        for (&energy, &cross_section) in energies.iter().zip(cross_sections.iter()) {
            assert_eq!(cross_section, h_minus_photodetachment_cross_section(&energy));
        }

        let grid = Array2::from_shape_fn((100, 100), |(i, j)| 0.01 * (i + j) as fch);
        let on_grid = h_minus_photodetachment_cross_section(&grid);
        assert_eq!(on_grid.dim(), (100, 100));
        assert_eq!(
            on_grid[[40, 50]],
            h_minus_photodetachment_cross_section(&grid[[40, 50]])
        );

        let as_vec: Vec<fch> = Array1::linspace(0.0, 2.0, 10_000).to_vec();
        let from_vec = h_minus_photodetachment_cross_section(&as_vec);
        assert_eq!(from_vec.len(), as_vec.len());
        assert!(from_vec
            .iter()
            .zip(as_vec.iter())
            .all(|(&cross_section, &energy)| cross_section
                == h_minus_photodetachment_cross_section(&energy)));
    }

    #[test]
    fn single_precision_input_gives_single_precision_output() {
        let cross_sections = h_minus_photodetachment_cross_section(&[0.5_f32, 2.0_f32]);
        assert_eq!(cross_sections[0], 0.0_f32);
        assert_relative_eq!(
            cross_sections[1],
            h_minus_photodetachment_cross_section(&2.0_f64) as f32,
            max_relative = 1e-6
        );
    }

    #[test]
    fn nan_energy_gives_nan() {
        assert!(h_minus_photodetachment_cross_section(&fch::NAN).is_nan());
    }
}
