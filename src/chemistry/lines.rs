//! Hydrogen line energies.

use super::fch;
use crate::constants::E_RYDBERG;

/// Computes the energy [eV] of the Lyman series line from level `n` to the
/// ground state. Only meaningful for `n >= 2`.
pub fn lyman_level_energy(n: u32) -> fch {
    let n = fch::from(n);
    E_RYDBERG * (1.0 - 1.0 / (n * n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::E_LYMAN_ALPHA;
    use approx::assert_relative_eq;

    #[test]
    fn lyman_alpha_has_three_quarters_of_rydberg_energy() {
        assert_relative_eq!(lyman_level_energy(2), 0.75 * E_RYDBERG, max_relative = 1e-15);
        assert_relative_eq!(lyman_level_energy(2), E_LYMAN_ALPHA, max_relative = 1e-3);
    }

    #[test]
    fn series_converges_to_rydberg_energy() {
        assert!(lyman_level_energy(3) > lyman_level_energy(2));
        assert_relative_eq!(lyman_level_energy(10_000), E_RYDBERG, max_relative = 1e-7);
    }
}
