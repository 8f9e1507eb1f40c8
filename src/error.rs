//! Errors for inputs outside the domain of a formula.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Redshift must be finite and at least -1, got {0}")]
    InvalidRedshift(f64),

    #[error("Halo mass must be finite and positive, got {0} solar masses")]
    InvalidHaloMass(f64),

    #[error("Temperature must be finite and positive, got {0} K")]
    InvalidTemperature(f64),

    #[error("Number density must be finite and non-negative, got {0} cm^-3")]
    InvalidNumberDensity(f64),

    #[error("Species fraction must be finite and non-negative, got {0}")]
    InvalidFraction(f64),

    #[error("Photon energy must be finite and non-negative, got {0} eV")]
    InvalidPhotonEnergy(f64),

    #[error("Lyman series levels start at n = 2, got n = {0}")]
    InvalidLevel(u32),

    #[error("Invalid cosmological parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Evaluation of {quantity} gave a non-finite result")]
    NonFiniteResult { quantity: &'static str },
}

pub type DomainResult<T> = Result<T, DomainError>;
