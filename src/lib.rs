#![allow(non_snake_case)]
#![allow(non_camel_case_types)]

//! Bethe-Bloch stopping powers and stopping ranges of charged particles in matter.

use std::fmt;

//Error handling crates
use anyhow::{anyhow, bail, ensure, Context, Result};

//Serializing/Deserializing crate
use serde::*;

//Logging
use tracing::{debug, info, warn};

//Parallelization and progress
use rayon::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};

//I/O
use std::fs::OpenOptions;
use std::io::prelude::*;
use std::io::BufWriter;

//itertools
use itertools::izip;

//Arrays
use ndarray::{Array1, ArrayView1};

//Math
use std::f64::consts::PI;

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;
#[cfg(feature = "python")]
use pyo3::exceptions::PyValueError;

//Load internal modules
pub mod consts;
pub mod enums;
pub mod error;
pub mod material;
pub mod particle;
pub mod stopping;
pub mod quadrature;
pub mod range;
pub mod input;
pub mod output;
pub mod physics;
pub mod tests;

pub use crate::consts::*;
pub use crate::enums::*;
pub use crate::error::{StoppingError, StoppingResult};
use crate::error::require_positive;
pub use crate::material::{Material, MaterialParameters};
pub use crate::particle::{Particle, ParticleParameters};
pub use crate::stopping::{bethe_bloch_bracket, energy_loss_rate, lowest_valid_energy};
pub use crate::quadrature::{energy_grid, integrate, simpson, trapezoid};
pub use crate::range::{energy_loss_curve, EnergyLossCurve, RangeSettings};
pub use crate::input::{InputFile, Options};
pub use crate::output::{OutputUnits, RangeResult};
pub use crate::physics::{range_loop, single_energy_range};

/// Energy loss -dE/dx in MeV/micron of a particle of charge z and rest mass m (MeV) with kinetic
/// energy E (MeV), in a material with atomic number Z, mass number A, mean ionization potential
/// I (MeV) and density (kg/m^3).
///
/// Uses the reference constants and rejects energies below the Bethe-Bloch breakdown.
pub fn bethe_bloch(E: f64, Z: f64, A: f64, I: f64, density: f64, z: f64, m: f64) -> Result<f64> {
    let material = Material::from_values(Z, A, I, density)?;
    let particle = Particle::from_values(z, m)?;

    Ok(energy_loss_rate(E, &material, &particle, &PhysicalConstants::REFERENCE, LowEnergyMode::REJECT)?)
}

/// Stopping range in microns from initial kinetic energy E (MeV) down to 0.1 MeV, integrated
/// with Simpson's rule over `steps` grid points. Arguments as in [`bethe_bloch`].
pub fn stopping_range(E: f64, Z: f64, A: f64, I: f64, density: f64, z: f64, m: f64, steps: usize) -> Result<f64> {
    let material = Material::from_values(Z, A, I, density)?;
    let particle = Particle::from_values(z, m)?;
    let settings = RangeSettings {
        steps,
        ..RangeSettings::default()
    };

    Ok(range::stopping_range(E, &material, &particle, &PhysicalConstants::REFERENCE, &settings)?)
}

/// Stopping power and range of a proton starting at 17 MeV in terbium, evaluated the way the
/// reference calculation does: 1000 points down to 0.1 MeV, breakdown values propagated.
pub fn reference_example() -> Result<RangeResult> {
    let material = Material::terbium();
    let particle = Particle::proton();
    let constants = PhysicalConstants::REFERENCE;
    let settings = RangeSettings {
        low_energy_mode: LowEnergyMode::PROPAGATE,
        ..RangeSettings::default()
    };

    let breakdown = lowest_valid_energy(&material, &particle, &constants)?;
    if breakdown > settings.energy_floor {
        warn!("Grid floor {} MeV lies below the Bethe-Bloch breakdown at {:.4} MeV.", settings.energy_floor, breakdown);
    }

    Ok(single_energy_range(17., &material, &particle, &constants, &settings)?)
}

#[no_mangle]
pub extern "C" fn bethe_bloch_c(E: f64, Z: f64, A: f64, I: f64, density: f64, z: f64, m: f64) -> f64 {
    bethe_bloch(E, Z, A, I, density, z, m).unwrap_or(f64::NAN)
}

#[no_mangle]
pub extern "C" fn stopping_range_c(E: f64, Z: f64, A: f64, I: f64, density: f64, z: f64, m: f64, steps: usize) -> f64 {
    stopping_range(E, Z, A, I, density, z, m, steps).unwrap_or(f64::NAN)
}

#[cfg(feature = "python")]
#[pymodule]
pub fn betherange(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bethe_bloch_py, m)?)?;
    m.add_function(wrap_pyfunction!(stopping_range_py, m)?)?;
    Ok(())
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "bethe_bloch")]
pub fn bethe_bloch_py(E: f64, Z: f64, A: f64, I: f64, density: f64, z: f64, m: f64) -> PyResult<f64> {
    bethe_bloch(E, Z, A, I, density, z, m).map_err(|error| PyValueError::new_err(format!("{:#}", error)))
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "stopping_range", signature = (E, Z, A, I, density, z, m, steps=DEFAULT_STEPS))]
pub fn stopping_range_py(E: f64, Z: f64, A: f64, I: f64, density: f64, z: f64, m: f64, steps: usize) -> PyResult<f64> {
    stopping_range(E, Z, A, I, density, z, m, steps).map_err(|error| PyValueError::new_err(format!("{:#}", error)))
}
