use super::*;

/// Bethe-Bloch bracket ln(2 me beta^2 gamma^2 / I) - beta^2 at kinetic energy E (MeV).
pub fn bethe_bloch_bracket(E: f64, material: &Material, particle: &Particle, constants: &PhysicalConstants) -> StoppingResult<f64> {
    let gamma = particle.gamma(E)?;
    let beta = particle.beta(E)?;
    let beta2 = beta*beta;

    Ok((2.*constants.electron_mass*beta2*gamma*gamma/material.I).ln() - beta2)
}

/// Energy loss per unit length -dE/dx, in MeV/micron, of `particle` at kinetic energy E (MeV) in `material`.
///
/// The returned value is a positive magnitude wherever the formula is valid. Below the breakdown
/// energy (see [`lowest_valid_energy`]) the logarithmic term turns negative; `low_energy_mode`
/// decides whether that is an error or passed through.
pub fn energy_loss_rate(E: f64, material: &Material, particle: &Particle, constants: &PhysicalConstants, low_energy_mode: LowEnergyMode) -> StoppingResult<f64> {

    let beta = particle.beta(E)?;
    let bracket = bethe_bloch_bracket(E, material, particle, constants)?;

    if low_energy_mode == LowEnergyMode::REJECT && !(bracket > 0.) {
        return Err(StoppingError::FormulaBreakdown { energy: E, bracket });
    }

    let n = material.electron_density(constants);
    let z = particle.z;

    //Bethe-Bloch, MeV/m
    let prefactor = constants.bethe_bloch_prefactor()*z*z*n/beta/beta;
    let dEdx = prefactor*bracket;

    Ok(dEdx*MEV_PER_M_TO_MEV_PER_MICRON)
}

/// Lowest kinetic energy (MeV) at which the Bethe-Bloch bracket is positive.
///
/// The bracket crosses zero once, near beta^2 ~ I/(2 me); below that energy the formula yields
/// negative stopping powers and any range integral reaching it is meaningless. The returned energy
/// is an upper bound on the crossing, within a relative tolerance of 1e-12.
pub fn lowest_valid_energy(material: &Material, particle: &Particle, constants: &PhysicalConstants) -> StoppingResult<f64> {

    let bracket = |E: f64| bethe_bloch_bracket(E, material, particle, constants);

    //Bracket the crossing from above by doubling
    let mut high = particle.m*material.I/constants.electron_mass;
    while !(bracket(high)? > 0.) {
        high *= 2.;
        if !high.is_finite() {
            return Err(StoppingError::InvalidParameter { name: "mean ionization potential I", value: material.I });
        }
    }
    let mut low = high/2.;
    while bracket(low)? > 0. {
        high = low;
        low /= 2.;
    }

    while (high - low) > 1E-12*high {
        let mid = 0.5*(low + high);
        if bracket(mid)? > 0. {
            high = mid;
        } else {
            low = mid;
        }
    }

    debug!("Bethe-Bloch breakdown for z = {} in Z = {} at {} MeV", particle.z, material.Z, high);

    Ok(high)
}
