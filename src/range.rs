use super::*;

/// Grid and quadrature settings of a range calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSettings {
    /// Number of energy grid points, at least 2.
    pub steps: usize,
    /// Lowest energy of the grid in MeV.
    pub energy_floor: f64,
    pub low_energy_mode: LowEnergyMode,
    pub integration_rule: IntegrationRule,
}

impl Default for RangeSettings {
    fn default() -> Self {
        RangeSettings {
            steps: DEFAULT_STEPS,
            energy_floor: DEFAULT_ENERGY_FLOOR,
            low_energy_mode: LowEnergyMode::REJECT,
            integration_rule: IntegrationRule::SIMPSON,
        }
    }
}

/// Stopping power sampled from the initial energy down to the grid floor.
#[derive(Clone, Debug)]
pub struct EnergyLossCurve {
    /// Kinetic energies in MeV, decreasing.
    pub energies: Array1<f64>,
    /// -dE/dx in MeV/micron at each energy.
    pub rates: Array1<f64>,
}

impl EnergyLossCurve {
    /// True if every sampled stopping power is positive and finite.
    pub fn is_physical(&self) -> bool {
        self.rates.iter().all(|rate| rate.is_finite() && *rate > 0.)
    }

    /// The integrand of the range integral, 1/(-dE/dx), sampled along the decreasing grid.
    pub fn inverse_rates(&self) -> Array1<f64> {
        self.rates.mapv(|rate| 1./-rate)
    }
}

/// Samples the stopping power on `settings.steps` evenly spaced energies from E0 down to the floor.
pub fn energy_loss_curve(E0: f64, material: &Material, particle: &Particle, constants: &PhysicalConstants, settings: &RangeSettings) -> StoppingResult<EnergyLossCurve> {

    if !E0.is_finite() || E0 <= 0. {
        return Err(StoppingError::InvalidEnergy { energy: E0 });
    }
    if !settings.energy_floor.is_finite() || settings.energy_floor <= 0. || settings.energy_floor >= E0 {
        return Err(StoppingError::InvalidGrid(format!("energy floor {} MeV must lie in (0, {}) MeV", settings.energy_floor, E0)));
    }

    let energies = energy_grid(E0, settings.energy_floor, settings.steps)?;
    debug!("Energy grid: {} points from {} MeV to {} MeV", settings.steps, E0, settings.energy_floor);

    let rates = energies.iter()
        .map(|E| energy_loss_rate(*E, material, particle, constants, settings.low_energy_mode))
        .collect::<StoppingResult<Vec<f64>>>()?;

    Ok(EnergyLossCurve {
        energies,
        rates: Array1::from(rates),
    })
}

/// Stopping range in microns of `particle` starting at kinetic energy E0 (MeV) in `material`.
///
/// The integrand 1/(-dE/dx) is negative and the grid runs downward from E0, so the integral comes
/// out positive.
pub fn stopping_range(E0: f64, material: &Material, particle: &Particle, constants: &PhysicalConstants, settings: &RangeSettings) -> StoppingResult<f64> {

    let curve = energy_loss_curve(E0, material, particle, constants, settings)?;

    if !curve.is_physical() {
        warn!("Stopping power is not positive over the whole grid down to {} MeV; range integrates across the Bethe-Bloch breakdown.",
            settings.energy_floor);
    }

    integrate(curve.inverse_rates().view(), curve.energies.view(), settings.integration_rule)
}
