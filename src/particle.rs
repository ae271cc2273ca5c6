use super::*;

/// Particle section of an input deck.
#[derive(Deserialize, Clone, Debug)]
pub struct ParticleParameters {
    /// Unit of the rest mass m: EV, KEV, MEV, GEV or AMU.
    pub mass_unit: String,
    pub z: f64,
    pub m: f64,
}

/// Incident charged particle. The rest mass is stored in MeV.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Charge number.
    pub z: f64,
    /// Rest mass in MeV.
    pub m: f64,
}

impl Particle {
    pub fn new(particle_parameters: &ParticleParameters) -> Result<Particle> {

        let mass_unit: f64 = match particle_parameters.mass_unit.as_str() {
            "AMU" => AMU,
            other => material::energy_unit(other)
                .context("Input error: particle mass_unit may also be AMU.")?
        };

        Particle::from_values(particle_parameters.z, particle_parameters.m*mass_unit)
            .context("Input error: invalid particle_parameters.")
    }

    pub fn from_values(z: f64, m: f64) -> StoppingResult<Particle> {
        if !z.is_finite() || z == 0. {
            return Err(StoppingError::InvalidParameter { name: "charge z", value: z });
        }
        Ok(Particle {
            z,
            m: require_positive("rest mass m", m)?,
        })
    }

    pub fn proton() -> Particle {
        Particle { z: 1., m: 938.272 }
    }

    pub fn deuteron() -> Particle {
        Particle { z: 1., m: 1875.613 }
    }

    pub fn triton() -> Particle {
        Particle { z: 1., m: 2808.921 }
    }

    pub fn helion() -> Particle {
        Particle { z: 2., m: 2808.391 }
    }

    pub fn alpha() -> Particle {
        Particle { z: 2., m: 3727.379 }
    }

    /// Lorentz factor at kinetic energy E (MeV).
    pub fn gamma(&self, E: f64) -> StoppingResult<f64> {
        if !E.is_finite() || E <= 0. {
            return Err(StoppingError::InvalidEnergy { energy: E });
        }
        Ok(1. + E/self.m)
    }

    /// Speed as a fraction of c at kinetic energy E (MeV). Always in (0, 1) for E > 0.
    pub fn beta(&self, E: f64) -> StoppingResult<f64> {
        let gamma = self.gamma(E)?;
        let beta = (1. - 1./(gamma*gamma)).sqrt();
        //E/m below machine precision rounds gamma to exactly 1
        if beta > 0. {
            Ok(beta)
        } else {
            Err(StoppingError::InvalidEnergy { energy: E })
        }
    }
}
