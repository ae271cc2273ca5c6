use super::*;

/// Material section of an input deck.
#[derive(Deserialize, Clone, Debug)]
pub struct MaterialParameters {
    /// Unit of the mean ionization potential I: EV, KEV, MEV or GEV.
    pub energy_unit: String,
    /// Unit of the density: KG/M3 or G/CM3.
    pub density_unit: String,
    pub Z: f64,
    pub A: f64,
    pub I: f64,
    pub density: f64,
}

/// Absorbing material. All fields are stored in MeV and kg/m^3.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Atomic number.
    pub Z: f64,
    /// Mass number.
    pub A: f64,
    /// Mean ionization potential in MeV.
    pub I: f64,
    /// Mass density in kg/m^3.
    pub density: f64,
}

impl Material {
    pub fn new(material_parameters: &MaterialParameters) -> Result<Material> {

        let energy_unit = energy_unit(&material_parameters.energy_unit)?;

        let density_unit: f64 = match material_parameters.density_unit.as_str() {
            "KG/M3" => 1.,
            "G/CM3" => G_PER_CM3,
            _ => bail!("Input error: incorrect unit {} in input file. Choose one of: KG/M3, G/CM3",
                material_parameters.density_unit)
        };

        Material::from_values(
            material_parameters.Z,
            material_parameters.A,
            material_parameters.I*energy_unit,
            material_parameters.density*density_unit,
        ).context("Input error: invalid material_parameters.")
    }

    /// Builds a material from values already in MeV and kg/m^3, rejecting non-physical ones.
    pub fn from_values(Z: f64, A: f64, I: f64, density: f64) -> StoppingResult<Material> {
        Ok(Material {
            Z: require_positive("atomic number Z", Z)?,
            A: require_positive("mass number A", A)?,
            I: require_positive("mean ionization potential I", I)?,
            density: require_positive("density", density)?,
        })
    }

    /// Terbium, Z = 65, A = 159, I = 614 eV, 8299 kg/m^3.
    pub fn terbium() -> Material {
        Material {
            Z: 65.,
            A: 159.,
            I: 614E-6,
            density: 8299.,
        }
    }

    /// Electron number density in electrons/m^3.
    pub fn electron_density(&self, constants: &PhysicalConstants) -> f64 {
        constants.avogadro*self.Z*self.density/(self.A*constants.molar_mass_constant)
    }
}

/// Converts an energy unit name to its value in MeV.
pub fn energy_unit(name: &str) -> Result<f64> {
    match name {
        "EV" => Ok(EV),
        "KEV" => Ok(KEV),
        "MEV" => Ok(MEV),
        "GEV" => Ok(GEV),
        _ => Err(anyhow!("Input error: incorrect unit {} in input file. Choose one of: EV, KEV, MEV, GEV", name))
    }
}
