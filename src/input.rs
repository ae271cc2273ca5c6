use super::*;

/// BetheRange's internal representation of an input file.
#[derive(Deserialize, Clone, Debug)]
pub struct InputFile {
    pub options: Options,
    pub material_parameters: material::MaterialParameters,
    pub particle_parameters: particle::ParticleParameters,
}

impl InputFile {
    pub fn new(string: &str) -> Result<InputFile> {
        toml::from_str(string).context(
            "Could not parse TOML file. Be sure [options], [material_parameters] and [particle_parameters] are all present."
        )
    }
}

///This helper function is a workaround to issue #368 in serde
fn default_false() -> bool {
    false
}

///This helper function is a workaround to issue #368 in serde
fn one_usize() -> usize {
    1
}

///This helper function is a workaround to issue #368 in serde
fn default_steps() -> usize {
    DEFAULT_STEPS
}

///This helper function is a workaround to issue #368 in serde
fn default_energy_floor() -> f64 {
    DEFAULT_ENERGY_FLOOR
}

///This helper function is a workaround to issue #368 in serde
fn default_low_energy_mode() -> LowEnergyMode {
    LowEnergyMode::REJECT
}

///This helper function is a workaround to issue #368 in serde
fn default_integration_rule() -> IntegrationRule {
    IntegrationRule::SIMPSON
}

///This helper function is a workaround to issue #368 in serde
fn default_length_unit() -> String {
    "MICRON".to_string()
}

/// BetheRange's internal representation of the run-level options.
#[derive(Deserialize, Clone, Debug)]
pub struct Options {
    pub name: String,
    /// Initial kinetic energies, in MeV.
    pub energies: Vec<f64>,
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Lowest energy of the integration grid, in MeV.
    #[serde(default = "default_energy_floor")]
    pub energy_floor: f64,
    #[serde(default = "default_low_energy_mode")]
    pub low_energy_mode: LowEnergyMode,
    #[serde(default = "default_integration_rule")]
    pub integration_rule: IntegrationRule,
    #[serde(default = "one_usize")]
    pub num_threads: usize,
    #[serde(default = "default_false")]
    pub write_files: bool,
    /// Length unit of reported ranges: MICRON, NM, MM, CM or M.
    #[serde(default = "default_length_unit")]
    pub length_unit: String,
}

impl Options {
    pub fn range_settings(&self) -> RangeSettings {
        RangeSettings {
            steps: self.steps,
            energy_floor: self.energy_floor,
            low_energy_mode: self.low_energy_mode,
            integration_rule: self.integration_rule,
        }
    }
}

/// Parses an input deck, converting units and validating every section.
pub fn parse_input(input_toml: &str) -> Result<(Options, Material, Particle, OutputUnits)> {

    let input = InputFile::new(input_toml)?;

    let options = input.options;
    let material = Material::new(&input.material_parameters)?;
    let particle = Particle::new(&input.particle_parameters)?;
    let output_units = OutputUnits::new(&options.length_unit)?;

    //Ensure nonsensical options fail on input
    ensure!(options.num_threads > 0, "Input error: num_threads must be greater than zero.");
    ensure!(options.steps >= 2, "Input error: steps must be at least 2.");
    ensure!(options.energy_floor > 0., "Input error: energy_floor must be greater than zero.");
    ensure!(!options.energies.is_empty(), "Input error: energies must contain at least one initial energy.");
    for E0 in &options.energies {
        ensure!(E0.is_finite() && *E0 > options.energy_floor,
            "Input error: initial energy {} MeV must be above energy_floor = {} MeV.", E0, options.energy_floor);
    }

    Ok((options, material, particle, output_units))
}

/// Reads and parses the input deck at `input_file`.
pub fn input(input_file: &str) -> Result<(Options, Material, Particle, OutputUnits)> {

    let input_toml = std::fs::read_to_string(input_file)
        .with_context(|| format!("Input error: could not open input file {}.", input_file))?;

    parse_input(&input_toml)
        .with_context(|| format!("Input error: could not read input file {}.", input_file))
}
