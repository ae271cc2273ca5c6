use super::*;
use std::fs::File;

/// Units ranges and stopping powers are reported in.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputUnits {
    /// Output length unit in meters.
    pub length_unit: f64,
    /// Printed symbol of the length unit.
    pub length_label: &'static str,
}

impl OutputUnits {
    pub fn new(length_unit: &str) -> Result<OutputUnits> {
        let (length_unit, length_label) = match length_unit {
            "MICRON" => (MICRON, "µm"),
            "NM" => (NM, "nm"),
            "MM" => (MM, "mm"),
            "CM" => (CM, "cm"),
            "M" => (1., "m"),
            _ => bail!("Input error: incorrect unit {} in input file. Choose one of: MICRON, NM, MM, CM, M", length_unit)
        };
        Ok(OutputUnits { length_unit, length_label })
    }

    /// Converts a length in microns to the output unit.
    pub fn length(&self, microns: f64) -> f64 {
        microns*(MICRON/self.length_unit)
    }

    /// Converts a stopping power in MeV/micron to MeV per output unit.
    pub fn stopping_power(&self, mev_per_micron: f64) -> f64 {
        mev_per_micron*(self.length_unit/MICRON)
    }
}

impl Default for OutputUnits {
    fn default() -> Self {
        OutputUnits { length_unit: MICRON, length_label: "µm" }
    }
}

/// Stopping power at, and range from, one initial energy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeResult {
    /// Initial kinetic energy in MeV.
    pub energy: f64,
    /// -dE/dx at the initial energy in MeV/micron.
    pub stopping_power: f64,
    /// Stopping range in microns.
    pub range: f64,
}

/// The two console lines reporting one result.
pub fn summary_lines(result: &RangeResult, output_units: &OutputUnits) -> [String; 2] {
    [
        format!("Energy loss (-dE/dx) = {:.3} MeV/{}", output_units.stopping_power(result.stopping_power), output_units.length_label),
        format!("Stopping range: {:.3} {}", output_units.length(result.range), output_units.length_label),
    ]
}

pub fn print_summary(result: &RangeResult, output_units: &OutputUnits) {
    for line in summary_lines(result, output_units) {
        println!("{}", line);
    }
}

/// Range table written to `<name>range.output`.
pub struct RangeTable {
    pub energies: Vec<f64>,
    pub stopping_powers: Vec<f64>,
    pub ranges: Vec<f64>,
}

impl RangeTable {
    pub fn new(results: &[RangeResult]) -> RangeTable {
        RangeTable {
            energies: results.iter().map(|result| result.energy).collect(),
            stopping_powers: results.iter().map(|result| result.stopping_power).collect(),
            ranges: results.iter().map(|result| result.range).collect(),
        }
    }

    /// Writes the table as comma-separated rows with a header.
    pub fn write<W: Write>(&self, stream: &mut W, output_units: &OutputUnits) -> Result<()> {
        writeln!(stream, "energy, stopping_power, range")?;
        for (energy, stopping_power, range) in izip!(&self.energies, &self.stopping_powers, &self.ranges) {
            writeln!(stream, "{}, {}, {},", energy, output_units.stopping_power(*stopping_power), output_units.length(*range))?;
        }
        stream.flush()?;
        Ok(())
    }

    pub fn write_file(&self, options: &Options, output_units: &OutputUnits) -> Result<()> {
        let filename = format!("{}{}", options.name, "range.output");
        let range_output_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&filename)
            .with_context(|| format!("Output error: could not open output file {}.", filename))?;
        let mut range_stream: BufWriter<File> = BufWriter::with_capacity(8000, range_output_file);

        self.write(&mut range_stream, output_units)
            .with_context(|| format!("Output error: could not write to {}.", filename))
    }
}
