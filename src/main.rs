#![allow(non_snake_case)]

use std::env;

use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

use libBetheRange::*;
use libBetheRange::output::{print_summary, RangeTable};

fn main() -> Result<()> {

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        //No input file: proton in terbium
        1 => {
            let result = reference_example()?;
            print_summary(&result, &OutputUnits::default());
        },
        2 => {
            let (options, material, particle, output_units) = input::input(&args[1])?;
            let results = range_loop(&options, &material, &particle, &PhysicalConstants::REFERENCE)?;

            for result in &results {
                println!("E0 = {} MeV", result.energy);
                print_summary(result, &output_units);
            }

            if options.write_files {
                RangeTable::new(&results).write_file(&options, &output_units)?;
            }
        },
        _ => bail!("Too many command line arguments. Usage: BetheRange [input.toml]")
    };

    Ok(())
}
