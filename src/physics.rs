use super::*;

/// Stopping power and range for one initial energy.
pub fn single_energy_range(E0: f64, material: &Material, particle: &Particle, constants: &PhysicalConstants, settings: &RangeSettings) -> StoppingResult<RangeResult> {
    Ok(RangeResult {
        energy: E0,
        stopping_power: energy_loss_rate(E0, material, particle, constants, settings.low_energy_mode)?,
        range: range::stopping_range(E0, material, particle, constants, settings)?,
    })
}

/// Evaluates every initial energy of the input deck, in input order.
pub fn range_loop(options: &Options, material: &Material, particle: &Particle, constants: &PhysicalConstants) -> Result<Vec<RangeResult>> {

    let settings = options.range_settings();
    let total_count = options.energies.len() as u64;

    info!("Processing {} initial energies with {} threads...", total_count, options.num_threads);
    info!("{}; {}.", settings.integration_rule, settings.low_energy_mode);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.num_threads)
        .build()
        .context("Could not build thread pool.")?;

    //Create and configure progress bar
    let bar: ProgressBar = ProgressBar::new(total_count);
    bar.set_style(ProgressStyle::default_bar()
        .template("[{elapsed_precise}][{bar:40.cyan/blue}][{eta_precise}] {percent}%")
        .progress_chars("#>-"));

    let results = pool.install(|| {
        options.energies.par_iter()
            .map(|E0| {
                let result = single_energy_range(*E0, material, particle, constants, &settings)
                    .with_context(|| format!("Range calculation failed for E0 = {} MeV.", E0));
                bar.inc(1);
                result
            })
            .collect::<Result<Vec<RangeResult>>>()
    });

    bar.finish();
    results
}
