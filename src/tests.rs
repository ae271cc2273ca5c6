#[cfg(test)]
use super::*;
#[cfg(test)]
use float_cmp::approx_eq;

#[cfg(test)]
fn valid_settings(steps: usize) -> RangeSettings {
    RangeSettings {
        steps,
        energy_floor: 1.0,
        ..RangeSettings::default()
    }
}

#[test]
fn test_reference_stopping_power() {
    //Proton in terbium at 17 MeV
    let dEdx = bethe_bloch(17., 65., 159., 614E-6, 8299., 1., 938.272).unwrap();

    assert!(dEdx > 0. && dEdx.is_finite());
    assert!(approx_eq!(f64, dEdx, 0.012030287985188716, epsilon = 1E-12), "dEdx: {} MeV/um Should be ~0.0120303", dEdx);
}

#[test]
fn test_reference_example() {
    let result = reference_example().unwrap();

    assert!(approx_eq!(f64, result.range, 840.1533897943211, epsilon = 1E-6), "range: {} um Should be ~840.153", result.range);

    let lines = output::summary_lines(&result, &OutputUnits::default());
    assert_eq!(lines[0], "Energy loss (-dE/dx) = 0.012 MeV/µm");
    assert_eq!(lines[1], "Stopping range: 840.153 µm");
}

#[test]
fn test_alpha_stopping_power() {
    let material = Material::terbium();
    let particle = Particle::alpha();
    let dEdx = energy_loss_rate(20., &material, &particle, &PhysicalConstants::REFERENCE, LowEnergyMode::REJECT).unwrap();

    assert!(approx_eq!(f64, dEdx, 0.11253317906764651, epsilon = 1E-12), "dEdx: {} MeV/um Should be ~0.112533", dEdx);
}

#[test]
fn test_stopping_power_is_deterministic() {
    let first = bethe_bloch(17., 65., 159., 614E-6, 8299., 1., 938.272).unwrap();
    for _ in 0..10 {
        assert_eq!(first.to_bits(), bethe_bloch(17., 65., 159., 614E-6, 8299., 1., 938.272).unwrap().to_bits());
    }
}

#[test]
fn test_density_and_charge_scaling() {
    let base = bethe_bloch(17., 65., 159., 614E-6, 8299., 1., 938.272).unwrap();

    let double_density = bethe_bloch(17., 65., 159., 614E-6, 2.*8299., 1., 938.272).unwrap();
    assert!(approx_eq!(f64, double_density/base, 2., epsilon = 1E-12), "Ratio: {} Should be 2", double_density/base);

    let negative_charge = bethe_bloch(17., 65., 159., 614E-6, 8299., -1., 938.272).unwrap();
    assert_eq!(negative_charge, base);

    let double_charge = bethe_bloch(17., 65., 159., 614E-6, 8299., 2., 938.272).unwrap();
    assert!(approx_eq!(f64, double_charge/base, 4., epsilon = 1E-12), "Ratio: {} Should be 4", double_charge/base);
}

#[test]
fn test_nonpositive_energy_rejected() {
    let material = Material::terbium();
    let particle = Particle::proton();

    for E in vec![0., -1., f64::NAN, f64::INFINITY, 1E-30] {
        for mode in vec![LowEnergyMode::REJECT, LowEnergyMode::PROPAGATE] {
            let result = energy_loss_rate(E, &material, &particle, &PhysicalConstants::REFERENCE, mode);
            assert!(matches!(result, Err(StoppingError::InvalidEnergy { .. })), "E: {} MeV should be rejected, got {:?}", E, result);
        }
    }
}

#[test]
fn test_breakdown_energy() {
    let material = Material::terbium();
    let particle = Particle::proton();
    let constants = PhysicalConstants::REFERENCE;

    let breakdown = lowest_valid_energy(&material, &particle, &constants).unwrap();
    assert!(approx_eq!(f64, breakdown, 0.28197583987146035, epsilon = 1E-9), "Breakdown: {} MeV Should be ~0.281976", breakdown);

    assert!(energy_loss_rate(breakdown*1.001, &material, &particle, &constants, LowEnergyMode::REJECT).unwrap() > 0.);

    let below = energy_loss_rate(breakdown*0.999, &material, &particle, &constants, LowEnergyMode::REJECT);
    assert!(matches!(below, Err(StoppingError::FormulaBreakdown { .. })));

    let raw = energy_loss_rate(0.1, &material, &particle, &constants, LowEnergyMode::PROPAGATE).unwrap();
    assert!(approx_eq!(f64, raw, -0.5066109039183618, epsilon = 1E-9), "Raw dEdx: {} MeV/um Should be ~-0.50661", raw);

    //Very slow particles fall below breakdown long before beta underflows
    let slow = bethe_bloch(1E-9, 65., 159., 614E-6, 8299., 1., 938.272).unwrap_err();
    assert!(matches!(slow.downcast_ref::<StoppingError>(), Some(StoppingError::FormulaBreakdown { .. })));
}

#[test]
fn test_invalid_parameters_rejected() {
    for (Z, A, I, density, z, m) in vec![
        (0., 159., 614E-6, 8299., 1., 938.272),
        (65., -159., 614E-6, 8299., 1., 938.272),
        (65., 159., 0., 8299., 1., 938.272),
        (65., 159., 614E-6, f64::NAN, 1., 938.272),
        (65., 159., 614E-6, 8299., 0., 938.272),
        (65., 159., 614E-6, 8299., 1., -938.272),
    ] {
        let error = bethe_bloch(17., Z, A, I, density, z, m).unwrap_err();
        assert!(matches!(error.downcast_ref::<StoppingError>(), Some(StoppingError::InvalidParameter { .. })), "{}", error);
    }
}

#[test]
fn test_default_floor_crosses_breakdown() {
    //0.1 MeV lies below the breakdown for protons in terbium
    let error = stopping_range(17., 65., 159., 614E-6, 8299., 1., 938.272, 1000).unwrap_err();
    assert!(matches!(error.downcast_ref::<StoppingError>(), Some(StoppingError::FormulaBreakdown { .. })), "{}", error);
}

#[test]
fn test_stopping_range_convergence() {
    let material = Material::terbium();
    let particle = Particle::proton();
    let constants = PhysicalConstants::REFERENCE;

    let coarse = range::stopping_range(17., &material, &particle, &constants, &valid_settings(1000)).unwrap();
    let fine = range::stopping_range(17., &material, &particle, &constants, &valid_settings(4000)).unwrap();

    assert!(approx_eq!(f64, coarse, 825.4455793454442, epsilon = 1E-6), "Range: {} um Should be ~825.4456", coarse);
    assert!(approx_eq!(f64, fine, 825.4455792453824, epsilon = 1E-6), "Range: {} um Should be ~825.4456", fine);
    assert!(((coarse - fine)/fine).abs() < 1E-8);

    let trapezoid_settings = RangeSettings {
        integration_rule: IntegrationRule::TRAPEZOID,
        ..valid_settings(1000)
    };
    let trapezoidal = range::stopping_range(17., &material, &particle, &constants, &trapezoid_settings).unwrap();
    assert!(approx_eq!(f64, trapezoidal, 825.4455838109202, epsilon = 1E-6), "Range: {} um Should be ~825.4456", trapezoidal);
}

#[test]
fn test_range_sign_convention() {
    let material = Material::terbium();
    let particle = Particle::proton();
    let constants = PhysicalConstants::REFERENCE;
    let settings = valid_settings(1001);

    let range = range::stopping_range(17., &material, &particle, &constants, &settings).unwrap();
    assert!(range > 0.);

    //Positive integrand over the increasing grid
    let curve = energy_loss_curve(17., &material, &particle, &constants, &settings).unwrap();
    let energies: Array1<f64> = curve.energies.iter().rev().cloned().collect();
    let inverse_rates: Array1<f64> = curve.rates.iter().rev().map(|rate| 1./rate).collect();
    let forward = simpson(inverse_rates.view(), energies.view()).unwrap();

    assert!(approx_eq!(f64, range, forward, epsilon = 1E-8), "Range: {} um Forward: {} um", range, forward);
}

#[test]
fn test_energy_loss_curve() {
    let material = Material::terbium();
    let particle = Particle::proton();
    let constants = PhysicalConstants::REFERENCE;

    let curve = energy_loss_curve(17., &material, &particle, &constants, &valid_settings(100)).unwrap();
    assert_eq!(curve.energies.len(), 100);
    assert_eq!(curve.rates.len(), 100);
    assert_eq!(curve.energies[0], 17.);
    assert_eq!(curve.energies[99], 1.);
    assert!(curve.is_physical());
    //Stopping power rises as the particle slows down
    assert!(curve.rates[99] > curve.rates[0]);

    let propagate = RangeSettings {
        low_energy_mode: LowEnergyMode::PROPAGATE,
        ..RangeSettings::default()
    };
    let curve = energy_loss_curve(17., &material, &particle, &constants, &propagate).unwrap();
    assert!(!curve.is_physical());

    let bad_floor = RangeSettings {
        energy_floor: 20.,
        ..RangeSettings::default()
    };
    assert!(matches!(energy_loss_curve(17., &material, &particle, &constants, &bad_floor), Err(StoppingError::InvalidGrid(_))));

    let one_step = valid_settings(1);
    assert!(matches!(energy_loss_curve(17., &material, &particle, &constants, &one_step), Err(StoppingError::InvalidGrid(_))));
}

#[test]
fn test_energy_grid() {
    let grid = energy_grid(17., 0.1, 1000).unwrap();
    assert_eq!(grid.len(), 1000);
    assert_eq!(grid[0], 17.);
    assert_eq!(grid[999], 0.1);
    assert!(grid.iter().zip(grid.iter().skip(1)).all(|(a, b)| b < a));

    assert!(energy_grid(17., 0.1, 1).is_err());
    assert!(energy_grid(1., 1., 10).is_err());
}

#[test]
fn test_simpson() {
    //Quadratics are exact on non-uniform grids, odd and even sample counts
    let x = Array1::from(vec![0., 0.5, 1.5, 2., 3.]);
    let y = x.mapv(|x| x*x);
    assert!(approx_eq!(f64, simpson(y.view(), x.view()).unwrap(), 9., epsilon = 1E-12));

    let x = Array1::from(vec![0., 0.5, 1.5, 2., 3., 3.5]);
    let y = x.mapv(|x| x*x);
    assert!(approx_eq!(f64, simpson(y.view(), x.view()).unwrap(), 3.5*3.5*3.5/3., epsilon = 1E-12));

    //Cubics are exact on uniform grids
    let x = Array1::linspace(0., 4., 5);
    let y = x.mapv(|x| x*x*x);
    assert!(approx_eq!(f64, simpson(y.view(), x.view()).unwrap(), 64., epsilon = 1E-12));

    //Decreasing abscissae negate the integral
    let x = Array1::linspace(4., 0., 5);
    let y = x.mapv(|x| x*x*x);
    assert!(approx_eq!(f64, simpson(y.view(), x.view()).unwrap(), -64., epsilon = 1E-12));

    //Two samples fall back to the trapezoid
    let x = Array1::from(vec![0., 2.]);
    let y = Array1::from(vec![1., 3.]);
    assert_eq!(simpson(y.view(), x.view()).unwrap(), 4.);
    assert_eq!(trapezoid(y.view(), x.view()).unwrap(), 4.);
}

#[test]
fn test_quadrature_rejects_bad_samples() {
    let x = Array1::from(vec![0., 1., 1., 2.]);
    let y = Array1::from(vec![0., 1., 2., 3.]);
    assert!(matches!(simpson(y.view(), x.view()), Err(StoppingError::InvalidGrid(_))));

    let x = Array1::from(vec![0., 1., 2.]);
    let y = Array1::from(vec![0., 1.]);
    assert!(matches!(trapezoid(y.view(), x.view()), Err(StoppingError::InvalidGrid(_))));

    let x = Array1::from(vec![0.]);
    let y = Array1::from(vec![0.]);
    assert!(matches!(simpson(y.view(), x.view()), Err(StoppingError::InvalidGrid(_))));

    let x = Array1::from(vec![0., 1., 2.]);
    let y = Array1::from(vec![0., f64::INFINITY, 1.]);
    assert!(matches!(integrate(y.view(), x.view(), IntegrationRule::SIMPSON), Err(StoppingError::InvalidGrid(_))));
}

#[test]
fn test_codata_constants() {
    let material = Material::terbium();
    let particle = Particle::proton();

    let reference = energy_loss_rate(17., &material, &particle, &PhysicalConstants::REFERENCE, LowEnergyMode::REJECT).unwrap();
    let codata = energy_loss_rate(17., &material, &particle, &PhysicalConstants::CODATA_2018, LowEnergyMode::REJECT).unwrap();

    assert!(((codata - reference)/reference).abs() < 1E-3, "Reference: {} CODATA: {}", reference, codata);
    assert_eq!(PhysicalConstants::default(), PhysicalConstants::REFERENCE);
}

#[test]
fn test_output_units() {
    let result = RangeResult {
        energy: 17.,
        stopping_power: 0.012,
        range: 826.,
    };

    let cm = OutputUnits::new("CM").unwrap();
    assert!(approx_eq!(f64, cm.length(result.range), 0.0826, epsilon = 1E-12));
    assert!(approx_eq!(f64, cm.stopping_power(result.stopping_power), 120., epsilon = 1E-9));

    let lines = output::summary_lines(&result, &cm);
    assert_eq!(lines[0], "Energy loss (-dE/dx) = 120.000 MeV/cm");
    assert_eq!(lines[1], "Stopping range: 0.083 cm");

    assert!(OutputUnits::new("FURLONG").is_err());
}

#[test]
fn test_range_table() {
    let results = vec![
        RangeResult { energy: 5., stopping_power: 0.03, range: 100. },
        RangeResult { energy: 17., stopping_power: 0.012, range: 825. },
    ];

    let mut stream: Vec<u8> = vec![];
    output::RangeTable::new(&results).write(&mut stream, &OutputUnits::default()).unwrap();
    let text = String::from_utf8(stream).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "energy, stopping_power, range");
    assert_eq!(lines[1], "5, 0.03, 100,");
}
