use super::*;

/// `num` evenly spaced values from `start` to `stop`, both inclusive. `start > stop` gives a
/// decreasing grid.
pub fn energy_grid(start: f64, stop: f64, num: usize) -> StoppingResult<Array1<f64>> {
    if num < 2 {
        return Err(StoppingError::InvalidGrid(format!("need at least 2 grid points, got {}", num)));
    }
    if !start.is_finite() || !stop.is_finite() || start == stop {
        return Err(StoppingError::InvalidGrid(format!("degenerate grid bounds {} to {}", start, stop)));
    }

    let mut grid = Array1::linspace(start, stop, num);
    grid[num - 1] = stop;
    Ok(grid)
}

/// Checks that x and y describe a sampled function the quadrature rules can integrate.
fn check_samples(y: &ArrayView1<f64>, x: &ArrayView1<f64>) -> StoppingResult<()> {
    if y.len() != x.len() {
        return Err(StoppingError::InvalidGrid(format!("{} samples for {} abscissae", y.len(), x.len())));
    }
    if x.len() < 2 {
        return Err(StoppingError::InvalidGrid(format!("need at least 2 samples, got {}", x.len())));
    }
    if let Some(value) = x.iter().chain(y.iter()).find(|value| !value.is_finite()) {
        return Err(StoppingError::InvalidGrid(format!("non-finite sample {}", value)));
    }

    let increasing = x[1] > x[0];
    for (x0, x1) in x.iter().zip(x.iter().skip(1)) {
        if (increasing && !(x1 > x0)) || (!increasing && !(x1 < x0)) {
            return Err(StoppingError::InvalidGrid(format!("abscissae not strictly monotonic at {} -> {}", x0, x1)));
        }
    }
    Ok(())
}

/// Simpson panels over samples start..=stop, which must span an even number of intervals.
fn simpson_panels(y: &ArrayView1<f64>, x: &ArrayView1<f64>, start: usize, stop: usize) -> f64 {
    (start..stop).step_by(2).map(|i| {
        let h0 = x[i + 1] - x[i];
        let h1 = x[i + 2] - x[i + 1];
        let hsum = h0 + h1;
        let hprod = h0*h1;
        let h0divh1 = h0/h1;
        hsum/6.*(y[i]*(2. - 1./h0divh1) + y[i + 1]*(hsum*hsum/hprod) + y[i + 2]*(2. - h0divh1))
    }).sum()
}

/// Integrates samples y(x) with composite Simpson's rule.
///
/// Exact for quadratics on any grid and for cubics on uniform grids. With an odd number of
/// intervals, Simpson's rule covers all but the last interval, which gets Cartwright's correction
/// from a parabola through the last three samples. Two samples fall back to the trapezoid.
/// Decreasing x integrates from x[0] down to x[n-1], negating the result.
pub fn simpson(y: ArrayView1<f64>, x: ArrayView1<f64>) -> StoppingResult<f64> {
    check_samples(&y, &x)?;
    let n = x.len();

    if n == 2 {
        return Ok(0.5*(x[1] - x[0])*(y[0] + y[1]));
    }

    if n % 2 == 1 {
        return Ok(simpson_panels(&y, &x, 0, n - 2));
    }

    let mut result = simpson_panels(&y, &x, 0, n - 3);

    let h0 = x[n - 2] - x[n - 3];
    let h1 = x[n - 1] - x[n - 2];
    let alpha = (2.*h1*h1 + 3.*h0*h1)/(6.*(h1 + h0));
    let beta = (h1*h1 + 3.*h0*h1)/(6.*h0);
    let eta = h1*h1*h1/(6.*h0*(h0 + h1));
    result += alpha*y[n - 1] + beta*y[n - 2] - eta*y[n - 3];

    Ok(result)
}

/// Integrates samples y(x) with the composite trapezoidal rule.
pub fn trapezoid(y: ArrayView1<f64>, x: ArrayView1<f64>) -> StoppingResult<f64> {
    check_samples(&y, &x)?;

    Ok((0..x.len() - 1)
        .map(|i| 0.5*(x[i + 1] - x[i])*(y[i] + y[i + 1]))
        .sum())
}

/// Integrates samples y(x) with the chosen rule.
pub fn integrate(y: ArrayView1<f64>, x: ArrayView1<f64>, integration_rule: IntegrationRule) -> StoppingResult<f64> {
    match integration_rule {
        IntegrationRule::SIMPSON => simpson(y, x),
        IntegrationRule::TRAPEZOID => trapezoid(y, x),
    }
}
