use super::*;

/// What to do when the Bethe-Bloch bracket ln(2 me beta^2 gamma^2 / I) - beta^2 is not positive.
#[derive(Deserialize, PartialEq, Clone, Copy, Debug)]
pub enum LowEnergyMode {
    /// Fail with a formula breakdown error.
    REJECT,
    /// Return the raw value of the formula, negative or not.
    PROPAGATE,
}

impl fmt::Display for LowEnergyMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LowEnergyMode::REJECT => write!(f, "Reject energies below the Bethe-Bloch breakdown"),
            LowEnergyMode::PROPAGATE => write!(f, "Propagate raw Bethe-Bloch values below breakdown"),
        }
    }
}

/// Quadrature rule applied to sampled integrands.
#[derive(Deserialize, PartialEq, Clone, Copy, Debug)]
pub enum IntegrationRule {
    /// Composite Simpson's rule on possibly non-uniform samples, with Cartwright's correction
    /// for the last interval when the number of intervals is odd.
    SIMPSON,
    /// Composite trapezoidal rule.
    TRAPEZOID,
}

impl fmt::Display for IntegrationRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            IntegrationRule::SIMPSON => write!(f, "Composite Simpson's rule"),
            IntegrationRule::TRAPEZOID => write!(f, "Composite trapezoidal rule"),
        }
    }
}
