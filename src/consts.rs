use super::*;

//Physical constants, at the precision the reference calculation uses
/// Electron rest mass in MeV.
pub const ME: f64 = 0.511;
/// Avogadro's number in 1/mol.
pub const NA: f64 = 6.022E23;
/// Molar mass constant in kg/g.
pub const MU: f64 = 1E-3;
/// Classical electron radius in meters.
pub const RE: f64 = 2.818E-15;

//Energy units, in MeV
/// One electron-volt in MeV.
pub const EV: f64 = 1E-6;
/// One kilo-electron-volt in MeV.
pub const KEV: f64 = 1E-3;
/// One mega-electron-volt in MeV.
pub const MEV: f64 = 1.;
/// One giga-electron-volt in MeV.
pub const GEV: f64 = 1E3;
/// One atomic mass unit in MeV/c^2.
pub const AMU: f64 = 931.49410242;

//Length units, in meters
/// One micron in meters.
pub const MICRON: f64 = 1E-6;
/// One nanometer in meters.
pub const NM: f64 = 1E-9;
/// One millimeter in meters.
pub const MM: f64 = 1E-3;
/// One centimeter in meters.
pub const CM: f64 = 1E-2;

//Density units, in kg/m^3
/// One g/cm^3 in kg/m^3.
pub const G_PER_CM3: f64 = 1E3;

/// Converts a stopping power in MeV/m to MeV/micron.
pub const MEV_PER_M_TO_MEV_PER_MICRON: f64 = MICRON;

/// Lowest energy of the integration grid used by the reference range calculation, in MeV.
pub const DEFAULT_ENERGY_FLOOR: f64 = 0.1;
/// Number of grid points used by the reference range calculation.
pub const DEFAULT_STEPS: usize = 1000;

/// Set of physical constants the Bethe-Bloch formula is evaluated with.
///
/// Values are fixed at construction and only ever borrowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// Electron rest mass in MeV.
    pub electron_mass: f64,
    /// Avogadro's number in 1/mol.
    pub avogadro: f64,
    /// Molar mass constant in kg/g.
    pub molar_mass_constant: f64,
    /// Classical electron radius in meters.
    pub electron_radius: f64,
}

impl PhysicalConstants {
    /// The constants of the reference energy loss calculation.
    pub const REFERENCE: PhysicalConstants = PhysicalConstants {
        electron_mass: ME,
        avogadro: NA,
        molar_mass_constant: MU,
        electron_radius: RE,
    };

    /// CODATA 2018 values.
    pub const CODATA_2018: PhysicalConstants = PhysicalConstants {
        electron_mass: 0.51099895000,
        avogadro: 6.02214076E23,
        molar_mass_constant: 1E-3,
        electron_radius: 2.8179403262E-15,
    };

    /// 4 pi re^2 me, in MeV m^2.
    pub fn bethe_bloch_prefactor(&self) -> f64 {
        4.*PI*self.electron_radius*self.electron_radius*self.electron_mass
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants::REFERENCE
    }
}
