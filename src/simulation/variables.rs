use log::warn;
use static_assertions::const_assert;

use super::error::{Result, SimulationError};
use super::integrator::LeapfrogOrder;
use super::modes::{Coupling, Mode};

/// A tunable quantity with the range offered by the settings sliders.
pub struct Variable {
    pub default: f64,
    pub min: f64,
    pub max: f64,
}

pub const MU: Variable = Variable {
    default: 1.0,
    min: 0.1,
    max: 4.0,
};
pub const EPSIL: Variable = Variable {
    default: 0.5,
    min: 0.1,
    max: 4.0,
};
pub const FACT: Variable = Variable {
    default: 0.1,
    min: 0.001,
    max: 1.0,
};

pub const DEFAULT_ZMAX: usize = 200;
pub const DEFAULT_TMAX: usize = 6000;
pub const DEFAULT_STRIDE: usize = 10;
pub const DEFAULT_MODE: (f64, u32) = (1.0, 2);

// fact * c <= 1 for the defaults, i.e. fact^2 <= mu * epsil
const_assert!(FACT.default * FACT.default <= MU.default * EPSIL.default);
const_assert!(FACT.min > 0.0 && MU.min > 0.0 && EPSIL.min > 0.0);
const_assert!(DEFAULT_ZMAX >= 1 && DEFAULT_TMAX >= 1);

/// Physical constants and the stability factor `fact = dt / (2 dz)`.
///
/// The scheme is only stable while the Courant number `fact * c` stays at or below 1.
/// Past that bound the fields grow without limit; this is a usage contract and nothing
/// in the integrator detects it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    pub mu: f64,
    pub epsil: f64,
    pub fact: f64,
}

impl Constants {
    pub fn validate(&self) -> Result<()> {
        let valid = |x: f64| x.is_finite() && x > 0.0;
        if !(valid(self.mu) && valid(self.epsil) && valid(self.fact)) {
            return Err(SimulationError::InvalidConstants {
                mu: self.mu,
                epsil: self.epsil,
                fact: self.fact,
            });
        }
        Ok(())
    }

    /// Propagation speed `1 / sqrt(mu * epsil)`
    pub fn speed(&self) -> f64 {
        1.0 / (self.mu * self.epsil).sqrt()
    }

    pub fn courant(&self) -> f64 {
        self.fact * self.speed()
    }

    pub fn is_stable(&self) -> bool {
        self.courant() <= 1.0
    }
}

impl Default for Constants {
    fn default() -> Self {
        Constants {
            mu: MU.default,
            epsil: EPSIL.default,
            fact: FACT.default,
        }
    }
}

/// `zmax` spatial intervals (`zmax + 1` samples) and `tmax` time steps (`tmax + 1` slices).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub zmax: usize,
    pub tmax: usize,
}

impl Grid {
    pub fn new(zmax: usize, tmax: usize) -> Self {
        Grid { zmax, tmax }
    }

    pub fn validate(&self) -> Result<()> {
        if self.zmax < 1 || self.tmax < 1 {
            return Err(SimulationError::InvalidDimensions(format!(
                "zmax={}, tmax={}",
                self.zmax, self.tmax
            )));
        }
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(DEFAULT_ZMAX, DEFAULT_TMAX)
    }
}

/// Everything needed to build the initial condition and run the integrator.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub constants: Constants,
    pub grid: Grid,
    pub modes: Vec<Mode>,
    pub coupling: Coupling,
    pub order: LeapfrogOrder,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.constants.validate()?;
        if !self.constants.is_stable() {
            warn!(
                "Courant number {:.3} exceeds 1, fields will grow without bound",
                self.constants.courant()
            );
        }
        Ok(())
    }

    /// The mode used when none is given on the command line.
    pub fn default_modes() -> Vec<Mode> {
        let (amplitude, frequency) = DEFAULT_MODE;
        Mode::new(amplitude, f64::from(frequency))
            .into_iter()
            .collect()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            constants: Constants::default(),
            grid: Grid::default(),
            modes: Self::default_modes(),
            coupling: Coupling::default(),
            order: LeapfrogOrder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_valid_and_stable() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.constants.is_stable());
        assert_eq!(config.modes, vec![Mode::new(1.0, 2.0).unwrap()]);
    }

    #[test]
    fn speed_and_courant() {
        let constants = Constants {
            mu: 1.0,
            epsil: 0.25,
            fact: 0.25,
        };
        assert_relative_eq!(constants.speed(), 2.0);
        assert_relative_eq!(constants.courant(), 0.5);
    }

    #[test]
    fn rejects_bad_constants() {
        for (mu, epsil, fact) in [
            (0.0, 1.0, 0.5),
            (1.0, -1.0, 0.5),
            (1.0, 1.0, 0.0),
            (f64::NAN, 1.0, 0.5),
            (1.0, f64::INFINITY, 0.5),
        ] {
            let constants = Constants { mu, epsil, fact };
            assert!(matches!(
                constants.validate(),
                Err(SimulationError::InvalidConstants { .. })
            ));
        }
    }

    #[test]
    fn unstable_fact_is_not_an_error() {
        let config = SimulationConfig {
            constants: Constants {
                mu: 1.0,
                epsil: 1.0,
                fact: 3.0,
            },
            ..SimulationConfig::default()
        };
        assert!(!config.constants.is_stable());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(
            Grid::new(0, 10).validate(),
            Err(SimulationError::InvalidDimensions(
                "zmax=0, tmax=10".to_string()
            ))
        );
        assert!(Grid::new(4, 0).validate().is_err());
        assert!(Grid::new(1, 1).validate().is_ok());
    }
}
