//! Contains all simulation logic

pub mod error;
pub mod field;
pub mod integrator;
pub mod modes;
pub mod variables;

use log::info;

pub use error::{Result, SimulationError};
pub use field::{FieldHistory, Frame, Periodic};
pub use integrator::{LeapfrogOrder, integrate};
pub use modes::{Coupling, Mode, initial_profile, magnetic_profile};
pub use variables::{Constants, Grid, SimulationConfig};

/// Build the initial condition described by `config` and integrate it.
pub fn run(config: &SimulationConfig) -> Result<FieldHistory> {
    config.validate()?;
    let electric = initial_profile(&config.modes, config.grid.zmax)?;
    let magnetic = magnetic_profile(config.coupling, electric.view(), &config.constants);
    integrate(
        &config.constants,
        &config.grid,
        electric.view(),
        magnetic.view(),
        config.order,
    )
}

/// Playback over a precomputed field history.
pub struct Simulation {
    config: SimulationConfig,
    history: FieldHistory,
    max_abs: f64,
    step: usize,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let history = run(&config)?;
        Ok(Simulation {
            config,
            max_abs: history.max_abs(),
            history,
            step: 0,
        })
    }

    /// Replace the configuration and recompute. On error the current run is kept.
    pub fn recompute(&mut self, config: SimulationConfig) -> Result<()> {
        self.history = run(&config)?;
        self.max_abs = self.history.max_abs();
        self.config = config;
        self.step = 0;
        info!("Recomputed {} steps", self.history.tmax());
        Ok(())
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn history(&self) -> &FieldHistory {
        &self.history
    }

    /// Largest field magnitude anywhere in the run, cached for plot scaling.
    pub fn max_abs(&self) -> f64 {
        self.max_abs
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn frame(&self) -> Frame<'_> {
        self.history.frame(self.step)
    }

    /// Elapsed time in units of the sample spacing, `n * dt = n * 2 fact`.
    pub fn time(&self) -> f64 {
        self.step as f64 * 2.0 * self.config.constants.fact
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.history.tmax()
    }

    /// Advance the displayed step by `stride`; returns true once the last step is shown.
    pub fn update(&mut self, stride: usize) -> bool {
        self.step = (self.step + stride.max(1)).min(self.history.tmax());
        self.is_finished()
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            grid: Grid::new(20, 25),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn playback_reaches_the_end_and_resets() {
        let mut simulation = Simulation::new(small_config()).unwrap();
        assert_eq!(simulation.step(), 0);
        assert!(!simulation.update(10));
        assert!(!simulation.update(10));
        assert!(simulation.update(10));
        assert_eq!(simulation.step(), 25);

        simulation.reset();
        assert_eq!(simulation.step(), 0);
        assert_eq!(simulation.time(), 0.0);
    }

    #[test]
    fn zero_stride_still_advances() {
        let mut simulation = Simulation::new(small_config()).unwrap();
        simulation.update(0);
        assert_eq!(simulation.step(), 1);
        assert_relative_eq!(simulation.time(), 2.0 * simulation.config().constants.fact);
    }

    #[test]
    fn failed_recompute_keeps_the_old_run() {
        let mut simulation = Simulation::new(small_config()).unwrap();
        simulation.update(5);

        let mut broken = small_config();
        broken.constants.mu = -1.0;
        assert!(simulation.recompute(broken).is_err());
        assert_eq!(simulation.step(), 5);
        assert_eq!(simulation.config(), &small_config());

        let mut bigger = small_config();
        bigger.grid = Grid::new(40, 10);
        simulation.recompute(bigger).unwrap();
        assert_eq!(simulation.step(), 0);
        assert_eq!(simulation.history().zmax(), 40);
        assert_eq!(simulation.frame().ex.len(), 41);
    }
}
