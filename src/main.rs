//! Parses the command line, integrates the fields, then animates them

mod app;
use crate::app::MaxwellApp;

use clap::Parser;
use egui::{Pos2, Style, Vec2, Visuals, pos2, vec2};
use log::info;
use maxwell1d::simulation::variables::{
    DEFAULT_STRIDE, DEFAULT_TMAX, DEFAULT_ZMAX, EPSIL, FACT, MU,
};
use maxwell1d::{Constants, Coupling, Grid, LeapfrogOrder, Mode, Simulation, SimulationConfig};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "maxwell1d")]
#[command(about = "Animate a 1-D electromagnetic wave integrated with a leapfrog FDTD scheme")]
#[command(version)]
#[command(after_help = "Examples:\n  \
    maxwell1d 1,2        a sine wave of amplitude 1 with 2 peaks\n  \
    maxwell1d 1,1 3,4    amplitude 1 with 1 peak plus amplitude 3 with 4 peaks")]
struct Args {
    /// Initial modes as amplitude,frequency with an integer frequency [default: 1,2]
    #[arg(value_name = "AMP,FREQ", allow_hyphen_values = true)]
    modes: Vec<Mode>,

    /// Number of spatial intervals
    #[arg(long, default_value_t = DEFAULT_ZMAX)]
    zmax: usize,

    /// Number of time steps
    #[arg(long, default_value_t = DEFAULT_TMAX)]
    tmax: usize,

    /// Permeability
    #[arg(long, default_value_t = MU.default)]
    mu: f64,

    /// Permittivity
    #[arg(long, default_value_t = EPSIL.default)]
    epsil: f64,

    /// Stability factor dt / (2 dz); keep fact / sqrt(mu * epsil) at or below 1
    #[arg(long, default_value_t = FACT.default)]
    fact: f64,

    /// Leapfrog ordering (magnetic-first, electric-first, alternating)
    #[arg(long, default_value = "magnetic-first")]
    order: LeapfrogOrder,

    /// Initial magnetic field (forward, backward, standing)
    #[arg(long, default_value = "forward")]
    coupling: Coupling,

    /// Time steps advanced per animation frame
    #[arg(long, default_value_t = DEFAULT_STRIDE)]
    stride: usize,

    /// Print a per-frame summary instead of opening a window
    #[arg(long)]
    headless: bool,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        let modes = if self.modes.is_empty() {
            SimulationConfig::default_modes()
        } else {
            self.modes.clone()
        };
        SimulationConfig {
            constants: Constants {
                mu: self.mu,
                epsil: self.epsil,
                fact: self.fact,
            },
            grid: Grid::new(self.zmax, self.tmax),
            modes,
            coupling: self.coupling,
            order: self.order,
        }
    }
}

fn print_summary(simulation: &Simulation, stride: usize) {
    let history = simulation.history();
    println!("{:>8} {:>6} {:>12} {:>12}", "n", "peak", "max|Ex|", "max|By|");
    for n in (0..=history.tmax()).step_by(stride.max(1)) {
        let frame = history.frame(n);
        println!(
            "{:>8} {:>6} {:>12.6} {:>12.6}",
            n,
            history.peak_index(n),
            frame.max_abs_ex(),
            frame.max_abs_by()
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();

    info!("Running simulation with initial conditions:");
    for mode in &config.modes {
        info!("  {}", mode);
    }
    let simulation = Simulation::new(config)?;

    if args.headless {
        print_summary(&simulation, args.stride);
        return Ok(());
    }

    const WINDOW_POSITION: Pos2 = pos2(50.0, 50.0);
    const WINDOW_SIZE: Vec2 = vec2(1500.0, 900.0);
    const MIN_WINDOW_SIZE: Vec2 = vec2(100.0, 100.0);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_position(WINDOW_POSITION),
        ..Default::default()
    };

    let stride = args.stride;
    eframe::run_native(
        "Maxwell 1D",
        native_options,
        Box::new(move |cc| {
            let style = Style {
                visuals: Visuals::dark(),
                ..Style::default()
            };
            cc.egui_ctx.set_style(style);
            Ok(Box::new(MaxwellApp::new(cc, simulation, stride)))
        }),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_modes_falls_back_to_the_default() {
        let args = Args::parse_from(["maxwell1d"]);
        let config = args.config();
        assert_eq!(config.modes, SimulationConfig::default_modes());
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn parses_modes_and_options() {
        let args = Args::parse_from([
            "maxwell1d", "--zmax", "64", "--fact", "0.25", "--order", "alternating",
            "--coupling", "standing", "1,1", "-3,4",
        ]);
        let config = args.config();
        assert_eq!(
            config.modes,
            vec![Mode::new(1.0, 1.0).unwrap(), Mode::new(-3.0, 4.0).unwrap()]
        );
        assert_eq!(config.grid.zmax, 64);
        assert_eq!(config.constants.fact, 0.25);
        assert_eq!(config.order, LeapfrogOrder::Alternating);
        assert_eq!(config.coupling, Coupling::Standing);
    }

    #[test]
    fn rejects_fractional_frequency() {
        assert!(Args::try_parse_from(["maxwell1d", "1,2.5"]).is_err());
        assert!(Args::try_parse_from(["maxwell1d", "help"]).is_err());
    }
}
