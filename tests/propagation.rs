//! Integration tests for wave propagation through the leapfrog integrator.

use approx::assert_relative_eq;
use maxwell1d::simulation::{self, magnetic_profile};
use maxwell1d::{
    Constants, Coupling, FieldHistory, Grid, LeapfrogOrder, Mode, SimulationConfig,
    SimulationError, initial_profile, integrate,
};
use strum::IntoEnumIterator;

/// mu = epsil = 1, fact = 0.5, zmax = 20, tmax = 100, a single (1.0, 1) mode.
fn reference_config(order: LeapfrogOrder, coupling: Coupling) -> SimulationConfig {
    SimulationConfig {
        constants: Constants {
            mu: 1.0,
            epsil: 1.0,
            fact: 0.5,
        },
        grid: Grid::new(20, 100),
        modes: vec![Mode::new(1.0, 1.0).unwrap()],
        coupling,
        order,
    }
}

/// Signed shift of the `Ex` peak between consecutive steps, taken in (-zmax/2, zmax/2].
fn peak_shifts(history: &FieldHistory) -> Vec<i64> {
    let zmax = history.zmax() as i64;
    (0..history.tmax())
        .map(|n| {
            let from = history.peak_index(n) as i64;
            let to = history.peak_index(n + 1) as i64;
            let shift = (to - from).rem_euclid(zmax);
            if shift > zmax / 2 { shift - zmax } else { shift }
        })
        .collect()
}

#[test]
fn forward_wave_peak_advances_monotonically() {
    for order in LeapfrogOrder::iter() {
        let history = simulation::run(&reference_config(order, Coupling::Forward)).unwrap();
        let shifts = peak_shifts(&history);

        assert!(
            shifts.iter().all(|&shift| (0..=2).contains(&shift)),
            "{order}: peak moved backwards or jumped: {shifts:?}"
        );
        assert!(shifts.iter().sum::<i64>() > 0, "{order}: peak never moved");
    }
}

#[test]
fn backward_wave_peak_retreats() {
    let config = reference_config(LeapfrogOrder::MagneticFirst, Coupling::Backward);
    let history = simulation::run(&config).unwrap();
    let shifts = peak_shifts(&history);
    assert!(shifts.iter().all(|&shift| (-2..=0).contains(&shift)), "{shifts:?}");
    assert!(shifts.iter().sum::<i64>() < 0);
}

#[test]
fn wave_travels_at_the_discrete_speed() {
    // cos(w) = 1 - 2 (fact c)^2 sin^2(2π / zmax) gives 0.988 samples per step here
    let config = reference_config(LeapfrogOrder::MagneticFirst, Coupling::Forward);
    let history = simulation::run(&config).unwrap();
    let travelled: i64 = peak_shifts(&history).iter().sum();
    assert!((95..=103).contains(&travelled), "travelled {travelled}");

    // alternating advances each field on every other step only
    let config = reference_config(LeapfrogOrder::Alternating, Coupling::Forward);
    let history = simulation::run(&config).unwrap();
    let travelled: i64 = peak_shifts(&history).iter().sum();
    assert!((45..=53).contains(&travelled), "travelled {travelled}");
}

#[test]
fn amplitude_stays_bounded() {
    for order in LeapfrogOrder::iter() {
        for coupling in Coupling::iter() {
            let history = simulation::run(&reference_config(order, coupling)).unwrap();
            let initial_peak = history.frame(0).max_abs_ex();
            assert_relative_eq!(initial_peak, 1.0, epsilon = 1e-12);
            assert!(
                history.ex().iter().all(|v| v.abs() <= 2.0 * initial_peak),
                "{order}/{coupling}: Ex grew past twice its initial peak"
            );
            assert!(history.by().iter().all(|v| v.abs() <= 2.0 * initial_peak));
        }
    }
}

#[test]
fn periodicity_holds_for_every_step() {
    let modes = [
        Mode::new(1.0, 2.0).unwrap(),
        Mode::new(0.5, 4.0).unwrap(),
        Mode::new(-0.25, 7.0).unwrap(),
    ];
    let constants = Constants {
        mu: 2.0,
        epsil: 0.5,
        fact: 0.4,
    };
    let grid = Grid::new(64, 300);
    let e0 = initial_profile(&modes, grid.zmax).unwrap();
    let b0 = magnetic_profile(Coupling::Standing, e0.view(), &constants);

    for order in LeapfrogOrder::iter() {
        let history = integrate(&constants, &grid, e0.view(), b0.view(), order).unwrap();
        for n in 0..=grid.tmax {
            let frame = history.frame(n);
            assert_eq!(frame.ex[0], frame.ex[grid.zmax]);
            assert_eq!(frame.by[0], frame.by[grid.zmax]);
        }
    }
}

#[test]
fn empty_mode_list_stays_at_rest() {
    let config = SimulationConfig {
        modes: Vec::new(),
        grid: Grid::new(32, 64),
        ..SimulationConfig::default()
    };
    let history = simulation::run(&config).unwrap();
    assert_eq!(history.max_abs(), 0.0);
}

#[test]
fn fractional_frequency_never_reaches_the_integrator() {
    assert_eq!(
        "1.0,2.5".parse::<Mode>(),
        Err(SimulationError::InvalidFrequency(2.5))
    );
    assert_eq!(
        Mode::new(1.0, 2.5),
        Err(SimulationError::InvalidFrequency(2.5))
    );
}

#[test]
fn invalid_configs_fail_before_integration() {
    let mut config = reference_config(LeapfrogOrder::MagneticFirst, Coupling::Forward);
    config.grid.tmax = 0;
    assert!(matches!(
        simulation::run(&config),
        Err(SimulationError::InvalidDimensions(_))
    ));

    let mut config = reference_config(LeapfrogOrder::MagneticFirst, Coupling::Forward);
    config.constants.epsil = f64::NAN;
    assert!(matches!(
        simulation::run(&config),
        Err(SimulationError::InvalidConstants { .. })
    ));
}
