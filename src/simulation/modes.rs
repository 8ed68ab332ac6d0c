//! Initial conditions built from a superposition of sine modes.
//!
//! Every mode has an integer frequency, so it completes a whole number of periods over
//! `[0, zmax]` and the profile is periodic with `S[0] == S[zmax] == 0`.

use ndarray::{Array1, ArrayView1};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

use super::error::{Result, SimulationError};
use super::variables::Constants;

/// One sinusoidal contribution: `amplitude * sin(2π * frequency * i / zmax)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mode {
    amplitude: f64,
    frequency: u32,
}

impl Mode {
    /// Frequencies are taken as `f64` so that fractional, zero, negative and non-finite
    /// values are all rejected here rather than truncated somewhere upstream.
    pub fn new(amplitude: f64, frequency: f64) -> Result<Self> {
        if !amplitude.is_finite() {
            return Err(SimulationError::InvalidAmplitude(amplitude));
        }
        if !frequency.is_finite()
            || frequency < 1.0
            || frequency.fract() != 0.0
            || frequency > f64::from(u32::MAX)
        {
            return Err(SimulationError::InvalidFrequency(frequency));
        }
        Ok(Mode {
            amplitude,
            frequency: frequency as u32,
        })
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Value of this mode at grid index `i`.
    pub fn sample(&self, i: usize, zmax: usize) -> f64 {
        // reduce the phase exactly so that i and i + zmax give identical samples
        let zmax = zmax as u64;
        let phase = (u64::from(self.frequency) * (i as u64 % zmax)) % zmax;
        self.amplitude * (2.0 * PI * phase as f64 / zmax as f64).sin()
    }
}

impl FromStr for Mode {
    type Err = SimulationError;

    /// Parses `amplitude,frequency`, e.g. `1,2` or `0.5,4`.
    fn from_str(s: &str) -> Result<Self> {
        let syntax = || SimulationError::InvalidModeSyntax(s.to_string());
        let (amplitude, frequency) = s.split_once(',').ok_or_else(syntax)?;
        let amplitude: f64 = amplitude.trim().parse().map_err(|_| syntax())?;
        let frequency: f64 = frequency.trim().parse().map_err(|_| syntax())?;
        Mode::new(amplitude, frequency)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "amp: {}, freq: {}", self.amplitude, self.frequency)
    }
}

/// Sum of all `modes` sampled at `i = 0..=zmax`.
///
/// An empty mode list is valid and gives an all-zero profile.
pub fn initial_profile(modes: &[Mode], zmax: usize) -> Result<Array1<f64>> {
    if zmax < 1 {
        return Err(SimulationError::InvalidDimensions(format!("zmax={}", zmax)));
    }
    Ok(Array1::from_shape_fn(zmax + 1, |i| {
        modes.iter().map(|mode| mode.sample(i, zmax)).sum()
    }))
}

/*
== How the magnetic field starts relative to the electric field ===============
*/

// Dropdown in the UI will be automatically populated with these options
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Coupling {
    /// `B = E * sqrt(mu * epsil)`: travels towards +z
    #[default]
    Forward,
    /// `B = -E * sqrt(mu * epsil)`: travels towards -z
    Backward,
    /// `B = 0`: equal parts forward and backward, a standing wave
    Standing,
}

/// Initial magnetic profile paired with `electric` under the chosen coupling.
pub fn magnetic_profile(
    coupling: Coupling,
    electric: ArrayView1<f64>,
    constants: &Constants,
) -> Array1<f64> {
    let impedance = (constants.mu * constants.epsil).sqrt();
    match coupling {
        Coupling::Forward => electric.mapv(|e| e * impedance),
        Coupling::Backward => electric.mapv(|e| -e * impedance),
        Coupling::Standing => Array1::zeros(electric.len()),
    }
}
