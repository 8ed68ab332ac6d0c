//! Leapfrog FDTD integration of the 1-D source-free Maxwell equations
//!
//! ∂B/∂t = -∂E/∂z and ∂E/∂t = -(1 / (mu epsil)) ∂B/∂z, on a periodic grid.
//!
//! With the central difference `D f[i] = f[i+1] - f[i-1]` and `fact = dt / (2 dz)`, one
//! step of the default ordering is
//!
//!   B[n+1] = B[n] - fact D E[n]
//!   E[n+1] = E[n] - fact / (mu epsil) D B[n+1]
//!
//! A Fourier mode with phase step θ per sample then evolves with
//! `cos ω = 1 - 2 (fact c)^2 sin^2 θ`, so the scheme is neutrally stable exactly when
//! `fact * c <= 1`. Long waves move `2 fact c` samples per step.

use log::{debug, info};
use ndarray::{Array2, ArrayView1, s};
use strum_macros::{Display, EnumIter, EnumString};

use super::error::{Result, SimulationError};
use super::field::{FieldHistory, Periodic};
use super::variables::{Constants, Grid};

/*
== Order in which the two fields are advanced =================================
*/

// Dropdown in the UI will be automatically populated with these options
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum LeapfrogOrder {
    /// B from E[n], then E from the new B
    #[default]
    #[strum(serialize = "magnetic-first", to_string = "B then E")]
    MagneticFirst,
    /// E from B[n], then B from the new E
    #[strum(serialize = "electric-first", to_string = "E then B")]
    ElectricFirst,
    /// E on even steps, B on odd steps; the other field is carried over unchanged
    Alternating,
}

/// Per-step update coefficients for each field.
#[derive(Debug, Clone, Copy)]
struct Coefficients {
    electric: f64,
    magnetic: f64,
}

impl Coefficients {
    fn new(constants: &Constants) -> Self {
        Coefficients {
            electric: constants.fact / (constants.mu * constants.epsil),
            magnetic: constants.fact,
        }
    }
}

/// Evolve `initial_e` and `initial_b` through `grid.tmax` steps.
///
/// Both profiles must have `grid.zmax + 1` finite samples with matching endpoints. The
/// returned history satisfies `Ex[0, n] == Ex[zmax, n]` and `Bx[0, n] == Bx[zmax, n]` for
/// every step.
///
/// `constants.fact` must keep the Courant number `fact * c` at or below 1. Larger values
/// are not rejected; the fields simply grow without bound.
pub fn integrate(
    constants: &Constants,
    grid: &Grid,
    initial_e: ArrayView1<f64>,
    initial_b: ArrayView1<f64>,
    order: LeapfrogOrder,
) -> Result<FieldHistory> {
    grid.validate()?;
    constants.validate()?;
    check_initial("Ex", &initial_e, grid.zmax)?;
    check_initial("Bx", &initial_b, grid.zmax)?;

    info!(
        "Integrating {} steps over {} samples ({}, courant {:.3})",
        grid.tmax,
        grid.zmax + 1,
        order,
        constants.courant()
    );

    let Grid { zmax, tmax } = *grid;
    let mut history = FieldHistory::zeros(zmax, tmax);
    let (ex, by) = history.arrays_mut();
    set_initial(ex, initial_e, zmax);
    set_initial(by, initial_b, zmax);

    let wrap = Periodic::new(zmax);
    let coefficients = Coefficients::new(constants);

    for n in 0..tmax {
        match order {
            LeapfrogOrder::MagneticFirst => {
                advance(by, ex.column(n), coefficients.magnetic, n, wrap);
                advance(ex, by.column(n + 1), coefficients.electric, n, wrap);
            }
            LeapfrogOrder::ElectricFirst => {
                advance(ex, by.column(n), coefficients.electric, n, wrap);
                advance(by, ex.column(n + 1), coefficients.magnetic, n, wrap);
            }
            LeapfrogOrder::Alternating if n % 2 == 0 => {
                advance(ex, by.column(n), coefficients.electric, n, wrap);
                carry(by, n);
            }
            LeapfrogOrder::Alternating => {
                advance(by, ex.column(n), coefficients.magnetic, n, wrap);
                carry(ex, n);
            }
        }
    }

    debug!("Integration finished, max |field| = {}", history.max_abs());
    Ok(history)
}

fn check_initial(name: &str, profile: &ArrayView1<f64>, zmax: usize) -> Result<()> {
    if profile.len() != zmax + 1 {
        return Err(SimulationError::InvalidInitialCondition(format!(
            "{} has {} samples, expected {}",
            name,
            profile.len(),
            zmax + 1
        )));
    }
    if let Some(i) = profile.iter().position(|v| !v.is_finite()) {
        return Err(SimulationError::InvalidInitialCondition(format!(
            "{}[{}] is not finite",
            name, i
        )));
    }
    let (first, last) = (profile[0], profile[zmax]);
    let tolerance = 1e-9 * first.abs().max(last.abs()).max(1.0);
    if (first - last).abs() > tolerance {
        return Err(SimulationError::InvalidInitialCondition(format!(
            "{} is not periodic ({}[0] = {}, {}[{}] = {})",
            name, name, first, name, zmax, last
        )));
    }
    Ok(())
}

fn set_initial(field: &mut Array2<f64>, profile: ArrayView1<f64>, zmax: usize) {
    let mut column = field.column_mut(0);
    column.assign(&profile);
    column[zmax] = column[0];
}

/// `target[.., n+1] = target[.., n] - coefficient * D source`, then re-alias the endpoint.
fn advance(
    target: &mut Array2<f64>,
    source: ArrayView1<f64>,
    coefficient: f64,
    n: usize,
    wrap: Periodic,
) {
    let (previous, mut next) = target.multi_slice_mut((s![.., n], s![.., n + 1]));
    let zmax = wrap.zmax();
    for i in 0..zmax {
        next[i] = previous[i] - coefficient * wrap.central_difference(&source, i);
    }
    next[zmax] = next[0];
}

fn carry(target: &mut Array2<f64>, n: usize) {
    let (previous, mut next) = target.multi_slice_mut((s![.., n], s![.., n + 1]));
    next.assign(&previous);
}
