//! Leapfrog FDTD integration of the 1-D source-free Maxwell equations.
//!
//! A plane wave travelling along z has its electric field along x and its magnetic field
//! along y. Starting from a sum of sine modes that fit exactly on a periodic domain, the
//! integrator produces both fields at every grid point for every time step.

pub mod simulation;

pub use simulation::{
    Constants, Coupling, FieldHistory, Grid, LeapfrogOrder, Mode, Simulation, SimulationConfig,
    SimulationError, initial_profile, integrate,
};
