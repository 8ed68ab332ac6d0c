//! Input validation errors raised before any integration work starts.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("mode frequency must be a positive integer, got {0}")]
    InvalidFrequency(f64),

    #[error("mode amplitude must be finite, got {0}")]
    InvalidAmplitude(f64),

    #[error("mode '{0}' is not of the form amplitude,frequency (e.g. 1,2)")]
    InvalidModeSyntax(String),

    #[error("grid dimensions must be at least 1 ({0})")]
    InvalidDimensions(String),

    #[error("constants must be finite and positive (mu={mu}, epsil={epsil}, fact={fact})")]
    InvalidConstants { mu: f64, epsil: f64, fact: f64 },

    #[error("invalid initial condition: {0}")]
    InvalidInitialCondition(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
