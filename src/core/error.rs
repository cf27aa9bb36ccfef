//! Centralised error types used across the crate.

use std::{fmt, io};

use thiserror::Error;

use crate::core::weights::WeightParseError;

/// Input-validation faults raised by the generator and the samplers.
///
/// Every variant is a caller programming error; none is retryable and no
/// partial output accompanies it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("modulus {0} must be at least 2")]
    InvalidModulus(i64),
    #[error("sample count {0} must not be negative")]
    InvalidSampleCount(i64),
    #[error("range bound {0} must be a finite value greater than zero")]
    InvalidRange(RangeBound),
    #[error("probability vector is empty")]
    EmptyDistribution,
}

/// Sampler range bound exactly as the caller passed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeBound {
    Real(f64),
    Integer(i64),
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(c) => write!(f, "{c}"),
            Self::Integer(c) => write!(f, "{c}"),
        }
    }
}

/// Precise plot configuration faults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("configuration missing field `{0}`")]
    MissingField(&'static str),
    #[error("histogram needs at least one bin")]
    ZeroBins,
    #[error("lower bound {low} must be < upper bound {high}")]
    InvalidRange { low: f64, high: f64 },
}

/// Top-level error type bubbled up by the display layer and the CLI.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error(transparent)]
    Weights(#[from] WeightParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}")]
    GraphTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
    #[error("sample set is empty")]
    EmptyData,
}
