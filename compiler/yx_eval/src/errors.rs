//! Errors surfaced to the host.
//!
//! Evaluation itself never fails: undefined names read as `0.0` and
//! floating-point domain errors propagate as `inf`/`nan`. The errors here
//! come from host-facing operations around evaluation.

use thiserror::Error;

/// Failure addressing the program container.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("program unit {index} out of range (program has {len} units)")]
    UnitOutOfRange { index: usize, len: usize },
}

/// Failure parsing `name=value` seed pairs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("expected `name=value`, found `{pair}`")]
    MissingEquals { pair: String },
    #[error("missing variable name in `{pair}`")]
    EmptyName { pair: String },
    #[error("invalid value `{value}` for variable `{name}`")]
    InvalidValue { name: String, value: String },
}
