use thiserror::Error;

/// Failure kinds surfaced by the simulator.
///
/// Parameter problems are caught by `SimConfig::validate` before any
/// simulation state exists. `EmptyQueue` is reported by the buffer when a
/// caller pops without checking; the driver guards every pop, so seeing it
/// means an internal invariant was broken.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("pop on an empty queue")]
    EmptyQueue,
}
