//! Single-server FIFO queueing simulator.
//!
//! Packets arrive according to a Poisson process (exponential
//! inter-arrival times), wait in a FIFO buffer, and depart after a
//! deterministic service time. The tick-driven loop accumulates
//! time-weighted statistics and reports the mean queue length, the mean
//! waiting delay and the server idle fraction at the end of the run.
//! Runs are deterministic under a fixed seed.

pub mod arrival;
pub mod distribution;
pub mod error;
pub mod fifo;
pub mod packet;
pub mod server;
pub mod simulation;
pub mod stats;

pub use error::SimError;
pub use simulation::{SimConfig, SimState, Simulation};
pub use stats::PerfReport;
