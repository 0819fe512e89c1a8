use log::info;

use crate::arrival::ArrivalProcess;
use crate::distribution::{Exponential, MutDistribution};
use crate::error::SimError;
use crate::fifo::FifoBuffer;
use crate::server::{Server, ServiceEvent};
use crate::stats::{PerfReport, StatsAccumulator};

/// Invocation parameters for one run.
///
/// `ticks` is unsigned, so a zero horizon is a valid (empty) run rather
/// than a parameter error; the distribution parameters must be strictly
/// positive and finite.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct SimConfig {
    pub ticks: u64,
    pub arrival_rate: f64,
    pub service_time: f64,
    pub seed: u64,
}

impl SimConfig {
    /// Fails fast, before any simulation state is built.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.arrival_rate.is_finite() || self.arrival_rate <= 0. {
            return Err(SimError::InvalidParameter {
                name: "arrival_rate",
                value: self.arrival_rate,
            });
        }
        if !self.service_time.is_finite() || self.service_time <= 0. {
            return Err(SimError::InvalidParameter {
                name: "service_time",
                value: self.service_time,
            });
        }
        Ok(())
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SimState {
    NotStarted,
    Running,
    Finished,
}

/// The driver. Owns the clock, the waiting line, the server and the
/// accumulator, and advances them tick by tick.
///
/// Within a tick, arrivals are processed before departures: a packet
/// arriving at tick t is visible to tick t's departure check, so it can
/// enter service in its arrival tick when the server is idle. The
/// statistics sample is taken last, after both steps.
pub struct Simulation<T>
where
    T: MutDistribution<f64>,
{
    ticks: u64,
    clock: u64,
    state: SimState,
    arrivals: ArrivalProcess<T>,
    buffer: FifoBuffer,
    server: Server,
    stats: StatsAccumulator,
}

impl Simulation<Exponential> {
    /// The standard discipline: exponential inter-arrivals, deterministic
    /// service.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Simulation::with_iat_distribution(
            Exponential::new(config.arrival_rate),
            config.ticks,
            config.service_time,
            config.seed,
        ))
    }
}

impl<T> Simulation<T>
where
    T: MutDistribution<f64>,
{
    /// Assembles a simulation around an arbitrary inter-arrival
    /// distribution. `new` is the standard entry point; this one exists
    /// so deterministic schedules can drive the same machinery.
    pub fn with_iat_distribution(iat: T, ticks: u64, service_time: f64, seed: u64) -> Self {
        Simulation {
            ticks,
            clock: 0,
            state: SimState::NotStarted,
            arrivals: ArrivalProcess::new(iat, seed),
            buffer: FifoBuffer::new(),
            server: Server::new(service_time),
            stats: StatsAccumulator::new(),
        }
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn queue_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn server_busy(&self) -> bool {
        !self.server.is_idle()
    }

    /// Advances one tick: arrival step, departure step, statistics
    /// sample, in that order.
    pub fn step(&mut self) -> Result<(), SimError> {
        assert!(
            self.state != SimState::Finished,
            "step on a finished simulation"
        );
        if self.state == SimState::NotStarted {
            self.state = SimState::Running;
        }

        self.clock += 1;
        let now = self.clock as f64;

        if self.arrivals.step(now, &mut self.buffer) {
            self.stats.record_arrival();
        }
        if let ServiceEvent::Completed { delay } = self.server.step(now, &mut self.buffer)? {
            self.stats.record_departure(delay);
        }
        self.stats.sample_tick(self.buffer.len(), self.server.is_idle());

        if self.clock >= self.ticks {
            self.state = SimState::Finished;
        }
        Ok(())
    }

    /// Runs the configured horizon to completion and reports.
    pub fn run(&mut self) -> Result<PerfReport, SimError> {
        info!("running {} ticks", self.ticks);
        while self.clock < self.ticks {
            self.step()?;
        }
        self.state = SimState::Finished;
        let report = self.report();
        info!(
            "finished: {} arrivals, {} departures",
            report.total_arrivals, report.total_departures
        );
        Ok(report)
    }

    /// Snapshot of the metrics accumulated so far.
    pub fn report(&self) -> PerfReport {
        self.stats.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimConfig {
        SimConfig {
            ticks: 100,
            arrival_rate: 1.0,
            service_time: 1.0,
            seed: 42,
        }
    }

    #[test]
    fn negative_and_zero_rates_fail_fast() {
        let bad_rate = SimConfig {
            arrival_rate: 0.,
            ..config()
        };
        assert_eq!(
            bad_rate.validate(),
            Err(SimError::InvalidParameter {
                name: "arrival_rate",
                value: 0.
            })
        );

        let bad_service = SimConfig {
            service_time: -1.0,
            ..config()
        };
        assert_eq!(
            bad_service.validate(),
            Err(SimError::InvalidParameter {
                name: "service_time",
                value: -1.0
            })
        );

        let nan_rate = SimConfig {
            arrival_rate: f64::NAN,
            ..config()
        };
        assert!(nan_rate.validate().is_err());
    }

    #[test]
    fn lifecycle_moves_through_running_to_finished() {
        let mut sim = Simulation::new(config()).unwrap();
        assert_eq!(sim.state(), SimState::NotStarted);

        sim.step().unwrap();
        assert_eq!(sim.state(), SimState::Running);
        assert_eq!(sim.clock(), 1);

        sim.run().unwrap();
        assert_eq!(sim.state(), SimState::Finished);
        assert_eq!(sim.clock(), 100);
    }

    #[test]
    fn clock_is_monotone_and_queue_never_negative() {
        let mut sim = Simulation::new(config()).unwrap();
        let mut last_clock = sim.clock();
        while sim.state() != SimState::Finished {
            sim.step().unwrap();
            assert!(sim.clock() > last_clock);
            last_clock = sim.clock();

            let report = sim.report();
            assert!(report.total_arrivals >= report.total_departures);
        }
    }
}
