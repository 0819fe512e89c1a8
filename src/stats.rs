use std::fmt;

/// Running sums for the time-weighted performance metrics. Sampled once
/// per tick by the driver, finalized once at the end of the run.
#[derive(Default)]
pub struct StatsAccumulator {
    queue_area: f64,
    total_delay: f64,
    idle_ticks: u64,
    arrivals: u64,
    departures: u64,
    observed_ticks: u64,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        StatsAccumulator::default()
    }

    pub fn record_arrival(&mut self) {
        self.arrivals += 1;
    }

    pub fn record_departure(&mut self, delay: f64) {
        self.departures += 1;
        self.total_delay += delay;
    }

    /// Per-tick sample, taken after the arrival and departure steps.
    /// `queue_len` counts waiting packets only: the reported metric is
    /// "number in queue", the packet in service is not part of it.
    pub fn sample_tick(&mut self, queue_len: usize, server_idle: bool) {
        self.observed_ticks += 1;
        self.queue_area += queue_len as f64;
        if server_idle {
            self.idle_ticks += 1;
        }
    }

    /// Computes the means. A run with no departures reports its mean
    /// delay as undefined rather than dividing by zero; an empty horizon
    /// reports idle fraction 1.0 by convention.
    pub fn finalize(&self) -> PerfReport {
        let ticks = self.observed_ticks;
        PerfReport {
            mean_queue_length: if ticks == 0 {
                0.
            } else {
                self.queue_area / ticks as f64
            },
            mean_delay: if self.departures == 0 {
                None
            } else {
                Some(self.total_delay / self.departures as f64)
            },
            idle_fraction: if ticks == 0 {
                1.
            } else {
                self.idle_ticks as f64 / ticks as f64
            },
            total_arrivals: self.arrivals,
            total_departures: self.departures,
        }
    }
}

/// End-of-run performance report.
#[derive(PartialEq, Clone, Debug)]
pub struct PerfReport {
    pub mean_queue_length: f64,
    /// `None` when no packet departed during the run.
    pub mean_delay: Option<f64>,
    pub idle_fraction: f64,
    pub total_arrivals: u64,
    pub total_departures: u64,
}

impl fmt::Display for PerfReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "mean_queue_length: {:.6}", self.mean_queue_length)?;
        match self.mean_delay {
            Some(d) => writeln!(f, "mean_delay: {:.6}", d)?,
            None => writeln!(f, "mean_delay: undefined (no departures)")?,
        }
        writeln!(f, "idle_fraction: {:.6}", self.idle_fraction)?;
        writeln!(f, "total_arrivals: {}", self.total_arrivals)?;
        write!(f, "total_departures: {}", self.total_departures)
    }
}
