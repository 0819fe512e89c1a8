use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::distribution::MutDistribution;
use crate::fifo::FifoBuffer;
use crate::packet::Packet;

/// Renewal arrival process.
///
/// The schedule advances from the previously scheduled arrival time, never
/// from the current tick, so processing a late arrival does not bias the
/// inter-arrival law. At most one packet is generated per tick; a schedule
/// that has fallen behind catches up on subsequent ticks.
pub struct ArrivalProcess<T>
where
    T: MutDistribution<f64>,
{
    iat_distribution: T,
    rng: StdRng,
    next_arrival: f64,
    next_id: u64,
}

impl<T> ArrivalProcess<T>
where
    T: MutDistribution<f64>,
{
    /// The first arrival is scheduled at construction, one inter-arrival
    /// sample after time zero. Each process owns its RNG stream, so
    /// independent simulations share nothing.
    pub fn new(mut iat_distribution: T, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let first_arrival = iat_distribution.mut_sample(&mut rng);
        ArrivalProcess {
            iat_distribution,
            rng,
            next_arrival: first_arrival,
            next_id: 0,
        }
    }

    pub fn next_arrival(&self) -> f64 {
        self.next_arrival
    }

    /// Arrival step for tick `now`. Stamps and enqueues at most one
    /// packet; returns whether one arrived.
    pub fn step(&mut self, now: f64, buffer: &mut FifoBuffer) -> bool {
        if now < self.next_arrival {
            return false;
        }
        let packet = Packet::new(self.next_id, now);
        self.next_id += 1;
        buffer.push_back(packet);
        debug!(
            "t={}: packet {} arrives, queue length {}",
            now,
            packet.get_id(),
            buffer.len()
        );
        self.next_arrival += self.iat_distribution.mut_sample(&mut self.rng);
        true
    }
}
