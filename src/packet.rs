/// A packet waiting for, or receiving, service.
///
/// Ids are a per-simulation sequence handed out by the arrival process.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Packet {
    id: u64,
    arrival: f64,
}

impl Packet {
    pub fn new(id: u64, arrival: f64) -> Self {
        Packet { id, arrival }
    }

    pub fn get_id(&self) -> u64 {
        self.id
    }

    /// Tick at which the packet joined the queue.
    pub fn get_arrival(&self) -> f64 {
        self.arrival
    }
}
