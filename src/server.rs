use log::debug;

use crate::error::SimError;
use crate::fifo::FifoBuffer;

/// What the departure step did this tick.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ServiceEvent {
    None,
    /// The head of the waiting line entered service; `delay` is the time
    /// it spent waiting.
    Started { delay: f64 },
    /// The packet in service departed; its banked waiting delay is
    /// handed back for accumulation.
    Completed { delay: f64 },
}

enum ServerState {
    Idle,
    Busy { completion: f64, delay: f64 },
}

/// Single server with a deterministic service duration.
///
/// Delay convention: a packet's delay is its waiting time in queue only,
/// measured from arrival to service start. Service time is excluded. The
/// delay is recorded at service start and banked into the statistics when
/// the packet departs.
pub struct Server {
    service_time: f64,
    state: ServerState,
}

impl Server {
    pub fn new(service_time: f64) -> Self {
        Server {
            service_time,
            state: ServerState::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, ServerState::Idle)
    }

    /// Departure step for tick `now`: completes the in-service packet if
    /// its time has elapsed, otherwise moves the head of the waiting line
    /// into service. One transition per tick.
    pub fn step(&mut self, now: f64, buffer: &mut FifoBuffer) -> Result<ServiceEvent, SimError> {
        match self.state {
            ServerState::Busy { completion, delay } => {
                if now < completion {
                    return Ok(ServiceEvent::None);
                }
                self.state = ServerState::Idle;
                debug!("t={}: departure, waited {}", now, delay);
                Ok(ServiceEvent::Completed { delay })
            }
            ServerState::Idle => {
                if buffer.is_empty() {
                    return Ok(ServiceEvent::None);
                }
                let packet = buffer.pop_front()?;
                let delay = now - packet.get_arrival();
                self.state = ServerState::Busy {
                    completion: now + self.service_time,
                    delay,
                };
                debug!(
                    "t={}: packet {} enters service after waiting {}",
                    now,
                    packet.get_id(),
                    delay
                );
                Ok(ServiceEvent::Started { delay })
            }
        }
    }
}
