//! In-process publish/subscribe bus for ticket editor domain events.
//!
//! Every subscriber owns an unbounded queue, so each event published after
//! `subscribe` is delivered to it exactly once and in publish order, however
//! far behind the subscriber is.

use std::sync::{Arc, Mutex, PoisonError};

use shared::protocol::DomainEvent;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEnvelope {
    pub sequence: u64,
    pub event: DomainEvent,
}

#[derive(Debug, Default)]
struct Subscribers {
    next_sequence: u64,
    senders: Vec<mpsc::UnboundedSender<EventEnvelope>>,
}

/// Cloneable handle; every clone publishes into the same ordered stream.
/// Subscribers observe the end of the stream once all handles are dropped.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<Subscribers>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.lock().senders.push(sender);
        Subscription { receiver }
    }

    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.lock();
        subscribers.senders.retain(|sender| !sender.is_closed());
        subscribers.senders.len()
    }

    pub fn publish(&self, event: DomainEvent) -> EventEnvelope {
        // Sequencing and fan-out happen under one lock so concurrent
        // publishers cannot interleave differently per subscriber.
        let mut subscribers = self.lock();
        let envelope = EventEnvelope {
            sequence: subscribers.next_sequence,
            event,
        };
        subscribers.next_sequence += 1;

        // A failed send means the subscription was dropped.
        subscribers
            .senders
            .retain(|sender| sender.send(envelope.clone()).is_ok());
        trace!(
            sequence = envelope.sequence,
            stream = %envelope.event.stream(),
            topic = %envelope.event.topic(),
            delivered = subscribers.senders.len(),
            "published domain event"
        );
        envelope
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Subscribers> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<EventEnvelope>,
}

impl Subscription {
    /// Waits for the next event. `None` means the bus is gone and the queue is drained.
    pub async fn recv(&mut self) -> Option<EventEnvelope> {
        self.receiver.recv().await
    }

    /// Returns the next pending event without waiting.
    pub fn try_recv(&mut self) -> Option<EventEnvelope> {
        match self.receiver.try_recv() {
            Ok(envelope) => Some(envelope),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/bus_tests.rs"]
mod tests;
