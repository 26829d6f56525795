//! Bounded UI event queue for the desktop front panel.
//!
//! - [`EventQueue`]: producer, handed to the button listener. Implements
//!   [`EventSink`]; a push into a full queue fails with
//!   [`SinkError::QueueFull`], like the device's UI event buffer.
//! - [`EventReceiver`]: consumer, read by the application under test.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use platform::{EventSink, SinkError, UiEvent};

/// Interval at which [`EventReceiver::wait_for_event`] re-checks the queue.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

type Shared = Arc<Mutex<VecDeque<UiEvent>>>;

/// Producer half of the UI event pipe.
#[derive(Clone)]
pub struct EventQueue {
    queue: Shared,
    capacity: usize,
}

impl EventQueue {
    /// Create a linked (producer, consumer) pair holding at most `capacity`
    /// unread events.
    pub fn new(capacity: usize) -> (Self, EventReceiver) {
        let q: Shared = Arc::new(Mutex::new(VecDeque::with_capacity(capacity)));
        (
            EventQueue {
                queue: q.clone(),
                capacity,
            },
            EventReceiver { queue: q },
        )
    }

    /// Maximum number of unread events.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl EventSink for EventQueue {
    fn send(&mut self, event: UiEvent) -> Result<(), SinkError> {
        // A poisoned lock means the consumer panicked mid-read; nobody is
        // left to take the event.
        let mut q = self.queue.lock().map_err(|_| SinkError::Rejected)?;
        if q.len() >= self.capacity {
            tracing::warn!(%event, capacity = self.capacity, "UI event queue full, event dropped");
            return Err(SinkError::QueueFull);
        }
        tracing::trace!(%event, "UI event queued");
        q.push_back(event);
        Ok(())
    }
}

/// Consumer half of the UI event pipe.
pub struct EventReceiver {
    queue: Shared,
}

impl EventReceiver {
    /// Take the oldest unread event, if any.
    pub fn poll_event(&mut self) -> Option<UiEvent> {
        self.queue.lock().ok()?.pop_front()
    }

    /// Take every unread event, oldest first.
    pub fn drain(&mut self) -> Vec<UiEvent> {
        self.queue
            .lock()
            .map(|mut q| q.drain(..).collect())
            .unwrap_or_default()
    }

    /// Number of unread events.
    pub fn len(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }

    /// Whether there are no unread events.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Async wait: polls the queue every 5 ms until an event is available.
    pub async fn wait_for_event(&mut self) -> UiEvent {
        loop {
            if let Some(e) = self.poll_event() {
                return e;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use platform::{ButtonId, Command};

    use super::*;

    #[test]
    fn queue_push_and_poll() {
        let (mut producer, mut consumer) = EventQueue::new(4);
        producer.send_command(Command::Esc).unwrap();
        assert_eq!(consumer.poll_event(), Some(UiEvent::Command(Command::Esc)));
        assert_eq!(consumer.poll_event(), None);
    }

    #[test]
    fn queue_capacity_limit() {
        let (mut producer, mut consumer) = EventQueue::new(3);
        for _ in 0..3 {
            producer.send_button_pressed(ButtonId::new(0)).unwrap();
        }
        assert_eq!(
            producer.send_button_pressed(ButtonId::new(0)),
            Err(SinkError::QueueFull)
        );
        assert_eq!(consumer.drain().len(), 3);

        // reading frees room again
        assert!(producer.send_button_pressed(ButtonId::new(0)).is_ok());
    }

    #[test]
    fn cloned_producers_share_the_queue() {
        let (mut a, consumer) = EventQueue::new(2);
        let mut b = a.clone();
        a.send_touch_released().unwrap();
        b.send_touch_released().unwrap();
        assert_eq!(consumer.len(), 2);
        assert_eq!(a.send_touch_released(), Err(SinkError::QueueFull));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_for_event_returns_when_pushed() {
        let (mut producer, mut consumer) = EventQueue::new(1);
        let waiter = tokio::spawn(async move { consumer.wait_for_event().await });
        tokio::time::sleep(Duration::from_millis(20)).await;
        producer.send_generic("WADAPPS", 1).unwrap();
        assert_eq!(
            waiter.await.unwrap(),
            UiEvent::Generic {
                generator: "WADAPPS",
                value: 1
            }
        );
    }
}
