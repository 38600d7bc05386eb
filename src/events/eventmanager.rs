use log::trace;

use crate::events::input::KeySnapshot;
use crate::events::{Event, EventBatch};

/// Per-component event queue.
///
/// Components backed by the input subsystem also receive one
/// [`Event::KeyDown`] per held key each time the queue is drained. Key events
/// come first, followed by locally queued events in the order they were
/// pushed.
#[derive(Debug, Clone, Default)]
pub struct EventManager {
    queued: Vec<Event>,
    listens_to_input: bool,
}

impl EventManager {
    /// A manager that only delivers locally queued events.
    pub fn new() -> Self {
        Self::default()
    }

    /// A manager that also delivers the key snapshot.
    pub fn with_input() -> Self {
        Self {
            queued: Vec::new(),
            listens_to_input: true,
        }
    }

    pub fn listens_to_input(&self) -> bool {
        self.listens_to_input
    }

    pub fn push(&mut self, event: Event) {
        self.queued.push(event);
    }

    pub fn pending(&self) -> usize {
        self.queued.len()
    }

    /// Take everything queued so far, prefixed by the held keys when this
    /// manager listens to input. The local queue is empty afterwards.
    pub fn drain(&mut self, keys: &KeySnapshot) -> EventBatch {
        let mut batch = EventBatch::new();
        if self.listens_to_input {
            batch.extend(keys.iter().cloned().map(Event::KeyDown));
        }
        batch.extend(self.queued.drain(..));
        if !batch.is_empty() {
            trace!("draining {} event(s)", batch.len());
        }
        batch
    }
}
