//! Events delivered to components.
//!
//! Every component owns an [`EventManager`](eventmanager::EventManager). Once
//! per tick the manager is drained into an [`EventBatch`] that the component's
//! tick behaviour receives. There is no shared event bus: two components on
//! the same entity each see their own queue.
//!
//! Submodules:
//! - [`eventmanager`] – per-component queue plus the optional key snapshot pull
//! - [`input`] – key names and the snapshot of currently held keys

pub mod eventmanager;
pub mod input;

use smallvec::SmallVec;

use crate::events::input::Key;

/// Something that happened before a component's tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key that is currently held down.
    KeyDown(Key),
    /// Application-defined event, queued with
    /// [`GameObject::post_event`](crate::gameobject::GameObject::post_event).
    Named(String),
}

impl Event {
    pub fn key_down(name: &str) -> Self {
        Event::KeyDown(Key::new(name))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Event::Named(name.into())
    }

    /// The key if this is a key-down event.
    pub fn as_key_down(&self) -> Option<&Key> {
        match self {
            Event::KeyDown(key) => Some(key),
            Event::Named(_) => None,
        }
    }
}

/// Events handed to one component for one tick.
pub type EventBatch = SmallVec<[Event; 8]>;
