//! Components attachable to a [`GameObject`](crate::gameobject::GameObject).
//!
//! The set of component kinds is closed ([`ComponentKind`]). Each kind has a
//! concrete type holding typed state, and every concrete type implements
//! [`ComponentType`] so entities can look components up by type without
//! runtime reflection. A [`Component`] pairs that data with its own
//! [`EventManager`].
//!
//! Submodules overview:
//! - [`controls`] – WASD keys to velocity
//! - [`model`] – draws a sprite at the entity's transform
//! - [`sprite`] – drawable sprite variants used by models
//! - [`transform`] – world position, the sole position authority
//! - [`velocitycontrol`] – current velocity of the entity

pub mod controls;
pub mod model;
pub mod sprite;
pub mod transform;
pub mod velocitycontrol;

use std::fmt;

use crate::components::controls::Controls;
use crate::components::model::Model;
use crate::components::transform::Transform;
use crate::components::velocitycontrol::VelocityControl;
use crate::events::EventBatch;
use crate::events::eventmanager::EventManager;
use crate::events::input::KeySnapshot;

/// Every kind of component the engine knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Transform,
    VelocityControl,
    Controls,
    Model,
}

impl ComponentKind {
    /// Kinds that must be present on the entity before this one is attached.
    pub fn dependencies(self) -> &'static [ComponentKind] {
        match self {
            ComponentKind::Transform => &[],
            ComponentKind::VelocityControl => &[ComponentKind::Transform],
            ComponentKind::Controls => &[ComponentKind::VelocityControl],
            ComponentKind::Model => &[ComponentKind::Transform],
        }
    }

    /// The instance attached when this kind is required but missing.
    pub fn default_data(self) -> ComponentData {
        match self {
            ComponentKind::Transform => Transform::default().into(),
            ComponentKind::VelocityControl => VelocityControl::default().into(),
            ComponentKind::Controls => Controls::default().into(),
            ComponentKind::Model => Model::default().into(),
        }
    }

    /// Whether components of this kind receive the key snapshot.
    pub fn listens_to_input(self) -> bool {
        matches!(self, ComponentKind::Controls)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Typed state of one component.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentData {
    Transform(Transform),
    VelocityControl(VelocityControl),
    Controls(Controls),
    Model(Model),
}

impl ComponentData {
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentData::Transform(_) => ComponentKind::Transform,
            ComponentData::VelocityControl(_) => ComponentKind::VelocityControl,
            ComponentData::Controls(_) => ComponentKind::Controls,
            ComponentData::Model(_) => ComponentKind::Model,
        }
    }

    fn tick(&mut self, siblings: &mut Siblings<'_>, events: &EventBatch) {
        match self {
            ComponentData::VelocityControl(v) => v.tick(siblings, events),
            ComponentData::Controls(c) => c.tick(siblings, events),
            // transforms and models have no per-tick behaviour
            ComponentData::Transform(_) | ComponentData::Model(_) => {}
        }
    }
}

/// Implemented by each concrete component type.
pub trait ComponentType: Sized + Into<ComponentData> {
    const KIND: ComponentKind;

    fn downcast(data: &ComponentData) -> Option<&Self>;

    fn downcast_mut(data: &mut ComponentData) -> Option<&mut Self>;
}

/// A component attached to an entity: its data plus its own event queue.
#[derive(Clone, Debug)]
pub struct Component {
    data: ComponentData,
    events: EventManager,
}

impl Component {
    pub fn new(data: impl Into<ComponentData>) -> Self {
        let data = data.into();
        let events = if data.kind().listens_to_input() {
            EventManager::with_input()
        } else {
            EventManager::new()
        };
        Self { data, events }
    }

    pub fn kind(&self) -> ComponentKind {
        self.data.kind()
    }

    pub fn data(&self) -> &ComponentData {
        &self.data
    }

    pub fn events(&self) -> &EventManager {
        &self.events
    }

    pub(crate) fn events_mut(&mut self) -> &mut EventManager {
        &mut self.events
    }

    pub fn downcast_ref<T: ComponentType>(&self) -> Option<&T> {
        T::downcast(&self.data)
    }

    pub fn downcast_mut<T: ComponentType>(&mut self) -> Option<&mut T> {
        T::downcast_mut(&mut self.data)
    }

    /// Drain this component's events and run its tick behaviour.
    pub(crate) fn on_tick(&mut self, siblings: &mut Siblings<'_>, keys: &KeySnapshot) {
        let batch = self.events.drain(keys);
        self.data.tick(siblings, &batch);
    }
}

impl<T: ComponentType> From<T> for Component {
    fn from(value: T) -> Self {
        Component::new(value)
    }
}

/// The other components of the entity currently ticking.
///
/// Lookups follow entity insertion order and skip the ticking component
/// itself.
pub struct Siblings<'a> {
    before: &'a mut [Component],
    after: &'a mut [Component],
}

impl<'a> Siblings<'a> {
    /// Split `components` around `index`, returning the component at
    /// `index` and a view of everything else. `None` if out of bounds.
    pub(crate) fn split(
        components: &'a mut [Component],
        index: usize,
    ) -> Option<(&'a mut Component, Siblings<'a>)> {
        if index >= components.len() {
            return None;
        }
        let (before, rest) = components.split_at_mut(index);
        let (current, after) = rest.split_first_mut()?;
        Some((current, Siblings { before, after }))
    }

    pub fn get<T: ComponentType>(&self) -> Option<&T> {
        self.before
            .iter()
            .chain(self.after.iter())
            .find_map(|c| c.downcast_ref::<T>())
    }

    pub fn get_mut<T: ComponentType>(&mut self) -> Option<&mut T> {
        self.before
            .iter_mut()
            .chain(self.after.iter_mut())
            .find_map(|c| c.downcast_mut::<T>())
    }
}
