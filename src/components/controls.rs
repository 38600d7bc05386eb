//! Keyboard controls.
//!
//! Maps WASD key-down events to a velocity on the sibling
//! [`VelocityControl`]: `w` → 0°, `d` → 90°, `s` → 180°, `a` → 270°. When
//! several keys are held the direction is the plain arithmetic mean of their
//! angles, so `w` + `s` gives 90° rather than cancelling out.

use smallvec::SmallVec;

use crate::components::velocitycontrol::VelocityControl;
use crate::components::{ComponentData, ComponentKind, ComponentType, Siblings};
use crate::events::EventBatch;
use crate::events::input::Key;
use crate::geometry::Velocity;

const KEY_DIRECTIONS: [(&str, f32); 4] = [("w", 0.0), ("d", 90.0), ("s", 180.0), ("a", 270.0)];

fn direction_for(key: &Key) -> Option<f32> {
    KEY_DIRECTIONS
        .iter()
        .find(|(name, _)| key.matches(name))
        .map(|(_, degrees)| *degrees)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Controls {
    pub speed: f32,
}

impl Controls {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Velocity implied by the key-down events in `events`, or `None` when
    /// no directional key is held.
    pub fn velocity_for(&self, events: &EventBatch) -> Option<Velocity> {
        let directions: SmallVec<[f32; 4]> = events
            .iter()
            .filter_map(|e| e.as_key_down())
            .filter_map(direction_for)
            .collect();

        if directions.is_empty() {
            return None;
        }
        let mean = directions.iter().sum::<f32>() / directions.len() as f32;
        Some(Velocity::new(self.speed, mean))
    }

    pub fn tick(&mut self, siblings: &mut Siblings<'_>, events: &EventBatch) {
        let Some(velocity_control) = siblings.get_mut::<VelocityControl>() else {
            return;
        };
        match self.velocity_for(events) {
            Some(v) => velocity_control.set_velocity(v, false),
            None => velocity_control.set_velocity(Velocity::new(0.0, 0.0), false),
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ComponentType for Controls {
    const KIND: ComponentKind = ComponentKind::Controls;

    fn downcast(data: &ComponentData) -> Option<&Self> {
        match data {
            ComponentData::Controls(c) => Some(c),
            _ => None,
        }
    }

    fn downcast_mut(data: &mut ComponentData) -> Option<&mut Self> {
        match data {
            ComponentData::Controls(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Controls> for ComponentData {
    fn from(c: Controls) -> Self {
        ComponentData::Controls(c)
    }
}
