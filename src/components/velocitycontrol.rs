//! Velocity accumulation component.
//!
//! [`VelocityControl`] stores the entity's current [`Velocity`]. Other
//! components (usually [`Controls`](super::controls::Controls)) write to it;
//! its own tick does nothing and is the place to hang movement behaviour.

use crate::components::{ComponentData, ComponentKind, ComponentType, Siblings};
use crate::events::EventBatch;
use crate::geometry::{Velocity, normalize_degrees};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VelocityControl {
    /// Initial scalar speed; informational only.
    pub velocity: f32,
    current_velocity: Velocity,
    /// Carried over from older versions; never written.
    pub last_90_velocity: Velocity,
}

impl VelocityControl {
    /// Start with `velocity` pointing at 0°.
    pub fn new(velocity: f32) -> Self {
        Self {
            velocity,
            current_velocity: Velocity::new(velocity, 0.0),
            last_90_velocity: Velocity::default(),
        }
    }

    pub fn current_velocity(&self) -> Velocity {
        self.current_velocity
    }

    /// Compose `v` onto the current velocity.
    pub fn add_velocity(&mut self, v: Velocity) {
        self.current_velocity += v;
    }

    /// Replace the current velocity, or with `combine_angle` keep the
    /// magnitude and move the direction halfway towards `v`'s direction.
    pub fn set_velocity(&mut self, v: Velocity, combine_angle: bool) {
        if combine_angle {
            let current = self.current_velocity;
            self.current_velocity = Velocity::new(
                current.magnitude,
                normalize_degrees((current.direction() + v.direction()) / 2.0),
            );
        } else {
            self.current_velocity = v;
        }
    }

    pub fn tick(&mut self, _siblings: &mut Siblings<'_>, _events: &EventBatch) {}
}

impl ComponentType for VelocityControl {
    const KIND: ComponentKind = ComponentKind::VelocityControl;

    fn downcast(data: &ComponentData) -> Option<&Self> {
        match data {
            ComponentData::VelocityControl(v) => Some(v),
            _ => None,
        }
    }

    fn downcast_mut(data: &mut ComponentData) -> Option<&mut Self> {
        match data {
            ComponentData::VelocityControl(v) => Some(v),
            _ => None,
        }
    }
}

impl From<VelocityControl> for ComponentData {
    fn from(v: VelocityControl) -> Self {
        ComponentData::VelocityControl(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn new_points_initial_speed_at_zero_degrees() {
        let vc = VelocityControl::new(3.0);
        assert_eq!(vc.velocity, 3.0);
        assert!(approx_eq(vc.current_velocity().magnitude, 3.0));
        assert!(approx_eq(vc.current_velocity().direction(), 0.0));
        assert_eq!(vc.last_90_velocity, Velocity::default());
    }

    #[test]
    fn add_velocity_composes_vectors() {
        let mut vc = VelocityControl::new(5.0);
        vc.add_velocity(Velocity::new(5.0, 180.0));
        assert!(vc.current_velocity().magnitude.abs() < EPSILON);
    }

    #[test]
    fn set_velocity_replaces_without_combining() {
        let mut vc = VelocityControl::new(1.0);
        vc.set_velocity(Velocity::new(4.0, 270.0), false);
        assert_eq!(vc.current_velocity(), Velocity::new(4.0, 270.0));
    }

    #[test]
    fn set_velocity_combines_angle_and_keeps_magnitude() {
        let mut vc = VelocityControl::new(0.0);
        vc.set_velocity(Velocity::new(2.0, 90.0), false);
        vc.set_velocity(Velocity::new(9.0, 270.0), true);
        assert!(approx_eq(vc.current_velocity().magnitude, 2.0));
        assert!(approx_eq(vc.current_velocity().direction(), 180.0));
    }
}
