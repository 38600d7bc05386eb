use crate::components::{ComponentData, ComponentKind, ComponentType};
use crate::geometry::Position2d;

/// World position of an entity. The only component holding ground-truth
/// position; everything else reads it from here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    position: Position2d,
}

impl Transform {
    pub fn new(initial: Position2d) -> Self {
        Self { position: initial }
    }

    pub fn position(&self) -> Position2d {
        self.position
    }

    pub fn set_position(&mut self, position: Position2d) {
        self.position = position;
    }

    /// Offset x, y and rotation; rotation is renormalised.
    pub fn add_position(&mut self, delta: Position2d) {
        self.position += delta;
    }
}

impl ComponentType for Transform {
    const KIND: ComponentKind = ComponentKind::Transform;

    fn downcast(data: &ComponentData) -> Option<&Self> {
        match data {
            ComponentData::Transform(t) => Some(t),
            _ => None,
        }
    }

    fn downcast_mut(data: &mut ComponentData) -> Option<&mut Self> {
        match data {
            ComponentData::Transform(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Transform> for ComponentData {
    fn from(t: Transform) -> Self {
        ComponentData::Transform(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rotation2d;

    #[test]
    fn default_is_origin() {
        assert_eq!(Transform::default().position(), Position2d::at(0.0, 0.0));
    }

    #[test]
    fn set_position_replaces() {
        let mut t = Transform::new(Position2d::at(4.0, 4.0));
        t.set_position(Position2d::new(1.0, 2.0, Rotation2d::new(30.0)));
        assert_eq!(t.position(), Position2d::new(1.0, 2.0, Rotation2d::new(30.0)));
    }

    #[test]
    fn add_position_accumulates_and_wraps_rotation() {
        let mut t = Transform::new(Position2d::new(1.0, 1.0, Rotation2d::new(300.0)));
        t.add_position(Position2d::new(2.0, -3.0, Rotation2d::new(90.0)));
        let p = t.position();
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, -2.0);
        assert!((p.rotation.angle() - 30.0).abs() < 1e-4);
    }
}
