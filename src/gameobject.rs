//! Entities.
//!
//! A [`GameObject`] is an ordered list of [`Component`]s. Insertion order is
//! tick order. Components are never removed.
//!
//! Lookups return the first component of the requested type. Adding a
//! second component of a kind that is already present is allowed; it will
//! tick like any other, but [`GameObject::get`] keeps returning the first.
//!
//! Dependencies between kinds (controls need a velocity control, which needs
//! a transform; models need a transform) are resolved once, when a component
//! is attached with [`GameObject::attach`] or [`GameObject::with`].

use std::fmt;

use log::debug;

use crate::components::model::Model;
use crate::components::transform::Transform;
use crate::components::{Component, ComponentData, ComponentKind, ComponentType, Siblings};
use crate::events::Event;
use crate::events::input::KeySnapshot;
use crate::platform::Display;
use crate::platform::screen::Screen;
use crate::resources::camera2d::Camera2d;

#[derive(Clone, Debug, Default)]
pub struct GameObject {
    components: Vec<Component>,
}

impl GameObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`GameObject::attach`].
    pub fn with(mut self, data: impl Into<ComponentData>) -> Self {
        self.attach(data);
        self
    }

    /// Append a component as-is, without resolving its dependencies.
    pub fn add_component(&mut self, component: impl Into<Component>) {
        let component = component.into();
        debug!("Adding {} component", component.kind());
        self.components.push(component);
    }

    /// Make sure every dependency of the component's kind is present
    /// (attaching default instances where missing), then append it.
    pub fn attach(&mut self, data: impl Into<ComponentData>) {
        let data = data.into();
        self.ensure_dependencies(data.kind());
        self.add_component(Component::new(data));
    }

    fn ensure_dependencies(&mut self, kind: ComponentKind) {
        for &dependency in kind.dependencies() {
            if !self.has_kind(dependency) {
                self.ensure_dependencies(dependency);
                debug!("{} requires {}; attaching default", kind, dependency);
                self.add_component(Component::new(dependency.default_data()));
            }
        }
    }

    /// Attach `fallback` unless a `T` is already present. Returns whether a
    /// `T` was already there.
    pub fn require_component<T: ComponentType>(&mut self, fallback: T) -> bool {
        if self.has::<T>() {
            return true;
        }
        self.add_component(Component::new(fallback));
        false
    }

    pub fn has<T: ComponentType>(&self) -> bool {
        self.has_kind(T::KIND)
    }

    pub fn has_kind(&self, kind: ComponentKind) -> bool {
        self.components.iter().any(|c| c.kind() == kind)
    }

    /// First component of type `T`.
    pub fn get<T: ComponentType>(&self) -> Option<&T> {
        self.components.iter().find_map(|c| c.downcast_ref::<T>())
    }

    pub fn get_mut<T: ComponentType>(&mut self) -> Option<&mut T> {
        self.components.iter_mut().find_map(|c| c.downcast_mut::<T>())
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component_kinds(&self) -> Vec<ComponentKind> {
        self.components.iter().map(Component::kind).collect()
    }

    /// Queue an event on the first component of type `T`. Returns false if
    /// there is no such component.
    pub fn post_event<T: ComponentType>(&mut self, event: Event) -> bool {
        match self.components.iter_mut().find(|c| c.kind() == T::KIND) {
            Some(component) => {
                component.events_mut().push(event);
                true
            }
            None => false,
        }
    }

    /// Tick every component in insertion order. Each one drains its own
    /// event queue and sees the rest of the entity through [`Siblings`].
    pub fn on_tick(&mut self, keys: &KeySnapshot) {
        for index in 0..self.components.len() {
            if let Some((current, mut siblings)) = Siblings::split(&mut self.components, index) {
                current.on_tick(&mut siblings, keys);
            }
        }
    }

    /// Draw this entity's model, if it has one and a transform to place it.
    /// Returns whether anything was drawn.
    pub fn render<D: Display + ?Sized>(
        &self,
        screen: &mut Screen<'_, D>,
        camera: &Camera2d,
    ) -> bool {
        match (self.get::<Model>(), self.get::<Transform>()) {
            (Some(model), Some(transform)) => model.render(transform, screen, camera),
            _ => false,
        }
    }
}

impl fmt::Display for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameObject(")?;
        if !self.components.is_empty() {
            write!(f, "components=[")?;
            for (i, component) in self.components.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", component.kind())?;
            }
            write!(f, "]")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::controls::Controls;
    use crate::components::sprite::Sprite;
    use crate::components::velocitycontrol::VelocityControl;
    use crate::geometry::{Color, Position2d, Velocity};

    #[test]
    fn attach_controls_pulls_in_dependency_chain() {
        let mut obj = GameObject::new();
        obj.attach(Controls::default());
        assert_eq!(
            obj.component_kinds(),
            vec![
                ComponentKind::Transform,
                ComponentKind::VelocityControl,
                ComponentKind::Controls
            ]
        );
        assert!(obj.get::<VelocityControl>().is_some());
    }

    #[test]
    fn attach_model_after_controls_reuses_transform() {
        let obj = GameObject::new()
            .with(Controls::default())
            .with(Model::new(Sprite::default()));
        assert_eq!(obj.components().len(), 4);
        assert_eq!(
            obj.component_kinds()
                .iter()
                .filter(|k| **k == ComponentKind::Transform)
                .count(),
            1
        );
    }

    #[test]
    fn add_component_skips_dependencies() {
        let mut obj = GameObject::new();
        obj.add_component(Controls::default());
        assert_eq!(obj.component_kinds(), vec![ComponentKind::Controls]);
        assert!(obj.get::<VelocityControl>().is_none());
    }

    #[test]
    fn require_component_attaches_only_when_missing() {
        let mut obj = GameObject::new();
        assert!(!obj.require_component(Transform::new(Position2d::at(1.0, 1.0))));
        assert!(obj.require_component(Transform::new(Position2d::at(9.0, 9.0))));
        assert_eq!(obj.components().len(), 1);
        assert_eq!(obj.get::<Transform>().unwrap().position().x, 1.0);
    }

    #[test]
    fn get_returns_same_instance_twice() {
        let obj = GameObject::new().with(Transform::default());
        let a = obj.get::<Transform>().unwrap();
        let b = obj.get::<Transform>().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_kinds_are_allowed_and_first_wins() {
        let mut obj = GameObject::new();
        obj.add_component(Transform::new(Position2d::at(1.0, 0.0)));
        obj.add_component(Transform::new(Position2d::at(2.0, 0.0)));
        assert_eq!(obj.components().len(), 2);
        assert_eq!(obj.get::<Transform>().unwrap().position().x, 1.0);
    }

    #[test]
    fn get_mut_mutates_in_place() {
        let mut obj = GameObject::new().with(Transform::default());
        obj.get_mut::<Transform>()
            .unwrap()
            .add_position(Position2d::at(3.0, 4.0));
        assert_eq!(obj.get::<Transform>().unwrap().position(), Position2d::at(3.0, 4.0));
    }

    #[test]
    fn on_tick_drives_controls_into_velocity() {
        let mut obj = GameObject::new().with(Controls::new(3.0));
        let keys: KeySnapshot = ["d"].into_iter().collect();
        obj.on_tick(&keys);
        let v = obj.get::<VelocityControl>().unwrap().current_velocity();
        assert_eq!(v, Velocity::new(3.0, 90.0));

        obj.on_tick(&KeySnapshot::new());
        let v = obj.get::<VelocityControl>().unwrap().current_velocity();
        assert_eq!(v.magnitude, 0.0);
    }

    #[test]
    fn controls_without_velocity_control_do_nothing() {
        let mut obj = GameObject::new();
        obj.add_component(Controls::default());
        let keys: KeySnapshot = ["w"].into_iter().collect();
        obj.on_tick(&keys);
        assert!(obj.get::<VelocityControl>().is_none());
    }

    #[test]
    fn post_event_targets_first_component_of_kind() {
        let mut obj = GameObject::new().with(Controls::default());
        assert!(obj.post_event::<Controls>(Event::named("boost")));
        assert!(!obj.post_event::<Model>(Event::named("boost")));
        let controls = obj
            .components()
            .iter()
            .find(|c| c.kind() == ComponentKind::Controls)
            .unwrap();
        assert_eq!(controls.events().pending(), 1);

        obj.on_tick(&KeySnapshot::new());
        let controls = obj
            .components()
            .iter()
            .find(|c| c.kind() == ComponentKind::Controls)
            .unwrap();
        assert_eq!(controls.events().pending(), 0);
    }

    #[test]
    fn render_without_model_draws_nothing() {
        let mut platform = crate::platform::headless::HeadlessPlatform::default();
        let obj = GameObject::new().with(Transform::default());
        assert!(!obj.render(&mut Screen::new(&mut platform), &Camera2d::default()));
    }

    #[test]
    fn render_with_model_draws_sprite() {
        let mut platform = crate::platform::headless::HeadlessPlatform::default();
        let obj = GameObject::new().with(Model::new(Sprite::Pixel(Color::GREEN)));
        assert!(obj.render(&mut Screen::new(&mut platform), &Camera2d::default()));
        assert_eq!(platform.pending().len(), 1);
    }

    #[test]
    fn display_lists_component_kinds() {
        let obj = GameObject::new().with(Model::default());
        assert_eq!(obj.to_string(), "GameObject(components=[Transform, Model])");
        assert_eq!(GameObject::new().to_string(), "GameObject()");
    }
}
