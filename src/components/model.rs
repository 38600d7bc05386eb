use log::trace;

use crate::components::sprite::Sprite;
use crate::components::transform::Transform;
use crate::components::{ComponentData, ComponentKind, ComponentType};
use crate::platform::Display;
use crate::platform::screen::Screen;
use crate::resources::camera2d::Camera2d;

/// Visual representation of an entity.
///
/// The model draws its [`Sprite`] at the entity's [`Transform`] when the
/// camera can see it. Position always comes from the transform passed in;
/// the model keeps none of its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub sprite: Sprite,
}

impl Model {
    pub fn new(sprite: Sprite) -> Self {
        Self { sprite }
    }

    /// Draw the sprite if `transform` is inside the camera. Returns whether
    /// anything was drawn.
    pub fn render<D: Display + ?Sized>(
        &self,
        transform: &Transform,
        screen: &mut Screen<'_, D>,
        camera: &Camera2d,
    ) -> bool {
        let pos = transform.position();
        if !camera.is_visible(pos, self.sprite.length()) {
            return false;
        }
        let local = camera.global_to_local(pos);
        trace!("Rendered at: {}", local);
        self.sprite.display(screen, local);
        true
    }
}

impl ComponentType for Model {
    const KIND: ComponentKind = ComponentKind::Model;

    fn downcast(data: &ComponentData) -> Option<&Self> {
        match data {
            ComponentData::Model(m) => Some(m),
            _ => None,
        }
    }

    fn downcast_mut(data: &mut ComponentData) -> Option<&mut Self> {
        match data {
            ComponentData::Model(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Model> for ComponentData {
    fn from(m: Model) -> Self {
        ComponentData::Model(m)
    }
}
