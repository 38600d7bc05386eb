//! Demo scene.
//!
//! A keyboard-controlled red square on layer 0, a strip of four green pixels
//! on layer 1, and a camera that drifts diagonally every tick.

use log::info;

use crate::components::controls::Controls;
use crate::components::model::Model;
use crate::components::sprite::Sprite;
use crate::engine::Engine;
use crate::gameobject::GameObject;
use crate::geometry::{Color, Position2d};
use crate::platform::Platform;

/// Camera movement applied after every tick.
pub const CAMERA_DRIFT: (f32, f32) = (0.1, 0.1);

const PIXEL_STRIP_LEN: usize = 4;

pub fn player() -> GameObject {
    GameObject::new()
        .with(Controls::default())
        .with(Model::new(Sprite::default()))
}

pub fn pixel_strip() -> GameObject {
    GameObject::new().with(Model::new(Sprite::Pixels(vec![
        Color::GREEN;
        PIXEL_STRIP_LEN
    ])))
}

pub fn setup<P: Platform>(engine: &mut Engine<P>) {
    engine.add_object(player(), 0);
    engine.add_object(pixel_strip(), 1);
    engine.set_tick_hook(|engine| {
        let (dx, dy) = CAMERA_DRIFT;
        engine.camera_mut().move_by(Position2d::at(dx, dy));
    });
    info!("Demo scene ready with {} objects", engine.objects().len());
}
