//! tickbox2d library.
//!
//! A small tick-driven 2D engine: entities made of components, a camera with
//! culling, and a loop that ticks, renders and paces itself against a
//! pluggable display and keyboard backend.
//!
//! - [`components`] – component kinds and their per-tick behaviour
//! - [`engine`] – the tick/render loop and its background-thread handle
//! - [`events`] – key snapshots and per-component event queues
//! - [`game`] – demo scene setup
//! - [`gameobject`] – entities
//! - [`geometry`] – rotations, positions, velocities, colours
//! - [`platform`] – display and input backends
//! - [`resources`] – camera, configuration, tick clock
//! - [`systems`] – per-frame passes

pub mod components;
pub mod engine;
pub mod error;
pub mod events;
pub mod game;
pub mod gameobject;
pub mod geometry;
pub mod logger;
pub mod platform;
pub mod resources;
pub mod systems;
