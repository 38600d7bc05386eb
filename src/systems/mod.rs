//! Per-frame passes run by the engine loop.
//!
//! Submodules overview:
//! - [`render`] – clears the surface and draws every layer through the camera

pub mod render;
