//! Engine-wide resources.
//!
//! Submodules overview:
//! - [`camera2d`] – viewport position, culling and world-to-screen mapping
//! - [`engineconfig`] – INI-backed engine settings
//! - [`tickclock`] – tick rate selection and loop pacing

pub mod camera2d;
pub mod engineconfig;
pub mod tickclock;
