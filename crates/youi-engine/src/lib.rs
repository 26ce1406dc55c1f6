//! youi engine crate.
//!
//! This crate owns the pieces shared between the component tree and the
//! (external) renderer: geometry, the draw command stream, and the narrow
//! collaborator interfaces for rendering and font metrics.

pub mod coords;
pub mod logging;
pub mod render;
pub mod scene;
pub mod text;
