//! oscillo-rs: adaptive viewport engine for multi-channel oscillogram plots.
//!
//! This crate provides the interactive core of an oscillogram viewer: a
//! top-down orthographic camera with pan/zoom, a discrete grid/axis-label
//! level-of-detail subsystem driven by a hysteresis state machine, and a
//! channel-visibility manager that keeps scene layers consistent with UI
//! toggle state. File parsing and widget chrome are host concerns.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod lod;
pub mod render;
pub mod telemetry;

pub use api::{ViewportEngine, ViewportEngineConfig};
pub use error::{OscilloError, OscilloResult};
