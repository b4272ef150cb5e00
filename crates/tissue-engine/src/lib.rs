//! Tissue box engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer binary.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
pub mod paint;
