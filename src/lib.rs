//! Library exports for the sketchpad drawing surface.
//!
//! Exposes the tool state machine, the Cairo-backed canvas and the JSON
//! document codec so that front ends can drive the same core the CLI uses.

pub mod config;
pub mod document;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
