//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard input mapping
//! - Browser bindings for the frame driver and renderer (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;
