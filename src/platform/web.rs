//! Browser bindings
//!
//! The page owns the canvas, the 3D renderer and the pointer-lock lifecycle.
//! It forwards key events and lock changes here, calls `frame` from its
//! animation callback, and reads the camera and fog back out.

use glam::Quat;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::sim::{RenderPrimitive, ScatteredObject, Walkthrough};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Retroscape starting...");
}

/// Scatter entry as the renderer consumes it
#[derive(Serialize)]
struct RenderItem<'a> {
    #[serde(flatten)]
    object: &'a ScatteredObject,
    primitive: RenderPrimitive,
}

#[wasm_bindgen]
pub struct WebWalkthrough {
    inner: Walkthrough,
}

#[wasm_bindgen]
impl WebWalkthrough {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Walkthrough::new(Tuning::default()),
        }
    }

    /// Build with tuning overrides given as JSON
    pub fn with_tuning_json(json: &str) -> Result<WebWalkthrough, JsValue> {
        let tuning = Tuning::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: Walkthrough::new(tuning),
        })
    }

    /// Pointer lock acquired or released
    pub fn set_active(&mut self, active: bool) {
        self.inner.set_active(active);
    }

    /// Pointer lock request was refused; the walkthrough stays inactive
    pub fn activation_failed(&mut self) {
        log::error!("Pointer lock error!");
        self.inner.set_active(false);
    }

    /// `repeat` is the event's `KeyboardEvent.repeat`
    pub fn key_down(&mut self, code: &str, repeat: bool) -> bool {
        self.inner.key(code, true, repeat)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.inner.key(code, false, false)
    }

    /// Advance one frame with the camera's current quaternion
    ///
    /// Returns `false` if nothing was simulated (inactive).
    pub fn frame(&mut self, dt: f32, qx: f32, qy: f32, qz: f32, qw: f32) -> bool {
        let orientation = Quat::from_xyzw(qx, qy, qz, qw).normalize();
        self.inner.frame(dt, orientation).is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn camera_x(&self) -> f32 {
        self.inner.camera().x
    }

    #[wasm_bindgen(getter)]
    pub fn camera_y(&self) -> f32 {
        self.inner.camera().y
    }

    #[wasm_bindgen(getter)]
    pub fn camera_z(&self) -> f32 {
        self.inner.camera().z
    }

    #[wasm_bindgen(getter)]
    pub fn fog_near(&self) -> f32 {
        self.inner.fog().near
    }

    #[wasm_bindgen(getter)]
    pub fn fog_far(&self) -> f32 {
        self.inner.fog().far
    }

    #[wasm_bindgen(getter)]
    pub fn wall_radius(&self) -> f32 {
        self.inner.tuning().wall_radius
    }

    /// Scatter field with renderer-facing primitive dimensions
    pub fn scatter_json(&self) -> Result<String, JsValue> {
        let items: Vec<RenderItem<'_>> = self
            .inner
            .scatter()
            .iter()
            .map(|object| RenderItem {
                object,
                primitive: object.render_primitive(),
            })
            .collect();
        serde_json::to_string(&items).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Column and statue positions
    pub fn structures_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.structures())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WebWalkthrough {
    fn default() -> Self {
        Self::new()
    }
}
