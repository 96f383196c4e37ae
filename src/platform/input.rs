//! Keyboard mapping
//!
//! Keys are identified by `KeyboardEvent.code`, which names the physical key
//! and so stays stable across keyboard layouts.

/// A movement intent a key can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
    Duck,
    SlowWalk,
}

/// Map a `KeyboardEvent.code` to its intent
pub fn intent_for_code(code: &str) -> Option<Intent> {
    match code {
        "KeyW" | "ArrowUp" => Some(Intent::Forward),
        "KeyS" | "ArrowDown" => Some(Intent::Backward),
        "KeyA" | "ArrowLeft" => Some(Intent::Left),
        "KeyD" | "ArrowRight" => Some(Intent::Right),
        "Space" => Some(Intent::Jump),
        "KeyC" | "ControlLeft" | "ControlRight" => Some(Intent::Duck),
        "ShiftLeft" | "ShiftRight" => Some(Intent::SlowWalk),
        _ => None,
    }
}
