//! Retroscape entry point
//!
//! The browser build is driven from the page through `platform::web`. The
//! native build runs a headless tour of the arena and logs what the renderer
//! would receive.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Quat;
    use retroscape::Tuning;
    use retroscape::sim::{MoveOutcome, Walkthrough};

    env_logger::init();
    log::info!("Retroscape (native) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::from_path(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let mut walk = Walkthrough::new(tuning);
    walk.set_active(true);

    const DT: f32 = 1.0 / 60.0;
    // (label, keys held, frames, yaw)
    let script: [(&str, &[&str], u32, f32); 5] = [
        ("walk", &["KeyW"], 90, 0.0),
        ("jump", &["KeyW", "Space"], 60, 0.0),
        ("duck", &["KeyC"], 30, 0.0),
        ("sneak", &["KeyW", "ShiftLeft"], 60, 1.2),
        ("to the wall", &["KeyW"], 600, 2.4),
    ];

    for (label, keys, frames, yaw) in script {
        for key in keys {
            walk.key(key, true, false);
        }
        let orientation = Quat::from_rotation_y(yaw);
        let mut blocked = 0;
        for _ in 0..frames {
            if walk
                .frame(DT, orientation)
                .is_some_and(|report| report.movement == MoveOutcome::Blocked)
            {
                blocked += 1;
            }
        }
        for key in keys {
            walk.key(key, false, false);
        }

        let camera = walk.camera();
        let fog = walk.fog();
        log::info!(
            "{:>12}: camera=({:7.2}, {:5.2}, {:7.2}) r={:6.2} fog=({:5.2}, {:5.2}) blocked={}",
            label,
            camera.x,
            camera.y,
            camera.z,
            walk.player().distance_from_center(),
            fog.near,
            fog.far,
            blocked
        );
    }

    walk.set_active(false);
    log::info!("Tour finished");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
