//! Headless placement session.
//!
//! Drives a [`Sandbox`] with a scripted pointer trace and logs what each
//! event did. Optional first argument: path to a JSON settings file.
//!
//! ```text
//! RUST_LOG=info cargo run --example headless_session -- settings.json
//! ```

use accrete::app::{Feedback, PointerEvent, Sandbox};
use accrete::placement::CommitOutcome;
use accrete::resources::{ButtonState, MouseButton};
use accrete::settings::SandboxSettings;

fn click() -> [PointerEvent; 2] {
    [ButtonState::Pressed, ButtonState::Released].map(|state| PointerEvent::Button {
        button: MouseButton::Left,
        state,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => SandboxSettings::from_path(path)?,
        None => SandboxSettings::default(),
    };
    let [width, height] = settings.viewport;
    let (w, h) = (width as f32, height as f32);

    let mut sandbox = Sandbox::new(settings)?;

    // Sweep across the seed, committing at a few points along the way.
    let mut script = Vec::new();
    for step in 0..=8 {
        let x = w * (0.35 + 0.0375 * step as f32);
        script.push(PointerEvent::Moved { x, y: h * 0.5 });
        if step % 2 == 0 {
            script.extend(click());
        }
    }
    // Click twice in place, then leave the cluster.
    script.push(PointerEvent::Moved { x: w * 0.5, y: h * 0.4 });
    script.extend(click());
    script.extend(click());
    script.push(PointerEvent::Moved { x: 0.0, y: 0.0 });

    let (mut committed, mut rejected) = (0usize, 0usize);
    for event in script {
        match sandbox.dispatch(event) {
            Feedback::Hover(outcome) => {
                log::debug!("hover {:?} valid={}", outcome.preview, outcome.valid);
            }
            Feedback::HoverExit => log::info!("pointer left the cluster"),
            Feedback::Commit(CommitOutcome::Committed { volume, color, .. }) => {
                committed += 1;
                log::info!(
                    "committed r={:.3} at {:?} color #{:06X}",
                    volume.radius(),
                    volume.center(),
                    color.to_hex()
                );
            }
            Feedback::Commit(CommitOutcome::Rejected(reason)) => {
                rejected += 1;
                log::info!("rejected: {reason:?}");
            }
            Feedback::Ignored => {}
        }
        sandbox.update();
    }

    log::info!(
        "{} frames, {committed} committed, {rejected} rejected, {} spheres in scene",
        sandbox.frame_count(),
        sandbox.scene.committed().count()
    );
    Ok(())
}
