//! Headless sandbox
//!
//! [`Sandbox`] is the outer input-dispatch layer. It owns the scene, the
//! camera-backed ray caster and the [`PlacementSession`], and turns pointer
//! events into `on_hover` / `on_hover_exit` / `on_commit` calls.
//!
//! Everything runs synchronously on the caller's thread: each event is fully
//! processed before the next one is accepted. A multi-threaded host must put
//! the whole sandbox behind a single lock.
//!
//! # Example
//!
//! ```rust,ignore
//! use accrete::app::{PointerEvent, Sandbox};
//! use accrete::resources::{ButtonState, MouseButton};
//! use accrete::settings::SandboxSettings;
//!
//! let mut sandbox = Sandbox::new(SandboxSettings::default())?;
//! sandbox.dispatch(PointerEvent::Moved { x: 640.0, y: 300.0 });
//! sandbox.dispatch(PointerEvent::Button {
//!     button: MouseButton::Left,
//!     state: ButtonState::Pressed,
//! });
//! ```

use glam::Vec2;

use crate::errors::Result;
use crate::placement::{CommitOutcome, HoverOutcome, PlacementSession};
use crate::resources::{ButtonState, Color, Input, MouseButton};
use crate::scene::{Camera, Fog, Raycaster, RenderableKey, Scene, SurfaceHit};
use crate::settings::SandboxSettings;

/// Platform-independent window events the sandbox reacts to.
///
/// Positions are in pixels with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { x: f32, y: f32 },
    Button { button: MouseButton, state: ButtonState },
    Resized { width: u32, height: u32 },
}

/// What a dispatched event did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feedback {
    Hover(HoverOutcome),
    HoverExit,
    Commit(CommitOutcome),
    /// The event did not reach the placement session.
    Ignored,
}

pub struct Sandbox {
    pub scene: Scene,
    session: PlacementSession,
    input: Input,
    seed: RenderableKey,
    frame_count: u64,
}

impl Sandbox {
    /// Builds the scene and camera from `settings` and seeds the first sphere.
    pub fn new(settings: SandboxSettings) -> Result<Self> {
        settings.validate()?;

        let cam = &settings.camera;
        let mut camera = Camera::new_perspective(cam.fov_degrees, settings.aspect(), cam.near, cam.far);
        camera.look_at(cam.position, cam.target, glam::Vec3::Y);

        let mut scene = Scene::new(camera);
        let background = Color::from_hex(settings.background);
        scene.background = background;
        scene.fog = settings.fog_range.map(|[near, far]| Fog {
            color: background,
            near,
            far,
        });

        let mut session = PlacementSession::new(settings.placement.clone())?;
        let seed = session.seed(&mut scene, settings.seed_center, settings.seed_radius)?;

        let mut input = Input::new();
        input.inject_resize(settings.viewport[0], settings.viewport[1]);

        log::info!(
            "Sandbox ready: scene #{} with {}x{} viewport",
            scene.id,
            settings.viewport[0],
            settings.viewport[1]
        );

        Ok(Self {
            scene,
            session,
            input,
            seed,
            frame_count: 0,
        })
    }

    #[must_use]
    pub fn session(&self) -> &PlacementSession {
        &self.session
    }

    #[must_use]
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Handle of the sphere the session started with.
    #[must_use]
    pub fn seed(&self) -> RenderableKey {
        self.seed
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    // ========================================================================
    // Event handling
    // ========================================================================

    /// Routes a window event and reports what it did.
    pub fn dispatch(&mut self, event: PointerEvent) -> Feedback {
        match event {
            PointerEvent::Moved { x, y } => {
                self.input.inject_mouse_position(x, y);
                let ndc = self.input.mouse_ndc();
                match self.handle_pointer_move(ndc) {
                    Some(outcome) => Feedback::Hover(outcome),
                    None => Feedback::HoverExit,
                }
            }
            PointerEvent::Button { button, state } => {
                // Only the press edge commits; a held button never repeats.
                if !self.input.inject_mouse_button(button, state) {
                    return Feedback::Ignored;
                }
                let ndc = self.input.mouse_ndc();
                self.handle_pointer_down(button, ndc)
                    .map_or(Feedback::Ignored, Feedback::Commit)
            }
            PointerEvent::Resized { width, height } => {
                self.handle_resize(width, height);
                Feedback::Ignored
            }
        }
    }

    /// Pointer moved to `ndc`: refresh the preview, or drop it on a miss.
    pub fn handle_pointer_move(&mut self, ndc: Vec2) -> Option<HoverOutcome> {
        match self.pick(ndc) {
            Some((hit, reference_radius)) => {
                self.session.on_hover(&mut self.scene, &hit, reference_radius)
            }
            None => {
                self.session.on_hover_exit(&mut self.scene);
                None
            }
        }
    }

    /// Primary button pressed at `ndc`: try to commit a sphere there.
    ///
    /// Returns `None` for other buttons and when nothing is under the pointer.
    pub fn handle_pointer_down(&mut self, button: MouseButton, ndc: Vec2) -> Option<CommitOutcome> {
        if button != MouseButton::Left {
            return None;
        }
        let (hit, reference_radius) = self.pick(ndc)?;
        Some(self.session.on_commit(&mut self.scene, &hit, reference_radius))
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.input.inject_resize(width, height);
        self.scene.camera.set_aspect(width as f32 / height as f32);
    }

    /// Per-frame tick from the outer loop.
    pub fn update(&mut self) {
        self.input.start_frame();
        self.frame_count += 1;
    }

    /// Casts into the scene; the new sphere's size is derived from the
    /// radius of the sphere that was hit.
    fn pick(&self, ndc: Vec2) -> Option<(SurfaceHit, f32)> {
        let hit = self.scene.cast_ray(ndc)?;
        let reference_radius = self.scene.get(hit.source)?.radius;
        Some((hit, reference_radius))
    }
}
