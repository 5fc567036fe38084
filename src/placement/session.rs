use glam::Vec3;

use crate::errors::Result;
use crate::placement::collision::CollisionIndex;
use crate::placement::palette::ColorPicker;
use crate::resources::{Color, SphereVolume};
use crate::scene::{Renderable, RenderableKey, SceneGraph, SurfaceHit};
use crate::settings::PlacementSettings;

/// Geometry derived from a surface hit for one placement decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementCandidate {
    /// Where the sphere is rendered and registered.
    pub position: Vec3,
    /// `position` pushed slightly further out, used for the commit test so
    /// the sphere does not collide with the surface it is attached to.
    pub collision_probe_position: Vec3,
    pub radius: f32,
    /// Unit surface normal the candidate was offset along.
    pub normal: Vec3,
}

impl PlacementCandidate {
    #[must_use]
    pub fn volume(&self) -> SphereVolume {
        SphereVolume::new_unchecked(self.position, self.radius)
    }

    #[must_use]
    pub fn probe_volume(&self) -> SphereVolume {
        SphereVolume::new_unchecked(self.collision_probe_position, self.radius)
    }
}

/// Result of [`PlacementSession::on_hover`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverOutcome {
    /// The preview renderable now in the scene.
    pub preview: RenderableKey,
    /// `false` when the previewed sphere would overlap a committed one.
    pub valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The candidate overlaps a committed sphere.
    Collision,
    /// The hit normal had zero length or the reference radius was not positive.
    DegenerateHit,
}

/// Result of [`PlacementSession::on_commit`].
///
/// Rejection is a normal outcome, not an error: nothing in the session or
/// the scene changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommitOutcome {
    Committed {
        key: RenderableKey,
        volume: SphereVolume,
        color: Color,
    },
    Rejected(RejectReason),
}

impl CommitOutcome {
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// Placement state for one interactive session.
///
/// Owns the collision index, the palette and the handle of the current
/// preview. The scene itself is borrowed per call, so the session never
/// holds on to renderer state and can be driven by any [`SceneGraph`].
///
/// # Invariants
///
/// - every volume in the index has exactly one committed renderable;
/// - at most one preview exists, and it is the one `preview` points at;
/// - volumes are never removed;
/// - committed volumes do not overlap each other by more than
///   `probe_epsilon`. The commit test runs on the candidate pushed out along
///   the normal by that amount, while the registered volume keeps the
///   unshifted position.
#[derive(Debug)]
pub struct PlacementSession {
    settings: PlacementSettings,
    index: CollisionIndex,
    picker: ColorPicker,

    valid_color: Color,
    invalid_color: Color,

    preview: Option<RenderableKey>,
    pointer_moved_since_commit: bool,
}

impl PlacementSession {
    pub fn new(settings: PlacementSettings) -> Result<Self> {
        settings.validate()?;

        let palette = settings.palette_colors();
        let picker = match settings.rng_seed {
            Some(seed) => ColorPicker::seeded(palette, seed),
            None => ColorPicker::new(palette),
        };

        Ok(Self {
            valid_color: Color::from_hex(settings.valid_color),
            invalid_color: Color::from_hex(settings.invalid_color),
            settings,
            index: CollisionIndex::new(),
            picker,
            preview: None,
            pointer_moved_since_commit: false,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn settings(&self) -> &PlacementSettings {
        &self.settings
    }

    #[must_use]
    pub fn collision_index(&self) -> &CollisionIndex {
        &self.index
    }

    /// Handle of the preview currently in the scene, if any.
    #[must_use]
    pub fn preview(&self) -> Option<RenderableKey> {
        self.preview
    }

    #[must_use]
    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// Whether a hover or hover-exit happened since the last commit.
    #[must_use]
    pub fn pointer_moved_since_commit(&self) -> bool {
        self.pointer_moved_since_commit
    }

    pub fn color_picker_mut(&mut self) -> &mut ColorPicker {
        &mut self.picker
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Registers and renders the first sphere.
    ///
    /// No collision test and no preview handling; the volume only has to be
    /// well formed.
    pub fn seed<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        center: Vec3,
        radius: f32,
    ) -> Result<RenderableKey> {
        let volume = SphereVolume::new(center, radius)?;
        let (key, _) = self.commit_volume(scene, volume);
        log::info!("Seeded sphere at {center} (radius {radius})");
        Ok(key)
    }

    /// Derives the candidate sphere for a surface hit.
    ///
    /// The centre is pushed out along the normal by
    /// `reference_radius * commit_offset` and the radius is
    /// `reference_radius * child_radius_factor`. Returns `None` for a
    /// zero-length normal or a non-positive reference radius.
    #[must_use]
    pub fn propose_candidate(
        &self,
        hit: &SurfaceHit,
        reference_radius: f32,
    ) -> Option<PlacementCandidate> {
        if !reference_radius.is_finite() || reference_radius <= 0.0 {
            return None;
        }
        let normal = hit.normal.try_normalize()?;

        let position = hit.point + normal * (reference_radius * self.settings.commit_offset);
        let collision_probe_position = position + normal * self.settings.probe_epsilon;

        Some(PlacementCandidate {
            position,
            collision_probe_position,
            radius: reference_radius * self.settings.child_radius_factor,
            normal,
        })
    }

    /// Replaces the preview with one reflecting whether a sphere fits here.
    ///
    /// A degenerate hit behaves like [`on_hover_exit`](Self::on_hover_exit)
    /// and returns `None`.
    pub fn on_hover<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        hit: &SurfaceHit,
        reference_radius: f32,
    ) -> Option<HoverOutcome> {
        let Some(candidate) = self.propose_candidate(hit, reference_radius) else {
            self.on_hover_exit(scene);
            return None;
        };

        // Previews hug the surface a little closer than the commit probe.
        let center = candidate.position + candidate.normal * self.settings.hover_epsilon;
        let volume = SphereVolume::new_unchecked(center, candidate.radius);
        let valid = !self.index.intersects_any(&volume);

        self.clear_preview(scene);

        let color = if valid {
            self.valid_color
        } else {
            self.invalid_color
        };
        let preview = scene.add_object(Renderable::preview(
            center,
            candidate.radius,
            color,
            self.settings.preview_opacity,
        ));

        self.preview = Some(preview);
        self.pointer_moved_since_commit = true;

        log::trace!("Preview at {center} valid={valid}");
        Some(HoverOutcome { preview, valid })
    }

    /// The pointer left every collidable surface: drop the preview.
    ///
    /// Calling it again without an intervening hover changes nothing in the
    /// scene.
    pub fn on_hover_exit<S: SceneGraph>(&mut self, scene: &mut S) {
        self.clear_preview(scene);
        self.pointer_moved_since_commit = true;
    }

    /// Tries to attach a sphere at the hit.
    ///
    /// On acceptance the preview (if any) is removed, the volume is
    /// registered and a committed renderable with a palette color is added.
    /// Only the tracked preview is ever removed, never another renderable.
    pub fn on_commit<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        hit: &SurfaceHit,
        reference_radius: f32,
    ) -> CommitOutcome {
        let Some(candidate) = self.propose_candidate(hit, reference_radius) else {
            log::debug!("Ignoring commit on degenerate hit {hit:?}");
            return CommitOutcome::Rejected(RejectReason::DegenerateHit);
        };

        if self.index.intersects_any(&candidate.probe_volume()) {
            log::debug!(
                "Placement at {} rejected: overlaps a committed sphere",
                candidate.position
            );
            return CommitOutcome::Rejected(RejectReason::Collision);
        }

        let volume = candidate.volume();
        let (key, color) = self.commit_volume(scene, volume);

        log::info!(
            "Committed sphere #{} at {} (radius {})",
            self.index.len(),
            volume.center(),
            volume.radius()
        );
        CommitOutcome::Committed { key, volume, color }
    }

    fn commit_volume<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        volume: SphereVolume,
    ) -> (RenderableKey, Color) {
        self.clear_preview(scene);

        let color = self.picker.pick();
        self.index.register(volume);
        let key = scene.add_object(Renderable::committed(volume.center(), volume.radius(), color));

        self.pointer_moved_since_commit = false;
        (key, color)
    }

    fn clear_preview<S: SceneGraph>(&mut self, scene: &mut S) {
        if let Some(preview) = self.preview.take()
            && scene.remove_object(preview).is_none()
        {
            log::warn!("Preview {preview:?} was already removed from the scene");
        }
    }
}
