use std::sync::atomic::{AtomicU32, Ordering};

use glam::{Vec2, Vec3};
use slotmap::SlotMap;

use crate::resources::Color;
use crate::scene::RenderableKey;
use crate::scene::camera::Camera;
use crate::scene::raycast::{Ray, Raycaster, SurfaceHit};
use crate::scene::renderable::{Renderable, RenderableRole};

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// The add/remove seam between the placement core and whatever draws the scene.
///
/// Implementations own the renderables; callers only keep the returned keys.
pub trait SceneGraph {
    /// Appends a renderable and returns its handle.
    fn add_object(&mut self, renderable: Renderable) -> RenderableKey;

    /// Removes a renderable. Returns `None` if the handle is stale.
    fn remove_object(&mut self, key: RenderableKey) -> Option<Renderable>;

    /// Handle of the most recently added renderable still in the scene.
    fn last_object(&self) -> Option<RenderableKey>;
}

/// Linear fog applied between `near` and `far` distances from the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

/// Scene graph container.
///
/// `Scene` is pure data: a pool of sphere renderables addressed by
/// [`RenderableKey`], the order in which they were added, the active camera
/// and a few global look settings. GPU resources are not tracked here.
pub struct Scene {
    pub id: u32,

    renderables: SlotMap<RenderableKey, Renderable>,
    /// Insertion order. Append-only apart from removals.
    order: Vec<RenderableKey>,

    pub camera: Camera,

    pub background: Color,
    pub fog: Option<Fog>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl Scene {
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),
            renderables: SlotMap::with_key(),
            order: Vec::new(),
            camera,
            background: Color::BLACK,
            fog: None,
        }
    }

    /// Read-only access to a renderable.
    #[must_use]
    pub fn get(&self, key: RenderableKey) -> Option<&Renderable> {
        self.renderables.get(key)
    }

    /// Mutable access, e.g. to toggle visibility.
    pub fn get_mut(&mut self, key: RenderableKey) -> Option<&mut Renderable> {
        self.renderables.get_mut(key)
    }

    #[must_use]
    pub fn contains(&self, key: RenderableKey) -> bool {
        self.renderables.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates renderables in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (RenderableKey, &Renderable)> {
        self.order
            .iter()
            .filter_map(move |&key| self.renderables.get(key).map(|r| (key, r)))
    }

    /// Iterates committed spheres in the order they were added.
    pub fn committed(&self) -> impl Iterator<Item = (RenderableKey, &Renderable)> {
        self.iter()
            .filter(|(_, r)| r.role == RenderableRole::Committed)
    }

    #[must_use]
    pub fn preview_count(&self) -> usize {
        self.renderables.values().filter(|r| r.is_preview()).count()
    }

    /// Nearest intersection of `ray` with a visible committed sphere.
    ///
    /// Previews are skipped so a preview can never occlude the surface
    /// the user is pointing at.
    #[must_use]
    pub fn raycast(&self, ray: &Ray) -> Option<SurfaceHit> {
        let mut nearest: Option<(f32, RenderableKey, Vec3, f32)> = None;

        for (key, renderable) in self.committed() {
            if !renderable.visible {
                continue;
            }
            let Some(t) = ray.intersect_sphere(renderable.center, renderable.radius) else {
                continue;
            };
            if nearest.is_none_or(|(best, ..)| t < best) {
                nearest = Some((t, key, renderable.center, renderable.radius));
            }
        }

        nearest.map(|(t, key, center, radius)| {
            let point = ray.at(t);
            SurfaceHit::new(point, (point - center) / radius, key)
        })
    }
}

impl SceneGraph for Scene {
    fn add_object(&mut self, renderable: Renderable) -> RenderableKey {
        let key = self.renderables.insert(renderable);
        self.order.push(key);
        key
    }

    fn remove_object(&mut self, key: RenderableKey) -> Option<Renderable> {
        let removed = self.renderables.remove(key)?;
        // Removals are almost always the preview, which sits at the end.
        if let Some(pos) = self.order.iter().rposition(|&k| k == key) {
            self.order.remove(pos);
        }
        Some(removed)
    }

    fn last_object(&self) -> Option<RenderableKey> {
        self.order.last().copied()
    }
}

impl Raycaster for Scene {
    fn cast_ray(&self, ndc: Vec2) -> Option<SurfaceHit> {
        let ray = self.camera.ray_from_ndc(ndc);
        self.raycast(&ray)
    }
}
