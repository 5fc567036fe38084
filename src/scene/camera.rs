use glam::{Mat4, Vec2, Vec3};

use crate::scene::raycast::Ray;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionType {
    Perspective,
    Orthographic,
}

/// A look-at camera that caches its matrices.
///
/// The camera exists on the CPU side so pointer positions can be turned into
/// world-space rays. Projection follows glam's right-handed convention with a
/// `[0, 1]` depth range.
#[derive(Debug, Clone)]
pub struct Camera {
    // === Projection ===
    pub projection_type: ProjectionType,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Half height of the view volume for orthographic projection.
    pub ortho_size: f32,

    // === View ===
    position: Vec3,
    target: Vec3,
    up: Vec3,

    // Cached matrices, read-only outside this module
    view_matrix: Mat4,
    projection_matrix: Mat4,
    view_projection_matrix: Mat4,
    inverse_view_projection: Mat4,
}

impl Camera {
    /// `fov_degrees` is the vertical field of view.
    #[must_use]
    pub fn new_perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            projection_type: ProjectionType::Perspective,
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
            ortho_size: 10.0,

            position: Vec3::Z,
            target: Vec3::ZERO,
            up: Vec3::Y,

            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_projection_matrix: Mat4::IDENTITY,
            inverse_view_projection: Mat4::IDENTITY,
        };
        cam.update_view_matrix();
        cam.update_projection_matrix();
        cam
    }

    #[must_use]
    pub fn new_orthographic(ortho_size: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self::new_perspective(45.0, aspect, near, far);
        cam.projection_type = ProjectionType::Orthographic;
        cam.ortho_size = ortho_size;
        cam.update_projection_matrix();
        cam
    }

    /// Places the camera at `eye` looking at `target`.
    ///
    /// When the view direction is parallel to `up` (a camera straight above
    /// or below its target) any vector orthogonal to the view direction is
    /// used as up instead, so the view matrix stays finite.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.position = eye;
        self.target = target;
        self.up = match (target - eye).try_normalize() {
            Some(forward) if forward.cross(up).length_squared() <= 1e-12 => {
                let fallback = forward.any_orthonormal_vector();
                log::debug!("View direction {forward} is parallel to up {up}; using {fallback}");
                fallback
            }
            _ => up,
        };
        self.update_view_matrix();
        self.update_view_projection();
    }

    /// Updates the aspect ratio after a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
            self.update_projection_matrix();
        }
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = match self.projection_type {
            ProjectionType::Perspective => {
                Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
            }
            ProjectionType::Orthographic => {
                let w = self.ortho_size * self.aspect;
                let h = self.ortho_size;
                Mat4::orthographic_rh(-w, w, -h, h, self.near, self.far)
            }
        };
        self.update_view_projection();
    }

    fn update_view_matrix(&mut self) {
        self.view_matrix = Mat4::look_at_rh(self.position, self.target, self.up);
    }

    fn update_view_projection(&mut self) {
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
        self.inverse_view_projection = self.view_projection_matrix.inverse();
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn view_projection_matrix(&self) -> &Mat4 {
        &self.view_projection_matrix
    }

    /// Builds the world-space ray through a point in normalized device
    /// coordinates.
    #[must_use]
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let near = self
            .inverse_view_projection
            .project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = self
            .inverse_view_projection
            .project_point3(Vec3::new(ndc.x, ndc.y, 1.0));

        match self.projection_type {
            ProjectionType::Perspective => Ray::new(self.position, far - self.position),
            ProjectionType::Orthographic => Ray::new(near, far - near),
        }
    }

    /// Projects a world-space point to normalized device coordinates.
    #[must_use]
    pub fn project(&self, point: Vec3) -> Vec2 {
        self.view_projection_matrix.project_point3(point).truncate()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new_perspective(45.0, 1.0, 0.1, 1000.0)
    }
}
