//! Scene Integration Tests
//!
//! Tests for:
//! - SceneGraph: add/remove/last_object bookkeeping and insertion order
//! - Renderable roles: committed vs preview
//! - Camera: look-at, NDC rays (perspective and orthographic), projection
//! - Raycaster: nearest hit, previews and hidden spheres are ignored

use glam::{Vec2, Vec3};

use accrete::resources::Color;
use accrete::scene::{Camera, Raycaster, Renderable, RenderableRole, Scene, SceneGraph};

const EPSILON: f32 = 1e-4;

fn committed(x: f32, y: f32, z: f32, r: f32) -> Renderable {
    Renderable::committed(Vec3::new(x, y, z), r, Color::WHITE)
}

fn preview(x: f32, y: f32, z: f32, r: f32) -> Renderable {
    Renderable::preview(Vec3::new(x, y, z), r, Color::from_hex(0x009F00), 0.5)
}

/// Camera at +Z looking at the origin.
fn front_camera() -> Camera {
    let mut camera = Camera::new_perspective(45.0, 1.0, 0.1, 100.0);
    camera.look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
    camera
}

// ============================================================================
// SceneGraph bookkeeping
// ============================================================================

#[test]
fn scene_ids_are_unique() {
    let a = Scene::default();
    let b = Scene::default();
    assert_ne!(a.id, b.id);
}

#[test]
fn scene_add_and_get() {
    let mut scene = Scene::default();
    let key = scene.add_object(committed(1.0, 2.0, 3.0, 4.0));

    let r = scene.get(key).unwrap();
    assert_eq!(r.center, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(r.role, RenderableRole::Committed);
    assert_eq!(scene.last_object(), Some(key));
    assert_eq!(scene.len(), 1);
}

#[test]
fn scene_remove_returns_renderable_once() {
    let mut scene = Scene::default();
    let key = scene.add_object(preview(0.0, 0.0, 0.0, 1.0));

    assert!(scene.remove_object(key).unwrap().is_preview());
    assert!(scene.remove_object(key).is_none());
    assert!(scene.is_empty());
    assert_eq!(scene.last_object(), None);
}

#[test]
fn scene_keeps_insertion_order_across_removals() {
    let mut scene = Scene::default();
    let a = scene.add_object(committed(0.0, 0.0, 0.0, 1.0));
    let b = scene.add_object(preview(1.0, 0.0, 0.0, 1.0));
    let c = scene.add_object(committed(2.0, 0.0, 0.0, 1.0));

    scene.remove_object(b);
    let order: Vec<_> = scene.iter().map(|(key, _)| key).collect();
    assert_eq!(order, vec![a, c]);
    assert_eq!(scene.last_object(), Some(c));

    let d = scene.add_object(committed(3.0, 0.0, 0.0, 1.0));
    assert_eq!(scene.last_object(), Some(d));
}

#[test]
fn scene_committed_skips_previews() {
    let mut scene = Scene::default();
    let a = scene.add_object(committed(0.0, 0.0, 0.0, 1.0));
    scene.add_object(preview(1.0, 0.0, 0.0, 1.0));

    let committed: Vec<_> = scene.committed().map(|(key, _)| key).collect();
    assert_eq!(committed, vec![a]);
    assert_eq!(scene.preview_count(), 1);
}

#[test]
fn renderable_roles_carry_material_flags() {
    let c = committed(0.0, 0.0, 0.0, 1.0);
    assert!(c.cast_shadow && c.receive_shadow);
    assert!(!c.material.is_transparent());

    let p = preview(0.0, 0.0, 0.0, 1.0);
    assert!(!p.cast_shadow && !p.receive_shadow);
    assert!(p.material.is_transparent());
    assert!(p.segments.width_segments < c.segments.width_segments);
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn camera_center_ray_points_at_target() {
    let camera = front_camera();
    let ray = camera.ray_from_ndc(Vec2::ZERO);

    assert!(ray.origin.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), EPSILON));
    assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, EPSILON));
}

#[test]
fn camera_edge_ray_follows_field_of_view() {
    let mut camera = Camera::new_perspective(90.0, 1.0, 0.1, 100.0);
    camera.look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);

    let ray = camera.ray_from_ndc(Vec2::new(1.0, 0.0));
    let expected = Vec3::new(1.0, 0.0, -1.0).normalize();
    assert!(ray.direction.abs_diff_eq(expected, 1e-3), "got {:?}", ray.direction);
}

#[test]
fn camera_straight_above_target_stays_finite() {
    let mut camera = Camera::new_perspective(45.0, 1.0, 0.1, 100.0);
    camera.look_at(Vec3::new(0.0, 30.0, 0.0), Vec3::ZERO, Vec3::Y);

    assert!(camera.view_projection_matrix().is_finite());
    let ray = camera.ray_from_ndc(Vec2::ZERO);
    assert!(ray.direction.abs_diff_eq(Vec3::NEG_Y, EPSILON), "got {:?}", ray.direction);

    camera.look_at(Vec3::new(0.0, -30.0, 0.0), Vec3::ZERO, Vec3::Y);
    assert!(camera.ray_from_ndc(Vec2::ZERO).direction.abs_diff_eq(Vec3::Y, EPSILON));
}

#[test]
fn orthographic_rays_are_parallel() {
    let mut camera = Camera::new_orthographic(10.0, 1.0, 0.1, 100.0);
    camera.look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);

    let ray = camera.ray_from_ndc(Vec2::new(0.5, 0.0));
    assert!((ray.origin.x - 5.0).abs() < 1e-3);
    assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, EPSILON));
}

#[test]
fn camera_projects_target_to_center() {
    let camera = front_camera();
    assert!(camera.project(Vec3::ZERO).abs_diff_eq(Vec2::ZERO, EPSILON));
}

#[test]
fn camera_aspect_ignores_degenerate_values() {
    let mut camera = front_camera();
    camera.set_aspect(2.0);
    assert_eq!(camera.aspect, 2.0);
    camera.set_aspect(0.0);
    assert_eq!(camera.aspect, 2.0);
}

// ============================================================================
// Raycasting
// ============================================================================

#[test]
fn raycast_reports_point_normal_and_source() {
    let mut scene = Scene::new(front_camera());
    let key = scene.add_object(committed(0.0, 0.0, 0.0, 1.0));

    let hit = scene.cast_ray(Vec2::ZERO).unwrap();
    assert_eq!(hit.source, key);
    assert!(hit.point.abs_diff_eq(Vec3::Z, EPSILON));
    assert!(hit.normal.abs_diff_eq(Vec3::Z, EPSILON));
}

#[test]
fn raycast_returns_nearest_sphere() {
    let mut scene = Scene::new(front_camera());
    scene.add_object(committed(0.0, 0.0, 0.0, 1.0));
    let near = scene.add_object(committed(0.0, 0.0, 4.0, 0.5));

    let hit = scene.cast_ray(Vec2::ZERO).unwrap();
    assert_eq!(hit.source, near);
    assert!(hit.point.abs_diff_eq(Vec3::new(0.0, 0.0, 4.5), EPSILON));
}

#[test]
fn raycast_ignores_previews_and_hidden_spheres() {
    let mut scene = Scene::new(front_camera());
    let target = scene.add_object(committed(0.0, 0.0, 0.0, 1.0));
    scene.add_object(preview(0.0, 0.0, 5.0, 1.0));
    let hidden = scene.add_object(committed(0.0, 0.0, 3.0, 0.5));
    scene.get_mut(hidden).unwrap().visible = false;

    let hit = scene.cast_ray(Vec2::ZERO).unwrap();
    assert_eq!(hit.source, target);
}

#[test]
fn raycast_misses_empty_space() {
    let mut scene = Scene::new(front_camera());
    scene.add_object(committed(0.0, 0.0, 0.0, 1.0));
    assert!(scene.cast_ray(Vec2::new(0.9, 0.9)).is_none());
}
