use bevy::prelude::*;

use crate::engine::camera::editor_camera::EditorCamera;
use crate::engine::camera::projection::{EditorProjection, EditorViewport};
use crate::engine::scene::display_list::LocalBounds;

/// World-space ray from the near plane through the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl PickRay {
    /// Returns `None` for a zero-length direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        Some(Self {
            origin,
            direction: direction.try_normalize()?,
        })
    }

    /// Unproject a cursor position (logical pixels, origin top-left) at depth 0
    /// and depth 1 and join the two points.
    pub fn from_screen(
        cursor: Vec2,
        viewport: &EditorViewport,
        view_from_world: Mat4,
        clip_from_view: Mat4,
    ) -> Option<Self> {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return None;
        }

        let ndc = Vec2::new(
            cursor.x / viewport.width * 2.0 - 1.0,
            1.0 - cursor.y / viewport.height * 2.0,
        );
        let world_from_clip = (clip_from_view * view_from_world).inverse();
        let near = world_from_clip.project_point3(ndc.extend(0.0));
        let far = world_from_clip.project_point3(ndc.extend(1.0));

        if !near.is_finite() || !far.is_finite() {
            return None;
        }
        Self::new(near, far - near)
    }

    pub fn from_camera(
        cursor: Vec2,
        camera: &EditorCamera,
        projection: &EditorProjection,
        viewport: &EditorViewport,
    ) -> Option<Self> {
        Self::from_screen(
            cursor,
            viewport,
            camera.view_from_world(),
            projection.clip_from_view(viewport.aspect()),
        )
    }

    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Ray against a box given in object-local space. Distances are in world
/// units along the ray.
pub fn ray_hits_obb(ray: &PickRay, world_from_local: Mat4, bounds: &LocalBounds) -> Option<f32> {
    let local_from_world = world_from_local.inverse();
    let o_local = local_from_world.transform_point3(ray.origin);
    let d_local = local_from_world.transform_vector3(ray.direction);

    // slab distances are in units of |d_local|; scale back to world distance
    let t_local = ray_aabb_hit_t(o_local, d_local, bounds.min, bounds.max)?;
    let hit = world_from_local.transform_point3(o_local + d_local * t_local);
    Some((hit - ray.origin).dot(ray.direction))
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        if ray_direction[axis] == 0.0 {
            // parallel to this slab: inside it or never
            if ray_origin[axis] < min[axis] || ray_origin[axis] > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / ray_direction[axis];
        let (mut t0, mut t1) = (
            (min[axis] - ray_origin[axis]) * inv,
            (max[axis] - ray_origin[axis]) * inv,
        );
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}
