use bevy::prelude::*;

use super::ray::PickRay;
use crate::engine::scene::terrain_grid::TerrainGrid;

/// Which quad hit wins when the ray crosses several.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TerrainHitPolicy {
    /// First contained hit in row-major scan order.
    FirstFound,
    /// Smallest distance along the ray.
    #[default]
    Nearest,
}

/// Cast `ray` against every grid quad. Each quad is treated as the plane
/// through its first three corners, and the hit must lie inside the quad's
/// XZ footprint.
pub fn terrain_intersection(
    grid: &TerrainGrid,
    ray: &PickRay,
    policy: TerrainHitPolicy,
) -> Option<Vec3> {
    let cells = grid.resolution() - 1;
    let mut nearest: Option<(f32, Vec3)> = None;

    for row in 0..cells {
        for col in 0..cells {
            let v1 = grid.position(row, col);
            let v2 = grid.position(row, col + 1);
            let v3 = grid.position(row + 1, col + 1);
            let v4 = grid.position(row + 1, col);

            let Some((distance, point)) = quad_plane_hit(ray, v1, v2, v3) else {
                continue;
            };

            let inside_x = point.x >= v1.x.min(v2.x) && point.x <= v1.x.max(v2.x);
            let inside_z = point.z >= v1.z.min(v4.z) && point.z <= v1.z.max(v4.z);
            if !(inside_x && inside_z) {
                continue;
            }

            match policy {
                TerrainHitPolicy::FirstFound => return Some(point),
                TerrainHitPolicy::Nearest => {
                    if nearest.is_none_or(|(best, _)| distance < best) {
                        nearest = Some((distance, point));
                    }
                }
            }
        }
    }

    nearest.map(|(_, point)| point)
}

fn quad_plane_hit(ray: &PickRay, v1: Vec3, v2: Vec3, v3: Vec3) -> Option<(f32, Vec3)> {
    let normal = (v2 - v1).cross(v3 - v1).try_normalize()?;
    let denom = normal.dot(ray.direction);
    if denom.abs() < f32::EPSILON {
        return None;
    }

    let distance = normal.dot(v1 - ray.origin) / denom;
    if distance < 0.0 {
        return None;
    }
    Some((distance, ray.point_at(distance)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_ray(x: f32, z: f32) -> PickRay {
        PickRay::new(Vec3::new(x, 100.0, z), Vec3::NEG_Y).unwrap()
    }

    #[test]
    fn vertical_ray_hits_flat_terrain_below() {
        let grid = TerrainGrid::default();
        let point = terrain_intersection(&grid, &down_ray(10.3, -20.7), TerrainHitPolicy::Nearest)
            .unwrap();

        assert!((point - Vec3::new(10.3, 0.0, -20.7)).length() < 1e-3);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let grid = TerrainGrid::default();
        let ray = PickRay::new(Vec3::new(0.0, 10.0, 0.0), Vec3::Y).unwrap();

        assert_eq!(terrain_intersection(&grid, &ray, TerrainHitPolicy::Nearest), None);
        assert_eq!(terrain_intersection(&grid, &ray, TerrainHitPolicy::FirstFound), None);
    }

    #[test]
    fn ray_outside_the_chunk_misses() {
        let grid = TerrainGrid::default();
        let ray = down_ray(400.0, 0.0);

        assert_eq!(terrain_intersection(&grid, &ray, TerrainHitPolicy::Nearest), None);
    }

    #[test]
    fn nearest_policy_prefers_the_front_of_a_ridge() {
        // ridge along z = 0 rising to 2, flat ground elsewhere, spacing 1
        let resolution = 5;
        let heights: Vec<f32> = (0..resolution * resolution)
            .map(|index| if index / resolution == 2 { 2.0 } else { 0.0 })
            .collect();
        let grid = TerrainGrid::from_heights(resolution, 4.0, &heights);

        // shallow ray travelling toward -z passes through the ridge
        let ray = PickRay::new(Vec3::new(0.3, 1.0, 1.9), Vec3::new(0.0, -0.1, -1.0)).unwrap();

        let nearest = terrain_intersection(&grid, &ray, TerrainHitPolicy::Nearest).unwrap();
        let first = terrain_intersection(&grid, &ray, TerrainHitPolicy::FirstFound).unwrap();

        // front face of the ridge
        assert!((nearest.z - 0.5667).abs() < 1e-3);
        // row-major scan reaches the back face first
        assert!((first.z + 0.6263).abs() < 1e-3);
        assert!(nearest.y > first.y);
    }
}
