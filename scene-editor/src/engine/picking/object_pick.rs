use super::ray::{PickRay, ray_hits_obb};
use crate::engine::scene::display_list::{DisplayList, ObjectId};

/// Closest object under a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub id: ObjectId,
    pub distance: f32,
}

/// Test every object's bounding box and keep the nearest hit. With
/// `ignore_gizmo` the gizmo entries are never candidates.
pub fn pick_object(list: &DisplayList, ray: &PickRay, ignore_gizmo: bool) -> Option<PickHit> {
    list.iter()
        .filter(|(_, object)| !(ignore_gizmo && object.role.is_gizmo()))
        .filter_map(|(id, object)| {
            let distance = ray_hits_obb(
                ray,
                object.transform.world_from_local(),
                &object.local_bounds(),
            )?;
            Some(PickHit { id, distance })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
