/// Flat world-space reference grid drawn as line gizmos
use bevy::prelude::*;
use constants::render_settings::{GRID_COLOUR, GRID_DIVISIONS, GRID_HALF_EXTENT};

use crate::engine::systems::render_mode::RenderSettings;

/// Grid layout on the XZ plane at y = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundGrid {
    pub half_extent: f32,
    pub divisions: usize,
}

impl Default for GroundGrid {
    fn default() -> Self {
        Self {
            half_extent: GRID_HALF_EXTENT,
            divisions: GRID_DIVISIONS,
        }
    }
}

impl GroundGrid {
    /// Line segments of the grid: `divisions + 1` lines along each axis.
    pub fn lines(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let divisions = self.divisions.max(1);
        let spacing = self.half_extent * 2.0 / divisions as f32;
        let extent = self.half_extent;

        (0..=divisions).flat_map(move |i| {
            let offset = -extent + i as f32 * spacing;
            [
                // fixed x, running along z
                (Vec3::new(offset, 0.0, -extent), Vec3::new(offset, 0.0, extent)),
                // fixed z, running along x
                (Vec3::new(-extent, 0.0, offset), Vec3::new(extent, 0.0, offset)),
            ]
        })
    }
}

/// Draw the grid every frame while it is enabled.
pub fn draw_ground_grid(settings: Res<RenderSettings>, mut gizmos: Gizmos) {
    if !settings.grid {
        return;
    }

    for (start, end) in GroundGrid::default().lines() {
        gizmos.line(start, end, GRID_COLOUR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lines_cover_both_axes_edge_to_edge() {
        let grid = GroundGrid {
            half_extent: 2.0,
            divisions: 4,
        };
        let lines: Vec<_> = grid.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], (Vec3::new(-2.0, 0.0, -2.0), Vec3::new(-2.0, 0.0, 2.0)));
        assert_eq!(lines[9], (Vec3::new(-2.0, 0.0, 2.0), Vec3::new(2.0, 0.0, 2.0)));
    }
}
