//! Height-field terrain as a square vertex grid.
//!
//! Vertex `[row][col]` sits at `x = col * spacing - size / 2`,
//! `z = row * spacing - size / 2`. Heights change in place; normals are cached
//! and only rebuilt by [`TerrainGrid::recalculate_normals`].

use bevy::prelude::*;
use constants::terrain::{HEIGHT_SCALE, RESOLUTION, SIZE_METRES};

use crate::engine::assets::scene_graph::ChunkObject;
use crate::error::PersistenceError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

#[derive(Resource, Debug, Clone)]
pub struct TerrainGrid {
    resolution: usize,
    size: f32,
    vertices: Vec<TerrainVertex>,
    normals_stale: bool,
    revision: u64,
}

impl Default for TerrainGrid {
    fn default() -> Self {
        Self::flat(RESOLUTION, SIZE_METRES)
    }
}

impl TerrainGrid {
    pub fn flat(resolution: usize, size: f32) -> Self {
        Self::from_heights(resolution, size, &vec![0.0; resolution * resolution])
    }

    /// Build from row-major heights. Missing samples read as zero.
    pub fn from_heights(resolution: usize, size: f32, heights: &[f32]) -> Self {
        let resolution = resolution.max(2);
        let spacing = size / (resolution - 1) as f32;
        let half = size * 0.5;

        let vertices = (0..resolution * resolution)
            .map(|index| {
                let (row, col) = (index / resolution, index % resolution);
                TerrainVertex {
                    position: Vec3::new(
                        col as f32 * spacing - half,
                        heights.get(index).copied().unwrap_or(0.0),
                        row as f32 * spacing - half,
                    ),
                    normal: Vec3::Y,
                }
            })
            .collect();

        let mut grid = Self {
            resolution,
            size,
            vertices,
            normals_stale: true,
            revision: 0,
        };
        grid.recalculate_normals();
        grid
    }

    /// Decode an 8-bit RAW heightmap (`resolution²` bytes, row-major).
    pub fn from_heightmap(bytes: &[u8], chunk: &ChunkObject) -> Result<Self, PersistenceError> {
        let expected = RESOLUTION * RESOLUTION;
        if bytes.len() != expected {
            return Err(PersistenceError::HeightmapSize {
                expected,
                actual: bytes.len(),
            });
        }

        let heights: Vec<f32> = bytes
            .iter()
            .map(|&byte| byte as f32 * chunk.height_scale)
            .collect();
        Ok(Self::from_heights(RESOLUTION, chunk.size_metres, &heights))
    }

    /// Encode heights back to RAW bytes, rounding and saturating to `u8`.
    pub fn to_heightmap(&self, height_scale: f32) -> Vec<u8> {
        let scale = if height_scale > 0.0 { height_scale } else { HEIGHT_SCALE };
        self.vertices
            .iter()
            .map(|vertex| (vertex.position.y / scale).round().clamp(0.0, u8::MAX as f32) as u8)
            .collect()
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn spacing(&self) -> f32 {
        self.size / (self.resolution - 1) as f32
    }

    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.resolution + col
    }

    pub fn vertex(&self, row: usize, col: usize) -> &TerrainVertex {
        &self.vertices[self.index(row, col)]
    }

    pub fn position(&self, row: usize, col: usize) -> Vec3 {
        self.vertex(row, col).position
    }

    pub fn height(&self, row: usize, col: usize) -> f32 {
        self.position(row, col).y
    }

    pub fn normals_stale(&self) -> bool {
        self.normals_stale
    }

    /// Bumped on every height or normal change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Run `edit` on every vertex position. It returns whether it changed the
    /// vertex; any change marks the normals stale. Returns the changed count.
    pub fn edit_positions(&mut self, mut edit: impl FnMut(&mut Vec3) -> bool) -> usize {
        let mut changed = 0;
        for vertex in &mut self.vertices {
            if edit(&mut vertex.position) {
                changed += 1;
            }
        }

        if changed > 0 {
            self.normals_stale = true;
            self.revision = self.revision.wrapping_add(1);
        }
        changed
    }

    /// Central-difference normals; edge vertices reuse themselves as the
    /// missing neighbour.
    pub fn recalculate_normals(&mut self) {
        let last = self.resolution - 1;
        let normals: Vec<Vec3> = (0..self.resolution * self.resolution)
            .map(|index| {
                let (row, col) = (index / self.resolution, index % self.resolution);
                let along_x = self.position(row, (col + 1).min(last))
                    - self.position(row, col.saturating_sub(1));
                let along_z = self.position((row + 1).min(last), col)
                    - self.position(row.saturating_sub(1), col);
                along_z.cross(along_x).normalize_or(Vec3::Y)
            })
            .collect();

        for (vertex, normal) in self.vertices.iter_mut().zip(normals) {
            vertex.normal = normal;
        }
        self.normals_stale = false;
        self.revision = self.revision.wrapping_add(1);
    }
}
