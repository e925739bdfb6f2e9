use bevy::prelude::*;
use constants::render_settings::{FAR_PLANE, FOV_Y_DEGREES, NEAR_PLANE};

/// Perspective settings shared by the render camera and the picking engine.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct EditorProjection {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for EditorProjection {
    fn default() -> Self {
        Self {
            fov_y_degrees: FOV_Y_DEGREES,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }
}

impl EditorProjection {
    /// Vertical field of view in radians; doubled for portrait viewports.
    pub fn fov_y(&self, aspect: f32) -> f32 {
        let fov = self.fov_y_degrees.to_radians();
        if aspect < 1.0 { fov * 2.0 } else { fov }
    }

    /// Finite right-handed clip matrix with depth 0 at the near plane and 1 at the far plane.
    pub fn clip_from_view(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y(aspect), aspect, self.near, self.far)
    }

    /// Projection component for the Bevy camera entity.
    pub fn to_bevy(&self, aspect: f32) -> Projection {
        Projection::Perspective(PerspectiveProjection {
            fov: self.fov_y(aspect),
            aspect_ratio: aspect,
            near: self.near,
            far: self.far,
        })
    }
}

/// Size of the viewport in logical pixels, origin top-left.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct EditorViewport {
    pub width: f32,
    pub height: f32,
}

impl Default for EditorViewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl EditorViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_viewports_widen_the_field_of_view() {
        let projection = EditorProjection::default();
        let landscape = projection.fov_y(16.0 / 9.0);
        let portrait = projection.fov_y(0.5);
        assert!((portrait - landscape * 2.0).abs() < 1e-6);
    }

    #[test]
    fn zero_sized_windows_keep_the_previous_viewport() {
        let mut viewport = EditorViewport::new(800.0, 600.0);
        viewport.set_size(0.0, 0.0);
        assert_eq!(viewport.size(), Vec2::new(800.0, 600.0));
    }
}
