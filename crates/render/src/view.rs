use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Perspective camera for the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Width over height of the viewport.
    pub aspect: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 10.0, 30.0),
            target: Vec3::new(0.0, 10.0, 0.0),
            fov_degrees: 75.0,
            near: 0.1,
            far: 2000.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl RenderView {
    /// Update the aspect ratio after a window resize. Zero sizes are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 75.0);
        assert_eq!(view.eye, Vec3::new(0.0, 10.0, 30.0));
        let vp = view.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn resize_updates_aspect() {
        let mut view = RenderView::default();
        view.set_viewport(800, 400);
        assert_eq!(view.aspect, 2.0);
        view.set_viewport(0, 400);
        assert_eq!(view.aspect, 2.0);
    }

    #[test]
    fn target_projects_to_centre() {
        let view = RenderView::default();
        let clip = view.view_projection() * view.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
    }
}
