//! Scene camera
//!
//! Orthographic by default. The game updates the aspect ratio from window
//! resize events it receives in the frame loop.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_degrees: f32,
    /// Half the visible height in orthographic mode
    pub ortho_height: f32,
    pub near: f32,
    pub far: f32,
    pub orthographic: bool,
    aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 90.0,
            ortho_height: 3.0,
            near: 0.01,
            far: 1000.0,
            orthographic: true,
            aspect: 1.0,
        }
    }
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            ..Default::default()
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Recompute the aspect ratio for a new framebuffer size
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            // Minimized
            return;
        }
        self.aspect = width as f32 / height as f32;
        log::debug!("Camera resized to {}x{} (aspect {:.3})", width, height, self.aspect);
    }

    pub fn toggle_ortho(&mut self) {
        self.orthographic = !self.orthographic;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        if self.orthographic {
            let h = self.ortho_height;
            let w = h * self.aspect;
            Mat4::orthographic_rh_gl(-w, w, -h, h, self.near, self.far)
        } else {
            Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ortho_maps_arena_edge_to_clip_edge() {
        let camera = Camera::new(1.0);
        let clip = camera.view_projection().project_point3(Vec3::new(3.0, -3.0, 0.0));
        assert!((clip.x - 1.0).abs() < 1e-4);
        assert!((clip.y + 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut camera = Camera::new(1.0);
        camera.resize(1600, 800);
        assert_eq!(camera.aspect(), 2.0);
        let clip = camera.view_projection().project_point3(Vec3::new(3.0, 0.0, 0.0));
        assert!((clip.x - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_zero_size_resize_ignored() {
        let mut camera = Camera::new(1.5);
        camera.resize(0, 600);
        assert_eq!(camera.aspect(), 1.5);
    }

    #[test]
    fn test_toggle_perspective() {
        let mut camera = Camera::default();
        let ortho = camera.projection();
        camera.toggle_ortho();
        assert!(!camera.orthographic);
        assert_ne!(camera.projection(), ortho);
    }
}
