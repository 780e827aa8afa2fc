//! Editor gizmo points: named scene locations the editor overlays against
//! the active camera. Updated only in active+editor scenes.

use crate::foundation::math::Vec3;
use crate::scene::camera::CameraPose;

/// A named location in the scene, tracked against the camera for editor
/// display.
#[derive(Debug, Clone)]
pub struct ScenePoint {
    /// Point index from scene data.
    pub index: usize,
    /// World position.
    pub position: Vec3,
    /// Distance from the active camera, refreshed every editor frame.
    pub camera_distance: f32,
}

impl ScenePoint {
    /// Create a point at a world position.
    pub fn new(index: usize, position: Vec3) -> Self {
        Self {
            index,
            position,
            camera_distance: f32::INFINITY,
        }
    }

    /// Refresh camera-relative display data.
    pub fn update(&mut self, camera: &CameraPose) {
        self.camera_distance = (self.position - camera.position).norm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_tracks_camera() {
        let mut point = ScenePoint::new(0, Vec3::new(3.0, 0.0, 4.0));
        assert_eq!(point.camera_distance, f32::INFINITY);
        point.update(&CameraPose::default());
        assert_relative_eq!(point.camera_distance, 5.0, epsilon = 1e-6);
    }
}
