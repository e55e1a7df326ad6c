use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

use crate::defaults;

pub trait Camera {
    fn get_position(&self) -> Point3<f32>;

    // world space -> camera space
    fn view_matrix(&self) -> Matrix4<f32>;

    // camera space -> clip space
    fn projection_matrix(&self, aspect: f32) -> Matrix4<f32>;
}

/// Camera looking at a fixed point
#[derive(Debug, Clone, PartialEq)]
pub struct TargetCamera {
    position: Point3<f32>,
    target: Point3<f32>,
    up: Vector3<f32>,
    /// Vertical field of view, degrees
    zoom: f32,
}

impl Default for TargetCamera {
    fn default() -> Self {
        TargetCamera::new(defaults::CAMERA_POSITION, defaults::CAMERA_LOOK_AT)
    }
}

impl TargetCamera {
    pub fn new(position: Point3<f32>, target: Point3<f32>) -> TargetCamera {
        TargetCamera {
            position,
            target,
            up: defaults::CAMERA_UP,
            zoom: defaults::ZOOM,
        }
    }

    pub fn set_pos(&mut self, pos: Point3<f32>) {
        self.position = pos;
    }

    pub fn set_target(&mut self, target: Point3<f32>) {
        self.target = target;
    }

    pub fn get_target(&self) -> Point3<f32> {
        self.target
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(1.0, 179.0);
    }

    pub fn get_zoom(&self) -> f32 {
        self.zoom
    }
}

impl Camera for TargetCamera {
    fn get_position(&self) -> Point3<f32> {
        self.position
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        Perspective3::new(
            aspect,
            self.zoom.to_radians(),
            defaults::NEAR_PLANE,
            defaults::FAR_PLANE,
        )
        .to_homogeneous()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::point;

    #[test]
    fn target_in_front() {
        let camera = TargetCamera::new(point![0.0, 0.0, 5.0], point![0.0, 0.0, 0.0]);
        let p = camera.view_matrix().transform_point(&point![0.0, 0.0, 0.0]);
        // right handed, camera looks down -z
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert!((p.z + 5.0).abs() < 1e-6);
    }

    #[test]
    fn projection_maps_target_to_center() {
        let camera = TargetCamera::default();
        let clip = camera.projection_matrix(16.0 / 9.0) * camera.view_matrix();
        let ndc = clip.transform_point(&camera.get_target());
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn zoom_clamped() {
        let mut camera = TargetCamera::default();
        camera.set_zoom(500.0);
        assert_eq!(camera.get_zoom(), 179.0);
    }
}
