use nalgebra::{point, vector, Matrix4, Orthographic3, Point3, Vector3};

use crate::defaults::{NUM_POINT_LIGHTS, SHADOW_FRUSTUM_EXTENT};

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels
    pub direction: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        DirectionalLight {
            direction: vector![-0.435, -0.886, 0.405],
            ambient: Vector3::repeat(0.805),
            diffuse: vector![0.980, 0.967, 0.960],
            specular: Vector3::repeat(0.17),
            intensity: 0.451,
        }
    }
}

impl DirectionalLight {
    /// Projection * view of the shadow map camera.
    ///
    /// The camera looks at the origin from twice the light direction back,
    /// with a fixed orthographic frustum.
    pub fn light_space_matrix(&self) -> Matrix4<f32> {
        let extent = SHADOW_FRUSTUM_EXTENT;
        let projection =
            Orthographic3::new(-extent, extent, -extent, extent, -extent, extent).to_homogeneous();

        let eye = Point3::from(-self.direction * 2.0);
        let up = if self.direction.cross(&Vector3::y()).norm() < f32::EPSILON {
            // straight down, y cannot be up
            Vector3::z()
        } else {
            Vector3::y()
        };
        let view = Matrix4::look_at_rh(&eye, &point![0.0, 0.0, 0.0], &up);

        projection * view
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub position: Point3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub intensity: f32,
}

impl PointLight {
    /// Model matrix of the small cube marking the light
    pub fn marker_model(&self, scale: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&self.position.coords) * Matrix4::new_scaling(scale)
    }
}

pub fn default_point_lights() -> [PointLight; NUM_POINT_LIGHTS] {
    [
        PointLight {
            position: point![15.615, 3.217, 3.851],
            ambient: Vector3::repeat(0.214),
            diffuse: vector![0.381, 0.579, 0.514],
            specular: vector![0.237, 0.562, 0.849],
            intensity: 0.466,
        },
        PointLight {
            position: point![16.175, 3.009, 10.993],
            ambient: vector![0.499, 0.341, 0.307],
            diffuse: vector![0.511, 0.381, 0.579],
            specular: vector![0.448, 0.686, 0.895],
            intensity: 0.230,
        },
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn origin_maps_inside_shadow_frustum() {
        let light = DirectionalLight::default();
        let m = light.light_space_matrix();
        let p = m.transform_point(&point![0.0, 0.0, 0.0]);
        assert!(p.x.abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
        assert!(p.z.abs() <= 1.0);
    }

    #[test]
    fn vertical_light_is_finite() {
        let light = DirectionalLight {
            direction: vector![0.0, -1.0, 0.0],
            ..Default::default()
        };
        let m = light.light_space_matrix();
        assert!(m.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn marker_model() {
        let lights = default_point_lights();
        let m = lights[0].marker_model(0.2);
        let p = m.transform_point(&point![1.0, 0.0, 0.0]);
        assert!((p.x - 15.815).abs() < 1e-4);
        assert!((p.y - 3.217).abs() < 1e-4);
    }
}
