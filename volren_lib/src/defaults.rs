//! Default values
//! Renderer starts with these, GUI ranges are declared here too

use std::ops::RangeInclusive;

use nalgebra::{point, vector, Point3, Vector3};

pub const WINDOW_WIDTH: u32 = 1920;
pub const WINDOW_HEIGHT: u32 = 1080;

pub const DATASET_PATH: &str = "./datasets/knee.raw";
pub const SHADER_DIR: &str = "shaders";

pub const CAMERA_POSITION: Point3<f32> = point![2.5, 0.5, 2.5];
pub const CAMERA_LOOK_AT: Point3<f32> = point![0.5, 0.5, 0.5];
pub const CAMERA_UP: Vector3<f32> = vector![0.0, 1.0, 0.0];
/// Vertical field of view in degrees
pub const ZOOM: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

pub const TRACKBALL_ROTATION_SENSITIVITY: f32 = 0.005;
pub const TRACKBALL_ZOOM_SENSITIVITY: f32 = 0.1;

// Transfer function
pub const MAX_CONTROL_POINTS: usize = 8;
pub const TRANSFER_FUNCTION_TEXTURE_SIZE: usize = 512;

// SSAO
pub const SSAO_KERNEL_SIZE: usize = 64;
/// Samples array in the SSAO shader has this many slots
pub const MAX_SSAO_KERNEL_SIZE: usize = 64;
pub const SSAO_NOISE_SIZE: usize = 4;
pub const SSAO_RADIUS: f32 = 0.538;
pub const SSAO_BIAS: f32 = 0.028;
pub const SSAO_KERNEL_SIZE_RANGE: RangeInclusive<usize> = 32..=128;
pub const SSAO_NOISE_SIZE_RANGE: RangeInclusive<usize> = 4..=16;
pub const SSAO_RADIUS_RANGE: RangeInclusive<f32> = 0.0..=1.0;
pub const SSAO_BIAS_RANGE: RangeInclusive<f32> = 0.0..=0.1;

// Raycasting
pub const DENSITY_MULTIPLIER: f32 = 20.0;
pub const DENSITY_MULTIPLIER_RANGE: RangeInclusive<f32> = 5.0..=40.0;

// Lights
pub const NUM_POINT_LIGHTS: usize = 2;
pub const SHOW_LIGHT_SOURCES: bool = false;
pub const ENABLE_SHADOWS: bool = true;
pub const SHADOW_MAP_SIZE: u32 = 2048;
/// Half extent of the orthographic shadow frustum
pub const SHADOW_FRUSTUM_EXTENT: f32 = 40.0;
pub const LIGHT_SOURCE_SCALE: f32 = 0.2;

pub const MATERIAL_SPECULAR: Vector3<f32> = vector![1.0, 1.0, 1.0];
pub const MATERIAL_SHININESS: f32 = 1.0;
