//! Uniform groups shared by several passes

use crate::{
    defaults::{MATERIAL_SHININESS, MATERIAL_SPECULAR},
    gpu::{RenderDevice, Uniform},
    lights::{DirectionalLight, PointLight},
};

use super::FrameContext;

/// `view`, `projection` and `cameraPos`
pub fn set_camera(device: &mut dyn RenderDevice, frame: &FrameContext) {
    device.set_uniform("view", Uniform::Mat4(frame.camera.view_matrix()));
    device.set_uniform(
        "projection",
        Uniform::Mat4(frame.camera.projection_matrix(frame.aspect_ratio())),
    );
    device.set_uniform(
        "cameraPos",
        Uniform::Vec3(frame.camera.get_position().coords),
    );
}

pub fn set_model(device: &mut dyn RenderDevice, frame: &FrameContext) {
    device.set_uniform("model", Uniform::Mat4(frame.model));
}

/// Both lights and the material
pub fn set_lighting(device: &mut dyn RenderDevice, frame: &FrameContext) {
    set_directional_light(device, &frame.params.directional_light);
    for (i, light) in frame.params.point_lights.iter().enumerate() {
        set_point_light(device, i, light);
    }
    device.set_uniform("material.specular", Uniform::Vec3(MATERIAL_SPECULAR));
    device.set_uniform("material.shininess", Uniform::Float(MATERIAL_SHININESS));
}

fn set_directional_light(device: &mut dyn RenderDevice, light: &DirectionalLight) {
    device.set_uniform("directionalLight.direction", Uniform::Vec3(light.direction));
    device.set_uniform("directionalLight.ambient", Uniform::Vec3(light.ambient));
    device.set_uniform("directionalLight.diffuse", Uniform::Vec3(light.diffuse));
    device.set_uniform("directionalLight.specular", Uniform::Vec3(light.specular));
    device.set_uniform("directionalLight.intensity", Uniform::Float(light.intensity));
}

fn set_point_light(device: &mut dyn RenderDevice, i: usize, light: &PointLight) {
    let field = |name: &str| format!("pointLights[{}].{}", i, name);
    device.set_uniform(&field("position"), Uniform::Vec3(light.position.coords));
    device.set_uniform(&field("ambient"), Uniform::Vec3(light.ambient));
    device.set_uniform(&field("diffuse"), Uniform::Vec3(light.diffuse));
    device.set_uniform(&field("specular"), Uniform::Vec3(light.specular));
    device.set_uniform(&field("intensity"), Uniform::Float(light.intensity));
}
