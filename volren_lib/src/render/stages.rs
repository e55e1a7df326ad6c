//! [`PassStage`] of every pass in [`super::Pipeline::standard`]

use crate::{
    defaults::LIGHT_SOURCE_SCALE,
    gpu::{ClearMask, FrameBufferId, Mesh, RenderDevice, Uniform},
};

use super::{uniforms, FrameContext, PassStage};

/// Depth of the volume as seen from the directional light
pub struct ShadowStage;

impl PassStage for ShadowStage {
    fn is_enabled(&self, frame: &FrameContext) -> bool {
        frame.params.enable_shadows
    }

    fn prepare(&self, device: &mut dyn RenderDevice, frame: &FrameContext) {
        device.set_viewport(frame.shadow_map_size, frame.shadow_map_size);
        device.clear(ClearMask::DEPTH);
        device.set_uniform("lightSpaceMatrix", Uniform::Mat4(frame.light_space_matrix()));
        uniforms::set_model(device, frame);
        device.set_uniform(
            "densityMultiplier",
            Uniform::Float(frame.params.density_multiplier),
        );
    }

    fn draw(&self, device: &mut dyn RenderDevice, _frame: &FrameContext) {
        device.draw(Mesh::UnitCube);
    }
}

/// Raycasts the volume into the G-buffer
pub struct GBufferStage;

impl PassStage for GBufferStage {
    fn prepare(&self, device: &mut dyn RenderDevice, frame: &FrameContext) {
        let (width, height) = frame.resolution;
        device.set_viewport(width, height);
        device.set_blending(false);
        device.set_depth_test(true);
        device.clear(ClearMask::ALL);

        uniforms::set_camera(device, frame);
        uniforms::set_model(device, frame);
        device.set_uniform(
            "densityMultiplier",
            Uniform::Float(frame.params.density_multiplier),
        );
        device.set_uniform("lightSpaceMatrix", Uniform::Mat4(frame.light_space_matrix()));
        uniforms::set_lighting(device, frame);
    }

    fn draw(&self, device: &mut dyn RenderDevice, _frame: &FrameContext) {
        device.draw(Mesh::UnitCube);
    }
}

/// Raw occlusion from G-buffer positions and normals
pub struct SsaoStage;

impl PassStage for SsaoStage {
    fn prepare(&self, device: &mut dyn RenderDevice, frame: &FrameContext) {
        device.clear(ClearMask::COLOR);
        uniforms::set_camera(device, frame);
    }

    fn draw(&self, device: &mut dyn RenderDevice, _frame: &FrameContext) {
        device.draw(Mesh::ScreenQuad);
    }
}

/// Removes the noise pattern from the occlusion
pub struct SsaoBlurStage;

impl PassStage for SsaoBlurStage {
    fn prepare(&self, device: &mut dyn RenderDevice, _frame: &FrameContext) {
        device.clear(ClearMask::COLOR);
    }

    fn draw(&self, device: &mut dyn RenderDevice, _frame: &FrameContext) {
        device.draw(Mesh::ScreenQuad);
    }
}

/// Lights the G-buffer, applies occlusion and shadows
pub struct CompositeStage;

impl PassStage for CompositeStage {
    fn prepare(&self, device: &mut dyn RenderDevice, frame: &FrameContext) {
        device.clear(ClearMask::ALL);
        device.set_depth_mask(false);
        uniforms::set_lighting(device, frame);
        device.set_uniform(
            "cameraPos",
            Uniform::Vec3(frame.camera.get_position().coords),
        );
        device.set_uniform("enableShadows", Uniform::Bool(frame.params.enable_shadows));
    }

    fn draw(&self, device: &mut dyn RenderDevice, _frame: &FrameContext) {
        device.draw(Mesh::ScreenQuad);
        device.set_depth_mask(true);
    }
}

/// Copies volume depth to the window so light markers get occluded
pub struct DepthBlitStage;

impl PassStage for DepthBlitStage {
    fn prepare(&self, _device: &mut dyn RenderDevice, _frame: &FrameContext) {}

    fn draw(&self, device: &mut dyn RenderDevice, frame: &FrameContext) {
        let (width, height) = frame.resolution;
        device.blit_depth(FrameBufferId::GBuffer, FrameBufferId::Default, width, height);
    }
}

/// Small cube at every point light
pub struct LightSourceStage;

impl PassStage for LightSourceStage {
    fn is_enabled(&self, frame: &FrameContext) -> bool {
        frame.params.show_light_sources
    }

    fn prepare(&self, device: &mut dyn RenderDevice, frame: &FrameContext) {
        device.set_blending(true);
        uniforms::set_camera(device, frame);
    }

    fn draw(&self, device: &mut dyn RenderDevice, frame: &FrameContext) {
        for light in &frame.params.point_lights {
            device.set_uniform(
                "model",
                Uniform::Mat4(light.marker_model(LIGHT_SOURCE_SCALE)),
            );
            device.set_uniform("lightColor", Uniform::Vec3(light.diffuse));
            device.draw(Mesh::UnitCube);
        }
        device.set_blending(false);
    }
}

/// Shows one intermediate texture over the whole window
pub struct DebugStage;

impl PassStage for DebugStage {
    fn is_enabled(&self, frame: &FrameContext) -> bool {
        frame.display.debug_view.is_some()
    }

    fn prepare(&self, device: &mut dyn RenderDevice, frame: &FrameContext) {
        device.clear(ClearMask::ALL);
        if let Some(view) = frame.display.debug_view {
            device.set_uniform(
                "colorTexture",
                Uniform::Int(view.texture().unit() as i32),
            );
            device.set_uniform("isSingleChannel", Uniform::Bool(view.is_single_channel()));
        }
    }

    fn draw(&self, device: &mut dyn RenderDevice, _frame: &FrameContext) {
        device.draw(Mesh::ScreenQuad);
    }
}
