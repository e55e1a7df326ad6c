use nalgebra::Matrix4;

use crate::{
    camera::Camera,
    gpu::{FrameBufferId, RenderDevice, RenderPassId, ShaderId, TextureId},
    params::{DebugView, DisplayProperties, GuiParameters},
};

use super::{stages::*, RenderPass};

/// Everything a pass may read during one frame
pub struct FrameContext<'a> {
    pub params: &'a GuiParameters,
    pub display: &'a DisplayProperties,
    pub camera: &'a dyn Camera,
    /// Window size in pixels
    pub resolution: (u32, u32),
    /// Places the unit cube around the volume
    pub model: Matrix4<f32>,
    pub shadow_map_size: u32,
}

impl FrameContext<'_> {
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.resolution;
        width as f32 / height.max(1) as f32
    }

    pub fn light_space_matrix(&self) -> Matrix4<f32> {
        self.params.directional_light.light_space_matrix()
    }
}

/// Fixed sequence of render passes
#[derive(Debug)]
pub struct Pipeline {
    passes: Vec<RenderPass>,
}

impl Pipeline {
    /// Shadow, G-buffer, SSAO, blur, composite, depth blit, light markers, debug view
    pub fn standard() -> Pipeline {
        let debug_inputs = DebugView::ALL.iter().map(|v| v.texture()).collect();

        let passes = vec![
            RenderPass::new(
                RenderPassId::Shadow,
                ShaderId::Shadow,
                FrameBufferId::Shadow,
                vec![TextureId::VolumeData, TextureId::TransferFunction],
                ShadowStage,
            ),
            RenderPass::new(
                RenderPassId::GBuffer,
                ShaderId::Volume,
                FrameBufferId::GBuffer,
                vec![
                    TextureId::VolumeData,
                    TextureId::TransferFunction,
                    TextureId::ShadowMap,
                ],
                GBufferStage,
            ),
            RenderPass::new(
                RenderPassId::Ssao,
                ShaderId::Ssao,
                FrameBufferId::Ssao,
                vec![TextureId::Position, TextureId::Normal, TextureId::SsaoNoise],
                SsaoStage,
            ),
            RenderPass::new(
                RenderPassId::SsaoBlur,
                ShaderId::SsaoBlur,
                FrameBufferId::SsaoBlur,
                vec![TextureId::Ssao],
                SsaoBlurStage,
            ),
            RenderPass::new(
                RenderPassId::Composite,
                ShaderId::SsaoFinal,
                FrameBufferId::Default,
                vec![
                    TextureId::Position,
                    TextureId::LightSpacePosition,
                    TextureId::Normal,
                    TextureId::Albedo,
                    TextureId::PointLightsContribution,
                    TextureId::Stencil,
                    TextureId::SsaoBlur,
                    TextureId::ShadowMap,
                ],
                CompositeStage,
            ),
            RenderPass::new(
                RenderPassId::DepthBlit,
                ShaderId::SsaoFinal,
                FrameBufferId::Default,
                vec![],
                DepthBlitStage,
            ),
            RenderPass::new(
                RenderPassId::LightSource,
                ShaderId::LightSource,
                FrameBufferId::Default,
                vec![],
                LightSourceStage,
            ),
            RenderPass::new(
                RenderPassId::Debug,
                ShaderId::DebugQuad,
                FrameBufferId::Default,
                debug_inputs,
                DebugStage,
            ),
        ];

        Pipeline { passes }
    }

    /// Run enabled passes in order
    pub fn execute(&self, device: &mut dyn RenderDevice, frame: &FrameContext) {
        for pass in self.passes.iter().filter(|p| p.is_enabled(frame)) {
            pass.render(device, frame);
        }
    }

    pub fn pass_ids(&self) -> Vec<RenderPassId> {
        self.passes.iter().map(RenderPass::id).collect()
    }

    pub fn passes(&self) -> &[RenderPass] {
        &self.passes
    }
}
