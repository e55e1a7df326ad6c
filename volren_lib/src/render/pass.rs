use crate::gpu::{ElementId, FrameBufferId, RenderDevice, RenderPassId, ShaderId, TextureId};

use super::FrameContext;

/// Pass specific work, run by [`RenderPass::render`]
pub trait PassStage {
    fn is_enabled(&self, _frame: &FrameContext) -> bool {
        true
    }

    /// State and uniforms, target and shader are already bound
    fn prepare(&self, device: &mut dyn RenderDevice, frame: &FrameContext);

    /// Issue the draw, inputs are bound
    fn draw(&self, device: &mut dyn RenderDevice, frame: &FrameContext);
}

/// One step of the pipeline.
///
/// Owns no GPU objects, everything is addressed by id through the device.
pub struct RenderPass {
    id: RenderPassId,
    shader: ShaderId,
    target: FrameBufferId,
    inputs: Vec<TextureId>,
    stage: Box<dyn PassStage>,
}

impl RenderPass {
    pub fn new<S>(
        id: RenderPassId,
        shader: ShaderId,
        target: FrameBufferId,
        inputs: Vec<TextureId>,
        stage: S,
    ) -> RenderPass
    where
        S: PassStage + 'static,
    {
        RenderPass {
            id,
            shader,
            target,
            inputs,
            stage: Box::new(stage),
        }
    }

    pub fn id(&self) -> RenderPassId {
        self.id
    }

    pub fn shader(&self) -> ShaderId {
        self.shader
    }

    pub fn target(&self) -> FrameBufferId {
        self.target
    }

    pub fn inputs(&self) -> &[TextureId] {
        &self.inputs
    }

    pub fn is_enabled(&self, frame: &FrameContext) -> bool {
        self.stage.is_enabled(frame)
    }

    /// Run the pass, leaves the default framebuffer bound
    pub fn render(&self, device: &mut dyn RenderDevice, frame: &FrameContext) {
        device.push_debug_group(self.id.name());
        device.bind_framebuffer(self.target);
        device.use_shader(self.shader);

        self.stage.prepare(device, frame);
        for &texture in &self.inputs {
            device.bind_texture(texture);
        }
        self.stage.draw(device, frame);

        device.bind_framebuffer(FrameBufferId::Default);
        device.pop_debug_group();
    }
}

impl std::fmt::Debug for RenderPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderPass")
            .field("id", &self.id)
            .field("shader", &self.shader)
            .field("target", &self.target)
            .field("inputs", &self.inputs)
            .finish()
    }
}
