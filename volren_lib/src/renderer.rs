use std::sync::Arc;

use log::info;
use nalgebra::Matrix4;

use crate::{
    camera::Camera,
    config::RendererConfig,
    error::GpuError,
    gpu::{gl::GlDevice, RenderDevice},
    params::{DisplayProperties, GuiParameters, GuiUpdateFlags},
    render::{FrameContext, Pipeline},
    ssao::{SsaoKernel, SsaoUpdater},
    transfer_function::TransferFunctionTextureUpdater,
    volume::{load_volume_raw, VolumeMetadata},
};

/// Inputs of one frame, owned by the GUI layer
pub struct FrameState<'a> {
    pub params: &'a GuiParameters,
    pub flags: &'a GuiUpdateFlags,
    pub display: &'a DisplayProperties,
    pub camera: &'a dyn Camera,
}

/// Drives updaters and the pipeline once per frame
pub struct Renderer<D>
where
    D: RenderDevice,
{
    device: D,
    pipeline: Pipeline,
    kernel: SsaoKernel,
    ssao_updater: SsaoUpdater,
    transfer_function_updater: TransferFunctionTextureUpdater,
    resolution: (u32, u32),
    shadow_map_size: u32,
    model: Matrix4<f32>,
}

impl Renderer<GlDevice> {
    /// Load the configured dataset and create all GL resources
    ///
    /// # Safety
    ///
    /// `gl` must be current on this thread for the lifetime of the renderer.
    pub unsafe fn with_gl(
        gl: Arc<glow::Context>,
        config: &RendererConfig,
    ) -> Result<Renderer<GlDevice>, GpuError> {
        let volume = load_volume_raw(&config.dataset)?;
        let device = GlDevice::new(gl, config, &volume)?;
        Ok(Renderer::new(device, config, &volume.metadata))
    }

    /// Reallocate window sized targets
    pub fn resize(&mut self, width: u32, height: u32) {
        self.device.resize(width, height);
        if self.set_resolution(width, height) {
            info!("Resized to {}x{}", width, height);
        }
    }
}

impl<D> Renderer<D>
where
    D: RenderDevice,
{
    /// `device` must already hold the resources for `config`
    pub fn new(device: D, config: &RendererConfig, volume: &VolumeMetadata) -> Renderer<D> {
        Renderer::with_kernel(device, config, volume, SsaoKernel::new())
    }

    pub fn with_kernel(
        device: D,
        config: &RendererConfig,
        volume: &VolumeMetadata,
        kernel: SsaoKernel,
    ) -> Renderer<D> {
        Renderer {
            device,
            pipeline: Pipeline::standard(),
            kernel,
            ssao_updater: SsaoUpdater::new(),
            transfer_function_updater: TransferFunctionTextureUpdater::new(),
            resolution: config.resolution,
            shadow_map_size: config.shadow_map_size,
            model: volume_model(volume),
        }
    }

    /// Updaters first, then every enabled pass
    pub fn frame(&mut self, state: &FrameState) {
        self.ssao_updater.update(
            &mut self.device,
            state.flags,
            &state.params.ssao,
            &mut self.kernel,
        );
        self.transfer_function_updater.update(
            &mut self.device,
            state.flags,
            &state.params.transfer_function,
        );

        let frame = FrameContext {
            params: state.params,
            display: state.display,
            camera: state.camera,
            resolution: self.resolution,
            model: self.model,
            shadow_map_size: self.shadow_map_size,
        };
        self.pipeline.execute(&mut self.device, &frame);
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn kernel(&self) -> &SsaoKernel {
        &self.kernel
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn resolution(&self) -> (u32, u32) {
        self.resolution
    }

    /// Zero sized resolutions (minimized window) are ignored, returns `false` for them
    pub fn set_resolution(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.resolution = (width, height);
        true
    }
}

/// Scales the unit cube to the shape of the volume
pub fn volume_model(volume: &VolumeMetadata) -> Matrix4<f32> {
    Matrix4::new_nonuniform_scaling(&volume.normalized_extent())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::RecordingDevice;
    use nalgebra::point;

    fn renderer() -> Renderer<RecordingDevice> {
        let config = RendererConfig::builder()
            .resolution(640, 480)
            .build_unchecked();
        Renderer::with_kernel(
            RecordingDevice::new(),
            &config,
            &VolumeMetadata::new(8, 8, 8),
            SsaoKernel::with_seed(3),
        )
    }

    #[test]
    fn zero_resolution_is_ignored() {
        let mut renderer = renderer();

        assert!(!renderer.set_resolution(0, 0));
        assert!(!renderer.set_resolution(1024, 0));
        assert_eq!(renderer.resolution(), (640, 480));

        assert!(renderer.set_resolution(1024, 768));
        assert_eq!(renderer.resolution(), (1024, 768));
    }

    #[test]
    fn model_keeps_aspect() {
        let mut meta = VolumeMetadata::new(256, 128, 64);
        meta.scale = nalgebra::vector![1.0, 1.0, 2.0];
        let corner = volume_model(&meta).transform_point(&point![1.0, 1.0, 1.0]);
        assert_eq!(corner, point![1.0, 0.5, 0.5]);
    }
}
