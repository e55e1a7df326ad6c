use log::debug;

use crate::{
    gpu::{RenderDevice, ShaderId, TextureId, TextureSize, Uniform},
    params::{ChangeWatcher, GuiUpdateFlags, SsaoParameters},
};

use super::SsaoKernel;

/// Regenerates the SSAO kernel and pushes it to the shaders when SSAO
/// parameters change
#[derive(Debug, Default)]
pub struct SsaoUpdater {
    watcher: ChangeWatcher,
}

impl SsaoUpdater {
    pub fn new() -> SsaoUpdater {
        Default::default()
    }

    /// Returns `true` if the kernel was regenerated.
    /// Leaves the `SsaoFinal` shader bound when it does.
    pub fn update<D>(
        &mut self,
        device: &mut D,
        flags: &GuiUpdateFlags,
        params: &SsaoParameters,
        kernel: &mut SsaoKernel,
    ) -> bool
    where
        D: RenderDevice + ?Sized,
    {
        if !self.watcher.observe(flags.ssao_revision()) {
            return false;
        }

        kernel.update_kernel(params.kernel_size);
        kernel.update_noise(params.noise_size);

        let side = kernel.noise_size() as u32;
        device.upload_texture(
            TextureId::SsaoNoise,
            TextureSize::d2(side, side),
            &kernel.noise_bytes(),
        );

        device.use_shader(ShaderId::Ssao);
        device.set_uniform("kernelSize", Uniform::Int(kernel.kernel_size() as i32));
        device.set_uniform("noiseSize", Uniform::Int(side as i32));
        device.set_uniform("radius", Uniform::Float(params.radius));
        device.set_uniform("bias", Uniform::Float(params.bias));
        for (i, sample) in kernel.samples().iter().enumerate() {
            device.set_uniform(&format!("samples[{}]", i), Uniform::Vec3(*sample));
        }

        device.use_shader(ShaderId::SsaoFinal);
        device.set_uniform("enableSsao", Uniform::Bool(params.enabled));

        debug!(
            "SSAO kernel regenerated, {} samples, noise {}x{}",
            kernel.kernel_size(),
            side,
            side
        );
        true
    }

    pub fn invalidate(&mut self) {
        self.watcher.invalidate();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::{Call, RecordingDevice};

    #[test]
    fn first_update_uploads_everything() {
        let mut device = RecordingDevice::new();
        let flags = GuiUpdateFlags::default();
        let params = SsaoParameters::default();
        let mut kernel = SsaoKernel::with_seed(1);

        assert!(SsaoUpdater::new().update(&mut device, &flags, &params, &mut kernel));

        let uploads = device.uploads_of(TextureId::SsaoNoise);
        assert_eq!(uploads, vec![(TextureSize::d2(4, 4), 4 * 4 * 3 * 4)]);

        assert_eq!(
            device.uniform(ShaderId::Ssao, "kernelSize"),
            Some(Uniform::Int(64))
        );
        assert_eq!(
            device.uniform(ShaderId::Ssao, "radius"),
            Some(Uniform::Float(params.radius))
        );
        assert_eq!(
            device.uniform(ShaderId::Ssao, "samples[63]"),
            Some(Uniform::Vec3(kernel.samples()[63]))
        );
        assert_eq!(
            device.uniform(ShaderId::SsaoFinal, "enableSsao"),
            Some(Uniform::Bool(true))
        );
    }

    #[test]
    fn regenerates_only_on_change() {
        let mut device = RecordingDevice::new();
        let mut flags = GuiUpdateFlags::default();
        let mut params = SsaoParameters::default();
        let mut kernel = SsaoKernel::with_seed(1);
        let mut updater = SsaoUpdater::new();

        updater.update(&mut device, &flags, &params, &mut kernel);
        device.clear_calls();
        assert!(!updater.update(&mut device, &flags, &params, &mut kernel));
        assert!(device.calls().is_empty());

        params.kernel_size = 16;
        params.noise_size = 8;
        flags.mark_ssao_changed();
        assert!(updater.update(&mut device, &flags, &params, &mut kernel));
        assert_eq!(kernel.kernel_size(), 16);
        assert_eq!(kernel.noise_size(), 8);
        assert_eq!(
            device.uniform(ShaderId::Ssao, "noiseSize"),
            Some(Uniform::Int(8))
        );
        assert!(device.uniform(ShaderId::Ssao, "samples[16]").is_none());
    }

    #[test]
    fn noise_uploaded_before_uniforms() {
        let mut device = RecordingDevice::new();
        let flags = GuiUpdateFlags::default();
        let mut kernel = SsaoKernel::with_seed(1);
        SsaoUpdater::new().update(&mut device, &flags, &SsaoParameters::default(), &mut kernel);

        assert!(matches!(
            device.calls().first(),
            Some(Call::UploadTexture {
                texture: TextureId::SsaoNoise,
                ..
            })
        ));
    }
}
