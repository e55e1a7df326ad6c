use log::warn;
use nalgebra::{vector, Vector3};

use crate::defaults::{MAX_SSAO_KERNEL_SIZE, SSAO_KERNEL_SIZE, SSAO_NOISE_SIZE};

/// Hemisphere samples and rotation vectors for SSAO
#[derive(Debug, Clone)]
pub struct SsaoKernel {
    rng: fastrand::Rng,
    samples: Vec<Vector3<f32>>,
    noise: Vec<Vector3<f32>>,
    noise_size: usize,
}

impl Default for SsaoKernel {
    fn default() -> Self {
        SsaoKernel::from_rng(fastrand::Rng::new())
    }
}

impl SsaoKernel {
    pub fn new() -> SsaoKernel {
        Default::default()
    }

    /// Same seed, same samples
    pub fn with_seed(seed: u64) -> SsaoKernel {
        let rng = fastrand::Rng::new();
        rng.seed(seed);
        SsaoKernel::from_rng(rng)
    }

    fn from_rng(rng: fastrand::Rng) -> SsaoKernel {
        let mut kernel = SsaoKernel {
            rng,
            samples: vec![],
            noise: vec![],
            noise_size: 0,
        };
        kernel.update_kernel(SSAO_KERNEL_SIZE);
        kernel.update_noise(SSAO_NOISE_SIZE);
        kernel
    }

    /// Regenerate `kernel_size` samples in the +z hemisphere.
    ///
    /// Samples get denser near the origin. Sizes above
    /// [`MAX_SSAO_KERNEL_SIZE`] are clamped.
    pub fn update_kernel(&mut self, kernel_size: usize) {
        let kernel_size = if kernel_size > MAX_SSAO_KERNEL_SIZE {
            warn!(
                "SSAO kernel size {} clamped to {}",
                kernel_size, MAX_SSAO_KERNEL_SIZE
            );
            MAX_SSAO_KERNEL_SIZE
        } else {
            kernel_size
        };

        let rng = &self.rng;
        self.samples = (0..kernel_size)
            .map(|i| {
                let sample = vector![
                    rng.f32() * 2.0 - 1.0,
                    rng.f32() * 2.0 - 1.0,
                    rng.f32()
                ];
                // zero vector stays zero
                let sample = sample.try_normalize(f32::EPSILON).unwrap_or(sample);
                let sample = sample * rng.f32();

                let scale = i as f32 / 64.0;
                sample * lerp(0.1, 1.0, scale * scale)
            })
            .collect();
    }

    /// Regenerate `noise_size`^2 random rotation vectors around z
    pub fn update_noise(&mut self, noise_size: usize) {
        let rng = &self.rng;
        self.noise = (0..noise_size * noise_size)
            .map(|_| vector![rng.f32() * 2.0 - 1.0, rng.f32() * 2.0 - 1.0, 0.0])
            .collect();
        self.noise_size = noise_size;
    }

    pub fn sample(&self, i: usize) -> Option<&Vector3<f32>> {
        self.samples.get(i)
    }

    pub fn samples(&self) -> &[Vector3<f32>] {
        &self.samples
    }

    pub fn noise(&self) -> &[Vector3<f32>] {
        &self.noise
    }

    /// Noise as interleaved f32 RGB, native endian
    pub fn noise_bytes(&self) -> Vec<u8> {
        let floats: Vec<f32> = self.noise.iter().flat_map(|v| [v.x, v.y, v.z]).collect();
        bytemuck::cast_slice(&floats).to_vec()
    }

    pub fn kernel_size(&self) -> usize {
        self.samples.len()
    }

    pub fn noise_size(&self) -> usize {
        self.noise_size
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}
