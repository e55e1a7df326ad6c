use rayon::prelude::*;

use crate::{color::to_unorm8, defaults::TRANSFER_FUNCTION_TEXTURE_SIZE};

use super::{interpolate::interpolate, ControlPoint};

const CHANNELS: usize = 4;

/// RGBA8 lookup table of the transfer function, one texel per normalized value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFunctionTable {
    texels: Vec<u8>,
}

impl TransferFunctionTable {
    /// Texel `i` samples the function at `i / (size - 1)`
    pub fn build(points: &[ControlPoint]) -> TransferFunctionTable {
        let mut texels = vec![0; TRANSFER_FUNCTION_TEXTURE_SIZE * CHANNELS];
        let last = (TRANSFER_FUNCTION_TEXTURE_SIZE - 1) as f32;

        texels
            .par_chunks_mut(CHANNELS)
            .enumerate()
            .for_each(|(i, texel)| {
                let rgba = interpolate(i as f32 / last, points);
                for (out, channel) in texel.iter_mut().zip(rgba.iter()) {
                    *out = to_unorm8(*channel);
                }
            });

        TransferFunctionTable { texels }
    }

    pub fn texel_count(&self) -> usize {
        self.texels.len() / CHANNELS
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.texels
    }

    pub fn texel(&self, i: usize) -> Option<[u8; 4]> {
        let t = self.texels.get(i * CHANNELS..(i + 1) * CHANNELS)?;
        Some([t[0], t[1], t[2], t[3]])
    }
}
