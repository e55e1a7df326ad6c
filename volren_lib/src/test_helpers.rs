//! Module with helper functions
//! Saves repetition in unit and integration tests

use std::path::PathBuf;

use crate::{
    gpu::{ClearMask, FrameBufferId, Mesh, RenderDevice, ShaderId, TextureId, TextureSize, Uniform},
    volume::{save_metadata, VolumeData, VolumeMetadata},
};

/// One recorded [`RenderDevice`] command
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    PushDebugGroup(String),
    PopDebugGroup,
    BindFramebuffer(FrameBufferId),
    UseShader(ShaderId),
    SetUniform { name: String, value: Uniform },
    BindTexture(TextureId),
    UploadTexture {
        texture: TextureId,
        size: TextureSize,
        /// Bytes uploaded
        len: usize,
    },
    SetViewport(u32, u32),
    Clear(ClearMask),
    SetDepthMask(bool),
    SetBlending(bool),
    SetDepthTest(bool),
    Draw(Mesh),
    BlitDepth {
        from: FrameBufferId,
        to: FrameBufferId,
        width: u32,
        height: u32,
    },
}

/// Device that only remembers what it was asked to do
#[derive(Debug, Default)]
pub struct RecordingDevice {
    calls: Vec<Call>,
}

impl RecordingDevice {
    pub fn new() -> RecordingDevice {
        Default::default()
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Labels of debug groups in the order they were opened
    pub fn debug_groups(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::PushDebugGroup(label) => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    /// Calls issued inside the first debug group called `label`, markers excluded
    pub fn calls_in_group(&self, label: &str) -> &[Call] {
        let start = self
            .calls
            .iter()
            .position(|c| matches!(c, Call::PushDebugGroup(l) if l == label));
        let start = match start {
            Some(i) => i + 1,
            None => return &[],
        };
        let len = self.calls[start..]
            .iter()
            .position(|c| matches!(c, Call::PopDebugGroup))
            .unwrap_or(self.calls.len() - start);
        &self.calls[start..start + len]
    }

    /// `(size, byte count)` of every upload to `texture`
    pub fn uploads_of(&self, texture: TextureId) -> Vec<(TextureSize, usize)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::UploadTexture { texture: t, size, len } if *t == texture => {
                    Some((*size, *len))
                }
                _ => None,
            })
            .collect()
    }

    /// Last value set to uniform `name` while `shader` was in use
    pub fn uniform(&self, shader: ShaderId, name: &str) -> Option<Uniform> {
        let mut current = None;
        let mut found = None;
        for call in &self.calls {
            match call {
                Call::UseShader(s) => current = Some(*s),
                Call::SetUniform { name: n, value } if current == Some(shader) && n == name => {
                    found = Some(*value)
                }
                _ => (),
            }
        }
        found
    }
}

impl RenderDevice for RecordingDevice {
    fn push_debug_group(&mut self, label: &str) {
        self.calls.push(Call::PushDebugGroup(label.to_owned()));
    }

    fn pop_debug_group(&mut self) {
        self.calls.push(Call::PopDebugGroup);
    }

    fn bind_framebuffer(&mut self, framebuffer: FrameBufferId) {
        self.calls.push(Call::BindFramebuffer(framebuffer));
    }

    fn use_shader(&mut self, shader: ShaderId) {
        self.calls.push(Call::UseShader(shader));
    }

    fn set_uniform(&mut self, name: &str, value: Uniform) {
        self.calls.push(Call::SetUniform {
            name: name.to_owned(),
            value,
        });
    }

    fn bind_texture(&mut self, texture: TextureId) {
        self.calls.push(Call::BindTexture(texture));
    }

    fn upload_texture(&mut self, texture: TextureId, size: TextureSize, data: &[u8]) {
        self.calls.push(Call::UploadTexture {
            texture,
            size,
            len: data.len(),
        });
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.calls.push(Call::SetViewport(width, height));
    }

    fn clear(&mut self, mask: ClearMask) {
        self.calls.push(Call::Clear(mask));
    }

    fn set_depth_mask(&mut self, enabled: bool) {
        self.calls.push(Call::SetDepthMask(enabled));
    }

    fn set_blending(&mut self, enabled: bool) {
        self.calls.push(Call::SetBlending(enabled));
    }

    fn set_depth_test(&mut self, enabled: bool) {
        self.calls.push(Call::SetDepthTest(enabled));
    }

    fn draw(&mut self, mesh: Mesh) {
        self.calls.push(Call::Draw(mesh));
    }

    fn blit_depth(&mut self, from: FrameBufferId, to: FrameBufferId, width: u32, height: u32) {
        self.calls.push(Call::BlitDepth {
            from,
            to,
            width,
            height,
        });
    }
}

/// 8 bit volume, voxel `i` (x fastest) has value `i as u8`
pub fn ramp_volume(width: u32, height: u32, depth: u32) -> VolumeData {
    let metadata = VolumeMetadata::new(width, height, depth);
    let data = (0..metadata.voxel_count()).map(|i| i as u8).collect();
    VolumeData::from_vec(metadata, data).unwrap()
}

/// Fresh directory in the system temp dir, unique per test name and process
pub fn temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("volren_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes `name.raw` and `name.ini` into `dir`, returns path of the raw file
pub fn write_volume(dir: &std::path::Path, name: &str, metadata: &VolumeMetadata, data: &[u8]) -> PathBuf {
    let raw_path = dir.join(format!("{}.raw", name));
    std::fs::write(&raw_path, data).unwrap();
    save_metadata(&raw_path, metadata).unwrap();
    raw_path
}
