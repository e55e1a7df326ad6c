use nalgebra::{Matrix4, Vector3};

use super::{FrameBufferId, ShaderId, TextureId, TextureSize};

/// Value of a shader uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    Int(i32),
    Float(f32),
    Bool(bool),
    Vec3(Vector3<f32>),
    Mat4(Matrix4<f32>),
}

/// Built-in geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mesh {
    /// Full screen triangle strip with uv
    ScreenQuad,
    /// Unit cube `[0;1]^3`, 36 vertices
    UnitCube,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearMask {
    pub color: bool,
    pub depth: bool,
}

impl ClearMask {
    pub const COLOR: ClearMask = ClearMask {
        color: true,
        depth: false,
    };
    pub const DEPTH: ClearMask = ClearMask {
        color: false,
        depth: true,
    };
    pub const ALL: ClearMask = ClearMask {
        color: true,
        depth: true,
    };
}

/// Commands the pipeline and the updaters issue.
///
/// Resources are addressed by id only, the device owns the actual objects.
/// Calls are executed in submission order.
pub trait RenderDevice {
    fn push_debug_group(&mut self, label: &str);

    fn pop_debug_group(&mut self);

    fn bind_framebuffer(&mut self, framebuffer: FrameBufferId);

    fn use_shader(&mut self, shader: ShaderId);

    /// Set a uniform of the shader in use
    fn set_uniform(&mut self, name: &str, value: Uniform);

    /// Bind texture to its fixed unit
    fn bind_texture(&mut self, texture: TextureId);

    /// Replace content and size of a texture, format comes from [`TextureId::spec`]
    fn upload_texture(&mut self, texture: TextureId, size: TextureSize, data: &[u8]);

    fn set_viewport(&mut self, width: u32, height: u32);

    fn clear(&mut self, mask: ClearMask);

    fn set_depth_mask(&mut self, enabled: bool);

    /// Standard alpha blending
    fn set_blending(&mut self, enabled: bool);

    fn set_depth_test(&mut self, enabled: bool);

    fn draw(&mut self, mesh: Mesh);

    /// Copy depth of `from` into `to`, both `width` x `height`
    fn blit_depth(&mut self, from: FrameBufferId, to: FrameBufferId, width: u32, height: u32);
}
