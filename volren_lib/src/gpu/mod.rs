//! GPU resources addressed by id, and the device that owns them

mod device;
pub mod gl;
mod ids;
pub mod primitives;
pub mod shader_source;
mod storage;
mod texture;

pub use device::{ClearMask, Mesh, RenderDevice, Uniform};
pub use ids::{ElementId, FrameBufferId, RenderPassId, ShaderId, TextureId};
pub use storage::ElementStorage;
pub use texture::{
    Filter, InternalFormat, PixelLayout, PixelType, TextureKind, TextureSize, TextureSpec, Wrap,
};
