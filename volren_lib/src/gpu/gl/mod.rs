//! OpenGL backend built on `glow`

mod convert;
mod device;
mod objects;

pub use device::GlDevice;
