//! Core of an interactive volume renderer.
//!
//! The crate owns everything between "the GUI changed a parameter" and
//! "the frame is on screen": transfer function editing and its lookup
//! texture, SSAO kernel generation, the fixed multi-pass pipeline and the
//! GPU resources it reads and writes. Window creation and input handling
//! belong to the embedding application, which hands over a current GL
//! context through [`gpu::gl::GlDevice`].

pub mod camera;
pub mod color;
pub mod config;
pub mod defaults;
pub mod error;
pub mod gpu;
pub mod lights;
pub mod params;
pub mod render;
pub mod renderer;
pub mod ssao;
pub mod test_helpers;
pub mod transfer_function;
pub mod volume;

pub use camera::Camera;
pub use config::RendererConfig;
pub use error::{GpuError, ShaderLoadingError, StorageError, VolumeLoadingError};
pub use params::{DebugView, DisplayProperties, GuiParameters, GuiUpdateFlags};
pub use renderer::{FrameState, Renderer};
pub use transfer_function::{ControlPoint, TransferFunction};
