//! Multi pass rendering of one frame

mod pass;
mod pipeline;
pub mod stages;
pub mod uniforms;

pub use pass::{PassStage, RenderPass};
pub use pipeline::{FrameContext, Pipeline};
