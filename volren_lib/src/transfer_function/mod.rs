//! Transfer function: scalar value -> RGBA
//!
//! Edited as a handful of control points, sampled by the shaders through a
//! 1D lookup texture.

mod control_point;
mod function;
mod interpolate;
mod table;
mod updater;

pub use control_point::ControlPoint;
pub use function::TransferFunction;
pub use interpolate::{catmull_rom, interpolate};
pub use table::TransferFunctionTable;
pub use updater::TransferFunctionTextureUpdater;
