//! Screen space ambient occlusion inputs

mod kernel;
mod updater;

pub use kernel::SsaoKernel;
pub use updater::SsaoUpdater;
