//! Scalar voxel volumes stored as `.raw` with `.ini` metadata

mod data;
mod loader;
mod metadata;
mod parse;

pub use data::{DataSource, VolumeData};
pub use loader::{load_metadata, load_volume_raw, metadata_path, save_metadata};
pub use metadata::VolumeMetadata;
pub use parse::{metadata_to_ini, parse_metadata};
