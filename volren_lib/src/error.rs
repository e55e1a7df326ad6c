use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VolumeLoadingError {
    #[error("raw file not found: {0}")]
    RawFileNotFound(PathBuf),
    #[error("cannot open raw file {path}")]
    CannotOpenRawFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("raw file has {actual} bytes, metadata describes {expected}")]
    FileSizeMismatch { expected: usize, actual: usize },
    #[error("error reading volume data")]
    ReadError(#[source] io::Error),
    #[error("metadata file not found: {0}")]
    MetadataFileNotFound(PathBuf),
    #[error("cannot open metadata file {path}")]
    CannotOpenMetadataFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse metadata, line {line}: {reason}")]
    MetadataParseError { line: usize, reason: String },
    #[error("metadata describes an empty or unaligned volume")]
    InvalidMetadata,
    #[error("volume data does not match its metadata")]
    InvalidVolumeData,
}

#[derive(Error, Debug)]
pub enum ShaderLoadingError {
    #[error("cannot read shader source {path}")]
    FileOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    #[error("no element registered for {0}")]
    Missing(&'static str),
    #[error("element {0} registered more than once")]
    Duplicate(&'static str),
}

#[derive(Error, Debug)]
pub enum GpuError {
    #[error("cannot create {object}: {message}")]
    ObjectCreation {
        object: &'static str,
        message: String,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Shader(#[from] ShaderLoadingError),
    #[error(transparent)]
    Volume(#[from] VolumeLoadingError),
}

impl GpuError {
    pub(crate) fn creation(object: &'static str, message: String) -> GpuError {
        GpuError::ObjectCreation { object, message }
    }
}
