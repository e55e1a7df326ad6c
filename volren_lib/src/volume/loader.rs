use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::error::VolumeLoadingError;

use super::{metadata_to_ini, parse_metadata, DataSource, VolumeData, VolumeMetadata};

/// Metadata of `volume.raw` lives in `volume.ini`
pub fn metadata_path(raw_path: &Path) -> PathBuf {
    raw_path.with_extension("ini")
}

pub fn load_metadata<P>(path: P) -> Result<VolumeMetadata, VolumeLoadingError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.is_file() {
        return Err(VolumeLoadingError::MetadataFileNotFound(path.to_owned()));
    }
    let text = fs::read_to_string(path).map_err(|source| {
        VolumeLoadingError::CannotOpenMetadataFile {
            path: path.to_owned(),
            source,
        }
    })?;
    parse_metadata(&text)
}

/// Load a `.raw` voxel file together with its `.ini` metadata.
/// The raw file is memory mapped.
pub fn load_volume_raw<P>(raw_path: P) -> Result<VolumeData, VolumeLoadingError>
where
    P: AsRef<Path>,
{
    let raw_path = raw_path.as_ref();
    let metadata = load_metadata(metadata_path(raw_path))?;

    if !raw_path.is_file() {
        return Err(VolumeLoadingError::RawFileNotFound(raw_path.to_owned()));
    }

    let expected = metadata.total_size_in_bytes();
    let actual = fs::metadata(raw_path)
        .map_err(VolumeLoadingError::ReadError)?
        .len() as usize;
    if actual != expected {
        return Err(VolumeLoadingError::FileSizeMismatch { expected, actual });
    }

    let data = DataSource::from_file(raw_path)?;
    info!(
        "Loaded {} | {}x{}x{} | {} component(s), {} bit",
        raw_path.display(),
        metadata.width,
        metadata.height,
        metadata.depth,
        metadata.components,
        metadata.bits_per_component
    );
    VolumeData::new(metadata, data)
}

/// Write metadata next to `raw_path`
pub fn save_metadata<P>(raw_path: P, metadata: &VolumeMetadata) -> Result<(), std::io::Error>
where
    P: AsRef<Path>,
{
    fs::write(metadata_path(raw_path.as_ref()), metadata_to_ini(metadata))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ini_next_to_raw() {
        let path = metadata_path(Path::new("datasets/knee.raw"));
        assert_eq!(path, PathBuf::from("datasets/knee.ini"));
    }
}
