use std::{fs::File, path::Path};

use memmap::{Mmap, MmapOptions};

use crate::error::VolumeLoadingError;

use super::VolumeMetadata;

/// Voxel bytes, owned or mapped from a file
pub enum DataSource {
    Vec(Vec<u8>),
    Mmap(Mmap),
}

impl DataSource {
    pub fn get_slice(&self) -> &[u8] {
        match self {
            DataSource::Vec(v) => v.as_slice(),
            DataSource::Mmap(m) => &m[..],
        }
    }

    pub fn len(&self) -> usize {
        self.get_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn from_file<P>(path: P) -> Result<DataSource, VolumeLoadingError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| VolumeLoadingError::CannotOpenRawFile {
            path: path.to_owned(),
            source,
        })?;

        let mmap = unsafe { MmapOptions::new().map(&file) };
        let mmap = mmap.map_err(VolumeLoadingError::ReadError)?;
        Ok(DataSource::Mmap(mmap))
    }
}

/// Voxels with their layout.
///
/// Voxels are stored x fastest, then y, then z.
pub struct VolumeData {
    pub metadata: VolumeMetadata,
    data: DataSource,
}

impl VolumeData {
    pub fn new(metadata: VolumeMetadata, data: DataSource) -> Result<VolumeData, VolumeLoadingError> {
        if !metadata.is_valid() {
            return Err(VolumeLoadingError::InvalidMetadata);
        }
        if data.len() != metadata.total_size_in_bytes() {
            return Err(VolumeLoadingError::InvalidVolumeData);
        }
        Ok(VolumeData { metadata, data })
    }

    pub fn from_vec(metadata: VolumeMetadata, data: Vec<u8>) -> Result<VolumeData, VolumeLoadingError> {
        VolumeData::new(metadata, DataSource::Vec(data))
    }

    pub fn bytes(&self) -> &[u8] {
        self.data.get_slice()
    }

    pub fn is_in_bounds(&self, x: u32, y: u32, z: u32) -> bool {
        x < self.metadata.width && y < self.metadata.height && z < self.metadata.depth
    }

    fn byte_index(&self, x: u32, y: u32, z: u32) -> usize {
        let (w, h) = (self.metadata.width as usize, self.metadata.height as usize);
        let voxel = z as usize * h * w + y as usize * w + x as usize;
        voxel * self.metadata.bytes_per_voxel()
    }

    fn is_scalar(&self, bits: u32) -> bool {
        self.metadata.components == 1 && self.metadata.bits_per_component == bits
    }

    /// Value of a single channel 8 bit voxel
    /// 0 when out of bounds or the volume has other format
    pub fn voxel8(&self, x: u32, y: u32, z: u32) -> u8 {
        if !self.is_in_bounds(x, y, z) || !self.is_scalar(8) {
            return 0;
        }
        self.bytes()[self.byte_index(x, y, z)]
    }

    /// Value of a single channel 16 bit voxel, little endian
    /// 0 when out of bounds or the volume has other format
    pub fn voxel16(&self, x: u32, y: u32, z: u32) -> u16 {
        if !self.is_in_bounds(x, y, z) || !self.is_scalar(16) {
            return 0;
        }
        let i = self.byte_index(x, y, z);
        let bytes = self.bytes();
        u16::from_le_bytes([bytes[i], bytes[i + 1]])
    }

    /// Mutable bytes, `None` for mapped data
    fn bytes_mut(&mut self) -> Option<&mut [u8]> {
        match &mut self.data {
            DataSource::Vec(v) => Some(v.as_mut_slice()),
            DataSource::Mmap(_) => None,
        }
    }

    pub fn set_voxel8(&mut self, x: u32, y: u32, z: u32, value: u8) -> bool {
        if !self.is_in_bounds(x, y, z) || !self.is_scalar(8) {
            return false;
        }
        let i = self.byte_index(x, y, z);
        match self.bytes_mut() {
            Some(bytes) => {
                bytes[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn set_voxel16(&mut self, x: u32, y: u32, z: u32, value: u16) -> bool {
        if !self.is_in_bounds(x, y, z) || !self.is_scalar(16) {
            return false;
        }
        let i = self.byte_index(x, y, z);
        match self.bytes_mut() {
            Some(bytes) => {
                bytes[i..i + 2].copy_from_slice(&value.to_le_bytes());
                true
            }
            None => false,
        }
    }
}
