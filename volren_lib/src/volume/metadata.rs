use nalgebra::{vector, Vector3};

/// Layout of a raw voxel file
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeMetadata {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    /// Channels per voxel
    pub components: u32,
    pub bits_per_component: u32,
    /// Shape of voxels
    pub scale: Vector3<f32>,
}

impl Default for VolumeMetadata {
    fn default() -> Self {
        VolumeMetadata {
            width: 0,
            height: 0,
            depth: 0,
            components: 1,
            bits_per_component: 8,
            scale: vector![1.0, 1.0, 1.0],
        }
    }
}

impl VolumeMetadata {
    /// Single 8 bit channel, unit voxels
    pub fn new(width: u32, height: u32, depth: u32) -> VolumeMetadata {
        VolumeMetadata {
            width,
            height,
            depth,
            ..Default::default()
        }
    }

    pub fn dims(&self) -> Vector3<usize> {
        vector![
            self.width as usize,
            self.height as usize,
            self.depth as usize
        ]
    }

    pub fn voxel_count(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    pub fn bytes_per_voxel(&self) -> usize {
        self.components as usize * (self.bits_per_component as usize / 8)
    }

    pub fn total_size_in_bytes(&self) -> usize {
        self.voxel_count() * self.bytes_per_voxel()
    }

    /// Non-empty and byte aligned
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.depth > 0
            && self.components > 0
            && self.bits_per_component > 0
            && self.bits_per_component % 8 == 0
    }

    /// Size of the volume in world units, longest side is 1
    pub fn normalized_extent(&self) -> Vector3<f32> {
        let extent = self.dims().cast::<f32>().component_mul(&self.scale);
        let longest = extent.max();
        if longest > 0.0 {
            extent / longest
        } else {
            extent
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sizes() {
        let mut meta = VolumeMetadata::new(4, 5, 6);
        assert_eq!(meta.voxel_count(), 120);
        assert_eq!(meta.bytes_per_voxel(), 1);
        assert_eq!(meta.total_size_in_bytes(), 120);

        meta.components = 2;
        meta.bits_per_component = 16;
        assert_eq!(meta.bytes_per_voxel(), 4);
        assert_eq!(meta.total_size_in_bytes(), 480);
    }

    #[test]
    fn validity() {
        assert!(VolumeMetadata::new(1, 1, 1).is_valid());
        assert!(!VolumeMetadata::default().is_valid());

        let mut meta = VolumeMetadata::new(2, 2, 2);
        meta.bits_per_component = 12;
        assert!(!meta.is_valid());
        meta.bits_per_component = 0;
        assert!(!meta.is_valid());
    }

    #[test]
    fn extent() {
        let mut meta = VolumeMetadata::new(100, 50, 200);
        meta.scale = vector![1.0, 2.0, 0.5];
        let extent = meta.normalized_extent();
        assert!((extent.x - 1.0).abs() < f32::EPSILON);
        assert!((extent.y - 1.0).abs() < f32::EPSILON);
        assert!((extent.z - 1.0).abs() < f32::EPSILON);
    }
}
