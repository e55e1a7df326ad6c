use nalgebra::{vector, Vector3};

use super::SampleGenerator;

const PAD: u32 = 5;

/// Generate solid volume
/// All samples are the same, except for an empty border
pub struct SolidGenerator {
    sample: u16,
    pad: u32,
    dims: Vector3<u32>,
}

impl SolidGenerator {
    pub fn new(dims: Vector3<u32>, sample: u16) -> SolidGenerator {
        SolidGenerator {
            sample,
            pad: PAD,
            dims,
        }
    }
}

impl SampleGenerator for SolidGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u16 {
        let pad = vector![self.pad, self.pad, self.pad];
        let inside_low = coords.iter().zip(pad.iter()).all(|(c, p)| c >= p);
        let inside_high = coords
            .iter()
            .zip(self.dims.iter())
            .all(|(&c, &d)| c + self.pad < d);
        if inside_low && inside_high {
            self.sample
        } else {
            0
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn border_is_empty() {
        let gen = SolidGenerator::new(vector![20, 20, 20], 100);
        assert_eq!(gen.sample_at(vector![0, 10, 10]), 0);
        assert_eq!(gen.sample_at(vector![4, 10, 10]), 0);
        assert_eq!(gen.sample_at(vector![5, 5, 5]), 100);
        assert_eq!(gen.sample_at(vector![14, 14, 14]), 100);
        assert_eq!(gen.sample_at(vector![15, 10, 10]), 0);
    }

    #[test]
    fn small_volume_is_empty() {
        let gen = SolidGenerator::new(vector![8, 8, 8], 100);
        assert_eq!(gen.sample_at(vector![5, 5, 5]), 0);
    }
}
