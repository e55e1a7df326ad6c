use nalgebra::Vector3;

use super::SampleGenerator;

/// Smooth value noise.
///
/// Random values on a lattice with `feature_size` voxel spacing, trilinearly
/// interpolated in between.
pub struct NoiseGenerator {
    feature_size: f32,
    lattice_dims: Vector3<usize>,
    lattice: Vec<f32>,
    max_sample: u16,
}

impl NoiseGenerator {
    pub fn new(
        dims: Vector3<u32>,
        feature_size: u32,
        max_sample: u16,
        seed: Option<u64>,
    ) -> NoiseGenerator {
        let rng = fastrand::Rng::new();
        if let Some(seed) = seed {
            rng.seed(seed);
        }

        // one extra lattice point so the last cell can interpolate
        let lattice_dims = dims.map(|d| (d / feature_size) as usize + 2);
        let lattice = (0..lattice_dims.product()).map(|_| rng.f32()).collect();

        NoiseGenerator {
            feature_size: feature_size as f32,
            lattice_dims,
            lattice,
            max_sample,
        }
    }

    fn lattice_at(&self, x: usize, y: usize, z: usize) -> f32 {
        let d = self.lattice_dims;
        self.lattice[(z * d.y + y) * d.x + x]
    }

    /// Noise value in `[0;1)`
    pub fn value_at(&self, coords: Vector3<u32>) -> f32 {
        let p = coords.cast::<f32>() / self.feature_size;
        let base = p.map(|v| v.floor());
        let t = p - base;
        let [x, y, z] = [base.x as usize, base.y as usize, base.z as usize];

        let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;
        let along_x = |y, z| lerp(self.lattice_at(x, y, z), self.lattice_at(x + 1, y, z), t.x);
        let along_y = |z| lerp(along_x(y, z), along_x(y + 1, z), t.y);
        lerp(along_y(z), along_y(z + 1), t.z)
    }
}

impl SampleGenerator for NoiseGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u16 {
        (self.value_at(coords) * self.max_sample as f32) as u16
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn lattice_points_are_exact() {
        let gen = NoiseGenerator::new(vector![16, 16, 16], 4, 255, Some(5));
        assert_eq!(gen.value_at(vector![4, 8, 0]), gen.lattice_at(1, 2, 0));
        assert_eq!(gen.value_at(vector![16, 16, 16]), gen.lattice_at(4, 4, 4));
    }

    #[test]
    fn values_in_range() {
        let gen = NoiseGenerator::new(vector![10, 7, 5], 3, 255, Some(1));
        for z in 0..5 {
            for y in 0..7 {
                for x in 0..10 {
                    let v = gen.value_at(vector![x, y, z]);
                    assert!((0.0..1.0).contains(&v));
                }
            }
        }
    }

    #[test]
    fn neighbours_are_close() {
        let gen = NoiseGenerator::new(vector![64, 64, 64], 16, u16::MAX, Some(2));
        let a = gen.value_at(vector![20, 20, 20]);
        let b = gen.value_at(vector![21, 20, 20]);
        assert!((a - b).abs() <= 1.0 / 16.0);
    }
}
