use std::ops::RangeInclusive;

use nalgebra::{vector, Vector3};

use super::SampleGenerator;

const SIZE_VARIANCE: u32 = 10;
const SAMPLE_VARIANCE: u16 = 10;

/// Generate volume with a number of randomly placed shapes
pub struct ShapesGenerator {
    shapes: Vec<ShapeInfo>,
}

impl ShapesGenerator {
    pub fn new(
        dims: Vector3<u32>,
        n_of_shapes: usize,
        sample: u16,
        obj_size: u32,
        max_sample: u16,
        seed: Option<u64>,
    ) -> ShapesGenerator {
        let size = vector![obj_size, obj_size, obj_size];
        let variance = Vector3::repeat(SIZE_VARIANCE.min(obj_size - 1));
        let random_shape_gen =
            ShapeInfoGenerator::new(dims, size, variance, sample, max_sample, seed);
        let shapes = random_shape_gen.get_shapes(n_of_shapes);
        ShapesGenerator { shapes }
    }
}

impl SampleGenerator for ShapesGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u16 {
        self.shapes
            .iter()
            .filter(|shape| shape.contains(coords))
            .map(|shape| shape.render_at(coords - shape.position_low))
            .find(|&sample| sample != 0)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Cuboid,
    Sphere,
}

/// One shape in volume
#[derive(Debug)]
pub struct ShapeInfo {
    pub position_low: Vector3<u32>,
    /// Exclusive
    pub position_high: Vector3<u32>,
    pub shape_type: ShapeType,
    pub sample: u16,
}

impl ShapeInfo {
    fn contains(&self, coords: Vector3<u32>) -> bool {
        (0..3).all(|i| coords[i] >= self.position_low[i] && coords[i] < self.position_high[i])
    }

    fn render_at(&self, offset: Vector3<u32>) -> u16 {
        match self.shape_type {
            ShapeType::Cuboid => self.sample,
            ShapeType::Sphere => self.render_sphere(offset),
        }
    }

    fn render_sphere(&self, offset: Vector3<u32>) -> u16 {
        let size = (self.position_high - self.position_low).cast::<f32>();
        let center = size / 2.0;
        let r = size.min() / 2.0;
        let voxel_center = offset.cast::<f32>().add_scalar(0.5);

        if (voxel_center - center).magnitude() <= r {
            self.sample
        } else {
            0
        }
    }
}

/// Generate shapes
/// Helper type
pub struct ShapeInfoGenerator {
    rng: fastrand::Rng,
    vol_dims: Vector3<u32>,
    size: Vector3<u32>,
    size_variance: Vector3<u32>,
    sample: u16,
    max_sample: u16,
}

impl ShapeInfoGenerator {
    pub fn new(
        vol_dims: Vector3<u32>,
        size: Vector3<u32>,
        size_variance: Vector3<u32>,
        sample: u16,
        max_sample: u16,
        seed: Option<u64>,
    ) -> Self {
        let rng = fastrand::Rng::new();
        if let Some(seed) = seed {
            rng.seed(seed);
        }

        Self {
            rng,
            vol_dims,
            size,
            size_variance,
            sample,
            max_sample,
        }
    }

    fn random_shape(&self) -> ShapeType {
        if self.rng.bool() {
            ShapeType::Cuboid
        } else {
            ShapeType::Sphere
        }
    }

    fn random_vector(&self, ranges: [RangeInclusive<u32>; 3]) -> Vector3<u32> {
        let [x, y, z] = ranges;
        vector![self.rng.u32(x), self.rng.u32(y), self.rng.u32(z)]
    }

    pub fn get_shapes(&self, n: usize) -> Vec<ShapeInfo> {
        (0..n).map(|_| self.get_shape()).collect()
    }

    pub fn get_shape(&self) -> ShapeInfo {
        let shape_type = self.random_shape();

        // sizes never exceed the volume
        let size_range = |i: usize| {
            let low = self.size[i].saturating_sub(self.size_variance[i]).min(self.vol_dims[i]).max(1);
            let high = (self.size[i] + self.size_variance[i]).min(self.vol_dims[i]).max(low);
            low..=high
        };
        let size = self.random_vector([size_range(0), size_range(1), size_range(2)]);

        // spawn shape in positions it fits
        let pos_range = |i: usize| 0..=(self.vol_dims[i] - size[i]);
        let position_low = self.random_vector([pos_range(0), pos_range(1), pos_range(2)]);

        ShapeInfo {
            position_low,
            position_high: position_low + size,
            shape_type,
            sample: self.random_sample(),
        }
    }

    fn random_sample(&self) -> u16 {
        let low = self.sample.saturating_sub(SAMPLE_VARIANCE).max(1);
        let high = self
            .sample
            .saturating_add(SAMPLE_VARIANCE)
            .min(self.max_sample)
            .max(low);
        self.rng.u16(low..=high)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shapes_fit_volume() {
        let dims = vector![30, 40, 50];
        let gen = ShapeInfoGenerator::new(
            dims,
            vector![20, 20, 20],
            vector![10, 10, 10],
            250,
            255,
            Some(3),
        );
        for shape in gen.get_shapes(100) {
            for i in 0..3 {
                assert!(shape.position_high[i] <= dims[i]);
                assert!(shape.position_low[i] < shape.position_high[i]);
            }
            assert!(shape.sample >= 240 && shape.sample <= 255);
        }
    }

    #[test]
    fn cuboid_fills_its_box() {
        let shape = ShapeInfo {
            position_low: vector![2, 2, 2],
            position_high: vector![4, 4, 4],
            shape_type: ShapeType::Cuboid,
            sample: 9,
        };
        let gen = ShapesGenerator {
            shapes: vec![shape],
        };
        assert_eq!(gen.sample_at(vector![2, 2, 2]), 9);
        assert_eq!(gen.sample_at(vector![3, 3, 3]), 9);
        assert_eq!(gen.sample_at(vector![4, 3, 3]), 0);
        assert_eq!(gen.sample_at(vector![1, 3, 3]), 0);
    }

    #[test]
    fn sphere_leaves_corners_empty() {
        let shape = ShapeInfo {
            position_low: vector![0, 0, 0],
            position_high: vector![10, 10, 10],
            shape_type: ShapeType::Sphere,
            sample: 5,
        };
        assert_eq!(shape.render_at(vector![5, 5, 5]), 5);
        assert_eq!(shape.render_at(vector![0, 0, 0]), 0);
        assert_eq!(shape.render_at(vector![9, 9, 9]), 0);
    }

    #[test]
    fn seeded_shapes_repeat() {
        let a = ShapesGenerator::new(vector![50, 50, 50], 5, 100, 10, 255, Some(11));
        let b = ShapesGenerator::new(vector![50, 50, 50], 5, 100, 10, 255, Some(11));
        let pos_a: Vec<_> = a.shapes.iter().map(|s| s.position_low).collect();
        let pos_b: Vec<_> = b.shapes.iter().map(|s| s.position_low).collect();
        assert_eq!(pos_a, pos_b);
    }
}
