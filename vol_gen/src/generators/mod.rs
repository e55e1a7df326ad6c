use nalgebra::Vector3;

use crate::config::{Config, GeneratorConfig};

mod noise;
mod shapes;
mod solid;

pub use noise::NoiseGenerator;
pub use shapes::ShapesGenerator;
pub use solid::SolidGenerator;

/// Generates one sample at a time, at any location
pub trait SampleGenerator: Sync {
    fn sample_at(&self, coords: Vector3<u32>) -> u16;
}

pub fn get_sample_generator(config: &Config) -> Box<dyn SampleGenerator> {
    match config.generator {
        GeneratorConfig::Shapes {
            n_of_shapes,
            sample,
            obj_size,
        } => Box::new(ShapesGenerator::new(
            config.dims,
            n_of_shapes,
            sample,
            obj_size,
            config.max_sample(),
            config.seed,
        )),
        GeneratorConfig::Noise { feature_size } => Box::new(NoiseGenerator::new(
            config.dims,
            feature_size,
            config.max_sample(),
            config.seed,
        )),
        GeneratorConfig::Solid { sample } => Box::new(SolidGenerator::new(config.dims, sample)),
    }
}
