use std::{path::PathBuf, str::FromStr};

use clap::ArgMatches;
use nalgebra::{vector, Vector3};
use volren_lib::volume::VolumeMetadata;

/// Transform `Values` into `Vector`
fn values_to_vector3<T>(args: &ArgMatches, key: &str) -> Result<Vector3<T>, String>
where
    T: FromStr + Copy,
{
    let vals = args
        .values_of(key)
        .ok_or(format!("missing {}", key))?
        .map(|v| v.parse::<T>().map_err(|_| format!("bad value {} of {}", v, key)))
        .collect::<Result<Vec<T>, String>>()?;
    match vals[..] {
        [x, y, z] => Ok(vector![x, y, z]),
        _ => Err(format!("{} needs 3 values", key)),
    }
}

fn parse_value<T: FromStr>(args: &ArgMatches, key: &str) -> Result<T, String> {
    let value = args.value_of(key).ok_or(format!("missing {}", key))?;
    value
        .parse()
        .map_err(|_| format!("bad value {} of {}", value, key))
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct Config {
    /// Dimensions of volume
    pub dims: Vector3<u32>,
    /// Shape of cells
    pub cell_shape: Vector3<f32>,
    /// Type of generator to be used
    pub generator: GeneratorConfig,
    /// 8 or 16
    pub bits: u32,
    /// Raw output, metadata is written next to it
    pub file_name: PathBuf,
    /// Optional seed for RNG, to replicate results
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_args(args: ArgMatches) -> Result<Config, String> {
        let dims = values_to_vector3(&args, "dims")?;
        let cell_shape = values_to_vector3(&args, "shape")?;
        let bits = parse_value(&args, "bits")?;
        let generator = GeneratorConfig::from_args(&args)?;

        if let GeneratorConfig::Shapes { sample, .. } | GeneratorConfig::Solid { sample } =
            generator
        {
            if bits == 8 && sample > u8::MAX as u16 {
                return Err(format!("sample {} does not fit 8 bits", sample));
            }
        }

        let file_name = args
            .value_of_os("output-file")
            .ok_or("missing output-file")?
            .into();
        let seed = match args.value_of("seed") {
            Some(_) => Some(parse_value(&args, "seed")?),
            None => None,
        };

        Ok(Config {
            dims,
            cell_shape,
            generator,
            bits,
            file_name,
            seed,
        })
    }

    /// Largest sample the output can hold
    pub fn max_sample(&self) -> u16 {
        if self.bits == 16 {
            u16::MAX
        } else {
            u8::MAX as u16
        }
    }

    pub fn metadata(&self) -> VolumeMetadata {
        VolumeMetadata {
            width: self.dims.x,
            height: self.dims.y,
            depth: self.dims.z,
            components: 1,
            bits_per_component: self.bits,
            scale: self.cell_shape,
        }
    }
}

/// Settings specific to generator variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorConfig {
    /// Randomly placed cuboids and spheres
    Shapes {
        n_of_shapes: usize,
        sample: u16,
        obj_size: u32,
    },
    /// Smooth value noise over the whole range
    Noise { feature_size: u32 },
    /// Solid block with empty border
    Solid { sample: u16 },
}

impl GeneratorConfig {
    pub fn from_args(args: &ArgMatches) -> Result<GeneratorConfig, String> {
        let name = args.value_of("generator").ok_or("missing generator")?;

        let config = match name {
            "shapes" => GeneratorConfig::Shapes {
                n_of_shapes: parse_value(args, "n-of-shapes")?,
                sample: parse_value(args, "sample")?,
                obj_size: parse_value(args, "object-size")?,
            },
            "noise" => GeneratorConfig::Noise {
                feature_size: parse_value(args, "object-size")?,
            },
            "solid" => GeneratorConfig::Solid {
                sample: parse_value(args, "sample")?,
            },
            _ => return Err(format!("unknown generator {}", name)),
        };
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::args::get_command;

    fn config(args: &[&str]) -> Result<Config, String> {
        let matches = get_command()
            .try_get_matches_from(args)
            .map_err(|e| e.to_string())?;
        Config::from_args(matches)
    }

    #[test]
    fn solid() {
        let cfg = config(&["vol_gen", "--dims=10,20,30", "-g", "solid", "--sample", "200"]).unwrap();
        assert_eq!(cfg.dims, vector![10, 20, 30]);
        assert_eq!(cfg.generator, GeneratorConfig::Solid { sample: 200 });
        assert_eq!(cfg.bits, 8);
        assert_eq!(cfg.file_name, PathBuf::from("a.raw"));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn sixteen_bit_sample() {
        let args = ["vol_gen", "--dims=4,4,4", "-g", "solid", "--sample", "1000"];
        assert!(config(&args).is_err());

        let args = [
            "vol_gen", "--dims=4,4,4", "-g", "solid", "--sample", "1000", "--bits", "16",
        ];
        let cfg = config(&args).unwrap();
        assert_eq!(cfg.max_sample(), u16::MAX);
        assert_eq!(cfg.metadata().bits_per_component, 16);
    }

    #[test]
    fn shapes_need_count() {
        let args = ["vol_gen", "--dims=4,4,4", "-g", "shapes", "--sample", "10"];
        assert!(config(&args).is_err());
    }

    #[test]
    fn metadata_from_args() {
        let args = [
            "vol_gen",
            "--dims=8,8,4",
            "--shape=1,1,2.5",
            "-g",
            "noise",
            "--object-size",
            "4",
            "--seed",
            "7",
            "-o",
            "out/noise.raw",
        ];
        let cfg = config(&args).unwrap();
        let meta = cfg.metadata();
        assert_eq!((meta.width, meta.height, meta.depth), (8, 8, 4));
        assert_eq!(meta.scale.z, 2.5);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.file_name, PathBuf::from("out/noise.raw"));
    }
}
