//! Writes generated samples as a raw file, x fastest, z slowest

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use byteorder::{LittleEndian, WriteBytesExt};
use indicatif::{ProgressBar, ProgressStyle};
use nalgebra::{vector, Vector3};
use rayon::prelude::*;

use crate::generators::SampleGenerator;

/// Slices generated in parallel before they are written
const SLICE_BATCH: u32 = 16;

/// One z slice, samples in little endian
pub fn generate_slice(
    generator: &dyn SampleGenerator,
    dims: Vector3<u32>,
    z: u32,
    bits: u32,
) -> Vec<u8> {
    let bytes_per_sample = (bits / 8) as usize;
    let mut out = Vec::with_capacity(dims.x as usize * dims.y as usize * bytes_per_sample);
    for y in 0..dims.y {
        for x in 0..dims.x {
            let sample = generator.sample_at(vector![x, y, z]);
            if bits == 16 {
                // writing to a Vec cannot fail
                let _ = out.write_u16::<LittleEndian>(sample);
            } else {
                out.push(sample as u8);
            }
        }
    }
    out
}

pub fn write_volume<P>(
    path: P,
    generator: &dyn SampleGenerator,
    dims: Vector3<u32>,
    bits: u32,
) -> Result<(), std::io::Error>
where
    P: AsRef<Path>,
{
    let mut file = BufWriter::new(File::create(path)?);

    let progress = ProgressBar::new(dims.z as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{bar:40} {pos}/{len} slices, eta {eta}"),
    );

    let mut z = 0;
    while z < dims.z {
        let end = (z + SLICE_BATCH).min(dims.z);
        let slices: Vec<Vec<u8>> = (z..end)
            .into_par_iter()
            .map(|z| generate_slice(generator, dims, z, bits))
            .collect();
        for slice in slices {
            file.write_all(&slice)?;
        }
        progress.inc((end - z) as u64);
        z = end;
    }
    file.flush()?;

    progress.finish_and_clear();
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    struct Index;

    impl SampleGenerator for Index {
        fn sample_at(&self, coords: Vector3<u32>) -> u16 {
            (coords.x + 10 * coords.y + 100 * coords.z) as u16
        }
    }

    #[test]
    fn x_fastest() {
        let slice = generate_slice(&Index, vector![3, 2, 1], 0, 8);
        assert_eq!(slice, vec![0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn sixteen_bit_little_endian() {
        let slice = generate_slice(&Index, vector![1, 1, 4], 3, 16);
        assert_eq!(slice, vec![44, 1]);
    }

    #[test]
    fn whole_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("vol_gen_whole_file_{}.raw", std::process::id()));

        write_volume(&path, &Index, vector![2, 2, 20], 8).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 80);
        assert_eq!(bytes[4], 100);
        assert_eq!(bytes[79], (1 + 10 + 1900) as u16 as u8);
        let _ = std::fs::remove_file(&path);
    }
}
