use config::Config;

mod args;
mod config;
mod generators;
mod writer;

use crate::{args::get_command, generators::get_sample_generator, writer::write_volume};

/// Writes the raw samples and the `.ini` metadata next to them
fn generate(cfg: &Config) -> Result<(), String> {
    let generator = get_sample_generator(cfg);
    write_volume(&cfg.file_name, generator.as_ref(), cfg.dims, cfg.bits)
        .map_err(|e| format!("writing {}: {e}", cfg.file_name.display()))?;
    volren_lib::volume::save_metadata(&cfg.file_name, &cfg.metadata())
        .map_err(|e| format!("writing metadata: {e}"))
}

pub fn main() {
    let args = get_command().get_matches();

    let cfg = match Config::from_args(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("Generating volume...");
    println!("{:?}", cfg);

    if let Err(e) = generate(&cfg) {
        eprintln!("Error {e}");
        std::process::exit(1);
    }

    println!("Generating finished, result in {}", cfg.file_name.display());
}

#[cfg(test)]
mod test {
    use super::*;
    use volren_lib::volume::load_volume_raw;

    fn config_for(args: &[&str]) -> Config {
        let matches = get_command().try_get_matches_from(args).unwrap();
        Config::from_args(matches).unwrap()
    }

    #[test]
    fn output_loads_as_volume() {
        let mut path = std::env::temp_dir();
        path.push(format!("vol_gen_solid_{}.raw", std::process::id()));
        let path_arg = path.to_string_lossy().into_owned();

        let cfg = config_for(&[
            "vol_gen",
            "--dims=12,14,16",
            "--shape=1,1,2",
            "-g",
            "solid",
            "--sample",
            "1000",
            "--bits",
            "16",
            "-o",
            &path_arg,
        ]);
        generate(&cfg).unwrap();

        let volume = load_volume_raw(&path).unwrap();
        let meta = &volume.metadata;
        assert_eq!((meta.width, meta.height, meta.depth), (12, 14, 16));
        assert_eq!(meta.bits_per_component, 16);
        assert_eq!(meta.scale.z, 2.0);
        assert_eq!(volume.bytes().len(), 12 * 14 * 16 * 2);

        assert_eq!(volume.voxel16(6, 7, 8), 1000);
        assert_eq!(volume.voxel16(0, 0, 0), 0);
        assert_eq!(volume.voxel16(11, 13, 15), 0);

        let _ = std::fs::remove_file(volren_lib::volume::metadata_path(&path));
        let _ = std::fs::remove_file(&path);
    }
}
