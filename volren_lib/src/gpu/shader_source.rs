use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::ShaderLoadingError;

use super::ShaderId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn extension(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
        }
    }
}

impl ShaderId {
    /// File name without extension
    pub fn base_name(self) -> &'static str {
        match self {
            ShaderId::Shadow => "Shadow",
            ShaderId::Volume => "Volume",
            ShaderId::Ssao => "Ssao",
            ShaderId::SsaoBlur => "SsaoBlur",
            ShaderId::SsaoFinal => "SsaoFinal",
            ShaderId::LightSource => "LightSource",
            ShaderId::DebugQuad => "DebugQuad",
        }
    }
}

pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

pub fn shader_path(dir: &Path, shader: ShaderId, stage: ShaderStage) -> PathBuf {
    dir.join(format!("{}.{}", shader.base_name(), stage.extension()))
}

fn read_stage(dir: &Path, shader: ShaderId, stage: ShaderStage) -> Result<String, ShaderLoadingError> {
    let path = shader_path(dir, shader, stage);
    fs::read_to_string(&path).map_err(|source| ShaderLoadingError::FileOpenFailed { path, source })
}

/// Read both stages of `shader` from `dir`
pub fn load_shader_source(dir: &Path, shader: ShaderId) -> Result<ShaderSource, ShaderLoadingError> {
    Ok(ShaderSource {
        vertex: read_stage(dir, shader, ShaderStage::Vertex)?,
        fragment: read_stage(dir, shader, ShaderStage::Fragment)?,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gpu::ElementId;

    fn shipped_shaders() -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("shaders");
        path
    }

    #[test]
    fn paths() {
        let path = shader_path(Path::new("shaders"), ShaderId::SsaoBlur, ShaderStage::Fragment);
        assert_eq!(path, PathBuf::from("shaders/SsaoBlur.frag"));
    }

    #[test]
    fn every_shader_ships() {
        let dir = shipped_shaders();
        for &id in ShaderId::ALL {
            let source = load_shader_source(&dir, id).unwrap();
            assert!(source.vertex.starts_with("#version"));
            assert!(source.fragment.starts_with("#version"));
        }
    }

    #[test]
    fn missing_dir() {
        let res = load_shader_source(Path::new("no/such/dir"), ShaderId::Volume);
        assert!(matches!(res, Err(ShaderLoadingError::FileOpenFailed { .. })));
    }
}
