use std::path::{Path, PathBuf};

use crate::defaults;

/// Startup configuration of the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Framebuffer size in pixels
    pub resolution: (u32, u32),
    /// Directory with `<Name>.vert` and `<Name>.frag` files
    pub shader_dir: PathBuf,
    /// `.raw` file, metadata is read from the `.ini` next to it
    pub dataset: PathBuf,
    /// Side of the square shadow map
    pub shadow_map_size: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        RendererConfig {
            resolution: (defaults::WINDOW_WIDTH, defaults::WINDOW_HEIGHT),
            shader_dir: PathBuf::from(defaults::SHADER_DIR),
            dataset: PathBuf::from(defaults::DATASET_PATH),
            shadow_map_size: defaults::SHADOW_MAP_SIZE,
        }
    }
}

impl RendererConfig {
    pub fn builder() -> RendererConfigBuilder {
        RendererConfigBuilder::default()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.resolution.0 as f32 / self.resolution.1.max(1) as f32
    }
}

#[derive(Default)]
pub struct RendererConfigBuilder {
    resolution: Option<(u32, u32)>,
    shader_dir: Option<PathBuf>,
    dataset: Option<PathBuf>,
    shadow_map_size: Option<u32>,
}

impl RendererConfigBuilder {
    pub fn resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution = Some((width, height));
        self
    }

    pub fn shader_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.shader_dir = Some(dir.as_ref().to_owned());
        self
    }

    pub fn dataset<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dataset = Some(path.as_ref().to_owned());
        self
    }

    pub fn shadow_map_size(mut self, side: u32) -> Self {
        self.shadow_map_size = Some(side);
        self
    }

    /// Fill missing values with defaults, checks nothing
    pub fn build_unchecked(self) -> RendererConfig {
        let default = RendererConfig::default();
        RendererConfig {
            resolution: self.resolution.unwrap_or(default.resolution),
            shader_dir: self.shader_dir.unwrap_or(default.shader_dir),
            dataset: self.dataset.unwrap_or(default.dataset),
            shadow_map_size: self.shadow_map_size.unwrap_or(default.shadow_map_size),
        }
    }

    pub fn build(self) -> Result<RendererConfig, &'static str> {
        let config = self.build_unchecked();
        if config.resolution.0 == 0 || config.resolution.1 == 0 {
            return Err("Resolution must be non-zero");
        }
        if config.shadow_map_size == 0 {
            return Err("Shadow map size must be non-zero");
        }
        Ok(config)
    }
}
