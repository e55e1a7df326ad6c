use std::sync::Arc;

use glow::HasContext;
use log::{debug, error, info};

use crate::{
    config::RendererConfig,
    error::GpuError,
    gpu::{
        shader_source::load_shader_source, ClearMask, ElementId, ElementStorage, FrameBufferId,
        Mesh, RenderDevice, ShaderId, TextureId, TextureSize, TextureSpec, Uniform,
    },
    volume::VolumeData,
};

use super::{
    convert,
    objects::{self, GlMesh, GlTexture},
};

/// [`RenderDevice`] over an OpenGL 4.3 context
pub struct GlDevice {
    gl: Arc<glow::Context>,
    textures: ElementStorage<TextureId, GlTexture>,
    shaders: ElementStorage<ShaderId, glow::Program>,
    /// `None` is the window framebuffer
    framebuffers: ElementStorage<FrameBufferId, Option<glow::Framebuffer>>,
    gbuffer_depth: glow::Renderbuffer,
    quad: GlMesh,
    cube: GlMesh,
    current_shader: Option<ShaderId>,
    resolution: (u32, u32),
}

impl GlDevice {
    /// Create every texture, framebuffer and program the pipeline uses
    /// and upload the volume.
    ///
    /// # Safety
    ///
    /// `gl` must be current on this thread for the lifetime of the device.
    pub unsafe fn new(
        gl: Arc<glow::Context>,
        config: &RendererConfig,
        volume: &VolumeData,
    ) -> Result<GlDevice, GpuError> {
        let (width, height) = config.resolution;
        let shadow = config.shadow_map_size;

        let textures = ElementStorage::try_from_fn(|id| {
            let (spec, size, data) = match id {
                TextureId::VolumeData => {
                    let meta = &volume.metadata;
                    let size = TextureSize::d3(meta.width, meta.height, meta.depth);
                    (TextureSpec::volume(meta), size, Some(volume.bytes()))
                }
                TextureId::TransferFunction => (
                    id.spec(),
                    TextureSize::d1(crate::defaults::TRANSFER_FUNCTION_TEXTURE_SIZE as u32),
                    None,
                ),
                TextureId::SsaoNoise => (id.spec(), TextureSize::d2(1, 1), None),
                TextureId::ShadowMap => (id.spec(), TextureSize::d2(shadow, shadow), None),
                _ => (id.spec(), TextureSize::d2(width, height), None),
            };
            objects::create_texture(&gl, spec, size, data)
        })?;
        info!(
            "Volume uploaded, {}x{}x{}",
            volume.metadata.width, volume.metadata.height, volume.metadata.depth
        );

        let gbuffer_depth = objects::create_depth_buffer(&gl)?;
        objects::resize_depth_buffer(&gl, gbuffer_depth, width, height);

        let framebuffers = ElementStorage::try_from_fn(|id| {
            let framebuffer = match id {
                FrameBufferId::Default => return Ok(None),
                FrameBufferId::Shadow => objects::create_framebuffer(
                    &gl,
                    id.name(),
                    &[],
                    Some(textures.get(TextureId::ShadowMap)),
                    None,
                ),
                FrameBufferId::GBuffer => {
                    let colors: Vec<&GlTexture> = TextureId::GBUFFER_ATTACHMENTS
                        .iter()
                        .map(|&t| textures.get(t))
                        .collect();
                    objects::create_framebuffer(&gl, id.name(), &colors, None, Some(gbuffer_depth))
                }
                FrameBufferId::Ssao => objects::create_framebuffer(
                    &gl,
                    id.name(),
                    &[textures.get(TextureId::Ssao)],
                    None,
                    None,
                ),
                FrameBufferId::SsaoBlur => objects::create_framebuffer(
                    &gl,
                    id.name(),
                    &[textures.get(TextureId::SsaoBlur)],
                    None,
                    None,
                ),
            };
            framebuffer.map(Some)
        })?;

        let shaders = ElementStorage::try_from_fn(|id| {
            let source = load_shader_source(&config.shader_dir, id)?;
            objects::create_program(&gl, id, &source)
        })?;
        info!("Shaders loaded from {}", config.shader_dir.display());

        let quad = objects::create_mesh(&gl, Mesh::ScreenQuad)?;
        let cube = objects::create_mesh(&gl, Mesh::UnitCube)?;

        gl.enable(glow::DEPTH_TEST);

        Ok(GlDevice {
            gl,
            textures,
            shaders,
            framebuffers,
            gbuffer_depth,
            quad,
            cube,
            current_shader: None,
            resolution: (width, height),
        })
    }

    pub fn resolution(&self) -> (u32, u32) {
        self.resolution
    }

    /// Reallocate window sized targets
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == self.resolution || width == 0 || height == 0 {
            return;
        }
        debug!("Resizing targets to {}x{}", width, height);

        let size = TextureSize::d2(width, height);
        unsafe {
            for &id in TextureId::ALL.iter().filter(|id| id.is_screen_sized()) {
                objects::upload(&self.gl, self.textures.get_mut(id), size, None);
            }
            objects::resize_depth_buffer(&self.gl, self.gbuffer_depth, width, height);
        }
        self.resolution = (width, height);
    }

    fn framebuffer(&self, id: FrameBufferId) -> Option<glow::Framebuffer> {
        *self.framebuffers.get(id)
    }

    fn mesh(&self, mesh: Mesh) -> &GlMesh {
        match mesh {
            Mesh::ScreenQuad => &self.quad,
            Mesh::UnitCube => &self.cube,
        }
    }
}

impl RenderDevice for GlDevice {
    fn push_debug_group(&mut self, label: &str) {
        unsafe {
            self.gl
                .push_debug_group(glow::DEBUG_SOURCE_APPLICATION, 0, label)
        };
    }

    fn pop_debug_group(&mut self) {
        unsafe { self.gl.pop_debug_group() };
    }

    fn bind_framebuffer(&mut self, framebuffer: FrameBufferId) {
        let handle = self.framebuffer(framebuffer);
        unsafe { self.gl.bind_framebuffer(glow::FRAMEBUFFER, handle) };
    }

    fn use_shader(&mut self, shader: ShaderId) {
        let program = *self.shaders.get(shader);
        unsafe { self.gl.use_program(Some(program)) };
        self.current_shader = Some(shader);
    }

    fn set_uniform(&mut self, name: &str, value: Uniform) {
        let shader = match self.current_shader {
            Some(shader) => shader,
            None => {
                error!("Uniform {} set with no shader in use", name);
                return;
            }
        };
        let program = *self.shaders.get(shader);
        let gl = &self.gl;

        unsafe {
            let location = match gl.get_uniform_location(program, name) {
                Some(location) => location,
                None => {
                    debug!("{} has no active uniform {}", shader.base_name(), name);
                    return;
                }
            };
            let location = Some(&location);

            match value {
                Uniform::Int(v) => gl.uniform_1_i32(location, v),
                Uniform::Bool(v) => gl.uniform_1_i32(location, v as i32),
                Uniform::Float(v) => gl.uniform_1_f32(location, v),
                Uniform::Vec3(v) => gl.uniform_3_f32(location, v.x, v.y, v.z),
                Uniform::Mat4(m) => gl.uniform_matrix_4_f32_slice(location, false, m.as_slice()),
            }
        }
    }

    fn bind_texture(&mut self, texture: TextureId) {
        let texture = self.textures.get(texture);
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + texture.spec.unit);
            self.gl
                .bind_texture(convert::target(texture.spec.kind), Some(texture.handle));
        }
    }

    fn upload_texture(&mut self, texture: TextureId, size: TextureSize, data: &[u8]) {
        let gl_texture = self.textures.get_mut(texture);
        let expected = gl_texture.spec.data_len(size);
        if data.len() != expected {
            error!(
                "Upload of {} skipped, {} bytes given, {} expected",
                texture.name(),
                data.len(),
                expected
            );
            return;
        }
        unsafe { objects::upload(&self.gl, gl_texture, size, Some(data)) };
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) };
    }

    fn clear(&mut self, mask: ClearMask) {
        unsafe {
            self.gl.clear_color(0.0, 0.0, 0.0, 0.0);
            self.gl.clear(convert::clear_bits(mask));
        }
    }

    fn set_depth_mask(&mut self, enabled: bool) {
        unsafe { self.gl.depth_mask(enabled) };
    }

    fn set_blending(&mut self, enabled: bool) {
        unsafe {
            if enabled {
                self.gl.enable(glow::BLEND);
                self.gl
                    .blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
            } else {
                self.gl.disable(glow::BLEND);
            }
        }
    }

    fn set_depth_test(&mut self, enabled: bool) {
        unsafe {
            if enabled {
                self.gl.enable(glow::DEPTH_TEST);
            } else {
                self.gl.disable(glow::DEPTH_TEST);
            }
        }
    }

    fn draw(&mut self, mesh: Mesh) {
        let buffers = self.mesh(mesh);
        unsafe {
            self.gl.bind_vertex_array(Some(buffers.vao));
            self.gl
                .draw_arrays(convert::primitive(mesh), 0, buffers.vertex_count);
            self.gl.bind_vertex_array(None);
        }
    }

    fn blit_depth(&mut self, from: FrameBufferId, to: FrameBufferId, width: u32, height: u32) {
        let (w, h) = (width as i32, height as i32);
        unsafe {
            self.gl
                .bind_framebuffer(glow::READ_FRAMEBUFFER, self.framebuffer(from));
            self.gl
                .bind_framebuffer(glow::DRAW_FRAMEBUFFER, self.framebuffer(to));
            self.gl.blit_framebuffer(
                0,
                0,
                w,
                h,
                0,
                0,
                w,
                h,
                glow::DEPTH_BUFFER_BIT,
                glow::NEAREST,
            );
            self.gl.bind_framebuffer(glow::FRAMEBUFFER, None);
        }
    }
}

impl Drop for GlDevice {
    fn drop(&mut self) {
        let gl = &self.gl;
        unsafe {
            for (_, texture) in self.textures.iter() {
                gl.delete_texture(texture.handle);
            }
            for (_, program) in self.shaders.iter() {
                gl.delete_program(*program);
            }
            for framebuffer in self.framebuffers.iter().filter_map(|(_, fb)| *fb) {
                gl.delete_framebuffer(framebuffer);
            }
            gl.delete_renderbuffer(self.gbuffer_depth);
            for mesh in [&self.quad, &self.cube] {
                gl.delete_vertex_array(mesh.vao);
                gl.delete_buffer(mesh.vbo);
            }
        }
    }
}
