//! Creation of raw GL objects
//!
//! Every function here requires a current context.

use glow::{HasContext, PixelUnpackData};
use log::{debug, error};

use crate::{
    error::GpuError,
    gpu::{
        primitives::{self, SCREEN_QUAD, SCREEN_QUAD_STRIDE},
        shader_source::ShaderSource,
        Mesh, ShaderId, TextureKind, TextureSize, TextureSpec, Wrap,
    },
};

use super::convert;

pub struct GlTexture {
    pub handle: glow::Texture,
    pub spec: TextureSpec,
    pub size: TextureSize,
}

pub struct GlMesh {
    pub vao: glow::VertexArray,
    pub vbo: glow::Buffer,
    pub vertex_count: i32,
}

/// Create a texture and set its sampling parameters
pub unsafe fn create_texture(
    gl: &glow::Context,
    spec: TextureSpec,
    size: TextureSize,
    data: Option<&[u8]>,
) -> Result<GlTexture, GpuError> {
    let handle = gl
        .create_texture()
        .map_err(|e| GpuError::creation("texture", e))?;
    let mut texture = GlTexture { handle, spec, size };
    upload(gl, &mut texture, size, data);
    Ok(texture)
}

/// (Re)allocate storage of `texture`, `None` leaves content undefined
pub unsafe fn upload(
    gl: &glow::Context,
    texture: &mut GlTexture,
    size: TextureSize,
    data: Option<&[u8]>,
) {
    let spec = texture.spec;
    let target = convert::target(spec.kind);
    let internal = convert::internal_format(spec.internal);
    let format = convert::pixel_layout(spec.layout);
    let ty = convert::pixel_type(spec.pixel_type);
    let pixels = PixelUnpackData::Slice(data);

    gl.bind_texture(target, Some(texture.handle));
    // rows of RGB float and odd sized R8 data are not 4 byte aligned
    gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);

    match spec.kind {
        TextureKind::D1 => gl.tex_image_1d(
            target,
            0,
            internal,
            size.width as i32,
            0,
            format,
            ty,
            pixels,
        ),
        TextureKind::D2 => gl.tex_image_2d(
            target,
            0,
            internal,
            size.width as i32,
            size.height as i32,
            0,
            format,
            ty,
            pixels,
        ),
        TextureKind::D3 => gl.tex_image_3d(
            target,
            0,
            internal,
            size.width as i32,
            size.height as i32,
            size.depth as i32,
            0,
            format,
            ty,
            pixels,
        ),
    }

    let filter = convert::filter(spec.filter);
    let wrap = convert::wrap(spec.wrap);
    gl.tex_parameter_i32(target, glow::TEXTURE_MIN_FILTER, filter);
    gl.tex_parameter_i32(target, glow::TEXTURE_MAG_FILTER, filter);
    gl.tex_parameter_i32(target, glow::TEXTURE_WRAP_S, wrap);
    if spec.kind != TextureKind::D1 {
        gl.tex_parameter_i32(target, glow::TEXTURE_WRAP_T, wrap);
    }
    if spec.kind == TextureKind::D3 {
        gl.tex_parameter_i32(target, glow::TEXTURE_WRAP_R, wrap);
    }
    if let Wrap::ClampToBorder(border) = spec.wrap {
        gl.tex_parameter_f32_slice(target, glow::TEXTURE_BORDER_COLOR, &border);
    }

    gl.bind_texture(target, None);
    texture.size = size;
}

/// Framebuffer with color attachments in order, optional depth texture or renderbuffer
pub unsafe fn create_framebuffer(
    gl: &glow::Context,
    label: &str,
    colors: &[&GlTexture],
    depth_texture: Option<&GlTexture>,
    depth_buffer: Option<glow::Renderbuffer>,
) -> Result<glow::Framebuffer, GpuError> {
    let framebuffer = gl
        .create_framebuffer()
        .map_err(|e| GpuError::creation("framebuffer", e))?;
    gl.bind_framebuffer(glow::FRAMEBUFFER, Some(framebuffer));

    let mut draw_buffers = Vec::with_capacity(colors.len());
    for (i, texture) in colors.iter().enumerate() {
        let attachment = glow::COLOR_ATTACHMENT0 + i as u32;
        gl.framebuffer_texture_2d(
            glow::FRAMEBUFFER,
            attachment,
            glow::TEXTURE_2D,
            Some(texture.handle),
            0,
        );
        draw_buffers.push(attachment);
    }

    if let Some(depth) = depth_texture {
        gl.framebuffer_texture_2d(
            glow::FRAMEBUFFER,
            glow::DEPTH_ATTACHMENT,
            glow::TEXTURE_2D,
            Some(depth.handle),
            0,
        );
    }
    if let Some(renderbuffer) = depth_buffer {
        gl.framebuffer_renderbuffer(
            glow::FRAMEBUFFER,
            glow::DEPTH_ATTACHMENT,
            glow::RENDERBUFFER,
            Some(renderbuffer),
        );
    }

    if draw_buffers.is_empty() {
        // depth only
        gl.draw_buffer(glow::NONE);
        gl.read_buffer(glow::NONE);
    } else {
        gl.draw_buffers(&draw_buffers);
    }

    let status = gl.check_framebuffer_status(glow::FRAMEBUFFER);
    if status != glow::FRAMEBUFFER_COMPLETE {
        error!("Framebuffer {} incomplete, status {:#x}", label, status);
    }

    gl.bind_framebuffer(glow::FRAMEBUFFER, None);
    Ok(framebuffer)
}

pub unsafe fn create_depth_buffer(gl: &glow::Context) -> Result<glow::Renderbuffer, GpuError> {
    gl.create_renderbuffer()
        .map_err(|e| GpuError::creation("renderbuffer", e))
}

pub unsafe fn resize_depth_buffer(
    gl: &glow::Context,
    renderbuffer: glow::Renderbuffer,
    width: u32,
    height: u32,
) {
    gl.bind_renderbuffer(glow::RENDERBUFFER, Some(renderbuffer));
    gl.renderbuffer_storage(
        glow::RENDERBUFFER,
        glow::DEPTH_COMPONENT24,
        width as i32,
        height as i32,
    );
    gl.bind_renderbuffer(glow::RENDERBUFFER, None);
}

unsafe fn compile_stage(
    gl: &glow::Context,
    shader: ShaderId,
    stage: u32,
    source: &str,
) -> Result<glow::Shader, GpuError> {
    let handle = gl
        .create_shader(stage)
        .map_err(|e| GpuError::creation("shader", e))?;
    gl.shader_source(handle, source);
    gl.compile_shader(handle);

    if !gl.get_shader_compile_status(handle) {
        error!(
            "Compilation of {} {} shader failed:\n{}",
            shader.base_name(),
            if stage == glow::VERTEX_SHADER { "vertex" } else { "fragment" },
            gl.get_shader_info_log(handle)
        );
    }
    Ok(handle)
}

/// Compile and link a program.
/// Compile and link failures are logged, the program is returned anyway.
pub unsafe fn create_program(
    gl: &glow::Context,
    shader: ShaderId,
    source: &ShaderSource,
) -> Result<glow::Program, GpuError> {
    let program = gl
        .create_program()
        .map_err(|e| GpuError::creation("program", e))?;

    let stages = [
        compile_stage(gl, shader, glow::VERTEX_SHADER, &source.vertex)?,
        compile_stage(gl, shader, glow::FRAGMENT_SHADER, &source.fragment)?,
    ];

    for &stage in &stages {
        gl.attach_shader(program, stage);
    }
    gl.link_program(program);
    if !gl.get_program_link_status(program) {
        error!(
            "Linking of {} program failed:\n{}",
            shader.base_name(),
            gl.get_program_info_log(program)
        );
    }

    for stage in stages {
        gl.detach_shader(program, stage);
        gl.delete_shader(stage);
    }

    debug!("Program {} ready", shader.base_name());
    Ok(program)
}

/// Upload vertex data of a built-in mesh
pub unsafe fn create_mesh(gl: &glow::Context, mesh: Mesh) -> Result<GlMesh, GpuError> {
    let cube;
    let (data, stride, vertex_count): (&[f32], usize, usize) = match mesh {
        Mesh::ScreenQuad => (&SCREEN_QUAD[..], SCREEN_QUAD_STRIDE, 4),
        Mesh::UnitCube => {
            cube = primitives::unit_cube();
            (&cube[..], 3, primitives::UNIT_CUBE_VERTICES)
        }
    };

    let vao = gl
        .create_vertex_array()
        .map_err(|e| GpuError::creation("vertex array", e))?;
    let vbo = gl
        .create_buffer()
        .map_err(|e| GpuError::creation("buffer", e))?;

    gl.bind_vertex_array(Some(vao));
    gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
    gl.buffer_data_u8_slice(
        glow::ARRAY_BUFFER,
        bytemuck::cast_slice(data),
        glow::STATIC_DRAW,
    );

    let float_size = std::mem::size_of::<f32>() as i32;
    let stride_bytes = stride as i32 * float_size;
    gl.enable_vertex_attrib_array(0);
    gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride_bytes, 0);
    if stride > 3 {
        // uv
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, stride_bytes, 3 * float_size);
    }

    gl.bind_vertex_array(None);
    gl.bind_buffer(glow::ARRAY_BUFFER, None);

    Ok(GlMesh {
        vao,
        vbo,
        vertex_count: vertex_count as i32,
    })
}
