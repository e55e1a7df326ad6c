//! Mapping of backend neutral formats to GL enums

use crate::gpu::{
    ClearMask, Filter, InternalFormat, Mesh, PixelLayout, PixelType, TextureKind, Wrap,
};

pub fn target(kind: TextureKind) -> u32 {
    match kind {
        TextureKind::D1 => glow::TEXTURE_1D,
        TextureKind::D2 => glow::TEXTURE_2D,
        TextureKind::D3 => glow::TEXTURE_3D,
    }
}

pub fn internal_format(format: InternalFormat) -> i32 {
    let format = match format {
        InternalFormat::R8 => glow::R8,
        InternalFormat::Rg8 => glow::RG8,
        InternalFormat::Rgb8 => glow::RGB8,
        InternalFormat::Rgba8 => glow::RGBA8,
        InternalFormat::R16 => glow::R16,
        InternalFormat::Rg16 => glow::RG16,
        InternalFormat::Rgb16 => glow::RGB16,
        InternalFormat::Rgba16 => glow::RGBA16,
        InternalFormat::Red => glow::RED,
        InternalFormat::Rgba => glow::RGBA,
        InternalFormat::Rgba16F => glow::RGBA16F,
        InternalFormat::Rgba32F => glow::RGBA32F,
        InternalFormat::Depth => glow::DEPTH_COMPONENT,
    };
    format as i32
}

pub fn pixel_layout(layout: PixelLayout) -> u32 {
    match layout {
        PixelLayout::Red => glow::RED,
        PixelLayout::Rg => glow::RG,
        PixelLayout::Rgb => glow::RGB,
        PixelLayout::Rgba => glow::RGBA,
        PixelLayout::Depth => glow::DEPTH_COMPONENT,
    }
}

pub fn pixel_type(ty: PixelType) -> u32 {
    match ty {
        PixelType::UnsignedByte => glow::UNSIGNED_BYTE,
        PixelType::UnsignedShort => glow::UNSIGNED_SHORT,
        PixelType::Float => glow::FLOAT,
    }
}

pub fn filter(filter: Filter) -> i32 {
    let filter = match filter {
        Filter::Nearest => glow::NEAREST,
        Filter::Linear => glow::LINEAR,
    };
    filter as i32
}

pub fn wrap(wrap: Wrap) -> i32 {
    let wrap = match wrap {
        Wrap::ClampToEdge => glow::CLAMP_TO_EDGE,
        Wrap::Repeat => glow::REPEAT,
        Wrap::ClampToBorder(_) => glow::CLAMP_TO_BORDER,
    };
    wrap as i32
}

pub fn clear_bits(mask: ClearMask) -> u32 {
    let mut bits = 0;
    if mask.color {
        bits |= glow::COLOR_BUFFER_BIT;
    }
    if mask.depth {
        bits |= glow::DEPTH_BUFFER_BIT;
    }
    bits
}

pub fn primitive(mesh: Mesh) -> u32 {
    match mesh {
        Mesh::ScreenQuad => glow::TRIANGLE_STRIP,
        Mesh::UnitCube => glow::TRIANGLES,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clear_mask_bits() {
        assert_eq!(clear_bits(ClearMask::COLOR), glow::COLOR_BUFFER_BIT);
        assert_eq!(
            clear_bits(ClearMask::ALL),
            glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT
        );
    }

    #[test]
    fn noise_texture_enums() {
        let spec = crate::gpu::TextureId::SsaoNoise.spec();
        assert_eq!(internal_format(spec.internal), glow::RGBA32F as i32);
        assert_eq!(pixel_layout(spec.layout), glow::RGB);
        assert_eq!(pixel_type(spec.pixel_type), glow::FLOAT);
        assert_eq!(wrap(spec.wrap), glow::REPEAT as i32);
    }
}
