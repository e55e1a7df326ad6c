//! Fixed description of every texture
//! Shaders sample these units and formats, keep both sides in sync

use log::warn;

use crate::volume::VolumeMetadata;

use super::TextureId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    D1,
    D2,
    D3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalFormat {
    R8,
    Rg8,
    Rgb8,
    Rgba8,
    R16,
    Rg16,
    Rgb16,
    Rgba16,
    /// Unsized single channel
    Red,
    /// Unsized four channels
    Rgba,
    Rgba16F,
    Rgba32F,
    Depth,
}

/// Layout of uploaded pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    Red,
    Rg,
    Rgb,
    Rgba,
    Depth,
}

impl PixelLayout {
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Red | PixelLayout::Depth => 1,
            PixelLayout::Rg => 2,
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelType {
    UnsignedByte,
    UnsignedShort,
    Float,
}

impl PixelType {
    pub fn size(self) -> usize {
        match self {
            PixelType::UnsignedByte => 1,
            PixelType::UnsignedShort => 2,
            PixelType::Float => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Nearest,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wrap {
    ClampToEdge,
    Repeat,
    ClampToBorder([f32; 4]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureSpec {
    pub kind: TextureKind,
    pub internal: InternalFormat,
    pub layout: PixelLayout,
    pub pixel_type: PixelType,
    pub filter: Filter,
    pub wrap: Wrap,
    /// Texture unit the shaders read it from
    pub unit: u32,
}

/// Extent in texels, unused axes are 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl TextureSize {
    pub fn d1(width: u32) -> TextureSize {
        TextureSize {
            width,
            height: 1,
            depth: 1,
        }
    }

    pub fn d2(width: u32, height: u32) -> TextureSize {
        TextureSize {
            width,
            height,
            depth: 1,
        }
    }

    pub fn d3(width: u32, height: u32, depth: u32) -> TextureSize {
        TextureSize {
            width,
            height,
            depth,
        }
    }

    pub fn texels(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }
}

const SHADOW_BORDER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

const fn screen(internal: InternalFormat, layout: PixelLayout, unit: u32) -> TextureSpec {
    TextureSpec {
        kind: TextureKind::D2,
        internal,
        layout,
        pixel_type: PixelType::Float,
        filter: Filter::Nearest,
        wrap: Wrap::Repeat,
        unit,
    }
}

impl TextureSpec {
    /// Byte length of data for a texture of `size`
    pub fn data_len(&self, size: TextureSize) -> usize {
        size.texels() * self.layout.channels() * self.pixel_type.size()
    }

    /// Format of the 3D volume texture, picked from the voxel layout
    pub fn volume(metadata: &VolumeMetadata) -> TextureSpec {
        use InternalFormat::*;

        let (internal, pixel_type) = match (metadata.bits_per_component, metadata.components) {
            (8, 1) => (R8, PixelType::UnsignedByte),
            (8, 2) => (Rg8, PixelType::UnsignedByte),
            (8, 3) => (Rgb8, PixelType::UnsignedByte),
            (8, _) => (Rgba8, PixelType::UnsignedByte),
            (16, 1) => (R16, PixelType::UnsignedShort),
            (16, 2) => (Rg16, PixelType::UnsignedShort),
            (16, 3) => (Rgb16, PixelType::UnsignedShort),
            (16, _) => (Rgba16, PixelType::UnsignedShort),
            (bits, _) => {
                warn!("{} bits per component not supported, uploading as R8", bits);
                (R8, PixelType::UnsignedByte)
            }
        };
        let layout = match internal {
            R8 | R16 => PixelLayout::Red,
            Rg8 | Rg16 => PixelLayout::Rg,
            Rgb8 | Rgb16 => PixelLayout::Rgb,
            _ => PixelLayout::Rgba,
        };

        TextureSpec {
            kind: TextureKind::D3,
            internal,
            layout,
            pixel_type,
            filter: Filter::Linear,
            wrap: Wrap::ClampToEdge,
            unit: TextureId::VolumeData.unit(),
        }
    }
}

impl TextureId {
    pub fn unit(self) -> u32 {
        match self {
            TextureId::VolumeData => 1,
            TextureId::Position => 2,
            TextureId::Normal => 3,
            TextureId::Albedo => 4,
            TextureId::Ssao => 5,
            TextureId::SsaoBlur => 6,
            TextureId::SsaoNoise => 7,
            TextureId::TransferFunction => 8,
            TextureId::PointLightsContribution => 9,
            TextureId::LightSpacePosition => 10,
            TextureId::Stencil => 11,
            TextureId::ShadowMap => 12,
        }
    }

    /// Format of every texture except the volume, whose format follows the data.
    /// See [`TextureSpec::volume`].
    pub fn spec(self) -> TextureSpec {
        use InternalFormat::*;

        let unit = self.unit();
        match self {
            TextureId::Position | TextureId::LightSpacePosition => TextureSpec {
                wrap: Wrap::ClampToEdge,
                ..screen(Rgba16F, PixelLayout::Rgba, unit)
            },
            TextureId::Normal => screen(Rgba16F, PixelLayout::Rgba, unit),
            TextureId::Albedo => TextureSpec {
                pixel_type: PixelType::UnsignedByte,
                ..screen(Rgba, PixelLayout::Rgba, unit)
            },
            TextureId::Ssao
            | TextureId::SsaoBlur
            | TextureId::PointLightsContribution
            | TextureId::Stencil => screen(Red, PixelLayout::Red, unit),
            TextureId::SsaoNoise => screen(Rgba32F, PixelLayout::Rgb, unit),
            TextureId::TransferFunction => TextureSpec {
                kind: TextureKind::D1,
                pixel_type: PixelType::UnsignedByte,
                filter: Filter::Linear,
                wrap: Wrap::ClampToEdge,
                ..screen(Rgba, PixelLayout::Rgba, unit)
            },
            TextureId::ShadowMap => TextureSpec {
                wrap: Wrap::ClampToBorder(SHADOW_BORDER),
                ..screen(Depth, PixelLayout::Depth, unit)
            },
            TextureId::VolumeData => TextureSpec {
                kind: TextureKind::D3,
                internal: R8,
                layout: PixelLayout::Red,
                pixel_type: PixelType::UnsignedByte,
                filter: Filter::Linear,
                wrap: Wrap::ClampToEdge,
                unit,
            },
        }
    }

    /// Attached to the G-buffer, in attachment order
    pub const GBUFFER_ATTACHMENTS: [TextureId; 6] = [
        TextureId::Position,
        TextureId::LightSpacePosition,
        TextureId::Normal,
        TextureId::Albedo,
        TextureId::PointLightsContribution,
        TextureId::Stencil,
    ];

    /// Sized like the window, recreated on resize
    pub fn is_screen_sized(self) -> bool {
        matches!(
            self,
            TextureId::Position
                | TextureId::LightSpacePosition
                | TextureId::Normal
                | TextureId::Albedo
                | TextureId::PointLightsContribution
                | TextureId::Stencil
                | TextureId::Ssao
                | TextureId::SsaoBlur
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gpu::ElementId;

    #[test]
    fn units_unique() {
        let mut units: Vec<u32> = TextureId::ALL.iter().map(|id| id.unit()).collect();
        units.sort_unstable();
        units.dedup();
        assert_eq!(units.len(), TextureId::ALL.len());
        // unit 0 stays free for temporary binds
        assert!(!units.contains(&0));
    }

    #[test]
    fn fixed_contract() {
        let tf = TextureId::TransferFunction.spec();
        assert_eq!(tf.kind, TextureKind::D1);
        assert_eq!(tf.filter, Filter::Linear);
        assert_eq!(tf.wrap, Wrap::ClampToEdge);
        assert_eq!(tf.data_len(TextureSize::d1(512)), 2048);

        let noise = TextureId::SsaoNoise.spec();
        assert_eq!(noise.internal, InternalFormat::Rgba32F);
        assert_eq!(noise.layout, PixelLayout::Rgb);
        assert_eq!(noise.filter, Filter::Nearest);
        assert_eq!(noise.wrap, Wrap::Repeat);

        let position = TextureId::Position.spec();
        assert_eq!(position.internal, InternalFormat::Rgba16F);
        assert_eq!(position.wrap, Wrap::ClampToEdge);
        assert_eq!(TextureId::Normal.spec().wrap, Wrap::Repeat);
    }

    #[test]
    fn volume_formats() {
        let mut meta = VolumeMetadata::new(4, 4, 4);
        assert_eq!(TextureSpec::volume(&meta).internal, InternalFormat::R8);

        meta.bits_per_component = 16;
        let spec = TextureSpec::volume(&meta);
        assert_eq!(spec.internal, InternalFormat::R16);
        assert_eq!(spec.pixel_type, PixelType::UnsignedShort);
        assert_eq!(spec.data_len(TextureSize::d3(4, 4, 4)), 128);

        meta.components = 5;
        assert_eq!(TextureSpec::volume(&meta).internal, InternalFormat::Rgba16);
    }
}
