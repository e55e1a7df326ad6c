use std::fmt::Debug;

/// Closed set of ids usable as keys of [`super::ElementStorage`]
pub trait ElementId: Copy + Eq + Debug + 'static {
    /// Every variant, in ordinal order
    const ALL: &'static [Self];

    /// Dense ordinal, `0..ALL.len()`
    fn index(self) -> usize;

    fn name(self) -> &'static str;
}

macro_rules! element_id {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl ElementId for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

element_id!(
    /// Every texture the pipeline reads or writes
    TextureId {
        VolumeData,
        Position,
        Normal,
        Albedo,
        Ssao,
        SsaoBlur,
        SsaoNoise,
        TransferFunction,
        PointLightsContribution,
        LightSpacePosition,
        Stencil,
        ShadowMap,
    }
);

element_id!(
    ShaderId {
        Shadow,
        Volume,
        Ssao,
        SsaoBlur,
        SsaoFinal,
        LightSource,
        DebugQuad,
    }
);

element_id!(
    /// `Default` is the window framebuffer
    FrameBufferId {
        Default,
        Shadow,
        GBuffer,
        Ssao,
        SsaoBlur,
    }
);

element_id!(
    /// Passes in execution order
    RenderPassId {
        Shadow,
        GBuffer,
        Ssao,
        SsaoBlur,
        Composite,
        DepthBlit,
        LightSource,
        Debug,
    }
);
