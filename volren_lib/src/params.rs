//! State shared with the GUI layer
//!
//! The GUI mutates [`GuiParameters`] and bumps [`GuiUpdateFlags`], the
//! renderer only reads them.

use crate::{
    defaults,
    gpu::TextureId,
    lights::{default_point_lights, DirectionalLight, PointLight},
    transfer_function::TransferFunction,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SsaoParameters {
    pub kernel_size: usize,
    /// Side of the square rotation texture
    pub noise_size: usize,
    pub radius: f32,
    pub bias: f32,
    pub enabled: bool,
}

impl Default for SsaoParameters {
    fn default() -> Self {
        SsaoParameters {
            kernel_size: defaults::SSAO_KERNEL_SIZE,
            noise_size: defaults::SSAO_NOISE_SIZE,
            radius: defaults::SSAO_RADIUS,
            bias: defaults::SSAO_BIAS,
            enabled: true,
        }
    }
}

/// Carried for the input layer, the renderer does not read it
#[derive(Debug, Clone, PartialEq)]
pub struct TrackballSettings {
    pub rotation_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl Default for TrackballSettings {
    fn default() -> Self {
        TrackballSettings {
            rotation_sensitivity: defaults::TRACKBALL_ROTATION_SENSITIVITY,
            zoom_sensitivity: defaults::TRACKBALL_ZOOM_SENSITIVITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuiParameters {
    pub transfer_function: TransferFunction,
    pub directional_light: DirectionalLight,
    pub point_lights: [PointLight; defaults::NUM_POINT_LIGHTS],
    pub ssao: SsaoParameters,
    pub show_light_sources: bool,
    pub enable_shadows: bool,
    /// Scales opacity accumulated per raycasting step
    pub density_multiplier: f32,
    pub trackball: TrackballSettings,
}

impl Default for GuiParameters {
    fn default() -> Self {
        GuiParameters {
            transfer_function: TransferFunction::default(),
            directional_light: DirectionalLight::default(),
            point_lights: default_point_lights(),
            ssao: SsaoParameters::default(),
            show_light_sources: defaults::SHOW_LIGHT_SOURCES,
            enable_shadows: defaults::ENABLE_SHADOWS,
            density_multiplier: defaults::DENSITY_MULTIPLIER,
            trackball: TrackballSettings::default(),
        }
    }
}

impl GuiParameters {
    /// Clamp slider backed values into their ranges
    pub fn clamp_to_ranges(&mut self) {
        let ssao = &mut self.ssao;
        ssao.kernel_size = clamp_range(ssao.kernel_size, &defaults::SSAO_KERNEL_SIZE_RANGE);
        ssao.noise_size = clamp_range(ssao.noise_size, &defaults::SSAO_NOISE_SIZE_RANGE);
        ssao.radius = clamp_range(ssao.radius, &defaults::SSAO_RADIUS_RANGE);
        ssao.bias = clamp_range(ssao.bias, &defaults::SSAO_BIAS_RANGE);
        self.density_multiplier =
            clamp_range(self.density_multiplier, &defaults::DENSITY_MULTIPLIER_RANGE);
    }
}

fn clamp_range<T: PartialOrd + Copy>(v: T, range: &std::ops::RangeInclusive<T>) -> T {
    if v < *range.start() {
        *range.start()
    } else if v > *range.end() {
        *range.end()
    } else {
        v
    }
}

/// Intermediate texture shown full screen instead of the final image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugView {
    Position,
    LightSpacePosition,
    Normal,
    Albedo,
    PointLightsContribution,
    Stencil,
    Ssao,
    SsaoBlur,
    ShadowMap,
}

impl DebugView {
    pub const ALL: [DebugView; 9] = [
        DebugView::Position,
        DebugView::LightSpacePosition,
        DebugView::Normal,
        DebugView::Albedo,
        DebugView::PointLightsContribution,
        DebugView::Stencil,
        DebugView::Ssao,
        DebugView::SsaoBlur,
        DebugView::ShadowMap,
    ];

    pub fn texture(self) -> TextureId {
        match self {
            DebugView::Position => TextureId::Position,
            DebugView::LightSpacePosition => TextureId::LightSpacePosition,
            DebugView::Normal => TextureId::Normal,
            DebugView::Albedo => TextureId::Albedo,
            DebugView::PointLightsContribution => TextureId::PointLightsContribution,
            DebugView::Stencil => TextureId::Stencil,
            DebugView::Ssao => TextureId::Ssao,
            DebugView::SsaoBlur => TextureId::SsaoBlur,
            DebugView::ShadowMap => TextureId::ShadowMap,
        }
    }

    /// Shader shows red channel as grayscale
    pub fn is_single_channel(self) -> bool {
        matches!(
            self,
            DebugView::PointLightsContribution
                | DebugView::Stencil
                | DebugView::Ssao
                | DebugView::SsaoBlur
                | DebugView::ShadowMap
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayProperties {
    pub show_gui: bool,
    pub debug_view: Option<DebugView>,
}

impl Default for DisplayProperties {
    fn default() -> Self {
        DisplayProperties {
            show_gui: true,
            debug_view: None,
        }
    }
}

/// Change counters written by the GUI.
///
/// Every edit bumps a revision, consumers remember the last revision they
/// handled in a [`ChangeWatcher`]. Nothing is ever reset, so any number of
/// consumers can watch the same counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuiUpdateFlags {
    ssao: u64,
    transfer_function: u64,
}

impl GuiUpdateFlags {
    pub fn mark_ssao_changed(&mut self) {
        self.ssao = self.ssao.wrapping_add(1);
    }

    pub fn mark_transfer_function_changed(&mut self) {
        self.transfer_function = self.transfer_function.wrapping_add(1);
    }

    pub fn ssao_revision(&self) -> u64 {
        self.ssao
    }

    pub fn transfer_function_revision(&self) -> u64 {
        self.transfer_function
    }
}

/// Last revision a consumer acted on
#[derive(Debug, Clone, Default)]
pub struct ChangeWatcher {
    seen: Option<u64>,
}

impl ChangeWatcher {
    /// True on the first call and whenever `revision` differs from the last one
    pub fn observe(&mut self, revision: u64) -> bool {
        let changed = self.seen != Some(revision);
        self.seen = Some(revision);
        changed
    }

    /// Make the next [`ChangeWatcher::observe`] report a change
    pub fn invalidate(&mut self) {
        self.seen = None;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn watcher_first_then_changes() {
        let mut flags = GuiUpdateFlags::default();
        let mut watcher = ChangeWatcher::default();

        assert!(watcher.observe(flags.ssao_revision()));
        assert!(!watcher.observe(flags.ssao_revision()));

        flags.mark_ssao_changed();
        flags.mark_ssao_changed();
        assert!(watcher.observe(flags.ssao_revision()));
        assert!(!watcher.observe(flags.ssao_revision()));

        watcher.invalidate();
        assert!(watcher.observe(flags.ssao_revision()));
    }

    #[test]
    fn independent_watchers() {
        let mut flags = GuiUpdateFlags::default();
        let mut a = ChangeWatcher::default();
        let mut b = ChangeWatcher::default();
        a.observe(flags.transfer_function_revision());
        b.observe(flags.transfer_function_revision());

        flags.mark_transfer_function_changed();
        assert!(a.observe(flags.transfer_function_revision()));
        assert!(b.observe(flags.transfer_function_revision()));
    }

    #[test]
    fn clamp_sliders() {
        let mut params = GuiParameters::default();
        params.ssao.kernel_size = 1000;
        params.ssao.noise_size = 1;
        params.ssao.bias = -1.0;
        params.density_multiplier = 100.0;
        params.clamp_to_ranges();

        assert_eq!(params.ssao.kernel_size, 128);
        assert_eq!(params.ssao.noise_size, 4);
        assert_eq!(params.ssao.bias, 0.0);
        assert_eq!(params.density_multiplier, 40.0);
    }

    #[test]
    fn debug_textures_are_distinct() {
        let mut textures: Vec<_> = DebugView::ALL.iter().map(|v| v.texture()).collect();
        textures.dedup();
        assert_eq!(textures.len(), DebugView::ALL.len());
    }
}
