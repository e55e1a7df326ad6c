use nalgebra::{vector, Vector3, Vector4};

pub type RGB = Vector3<f32>;
pub type RGBA = Vector4<f32>;

pub fn rgb(r: f32, g: f32, b: f32) -> RGB {
    vector![r, g, b]
}

pub fn new(r: f32, g: f32, b: f32, a: f32) -> RGBA {
    vector![r, g, b, a]
}

pub fn zero() -> RGBA {
    vector![0.0, 0.0, 0.0, 0.0]
}

pub fn mono(v: f32) -> RGB {
    vector![v, v, v]
}

pub fn with_opacity(color: RGB, opacity: f32) -> RGBA {
    vector![color.x, color.y, color.z, opacity]
}

/// Linear blend, `t == 0` gives `a`
pub fn mix(a: &RGB, b: &RGB, t: f32) -> RGB {
    a + (b - a) * t
}

/// Quantise a channel to 8 bits, values outside `[0;1]` are clamped
pub fn to_unorm8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

pub fn clamp_rgb(color: RGB) -> RGB {
    color.map(|c| c.clamp(0.0, 1.0))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unorm8_clamps() {
        assert_eq!(to_unorm8(-0.5), 0);
        assert_eq!(to_unorm8(0.0), 0);
        assert_eq!(to_unorm8(1.0), 255);
        assert_eq!(to_unorm8(7.0), 255);
        assert_eq!(to_unorm8(0.5), 127);
    }

    #[test]
    fn mix_endpoints() {
        let a = rgb(0.0, 0.2, 1.0);
        let b = rgb(1.0, 0.4, 0.0);
        assert_eq!(mix(&a, &b, 0.0), a);
        assert_eq!(mix(&a, &b, 1.0), b);

        let half = mix(&a, &b, 0.5);
        assert!((half.x - 0.5).abs() < f32::EPSILON);
        assert!((half.y - 0.3).abs() < 1e-6);
        assert!((half.z - 0.5).abs() < f32::EPSILON);
    }
}
