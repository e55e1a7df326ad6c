use crate::color::{self, RGB, RGBA};

/// One knot of the transfer function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Normalized scalar value, `[0;1]`
    pub value: f32,
    /// Color at `value`, channels in `[0;1]`
    pub color: RGB,
    /// Opacity at `value`, `[0;1]`
    pub opacity: f32,
}

impl ControlPoint {
    pub fn new(value: f32, color: RGB, opacity: f32) -> ControlPoint {
        ControlPoint {
            value,
            color,
            opacity,
        }
    }

    pub fn rgba(&self) -> RGBA {
        color::with_opacity(self.color, self.opacity)
    }

    /// All fields inside `[0;1]`
    pub fn is_valid(&self) -> bool {
        let unit = 0.0..=1.0;
        unit.contains(&self.value)
            && unit.contains(&self.opacity)
            && self.color.iter().all(|c| unit.contains(c))
    }
}
