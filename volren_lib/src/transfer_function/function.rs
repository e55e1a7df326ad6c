use crate::{
    color::{self, RGB, RGBA},
    defaults::MAX_CONTROL_POINTS,
};

use super::{interpolate::interpolate, ControlPoint};

/// Ordered set of control points, at most [`MAX_CONTROL_POINTS`].
///
/// Points are kept sorted by ascending value by every method here, duplicates
/// are allowed. [`TransferFunction::get_mut`] hands out direct access and
/// leaves ordering to the caller, use [`TransferFunction::move_point`] to drag
/// a point instead.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    points: Vec<ControlPoint>,
}

impl Default for TransferFunction {
    fn default() -> Self {
        TransferFunction {
            points: vec![
                ControlPoint::new(0.0, color::mono(0.0), 0.0),
                ControlPoint::new(0.5, color::rgb(1.0, 0.5, 0.0), 0.5),
                ControlPoint::new(1.0, color::mono(1.0), 1.0),
            ],
        }
    }
}

impl TransferFunction {
    pub fn empty() -> TransferFunction {
        TransferFunction {
            points: Vec::with_capacity(MAX_CONTROL_POINTS),
        }
    }

    /// Build from arbitrary points
    /// Extra points past the capacity are dropped, the rest is sorted
    pub fn from_points(mut points: Vec<ControlPoint>) -> TransferFunction {
        points.truncate(MAX_CONTROL_POINTS);
        points.sort_by(|a, b| a.value.total_cmp(&b.value));
        TransferFunction { points }
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= MAX_CONTROL_POINTS
    }

    pub fn get(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ControlPoint> {
        self.points.get_mut(index)
    }

    /// Insert a point, keeping the order.
    ///
    /// The color of the new point is taken from its neighbours: a blend when
    /// it lands between two points, a copy of the neighbour when it lands on
    /// either end, mid gray when the function is empty.
    ///
    /// Returns index of the new point, or `None` if the function is full.
    pub fn add_point(&mut self, value: f32, opacity: f32) -> Option<usize> {
        if self.is_full() {
            return None;
        }

        let index = self.points.partition_point(|p| p.value <= value);
        let color = self.neighbour_color(index, value);

        self.points
            .insert(index, ControlPoint::new(value, color, opacity));
        Some(index)
    }

    fn neighbour_color(&self, index: usize, value: f32) -> RGB {
        let prev = index.checked_sub(1).and_then(|i| self.points.get(i));
        let next = self.points.get(index);

        match (prev, next) {
            (Some(prev), Some(next)) => {
                let span = next.value - prev.value;
                let t = if span > f32::EPSILON {
                    (value - prev.value) / span
                } else {
                    0.0
                };
                color::mix(&prev.color, &next.color, t)
            }
            // Before the first point, takes color of the old first point
            (None, Some(next)) => next.color,
            (Some(prev), None) => prev.color,
            (None, None) => color::mono(0.5),
        }
    }

    /// Remove point at `index`, later points shift left
    pub fn remove_point(&mut self, index: usize) -> Option<ControlPoint> {
        if index >= self.points.len() {
            return None;
        }
        Some(self.points.remove(index))
    }

    /// Drag a point to a new position.
    /// Value and opacity are clamped to `[0;1]`, order is restored.
    /// Returns the new index of the point.
    pub fn move_point(&mut self, index: usize, value: f32, opacity: f32) -> Option<usize> {
        if index >= self.points.len() {
            return None;
        }
        let mut point = self.points.remove(index);
        point.value = value.clamp(0.0, 1.0);
        point.opacity = opacity.clamp(0.0, 1.0);

        let new_index = self.points.partition_point(|p| p.value <= point.value);
        self.points.insert(new_index, point);
        Some(new_index)
    }

    pub fn set_color(&mut self, index: usize, color: RGB) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.color = color::clamp_rgb(color);
                true
            }
            None => false,
        }
    }

    /// Non-empty, within capacity, every field in `[0;1]` and sorted
    pub fn is_valid(&self) -> bool {
        !self.points.is_empty()
            && self.points.len() <= MAX_CONTROL_POINTS
            && self.points.iter().all(ControlPoint::is_valid)
            && self.points.windows(2).all(|w| w[0].value <= w[1].value)
    }

    pub fn sample(&self, value: f32) -> RGBA {
        interpolate(value, &self.points)
    }
}
