//! Slider view

use glam::Vec2;
use tracing::warn;
use vrui_core::{Background, ConfigError, Theme};

use crate::interaction::Rect;

/// Default lower bound.
pub const MIN_VALUE: f32 = 0.0;
/// Default upper bound.
pub const MAX_VALUE: f32 = 1.0;
/// Track height as a fraction of the content height.
pub const TRACK_SCALE_Y: f32 = 0.5;
/// Handle width as a fraction of the content width.
pub const HANDLE_SCALE_X: f32 = 0.1;
/// Handle height as a fraction of the content height.
pub const HANDLE_SCALE_Y: f32 = 0.8;

/// Horizontal slider over `[min, max]`, mapped linearly onto its track.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    min: f32,
    max: f32,
    value: f32,
    /// Track surface.
    pub track: Background,
    /// Handle surface.
    pub handle: Background,
}

impl Slider {
    /// Slider over the default range, centred.
    pub fn new(theme: &Theme) -> Self {
        Self {
            min: MIN_VALUE,
            max: MAX_VALUE,
            value: MIN_VALUE + (MAX_VALUE - MIN_VALUE) / 2.0,
            track: theme.slider_back.into(),
            handle: theme.slider_handle.into(),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// `(min, max)`
    pub fn bounds(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Set the value. Out-of-range values are rejected with a warning and
    /// leave the slider untouched.
    pub fn set_value(&mut self, value: f32) -> bool {
        if !(self.min..=self.max).contains(&value) {
            warn!(
                value,
                min = self.min,
                max = self.max,
                "slider value should be within bounds"
            );
            return false;
        }
        self.value = value;
        true
    }

    /// Change the range; the current value is clamped into it.
    pub fn set_bounds(&mut self, min: f32, max: f32) -> Result<(), ConfigError> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(ConfigError::InvalidSliderBounds { min, max });
        }
        self.min = min;
        self.max = max;
        self.value = self.value.clamp(min, max);
        Ok(())
    }

    /// Builder form of [`Slider::set_bounds`].
    pub fn with_bounds(mut self, min: f32, max: f32) -> Result<Self, ConfigError> {
        self.set_bounds(min, max)?;
        Ok(self)
    }

    /// Value under a horizontal track coordinate `u` in `[0, 1]`.
    pub fn value_at(&self, u: f32) -> f32 {
        self.min + u.clamp(0.0, 1.0) * (self.max - self.min)
    }

    /// Move to the value under `u`. Returns whether the value changed.
    pub(crate) fn set_from_track(&mut self, u: f32) -> bool {
        let value = self.value_at(u);
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }

    /// Handle centre relative to the track centre, in track widths
    /// (`-0.5` at `min`, `0.5` at `max`).
    pub fn handle_offset(&self) -> f32 {
        (self.value - self.min) / (self.max - self.min) - 0.5
    }

    /// Track rectangle inside the view's content area.
    pub fn track_rect(&self, content: Rect) -> Rect {
        Rect::from_center_size(
            content.center(),
            content.width(),
            content.height() * TRACK_SCALE_Y,
        )
    }

    /// Handle rectangle inside the view's content area.
    pub fn handle_rect(&self, content: Rect) -> Rect {
        let center = content.center() + Vec2::new(self.handle_offset() * content.width(), 0.0);
        Rect::from_center_size(
            center,
            content.width() * HANDLE_SCALE_X,
            content.height() * HANDLE_SCALE_Y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let slider = Slider::new(&Theme::default());
        assert_eq!(slider.bounds(), (0.0, 1.0));
        assert_eq!(slider.value(), 0.5);
        assert_eq!(slider.handle_offset(), 0.0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut slider = Slider::new(&Theme::default());
        assert!(!slider.set_value(2.0));
        assert_eq!(slider.value(), 0.5);
        assert!(slider.set_value(0.25));
        assert_eq!(slider.handle_offset(), -0.25);
    }

    #[test]
    fn test_bounds() {
        let mut slider = Slider::new(&Theme::default());
        assert_eq!(
            slider.set_bounds(1.0, 1.0),
            Err(ConfigError::InvalidSliderBounds { min: 1.0, max: 1.0 })
        );
        slider.set_bounds(10.0, 20.0).unwrap();
        assert_eq!(slider.value(), 10.0);
        assert_eq!(slider.value_at(0.5), 15.0);
    }

    #[test]
    fn test_track_mapping_reports_changes() {
        let mut slider = Slider::new(&Theme::default());
        assert!(!slider.set_from_track(0.5));
        assert!(slider.set_from_track(0.75));
        assert_eq!(slider.value(), 0.75);
        assert!(slider.set_from_track(2.0));
        assert_eq!(slider.value(), 1.0);
    }

    #[test]
    fn test_handle_rect_follows_value() {
        let mut slider = Slider::new(&Theme::default());
        let content = Rect::from_top_left(Vec2::new(0.0, 1.0), 1.0, 1.0);
        slider.set_value(1.0);
        let handle = slider.handle_rect(content);
        assert!((handle.center().x - 1.0).abs() < 1e-6);
        assert!((handle.width() - 0.1).abs() < 1e-6);
        assert!((handle.height() - 0.8).abs() < 1e-6);
    }
}
