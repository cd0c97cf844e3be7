use crate::constants::GLOW_OPACITY_VISIBLE;
use glam::Vec2;

/// Latest pointer position in CSS pixels, plus whether the pointer is over
/// the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub inside: bool,
}

impl PointerState {
    /// Initial state before the first move event: viewport centre.
    pub fn centered(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            x: (viewport_width / 2.0) as f32,
            y: (viewport_height / 2.0) as f32,
            inside: true,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn moved_to(self, x: f32, y: f32) -> Self {
        Self { x, y, ..self }
    }

    /// Opacity of the glow element for the current enter/leave state.
    pub fn glow_opacity(&self) -> f32 {
        if self.inside {
            GLOW_OPACITY_VISIBLE
        } else {
            0.0
        }
    }
}

/// Formats a coordinate as a CSS pixel length, e.g. `"12px"`.
pub fn css_px(value: f32) -> String {
    format!("{value}px")
}
