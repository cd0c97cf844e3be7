use crate::constants::AVATAR_WAYPOINTS;
use crate::error::FxError;
use glam::Vec3;

/// Polyline route through fixed waypoints, parameterised by a progress
/// fraction in \[0, 1\].
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollPath {
    waypoints: Vec<Vec3>,
}

impl Default for ScrollPath {
    fn default() -> Self {
        Self {
            waypoints: AVATAR_WAYPOINTS.to_vec(),
        }
    }
}

impl ScrollPath {
    pub fn new(waypoints: Vec<Vec3>) -> Result<Self, FxError> {
        if waypoints.len() < 2 {
            return Err(FxError::PathTooShort(waypoints.len()));
        }
        Ok(Self { waypoints })
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    pub fn segments(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Point at `progress`: segment `floor(progress * segments)` (the last
    /// segment for progress 1), blended by the fractional remainder.
    pub fn point_at(&self, progress: f32) -> Vec3 {
        let segments = self.segments();
        let scaled = clamp_progress(progress) * segments as f32;
        let idx = (scaled.floor() as usize).min(segments - 1);
        let t = scaled - idx as f32;
        self.waypoints[idx].lerp(self.waypoints[idx + 1], t)
    }
}

/// Clamp to \[0, 1\], mapping NaN to 0.
#[inline]
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Scroll offset as a fraction of the scrollable extent. Pages that cannot
/// scroll report 0; overscroll is clamped.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    clamp_progress((scroll_y / scrollable) as f32)
}
