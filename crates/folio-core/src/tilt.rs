use crate::constants::{
    TILT_BREAKPOINT_PX, TILT_LIFT_PX, TILT_PERSPECTIVE_PX, TILT_SPAN_X_DEG, TILT_SPAN_Y_DEG,
};

/// Panel bounds in client coordinates (as reported by `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TiltParams {
    pub span_x_deg: f64,
    pub span_y_deg: f64,
    pub lift_px: f64,
    pub perspective_px: f64,
    pub breakpoint_px: f64,
}

impl Default for TiltParams {
    fn default() -> Self {
        Self {
            span_x_deg: TILT_SPAN_X_DEG,
            span_y_deg: TILT_SPAN_Y_DEG,
            lift_px: TILT_LIFT_PX,
            perspective_px: TILT_PERSPECTIVE_PX,
            breakpoint_px: TILT_BREAKPOINT_PX,
        }
    }
}

impl TiltParams {
    /// Media query that matches when tilt must be disabled.
    pub fn disable_query(&self) -> String {
        format!("(max-width: {}px)", self.breakpoint_px)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub lift_px: f64,
}

impl Tilt {
    pub fn to_css(&self, params: &TiltParams) -> String {
        format!(
            "perspective({}px) rotateX({:.3}deg) rotateY({:.3}deg) translateY(-{}px)",
            params.perspective_px, self.rotate_x_deg, self.rotate_y_deg, self.lift_px
        )
    }
}

/// Tilt for a pointer at client coordinates over `rect`. Rotations are
/// bounded to half of each span even when the pointer sits outside the
/// panel. Returns `None` for a zero-sized panel.
pub fn tilt_for(rect: PanelRect, client_x: f64, client_y: f64, params: &TiltParams) -> Option<Tilt> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    let nx = ((client_x - rect.left) / rect.width).clamp(0.0, 1.0);
    let ny = ((client_y - rect.top) / rect.height).clamp(0.0, 1.0);
    Some(Tilt {
        rotate_x_deg: (0.5 - ny) * params.span_x_deg,
        rotate_y_deg: (nx - 0.5) * params.span_y_deg,
        lift_px: params.lift_px,
    })
}
