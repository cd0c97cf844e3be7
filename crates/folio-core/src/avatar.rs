//! Scroll-driven motion of the avatar along its path.
//!
//! Two exponential followers are chained every frame: progress trails the
//! scroll-derived target, and the position trails the path point at that
//! progress. Idle motion is layered on top as pure functions of time.

use crate::constants::*;
use crate::path::{clamp_progress, scroll_progress, ScrollPath};
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct MotionParams {
    pub progress_smoothing: f32,
    pub position_smoothing: f32,
    pub look_ahead: f32,
    pub facing_depth_bias: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            progress_smoothing: PROGRESS_SMOOTHING,
            position_smoothing: POSITION_SMOOTHING,
            look_ahead: FACING_LOOK_AHEAD,
            facing_depth_bias: FACING_DEPTH_BIAS,
        }
    }
}

/// Everything the rig needs to pose the figure for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AvatarPose {
    /// Root position including the idle bob.
    pub position: Vec3,
    pub yaw: f32,
    pub roll: f32,
    pub left_arm_x: f32,
    pub right_arm_x: f32,
    pub left_leg_x: f32,
    pub right_leg_x: f32,
    pub laptop_x: f32,
    pub ring_a_spin: f32,
    pub ring_b_spin: f32,
    pub glow_opacity: f32,
}

// Idle motion: (rate per ms, phase, amplitude)
const BOB: (f32, f32, f32) = (0.0022, 0.0, 0.08);
const ROLL: (f32, f32, f32) = (0.0016, 0.0, 0.05);
const LEFT_ARM: (f32, f32, f32) = (0.004, 0.0, 0.09);
const RIGHT_ARM: (f32, f32, f32) = (0.0034, 1.2, 0.1);
const RIGHT_ARM_REST: f32 = 0.58;
const LEFT_LEG: (f32, f32, f32) = (0.004, 0.6, 0.12);
const RIGHT_LEG: (f32, f32, f32) = (0.004, 3.4, 0.12);
const LAPTOP: (f32, f32, f32) = (0.0036, 0.0, 0.08);
const RING_A_RAD_PER_MS: f32 = 0.0003;
const RING_B_RAD_PER_MS: f32 = -0.00024;
const GLOW_RATE: f32 = 0.0032;
const GLOW_BASE: f32 = 0.16;
const GLOW_SWING: f32 = 0.08;

#[inline]
fn wave(t: f32, (rate, phase, amp): (f32, f32, f32)) -> f32 {
    (t * rate + phase).sin() * amp
}

impl AvatarPose {
    /// Idle (path-independent) parts of the pose at `time_ms`; position and
    /// yaw are left at zero.
    pub fn idle(time_ms: f64) -> Self {
        let t = time_ms as f32;
        let tau = std::f64::consts::TAU;
        Self {
            position: Vec3::new(0.0, wave(t, BOB), 0.0),
            yaw: 0.0,
            roll: wave(t, ROLL),
            left_arm_x: wave(t, LEFT_ARM),
            right_arm_x: RIGHT_ARM_REST + wave(t, RIGHT_ARM),
            left_leg_x: wave(t, LEFT_LEG),
            right_leg_x: wave(t, RIGHT_LEG),
            laptop_x: wave(t, LAPTOP),
            ring_a_spin: ((time_ms * RING_A_RAD_PER_MS as f64) % tau) as f32,
            ring_b_spin: ((time_ms * RING_B_RAD_PER_MS as f64) % tau) as f32,
            glow_opacity: GLOW_BASE + ((t * GLOW_RATE).sin() + 1.0) * GLOW_SWING,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AvatarMotion {
    path: ScrollPath,
    params: MotionParams,
    target_progress: f32,
    progress: f32,
    position: Vec3,
}

impl AvatarMotion {
    pub fn new(path: ScrollPath, params: MotionParams) -> Self {
        let position = path.point_at(0.0);
        Self {
            path,
            params,
            target_progress: 0.0,
            progress: 0.0,
            position,
        }
    }

    pub fn path(&self) -> &ScrollPath {
        &self.path
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn target_progress(&self) -> f32 {
        self.target_progress
    }

    /// Smoothed position, without idle bob.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_target_progress(&mut self, progress: f32) {
        self.target_progress = clamp_progress(progress);
    }

    pub fn set_scroll(&mut self, scroll_y: f64, scroll_height: f64, viewport_height: f64) {
        self.target_progress = scroll_progress(scroll_y, scroll_height, viewport_height);
    }

    /// Path point for the current target, before any smoothing.
    pub fn target_point(&self) -> Vec3 {
        self.path.point_at(self.target_progress)
    }

    /// Advance one frame and produce the pose for `time_ms`.
    pub fn tick(&mut self, time_ms: f64) -> AvatarPose {
        let p = &self.params;
        self.progress = clamp_progress(
            self.progress + (self.target_progress - self.progress) * p.progress_smoothing,
        );
        let goal = self.path.point_at(self.progress);
        self.position = self.position.lerp(goal, p.position_smoothing);

        let ahead = self.path.point_at((self.progress + p.look_ahead).min(1.0));
        let dir = ahead - self.position;
        let yaw = dir.x.atan2((dir.z + p.facing_depth_bias).max(0.001));

        let mut pose = AvatarPose::idle(time_ms);
        pose.position += self.position;
        pose.yaw = yaw;
        pose
    }
}
