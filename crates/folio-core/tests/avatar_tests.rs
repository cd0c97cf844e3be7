// Host-side tests for the scroll path, avatar motion and idle pose.

use folio_core::*;
use glam::Vec3;

fn close(a: Vec3, b: Vec3) -> bool {
    a.distance(b) < 1e-4
}

#[test]
fn scroll_progress_edges() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(2600.0, 3000.0, 1000.0), 1.0, "overscroll");
    assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0, "rubber band");
    assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0, "page shorter than viewport");
    assert_eq!(scroll_progress(50.0, 1000.0, 1000.0), 0.0, "page exactly one viewport");
}

#[test]
fn path_hits_waypoints_at_segment_boundaries() {
    let path = ScrollPath::default();
    assert_eq!(path.segments(), 4);
    assert_eq!(path.point_at(0.0), AVATAR_WAYPOINTS[0]);
    assert_eq!(path.point_at(0.25), AVATAR_WAYPOINTS[1]);
    assert_eq!(path.point_at(0.5), AVATAR_WAYPOINTS[2]);
    assert!(close(path.point_at(1.0), AVATAR_WAYPOINTS[4]));
    assert!(close(path.point_at(7.0), AVATAR_WAYPOINTS[4]));
    assert_eq!(path.point_at(-1.0), AVATAR_WAYPOINTS[0]);
    assert_eq!(path.point_at(f32::NAN), AVATAR_WAYPOINTS[0]);
}

#[test]
fn path_interpolates_within_a_segment() {
    let path = ScrollPath::new(vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 0.0)]).unwrap();
    assert!(close(path.point_at(0.25), Vec3::new(1.0, 0.0, 0.0)));
    assert!(close(path.point_at(0.75), Vec3::new(2.0, 2.0, 0.0)));
}

#[test]
fn path_needs_two_waypoints() {
    assert_eq!(ScrollPath::new(vec![]).unwrap_err(), FxError::PathTooShort(0));
    assert_eq!(
        ScrollPath::new(vec![Vec3::ONE]).unwrap_err(),
        FxError::PathTooShort(1)
    );
}

#[test]
fn motion_converges_to_target_point() {
    let mut motion = AvatarMotion::new(ScrollPath::default(), MotionParams::default());
    motion.set_scroll(4000.0, 5000.0, 1000.0);
    assert_eq!(motion.target_progress(), 1.0);
    assert!(close(motion.target_point(), AVATAR_WAYPOINTS[4]));

    let mut last = motion.progress();
    for frame in 0..2000 {
        motion.tick(frame as f64 * 16.0);
        let p = motion.progress();
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= last, "progress moves monotonically towards the target");
        last = p;
    }
    assert!((motion.progress() - 1.0).abs() < 1e-3);
    assert!(motion.position().distance(AVATAR_WAYPOINTS[4]) < 1e-2);
}

#[test]
fn motion_trails_instead_of_jumping() {
    let mut motion = AvatarMotion::new(ScrollPath::default(), MotionParams::default());
    motion.set_target_progress(1.0);
    motion.tick(0.0);
    assert!((motion.progress() - PROGRESS_SMOOTHING).abs() < 1e-6);
    assert!(motion.position().distance(AVATAR_WAYPOINTS[0]) < 0.1);

    motion.set_target_progress(3.0);
    assert_eq!(motion.target_progress(), 1.0);
    motion.set_target_progress(-3.0);
    assert_eq!(motion.target_progress(), 0.0);
}

#[test]
fn tick_layers_idle_pose_on_path_position() {
    let mut motion = AvatarMotion::new(ScrollPath::default(), MotionParams::default());
    let pose = motion.tick(1500.0);
    let idle = AvatarPose::idle(1500.0);
    assert!(close(pose.position, motion.position() + idle.position));
    assert_eq!(pose.right_arm_x, idle.right_arm_x);
    assert_eq!(pose.glow_opacity, idle.glow_opacity);
    assert!(pose.yaw.is_finite());
}

#[test]
fn idle_pose_stays_in_range() {
    for i in 0..500 {
        let pose = AvatarPose::idle(i as f64 * 37.3);
        assert!((0.16 - 1e-6..=0.32 + 1e-6).contains(&pose.glow_opacity));
        assert!(pose.position.y.abs() <= 0.08 + 1e-6);
        assert!(pose.ring_a_spin.abs() < std::f32::consts::TAU);
        assert!(pose.ring_b_spin.abs() < std::f32::consts::TAU);
    }
    let late = AvatarPose::idle(1.0e9);
    assert!(late.ring_a_spin.is_finite() && late.ring_a_spin.abs() < std::f32::consts::TAU);
}
