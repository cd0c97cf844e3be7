// Host-side tests for reveal, section highlight, pointer and tilt logic.

use folio_core::*;

fn seen(id: u32, ratio: f64) -> Visibility {
    Visibility {
        id,
        is_intersecting: ratio > 0.0,
        ratio,
    }
}

#[test]
fn reveal_fires_once_per_element() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.observe(1));
    assert!(tracker.observe(2));
    assert!(!tracker.observe(1), "double observe is a no-op");

    assert!(tracker.on_entries(&[seen(1, 0.05)]).is_empty());
    assert!(!tracker.is_shown(1));

    assert_eq!(tracker.on_entries(&[seen(1, 0.5), seen(2, 0.0)]), vec![1]);
    assert!(tracker.is_shown(1));
    assert_eq!(tracker.watching_count(), 1);

    // leaving and re-entering never reports again
    assert!(tracker.on_entries(&[seen(1, 0.0)]).is_empty());
    assert!(tracker.on_entries(&[seen(1, 1.0)]).is_empty());
    assert!(tracker.is_shown(1));
    assert!(!tracker.observe(1));
}

#[test]
fn reveal_uses_configured_threshold() {
    let mut tracker = RevealTracker::new(0.5);
    tracker.observe(7);
    assert!(tracker.on_entries(&[seen(7, REVEAL_THRESHOLD)]).is_empty());
    assert_eq!(tracker.on_entries(&[seen(7, 0.5)]), vec![7]);
}

#[test]
fn reveal_ignores_unobserved_ids() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.on_entries(&[seen(3, 1.0)]).is_empty());
    assert!(!tracker.is_shown(3));
}

fn hit(id: &str, is_intersecting: bool) -> SectionHit<'_> {
    SectionHit {
        id,
        is_intersecting,
    }
}

#[test]
fn reveal_reaches_elements_taller_than_the_viewport() {
    // 8 viewports tall: at most 0.125 of it is ever visible
    let full = reachable_ratio(0.125, 8000.0, 1000.0);
    assert!((full - 1.0).abs() < 1e-9);
    let mut tracker = RevealTracker::default();
    tracker.observe(3);
    assert!(tracker.on_entries(&[seen(3, 0.125)]).is_empty());
    assert_eq!(
        tracker.on_entries(&[seen(3, reachable_ratio(0.03, 8000.0, 1000.0))]),
        vec![3]
    );

    // short elements and bad sizes are untouched
    assert_eq!(reachable_ratio(0.2, 300.0, 1000.0), 0.2);
    assert_eq!(reachable_ratio(0.2, 0.0, 1000.0), 0.2);
    assert_eq!(reachable_ratio(0.2, f64::NAN, 1000.0), 0.2);
}

#[test]
fn highlight_picks_topmost_regardless_of_batch_order() {
    let mut a = SectionHighlighter::default();
    let mut b = SectionHighlighter::default();
    assert_eq!(
        a.apply_batch(&[hit("skills", true), hit("projects", true)]),
        Some("projects")
    );
    assert_eq!(
        b.apply_batch(&[hit("projects", true), hit("skills", true)]),
        Some("projects")
    );
    assert_eq!(a.active(), b.active());
}

#[test]
fn highlight_keeps_state_when_nothing_enters() {
    let mut h = SectionHighlighter::default();
    h.apply_batch(&[hit("education", true)]);
    assert_eq!(h.apply_batch(&[hit("education", false)]), None);
    assert_eq!(h.active(), Some("education"));
}

#[test]
fn highlight_moves_to_next_section_when_upper_one_left() {
    let mut h = SectionHighlighter::default();
    h.apply_batch(&[hit("projects", true), hit("skills", true)]);
    assert_eq!(h.active(), Some("projects"));
    assert_eq!(
        h.apply_batch(&[hit("projects", false), hit("education", true)]),
        Some("skills")
    );
}

#[test]
fn highlight_follows_when_upper_section_leaves_alone() {
    let mut h = SectionHighlighter::default();
    assert_eq!(h.apply_batch(&[hit("projects", true)]), Some("projects"));
    assert_eq!(h.apply_batch(&[hit("skills", true)]), Some("projects"));
    assert_eq!(h.apply_batch(&[hit("projects", false)]), Some("skills"));
    assert_eq!(h.active(), Some("skills"));

    // scrolling back up hands it over again
    assert_eq!(h.apply_batch(&[hit("projects", true)]), Some("projects"));
    assert_eq!(h.apply_batch(&[hit("skills", false)]), Some("projects"));
}

#[test]
fn highlight_reaches_last_section_at_page_bottom() {
    let mut h = SectionHighlighter::default();
    h.apply_batch(&[hit("education", true), hit("contact", true)]);
    assert_eq!(h.active(), Some("education"));
    assert_eq!(h.apply_batch(&[hit("education", false)]), Some("contact"));
}

#[test]
fn highlight_ignores_unknown_sections() {
    let mut h = SectionHighlighter::default();
    assert_eq!(h.apply_batch(&[hit("about", true)]), None);
    assert_eq!(h.active(), None);
    assert_eq!(SectionHighlighter::href_for("contact"), "#contact");
}

#[test]
fn pointer_starts_centered_and_tracks_glow() {
    let p = PointerState::centered(1920.0, 1080.0);
    assert_eq!((p.x, p.y), (960.0, 540.0));
    assert_eq!(p.glow_opacity(), GLOW_OPACITY_VISIBLE);

    let moved = p.moved_to(10.0, 20.5);
    assert_eq!(moved.position(), glam::Vec2::new(10.0, 20.5));
    let left = PointerState {
        inside: false,
        ..moved
    };
    assert_eq!(left.glow_opacity(), 0.0);
    assert_eq!(css_px(20.5), "20.5px");
}

#[test]
fn tilt_is_zero_at_panel_centre_and_bounded_at_corners() {
    let params = TiltParams::default();
    let rect = PanelRect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 200.0,
    };
    let centre = tilt_for(rect, 300.0, 150.0, &params).unwrap();
    assert_eq!(centre.rotate_x_deg, 0.0);
    assert_eq!(centre.rotate_y_deg, 0.0);

    let top_left = tilt_for(rect, 100.0, 50.0, &params).unwrap();
    assert_eq!(top_left.rotate_y_deg, -4.0);
    assert_eq!(top_left.rotate_x_deg, 3.5);

    let far_outside = tilt_for(rect, 5000.0, 5000.0, &params).unwrap();
    assert_eq!(far_outside.rotate_y_deg, 4.0);
    assert_eq!(far_outside.rotate_x_deg, -3.5);
}

#[test]
fn tilt_css_and_degenerate_rects() {
    let params = TiltParams::default();
    let t = Tilt {
        rotate_x_deg: 1.5,
        rotate_y_deg: -2.0,
        lift_px: 4.0,
    };
    assert_eq!(
        t.to_css(&params),
        "perspective(1200px) rotateX(1.500deg) rotateY(-2.000deg) translateY(-4px)"
    );
    let empty = PanelRect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 10.0,
    };
    assert!(tilt_for(empty, 0.0, 0.0, &params).is_none());
    assert_eq!(params.disable_query(), "(max-width: 980px)");
}
