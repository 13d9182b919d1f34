// Cursor trail easing, length cap, taper and visibility.

use glam::Vec2;
use particles_core::*;

fn make_trail() -> Trail {
    Trail::new(TrailParams::default()).expect("trail")
}

#[test]
fn first_follow_seeds_every_point_on_the_head() {
    let mut trail = make_trail();
    assert!(trail.segments().is_empty(), "nothing to draw before the pointer shows up");

    trail.follow(Vec2::new(40.0, 60.0));
    assert!(trail.points().iter().all(|p| *p == Vec2::new(40.0, 60.0)));
    // 30 points, widths 18 * (1 - i/30) all above the cutoff
    assert_eq!(trail.segments().len(), 29);
}

#[test]
fn points_ease_toward_their_predecessor() {
    let mut trail = make_trail();
    trail.follow(Vec2::ZERO);
    trail.follow(Vec2::new(100.0, 0.0));

    let pts = trail.points();
    assert_eq!(pts[0], Vec2::new(100.0, 0.0));
    assert!((pts[1].x - 45.0).abs() < 1e-4);
    assert!((pts[2].x - 20.25).abs() < 1e-4);
    assert!(pts[3].x < pts[2].x);
}

#[test]
fn trail_catches_up_with_a_resting_pointer() {
    let mut trail = make_trail();
    trail.follow(Vec2::ZERO);
    for _ in 0..400 {
        trail.follow(Vec2::new(300.0, 200.0));
    }
    let tail = *trail.points().last().expect("points");
    assert!(tail.distance(Vec2::new(300.0, 200.0)) < 0.5);
}

#[test]
fn total_length_is_capped() {
    let params = TrailParams {
        max_distance: 50.0,
        ..TrailParams::default()
    };
    let mut trail = Trail::new(params).expect("trail");
    trail.follow(Vec2::ZERO);
    trail.follow(Vec2::new(1000.0, 0.0));

    let segments = trail.segments();
    assert_eq!(segments.len(), 1);
    let s = segments[0];
    assert_eq!(s.from, Vec2::new(1000.0, 0.0));
    assert!((s.to.x - 450.0).abs() < 1e-3);
    assert!((s.width - 9.0).abs() < 1e-5);
    assert!((s.alpha - 0.125).abs() < 1e-6);
}

#[test]
fn thin_tail_segments_are_skipped() {
    let params = TrailParams {
        start_width: 2.0,
        ..TrailParams::default()
    };
    let mut trail = Trail::new(params).expect("trail");
    trail.follow(Vec2::new(10.0, 10.0));
    // widths 2 * (1 - i/30) >= 0.3 keeps i = 1..=25
    assert_eq!(trail.segments().len(), 25);
}

#[test]
fn segments_run_tail_first_with_colour_gradient() {
    let mut trail = make_trail();
    trail.follow(Vec2::ZERO);
    let segments = trail.segments();
    let start = Rgb::from_hex(0xAF00F1);
    let end = Rgb::from_hex(0xE8E2D3);

    let head = segments.last().expect("head segment");
    let tail = segments.first().expect("tail segment");
    assert_eq!(head.color, start.lerp(end, 1.0 / 30.0));
    assert_eq!(tail.color, start.lerp(end, 29.0 / 30.0));
    assert!(head.width > tail.width);
    assert!(head.alpha > tail.alpha);
    assert!(head.alpha <= 0.25);
}

#[test]
fn hidden_trail_draws_nothing() {
    let mut trail = make_trail();
    trail.follow(Vec2::new(5.0, 5.0));
    trail.set_hidden(true);
    assert!(trail.is_hidden());
    assert!(trail.segments().is_empty());

    trail.set_hidden(false);
    assert!(!trail.segments().is_empty());
}

#[test]
fn custom_colours_are_used() {
    let mut trail = make_trail().with_colors(Rgb::new(0, 0, 0), Rgb::new(0, 0, 0));
    trail.follow(Vec2::ZERO);
    assert!(trail.segments().iter().all(|s| s.color == Rgb::new(0, 0, 0)));
}

#[test]
fn too_short_trail_is_rejected() {
    let params = TrailParams {
        length: 1,
        ..TrailParams::default()
    };
    assert_eq!(Trail::new(params).err(), Some(ParamsError::TrailTooShort(1)));
}
