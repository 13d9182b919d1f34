// Per-particle motion update: state transitions, forces and containment.

use glam::Vec2;
use particles_core::*;

const DETACH: f32 = 0.26;

fn frame(time: f64, cursor: Option<Vec2>) -> FrameInputs {
    FrameInputs {
        time,
        cursor,
        cursor_speed: 0.0,
        breeze: Vec2::ZERO,
        detach_distance: DETACH,
    }
}

fn never_release() -> ScriptedRandom {
    ScriptedRandom::constant(0.99)
}

/// Travel measured from the cursor's capture position, so attachments
/// survive the frame they start on.
fn held() -> FieldParams {
    FieldParams {
        detach_reference: DetachReference::AttachPoint,
        ..FieldParams::default()
    }
}

#[test]
fn cursor_on_top_of_particle_starts_dispersal_away_from_it() {
    let params = FieldParams::default();
    let mut rng = never_release();
    let mut p = Particle::still(Vec2::new(2.0, 2.0));

    p.update(&frame(10.0, Some(Vec2::new(2.0, 2.05))), &params, &mut rng);

    match p.motion {
        Motion::Dispersing { since, direction } => {
            assert_eq!(since, 10.0);
            assert!((direction - Vec2::new(0.0, -1.0)).length() < 1e-5, "{direction:?}");
        }
        other => panic!("expected dispersing, got {other:?}"),
    }
    assert!(p.position.y < 2.0);
    assert!((p.position.x - 2.0).abs() < 1e-6);
}

#[test]
fn distant_cursor_leaves_idle_motion_untouched() {
    let params = FieldParams::default();
    let mut spawn_rng = SeededRandom::new(3);
    let base = Particle::spawn(Vec2::ZERO, &params.spawn, &mut spawn_rng);

    let mut with_cursor = base.clone();
    let mut without_cursor = base.clone();
    let mut rng_a = never_release();
    let mut rng_b = never_release();
    for i in 0..30 {
        let t = 1.0 + i as f64 / 60.0;
        with_cursor.update(&frame(t, Some(Vec2::new(5.0, 5.0))), &params, &mut rng_a);
        without_cursor.update(&frame(t, None), &params, &mut rng_b);
        assert!(with_cursor.motion.is_free());
    }
    assert_eq!(with_cursor.position, without_cursor.position);
    assert_ne!(with_cursor.position, Vec2::ZERO, "idle motion should still move it");
}

#[test]
fn entering_influence_ring_attaches_once() {
    let params = held();
    let mut rng = never_release();
    let mut p = Particle::still(Vec2::ZERO);
    let cursor = Vec2::new(0.0, 2.5);

    p.update(&frame(0.0, Some(cursor)), &params, &mut rng);
    let first = p.motion;
    assert!(p.is_attached());

    let mut last_distance = cursor.distance(p.position);
    for i in 1..10 {
        p.update(&frame(i as f64 / 60.0, Some(cursor)), &params, &mut rng);
        assert_eq!(p.motion, first, "capture must not be re-recorded while attached");
        let d = cursor.distance(p.position);
        assert!(d < last_distance, "attached particle should be pulled in");
        last_distance = d;
    }
    assert!(last_distance >= params.disperse_radius);
}

#[test]
fn attach_records_cursor_and_particle_positions() {
    let params = held();
    let mut rng = never_release();
    let mut p = Particle::still(Vec2::new(1.0, 1.0));

    p.update(&frame(4.0, Some(Vec2::new(1.0, 3.5))), &params, &mut rng);

    match p.motion {
        Motion::Attached {
            attach_point,
            capture_point,
            since,
        } => {
            assert_eq!(attach_point, Vec2::new(1.0, 3.5));
            assert_eq!(capture_point, Vec2::new(1.0, 1.0));
            assert_eq!(since, 4.0);
        }
        other => panic!("expected attached, got {other:?}"),
    }
    // 0.04 * 1.0 * (1 - 2.5 / 3.0) of the 2.5 gap
    let expected_y = 1.0 + 2.5 * 0.04 * (1.0 - 2.5 / 3.0);
    assert!((p.position.y - expected_y).abs() < 1e-5);
}

#[test]
fn attachment_from_capture_point_ends_on_its_first_frame() {
    let params = FieldParams::default();
    let mut rng = never_release();
    let mut p = Particle::still(Vec2::ZERO);

    // Captured 2.5 from the cursor, which is already past the detach distance.
    p.update(&frame(0.0, Some(Vec2::new(0.0, 2.5))), &params, &mut rng);
    assert!(p.motion.is_free());
    assert_eq!(p.position, Vec2::ZERO);
}

#[test]
fn cursor_travel_from_capture_point_releases_regardless_of_roll() {
    let params = FieldParams::default();
    let mut rng = never_release();
    let mut p = Particle::still(Vec2::new(1.0, 1.0));
    p.motion = Motion::Attached {
        attach_point: Vec2::new(1.0, 3.5),
        capture_point: Vec2::new(1.0, 1.0),
        since: 0.0,
    };

    // About 2.5 from (1, 1): released even though the roll never fires.
    p.update(&frame(0.1, Some(Vec2::new(1.1, 3.5))), &params, &mut rng);
    assert!(p.motion.is_free());
}

#[test]
fn cursor_travel_from_attach_point_releases_regardless_of_roll() {
    let params = held();
    let mut rng = never_release();
    // Captured at (1, 1) while the cursor sat at (1, 3.5).
    let mut p = Particle::still(Vec2::new(1.0, 1.0));
    p.motion = Motion::Attached {
        attach_point: Vec2::new(1.0, 3.5),
        capture_point: Vec2::new(1.0, 1.0),
        since: 0.0,
    };

    // Cursor nudged less than the detach distance: stays attached.
    p.update(&frame(0.1, Some(Vec2::new(1.1, 3.5))), &params, &mut rng);
    assert!(p.is_attached());

    p.update(&frame(0.2, Some(Vec2::new(3.5, 3.5))), &params, &mut rng);
    assert!(p.motion.is_free());
}

#[test]
fn attached_particle_too_close_to_cursor_switches_to_dispersing() {
    let params = FieldParams::default();
    let mut rng = never_release();
    let mut p = Particle::still(Vec2::ZERO);
    p.motion = Motion::Attached {
        attach_point: Vec2::new(0.0, 1.0),
        capture_point: Vec2::ZERO,
        since: 0.0,
    };
    let mut f = frame(0.5, Some(Vec2::new(0.0, 1.0)));
    f.detach_distance = 10.0;

    p.update(&f, &params, &mut rng);

    match p.motion {
        Motion::Dispersing { since, direction } => {
            assert_eq!(since, 0.5);
            assert!((direction - Vec2::new(0.0, -1.0)).length() < 1e-5);
        }
        other => panic!("expected dispersing, got {other:?}"),
    }
}

#[test]
fn scripted_roll_forces_release() {
    let params = held();
    let mut rng = ScriptedRandom::new(vec![0.99, 0.0]);
    let mut p = Particle::still(Vec2::ZERO);
    p.release_chance = 0.02;
    let cursor = Some(Vec2::new(0.0, 2.5));

    p.update(&frame(0.0, cursor), &params, &mut rng);
    assert!(p.is_attached());
    p.update(&frame(1.0 / 60.0, cursor), &params, &mut rng);
    assert!(p.motion.is_free());
}

#[test]
fn cursor_speed_raises_release_probability() {
    let params = held();
    let cursor = Some(Vec2::new(0.0, 2.5));
    let mut p = Particle::still(Vec2::ZERO);
    let mut rng = ScriptedRandom::constant(0.5);

    // No speed: 0.5 exceeds the release chance, stays attached.
    p.update(&frame(0.0, cursor), &params, &mut rng);
    assert!(p.is_attached());

    let mut fast = frame(0.1, cursor);
    fast.cursor_speed = 0.3; // contributes 0.6
    p.update(&fast, &params, &mut rng);
    assert!(p.motion.is_free());
}

#[test]
fn dispersal_force_decays_then_expires() {
    let params = FieldParams::default();
    let mut rng = never_release();
    let mut p = Particle::still(Vec2::ZERO);
    let cursor = Some(Vec2::new(0.0, 0.5));

    let mut previous_step = f32::MAX;
    let mut t = 0.0;
    // Up to 60% of the duration no return-to-rest term interferes.
    while t <= 1.25 {
        let before = p.position;
        p.update(&frame(t, cursor), &params, &mut rng);
        assert!(p.is_dispersing());
        let step = before.distance(p.position);
        assert!(step < previous_step, "force must shrink over time");
        previous_step = step;
        t += 0.25;
    }
    while t <= 2.0 {
        p.update(&frame(t, cursor), &params, &mut rng);
        assert!(p.is_dispersing());
        t += 0.25;
    }
    p.update(&frame(2.25, cursor), &params, &mut rng);
    assert!(!p.is_dispersing());
    assert!(!p.is_attached());
}

#[test]
fn return_to_rest_ramps_in_over_final_part_of_dispersal() {
    let params = FieldParams::default();
    let mut rng = never_release();
    let dispersing = Motion::Dispersing {
        since: 0.0,
        direction: Vec2::X,
    };

    let mut early = Particle::still(Vec2::ZERO);
    early.position = Vec2::new(1.0, 0.0);
    early.motion = dispersing;
    early.update(&frame(1.0, None), &params, &mut rng);
    assert_eq!(early.position, Vec2::new(1.0, 0.0));

    let mut late = early.clone();
    late.update(&frame(1.5, None), &params, &mut rng);
    let ramped = 1.0 - late.position.x;
    let expected = params.return_strength * (0.75 - 0.7) / 0.3;
    assert!((ramped - expected).abs() < 1e-6, "{ramped} vs {expected}");

    let mut end = early.clone();
    end.update(&frame(2.0, None), &params, &mut rng);
    assert!((1.0 - end.position.x - params.return_strength).abs() < 1e-6);
}

#[test]
fn free_particle_eases_back_to_rest() {
    let params = FieldParams::default();
    let mut rng = never_release();
    let mut p = Particle::still(Vec2::new(1.0, -1.0));
    p.position = Vec2::new(2.0, -1.0);

    p.update(&frame(0.0, None), &params, &mut rng);
    assert!((p.position.x - (2.0 - params.return_strength)).abs() < 1e-6);
}

#[test]
fn particle_outside_containment_radius_moves_inward() {
    let params = FieldParams::default();
    let mut rng = never_release();
    let mut p = Particle::still(Vec2::new(4.0, 4.0));
    let before = p.position.length();
    assert!(before > params.containment_radius);

    p.update(&frame(0.0, None), &params, &mut rng);
    assert!(p.position.length() < before);
}

#[test]
fn particle_inside_containment_radius_is_not_pulled() {
    let params = FieldParams::default();
    let mut rng = never_release();
    let mut p = Particle::still(Vec2::new(3.0, 0.0));

    p.update(&frame(0.0, None), &params, &mut rng);
    assert_eq!(p.position, Vec2::new(3.0, 0.0));
}

#[test]
fn spawn_draws_constants_within_ranges() {
    let ranges = SpawnRanges::default();
    let mut rng = SeededRandom::new(11);
    for _ in 0..200 {
        let p = Particle::spawn(Vec2::ZERO, &ranges, &mut rng);
        assert!(p.drift_speed >= ranges.drift_speed.min && p.drift_speed <= ranges.drift_speed.max);
        assert!(p.release_chance >= 0.01 && p.release_chance <= 0.04);
        assert!(p.size >= 0.010 && p.size <= 0.020);
        assert!(p.velocity.x.abs() <= 0.0005 && p.velocity.y.abs() <= 0.0005);
        assert!((0.0..=std::f32::consts::TAU).contains(&p.phase_x));
        assert!(p.motion.is_free());
    }
}

#[test]
fn opacity_stays_near_base() {
    let mut p = Particle::still(Vec2::ZERO);
    for i in 0..64 {
        p.phase = i as f32 * 0.1;
        let o = p.opacity(0.8);
        assert!((0.8 * 0.7 - 1e-6..=0.8 + 1e-6).contains(&o), "{o}");
    }
}
