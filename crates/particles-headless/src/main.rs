use anyhow::Context;
use glam::Vec2;

use particles_core::{FieldParams, ParticleField, SeededRandom, StateCounts, Viewport};

const DEFAULT_FRAMES: u32 = 600;
const FRAME_RATE: f64 = 60.0;
const VIEWPORT_PX: (f32, f32) = (1920.0, 1080.0);
const SEED: u64 = 42;

// Lissajous cursor path, in world units and rad/sec
const PATH_AMPLITUDE: Vec2 = Vec2::new(3.5, 2.5);
const PATH_FREQ: (f32, f32) = (0.7, 1.1);

fn cursor_at(t: f64) -> Vec2 {
    let t = t as f32;
    Vec2::new(
        PATH_AMPLITUDE.x * (PATH_FREQ.0 * t).sin(),
        PATH_AMPLITUDE.y * (PATH_FREQ.1 * t).cos(),
    )
}

fn parse_frames() -> anyhow::Result<u32> {
    match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("frame count must be a non-negative integer, got {arg:?}")),
        None => Ok(DEFAULT_FRAMES),
    }
}

fn log_counts(second: u32, counts: StateCounts) {
    log::info!(
        "[t={:>3}s] free={} attached={} dispersing={}",
        second,
        counts.free,
        counts.attached,
        counts.dispersing
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let frames = parse_frames()?;
    let params = FieldParams::default();
    let viewport = Viewport::new(VIEWPORT_PX.0, VIEWPORT_PX.1).context("building viewport")?;
    let mut field = ParticleField::new(params, viewport, SeededRandom::new(SEED))
        .context("building particle field")?;
    log::info!(
        "particles-headless: {} particles, {} frames at {} Hz, detach distance {:.3}",
        field.particles().len(),
        frames,
        FRAME_RATE,
        field.detach_distance()
    );

    let frames_per_second = FRAME_RATE as u32;
    let mut peak = StateCounts::default();
    for frame in 0..frames {
        let t = frame as f64 / FRAME_RATE;
        field.pointer_moved(cursor_at(t));
        field.advance(t);

        let counts = field.state_counts();
        peak.attached = peak.attached.max(counts.attached);
        peak.dispersing = peak.dispersing.max(counts.dispersing);
        if (frame + 1) % frames_per_second == 0 {
            log_counts((frame + 1) / frames_per_second, counts);
        }
    }

    let drift = field
        .particles()
        .iter()
        .map(|p| p.position.distance(p.rest))
        .fold(0.0_f32, f32::max);
    log::info!(
        "done: peak attached={} peak dispersing={} max distance from rest={:.3}",
        peak.attached,
        peak.dispersing,
        drift
    );
    Ok(())
}
