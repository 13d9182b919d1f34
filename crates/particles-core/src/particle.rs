//! Per-particle state and the per-frame motion update.
//!
//! A particle is free, attached to the cursor, or dispersing away from it.
//! Particles never interact with each other; each frame is an independent
//! transform of one particle against the single cursor point.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::constants::{
    BREEZE_EFFECT_FREQ, BROWNIAN_FREQ_X, BROWNIAN_FREQ_Y, PHASE_Y_RATIO, TWINKLE_DEPTH,
};
use crate::params::{DetachReference, FieldParams, SpawnRanges};
use crate::random::RandomSource;

/// Behavioural state. Exactly one variant holds at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Motion {
    #[default]
    Free,
    /// Pulled toward the cursor. `attach_point` is where the cursor was at
    /// capture, `capture_point` where the particle was.
    Attached {
        attach_point: Vec2,
        capture_point: Vec2,
        since: f64,
    },
    /// Pushed along `direction` with strength decaying to zero.
    Dispersing { since: f64, direction: Vec2 },
}

impl Motion {
    /// Start a dispersal away from the cursor; `to_cursor` points from the
    /// particle to the cursor.
    fn dispersing_from(to_cursor: Vec2, now: f64) -> Self {
        Motion::Dispersing {
            since: now,
            direction: (-to_cursor).normalize_or_zero(),
        }
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self, Motion::Free)
    }
}

/// Everything a particle reads from the outside world in one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInputs {
    /// Monotonic host clock in seconds.
    pub time: f64,
    /// `None` until the pointer has moved.
    pub cursor: Option<Vec2>,
    pub cursor_speed: f32,
    pub breeze: Vec2,
    pub detach_distance: f32,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub rest: Vec2,
    pub velocity: Vec2,
    pub phase: f32,
    pub phase_x: f32,
    pub phase_y: f32,
    pub drift_speed: f32,
    pub oscillation_speed: f32,
    pub oscillation_amplitude: f32,
    pub release_chance: f32,
    pub time_offset: f32,
    pub size: f32,
    pub motion: Motion,
}

impl Particle {
    /// A particle at `rest` with constants drawn from `ranges`.
    pub fn spawn(rest: Vec2, ranges: &SpawnRanges, rng: &mut dyn RandomSource) -> Self {
        let velocity = Vec2::new(
            ranges.velocity.lerp(rng.next_unit()),
            ranges.velocity.lerp(rng.next_unit()),
        );
        Self {
            position: rest,
            rest,
            velocity,
            phase: rng.next_unit() * TAU,
            phase_x: rng.next_unit() * TAU,
            phase_y: rng.next_unit() * TAU,
            drift_speed: ranges.drift_speed.lerp(rng.next_unit()),
            oscillation_speed: ranges.oscillation_speed.lerp(rng.next_unit()),
            oscillation_amplitude: ranges.oscillation_amplitude.lerp(rng.next_unit()),
            release_chance: ranges.release_chance.lerp(rng.next_unit()),
            time_offset: ranges.time_offset.lerp(rng.next_unit()),
            size: ranges.size.lerp(rng.next_unit()),
            motion: Motion::Free,
        }
    }

    /// A particle with no idle motion and no baseline release chance.
    pub fn still(rest: Vec2) -> Self {
        Self {
            position: rest,
            rest,
            velocity: Vec2::ZERO,
            phase: 0.0,
            phase_x: 0.0,
            phase_y: 0.0,
            drift_speed: 0.0,
            oscillation_speed: 0.0,
            oscillation_amplitude: 0.0,
            release_chance: 0.0,
            time_offset: 0.0,
            size: 0.015,
            motion: Motion::Free,
        }
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        matches!(self.motion, Motion::Attached { .. })
    }

    #[inline]
    pub fn is_dispersing(&self) -> bool {
        matches!(self.motion, Motion::Dispersing { .. })
    }

    /// Sprite opacity, gently modulated by the particle's own phase.
    #[inline]
    pub fn opacity(&self, base: f32) -> f32 {
        base * ((1.0 - TWINKLE_DEPTH) + TWINKLE_DEPTH * self.phase.sin())
    }

    /// Advance this particle by one frame.
    pub fn update(&mut self, frame: &FrameInputs, params: &FieldParams, rng: &mut dyn RandomSource) {
        self.phase += self.oscillation_speed;
        self.phase_x += self.oscillation_speed;
        self.phase_y += self.oscillation_speed * PHASE_Y_RATIO;

        if self.motion.is_free() {
            self.position += self.idle_step(frame);
        }

        if self.position.length() > params.containment_radius {
            self.position -= self.position * params.containment_leak;
        }

        if let Some(cursor) = frame.cursor {
            self.interact(cursor, frame, params, rng);
        }

        self.return_to_rest(frame.time, params);
    }

    fn idle_step(&self, frame: &FrameInputs) -> Vec2 {
        let t = frame.time;
        let offset = self.time_offset as f64;
        let brownian = Vec2::new(
            (t * BROWNIAN_FREQ_X as f64 + offset).sin() as f32,
            (t * BROWNIAN_FREQ_Y as f64 + offset).cos() as f32,
        ) * self.oscillation_amplitude;
        let drift = Vec2::new(self.phase_x.sin(), self.phase_y.cos()) * self.drift_speed;
        let breeze_effect = (t * BREEZE_EFFECT_FREQ as f64 + offset * 0.2).sin() as f32 * 0.3 + 0.7;
        brownian + drift + frame.breeze * breeze_effect + self.velocity
    }

    fn interact(
        &mut self,
        cursor: Vec2,
        frame: &FrameInputs,
        params: &FieldParams,
        rng: &mut dyn RandomSource,
    ) {
        let now = frame.time;
        let to_cursor = cursor - self.position;
        let distance = to_cursor.length();

        if self.motion.is_free() && distance < params.disperse_radius {
            self.motion = Motion::dispersing_from(to_cursor, now);
        }

        if let Motion::Dispersing { since, direction } = self.motion {
            let elapsed = (now - since) as f32;
            if elapsed > params.disperse_duration_sec {
                self.motion = Motion::Free;
            } else {
                let strength = params.disperse_strength * (1.0 - elapsed / params.disperse_duration_sec);
                self.position += direction * strength;
            }
            return;
        }

        if self.motion.is_free()
            && distance < params.influence_radius
            && distance >= params.disperse_radius
        {
            self.motion = Motion::Attached {
                attach_point: cursor,
                capture_point: self.position,
                since: now,
            };
        }

        if let Motion::Attached {
            attach_point,
            capture_point,
            since,
        } = self.motion
        {
            let origin = match params.detach_reference {
                DetachReference::CapturePoint => capture_point,
                DetachReference::AttachPoint => attach_point,
            };
            let travel = cursor.distance(origin);
            let attached_for = (now - since) as f32;
            let release_chance = (params.time_release_rate * attached_for).min(params.time_release_cap)
                + frame.cursor_speed * params.speed_release_gain
                + self.release_chance;

            if travel > frame.detach_distance
                || rng.next_unit() < release_chance
                || distance < params.disperse_radius
            {
                self.motion = if distance < params.disperse_radius {
                    Motion::dispersing_from(to_cursor, now)
                } else {
                    Motion::Free
                };
            } else {
                let decay = (1.0 - attached_for * params.attach_decay_per_sec)
                    .max(params.attach_strength_floor);
                let falloff = 1.0 - distance / params.influence_radius;
                self.position += to_cursor * params.attraction_strength * decay * falloff;
            }
        }
    }

    fn return_to_rest(&mut self, now: f64, params: &FieldParams) {
        let factor = match self.motion {
            Motion::Free => params.return_strength,
            Motion::Dispersing { since, .. } => {
                let progress = (now - since) as f32 / params.disperse_duration_sec;
                let start = params.disperse_return_fraction;
                if progress <= start {
                    return;
                }
                params.return_strength * (progress - start) / (1.0 - start)
            }
            Motion::Attached { .. } => return,
        };
        self.position += (self.rest - self.position) * factor;
    }
}
