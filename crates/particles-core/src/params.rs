//! Tunable parameters for the particle field and the cursor trail.
//!
//! Several page variants share the same state machine with different radii
//! and speeds; each is just another `FieldParams` value. `Default` carries the
//! tuning of the ambient background.

use crate::constants::*;
use crate::error::{ParamsError, Result};

/// Half-open `[min, max)` range used for per-particle random constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Map a unit sample in `[0, 1)` into the range.
    #[inline]
    pub fn lerp(&self, unit: f32) -> f32 {
        self.min + (self.max - self.min) * unit
    }

    fn validate(&self, name: &'static str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ParamsError::InvertedRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl From<(f32, f32)> for Range {
    fn from((min, max): (f32, f32)) -> Self {
        Self::new(min, max)
    }
}

/// Ranges the per-particle constants are drawn from at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnRanges {
    pub drift_speed: Range,
    pub oscillation_speed: Range,
    pub oscillation_amplitude: Range,
    pub release_chance: Range,
    pub time_offset: Range,
    pub velocity: Range,
    pub size: Range,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            drift_speed: DRIFT_SPEED_RANGE.into(),
            oscillation_speed: OSCILLATION_SPEED_RANGE.into(),
            oscillation_amplitude: OSCILLATION_AMPLITUDE_RANGE.into(),
            release_chance: RELEASE_CHANCE_RANGE.into(),
            time_offset: TIME_OFFSET_RANGE.into(),
            velocity: VELOCITY_RANGE.into(),
            size: SIZE_RANGE.into(),
        }
    }
}

impl SpawnRanges {
    fn validate(&self) -> Result<()> {
        self.drift_speed.validate("drift_speed")?;
        self.oscillation_speed.validate("oscillation_speed")?;
        self.oscillation_amplitude.validate("oscillation_amplitude")?;
        self.release_chance.validate("release_chance")?;
        self.time_offset.validate("time_offset")?;
        self.velocity.validate("velocity")?;
        self.size.validate("size")
    }
}

/// Point an attached particle's cursor travel is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetachReference {
    /// Where the particle was at capture.
    #[default]
    CapturePoint,
    /// Where the cursor was at capture. Attachments then hold until the
    /// cursor itself moves past the detach distance.
    AttachPoint,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub particle_count: usize,
    pub influence_radius: f32,
    pub disperse_radius: f32,
    pub attraction_strength: f32,
    pub attach_decay_per_sec: f32,
    pub attach_strength_floor: f32,
    pub time_release_rate: f32,
    pub time_release_cap: f32,
    pub speed_release_gain: f32,
    pub detach_screen_px: f32,
    pub detach_reference: DetachReference,
    pub disperse_strength: f32,
    pub disperse_duration_sec: f32,
    pub disperse_return_fraction: f32,
    pub return_strength: f32,
    pub containment_radius: f32,
    pub containment_leak: f32,
    pub cursor_speed_decay: f32,
    pub breeze_tick: f32,
    pub breeze_period: f32,
    pub breeze_magnitude: f32,
    pub base_opacity: f32,
    pub spawn: SpawnRanges,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            influence_radius: INFLUENCE_RADIUS,
            disperse_radius: DISPERSE_RADIUS,
            attraction_strength: ATTRACTION_STRENGTH,
            attach_decay_per_sec: ATTACH_DECAY_PER_SEC,
            attach_strength_floor: ATTACH_STRENGTH_FLOOR,
            time_release_rate: TIME_RELEASE_RATE,
            time_release_cap: TIME_RELEASE_CAP,
            speed_release_gain: SPEED_RELEASE_GAIN,
            detach_screen_px: DETACH_SCREEN_PX,
            detach_reference: DetachReference::default(),
            disperse_strength: DISPERSE_STRENGTH,
            disperse_duration_sec: DISPERSE_DURATION_SEC,
            disperse_return_fraction: DISPERSE_RETURN_FRACTION,
            return_strength: RETURN_STRENGTH,
            containment_radius: CONTAINMENT_RADIUS,
            containment_leak: CONTAINMENT_LEAK,
            cursor_speed_decay: CURSOR_SPEED_DECAY,
            breeze_tick: BREEZE_TICK,
            breeze_period: BREEZE_PERIOD,
            breeze_magnitude: BREEZE_MAGNITUDE,
            base_opacity: BASE_OPACITY,
            spawn: SpawnRanges::default(),
        }
    }
}

impl FieldParams {
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(ParamsError::NoParticles);
        }
        positive("influence_radius", self.influence_radius)?;
        positive("disperse_radius", self.disperse_radius)?;
        if self.disperse_radius >= self.influence_radius {
            return Err(ParamsError::RadiiOutOfOrder {
                disperse: self.disperse_radius,
                influence: self.influence_radius,
            });
        }
        positive("attraction_strength", self.attraction_strength)?;
        positive("detach_screen_px", self.detach_screen_px)?;
        positive("disperse_strength", self.disperse_strength)?;
        positive("disperse_duration_sec", self.disperse_duration_sec)?;
        positive("return_strength", self.return_strength)?;
        positive("containment_radius", self.containment_radius)?;
        positive("breeze_tick", self.breeze_tick)?;
        positive("breeze_period", self.breeze_period)?;
        fraction("attach_strength_floor", self.attach_strength_floor)?;
        fraction("disperse_return_fraction", self.disperse_return_fraction)?;
        // The ramp divides by the remaining share of the dispersal.
        if self.disperse_return_fraction >= 1.0 {
            return Err(ParamsError::NotAFraction {
                name: "disperse_return_fraction",
                value: self.disperse_return_fraction,
            });
        }
        fraction("containment_leak", self.containment_leak)?;
        fraction("cursor_speed_decay", self.cursor_speed_decay)?;
        fraction("base_opacity", self.base_opacity)?;
        self.spawn.validate()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailParams {
    pub length: usize,
    pub smoothing: f32,
    pub start_width: f32,
    pub min_width: f32,
    pub max_distance: f32,
    pub max_alpha: f32,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            length: TRAIL_LENGTH,
            smoothing: TRAIL_SMOOTHING,
            start_width: TRAIL_START_WIDTH,
            min_width: TRAIL_MIN_WIDTH,
            max_distance: TRAIL_MAX_DISTANCE,
            max_alpha: TRAIL_MAX_ALPHA,
        }
    }
}

impl TrailParams {
    pub fn validate(&self) -> Result<()> {
        if self.length < 2 {
            return Err(ParamsError::TrailTooShort(self.length));
        }
        fraction("smoothing", self.smoothing)?;
        positive("start_width", self.start_width)?;
        positive("max_distance", self.max_distance)?;
        fraction("max_alpha", self.max_alpha)
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}

fn fraction(name: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParamsError::NotAFraction { name, value })
    }
}
