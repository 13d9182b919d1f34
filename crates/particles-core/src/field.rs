//! The particle field: every particle plus the shared frame state they read
//! (cursor, breeze, detach distance).
//!
//! Hosts own a `ParticleField`, feed it pointer samples as they arrive and
//! call [`ParticleField::advance`] once per display refresh.

use glam::Vec2;

use crate::breeze::Breeze;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::params::FieldParams;
use crate::particle::{FrameInputs, Particle};
use crate::random::RandomSource;
use crate::viewport::Viewport;

/// Render-facing snapshot of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub position: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateCounts {
    pub free: usize,
    pub attached: usize,
    pub dispersing: usize,
}

pub struct ParticleField<R: RandomSource> {
    particles: Vec<Particle>,
    cursor: Cursor,
    breeze: Breeze,
    params: FieldParams,
    viewport: Viewport,
    detach_distance: f32,
    rng: R,
}

impl<R: RandomSource> ParticleField<R> {
    /// Spawn `params.particle_count` particles with rest positions spread
    /// uniformly over the viewport's world square.
    pub fn new(params: FieldParams, viewport: Viewport, mut rng: R) -> Result<Self> {
        params.validate()?;
        let particles = (0..params.particle_count)
            .map(|_| {
                let rest = random_rest_position(&viewport, &mut rng);
                Particle::spawn(rest, &params.spawn, &mut rng)
            })
            .collect::<Vec<_>>();
        let breeze = Breeze::new(params.breeze_magnitude, &mut rng);
        let detach_distance = viewport.world_length(params.detach_screen_px);
        log::debug!(
            "[field] spawned {} particles, viewport {}x{} px, detach distance {:.4}",
            particles.len(),
            viewport.width_px(),
            viewport.height_px(),
            detach_distance
        );
        Ok(Self {
            particles,
            cursor: Cursor::default(),
            breeze,
            params,
            viewport,
            detach_distance,
            rng,
        })
    }

    /// Build a field around caller-provided particles. `params.particle_count`
    /// is replaced by the number supplied; an empty set is rejected.
    pub fn from_particles(
        particles: Vec<Particle>,
        mut params: FieldParams,
        viewport: Viewport,
        mut rng: R,
    ) -> Result<Self> {
        params.particle_count = particles.len();
        params.validate()?;
        let breeze = Breeze::new(params.breeze_magnitude, &mut rng);
        let detach_distance = viewport.world_length(params.detach_screen_px);
        Ok(Self {
            particles,
            cursor: Cursor::default(),
            breeze,
            params,
            viewport,
            detach_distance,
            rng,
        })
    }

    /// Record a pointer sample already in world coordinates.
    #[inline]
    pub fn pointer_moved(&mut self, world: Vec2) {
        self.cursor.move_to(world);
    }

    /// Record a pointer sample in client pixels.
    #[inline]
    pub fn pointer_moved_px(&mut self, px: f32, py: f32) {
        let world = self.viewport.to_world(px, py);
        self.cursor.move_to(world);
    }

    /// Advance every particle by one frame at host time `time_sec`.
    pub fn advance(&mut self, time_sec: f64) {
        if self.breeze.tick(
            self.params.breeze_tick,
            self.params.breeze_period,
            &mut self.rng,
        ) {
            log::trace!("[field] breeze reoriented at t={:.2}", time_sec);
        }
        self.cursor.decay(self.params.cursor_speed_decay);

        let frame = FrameInputs {
            time: time_sec,
            cursor: self.cursor.position(),
            cursor_speed: self.cursor.speed(),
            breeze: self.breeze.direction(),
            detach_distance: self.detach_distance,
        };
        for p in &mut self.particles {
            p.update(&frame, &self.params, &mut self.rng);
        }
    }

    /// Adopt a new viewport; the detach distance follows its width. Rest
    /// positions are left alone, see [`Self::redistribute_rest_positions`].
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.detach_distance = viewport.world_length(self.params.detach_screen_px);
        log::debug!(
            "[field] resized to {}x{} px, detach distance {:.4}",
            viewport.width_px(),
            viewport.height_px(),
            self.detach_distance
        );
    }

    /// Resize from raw pixel dimensions; an empty size is rejected and the
    /// field keeps its previous viewport.
    pub fn resize_px(&mut self, width_px: f32, height_px: f32) -> Result<()> {
        let viewport = Viewport::with_half_extent(width_px, height_px, self.viewport.half_extent())?;
        self.resize(viewport);
        Ok(())
    }

    /// Draw fresh rest positions across the current viewport.
    pub fn redistribute_rest_positions(&mut self) {
        for p in &mut self.particles {
            p.rest = random_rest_position(&self.viewport, &mut self.rng);
        }
    }

    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        let base = self.params.base_opacity;
        self.particles.iter().map(move |p| Sprite {
            position: p.position,
            scale: p.size,
            opacity: p.opacity(base),
        })
    }

    pub fn state_counts(&self) -> StateCounts {
        self.particles
            .iter()
            .fold(StateCounts::default(), |mut counts, p| {
                if p.is_attached() {
                    counts.attached += 1;
                } else if p.is_dispersing() {
                    counts.dispersing += 1;
                } else {
                    counts.free += 1;
                }
                counts
            })
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn detach_distance(&self) -> f32 {
        self.detach_distance
    }
}

fn random_rest_position(viewport: &Viewport, rng: &mut dyn RandomSource) -> Vec2 {
    let h = viewport.half_extent();
    Vec2::new(
        (rng.next_unit() - 0.5) * 2.0 * h,
        (rng.next_unit() - 0.5) * 2.0 * h,
    )
}
