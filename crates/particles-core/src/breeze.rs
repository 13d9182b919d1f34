use glam::Vec2;

use crate::random::RandomSource;

/// Shared ambient drift applied to every free particle.
///
/// Its clock advances a fixed tick per frame; when it passes the period the
/// direction is redrawn.
#[derive(Clone, Debug)]
pub struct Breeze {
    direction: Vec2,
    clock: f32,
    magnitude: f32,
}

impl Breeze {
    pub fn new(magnitude: f32, rng: &mut dyn RandomSource) -> Self {
        Self {
            direction: random_direction(magnitude, rng),
            clock: 0.0,
            magnitude,
        }
    }

    /// Returns true when the direction was redrawn.
    pub fn tick(&mut self, tick: f32, period: f32, rng: &mut dyn RandomSource) -> bool {
        self.clock += tick;
        if self.clock > period {
            self.clock = 0.0;
            self.direction = random_direction(self.magnitude, rng);
            return true;
        }
        false
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }
}

fn random_direction(magnitude: f32, rng: &mut dyn RandomSource) -> Vec2 {
    let x = (rng.next_unit() - 0.5) * magnitude;
    let y = (rng.next_unit() - 0.5) * magnitude;
    Vec2::new(x, y)
}
