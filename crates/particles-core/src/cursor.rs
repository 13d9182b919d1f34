use glam::Vec2;

/// Latest pointer sample in world space.
///
/// Written by the host's pointer listener and read once per frame; only the
/// most recent sample matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cursor {
    position: Vec2,
    speed: f32,
    has_moved: bool,
}

impl Cursor {
    /// Record a new sample; speed becomes the distance moved since the last one.
    pub fn move_to(&mut self, position: Vec2) {
        self.speed = position.distance(self.position);
        self.position = position;
        self.has_moved = true;
    }

    /// Per-frame exponential damping of the speed estimate.
    #[inline]
    pub fn decay(&mut self, factor: f32) {
        self.speed *= factor;
    }

    /// `None` until the pointer has moved at least once.
    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.has_moved.then_some(self.position)
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }
}
