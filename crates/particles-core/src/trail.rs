//! Smoothed cursor trail in screen pixels.
//!
//! The head point sits on the pointer; every following point closes a fixed
//! share of the gap to the point ahead of it each frame, which turns the chain
//! into a tapering curve behind a moving cursor.

use glam::Vec2;

use crate::color::Rgb;
use crate::constants::{TRAIL_END_HEX, TRAIL_START_HEX};
use crate::error::Result;
use crate::params::TrailParams;

/// One drawable piece of the trail, from `from` (closer to the head) to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Rgb,
    pub alpha: f32,
}

#[derive(Clone, Debug)]
pub struct Trail {
    points: Vec<Vec2>,
    params: TrailParams,
    start_color: Rgb,
    end_color: Rgb,
    seeded: bool,
    hidden: bool,
}

impl Trail {
    pub fn new(params: TrailParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            points: vec![Vec2::ZERO; params.length],
            params,
            start_color: Rgb::from_hex(TRAIL_START_HEX),
            end_color: Rgb::from_hex(TRAIL_END_HEX),
            seeded: false,
            hidden: false,
        })
    }

    pub fn with_colors(mut self, start: Rgb, end: Rgb) -> Self {
        self.start_color = start;
        self.end_color = end;
        self
    }

    /// Move the head to `head` and ease the rest of the chain one frame.
    /// The first call places every point on the head.
    pub fn follow(&mut self, head: Vec2) {
        if !self.seeded {
            self.points.fill(head);
            self.seeded = true;
            return;
        }
        self.points[0] = head;
        let ease = self.params.smoothing;
        for i in 1..self.points.len() {
            let ahead = self.points[i - 1];
            let current = self.points[i];
            self.points[i] = current + (ahead - current) * ease;
        }
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of leading points drawn: the walk stops once the accumulated
    /// length reaches the configured maximum.
    fn visible_count(&self) -> usize {
        let mut count = 0;
        let mut total = 0.0;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                total += p.distance(self.points[i - 1]);
            }
            count += 1;
            if total >= self.params.max_distance {
                break;
            }
        }
        count
    }

    /// Segments ordered tail first, so brighter pieces near the head paint on top.
    pub fn segments(&self) -> Vec<TrailSegment> {
        if self.hidden || !self.seeded {
            return Vec::new();
        }
        let count = self.visible_count();
        if count < 2 {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(count - 1);
        for i in (1..count).rev() {
            let progress = i as f32 / count as f32;
            let taper = 1.0 - progress;
            let width = self.params.start_width * taper;
            if width < self.params.min_width {
                continue;
            }
            out.push(TrailSegment {
                from: self.points[i - 1],
                to: self.points[i],
                width,
                color: self.start_color.lerp(self.end_color, progress),
                alpha: self.params.max_alpha * taper,
            });
        }
        out
    }
}
