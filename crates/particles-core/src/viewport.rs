use glam::Vec2;

use crate::constants::WORLD_HALF_EXTENT;
use crate::error::{ParamsError, Result};

/// Host surface size in CSS pixels and the world square it shows.
///
/// The world spans `[-half_extent, half_extent]` on both axes regardless of
/// aspect ratio, with +y pointing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width_px: f32,
    height_px: f32,
    half_extent: f32,
}

impl Viewport {
    pub fn new(width_px: f32, height_px: f32) -> Result<Self> {
        Self::with_half_extent(width_px, height_px, WORLD_HALF_EXTENT)
    }

    pub fn with_half_extent(width_px: f32, height_px: f32, half_extent: f32) -> Result<Self> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(width_px) || !usable(height_px) {
            return Err(ParamsError::EmptyViewport {
                width: width_px,
                height: height_px,
            });
        }
        if !usable(half_extent) {
            return Err(ParamsError::NotPositive {
                name: "half_extent",
                value: half_extent,
            });
        }
        Ok(Self {
            width_px,
            height_px,
            half_extent,
        })
    }

    #[inline]
    pub fn width_px(&self) -> f32 {
        self.width_px
    }

    #[inline]
    pub fn height_px(&self) -> f32 {
        self.height_px
    }

    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Client pixel (origin top-left, y down) to world coordinates.
    #[inline]
    pub fn to_world(&self, px: f32, py: f32) -> Vec2 {
        let nx = (px / self.width_px) * 2.0 - 1.0;
        let ny = -(py / self.height_px) * 2.0 + 1.0;
        Vec2::new(nx, ny) * self.half_extent
    }

    /// World coordinates back to client pixels.
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        let n = world / self.half_extent;
        Vec2::new(
            (n.x + 1.0) * 0.5 * self.width_px,
            (1.0 - n.y) * 0.5 * self.height_px,
        )
    }

    /// World-space length of `screen_px` horizontal pixels.
    #[inline]
    pub fn world_length(&self, screen_px: f32) -> f32 {
        screen_px / self.width_px * (2.0 * self.half_extent)
    }

    /// Pixel radius of a world-space length, measured horizontally.
    #[inline]
    pub fn screen_length(&self, world: f32) -> f32 {
        world / (2.0 * self.half_extent) * self.width_px
    }
}
