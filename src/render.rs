use crate::constants::{CURSOR_GLOW_PX, MIN_PARTICLE_RADIUS_PX};
use glam::Vec2;
use particles_core::{Rgb, Sprite, TrailSegment, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?;
    ctx.dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Clear the backing store and switch to CSS-pixel coordinates.
pub fn begin_frame(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement, dpr: f64) {
    _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

pub fn draw_particles(
    ctx: &web::CanvasRenderingContext2d,
    sprites: impl Iterator<Item = Sprite>,
    viewport: &Viewport,
    color: Rgb,
) {
    ctx.set_fill_style_str(&color.to_css());
    for s in sprites {
        let p = viewport.to_screen(s.position);
        let r = viewport.screen_length(s.scale).max(MIN_PARTICLE_RADIUS_PX);
        ctx.set_global_alpha(s.opacity as f64);
        ctx.begin_path();
        _ = ctx.arc(p.x as f64, p.y as f64, r as f64, 0.0, TAU);
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}

pub fn draw_trail(ctx: &web::CanvasRenderingContext2d, segments: &[TrailSegment]) {
    ctx.set_line_cap("butt");
    for s in segments {
        ctx.begin_path();
        ctx.move_to(s.from.x as f64, s.from.y as f64);
        ctx.line_to(s.to.x as f64, s.to.y as f64);
        ctx.set_stroke_style_str(&s.color.to_css_alpha(s.alpha));
        ctx.set_line_width(s.width as f64);
        ctx.stroke();
    }
}

/// Filled dot centred on the pointer; glows unless `glow` is false.
pub fn draw_cursor(
    ctx: &web::CanvasRenderingContext2d,
    center: Vec2,
    diameter: f32,
    color: Rgb,
    glow: bool,
) {
    let css = color.to_css();
    if glow {
        ctx.set_shadow_color(&css);
        ctx.set_shadow_blur(CURSOR_GLOW_PX);
    }
    ctx.set_fill_style_str(&css);
    ctx.begin_path();
    _ = ctx.arc(
        center.x as f64,
        center.y as f64,
        diameter as f64 * 0.5,
        0.0,
        TAU,
    );
    ctx.fill();
    ctx.set_shadow_blur(0.0);
}
