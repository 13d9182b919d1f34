use crate::constants::{CURSOR_COLOR_HEX, PARTICLE_COLOR_HEX};
use crate::{dom, hover, input, render};
use instant::Instant;
use particles_core::{ParticleField, Rgb, SeededRandom, Trail};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField<SeededRandom>>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub trail: Trail,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,

    pub started: Instant,
    pub frame_index: u64,
    /// Ink for the cursor dot while it hovers something clickable.
    pub hover_ink: Option<Rgb>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_sec = self.started.elapsed().as_secs_f64();
        self.field.borrow_mut().advance(now_sec);

        let pointer = *self.pointer.borrow();
        if pointer.seen {
            self.trail.follow(pointer.local);
            if input::hover_check_due(self.frame_index) {
                self.update_hover(&pointer);
            }
        }
        self.frame_index = self.frame_index.wrapping_add(1);

        let hovering = self.hover_ink.is_some();
        self.trail.set_hidden(!pointer.inside || hovering);

        render::begin_frame(&self.ctx, &self.canvas, dom::device_pixel_ratio());
        {
            let field = self.field.borrow();
            render::draw_particles(
                &self.ctx,
                field.sprites(),
                field.viewport(),
                Rgb::from_hex(PARTICLE_COLOR_HEX),
            );
        }
        render::draw_trail(&self.ctx, &self.trail.segments());
        if pointer.seen && pointer.inside {
            let color = self
                .hover_ink
                .unwrap_or(Rgb::from_hex(CURSOR_COLOR_HEX));
            render::draw_cursor(
                &self.ctx,
                pointer.local,
                input::cursor_dot_size(hovering, pointer.down),
                color,
                !hovering,
            );
        }
    }

    fn update_hover(&mut self, pointer: &input::PointerState) {
        let ink = hover::probe(&self.document, pointer.client.x, pointer.client.y);
        if ink.is_some() != self.hover_ink.is_some() {
            log::debug!("[hover] clickable={}", ink.is_some());
        }
        self.hover_ink = ink;
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
