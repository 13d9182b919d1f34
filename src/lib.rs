#![cfg(target_arch = "wasm32")]
//! Browser host for the cursor particle field.
//!
//! Expects a `<canvas id="cursor-fx-canvas">` laid over the page (fixed,
//! full-viewport, `pointer-events: none`). Pointer listeners feed the field and
//! the trail; a `requestAnimationFrame` loop advances and draws them.
use instant::Instant;
use particles_core::{FieldParams, ParticleField, SeededRandom, Trail, TrailParams, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod hover;
mod input;
mod render;

type SharedField = Rc<RefCell<ParticleField<SeededRandom>>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, field: SharedField) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        if let Err(e) = field.borrow_mut().resize_px(w, h) {
            log::warn!("[resize] keeping previous viewport: {}", e);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn build_field(canvas: &web::HtmlCanvasElement) -> anyhow::Result<SharedField> {
    let (w, h) = dom::sync_canvas_backing_size(canvas);
    let viewport = Viewport::new(w, h)?;
    let field = ParticleField::new(FieldParams::default(), viewport, SeededRandom::from_entropy())?;
    log::info!(
        "[field] particles={} viewport={}x{} detach={:.3}",
        field.particles().len(),
        w,
        h,
        field.detach_distance()
    );
    Ok(Rc::new(RefCell::new(field)))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-fx-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::wrap(Box::new(run) as Box<dyn FnMut()>);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        run();
    }
    Ok(())
}

fn run() {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = render::context_2d(&canvas)?;

    let field = build_field(&canvas)?;
    wire_canvas_resize(&canvas, field.clone());

    let trail = Trail::new(TrailParams::default())?;
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));

    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        field: field.clone(),
        pointer: pointer.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        pointer,
        trail,
        document,
        canvas,
        ctx,
        started: Instant::now(),
        frame_index: 0,
        hover_ink: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
