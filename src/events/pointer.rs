use crate::input;
use glam::Vec2;
use particles_core::{ParticleField, SeededRandom};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub field: Rc<RefCell<ParticleField<SeededRandom>>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointer_presence(&w);
    wire_pointer_buttons(&w);
}

fn add_window_listener<E: 'static + wasm_bindgen::convert::FromWasmAbi>(
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("pointermove", move |ev: web::PointerEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let rect = w.canvas.get_bounding_client_rect();
        let local = input::client_to_local(client, rect.left() as f32, rect.top() as f32);

        w.pointer.borrow_mut().moved(client, local);
        w.field.borrow_mut().pointer_moved_px(local.x, local.y);
    });
}

fn wire_pointer_presence(w: &InputWiring) {
    let pointer_leave = w.pointer.clone();
    let leave = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        pointer_leave.borrow_mut().inside = false;
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
    leave.forget();

    let pointer_enter = w.pointer.clone();
    let enter = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        pointer_enter.borrow_mut().inside = true;
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
    enter.forget();
}

fn wire_pointer_buttons(w: &InputWiring) {
    let pointer_down = w.pointer.clone();
    add_window_listener("pointerdown", move |_ev: web::PointerEvent| {
        pointer_down.borrow_mut().down = true;
    });

    let pointer_up = w.pointer.clone();
    add_window_listener("pointerup", move |_ev: web::PointerEvent| {
        pointer_up.borrow_mut().down = false;
    });
}
