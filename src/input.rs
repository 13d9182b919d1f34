use crate::constants::{
    CLICKABLE_CLASS_MARKERS, CLICKABLE_INPUT_TYPES, CLICKABLE_ROLES, CURSOR_HOVER_SIZE_PX,
    CURSOR_PRESS_SCALE, CURSOR_SIZE_PX, HOVER_CHECK_INTERVAL,
};
use glam::Vec2;

/// Last pointer sample as seen by the DOM listeners.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    /// Viewport (client) coordinates, for hit testing.
    pub client: Vec2,
    /// Canvas-local CSS pixels, for drawing.
    pub local: Vec2,
    pub seen: bool,
    pub inside: bool,
    pub down: bool,
}

impl PointerState {
    pub fn moved(&mut self, client: Vec2, local: Vec2) {
        self.client = client;
        self.local = local;
        self.seen = true;
        self.inside = true;
    }
}

/// The attributes of a DOM element the clickable test looks at.
#[derive(Default, Clone, Debug)]
pub struct ElementTraits {
    pub tag: String,
    pub input_type: Option<String>,
    pub label_for: Option<String>,
    pub role: Option<String>,
    pub class_name: String,
    pub has_click_handler: bool,
    pub data_href: Option<String>,
    pub tabindex: Option<String>,
}

/// Whether an element on its own reads as clickable (links, buttons,
/// button-like inputs and roles, focusable widgets).
pub fn is_clickable(el: &ElementTraits) -> bool {
    let tag = el.tag.to_ascii_uppercase();
    if tag == "A" || tag == "BUTTON" {
        return true;
    }
    if tag == "INPUT"
        && el
            .input_type
            .as_deref()
            .is_some_and(|t| CLICKABLE_INPUT_TYPES.contains(&t))
    {
        return true;
    }
    if tag == "LABEL" && el.label_for.as_deref().is_some_and(|f| !f.is_empty()) {
        return true;
    }
    if el
        .role
        .as_deref()
        .is_some_and(|r| CLICKABLE_ROLES.contains(&r))
    {
        return true;
    }
    if CLICKABLE_CLASS_MARKERS
        .iter()
        .any(|marker| el.class_name.contains(marker))
    {
        return true;
    }
    if el.has_click_handler || el.data_href.as_deref().is_some_and(|h| !h.is_empty()) {
        return true;
    }
    el.tabindex.as_deref() == Some("0")
}

/// Any element of an ancestor chain (innermost first) is clickable.
pub fn any_clickable<'a>(chain: impl IntoIterator<Item = &'a ElementTraits>) -> bool {
    chain.into_iter().any(is_clickable)
}

#[inline]
pub fn hover_check_due(frame_index: u64) -> bool {
    frame_index % HOVER_CHECK_INTERVAL == 0
}

/// Cursor dot diameter in CSS pixels.
#[inline]
pub fn cursor_dot_size(hovering: bool, pressed: bool) -> f32 {
    let base = if hovering {
        CURSOR_HOVER_SIZE_PX
    } else {
        CURSOR_SIZE_PX
    };
    if pressed {
        base * CURSOR_PRESS_SCALE
    } else {
        base
    }
}

/// Client coordinates to canvas-local CSS pixels given the canvas origin.
#[inline]
pub fn client_to_local(client: Vec2, canvas_left: f32, canvas_top: f32) -> Vec2 {
    client - Vec2::new(canvas_left, canvas_top)
}
