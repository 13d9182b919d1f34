use crate::constants::FALLBACK_BACKGROUND_HEX;
use crate::input::{self, ElementTraits};
use particles_core::{contrast_ink, parse_css_color, Rgb};
use web_sys as web;

fn traits_of(el: &web::Element) -> ElementTraits {
    ElementTraits {
        tag: el.tag_name(),
        input_type: el.get_attribute("type"),
        label_for: el.get_attribute("for"),
        role: el.get_attribute("role"),
        class_name: el.class_name(),
        has_click_handler: el.has_attribute("onclick"),
        data_href: el.get_attribute("data-href"),
        tabindex: el.get_attribute("tabindex"),
    }
}

/// Element and its ancestors up to, not including, `<html>`.
fn ancestor_chain(document: &web::Document, start: web::Element) -> Vec<web::Element> {
    let root = document.document_element();
    let mut chain = Vec::new();
    let mut current = Some(start);
    while let Some(el) = current {
        if root.as_ref() == Some(&el) {
            break;
        }
        current = el.parent_element();
        chain.push(el);
    }
    chain
}

fn computed_background(window: &web::Window, el: &web::Element) -> Option<Rgb> {
    let style = window.get_computed_style(el).ok().flatten()?;
    let value = style.get_property_value("background-color").ok()?;
    parse_css_color(&value)
}

/// First visible background behind the chain, then `<body>`, then `<html>`.
fn effective_background(
    window: &web::Window,
    document: &web::Document,
    chain: &[web::Element],
) -> Rgb {
    chain
        .iter()
        .find_map(|el| computed_background(window, el))
        .or_else(|| {
            document
                .body()
                .and_then(|b| computed_background(window, &b))
        })
        .or_else(|| {
            document
                .document_element()
                .and_then(|h| computed_background(window, &h))
        })
        .unwrap_or(Rgb::from_hex(FALLBACK_BACKGROUND_HEX))
}

/// Ink for the cursor dot when the pointer at `client` is over something
/// clickable; `None` otherwise.
pub fn probe(document: &web::Document, client_x: f32, client_y: f32) -> Option<Rgb> {
    let window = web::window()?;
    let el = document.element_from_point(client_x, client_y)?;
    let chain = ancestor_chain(document, el);
    let traits: Vec<ElementTraits> = chain.iter().map(traits_of).collect();
    if !input::any_clickable(&traits) {
        return None;
    }
    Some(contrast_ink(effective_background(&window, document, &chain)))
}
