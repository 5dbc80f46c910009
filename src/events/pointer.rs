use crate::constants::{
    CURSOR_DOT_SELECTOR, CURSOR_RING_SELECTOR, HOVER_CLASS, HOVER_TARGETS_SELECTOR,
    PARALLAX_TARGET_SELECTOR,
};
use crate::core::{cursor_enabled, parallax_offset, translate_css, CursorParams, PointerState};
use crate::dom;
use crate::frame::{AnimationDriver, FrameControl};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Dot that sits on the pointer plus a ring that eases after it.
pub fn wire_cursor(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let params = CursorParams::default();
    let (Some(dot), Some(ring)) = (
        dom::query_one(document, CURSOR_DOT_SELECTOR),
        dom::query_one(document, CURSOR_RING_SELECTOR),
    ) else {
        log::debug!("[cursor] markers missing; skipping");
        return Ok(());
    };
    let width = dom::viewport_size(window).x as f64;
    if !cursor_enabled(width, &params) {
        log::debug!("[cursor] viewport {width} too narrow; skipping");
        return Ok(());
    }

    let pointer = Rc::new(RefCell::new(PointerState::new(params)));

    let pointer_move = pointer.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        let top_left = pointer_move.borrow_mut().on_move(client_pos(&ev));
        dom::set_position_px(&dot, top_left);
    })?;

    let ring_frame = ring.clone();
    AnimationDriver::start(move || {
        let eased = pointer.borrow_mut().step();
        dom::set_position_px(&ring_frame, eased);
        FrameControl::Continue
    })?
    .detach();

    wire_hover_targets(document, &ring)?;
    log::info!("[cursor] custom cursor active");
    Ok(())
}

fn wire_hover_targets(document: &web::Document, ring: &web::Element) -> anyhow::Result<()> {
    for target in dom::query_all(document, HOVER_TARGETS_SELECTOR) {
        let ring_enter = ring.clone();
        dom::listen(&target, "mouseenter", move |_: web::Event| {
            dom::set_class(&ring_enter, HOVER_CLASS, true);
        })?;
        let ring_leave = ring.clone();
        dom::listen(&target, "mouseleave", move |_: web::Event| {
            dom::set_class(&ring_leave, HOVER_CLASS, false);
        })?;
    }
    Ok(())
}

/// Nudge the terminal window away from the viewport centre as the pointer moves.
pub fn wire_parallax(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let window = window.clone();
    let doc = document.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        let offset = parallax_offset(client_pos(&ev), dom::viewport_size(&window));
        if let Some(terminal) = dom::query_one(&doc, PARALLAX_TARGET_SELECTOR) {
            dom::set_style(&terminal, "transform", &translate_css(offset));
        }
    })
}
