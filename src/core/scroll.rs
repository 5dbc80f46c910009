use super::constants::{NAV_HEIGHT, PARALLAX_FACTOR};
use glam::Vec2;

/// Document-space scroll target for an anchor, leaving room for the fixed
/// navbar.
#[inline]
pub fn anchor_scroll_top(target_rect_top: f64, page_y_offset: f64) -> f64 {
    target_rect_top + page_y_offset - NAV_HEIGHT
}

/// Small translation that follows the pointer away from the viewport centre.
#[inline]
pub fn parallax_offset(client: Vec2, viewport: Vec2) -> Vec2 {
    (client - viewport / 2.0) * PARALLAX_FACTOR
}

pub fn translate_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
