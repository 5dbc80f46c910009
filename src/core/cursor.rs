use super::constants::{CURSOR_DOT_OFFSET, CURSOR_EASE, CURSOR_MIN_VIEWPORT_WIDTH};
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct CursorParams {
    pub ease: f32,
    pub dot_offset: f32,
    pub min_viewport_width: f64,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            ease: CURSOR_EASE,
            dot_offset: CURSOR_DOT_OFFSET,
            min_viewport_width: CURSOR_MIN_VIEWPORT_WIDTH,
        }
    }
}

/// Raw pointer position plus the eased ring position chasing it.
#[derive(Clone, Debug)]
pub struct PointerState {
    pub raw: Vec2,
    pub eased: Vec2,
    params: CursorParams,
}

impl PointerState {
    pub fn new(params: CursorParams) -> Self {
        Self {
            raw: Vec2::ZERO,
            eased: Vec2::ZERO,
            params,
        }
    }

    pub fn params(&self) -> &CursorParams {
        &self.params
    }

    /// Record a pointer move and return the dot's top-left corner.
    pub fn on_move(&mut self, client: Vec2) -> Vec2 {
        self.raw = client;
        client - Vec2::splat(self.params.dot_offset)
    }

    /// Advance the ring one frame and return its new position.
    pub fn step(&mut self) -> Vec2 {
        self.eased = ease_toward(self.eased, self.raw, self.params.ease);
        self.eased
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(CursorParams::default())
    }
}

#[inline]
pub fn ease_toward(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// The custom cursor is a desktop affordance only.
#[inline]
pub fn cursor_enabled(viewport_width: f64, params: &CursorParams) -> bool {
    viewport_width >= params.min_viewport_width
}
