//! `requestAnimationFrame` loop with an explicit start/stop lifecycle.

use crate::core::{AfterFrame, DriverLifecycle};
use crate::dom::{self, js_err};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use crate::core::FrameControl;

#[derive(Default)]
struct DriverState {
    lifecycle: Cell<DriverLifecycle>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    // Strong self-reference held only while detached.
    keepalive: RefCell<Option<Rc<DriverState>>>,
}

impl DriverState {
    fn update<T>(&self, f: impl FnOnce(&mut DriverLifecycle) -> T) -> T {
        let mut lc = self.lifecycle.get();
        let out = f(&mut lc);
        self.lifecycle.set(lc);
        out
    }

    fn request(&self) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return Ok(());
        };
        let id = window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .map_err(js_err)?;
        self.pending.set(Some(id));
        Ok(())
    }

    fn cancel_pending(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }

    fn finish(&self, after: AfterFrame) {
        if after != AfterFrame::Release {
            return;
        }
        let Some(keep) = self.keepalive.borrow_mut().take() else {
            return;
        };
        // The tick closure may be on the stack right now; free it from a
        // later task.
        let freed = dom::set_timeout(0, move || {
            keep.tick.borrow_mut().take();
        });
        if let Err(e) = freed {
            log::warn!("[frame] could not release stopped loop: {:?}", e);
        }
    }
}

/// Owns a per-frame callback. Dropping a running driver stops it; call
/// [`detach`](Self::detach) to let it run on its own until it stops.
pub struct AnimationDriver {
    state: Rc<DriverState>,
}

impl AnimationDriver {
    /// Schedule `frame` on every repaint until it returns
    /// [`FrameControl::Stop`] or [`stop`](Self::stop) is called.
    pub fn start<F>(mut frame: F) -> anyhow::Result<Self>
    where
        F: FnMut() -> FrameControl + 'static,
    {
        let state = Rc::new(DriverState::default());
        let weak: Weak<DriverState> = Rc::downgrade(&state);
        let tick = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if !state.lifecycle.get().is_running() {
                return;
            }
            let control = frame();
            let after = match state.update(|lc| lc.after_frame(control)) {
                AfterFrame::Reschedule => match state.request() {
                    Ok(()) => return,
                    Err(e) => {
                        log::error!("[frame] reschedule failed: {:?}", e);
                        state.update(DriverLifecycle::stop)
                    }
                },
                after => after,
            };
            state.finish(after);
        }) as Box<dyn FnMut()>);
        *state.tick.borrow_mut() = Some(tick);
        state.update(DriverLifecycle::start);
        state.request()?;
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.lifecycle.get().is_running()
    }

    pub fn stop(&self) {
        let after = self.state.update(DriverLifecycle::stop);
        self.state.cancel_pending();
        self.state.finish(after);
    }

    /// Hand the loop over to itself. It keeps running until its callback
    /// returns `Stop`, then frees its closure.
    pub fn detach(self) {
        if self.state.update(DriverLifecycle::detach) {
            *self.state.keepalive.borrow_mut() = Some(self.state.clone());
        }
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        if self.state.lifecycle.get().cancel_on_drop() {
            self.state.update(DriverLifecycle::stop);
            self.state.cancel_pending();
        }
    }
}
