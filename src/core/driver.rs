//! Ownership rules for a frame loop, independent of how frames are scheduled.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

/// What the scheduler must do once a frame callback has returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterFrame {
    /// Request another frame.
    Reschedule,
    /// Stop; the owning handle still holds the loop.
    Halt,
    /// Stop and free the loop; nothing else owns it.
    Release,
}

/// A loop is either owned by a handle, or detached and owned by itself
/// until it stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverLifecycle {
    running: bool,
    detached: bool,
}

impl DriverLifecycle {
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn after_frame(&mut self, control: FrameControl) -> AfterFrame {
        match control {
            FrameControl::Continue if self.running => AfterFrame::Reschedule,
            _ => self.stop(),
        }
    }

    pub fn stop(&mut self) -> AfterFrame {
        self.running = false;
        if std::mem::take(&mut self.detached) {
            AfterFrame::Release
        } else {
            AfterFrame::Halt
        }
    }

    /// Give up the handle. Returns `true` if the loop must now keep itself
    /// alive; a loop that already stopped has nothing left to own.
    pub fn detach(&mut self) -> bool {
        self.detached = self.running;
        self.detached
    }

    /// Dropping the handle cancels the loop unless it was detached.
    pub fn cancel_on_drop(&self) -> bool {
        !self.detached
    }
}
