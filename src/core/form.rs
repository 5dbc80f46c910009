use super::constants::{FORM_RESTORE_DELAY_MS, FORM_SEND_DELAY_MS};

pub const SENDING_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;
pub const SENT_HTML: &str = r#"<i class="fas fa-check"></i> Message Sent!"#;
pub const SENT_BACKGROUND: &str = "linear-gradient(135deg, #00e676, #00bfa5)";

/// Submit button lifecycle for the mock contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    /// Phase that follows this one and how long this one lasts. `Idle` is
    /// terminal.
    pub fn next(self) -> Option<(SubmitPhase, u32)> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => Some((SubmitPhase::Sent, FORM_SEND_DELAY_MS)),
            SubmitPhase::Sent => Some((SubmitPhase::Idle, FORM_RESTORE_DELAY_MS)),
        }
    }

    pub fn label<'a>(self, original_html: &'a str) -> &'a str {
        match self {
            SubmitPhase::Idle => original_html,
            SubmitPhase::Sending => SENDING_HTML,
            SubmitPhase::Sent => SENT_HTML,
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            SubmitPhase::Sent => SENT_BACKGROUND,
            _ => "",
        }
    }

    pub fn disabled(self) -> bool {
        self != SubmitPhase::Idle
    }

    /// Clear the form fields when entering this phase.
    pub fn resets_form(self) -> bool {
        self == SubmitPhase::Sent
    }
}

/// Tracks one contact button so overlapping submits are ignored.
#[derive(Clone, Debug)]
pub struct SubmitCycle {
    phase: SubmitPhase,
    original_html: String,
}

impl SubmitCycle {
    pub fn new() -> Self {
        Self {
            phase: SubmitPhase::Idle,
            original_html: String::new(),
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn original_html(&self) -> &str {
        &self.original_html
    }

    /// Start a cycle, remembering the button's label. Returns `false` if a
    /// cycle is already running.
    pub fn begin(&mut self, original_html: String) -> bool {
        if self.phase != SubmitPhase::Idle {
            return false;
        }
        self.original_html = original_html;
        self.phase = SubmitPhase::Sending;
        true
    }

    /// Move to the next phase; returns the phase entered, or `None` when idle.
    pub fn advance(&mut self) -> Option<SubmitPhase> {
        let (next, _) = self.phase.next()?;
        self.phase = next;
        Some(next)
    }

    /// How long the current phase lasts before [`advance`](Self::advance).
    pub fn current_delay_ms(&self) -> Option<u32> {
        self.phase.next().map(|(_, d)| d)
    }
}

impl Default for SubmitCycle {
    fn default() -> Self {
        Self::new()
    }
}
