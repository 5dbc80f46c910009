//! Scripted terminal session: type a command, print its output, repeat.
//!
//! The script is a pure state machine. The caller applies each
//! [`TerminalAction`] to the DOM and waits `delay_ms` before asking for the
//! next step.

use super::constants::*;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct TerminalCommand {
    pub cmd: &'static str,
    /// HTML fragments, one per output line.
    pub output: &'static [&'static str],
}

pub const DEFAULT_SESSION: &[TerminalCommand] = &[
    TerminalCommand {
        cmd: "cat profile.yaml",
        output: &[
            r#"<span class="highlight">name:</span> Hamza Omer"#,
            r#"<span class="highlight">role:</span> DevOps Engineer"#,
            r#"<span class="highlight">certs:</span> RHCSA, RHCE, CKA, CCNP"#,
            r#"<span class="highlight">status:</span> <span class="success">● Active</span>"#,
        ],
    },
    TerminalCommand {
        cmd: "kubectl get nodes",
        output: &[
            r#"<span class="warn">NAME    STATUS   ROLES    AGE</span>"#,
            r#"node1   <span class="success">Ready</span>    master   120d"#,
            r#"node2   <span class="success">Ready</span>    worker   120d"#,
            r#"node3   <span class="success">Ready</span>    worker   120d"#,
        ],
    },
    TerminalCommand {
        cmd: "ansible-playbook deploy.yml",
        output: &[
            r#"<span class="success">PLAY [Deploy Application] ***</span>"#,
            r#"<span class="success">TASK [Gathering Facts] *** ok</span>"#,
            r#"<span class="success">TASK [Deploy Containers] *** changed</span>"#,
            r#"<span class="success">PLAY RECAP: ok=3 changed=1 failed=0</span>"#,
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalAction {
    /// Append one character to the current prompt's command.
    TypeChar(char),
    /// Append an output line below the command.
    OutputLine(&'static str),
    /// Append a fresh, empty prompt line.
    NewPrompt,
    /// Wipe the terminal back to a single empty prompt.
    Clear,
    /// Nothing to apply; just wait.
    Pause,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalStep {
    pub action: TerminalAction,
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing { cmd: usize, ch: usize },
    Output { cmd: usize, line: usize },
    Prompt { cmd: usize },
    Clear,
}

pub struct TerminalScript {
    commands: &'static [TerminalCommand],
    phase: Phase,
}

impl TerminalScript {
    pub fn new(commands: &'static [TerminalCommand]) -> Self {
        Self {
            commands,
            phase: Phase::Typing { cmd: 0, ch: 0 },
        }
    }

    pub fn commands(&self) -> &'static [TerminalCommand] {
        self.commands
    }

    /// Next action to apply, or `None` for an empty script.
    pub fn next_step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<TerminalStep> {
        if self.commands.is_empty() {
            return None;
        }
        loop {
            match self.phase {
                Phase::Typing { cmd, ch } => {
                    let text = self.commands[cmd].cmd;
                    let Some(c) = text.chars().nth(ch) else {
                        // Empty command: nothing to type, but keep the pause
                        // before its output.
                        self.phase = Phase::Output { cmd, line: 0 };
                        return Some(TerminalStep {
                            action: TerminalAction::Pause,
                            delay_ms: TERMINAL_OUTPUT_PAUSE_MS,
                        });
                    };
                    let last = ch + 1 == text.chars().count();
                    let mut delay_ms =
                        rng.gen_range(TERMINAL_KEY_DELAY_MIN_MS..TERMINAL_KEY_DELAY_MAX_MS);
                    if last {
                        delay_ms += TERMINAL_OUTPUT_PAUSE_MS;
                        self.phase = Phase::Output { cmd, line: 0 };
                    } else {
                        self.phase = Phase::Typing { cmd, ch: ch + 1 };
                    }
                    return Some(TerminalStep {
                        action: TerminalAction::TypeChar(c),
                        delay_ms,
                    });
                }
                Phase::Output { cmd, line } => {
                    let output = self.commands[cmd].output;
                    let Some(html) = output.get(line).copied() else {
                        self.phase = Phase::Prompt { cmd };
                        continue;
                    };
                    self.phase = if line + 1 < output.len() {
                        Phase::Output { cmd, line: line + 1 }
                    } else {
                        Phase::Prompt { cmd }
                    };
                    return Some(TerminalStep {
                        action: TerminalAction::OutputLine(html),
                        delay_ms: TERMINAL_LINE_DELAY_MS,
                    });
                }
                Phase::Prompt { cmd } => {
                    let delay_ms = if cmd + 1 < self.commands.len() {
                        self.phase = Phase::Typing { cmd: cmd + 1, ch: 0 };
                        TERMINAL_NEXT_COMMAND_DELAY_MS
                    } else {
                        self.phase = Phase::Clear;
                        TERMINAL_NEXT_COMMAND_DELAY_MS + TERMINAL_RESTART_DELAY_MS
                    };
                    return Some(TerminalStep {
                        action: TerminalAction::NewPrompt,
                        delay_ms,
                    });
                }
                Phase::Clear => {
                    self.phase = Phase::Typing { cmd: 0, ch: 0 };
                    return Some(TerminalStep {
                        action: TerminalAction::Clear,
                        delay_ms: 0,
                    });
                }
            }
        }
    }
}

impl Default for TerminalScript {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION)
    }
}
