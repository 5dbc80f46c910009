use super::constants::{
    TYPE_CHAR_DELAY_MS, TYPE_DELETE_DELAY_MS, TYPE_HOLD_DELAY_MS, TYPE_NEXT_ROLE_DELAY_MS,
};

pub const DEFAULT_ROLES: &[&str] = &[
    "scalable infrastructure.",
    "Kubernetes clusters.",
    "CI/CD pipelines.",
    "network architectures.",
    "automated systems.",
    "AI-powered solutions.",
];

/// What to show after a tick and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Types each role out, holds it, deletes it, then moves to the next role.
#[derive(Clone, Debug)]
pub struct Typewriter {
    roles: Vec<&'static str>,
    role: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(roles: &[&'static str]) -> Self {
        Self {
            roles: roles.to_vec(),
            role: 0,
            chars: 0,
            deleting: false,
        }
    }

    pub fn role_index(&self) -> usize {
        self.role
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn tick(&mut self) -> TypeStep {
        let Some(role) = self.roles.get(self.role).copied() else {
            return TypeStep {
                text: String::new(),
                delay_ms: TYPE_NEXT_ROLE_DELAY_MS,
            };
        };
        let len = role.chars().count();

        let mut delay_ms = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            TYPE_DELETE_DELAY_MS
        } else {
            self.chars = (self.chars + 1).min(len);
            TYPE_CHAR_DELAY_MS
        };
        let text: String = role.chars().take(self.chars).collect();

        if !self.deleting && self.chars == len {
            delay_ms = TYPE_HOLD_DELAY_MS;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.role = (self.role + 1) % self.roles.len();
            delay_ms = TYPE_NEXT_ROLE_DELAY_MS;
        }

        TypeStep { text, delay_ms }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(DEFAULT_ROLES)
    }
}
