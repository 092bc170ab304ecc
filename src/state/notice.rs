//! Transient user-notice state for the shared message area.
//!
//! DESIGN
//! ======
//! Every notice takes a fresh generation token and the auto-hide path only
//! clears the notice it was armed for, so a timer that outlives its notice
//! cannot hide a newer message.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays visible before auto-hiding, in milliseconds.
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Visual style of the message area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class applied to the message area.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Message-area state.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub text: String,
    pub kind: NoticeKind,
    pub visible: bool,
    generation: u64,
}

impl NoticeState {
    /// Show a notice and return its generation token.
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.kind = kind;
        self.text = text.into();
        self.visible = true;
        self.generation
    }

    /// Hide the notice a timer was armed for; stale tokens no-op.
    pub fn hide(&mut self, token: u64) {
        if token == self.generation {
            self.visible = false;
        }
    }

    /// Token of the most recently shown notice.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
