//! Signup notice state
//!
//! The notice region shows the latest signup outcome. Each `show` hands out a
//! ticket; hiding only succeeds for the ticket of the notice currently on
//! screen, so a timer belonging to a superseded notice cannot hide a newer
//! one even if it fires.

use std::time::Duration;

use crate::model::SignupOutcome;

/// How long a notice stays visible
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Style class of the notice region
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

impl From<&SignupOutcome> for Notice {
    fn from(outcome: &SignupOutcome) -> Self {
        if outcome.is_success() {
            Notice::success(outcome.text())
        } else {
            Notice::error(outcome.text())
        }
    }
}

/// Identifies one `show` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeTicket(u64);

/// The notice region. The last notice stays in place after it is hidden,
/// just like a message element that only toggles a `hidden` class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    visible: bool,
    generation: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is shown and make it visible
    pub fn show(&mut self, notice: Notice) -> NoticeTicket {
        self.generation += 1;
        self.current = Some(notice);
        self.visible = true;
        NoticeTicket(self.generation)
    }

    /// Hide the notice if `ticket` belongs to it. Returns whether it was hidden.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// The notice on screen, if any
    pub fn visible(&self) -> Option<&Notice> {
        if self.visible {
            self.current.as_ref()
        } else {
            None
        }
    }

    /// The last notice shown, visible or not
    pub fn last(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut board = NoticeBoard::new();
        assert!(board.visible().is_none());

        let ticket = board.show(Notice::success("Signed up!"));
        assert_eq!(board.visible(), Some(&Notice::success("Signed up!")));

        assert!(board.expire(ticket));
        assert!(board.visible().is_none());
        assert_eq!(board.last().map(|n| n.text.as_str()), Some("Signed up!"));
    }

    #[test]
    fn test_stale_ticket_does_not_hide_newer_notice() {
        let mut board = NoticeBoard::new();
        let first = board.show(Notice::success("first"));
        let second = board.show(Notice::error("second"));

        assert!(!board.expire(first));
        assert_eq!(board.visible().map(|n| n.kind), Some(NoticeKind::Error));

        assert!(board.expire(second));
        assert!(!board.is_visible());
    }

    #[test]
    fn test_expire_twice() {
        let mut board = NoticeBoard::new();
        let ticket = board.show(Notice::error("x"));
        assert!(board.expire(ticket));
        assert!(!board.expire(ticket));
    }

    #[test]
    fn test_notice_from_outcome() {
        let notice = Notice::from(&SignupOutcome::Rejected("Activity full".to_string()));
        assert_eq!(notice, Notice::error("Activity full"));
        assert_eq!(notice.kind.class(), "error");

        let notice = Notice::from(&SignupOutcome::Failed);
        assert_eq!(notice.text, "Failed to sign up. Please try again.");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn test_timeout_is_five_seconds() {
        assert_eq!(NOTICE_TIMEOUT, Duration::from_millis(5000));
    }
}
