//! Transient on-page notices.
//!
//! Notices are short user-facing messages (success, error, info) that remove
//! themselves after a fixed time-to-live. Instead of a one-shot deferred
//! callback, expiry is data: each entry carries a deadline and the board is
//! swept with an explicit instant, so tests simulate elapsed time
//! deterministically. Multiple notices coexist without coordination.

use std::time::{Duration, Instant};

/// Default lifetime of a notice before it is swept.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

/// Visual category of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// One transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    /// Builds a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    /// Builds an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    /// Builds an info notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    notice: Notice,
    expires_at: Instant,
}

/// Holds the currently visible notices with their expiry deadlines.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    entries: Vec<Entry>,
    ttl: Duration,
}

impl NoticeBoard {
    /// Creates an empty board whose notices live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: vec![],
            ttl,
        }
    }

    /// Adds a notice with a deadline of now + ttl.
    pub fn push(&mut self, notice: Notice) {
        self.push_at(notice, Instant::now());
    }

    /// Adds a notice using an explicit current instant (test hook).
    pub fn push_at(&mut self, notice: Notice, now: Instant) {
        tracing::debug!(kind = ?notice.kind, message = %notice.message, "notice posted");
        self.entries.push(Entry {
            notice,
            expires_at: now + self.ttl,
        });
    }

    /// Removes every notice whose deadline has passed at `now`.
    pub fn sweep(&mut self, now: Instant) {
        self.entries.retain(|entry| entry.expires_at > now);
    }

    /// Iterates the currently held notices, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter().map(|entry| &entry.notice)
    }

    /// Number of held notices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no notices are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_removes_only_expired_entries() {
        let mut board = NoticeBoard::new(Duration::from_secs(5));
        let start = Instant::now();

        board.push_at(Notice::success("first"), start);
        board.push_at(Notice::error("second"), start + Duration::from_secs(3));

        board.sweep(start + Duration::from_secs(6));
        let remaining: Vec<_> = board.active().collect();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "second");

        board.sweep(start + Duration::from_secs(9));
        assert!(board.is_empty());
    }

    #[test]
    fn notices_coexist_without_coordination() {
        let mut board = NoticeBoard::default();
        board.push(Notice::info("one"));
        board.push(Notice::info("two"));
        board.push(Notice::error("three"));
        assert_eq!(board.len(), 3);
    }
}
