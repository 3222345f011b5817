//! Application state container.
//!
//! The client keeps almost nothing between events: records are never cached,
//! and the session token lives inside the gateway. What remains is the board
//! of transient notices the handlers post and the driver displays.

use crate::ui::notice::{Notice, NoticeBoard};
use std::time::Duration;

/// Transient state shared across event handler turns.
///
/// Mutated only synchronously within a single handler turn; no handler
/// yields control while touching it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Currently visible notices with their expiry deadlines.
    pub notices: NoticeBoard,
}

impl AppState {
    /// Creates a state whose notices live for `notice_ttl`.
    #[must_use]
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            notices: NoticeBoard::new(notice_ttl),
        }
    }

    /// Posts a notice to the board.
    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::ui::notice::Notice;
    use std::time::Duration;

    #[test]
    fn notify_appends_to_the_board() {
        let mut state = AppState::new(Duration::from_secs(5));
        state.notify(Notice::info("hello"));
        assert_eq!(state.notices.len(), 1);
    }
}
