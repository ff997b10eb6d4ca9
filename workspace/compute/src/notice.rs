use std::time::Duration;
use tracing::{debug, instrument};

/// Delay before a posted notice clears itself.
pub const NOTICE_CLEAR_DELAY: Duration = Duration::from_millis(2000);

/// Message shown in the transient banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub generation: u64,
    pub message: String,
}

/// Clear request the caller must schedule on its own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClear {
    pub generation: u64,
    pub after: Duration,
}

/// Holds at most one notice.
///
/// Every posted notice gets a new generation. A clear only takes effect
/// when its generation matches the notice currently shown, so a timer left
/// over from an earlier post cannot remove a newer message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_generation: u64,
    clear_after: Duration,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::with_clear_after(NOTICE_CLEAR_DELAY)
    }
}

impl NoticeBoard {
    pub fn with_clear_after(clear_after: Duration) -> Self {
        Self {
            current: None,
            next_generation: 0,
            clear_after,
        }
    }

    pub fn log_message(kind: &str) -> String {
        format!("Navigating to log {}... (Simulated)", kind)
    }

    /// Replaces the current notice with one naming `kind`.
    #[instrument(skip(self))]
    pub fn trigger_log(&mut self, kind: &str) -> PendingClear {
        let generation = self.next_generation;
        self.next_generation += 1;

        self.current = Some(Notice {
            generation,
            message: Self::log_message(kind),
        });
        debug!(generation, "Posted notice");

        PendingClear {
            generation,
            after: self.clear_after,
        }
    }

    /// Clears the notice if it still belongs to `generation`.
    /// Returns whether anything was removed.
    pub fn clear(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(notice) if notice.generation == generation => {
                self.current = None;
                debug!(generation, "Cleared notice");
                true
            }
            _ => {
                debug!(generation, "Ignoring stale clear");
                false
            }
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fires clear requests against a board as simulated time advances.
    #[derive(Default)]
    struct SimulatedTimers {
        now: Duration,
        pending: Vec<(Duration, u64)>,
    }

    impl SimulatedTimers {
        fn schedule(&mut self, request: PendingClear) {
            self.pending.push((self.now + request.after, request.generation));
        }

        fn advance(&mut self, by: Duration, board: &mut NoticeBoard) {
            self.now += by;
            let now = self.now;

            let (mut due, waiting): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(at, _)| *at <= now);
            self.pending = waiting;

            due.sort_by_key(|(at, _)| *at);
            for (_, generation) in due {
                board.clear(generation);
            }
        }
    }

    #[test]
    fn test_trigger_log_sets_message_immediately() {
        let mut board = NoticeBoard::default();
        board.trigger_log("Symptoms");

        let message = board.message().expect("Notice should be present");
        assert!(message.contains("Symptoms"));
        assert_eq!(message, "Navigating to log Symptoms... (Simulated)");
    }

    #[test]
    fn test_notice_clears_after_delay() {
        let mut board = NoticeBoard::default();
        let mut timers = SimulatedTimers::default();

        timers.schedule(board.trigger_log("Symptoms"));

        timers.advance(Duration::from_millis(1999), &mut board);
        assert!(board.message().is_some());

        timers.advance(Duration::from_millis(1), &mut board);
        assert!(board.message().is_none());
    }

    #[test]
    fn test_stale_timer_does_not_clear_newer_notice() {
        let mut board = NoticeBoard::default();
        let mut timers = SimulatedTimers::default();

        timers.schedule(board.trigger_log("Symptoms"));
        timers.advance(Duration::from_millis(1000), &mut board);
        timers.schedule(board.trigger_log("Mood"));

        assert_eq!(board.message(), Some("Navigating to log Mood... (Simulated)"));

        // first timer fires at 2000ms
        timers.advance(Duration::from_millis(1000), &mut board);
        assert_eq!(board.message(), Some("Navigating to log Mood... (Simulated)"));

        // second timer fires at 3000ms
        timers.advance(Duration::from_millis(1000), &mut board);
        assert!(board.message().is_none());
    }

    #[test]
    fn test_generations_increase() {
        let mut board = NoticeBoard::default();
        let first = board.trigger_log("Mood");
        let second = board.trigger_log("Mood");

        assert!(second.generation > first.generation);
        assert!(!board.clear(first.generation));
        assert!(board.clear(second.generation));
    }

    #[test]
    fn test_any_kind_is_accepted() {
        let mut board = NoticeBoard::with_clear_after(Duration::from_millis(10));
        let pending = board.trigger_log("");

        assert_eq!(pending.after, Duration::from_millis(10));
        assert_eq!(board.message(), Some("Navigating to log ... (Simulated)"));
    }
}
