//! Transient notices shown to the player.
//!
//! A notice is a short message ("Healed for 4 HP!") that disappears after
//! a fixed time. The engine never waits on that timer. Instead each posted
//! notice gets a fresh `NoticeTicket`; the presentation layer schedules a
//! clear for that ticket, and a clear carrying a stale ticket is ignored.
//! A newer notice therefore always survives an older timer.
//!
//! Callers without a scheduler can poll `NoticeBoard::expire` instead.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Styling hint for a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeTone {
    Success,
    Error,
    Info,
}

/// Handle identifying one posted notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoticeTicket(pub u64);

/// A posted notice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
    pub tone: NoticeTone,
    pub ticket: NoticeTicket,
    pub posted_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Holds at most one notice at a time.
#[derive(Clone, Debug)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_ticket: u64,
    duration: Duration,
}

impl NoticeBoard {
    /// A board whose notices live for `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            next_ticket: 0,
            duration,
        }
    }

    /// Post a notice now, replacing any current one.
    pub fn post(&mut self, text: impl Into<String>, tone: NoticeTone) -> NoticeTicket {
        self.post_at(text, tone, Utc::now())
    }

    /// Post a notice at an explicit time.
    pub fn post_at(
        &mut self,
        text: impl Into<String>,
        tone: NoticeTone,
        now: DateTime<Utc>,
    ) -> NoticeTicket {
        self.next_ticket += 1;
        let ticket = NoticeTicket(self.next_ticket);
        self.current = Some(Notice {
            text: text.into(),
            tone,
            ticket,
            posted_at: now,
            expires_at: now
                .checked_add_signed(self.duration)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
        ticket
    }

    /// The current notice, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Clear the notice if `ticket` is still the current one.
    ///
    /// Returns whether anything was cleared.
    pub fn clear(&mut self, ticket: NoticeTicket) -> bool {
        match &self.current {
            Some(notice) if notice.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Clear the notice if it has expired by `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        match &self.current {
            Some(notice) if now >= notice.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the current notice unconditionally. Tickets keep counting.
    pub fn reset(&mut self) {
        self.current = None;
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(Duration::milliseconds(3000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_replaces() {
        let mut board = NoticeBoard::default();
        let first = board.post("one", NoticeTone::Info);
        let second = board.post("two", NoticeTone::Success);

        assert!(second > first);
        let current = board.current().unwrap();
        assert_eq!(current.text, "two");
        assert_eq!(current.tone, NoticeTone::Success);
    }

    #[test]
    fn test_stale_ticket_does_not_clear() {
        let mut board = NoticeBoard::default();
        let stale = board.post("old", NoticeTone::Info);
        let fresh = board.post("new", NoticeTone::Info);

        assert!(!board.clear(stale));
        assert_eq!(board.current().map(|n| n.text.as_str()), Some("new"));

        assert!(board.clear(fresh));
        assert!(board.current().is_none());
    }

    #[test]
    fn test_expire() {
        let mut board = NoticeBoard::new(Duration::seconds(3));
        let t0 = Utc::now();
        board.post_at("hello", NoticeTone::Error, t0);

        assert!(!board.expire(t0 + Duration::seconds(2)));
        assert!(board.current().is_some());
        assert!(board.expire(t0 + Duration::seconds(3)));
        assert!(board.current().is_none());
    }

    #[test]
    fn test_huge_duration_saturates() {
        let mut board = NoticeBoard::new(Duration::milliseconds(i64::MAX));
        let t0 = Utc::now();
        board.post_at("forever", NoticeTone::Info, t0);

        let notice = board.current().unwrap();
        assert_eq!(notice.expires_at, DateTime::<Utc>::MAX_UTC);
        assert!(!board.expire(t0 + Duration::days(365)));
    }

    #[test]
    fn test_reset_keeps_ticket_sequence() {
        let mut board = NoticeBoard::default();
        let a = board.post("a", NoticeTone::Info);
        board.reset();
        let b = board.post("b", NoticeTone::Info);
        assert!(b > a);
        assert!(!board.clear(a));
    }
}
