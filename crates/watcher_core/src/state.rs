use crate::status::NOT_YET_REVIEWED;

/// Loop-persistent state: the last sentence actually delivered and the
/// lower-bound timestamp for the next poll. Lives for the process
/// lifetime; a restart re-sends the current status once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchState {
    last_notice: String,
    cursor: i64,
}

impl WatchState {
    pub fn new(start: i64) -> Self {
        Self {
            last_notice: NOT_YET_REVIEWED.to_string(),
            cursor: start,
        }
    }

    /// Epoch-second lower bound for the next poll.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// The last sentence a send was confirmed for.
    pub fn last_notice(&self) -> &str {
        &self.last_notice
    }

    pub(crate) fn advance_cursor(&mut self, now: i64) {
        self.cursor = now;
    }

    pub(crate) fn record_delivery(&mut self, text: String) {
        self.last_notice = text;
    }
}
