//! Watcher engine: the IO side of the poll cycle.
mod fetch;
mod notify;
mod types;
mod validate;

pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use notify::{Notifier, NotifyError, TelegramNotifier};
pub use types::{PollError, PollKind};
pub use validate::validate;
