//! The poll-sleep cycle: fetch, validate, update, send.

use std::time::Duration;

use chrono::Utc;
use log::{error, warn};
use watcher_core::{update, Effect, Msg, Submission, WatchState};
use watcher_engine::{validate, Fetcher, Notifier, PollError};

/// Runs the watch loop forever with the given backoff interval. The same
/// interval paces normal cycles and retries after a failed one.
pub async fn run(fetcher: &dyn Fetcher, notifier: &dyn Notifier, interval: Duration) {
    let mut state = WatchState::new(Utc::now().timestamp());
    loop {
        state = run_cycle(fetcher, notifier, state, Utc::now().timestamp()).await;
        tokio::time::sleep(interval).await;
    }
}

/// One poll round-trip. Failures are folded into the state machine and
/// reported best-effort; the caller keeps cycling regardless of the
/// outcome.
pub async fn run_cycle(
    fetcher: &dyn Fetcher,
    notifier: &dyn Notifier,
    state: WatchState,
    now: i64,
) -> WatchState {
    let msg = match poll(fetcher, state.cursor()).await {
        Ok(submissions) => Msg::PollSucceeded { submissions, now },
        Err(err) => {
            error!("Poll cycle failed: {err}");
            Msg::PollFailed {
                report: err.to_string(),
            }
        }
    };

    let (mut state, effects) = update(state, msg);
    for effect in effects {
        match effect {
            Effect::SendNotice { text } => match notifier.notify(&text).await {
                Ok(()) => {
                    let (next, _) = update(state, Msg::NoticeDelivered { text });
                    state = next;
                }
                Err(err) => {
                    // Last notice stays unchanged; the sentence is retried
                    // next cycle.
                    error!("Could not deliver notice: {err}");
                }
            },
            Effect::SendMalfunctionReport { text } => {
                if let Err(err) = notifier.notify(&text).await {
                    warn!("Could not deliver malfunction report: {err}");
                }
            }
        }
    }
    state
}

async fn poll(fetcher: &dyn Fetcher, cursor: i64) -> Result<Vec<Submission>, PollError> {
    let payload = fetcher.fetch(cursor).await?;
    validate(&payload)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{json, Value};
    use watcher_core::NOT_YET_REVIEWED;
    use watcher_engine::{NotifyError, PollKind};

    use super::*;

    struct ScriptedFetcher {
        answers: Mutex<VecDeque<Result<Value, PollError>>>,
    }

    impl ScriptedFetcher {
        fn new(answers: Vec<Result<Value, PollError>>) -> Self {
            Self {
                answers: Mutex::new(answers.into()),
            }
        }
    }

    #[async_trait]
    impl Fetcher for ScriptedFetcher {
        async fn fetch(&self, _cursor: i64) -> Result<Value, PollError> {
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .expect("fetcher called more times than scripted")
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
        failures_left: Mutex<u32>,
    }

    impl RecordingNotifier {
        fn failing_first(failures: u32) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                failures_left: Mutex::new(failures),
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, text: &str) -> Result<(), NotifyError> {
            let mut failures = self.failures_left.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(NotifyError::Rejected("chat unavailable".to_string()));
            }
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn reviewing_answer() -> Value {
        json!({ "homeworks": [{ "status": "reviewing", "homework_name": "hw1" }] })
    }

    #[tokio::test]
    async fn unchanged_remote_state_notifies_once() {
        let fetcher = ScriptedFetcher::new(vec![
            Ok(reviewing_answer()),
            Ok(reviewing_answer()),
            Ok(reviewing_answer()),
        ]);
        let notifier = RecordingNotifier::default();

        let mut state = WatchState::new(0);
        for now in 1..=3 {
            state = run_cycle(&fetcher, &notifier, state, now).await;
        }

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].ends_with("The work has been taken up for review."));
        assert_eq!(state.last_notice(), sent[0]);
        assert_eq!(state.cursor(), 3);
    }

    #[tokio::test]
    async fn unavailable_endpoint_is_reported_and_recovered_from() {
        let fetcher = ScriptedFetcher::new(vec![
            Err(PollError::new(
                PollKind::HttpStatus(503),
                "endpoint answered 503 Service Unavailable",
            )),
            Ok(json!({ "homeworks": [] })),
        ]);
        let notifier = RecordingNotifier::default();

        let state = WatchState::new(10);
        let state = run_cycle(&fetcher, &notifier, state, 20).await;
        // Failed cycle: malfunction report sent, cursor untouched.
        assert_eq!(state.cursor(), 10);
        assert_eq!(
            notifier.sent(),
            vec![
                "program malfunction: http status 503: endpoint answered 503 Service Unavailable"
                    .to_string()
            ]
        );

        let state = run_cycle(&fetcher, &notifier, state, 30).await;
        // Recovery: empty list matches the placeholder, nothing new is sent.
        assert_eq!(state.cursor(), 30);
        assert_eq!(state.last_notice(), NOT_YET_REVIEWED);
        assert_eq!(notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn failed_delivery_is_retried_next_cycle() {
        let fetcher = ScriptedFetcher::new(vec![Ok(reviewing_answer()), Ok(reviewing_answer())]);
        let notifier = RecordingNotifier::failing_first(1);

        let state = WatchState::new(0);
        let state = run_cycle(&fetcher, &notifier, state, 1).await;
        // Send failed: the loop goes on, the notice is not recorded.
        assert_eq!(state.last_notice(), NOT_YET_REVIEWED);
        assert!(notifier.sent().is_empty());

        let state = run_cycle(&fetcher, &notifier, state, 2).await;
        assert_eq!(notifier.sent().len(), 1);
        assert_eq!(state.last_notice(), notifier.sent()[0]);
    }

    #[tokio::test]
    async fn malformed_answer_is_reported_without_advancing_cursor() {
        let fetcher = ScriptedFetcher::new(vec![Ok(json!({ "homeworks": "soon" }))]);
        let notifier = RecordingNotifier::default();

        let state = run_cycle(&fetcher, &notifier, WatchState::new(5), 6).await;

        assert_eq!(state.cursor(), 5);
        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("program malfunction: malformed answer"));
    }
}
