use crate::status::{translate, NOT_YET_REVIEWED};
use crate::{Effect, Msg, WatchState};

/// Pure update function: applies one cycle outcome to the state and
/// returns the sends the runner should perform.
///
/// The cursor advances only when a cycle delivered a translatable answer;
/// the last notice changes only on `NoticeDelivered`, which is what makes
/// the at-most-once-per-sentence invariant hold.
pub fn update(mut state: WatchState, msg: Msg) -> (WatchState, Vec<Effect>) {
    let effects = match msg {
        Msg::PollSucceeded { submissions, now } => {
            let derived = match submissions.first() {
                None => Ok(NOT_YET_REVIEWED.to_string()),
                Some(submission) => translate(submission).map_err(|err| err.to_string()),
            };
            match derived {
                Ok(text) => {
                    state.advance_cursor(now);
                    if text != state.last_notice() {
                        vec![Effect::SendNotice { text }]
                    } else {
                        Vec::new()
                    }
                }
                Err(report) => vec![Effect::SendMalfunctionReport {
                    text: malfunction_report(&report),
                }],
            }
        }
        Msg::PollFailed { report } => vec![Effect::SendMalfunctionReport {
            text: malfunction_report(&report),
        }],
        Msg::NoticeDelivered { text } => {
            state.record_delivery(text);
            Vec::new()
        }
    };

    (state, effects)
}

fn malfunction_report(error: &str) -> String {
    format!("program malfunction: {error}")
}
