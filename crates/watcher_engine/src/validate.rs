use serde_json::Value;

use watcher_core::{ReviewStatus, Submission, UndocumentedStatus};

use crate::types::{PollError, PollKind};

/// Checks the structural shape of a poll answer and extracts the
/// submission list.
///
/// An empty list is the legitimate "not yet reviewed" state and comes back
/// as `Ok`; every other irregularity is a classified error.
pub fn validate(payload: &Value) -> Result<Vec<Submission>, PollError> {
    let object = match payload {
        Value::Null => {
            return Err(PollError::new(PollKind::EmptyAnswer, "answer is null"));
        }
        Value::Object(map) if map.is_empty() => {
            return Err(PollError::new(
                PollKind::EmptyAnswer,
                "answer is an empty object",
            ));
        }
        Value::Object(map) => map,
        other => {
            return Err(PollError::new(
                PollKind::MalformedShape,
                format!("answer is not an object: {other}"),
            ));
        }
    };

    let Some(homeworks) = object.get("homeworks") else {
        let present: Vec<String> = object.keys().cloned().collect();
        let message = format!("key \"homeworks\" is absent; present keys: {present:?}");
        return Err(PollError::new(PollKind::MissingKey { present }, message));
    };

    let Value::Array(entries) = homeworks else {
        return Err(PollError::new(
            PollKind::MalformedShape,
            "value under \"homeworks\" is not a list",
        ));
    };

    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let submissions: Vec<Submission> = entries
        .iter()
        .map(|entry| serde_json::from_value(entry.clone()))
        .collect::<Result<_, _>>()
        .map_err(|err| {
            PollError::new(
                PollKind::MalformedShape,
                format!("submission entry does not parse: {err}"),
            )
        })?;

    // Only the first entry is ever consulted downstream.
    let first = &submissions[0];
    if ReviewStatus::from_code(&first.status).is_none() {
        return Err(UndocumentedStatus {
            code: first.status.clone(),
        }
        .into());
    }

    Ok(submissions)
}
