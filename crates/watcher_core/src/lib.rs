//! Watcher core: pure change-detection state machine and verdict table.
mod effect;
mod msg;
mod state;
mod status;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use state::WatchState;
pub use status::{
    translate, ReviewStatus, Submission, UndocumentedStatus, NOT_YET_REVIEWED, UNNAMED_SUBMISSION,
};
pub use update::update;
