//! Messages delivered back to the event loop by background tasks.
//!
//! All I/O completions arrive as [`AppMessage`] values on the app's mpsc
//! channel and are applied on the single event-loop thread. A view torn
//! down before its request completes simply never sees the message.

use crate::api::Resource;
use crate::auth::CurrentUser;
use crate::error::DeskResult;
use crate::models::Record;

/// A completion event from a spawned background task.
#[derive(Debug)]
pub enum AppMessage {
    /// A collection load finished. `seq` is the sequence issued by
    /// `CollectionState::begin_load`; stale completions are discarded.
    CollectionLoaded {
        resource: Resource,
        seq: u64,
        result: DeskResult<Vec<Record>>,
    },

    /// An edit or delete finished.
    MutationFinished {
        resource: Resource,
        result: DeskResult<()>,
    },

    /// The sign-in call finished.
    SignInFinished { result: DeskResult<CurrentUser> },
}
