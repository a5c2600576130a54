//! Data model types shared across the application.

mod record;
mod user;

pub use record::Record;
pub use user::{EditDraft, Role, Status, UserPatch};
