//! Application state containers.

mod collection;

pub use collection::{CollectionState, PendingMutation, Phase};
