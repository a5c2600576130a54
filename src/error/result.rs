//! Result type alias for application code.

use super::desk_error::DeskError;

/// Result type alias using [`DeskError`].
pub type DeskResult<T> = Result<T, DeskError>;
