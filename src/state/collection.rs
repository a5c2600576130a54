//! Collection view state machine.
//!
//! One [`CollectionState`] backs each list view. It owns the lifecycle
//! `Idle -> Loading -> {Ready, Failed}`, the last-fetched rows, and the
//! current page, and applies confirmed edit/delete outcomes to local
//! state without a re-fetch.
//!
//! The machine never performs I/O itself. Each operation is split into a
//! `begin_*` call (made on the event-loop thread before the request is
//! spawned) and an `apply_*` call (made when the completion message
//! arrives). Load completions carry the sequence number issued by
//! [`CollectionState::begin_load`]; stale completions are discarded, so
//! overlapping refreshes cannot let an older response overwrite a newer
//! one.

use serde_json::{Map, Value};

use crate::api::Resource;
use crate::error::{ConfigError, DeskError};
use crate::models::Record;
use crate::paging::{self, PAGE_WINDOW};

/// Lifecycle stage of a collection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// A mutation that has been issued but not yet confirmed by the server.
///
/// Holding the payload here means the confirmed outcome can be applied
/// to local state without re-fetching, and a second mutation can be
/// refused while one is pending.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingMutation {
    Edit {
        id: String,
        patch: Map<String, Value>,
    },
    Delete {
        id: String,
    },
}

impl PendingMutation {
    /// The identifier of the record being mutated.
    pub fn id(&self) -> &str {
        match self {
            PendingMutation::Edit { id, .. } => id,
            PendingMutation::Delete { id } => id,
        }
    }
}

/// State machine for one remote-backed paginated collection view.
#[derive(Debug, Clone)]
pub struct CollectionState {
    resource: Resource,
    items: Vec<Record>,
    phase: Phase,
    error_message: Option<String>,
    mutation_error: Option<String>,
    page: usize,
    page_size: usize,
    /// Sequence of the most recently issued load.
    latest_seq: u64,
    pending: Option<PendingMutation>,
}

impl CollectionState {
    /// Create a state machine for `resource` with a fixed page size.
    ///
    /// The page size is validated here so the pagination derivations are
    /// total afterwards.
    pub fn new(resource: Resource, page_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(Self {
            resource,
            items: Vec::new(),
            phase: Phase::Idle,
            error_message: None,
            mutation_error: None,
            page: 1,
            page_size,
            latest_seq: 0,
            pending: None,
        })
    }

    /// The collection this view is backed by.
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The loaded rows, in server response order.
    pub fn items(&self) -> &[Record] {
        &self.items
    }

    /// Load failure message; present only while `phase == Failed`.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Message from the most recent failed mutation, if any.
    pub fn mutation_error(&self) -> Option<&str> {
        self.mutation_error.as_deref()
    }

    /// Configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Return to the initial idle state, dropping loaded rows and any
    /// pending mutation. Used on sign-out.
    pub fn reset(&mut self) {
        self.items.clear();
        self.phase = Phase::Idle;
        self.error_message = None;
        self.mutation_error = None;
        self.page = 1;
        self.pending = None;
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Start a (re)load. Returns the sequence number the completion must
    /// carry back to [`Self::apply_load`].
    pub fn begin_load(&mut self) -> u64 {
        self.latest_seq += 1;
        self.phase = Phase::Loading;
        self.error_message = None;
        self.mutation_error = None;
        tracing::debug!(
            resource = self.resource.noun(),
            seq = self.latest_seq,
            "load started"
        );
        self.latest_seq
    }

    /// Apply a load completion.
    ///
    /// Returns `false` when the completion is stale (an overlapping load
    /// was issued after this one); stale results are discarded and the
    /// state is untouched. On success the rows replace the collection
    /// wholesale and the view returns to page 1; on failure the previous
    /// rows are kept and only the phase and message change.
    pub fn apply_load(&mut self, seq: u64, result: Result<Vec<Record>, DeskError>) -> bool {
        if seq < self.latest_seq {
            tracing::debug!(
                resource = self.resource.noun(),
                seq,
                latest = self.latest_seq,
                "stale load discarded"
            );
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = Phase::Ready;
                self.page = 1;
            }
            Err(err) => {
                self.error_message = Some(err.user_message());
                self.phase = Phase::Failed;
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Pagination (derived views)
    // ------------------------------------------------------------------

    /// Total number of pages for the loaded rows. Never less than 1.
    pub fn page_count(&self) -> usize {
        paging::page_count(self.items.len(), self.page_size)
    }

    /// Store a page selection, clamped into `[1, page_count]`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    /// The current page, clamped at read time.
    ///
    /// Deletions do not touch the stored page, so after removing the sole
    /// row of the last page the stored value can transiently exceed the
    /// new page count; this derive brings it back into range.
    pub fn current_page(&self) -> usize {
        self.page.clamp(1, self.page_count())
    }

    /// Advance one page, saturating at the last page.
    pub fn next_page(&mut self) {
        self.set_page(self.current_page() + 1);
    }

    /// Go back one page, saturating at the first page.
    pub fn prev_page(&mut self) {
        self.set_page(self.current_page().saturating_sub(1));
    }

    /// The rows visible on the current page.
    pub fn visible(&self) -> &[Record] {
        paging::visible_slice(&self.items, self.current_page(), self.page_size)
    }

    /// Page-number controls to render for the current position.
    pub fn page_controls(&self) -> Vec<usize> {
        paging::page_window(self.current_page(), self.page_count(), PAGE_WINDOW)
    }

    /// 1-based index of the first row shown, for the "Showing X-Y of N"
    /// line. Zero when the collection is empty.
    pub fn first_visible_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.current_page() - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last row shown.
    pub fn last_visible_index(&self) -> usize {
        (self.current_page() * self.page_size).min(self.items.len())
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Whether a mutation is in flight.
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// The in-flight mutation, if any.
    pub fn pending(&self) -> Option<&PendingMutation> {
        self.pending.as_ref()
    }

    /// Start an edit of the record with `id`. Returns `false` and does
    /// nothing when another mutation is still pending.
    pub fn begin_edit(&mut self, id: impl Into<String>, patch: Map<String, Value>) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.mutation_error = None;
        self.pending = Some(PendingMutation::Edit {
            id: id.into(),
            patch,
        });
        true
    }

    /// Start a delete of the record with `id`. Returns `false` and does
    /// nothing when another mutation is still pending.
    pub fn begin_delete(&mut self, id: impl Into<String>) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.mutation_error = None;
        self.pending = Some(PendingMutation::Delete { id: id.into() });
        true
    }

    /// Apply the outcome of the pending mutation.
    ///
    /// On success the confirmed change lands in local state: an edit
    /// merges the patch fields into the matching record, a delete removes
    /// it. On failure the rows are untouched and the message is surfaced.
    /// Local state never changes before server confirmation.
    pub fn apply_mutation(&mut self, result: Result<(), DeskError>) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        match result {
            Ok(()) => match pending {
                PendingMutation::Edit { id, patch } => {
                    if let Some(record) = self
                        .items
                        .iter_mut()
                        .find(|r| r.id().as_deref() == Some(id.as_str()))
                    {
                        record.merge(&patch);
                    }
                }
                PendingMutation::Delete { id } => {
                    self.items
                        .retain(|r| r.id().as_deref() != Some(id.as_str()));
                }
            },
            Err(err) => {
                tracing::warn!(
                    resource = self.resource.noun(),
                    code = err.error_code(),
                    "mutation failed"
                );
                self.mutation_error = Some(err.user_message());
            }
        }
    }
}
