//! Upload-queue state for the mocked ingestion flow.
//!
//! DESIGN
//! ======
//! Items move `Uploading -> Processing -> Indexed` through `apply_tick`
//! calls scheduled by the upload page. The struct never touches timers or
//! randomness itself: ticks arrive with a pre-drawn bump, so every
//! transition here is deterministic and natively testable.
//!
//! Invariant: `progress` is monotonically non-decreasing, stays in
//! `[0, 100]`, and an `Indexed` item is terminal — later ticks are no-ops.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::util::format::format_size;

/// Progress assigned to a freshly queued item.
pub const INITIAL_PROGRESS: f64 = 8.0;

/// Progress threshold past which an item snaps to `Indexed`/100.
pub const INDEXED_THRESHOLD: f64 = 98.0;

/// Most recent items kept in the queue; older entries fall off the end.
pub const QUEUE_CAP: usize = 12;

/// Display status of a queued file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Uploading,
    Processing,
    Indexed,
}

impl UploadStatus {
    /// Bracketed label shown in the queue and the document sidebar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Uploading => "[UPLOADING]",
            Self::Processing => "[PROCESSING]",
            Self::Indexed => "[INDEXED]",
        }
    }
}

/// One file in the mocked upload queue.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadItem {
    /// Opaque unique identifier.
    pub id: String,
    /// File name as selected.
    pub name: String,
    /// Pre-formatted size, e.g. `4.2 KB`.
    pub display_size: String,
    pub status: UploadStatus,
    /// Simulated progress in `[0, 100]`.
    pub progress: f64,
}

impl UploadItem {
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            display_size: format_size(size_bytes),
            status: UploadStatus::Uploading,
            progress: INITIAL_PROGRESS,
        }
    }
}

/// State for the upload page: the visible queue, newest first.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub items: Vec<UploadItem>,
}

impl UploadState {
    /// Queue newly selected files, newest first, and return their IDs so the
    /// caller can schedule progress ticks. Empty selections are a no-op and
    /// the queue is truncated to [`QUEUE_CAP`] entries.
    pub fn enqueue(&mut self, files: Vec<UploadItem>) -> Vec<String> {
        if files.is_empty() {
            return Vec::new();
        }
        let ids = files.iter().map(|f| f.id.clone()).collect();
        let mut queue = files;
        queue.append(&mut self.items);
        queue.truncate(QUEUE_CAP);
        self.items = queue;
        ids
    }

    /// Apply one planned progress tick to the item with `id`.
    ///
    /// Negative bumps are clamped to zero so progress never regresses.
    /// Unknown IDs (item fell off the queue cap) and `Indexed` items are
    /// ignored.
    pub fn apply_tick(&mut self, id: &str, bump: f64) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        if item.status == UploadStatus::Indexed {
            return;
        }
        let bumped = (item.progress + bump.max(0.0)).min(100.0);
        if bumped > INDEXED_THRESHOLD {
            item.progress = 100.0;
            item.status = UploadStatus::Indexed;
        } else {
            item.progress = bumped;
            item.status = UploadStatus::Processing;
        }
    }

    /// True when every queued item has finished indexing. Vacuously true for
    /// an empty queue; the chat gate additionally requires a non-empty queue.
    #[must_use]
    pub fn all_indexed(&self) -> bool {
        self.items.iter().all(|item| item.status == UploadStatus::Indexed)
    }
}
