//! Homework grading queue: uploads, server grading, local review, confirm.
//!
//! DESIGN
//! ======
//! Each uploaded page moves through a linear pipeline:
//!
//! ```text
//! Queued -> Uploading -> Processing -> PendingReview -> Confirmed
//!              |             |
//!              +--> Failed <-+        Failed --retry--> Queued
//! ```
//!
//! While an item is pending review the user may overrule the grader per
//! problem. Server verdicts and local overrides are merged last-write-wins per
//! problem index: a server verdict is stamped with the submission's
//! `graded_at`, an override with the moment it was recorded. A regrade that
//! lands after an override therefore beats it.
//!
//! The queue and overrides persist in localStorage (raw image bytes never do)
//! and overrides for a submission are cleared once it is confirmed.

#[cfg(test)]
#[path = "grading_test.rs"]
mod grading_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::net::types::homework::{ConfirmRequest, ConfirmedVerdict, ProblemResult, Submission, SubmissionStatus};
use crate::util::ui_persistence::{KeyValueStore, load_json, save_json};

/// localStorage key for the persisted queue.
pub const STORAGE_KEY: &str = "homework_grading_queue_v1";

const INTERRUPTED: &str = "upload interrupted; add the page again";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    Queued,
    Uploading,
    Processing,
    PendingReview,
    Confirmed,
    Failed,
}

impl QueueStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Uploading => "uploading",
            Self::Processing => "processing",
            Self::PendingReview => "pending review",
            Self::Confirmed => "confirmed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pipeline step attempted on an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueAction {
    StartUpload,
    UploadSucceeded,
    UploadFailed,
    ServerResult,
    Override,
    Confirm,
    Retry,
}

impl fmt::Display for QueueAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StartUpload => "start upload",
            Self::UploadSucceeded => "finish upload",
            Self::UploadFailed => "fail upload",
            Self::ServerResult => "apply grading result",
            Self::Override => "override a verdict",
            Self::Confirm => "confirm",
            Self::Retry => "retry",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("no queued item {0}")]
    UnknownItem(String),
    #[error("no queued item for submission {0}")]
    UnknownSubmission(String),
    #[error("submission {submission} has no problem {index}")]
    UnknownProblem { submission: String, index: i64 },
    #[error("cannot {action} while {from}")]
    InvalidTransition { from: QueueStatus, action: QueueAction },
    #[error("the file for {0} is no longer available; add it again")]
    PayloadUnavailable(String),
}

/// Raw page image waiting to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    pub id: String,
    pub file_name: String,
    pub status: QueueStatus,
    pub submission_id: Option<String>,
    pub error: Option<String>,
    /// Grader verdicts as last reported by the server.
    pub results: Vec<ProblemResult>,
    pub graded_at: i64,
    pub enqueued_at: i64,
    #[serde(skip)]
    pub payload: Option<Upload>,
}

/// A locally recorded correctness verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    pub updated_at: i64,
}

/// One problem after merging server truth with local overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedResult {
    pub index: i64,
    pub question: Option<String>,
    pub student_answer: Option<String>,
    pub expected_answer: Option<String>,
    pub comment: Option<String>,
    pub correct: bool,
    pub server_correct: bool,
    /// The local override won the merge.
    pub overridden: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingQueue {
    items: Vec<QueueItem>,
    /// submission id -> problem index -> local verdict
    overrides: BTreeMap<String, BTreeMap<i64, Verdict>>,
}

impl GradingQueue {
    /// Load the persisted queue. Items caught mid-upload cannot resume since
    /// their bytes were not persisted, so they come back failed.
    #[must_use]
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let mut queue: Self = load_json(store, STORAGE_KEY).unwrap_or_default();
        for item in &mut queue.items {
            if matches!(item.status, QueueStatus::Queued | QueueStatus::Uploading) {
                item.status = QueueStatus::Failed;
                item.error = Some(INTERRUPTED.to_owned());
            }
        }
        queue
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        if self.items.is_empty() && self.overrides.is_empty() {
            store.remove(STORAGE_KEY);
        } else {
            save_json(store, STORAGE_KEY, self);
        }
    }

    #[must_use]
    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&QueueItem> {
        self.items.iter().find(|i| i.id == id)
    }

    #[must_use]
    pub fn by_submission(&self, submission_id: &str) -> Option<&QueueItem> {
        self.items
            .iter()
            .find(|i| i.submission_id.as_deref() == Some(submission_id))
    }

    #[must_use]
    pub fn count(&self, status: QueueStatus) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }

    /// Oldest item waiting for upload.
    #[must_use]
    pub fn next_queued(&self) -> Option<&QueueItem> {
        self.items
            .iter()
            .filter(|i| i.status == QueueStatus::Queued)
            .min_by_key(|i| i.enqueued_at)
    }

    /// Submissions the server is still grading.
    #[must_use]
    pub fn processing_submissions(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|i| i.status == QueueStatus::Processing)
            .filter_map(|i| i.submission_id.clone())
            .collect()
    }

    /// Add a page to the queue and return its local id.
    pub fn enqueue(&mut self, upload: Upload, now: i64) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(QueueItem {
            id: id.clone(),
            file_name: upload.file_name.clone(),
            status: QueueStatus::Queued,
            submission_id: None,
            error: None,
            results: Vec::new(),
            graded_at: 0,
            enqueued_at: now,
            payload: Some(upload),
        });
        id
    }

    /// `Queued -> Uploading`; returns the bytes to send.
    ///
    /// # Errors
    ///
    /// Unknown item, wrong state, or missing payload.
    pub fn start_upload(&mut self, id: &str) -> Result<Upload, QueueError> {
        let item = self.item_mut(id)?;
        expect_status(item, QueueAction::StartUpload, &[QueueStatus::Queued])?;
        let upload = item
            .payload
            .clone()
            .ok_or_else(|| QueueError::PayloadUnavailable(id.to_owned()))?;
        item.status = QueueStatus::Uploading;
        item.error = None;
        Ok(upload)
    }

    /// `Uploading -> Processing`.
    ///
    /// # Errors
    ///
    /// Unknown item or wrong state.
    pub fn upload_succeeded(&mut self, id: &str, submission_id: &str) -> Result<(), QueueError> {
        let item = self.item_mut(id)?;
        expect_status(item, QueueAction::UploadSucceeded, &[QueueStatus::Uploading])?;
        item.status = QueueStatus::Processing;
        item.submission_id = Some(submission_id.to_owned());
        Ok(())
    }

    /// `Uploading -> Failed`.
    ///
    /// # Errors
    ///
    /// Unknown item or wrong state.
    pub fn upload_failed(&mut self, id: &str, error: &str) -> Result<(), QueueError> {
        let item = self.item_mut(id)?;
        expect_status(item, QueueAction::UploadFailed, &[QueueStatus::Uploading])?;
        item.status = QueueStatus::Failed;
        item.error = Some(error.to_owned());
        Ok(())
    }

    /// Fold a polled submission into its item and return the item's new status.
    ///
    /// `processing` leaves the item alone; `graded` moves it to review (a
    /// regrade while in review replaces the server results); `failed` fails
    /// it; `confirmed` (confirmed elsewhere) finishes it.
    ///
    /// # Errors
    ///
    /// Unknown submission or a result that does not fit the item's state.
    pub fn apply_server_result(&mut self, submission: &Submission) -> Result<QueueStatus, QueueError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.submission_id.as_deref() == Some(submission.id.as_str()))
            .ok_or_else(|| QueueError::UnknownSubmission(submission.id.clone()))?;
        let item = &mut self.items[idx];
        match submission.status {
            SubmissionStatus::Processing => {
                expect_status(item, QueueAction::ServerResult, &[QueueStatus::Processing])?;
            }
            SubmissionStatus::Graded => {
                expect_status(
                    item,
                    QueueAction::ServerResult,
                    &[QueueStatus::Processing, QueueStatus::PendingReview],
                )?;
                item.status = QueueStatus::PendingReview;
                item.results = submission.results.clone();
                item.results.sort_by_key(|r| r.index);
                item.graded_at = submission.graded_at;
            }
            SubmissionStatus::Failed => {
                expect_status(item, QueueAction::ServerResult, &[QueueStatus::Processing])?;
                item.status = QueueStatus::Failed;
                item.error = Some(submission.error.clone().unwrap_or_else(|| "grading failed".to_owned()));
            }
            SubmissionStatus::Confirmed => {
                expect_status(
                    item,
                    QueueAction::ServerResult,
                    &[QueueStatus::Processing, QueueStatus::PendingReview, QueueStatus::Confirmed],
                )?;
                item.status = QueueStatus::Confirmed;
                item.results = submission.results.clone();
                item.payload = None;
                self.overrides.remove(&submission.id);
            }
        }
        Ok(self.items[idx].status)
    }

    /// Record the user's verdict for one problem.
    ///
    /// # Errors
    ///
    /// Unknown submission, or the submission is not pending review.
    pub fn set_override(
        &mut self,
        submission_id: &str,
        index: i64,
        correct: bool,
        now: i64,
    ) -> Result<(), QueueError> {
        let item = self
            .by_submission(submission_id)
            .ok_or_else(|| QueueError::UnknownSubmission(submission_id.to_owned()))?;
        if item.status != QueueStatus::PendingReview {
            return Err(QueueError::InvalidTransition { from: item.status, action: QueueAction::Override });
        }
        self.overrides
            .entry(submission_id.to_owned())
            .or_default()
            .insert(index, Verdict { correct, updated_at: now });
        Ok(())
    }

    /// Flip the merged verdict of one problem.
    ///
    /// # Errors
    ///
    /// See [`GradingQueue::set_override`]; also fails for unknown indexes.
    pub fn toggle(&mut self, submission_id: &str, index: i64, now: i64) -> Result<(), QueueError> {
        if self.by_submission(submission_id).is_none() {
            return Err(QueueError::UnknownSubmission(submission_id.to_owned()));
        }
        let current = self
            .merged_results(submission_id)
            .into_iter()
            .find(|r| r.index == index)
            .ok_or_else(|| QueueError::UnknownProblem { submission: submission_id.to_owned(), index })?;
        self.set_override(submission_id, index, !current.correct, now)
    }

    pub fn clear_override(&mut self, submission_id: &str, index: i64) {
        if let Some(map) = self.overrides.get_mut(submission_id) {
            map.remove(&index);
            if map.is_empty() {
                self.overrides.remove(submission_id);
            }
        }
    }

    #[must_use]
    pub fn overrides_for(&self, submission_id: &str) -> Option<&BTreeMap<i64, Verdict>> {
        self.overrides.get(submission_id)
    }

    /// Server results merged with local overrides, ordered by problem index.
    /// Overrides for problems the server did not report are ignored.
    #[must_use]
    pub fn merged_results(&self, submission_id: &str) -> Vec<MergedResult> {
        let Some(item) = self.by_submission(submission_id) else {
            return Vec::new();
        };
        let local = self.overrides.get(submission_id);
        let mut merged: Vec<MergedResult> = item
            .results
            .iter()
            .map(|r| {
                let winner = local
                    .and_then(|m| m.get(&r.index))
                    .filter(|v| v.updated_at >= item.graded_at);
                MergedResult {
                    index: r.index,
                    question: r.question.clone(),
                    student_answer: r.student_answer.clone(),
                    expected_answer: r.expected_answer.clone(),
                    comment: r.comment.clone(),
                    correct: winner.map_or(r.correct, |v| v.correct),
                    server_correct: r.correct,
                    overridden: winner.is_some(),
                }
            })
            .collect();
        merged.sort_by_key(|r| r.index);
        merged
    }

    /// `(correct, total)` over the merged results.
    #[must_use]
    pub fn score(&self, submission_id: &str) -> (usize, usize) {
        let merged = self.merged_results(submission_id);
        (merged.iter().filter(|r| r.correct).count(), merged.len())
    }

    /// Body for the confirm endpoint.
    ///
    /// # Errors
    ///
    /// Unknown submission, or the submission is not pending review.
    pub fn confirm_payload(&self, submission_id: &str) -> Result<ConfirmRequest, QueueError> {
        let item = self
            .by_submission(submission_id)
            .ok_or_else(|| QueueError::UnknownSubmission(submission_id.to_owned()))?;
        expect_status(item, QueueAction::Confirm, &[QueueStatus::PendingReview])?;
        let results = self
            .merged_results(submission_id)
            .into_iter()
            .map(|r| ConfirmedVerdict { index: r.index, correct: r.correct })
            .collect();
        Ok(ConfirmRequest { results })
    }

    /// `PendingReview -> Confirmed` after the server accepted the verdicts.
    /// The confirmed verdicts become the item's results and its overrides are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Unknown submission or wrong state.
    pub fn mark_confirmed(&mut self, submission_id: &str) -> Result<(), QueueError> {
        let merged = self.merged_results(submission_id);
        let idx = self
            .items
            .iter()
            .position(|i| i.submission_id.as_deref() == Some(submission_id))
            .ok_or_else(|| QueueError::UnknownSubmission(submission_id.to_owned()))?;
        let item = &mut self.items[idx];
        expect_status(item, QueueAction::Confirm, &[QueueStatus::PendingReview])?;
        for result in &mut item.results {
            if let Some(m) = merged.iter().find(|m| m.index == result.index) {
                result.correct = m.correct;
            }
        }
        item.status = QueueStatus::Confirmed;
        item.payload = None;
        self.overrides.remove(submission_id);
        Ok(())
    }

    /// `Failed -> Queued`: the whole upload starts over.
    ///
    /// # Errors
    ///
    /// Unknown item, wrong state, or the bytes are gone (restored items).
    pub fn retry(&mut self, id: &str) -> Result<(), QueueError> {
        let item = self.item_mut(id)?;
        expect_status(item, QueueAction::Retry, &[QueueStatus::Failed])?;
        if item.payload.is_none() {
            return Err(QueueError::PayloadUnavailable(id.to_owned()));
        }
        let stale_submission = item.submission_id.take();
        item.status = QueueStatus::Queued;
        item.error = None;
        item.results.clear();
        item.graded_at = 0;
        if let Some(sid) = stale_submission {
            self.overrides.remove(&sid);
        }
        Ok(())
    }

    /// Drop an item and its overrides.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(idx) = self.items.iter().position(|i| i.id == id) else {
            return false;
        };
        let item = self.items.remove(idx);
        if let Some(sid) = item.submission_id {
            self.overrides.remove(&sid);
        }
        true
    }

    /// Remove confirmed items; returns how many were removed.
    pub fn prune_confirmed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|i| i.status != QueueStatus::Confirmed);
        before - self.items.len()
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut QueueItem, QueueError> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| QueueError::UnknownItem(id.to_owned()))
    }
}

fn expect_status(item: &QueueItem, action: QueueAction, allowed: &[QueueStatus]) -> Result<(), QueueError> {
    if allowed.contains(&item.status) {
        Ok(())
    } else {
        Err(QueueError::InvalidTransition { from: item.status, action })
    }
}
