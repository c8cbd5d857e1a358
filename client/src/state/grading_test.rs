use super::*;
use crate::util::ui_persistence::MemoryStore;

fn page(name: &str) -> Upload {
    Upload {
        file_name: name.to_owned(),
        content_type: "image/jpeg".to_owned(),
        bytes: vec![0xff, 0xd8, 0xff],
    }
}

fn result(index: i64, correct: bool) -> ProblemResult {
    ProblemResult {
        index,
        question: Some(format!("q{index}")),
        student_answer: None,
        expected_answer: None,
        correct,
        comment: None,
    }
}

fn graded(id: &str, graded_at: i64, results: Vec<ProblemResult>) -> Submission {
    Submission {
        id: id.to_owned(),
        status: SubmissionStatus::Graded,
        results,
        graded_at,
        error: None,
    }
}

fn with_status(id: &str, status: SubmissionStatus) -> Submission {
    Submission { id: id.to_owned(), status, results: Vec::new(), graded_at: 0, error: None }
}

/// Queue with one item graded as submission `s1` at t=100.
fn reviewing() -> (GradingQueue, String) {
    let mut q = GradingQueue::default();
    let id = q.enqueue(page("p1.jpg"), 1);
    q.start_upload(&id).unwrap();
    q.upload_succeeded(&id, "s1").unwrap();
    q.apply_server_result(&graded("s1", 100, vec![result(2, false), result(1, true), result(3, true)]))
        .unwrap();
    (q, id)
}

#[test]
fn happy_path_walks_every_state() {
    let mut q = GradingQueue::default();
    let id = q.enqueue(page("p1.jpg"), 1);
    assert_eq!(q.item(&id).unwrap().status, QueueStatus::Queued);
    assert_eq!(q.next_queued().unwrap().id, id);

    let upload = q.start_upload(&id).unwrap();
    assert_eq!(upload.file_name, "p1.jpg");
    assert_eq!(q.item(&id).unwrap().status, QueueStatus::Uploading);
    assert!(q.next_queued().is_none());

    q.upload_succeeded(&id, "s1").unwrap();
    assert_eq!(q.processing_submissions(), vec!["s1".to_owned()]);

    let status = q.apply_server_result(&with_status("s1", SubmissionStatus::Processing)).unwrap();
    assert_eq!(status, QueueStatus::Processing);

    let status = q.apply_server_result(&graded("s1", 100, vec![result(1, true)])).unwrap();
    assert_eq!(status, QueueStatus::PendingReview);

    q.mark_confirmed("s1").unwrap();
    assert_eq!(q.item(&id).unwrap().status, QueueStatus::Confirmed);
    assert!(q.item(&id).unwrap().payload.is_none());
}

#[test]
fn invalid_transition_reports_state_and_action() {
    let mut q = GradingQueue::default();
    let id = q.enqueue(page("p1.jpg"), 1);
    let err = q.upload_succeeded(&id, "s1").unwrap_err();
    assert_eq!(
        err,
        QueueError::InvalidTransition { from: QueueStatus::Queued, action: QueueAction::UploadSucceeded }
    );
    assert_eq!(err.to_string(), "cannot finish upload while queued");
    assert_eq!(q.retry(&id).unwrap_err(), QueueError::InvalidTransition {
        from: QueueStatus::Queued,
        action: QueueAction::Retry,
    });
}

#[test]
fn unknown_ids_are_errors() {
    let mut q = GradingQueue::default();
    assert_eq!(q.start_upload("nope").unwrap_err(), QueueError::UnknownItem("nope".into()));
    assert_eq!(
        q.apply_server_result(&with_status("s9", SubmissionStatus::Graded)).unwrap_err(),
        QueueError::UnknownSubmission("s9".into())
    );
}

#[test]
fn upload_failure_then_retry_requeues() {
    let mut q = GradingQueue::default();
    let id = q.enqueue(page("p1.jpg"), 1);
    q.start_upload(&id).unwrap();
    q.upload_failed(&id, "network error").unwrap();
    let item = q.item(&id).unwrap();
    assert_eq!(item.status, QueueStatus::Failed);
    assert_eq!(item.error.as_deref(), Some("network error"));

    q.retry(&id).unwrap();
    let item = q.item(&id).unwrap();
    assert_eq!(item.status, QueueStatus::Queued);
    assert!(item.error.is_none());
}

#[test]
fn grading_failure_fails_item_with_server_message() {
    let mut q = GradingQueue::default();
    let id = q.enqueue(page("p1.jpg"), 1);
    q.start_upload(&id).unwrap();
    q.upload_succeeded(&id, "s1").unwrap();
    let mut failed = with_status("s1", SubmissionStatus::Failed);
    failed.error = Some("blurry image".into());
    assert_eq!(q.apply_server_result(&failed).unwrap(), QueueStatus::Failed);
    assert_eq!(q.item(&id).unwrap().error.as_deref(), Some("blurry image"));

    q.retry(&id).unwrap();
    assert!(q.item(&id).unwrap().submission_id.is_none());
}

#[test]
fn merged_results_are_sorted_by_index() {
    let (q, _) = reviewing();
    let indexes: Vec<i64> = q.merged_results("s1").iter().map(|r| r.index).collect();
    assert_eq!(indexes, vec![1, 2, 3]);
    assert_eq!(q.score("s1"), (2, 3));
}

#[test]
fn later_override_wins() {
    let (mut q, _) = reviewing();
    q.set_override("s1", 2, true, 150).unwrap();
    let merged = q.merged_results("s1");
    let row = merged.iter().find(|r| r.index == 2).unwrap();
    assert!(row.correct);
    assert!(!row.server_correct);
    assert!(row.overridden);
    assert_eq!(q.score("s1"), (3, 3));
}

#[test]
fn regrade_after_override_beats_it() {
    let (mut q, _) = reviewing();
    q.set_override("s1", 2, true, 150).unwrap();
    q.apply_server_result(&graded("s1", 200, vec![result(1, true), result(2, false), result(3, true)]))
        .unwrap();
    let row = q.merged_results("s1").into_iter().find(|r| r.index == 2).unwrap();
    assert!(!row.correct);
    assert!(!row.overridden);
}

#[test]
fn override_for_unreported_index_is_ignored() {
    let (mut q, _) = reviewing();
    q.set_override("s1", 9, true, 150).unwrap();
    assert_eq!(q.merged_results("s1").len(), 3);
    assert_eq!(q.score("s1"), (2, 3));
}

#[test]
fn toggle_flips_merged_verdict() {
    let (mut q, _) = reviewing();
    q.toggle("s1", 1, 150).unwrap();
    assert!(!q.merged_results("s1")[0].correct);
    q.toggle("s1", 1, 160).unwrap();
    assert!(q.merged_results("s1")[0].correct);
}

#[test]
fn toggle_reports_unknown_problem_and_submission() {
    let (mut q, _) = reviewing();
    assert_eq!(
        q.toggle("s1", 42, 170),
        Err(QueueError::UnknownProblem { submission: "s1".into(), index: 42 })
    );
    assert_eq!(q.toggle("nope", 1, 170), Err(QueueError::UnknownSubmission("nope".into())));
}

#[test]
fn clear_override_restores_server_verdict() {
    let (mut q, _) = reviewing();
    q.set_override("s1", 2, true, 150).unwrap();
    q.clear_override("s1", 2);
    assert!(q.overrides_for("s1").is_none());
    assert!(!q.merged_results("s1")[1].correct);
}

#[test]
fn override_requires_pending_review() {
    let mut q = GradingQueue::default();
    let id = q.enqueue(page("p1.jpg"), 1);
    q.start_upload(&id).unwrap();
    q.upload_succeeded(&id, "s1").unwrap();
    assert_eq!(
        q.set_override("s1", 1, true, 10).unwrap_err(),
        QueueError::InvalidTransition { from: QueueStatus::Processing, action: QueueAction::Override }
    );
}

#[test]
fn confirm_payload_uses_merged_results() {
    let (mut q, _) = reviewing();
    q.set_override("s1", 2, true, 150).unwrap();
    let body = q.confirm_payload("s1").unwrap();
    assert_eq!(body.results, vec![
        ConfirmedVerdict { index: 1, correct: true },
        ConfirmedVerdict { index: 2, correct: true },
        ConfirmedVerdict { index: 3, correct: true },
    ]);
}

#[test]
fn confirm_folds_overrides_into_results_and_clears_them() {
    let (mut q, id) = reviewing();
    q.set_override("s1", 2, true, 150).unwrap();
    q.mark_confirmed("s1").unwrap();
    assert!(q.overrides_for("s1").is_none());
    assert!(q.item(&id).unwrap().results.iter().all(|r| r.correct));
    assert!(q.confirm_payload("s1").is_err());
}

#[test]
fn confirmed_elsewhere_finishes_item() {
    let (mut q, id) = reviewing();
    q.set_override("s1", 2, true, 150).unwrap();
    let status = q.apply_server_result(&with_status("s1", SubmissionStatus::Confirmed)).unwrap();
    assert_eq!(status, QueueStatus::Confirmed);
    assert!(q.overrides_for("s1").is_none());
    assert_eq!(q.item(&id).unwrap().status, QueueStatus::Confirmed);
}

#[test]
fn prune_and_remove() {
    let (mut q, _) = reviewing();
    let other = q.enqueue(page("p2.jpg"), 2);
    q.mark_confirmed("s1").unwrap();
    assert_eq!(q.prune_confirmed(), 1);
    assert_eq!(q.items().len(), 1);
    assert!(q.remove(&other));
    assert!(!q.remove(&other));
}

#[test]
fn next_queued_is_oldest() {
    let mut q = GradingQueue::default();
    let late = q.enqueue(page("late.jpg"), 20);
    let early = q.enqueue(page("early.jpg"), 10);
    assert_eq!(q.next_queued().unwrap().id, early);
    q.start_upload(&early).unwrap();
    assert_eq!(q.next_queued().unwrap().id, late);
    assert_eq!(q.count(QueueStatus::Queued), 1);
    assert_eq!(q.count(QueueStatus::Uploading), 1);
}

#[test]
fn persistence_round_trip_keeps_overrides_but_not_bytes() {
    let store = MemoryStore::default();
    let (mut q, id) = reviewing();
    q.set_override("s1", 2, true, 150).unwrap();
    q.save(&store);

    let raw = store.get(STORAGE_KEY).unwrap();
    assert!(!raw.contains("bytes"));

    let restored = GradingQueue::restore(&store);
    assert_eq!(restored.item(&id).unwrap().status, QueueStatus::PendingReview);
    assert!(restored.item(&id).unwrap().payload.is_none());
    assert_eq!(restored.score("s1"), (3, 3));
}

#[test]
fn interrupted_uploads_restore_as_failed() {
    let store = MemoryStore::default();
    let mut q = GradingQueue::default();
    let queued = q.enqueue(page("a.jpg"), 1);
    let uploading = q.enqueue(page("b.jpg"), 2);
    q.start_upload(&uploading).unwrap();
    q.save(&store);

    let mut restored = GradingQueue::restore(&store);
    for id in [&queued, &uploading] {
        let item = restored.item(id).unwrap();
        assert_eq!(item.status, QueueStatus::Failed);
        assert!(item.error.as_deref().unwrap().starts_with("upload interrupted"));
    }
    assert_eq!(restored.retry(&queued).unwrap_err(), QueueError::PayloadUnavailable(queued.clone()));
}

#[test]
fn empty_queue_clears_storage() {
    let store = MemoryStore::default();
    store.set(STORAGE_KEY, "{}");
    GradingQueue::default().save(&store);
    assert!(store.get(STORAGE_KEY).is_none());
}

#[test]
fn corrupt_storage_restores_empty() {
    let store = MemoryStore::default();
    store.set(STORAGE_KEY, "not json");
    assert!(GradingQueue::restore(&store).items().is_empty());
}
