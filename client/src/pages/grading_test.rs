use super::*;
use crate::net::types::homework::{ProblemResult, SubmissionStatus};

fn upload(name: &str) -> Upload {
    Upload { file_name: name.to_owned(), content_type: "image/jpeg".to_owned(), bytes: vec![1, 2, 3] }
}

fn submission(id: &str, status: SubmissionStatus) -> Submission {
    Submission {
        id: id.to_owned(),
        status,
        results: vec![ProblemResult {
            index: 1,
            question: Some("1+1".into()),
            student_answer: Some("2".into()),
            expected_answer: Some("2".into()),
            correct: true,
            comment: None,
        }],
        graded_at: 100,
        error: Some("blurry photo".into()),
    }
}

#[test]
fn claim_next_takes_oldest_queued_item() {
    let mut queue = GradingQueue::default();
    let second = queue.enqueue(upload("b.jpg"), 20);
    let first = queue.enqueue(upload("a.jpg"), 10);

    let (id, claimed) = claim_next(&mut queue).unwrap();
    assert_eq!(id, first);
    assert_eq!(claimed.file_name, "a.jpg");
    assert_eq!(queue.item(&first).unwrap().status, QueueStatus::Uploading);

    let (id, _) = claim_next(&mut queue).unwrap();
    assert_eq!(id, second);
    assert!(claim_next(&mut queue).is_none());
}

#[test]
fn record_upload_moves_item_to_processing_or_failed() {
    let mut queue = GradingQueue::default();
    let ok = queue.enqueue(upload("a.jpg"), 1);
    let bad = queue.enqueue(upload("b.jpg"), 2);
    claim_next(&mut queue);
    claim_next(&mut queue);

    record_upload(&mut queue, &ok, Ok(UploadReceipt { submission_id: "s1".into() }));
    record_upload(&mut queue, &bad, Err(ApiError::Network("offline".into())));

    assert_eq!(queue.item(&ok).unwrap().status, QueueStatus::Processing);
    assert_eq!(queue.processing_submissions(), vec!["s1".to_owned()]);
    let failed = queue.item(&bad).unwrap();
    assert_eq!(failed.status, QueueStatus::Failed);
    assert!(failed.error.as_deref().unwrap().contains("offline"));
}

#[test]
fn record_upload_for_removed_item_is_ignored() {
    let mut queue = GradingQueue::default();
    let id = queue.enqueue(upload("a.jpg"), 1);
    claim_next(&mut queue);
    queue.remove(&id);
    record_upload(&mut queue, &id, Ok(UploadReceipt { submission_id: "s1".into() }));
    assert!(queue.items().is_empty());
}

fn processing_queue() -> GradingQueue {
    let mut queue = GradingQueue::default();
    let id = queue.enqueue(upload("page1.jpg"), 1);
    claim_next(&mut queue);
    record_upload(&mut queue, &id, Ok(UploadReceipt { submission_id: "s1".into() }));
    queue
}

#[test]
fn record_poll_announces_graded_and_failed_submissions() {
    let mut queue = processing_queue();
    assert_eq!(record_poll(&mut queue, &submission("s1", SubmissionStatus::Processing)), None);
    assert_eq!(
        record_poll(&mut queue, &submission("s1", SubmissionStatus::Graded)),
        Some("page1.jpg is graded and ready for review".to_owned())
    );
    assert_eq!(queue.by_submission("s1").unwrap().status, QueueStatus::PendingReview);

    let mut queue = processing_queue();
    assert_eq!(
        record_poll(&mut queue, &submission("s1", SubmissionStatus::Failed)),
        Some("Grading page1.jpg failed".to_owned())
    );
}

#[test]
fn record_poll_ignores_unknown_submissions() {
    let mut queue = processing_queue();
    assert_eq!(record_poll(&mut queue, &submission("other", SubmissionStatus::Graded)), None);
    assert_eq!(queue.by_submission("s1").unwrap().status, QueueStatus::Processing);
}

#[test]
fn queue_summary_counts_each_stage() {
    let mut queue = processing_queue();
    assert_eq!(queue_summary(&queue), "1 grading");
    queue.enqueue(upload("page2.jpg"), 5);
    record_poll(&mut queue, &submission("s1", SubmissionStatus::Graded));
    assert_eq!(queue_summary(&queue), "1 uploading · 1 to review");
    assert_eq!(queue_summary(&GradingQueue::default()), "Queue is empty");
}
