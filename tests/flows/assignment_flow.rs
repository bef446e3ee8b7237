#[path = "../common/mod.rs"]
mod common;

use addv_application::use_cases::{QueueOutcome, SubmitOutcome};
use addv_domain::ValidationTuning;
use chrono::Utc;
use common::Harness;
use std::sync::Arc;

/// Scenario 4: a reporter submits twice for the same domain (e.g. two
/// distinct assignments); the second is a silent no-op and the entry
/// keeps exactly one answer for that /16.
#[tokio::test]
async fn duplicate_submission_from_same_subnet_is_noop() {
    let harness = Harness::new();
    harness.queue_domain.execute("example.com").await;

    let ip = "10.0.0.5";
    let first_issued = Utc::now().timestamp();
    let first_tag = harness
        .tagger
        .tag(&["example.com", ip, &first_issued.to_string()]);
    let first = harness
        .submit_answer
        .execute(
            "example.com",
            ip,
            first_issued,
            &first_tag,
            "success",
            Utc::now().timestamp_millis(),
            "k",
        )
        .await;
    assert_eq!(first, SubmitOutcome::Accepted);

    let second_issued = first_issued + 5;
    let second_tag = harness
        .tagger
        .tag(&["example.com", ip, &second_issued.to_string()]);
    let second = harness
        .submit_answer
        .execute(
            "example.com",
            ip,
            second_issued,
            &second_tag,
            "error",
            Utc::now().timestamp_millis(),
            "k",
        )
        .await;
    assert_eq!(second, SubmitOutcome::Accepted);
    assert!(harness.events.verdicts.lock().unwrap().is_empty());
}

/// Scenario 5: a submission arriving after AUTH_TIMEOUT has elapsed is
/// rejected and performs no mutation, even with a correctly computed tag.
#[tokio::test]
async fn expired_assignment_is_rejected() {
    let harness = Harness::with_tuning(ValidationTuning::default());
    harness.queue_domain.execute("example.com").await;

    let ip = "10.0.0.5";
    let issued_at = Utc::now().timestamp() - 121;
    let tag = harness
        .tagger
        .tag(&["example.com", ip, &issued_at.to_string()]);

    let outcome = harness
        .submit_answer
        .execute(
            "example.com",
            ip,
            issued_at,
            &tag,
            "success",
            Utc::now().timestamp_millis(),
            "k",
        )
        .await;
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert!(harness.events.verdicts.lock().unwrap().is_empty());
}

/// A tag mismatch is rejected regardless of timing.
#[tokio::test]
async fn forged_tag_is_rejected() {
    let harness = Harness::new();
    harness.queue_domain.execute("example.com").await;

    let issued_at = Utc::now().timestamp();
    let outcome = harness
        .submit_answer
        .execute(
            "example.com",
            "10.0.0.5",
            issued_at,
            "0000000000000000000000000000000000000000000000000000000000000000",
            "success",
            Utc::now().timestamp_millis(),
            "k",
        )
        .await;
    assert_eq!(outcome, SubmitOutcome::Rejected);
}

/// Scenario 6: two concurrent `queue()` calls for the same domain result
/// in exactly one QUEUED event, and a subsequent call is idempotent.
#[tokio::test]
async fn concurrent_queueing_is_idempotent() {
    let harness = Arc::new(Harness::new());

    let a = harness.queue_domain.clone();
    let b = harness.queue_domain.clone();
    let (r1, r2) = tokio::join!(
        tokio::spawn(async move { a.execute("foo.test").await }),
        tokio::spawn(async move { b.execute("foo.test").await }),
    );
    let outcomes = [r1.unwrap(), r2.unwrap()];
    assert_eq!(
        outcomes.iter().filter(|o| **o == QueueOutcome::Queued).count(),
        1
    );
    assert_eq!(harness.events.queued.lock().unwrap().len(), 1);

    let third = harness.queue_domain.execute("foo.test").await;
    assert_eq!(third, QueueOutcome::AlreadyQueued);
}

/// Malformed domains are rejected on an anchored match — trailing
/// garbage after a valid prefix is not silently truncated and accepted.
#[tokio::test]
async fn malformed_domain_is_rejected() {
    let harness = Harness::new();
    let outcome = harness.queue_domain.execute("good.com;rm -rf").await;
    assert_eq!(outcome, QueueOutcome::Invalid);
}

/// Scenario 7: once a subnet opts out, `select_batch` returns nothing for
/// it regardless of how many domains are queued.
#[tokio::test]
async fn opted_out_subnet_gets_no_assignments() {
    let harness = Harness::new();
    for i in 0..5 {
        harness.queue_domain.execute(&format!("d{i}.example.com")).await;
    }

    let ip = "203.0.113.9";
    let before = harness.select_batch.execute(ip, Utc::now().timestamp());
    assert!(!before.is_empty());

    harness.opt_out.execute(Some(ip)).await;

    let after = harness.select_batch.execute(ip, Utc::now().timestamp());
    assert!(after.is_empty());
}

/// Assignment freshness: a reporter already present in a domain's answers
/// is never handed that domain again by `select_batch`.
#[tokio::test]
async fn select_batch_excludes_already_answered_domains() {
    let harness = Harness::new();
    harness.queue_domain.execute("example.com").await;

    let ip = "10.0.0.5";
    let issued_at = Utc::now().timestamp();
    let tag = harness
        .tagger
        .tag(&["example.com", ip, &issued_at.to_string()]);
    harness
        .submit_answer
        .execute(
            "example.com",
            ip,
            issued_at,
            &tag,
            "success",
            Utc::now().timestamp_millis(),
            "k",
        )
        .await;

    let batch = harness.select_batch.execute(ip, Utc::now().timestamp());
    assert!(batch.iter().all(|c| c.domain != "example.com"));
}
