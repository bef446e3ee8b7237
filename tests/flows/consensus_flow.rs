#[path = "../common/mod.rs"]
mod common;

use addv_application::use_cases::SubmitOutcome;
use addv_domain::ValidationEvent;
use chrono::Utc;
use common::{seven_distinct_reporters, Harness};

/// Scenario 1: 7 reporters from 7 distinct /16s, all `success`, yields a
/// single VALIDATED with all 7 answers and the entry removed.
#[tokio::test]
async fn seven_successes_validates() {
    let harness = Harness::new();
    harness.queue_domain.execute("example.com").await;

    let issued_at = Utc::now().timestamp();
    let reporters = seven_distinct_reporters();
    for ip in &reporters {
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
                "joinkey",
            )
            .await;
        assert_eq!(outcome, SubmitOutcome::Accepted);
    }

    let verdicts = harness.events.verdicts.lock().unwrap();
    assert_eq!(verdicts.len(), 1);
    match &verdicts[0] {
        ValidationEvent::Validated { domain, answers, .. } => {
            assert_eq!(domain, "example.com");
            assert_eq!(answers.len(), 7);
        }
        ValidationEvent::Invalidated { .. } => panic!("expected VALIDATED"),
    }
}

/// Scenario 2: 5 success + 2 error still reaches quorum as VALIDATED
/// (the 5-of-7 threshold).
#[tokio::test]
async fn five_of_seven_successes_validates() {
    let harness = Harness::new();
    harness.queue_domain.execute("example.com").await;

    let issued_at = Utc::now().timestamp();
    let reporters = seven_distinct_reporters();
    let outcomes = ["success", "success", "success", "success", "success", "error", "error"];

    for (ip, outcome) in reporters.iter().zip(outcomes.iter()) {
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
                outcome,
                Utc::now().timestamp_millis(),
                "joinkey",
            )
            .await;
    }

    let verdicts = harness.events.verdicts.lock().unwrap();
    assert_eq!(verdicts.len(), 1);
    assert!(matches!(verdicts[0], ValidationEvent::Validated { .. }));
}

/// Scenario 3: 4 success + 3 error falls short of the 5-of-7 threshold
/// and yields INVALIDATED.
#[tokio::test]
async fn four_of_seven_successes_invalidates() {
    let harness = Harness::new();
    harness.queue_domain.execute("example.com").await;

    let issued_at = Utc::now().timestamp();
    let reporters = seven_distinct_reporters();
    let outcomes = ["success", "success", "success", "success", "error", "error", "error"];

    for (ip, outcome) in reporters.iter().zip(outcomes.iter()) {
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
                outcome,
                Utc::now().timestamp_millis(),
                "joinkey",
            )
            .await;
    }

    let verdicts = harness.events.verdicts.lock().unwrap();
    assert_eq!(verdicts.len(), 1);
    assert!(matches!(verdicts[0], ValidationEvent::Invalidated { .. }));
}

/// Quorum is terminal: once a verdict fires, further submissions for the
/// same domain are accepted-as-no-op (no second verdict, no crash).
#[tokio::test]
async fn quorum_is_terminal() {
    let harness = Harness::new();
    harness.queue_domain.execute("example.com").await;

    let issued_at = Utc::now().timestamp();
    let reporters = seven_distinct_reporters();
    for ip in &reporters {
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
                "joinkey",
            )
            .await;
    }
    assert_eq!(harness.events.verdicts.lock().unwrap().len(), 1);

    let late_ip = "10.99.0.5";
    let tag = harness
        .tagger
        .tag(&["example.com", late_ip, &issued_at.to_string()]);
    let outcome = harness
        .submit_answer
        .execute(
            "example.com",
            late_ip,
            issued_at,
            &tag,
            "success",
            Utc::now().timestamp_millis(),
            "joinkey",
        )
        .await;
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(harness.events.verdicts.lock().unwrap().len(), 1);
}
