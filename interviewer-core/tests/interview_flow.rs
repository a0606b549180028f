//! End-to-end interview flows against scripted collaborators

use std::sync::Arc;

use interviewer_core::collaborators::mock::{
    RecordingTranscriptSink, ScriptedEvaluator, ScriptedQuestionGenerator,
};
use interviewer_core::{
    AnswerOutcome, Collaborators, ControllerConfig, Domain, InterviewController, InterviewError,
    KeywordEvaluator, MAX_ROUNDS, MemorySessionStore, QuestionBank,
};

struct Fixture {
    controller: InterviewController,
    evaluator: Arc<ScriptedEvaluator>,
    transcripts: Arc<RecordingTranscriptSink>,
}

fn fixture() -> Fixture {
    let evaluator = Arc::new(ScriptedEvaluator::new());
    let transcripts = Arc::new(RecordingTranscriptSink::new());
    let controller = InterviewController::new(
        Arc::new(MemorySessionStore::new()),
        Collaborators {
            generator: Arc::new(ScriptedQuestionGenerator::new()),
            evaluator: evaluator.clone(),
            transcripts: transcripts.clone(),
        },
        ControllerConfig::default(),
    );
    Fixture {
        controller,
        evaluator,
        transcripts,
    }
}

#[tokio::test]
async fn alternating_scores_finish_at_fifty_percent() {
    let f = fixture();
    let started = f
        .controller
        .start_session("Ada", "ada@example.com", "Finance ")
        .await
        .unwrap();

    let mut last = None;
    for round in 0..MAX_ROUNDS {
        f.evaluator
            .queue_score(if round % 2 == 0 { 0.9 } else { 0.2 });
        last = Some(
            f.controller
                .submit_answer(&started.session_id, "answer")
                .await
                .unwrap(),
        );
    }

    let Some(AnswerOutcome::Finished(summary)) = last else {
        panic!("interview should finish after {} answers", MAX_ROUNDS);
    };
    assert_eq!(summary.score_summary.asked, 10);
    assert_eq!(summary.score_summary.correct, 5);
    assert_eq!(summary.score_summary.wrong, 5);
    assert_eq!(summary.score_summary.final_score_percent, 50.0);
    assert_eq!(summary.history.len(), 10);

    let transcripts = f.transcripts.transcripts();
    assert_eq!(transcripts.len(), 1);
    assert_eq!(transcripts[0].domain, Domain::Finance);
    assert_eq!(transcripts[0].num_correct, 5);
}

#[tokio::test]
async fn final_score_matches_correct_count() {
    let scores = [0.9, 0.9, 0.5, 0.1, 0.9, 0.7, 0.4, 0.95, 0.0, 0.71];
    let correct = scores.iter().filter(|s| **s > 0.7).count() as u32;
    let f = fixture();
    let started = f
        .controller
        .start_session("Ada", "ada@example.com", "operations")
        .await
        .unwrap();

    let mut outcome = None;
    for score in scores {
        f.evaluator.queue_score(score);
        outcome = Some(
            f.controller
                .submit_answer(&started.session_id, "answer")
                .await
                .unwrap(),
        );
    }

    let Some(AnswerOutcome::Finished(summary)) = outcome else {
        panic!("expected a finished interview");
    };
    assert_eq!(summary.score_summary.correct, correct);
    assert_eq!(summary.score_summary.wrong, 2);
    let expected = (100.0 * correct as f64 / 10.0 * 100.0).round() / 100.0;
    assert_eq!(summary.score_summary.final_score_percent, expected);
}

#[tokio::test]
async fn exit_without_answering_returns_empty_summary() {
    let f = fixture();
    let started = f
        .controller
        .start_session("Ada", "ada@example.com", "data-analysis")
        .await
        .unwrap();

    let summary = f.controller.exit_session(&started.session_id).await.unwrap();

    assert_eq!(summary.score_summary.asked, 1);
    assert_eq!(summary.score_summary.correct, 0);
    assert_eq!(summary.score_summary.wrong, 0);
    assert_eq!(summary.score_summary.final_score_percent, 0.0);
    assert!(summary.history.is_empty());

    let result = f.controller.submit_answer(&started.session_id, "too late").await;
    assert!(matches!(result, Err(InterviewError::SessionNotFound(_))));
}

#[tokio::test]
async fn invalid_domains_never_create_sessions() {
    let f = fixture();
    for domain in ["", "marketing", "Data Analysis", "operation", "finances"] {
        let result = f
            .controller
            .start_session("Ada", "ada@example.com", domain)
            .await;
        assert!(
            matches!(result, Err(InterviewError::InvalidDomain(_))),
            "{domain:?} should be rejected"
        );
    }
    assert_eq!(f.controller.session_count().await, 0);
}

#[tokio::test]
async fn difficulty_stays_in_range_under_streaks() {
    let f = fixture();
    let high = f
        .controller
        .start_session("Ada", "ada@example.com", "finance")
        .await
        .unwrap();
    let low = f
        .controller
        .start_session("Bob", "bob@example.com", "finance")
        .await
        .unwrap();

    for _ in 0..MAX_ROUNDS - 1 {
        f.evaluator.queue_score(0.9);
        f.controller
            .submit_answer(&high.session_id, "right")
            .await
            .unwrap();
        f.evaluator.queue_score(0.1);
        f.controller
            .submit_answer(&low.session_id, "wrong")
            .await
            .unwrap();
    }

    let high = f.controller.session_status(&high.session_id).await.unwrap();
    let low = f.controller.session_status(&low.session_id).await.unwrap();
    assert_eq!(high.difficulty.value(), 10);
    assert_eq!(low.difficulty.value(), 0);
}

#[tokio::test]
async fn evaluation_failure_can_be_retried() {
    let f = fixture();
    let started = f
        .controller
        .start_session("Ada", "ada@example.com", "finance")
        .await
        .unwrap();
    let before = f.controller.session_status(&started.session_id).await.unwrap();
    f.evaluator.queue_failure();
    f.evaluator.queue_score(0.9);

    let failed = f.controller.submit_answer(&started.session_id, "answer").await;
    assert!(matches!(failed, Err(InterviewError::Evaluation(_))));
    assert_eq!(
        f.controller.session_status(&started.session_id).await.unwrap(),
        before
    );

    let retried = f
        .controller
        .submit_answer(&started.session_id, "answer")
        .await
        .unwrap();
    let AnswerOutcome::Continue(next) = retried else {
        panic!("expected the interview to continue");
    };
    assert_eq!(next.question_number, 2);
}

#[tokio::test]
async fn persistence_failure_on_last_round_can_be_retried() {
    let f = fixture();
    let started = f
        .controller
        .start_session("Ada", "ada@example.com", "finance")
        .await
        .unwrap();
    for _ in 0..MAX_ROUNDS - 1 {
        f.controller
            .submit_answer(&started.session_id, "answer")
            .await
            .unwrap();
    }
    f.transcripts.fail_next(1);

    let failed = f.controller.submit_answer(&started.session_id, "last").await;
    assert!(matches!(failed, Err(InterviewError::Persistence(_))));
    let status = f.controller.session_status(&started.session_id).await.unwrap();
    assert!(!status.finished);
    assert_eq!(status.answered, MAX_ROUNDS as usize - 1);

    let retried = f
        .controller
        .submit_answer(&started.session_id, "last")
        .await
        .unwrap();
    assert!(retried.is_finished());
    assert_eq!(f.transcripts.persist_count(), 1);
}

#[tokio::test]
async fn builtin_collaborators_run_a_full_interview() {
    let transcripts = Arc::new(RecordingTranscriptSink::new());
    let controller = InterviewController::new(
        Arc::new(MemorySessionStore::new()),
        Collaborators {
            generator: Arc::new(QuestionBank::new()),
            evaluator: Arc::new(KeywordEvaluator::new()),
            transcripts: transcripts.clone(),
        },
        ControllerConfig::default(),
    );

    let started = controller
        .start_session("Ada", "ada@example.com", "operations")
        .await
        .unwrap();
    let mut finished = false;
    for _ in 0..MAX_ROUNDS {
        let outcome = controller
            .submit_answer(&started.session_id, "throughput capacity bottleneck")
            .await
            .unwrap();
        finished = outcome.is_finished();
    }

    assert!(finished);
    assert_eq!(transcripts.persist_count(), 1);
    assert_eq!(transcripts.transcripts()[0].history.len(), MAX_ROUNDS as usize);
}

#[tokio::test]
async fn question_bank_never_repeats_within_an_interview() {
    let controller = InterviewController::new(
        Arc::new(MemorySessionStore::new()),
        Collaborators {
            generator: Arc::new(QuestionBank::new()),
            // neutral 0.5 scores keep difficulty in one tier all session
            evaluator: Arc::new(ScriptedEvaluator::new()),
            transcripts: Arc::new(RecordingTranscriptSink::new()),
        },
        ControllerConfig::default(),
    );

    let started = controller
        .start_session("Ada", "ada@example.com", "finance")
        .await
        .unwrap();
    let mut summary = None;
    for _ in 0..MAX_ROUNDS {
        if let AnswerOutcome::Finished(done) = controller
            .submit_answer(&started.session_id, "not sure")
            .await
            .unwrap()
        {
            summary = Some(done);
        }
    }

    let summary = summary.unwrap();
    let distinct: std::collections::HashSet<_> =
        summary.history.iter().map(|r| r.question.as_str()).collect();
    assert_eq!(distinct.len(), MAX_ROUNDS as usize);
}
