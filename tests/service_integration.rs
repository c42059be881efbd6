//! Integration tests for the tutoring request flow.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use lecture_tutor::enrollment::AccessError;
use lecture_tutor::knowledge::NO_MATCH_EXPLANATION;
use lecture_tutor::tutor::TutorError;

use common::{request, service, FakeSynth};

#[tokio::test]
async fn test_successful_request_records_one_lecture() {
    let dir = tempfile::tempdir().unwrap();
    let (service, lectures) = service(Arc::new(FakeSynth::default()), dir.path());

    let reply = service
        .handle(request("1", "101", "math", "what is a derivative"))
        .await
        .unwrap();

    assert_eq!(reply.explanation, "A derivative measures rate of change");
    assert_eq!(reply.chart_data.as_ref().unwrap()["values"][1], 2);
    assert!(reply.audio_url.starts_with("/audio/"));
    assert_eq!(reply.lecture_id, 1);

    let recorded = lectures.list();
    assert_eq!(recorded.len(), 1);
    let lecture = &recorded[0];
    assert_eq!(lecture.id, reply.lecture_id);
    assert_eq!(lecture.course_id, "101");
    assert_eq!(lecture.topic, "math");
    assert_eq!(lecture.question, "what is a derivative");
    assert_eq!(lecture.response, reply.explanation);
    assert_eq!(lecture.chart_data, reply.chart_data);
    assert_eq!(lecture.audio_url, reply.audio_url);

    // The audio file exists under the audio directory with the served name.
    let file_name = reply.audio_url.trim_start_matches("/audio/");
    assert!(dir.path().join(file_name).exists());
}

#[tokio::test]
async fn test_lecture_ids_strictly_increase() {
    let dir = tempfile::tempdir().unwrap();
    let (service, lectures) = service(Arc::new(FakeSynth::default()), dir.path());

    let mut last = 0;
    for question in ["derivative?", "integral?", "something else"] {
        let reply = service
            .handle(request("1", "101", "math", question))
            .await
            .unwrap();
        assert!(reply.lecture_id > last);
        last = reply.lecture_id;
    }
    assert_eq!(lectures.list().len(), 3);
}

#[tokio::test]
async fn test_narration_failure_records_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let synth = Arc::new(FakeSynth::failing());
    let (service, lectures) = service(synth.clone(), dir.path());

    let err = service
        .handle(request("1", "101", "math", "what is a derivative"))
        .await
        .unwrap_err();

    assert!(matches!(err, TutorError::Narration(_)));
    assert_eq!(synth.calls.load(Ordering::SeqCst), 1, "no retries");
    assert!(lectures.list().is_empty());
}

#[tokio::test]
async fn test_rejected_request_skips_narration() {
    let dir = tempfile::tempdir().unwrap();
    let synth = Arc::new(FakeSynth::default());
    let (service, lectures) = service(synth.clone(), dir.path());

    let cases = [
        (request("404", "101", "math", "q"), AccessError::StudentNotFound),
        (request("2", "101", "math", "q"), AccessError::NotEnrolled),
        (request("1", "999", "math", "q"), AccessError::CourseNotFound),
        (request("1", "101", "poetry", "q"), AccessError::TopicNotCovered),
    ];

    for (req, expected) in cases {
        let err = service.handle(req).await.unwrap_err();
        assert!(
            matches!(err, TutorError::Access(actual) if actual == expected),
            "expected {expected:?}, got {err:?}"
        );
    }

    assert_eq!(synth.calls.load(Ordering::SeqCst), 0);
    assert!(lectures.list().is_empty());
}

#[tokio::test]
async fn test_covered_topic_missing_from_knowledge_is_answered() {
    let dir = tempfile::tempdir().unwrap();
    let (service, _lectures) = service(Arc::new(FakeSynth::default()), dir.path());

    // Course 101 covers physics but the knowledge base has no physics entries.
    let reply = service
        .handle(request("1", "101", "Physics", "what is force"))
        .await
        .unwrap();
    assert_eq!(
        reply.explanation,
        "Sorry, I don't have information on Physics yet."
    );
    assert!(reply.chart_data.is_none());
}

#[tokio::test]
async fn test_unmatched_question_gets_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let (service, lectures) = service(Arc::new(FakeSynth::default()), dir.path());

    let reply = service
        .handle(request("1", "101", "math", "what is a prime"))
        .await
        .unwrap();
    assert_eq!(reply.explanation, NO_MATCH_EXPLANATION);
    assert!(reply.chart_data.is_none());
    // Fallback answers are still narrated and recorded.
    assert_eq!(lectures.list().len(), 1);
}
