//! Integration tests for the knowledge layer.

use std::sync::Arc;

use lecture_tutor::knowledge::{
    AnswerResolver, KnowledgeBase, KnowledgeError, NO_MATCH_EXPLANATION,
};

const KNOWLEDGE_JSON: &str = r#"{
    "Math": [
        {
            "keywords": ["derivative", "slope"],
            "response": "A derivative measures rate of change",
            "chartData": { "type": "line", "points": [[0, 0], [1, 1]] }
        },
        {
            "keywords": ["slope", "gradient"],
            "response": "Slope is rise over run"
        }
    ],
    "chemistry": [
        { "keywords": ["Atom"], "response": "Atoms are made of protons, neutrons, and electrons" }
    ]
}"#;

fn resolver() -> AnswerResolver {
    AnswerResolver::new(Arc::new(KnowledgeBase::from_json(KNOWLEDGE_JSON).unwrap()))
}

#[test]
fn test_derivative_example() {
    let answer = resolver().resolve("math", "what is a derivative");
    assert_eq!(answer.explanation, "A derivative measures rate of change");
    assert_eq!(answer.chart_data.unwrap()["type"], "line");
}

#[test]
fn test_first_match_wins_on_shared_keyword() {
    let resolver = resolver();

    // "slope" appears in both entries; the earlier one wins.
    let answer = resolver.resolve("math", "what is the slope");
    assert_eq!(answer.explanation, "A derivative measures rate of change");

    // "gradient" only appears in the second entry.
    let answer = resolver.resolve("math", "what is a gradient");
    assert_eq!(answer.explanation, "Slope is rise over run");
    assert!(answer.chart_data.is_none());
}

#[test]
fn test_entry_order_decides_shared_keyword() {
    let reversed = r#"{
        "math": [
            { "keywords": ["slope"], "response": "second" },
            { "keywords": ["slope"], "response": "first" }
        ]
    }"#;
    let resolver = AnswerResolver::new(Arc::new(KnowledgeBase::from_json(reversed).unwrap()));
    assert_eq!(resolver.resolve("math", "slope?").explanation, "second");
}

#[test]
fn test_keywords_match_case_insensitively() {
    let answer = resolver().resolve("CHEMISTRY", "Tell me about the ATOM");
    assert_eq!(
        answer.explanation,
        "Atoms are made of protons, neutrons, and electrons"
    );
}

#[test]
fn test_unknown_topics_fall_back() {
    let resolver = resolver();
    for topic in ["biology", "art", ""] {
        let answer = resolver.resolve(topic, "derivative");
        assert_eq!(
            answer.explanation,
            format!("Sorry, I don't have information on {topic} yet.")
        );
        assert!(answer.chart_data.is_none());
    }
}

#[test]
fn test_questions_without_keywords_fall_back() {
    let resolver = resolver();
    for question in ["", "what is an integral", "derivativ"] {
        let answer = resolver.resolve("math", question);
        assert_eq!(answer.explanation, NO_MATCH_EXPLANATION);
        assert!(answer.chart_data.is_none());
    }
}

#[test]
fn test_malformed_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("knowledge.json");
    std::fs::write(&path, r#"{ "math": [ { "response": "missing keywords" } ] }"#).unwrap();

    let err = KnowledgeBase::load(&path).unwrap_err();
    assert!(matches!(err, KnowledgeError::Parse { .. }));
}

#[test]
fn test_bundled_knowledge_base_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("knowledge/knowledge.json");
    let resolver = AnswerResolver::new(Arc::new(KnowledgeBase::load(path).unwrap()));

    let answer = resolver.resolve("math", "what is a derivative");
    assert_eq!(answer.explanation, "A derivative measures rate of change");
    assert!(answer.chart_data.is_some());
}
