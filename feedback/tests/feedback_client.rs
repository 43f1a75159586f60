//! Integration tests for the degradation state machine in `FeedbackClient`.
//!
//! Uses wiremock for the HTTP surface. Covers the length floor, probe
//! failure/timeout, error-body surfacing, malformed and shape-invalid
//! responses, the accepted path, and API-key forwarding/validation.

use std::time::Duration;

use feedback::{
    heuristic, ClientConfig, Difficulty, FeedbackClient, FeedbackContract, KeyValidation,
    SKILL_NAMES,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SCENARIO: &str = "Write a welcome email to a new team member.";
const PROMPT: &str = "Please write a detailed welcome email. Include specific first-week \
                      steps and format them as a numbered list.";

fn test_client(server: &MockServer) -> FeedbackClient {
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_probe_timeout(Duration::from_millis(250))
        .with_analyze_timeout(Duration::from_millis(500));
    FeedbackClient::new(config).expect("failed to build client")
}

async fn mount_healthy(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(server)
        .await;
}

fn remote_contract() -> serde_json::Value {
    json!({
        "overallScore": 9,
        "detailedFeedback": "Strong prompt with clear structure.",
        "skillRatings": SKILL_NAMES
            .iter()
            .map(|n| json!({"name": n, "score": 8}))
            .collect::<Vec<_>>(),
        "improvementTips": ["Mention the audience explicitly"],
        "examplePrompts": ["Example one", "Example two"],
    })
}

#[tokio::test]
async fn test_short_prompt_hits_floor_without_any_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Advanced, "short")
        .await;

    assert_eq!(contract.overall_score, 0);
    assert!(contract.skill_ratings.iter().all(|r| r.score == 0));
    assert!(!contract.is_fallback, "a floor rejection is not a fallback");
    assert!(contract.error.is_none());
}

#[tokio::test]
async fn test_probe_non_success_falls_back_silently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Beginner, PROMPT)
        .await;

    assert!(contract.is_fallback);
    assert!(contract.error.is_none(), "unavailable is not an error");
    assert_eq!(
        contract,
        heuristic::score(SCENARIO, Difficulty::Beginner, PROMPT),
        "probe failure must degrade to exactly the heuristic result"
    );
}

#[tokio::test]
async fn test_probe_timeout_falls_back_silently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Intermediate, PROMPT)
        .await;

    assert!(contract.is_fallback);
    assert!(contract.error.is_none());
    assert_eq!(
        contract,
        heuristic::score(SCENARIO, Difficulty::Intermediate, PROMPT)
    );
}

#[tokio::test]
async fn test_rate_limited_surfaces_body_error() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"error": "quota exceeded"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Beginner, PROMPT)
        .await;

    assert!(contract.is_fallback);
    let error = contract.error.as_deref().expect("error should be set");
    assert!(error.contains("quota exceeded"));

    let expected = heuristic::score(SCENARIO, Difficulty::Beginner, PROMPT);
    assert_eq!(contract.skill_ratings, expected.skill_ratings);
    assert_eq!(contract.overall_score, expected.overall_score);
}

#[tokio::test]
async fn test_error_body_without_error_field_uses_status_message() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Beginner, PROMPT)
        .await;

    assert!(contract.is_fallback);
    assert_eq!(
        contract.error.as_deref(),
        Some("API returned status: 500")
    );
}

#[tokio::test]
async fn test_unparseable_error_body_uses_status_line() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Beginner, PROMPT)
        .await;

    assert!(contract.is_fallback);
    let error = contract.error.as_deref().expect("error should be set");
    assert!(error.starts_with("API error: 503"), "got: {error}");
}

#[tokio::test]
async fn test_unparseable_success_body_falls_back_with_diagnostic() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Beginner, PROMPT)
        .await;

    assert!(contract.is_fallback);
    assert_eq!(
        contract.error.as_deref(),
        Some("Failed to parse API response")
    );
}

#[tokio::test]
async fn test_shape_invalid_success_body_falls_back() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;

    // Parseable, but only four skill ratings.
    let mut body = remote_contract();
    body["skillRatings"].as_array_mut().unwrap().pop();

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Beginner, PROMPT)
        .await;

    assert!(contract.is_fallback);
    let error = contract.error.as_deref().expect("error should be set");
    assert!(error.contains("validation"), "got: {error}");
    assert_eq!(contract.skill_ratings.len(), 5, "fallback restores the shape");
}

#[tokio::test]
async fn test_analyze_timeout_falls_back_without_error() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(remote_contract())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Beginner, PROMPT)
        .await;

    assert!(contract.is_fallback);
    assert!(contract.error.is_none(), "transport failures fall back silently");
}

#[tokio::test]
async fn test_accepted_response_returned_verbatim() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_partial_json(json!({
            "scenario": SCENARIO,
            "difficulty": "intermediate",
            "userPrompt": PROMPT,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_contract()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Intermediate, PROMPT)
        .await;

    assert!(!contract.is_fallback);
    assert!(contract.error.is_none());
    assert_eq!(contract.overall_score, 9);
    assert_eq!(contract.detailed_feedback, "Strong prompt with clear structure.");
    assert_eq!(contract.skill_ratings.len(), 5);
}

#[tokio::test]
async fn test_prompt_is_trimmed_before_dispatch() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_partial_json(json!({"userPrompt": PROMPT})))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_contract()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let padded = format!("  {PROMPT}\n\n");
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Beginner, &padded)
        .await;
    assert!(!contract.is_fallback);
}

#[tokio::test]
async fn test_api_key_forwarded_in_body() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_partial_json(json!({"apiKey": "secret-key"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_contract()))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_api_key("secret-key");
    let client = FeedbackClient::new(config).expect("failed to build client");
    let contract = client
        .get_feedback(SCENARIO, Difficulty::Beginner, PROMPT)
        .await;
    assert!(!contract.is_fallback);
}

#[tokio::test]
async fn test_floor_contract_identical_on_both_paths() {
    // The client and the heuristic must not drift: identical floor output.
    let server = MockServer::start().await;
    let client = test_client(&server);

    let via_client = client
        .get_feedback(SCENARIO, Difficulty::Advanced, "tiny")
        .await;
    let via_heuristic = heuristic::score(SCENARIO, Difficulty::Advanced, "tiny");

    assert_eq!(via_client, via_heuristic);
    assert_eq!(via_client, FeedbackContract::length_floor(SCENARIO));
}

#[tokio::test]
async fn test_check_health_reports_availability() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    let client = test_client(&server);
    assert!(client.check_health().await);
}

#[tokio::test]
async fn test_check_health_reports_unavailability() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = test_client(&server);
    assert!(!client.check_health().await);
}

#[tokio::test]
async fn test_validate_api_key_accepts_scored_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_partial_json(json!({"apiKey": "good-key"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_contract()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert_eq!(client.validate_api_key("good-key").await, KeyValidation::Valid);
}

#[tokio::test]
async fn test_validate_api_key_detects_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "API key is invalid"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    match client.validate_api_key("bad-key").await {
        KeyValidation::Rejected(message) => assert!(message.contains("invalid")),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validate_api_key_fallback_is_inconclusive() {
    let server = MockServer::start().await;
    let mut body = remote_contract();
    body["isFallback"] = json!(true);
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert_eq!(
        client.validate_api_key("maybe-key").await,
        KeyValidation::Inconclusive
    );
}

#[tokio::test]
async fn test_validate_api_key_empty_key_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(matches!(
        client.validate_api_key("   ").await,
        KeyValidation::Rejected(_)
    ));
}
