use std::sync::{Arc, Mutex};
use std::time::Duration;
use seolyzer::errors::SeolyzerError;
use seolyzer::services::fallback_analysis;
use seolyzer::services::staged_auditor::{StagedAuditor, INTERIM_SUGGESTIONS};
use seolyzer::structs::analysis_result::AnalysisResult;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use crate::support::{chat_completion, config_for, lighthouse_payload};

async fn mount_pagespeed(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/pagespeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lighthouse_payload()))
        .mount(server)
        .await;
}

fn capture() -> (Arc<Mutex<Vec<AnalysisResult>>>, impl FnOnce(AnalysisResult) + Send) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |interim| sink.lock().unwrap().push(interim))
}

#[tokio::test]
async fn test_staged_run_with_ai_enrichment() {
    let server = MockServer::start().await;
    mount_pagespeed(&server).await;

    let enrichment = json!({
        "suggestions": ["Använd en CDN"],
        "priorityIssues": ["Tunga tredjepartsskript"],
        "opportunities": ["Förladda typsnitt"],
        "technicalRecommendations": ["Aktivera HTTP/2"]
    });
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer ai-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion(&enrichment.to_string())))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.ai.api_key = Some("ai-key".to_string());
    let auditor = StagedAuditor::from_config(&config).unwrap();

    let (seen, on_interim) = capture();
    let result = auditor.run("https://exempel.se", on_interim).await.unwrap();

    let interims = seen.lock().unwrap();
    assert_eq!(interims.len(), 1);
    let interim = &interims[0];
    assert_eq!(interim.metrics.performance, 45);
    assert_eq!(interim.suggestions, INTERIM_SUGGESTIONS.map(String::from).to_vec());
    assert_eq!(interim.issues, vec!["Långsam Largest Contentful Paint påverkar användarupplevelsen"]);

    assert_eq!(result.metrics, interim.metrics);
    assert_eq!(result.detailed_metrics.largest_contentful_paint, "4.1 s");
    assert_eq!(result.detailed_metrics.time_to_interactive, "5.2 s");
    assert_eq!(result.suggestions, vec!["Använd en CDN", "Förladda typsnitt", "Aktivera HTTP/2"]);
    assert_eq!(
        result.issues,
        vec![
            "Tunga tredjepartsskript",
            "Largest Contentful Paint: LCP är långsam.",
            "Kritiskt låg prestanda - webbplatsen laddar mycket långsamt",
        ]
    );
    assert_eq!(result.loading_experience, Some(json!({ "overall_category": "AVERAGE" })));
}

#[tokio::test]
async fn test_ai_failure_falls_back_to_rules() {
    let server = MockServer::start().await;
    mount_pagespeed(&server).await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.ai.api_key = Some("ai-key".to_string());
    let auditor = StagedAuditor::from_config(&config).unwrap();

    let (seen, on_interim) = capture();
    let result = auditor.run("https://exempel.se", on_interim).await.unwrap();

    assert_eq!(seen.lock().unwrap().len(), 1);
    let fallback = fallback_analysis::generate(&result.metrics);
    assert_eq!(result.suggestions[0], fallback.suggestions[0]);
    assert_eq!(result.issues[0], fallback.priority_issues[0]);
}

#[tokio::test]
async fn test_unparseable_ai_reply_falls_back_to_rules() {
    let server = MockServer::start().await;
    mount_pagespeed(&server).await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("inte json")))
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.ai.api_key = Some("ai-key".to_string());
    let auditor = StagedAuditor::from_config(&config).unwrap();

    let result = auditor.full_audit("https://exempel.se").await.unwrap();
    let fallback = fallback_analysis::generate(&result.metrics);
    assert_eq!(result.suggestions[0], fallback.suggestions[0]);
}

#[tokio::test]
async fn test_without_ai_key_no_chat_request_is_made() {
    let server = MockServer::start().await;
    mount_pagespeed(&server).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let auditor = StagedAuditor::from_config(&config_for(&server)).unwrap();
    let result = auditor.full_audit("https://exempel.se").await.unwrap();

    assert!(!result.suggestions.is_empty());
}

#[tokio::test]
async fn test_fast_audit_failure_skips_interim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pagespeed"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let auditor = StagedAuditor::from_config(&config_for(&server)).unwrap();

    let (seen, on_interim) = capture();
    let err = auditor.run("https://exempel.se", on_interim).await.unwrap_err();

    assert!(seen.lock().unwrap().is_empty());
    assert!(matches!(err, SeolyzerError::Audit { .. }));
    assert_eq!(
        err.user_message(),
        "Kunde inte analysera webbplatsen: HTTP error! status: 500"
    );
}

#[tokio::test]
async fn test_fast_audit_timeout_skips_interim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pagespeed"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(lighthouse_payload())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.audit.timeout_secs = 1;
    let auditor = StagedAuditor::from_config(&config).unwrap();

    let (seen, on_interim) = capture();
    let err = auditor.run("https://exempel.se", on_interim).await.unwrap_err();

    assert!(seen.lock().unwrap().is_empty());
    assert!(matches!(err, SeolyzerError::Audit { .. }));
}

#[tokio::test]
async fn test_enrichment_timeout_falls_back_to_rules() {
    let server = MockServer::start().await;
    mount_pagespeed(&server).await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion(r#"{"suggestions":["För sent"]}"#))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.ai.api_key = Some("ai-key".to_string());
    config.ai.timeout_secs = 1;
    let auditor = StagedAuditor::from_config(&config).unwrap();

    let (seen, on_interim) = capture();
    let result = auditor.run("https://exempel.se", on_interim).await.unwrap();

    assert_eq!(seen.lock().unwrap().len(), 1);
    let fallback = fallback_analysis::generate(&result.metrics);
    assert_eq!(result.suggestions[0], fallback.suggestions[0]);
    assert!(!result.suggestions.iter().any(|s| s == "För sent"));
}
