use serde_json::{json, Value};
use seolyzer::structs::config::config::Config;
use wiremock::MockServer;

/// A Lighthouse payload with poor performance and a slow LCP.
pub fn lighthouse_payload() -> Value {
    json!({
        "lighthouseResult": {
            "categories": {
                "performance": { "score": 0.45 },
                "accessibility": { "score": 0.9 },
                "best-practices": { "score": 0.92 },
                "seo": { "score": 0.86 }
            },
            "audits": {
                "first-contentful-paint": {
                    "score": 0.95,
                    "title": "First Contentful Paint",
                    "displayValue": "0.9 s"
                },
                "largest-contentful-paint": {
                    "score": 0.3,
                    "title": "Largest Contentful Paint",
                    "description": "LCP är långsam.",
                    "displayValue": "4.1 s"
                },
                "speed-index": { "score": 0.92, "displayValue": "1.4 s" },
                "total-blocking-time": { "score": 0.6, "displayValue": "350 ms" },
                "interactive": { "score": 0.7, "displayValue": "5.2 s" },
                "cumulative-layout-shift": { "score": 1.0, "displayValue": "0.01" }
            }
        },
        "loadingExperience": { "overall_category": "AVERAGE" }
    })
}

/// Default configuration with every endpoint pointed at `server`.
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.audit.endpoint = format!("{}/pagespeed", server.uri());
    config.audit.api_key_env = None;
    config.ai.endpoint = format!("{}/chat/completions", server.uri());
    config.ai.api_key_env = None;
    config.leads.endpoint = format!("{}/api/leads", server.uri());
    config.leads.api_key_env = None;
    config
}

/// DeepSeek chat completion wrapping `content`.
pub fn chat_completion(content: &str) -> Value {
    json!({
        "model": "deepseek-chat",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}
