use serde_json::Value;
use crate::config::constants::{MAX_COMBINED_ISSUES, NOT_AVAILABLE};
use crate::structs::audit_snapshot::AuditSnapshot;
use crate::structs::detailed_timings::DetailedTimings;
use crate::structs::score_set::ScoreSet;

/// Audits checked on the fast path, with the score below which they count
/// as a problem.
const BASIC_ISSUE_CHECKS: &[(&str, f64, &str)] = &[
    ("largest-contentful-paint", 0.5, "Långsam Largest Contentful Paint påverkar användarupplevelsen"),
    ("first-contentful-paint", 0.5, "Första innehållet laddas för långsamt"),
    ("speed-index", 0.5, "Hastighetindex visar långsam visuell laddning"),
    ("cumulative-layout-shift", 0.75, "Layout-skift påverkar användarupplevelsen negativt"),
];

const CRITICAL_AUDITS: &[&str] = &[
    "first-contentful-paint",
    "largest-contentful-paint",
    "speed-index",
    "meta-description",
    "document-title",
    "image-alt",
];

const CRITICAL_AUDIT_THRESHOLD: f64 = 0.9;
const MISSING_DESCRIPTION: &str = "Behöver förbättras";

fn lighthouse(raw: &Value) -> Option<&Value> {
    raw.get("lighthouseResult")
}

fn audits(raw: &Value) -> Option<&Value> {
    lighthouse(raw).and_then(|lh| lh.get("audits"))
}

fn audit_score(audit: &Value) -> Option<f64> {
    audit.get("score").and_then(Value::as_f64)
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

pub fn extract_scores(raw: &Value) -> ScoreSet {
    let category_score = |key: &str| {
        lighthouse(raw)
            .and_then(|lh| lh.get("categories"))
            .and_then(|categories| categories.get(key))
            .and_then(|category| category.get("score"))
            .and_then(Value::as_f64)
    };

    ScoreSet {
        performance: ScoreSet::from_raw(category_score("performance")),
        accessibility: ScoreSet::from_raw(category_score("accessibility")),
        best_practices: ScoreSet::from_raw(category_score("best-practices")),
        seo: ScoreSet::from_raw(category_score("seo")),
    }
}

pub fn extract_timings(raw: &Value) -> DetailedTimings {
    let display = |key: &str| {
        audits(raw)
            .and_then(|a| a.get(key))
            .and_then(|audit| non_empty_str(audit, "displayValue"))
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    };

    DetailedTimings {
        first_contentful_paint: display("first-contentful-paint"),
        speed_index: display("speed-index"),
        largest_contentful_paint: display("largest-contentful-paint"),
        total_blocking_time: display("total-blocking-time"),
        time_to_interactive: display("interactive"),
        cumulative_layout_shift: display("cumulative-layout-shift"),
    }
}

pub fn build_snapshot(raw: Value) -> AuditSnapshot {
    AuditSnapshot {
        scores: extract_scores(&raw),
        timings: extract_timings(&raw),
        raw,
    }
}

/// Fast-path issues from the four core timing audits.
///
/// Audits are looked up under `lighthouseResult.audits`, or at the top level
/// for payloads that carry them there. Anything unreadable yields no issue.
pub fn extract_basic_issues(raw: &Value) -> Vec<String> {
    let Some(audits) = audits(raw).or_else(|| raw.get("audits")).filter(|a| a.is_object()) else {
        return Vec::new();
    };

    BASIC_ISSUE_CHECKS
        .iter()
        .filter(|(key, threshold, _)| {
            audits
                .get(*key)
                .and_then(audit_score)
                .is_some_and(|score| score < *threshold)
        })
        .map(|(_, _, message)| (*message).to_string())
        .collect()
}

/// Full issue list: failing critical audits first, then score-based
/// findings, capped at six.
pub fn extract_issues(scores: &ScoreSet, raw: &Value) -> Vec<String> {
    let mut issues = Vec::new();

    if let Some(audits) = audits(raw) {
        for key in CRITICAL_AUDITS {
            let Some(audit) = audits.get(*key) else {
                continue;
            };
            let failing = audit_score(audit).is_some_and(|score| score < CRITICAL_AUDIT_THRESHOLD);
            if let (true, Some(title)) = (failing, non_empty_str(audit, "title")) {
                let description = non_empty_str(audit, "description").unwrap_or(MISSING_DESCRIPTION);
                issues.push(format!("{}: {}", title, description));
            }
        }
    }

    if scores.performance < 50 {
        issues.push("Kritiskt låg prestanda - webbplatsen laddar mycket långsamt".to_string());
    }

    if scores.seo < 70 {
        issues.push("SEO-problem upptäckta - kan påverka synlighet i sökmotorer".to_string());
    }

    if scores.accessibility < 80 {
        issues.push("Tillgänglighetsproblem - kan hindra användare med funktionsnedsättningar".to_string());
    }

    issues.truncate(MAX_COMBINED_ISSUES);
    issues
}
