//! Rule-based stand-in for the AI enrichment.
//!
//! Pure function of the score set: identical input always yields identical
//! output.

use crate::config::constants::{
    MAX_FALLBACK_OPPORTUNITIES, MAX_FALLBACK_PRIORITY_ISSUES, MAX_FALLBACK_SUGGESTIONS,
    MAX_FALLBACK_TECHNICAL_RECOMMENDATIONS,
};
use crate::structs::enrichment_result::EnrichmentResult;
use crate::structs::score_set::ScoreSet;

pub const LOW_PERFORMANCE_IMPACT: &str =
    "Låg prestanda kan leda till högre avhoppningsfrekvens och lägre konverteringar";
pub const GOOD_PERFORMANCE_IMPACT: &str =
    "God prestanda stödjer användarengagemang och sökmotorrankning";

pub const ASSESSMENT_EXCELLENT: &str = "Utmärkt prestanda på alla områden - fortsätt så här!";
pub const ASSESSMENT_GOOD: &str = "Bra grundläggande prestanda med utrymme för förbättringar";
pub const ASSESSMENT_PASSABLE: &str = "Godkänd prestanda men flera områden behöver uppmärksamhet";
pub const ASSESSMENT_POOR: &str = "Betydande förbättringar krävs för optimal prestanda";

pub fn generate(scores: &ScoreSet) -> EnrichmentResult {
    let mut suggestions = Vec::new();
    let mut priority_issues = Vec::new();
    let mut opportunities = Vec::new();
    let mut technical_recommendations = Vec::new();

    if scores.performance < 70 {
        priority_issues.push("Kritiskt låg prestanda påverkar användarupplevelsen");
        suggestions.push("Optimera bilder och använd moderna format som WebP");
        technical_recommendations.push("Implementera lazy loading för bilder och videos");
    } else if scores.performance < 85 {
        opportunities.push("Förbättra laddningstider för bättre användarupplevelse");
        suggestions.push("Minifiera och komprimera CSS/JavaScript-filer");
    }

    if scores.seo < 80 {
        priority_issues.push("SEO-brister kan minska synligheten i sökmotorer");
        suggestions.push("Lägg till meta descriptions och optimera sidtitlar");
        technical_recommendations.push("Implementera strukturerad data (Schema.org)");
    }

    if scores.accessibility < 85 {
        suggestions.push("Förbättra tillgänglighet med alt-text och bättre kontrast");
        technical_recommendations.push("Använd semantiska HTML-element");
    }

    if scores.best_practices < 85 {
        opportunities.push("Förbättra säkerhet och moderna webbstandarder");
        technical_recommendations.push("Implementera HTTPS och Content Security Policy");
    }

    if suggestions.is_empty() {
        suggestions.push("Fortsätt optimera Core Web Vitals");
        opportunities.push("Överväg Progressive Web App funktioner");
    }

    let business_impact = if scores.performance < 70 {
        LOW_PERFORMANCE_IMPACT
    } else {
        GOOD_PERFORMANCE_IMPACT
    };

    EnrichmentResult {
        suggestions: capped(suggestions, MAX_FALLBACK_SUGGESTIONS),
        priority_issues: capped(priority_issues, MAX_FALLBACK_PRIORITY_ISSUES),
        opportunities: capped(opportunities, MAX_FALLBACK_OPPORTUNITIES),
        technical_recommendations: capped(technical_recommendations, MAX_FALLBACK_TECHNICAL_RECOMMENDATIONS),
        business_impact: business_impact.to_string(),
        overall_assessment: overall_assessment(scores).to_string(),
    }
}

pub fn overall_assessment(scores: &ScoreSet) -> &'static str {
    let average = scores.average();

    if average >= 90.0 {
        ASSESSMENT_EXCELLENT
    } else if average >= 80.0 {
        ASSESSMENT_GOOD
    } else if average >= 70.0 {
        ASSESSMENT_PASSABLE
    } else {
        ASSESSMENT_POOR
    }
}

fn capped(items: Vec<&str>, max: usize) -> Vec<String> {
    items.into_iter().take(max).map(ToString::to_string).collect()
}
