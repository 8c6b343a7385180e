use crate::prompts::enrichment_prompt::ENRICHMENT_RESPONSE_SCHEMA;
use crate::structs::detailed_timings::DetailedTimings;
use crate::structs::score_set::ScoreSet;

/// User prompt for the enrichment call: scores, timing summary and the
/// strict JSON schema the reply must follow.
pub fn generate_enrichment_prompt(url: &str, scores: &ScoreSet, timings: &DetailedTimings) -> String {
    let mut prompt = String::from(
        "Analyze this website SEO performance data and provide actionable recommendations. \
         Respond ONLY with valid JSON in the exact format specified.\n\n",
    );

    prompt.push_str(&format!("Website: {}\n", url));
    prompt.push_str("Lighthouse Scores:\n");
    prompt.push_str(&format!("- Performance: {}/100\n", scores.performance));
    prompt.push_str(&format!("- Accessibility: {}/100\n", scores.accessibility));
    prompt.push_str(&format!("- Best Practices: {}/100\n", scores.best_practices));
    prompt.push_str(&format!("- SEO: {}/100\n\n", scores.seo));

    prompt.push_str("Key Metrics:\n");
    prompt.push_str(&format!("- First Contentful Paint: {}\n", timings.first_contentful_paint));
    prompt.push_str(&format!("- Speed Index: {}\n", timings.speed_index));
    prompt.push_str(&format!("- Largest Contentful Paint: {}\n", timings.largest_contentful_paint));
    prompt.push_str(&format!("- Total Blocking Time: {}\n", timings.total_blocking_time));
    prompt.push_str(&format!("- Time to Interactive: {}\n", timings.time_to_interactive));
    prompt.push_str(&format!("- Cumulative Layout Shift: {}\n\n", timings.cumulative_layout_shift));

    prompt.push_str(ENRICHMENT_RESPONSE_SCHEMA);
    prompt
}
