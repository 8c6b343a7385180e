pub const ENRICHMENT_SYSTEM_PROMPT: &str =
    "Du är en expert på webbprestanda och SEO. Svara alltid med valid JSON enligt specificerat format. Använd svenska språket.";

pub const ENRICHMENT_RESPONSE_SCHEMA: &str = r#"Respond with JSON in this exact format (no additional text):
{
  "suggestions": ["konkret actionable suggestion 1", "suggestion 2", "suggestion 3"],
  "priorityIssues": ["högsta prioritet issue 1", "issue 2"],
  "opportunities": ["optimization opportunity 1", "opportunity 2"],
  "technicalRecommendations": ["technical rec 1", "technical rec 2"],
  "businessImpact": "short description of business impact in Swedish",
  "overallAssessment": "brief overall assessment in Swedish"
}

Keep all text in Swedish. Make suggestions specific and actionable. Limit arrays to 2-4 items each."#;
