use std::fmt::Write as _;
use terminal_size::{terminal_size, Width};
use crate::enums::score_rating::ScoreRating;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::score_set::ScoreSet;

const MAX_RULE_WIDTH: usize = 60;

pub struct ReportPrinter;

impl ReportPrinter {
    pub fn summary_sentence(overall: u8) -> &'static str {
        match overall {
            90.. => "Utmärkt arbete! Din webbplats presterar mycket bra.",
            70..=89 => "Bra grund, men det finns rum för förbättringar.",
            _ => "Det finns betydande förbättringsmöjligheter.",
        }
    }

    pub fn comparison_word(overall: u8) -> &'static str {
        match overall {
            80.. => "utmärkt",
            60..=79 => "bra",
            _ => "under genomsnitt",
        }
    }

    pub const fn focus_area(scores: &ScoreSet) -> &'static str {
        if scores.performance < 70 {
            "hastighetsoptimering"
        } else {
            "SEO-förbättringar"
        }
    }

    fn rule() -> String {
        let width = terminal_size()
            .map(|(Width(w), _)| usize::from(w))
            .unwrap_or(MAX_RULE_WIDTH)
            .min(MAX_RULE_WIDTH);
        "━".repeat(width)
    }

    fn score_line(out: &mut String, label: &str, score: u8) {
        let rating = ScoreRating::from_score(score);
        let _ = writeln!(out, "  {} {:<16} {:>3}/100  {}", rating.emoji(), label, score, rating.label());
    }

    /// Plain-text report. Interim reports are marked as preliminary.
    pub fn render(result: &AnalysisResult, is_final: bool) -> String {
        let rule = Self::rule();
        let scores = &result.metrics;
        let overall = scores.overall();
        let mut out = String::new();

        let _ = writeln!(out, "\n🔍 SEO-RAPPORT: {}", result.url);
        let _ = writeln!(out, "{}", rule);
        if !is_final {
            let _ = writeln!(out, "⏳ Preliminärt resultat, AI-analysen laddar...");
        }

        Self::score_line(&mut out, "Prestanda", scores.performance);
        Self::score_line(&mut out, "Tillgänglighet", scores.accessibility);
        Self::score_line(&mut out, "Bästa praxis", scores.best_practices);
        Self::score_line(&mut out, "SEO", scores.seo);

        let timings = &result.detailed_metrics;
        let _ = writeln!(out, "\n⏱️  NYCKELTAL");
        for (label, value) in [
            ("First Contentful Paint", &timings.first_contentful_paint),
            ("Speed Index", &timings.speed_index),
            ("Largest Contentful Paint", &timings.largest_contentful_paint),
            ("Total Blocking Time", &timings.total_blocking_time),
            ("Time to Interactive", &timings.time_to_interactive),
            ("Cumulative Layout Shift", &timings.cumulative_layout_shift),
        ] {
            let _ = writeln!(out, "  {:<26} {}", label, value);
        }

        let _ = writeln!(out, "\n💡 FÖRBÄTTRINGSFÖRSLAG ({})", result.suggestions.len());
        for suggestion in &result.suggestions {
            let _ = writeln!(out, "  ✓ {}", suggestion);
        }

        let _ = writeln!(out, "\n⚠️  PROBLEM ({})", result.issues.len());
        if result.issues.is_empty() {
            let _ = writeln!(out, "  Inga kritiska problem hittades");
        }
        for issue in &result.issues {
            let _ = writeln!(out, "  • {}", issue);
        }

        let _ = writeln!(out, "\n📊 SAMMANFATTNING");
        let _ = writeln!(
            out,
            "  Din webbplats har en övergripande poäng på {}/100. {}",
            overall,
            Self::summary_sentence(overall)
        );
        let _ = writeln!(
            out,
            "  Den presterar {} jämfört med branschstandard. Fokusera på {} för bästa resultat.",
            Self::comparison_word(overall),
            Self::focus_area(scores)
        );
        let _ = writeln!(out, "{}", rule);

        out
    }

    pub fn print(result: &AnalysisResult, is_final: bool) {
        println!("{}", Self::render(result, is_final));
    }
}
