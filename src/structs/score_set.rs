use serde::{Deserialize, Serialize};

/// Lighthouse category scores on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSet {
    pub performance: u8,
    pub accessibility: u8,
    pub best_practices: u8,
    pub seo: u8,
}

impl ScoreSet {
    /// Converts a raw 0-1 provider score. Absent or non-finite scores are 0.
    pub fn from_raw(raw: Option<f64>) -> u8 {
        match raw {
            Some(score) if score.is_finite() => (score.clamp(0.0, 1.0) * 100.0).round() as u8,
            _ => 0,
        }
    }

    /// Unweighted mean of the four categories.
    pub fn average(&self) -> f64 {
        f64::from(
            u16::from(self.performance)
                + u16::from(self.accessibility)
                + u16::from(self.best_practices)
                + u16::from(self.seo),
        ) / 4.0
    }

    pub fn overall(&self) -> u8 {
        self.average().round() as u8
    }
}
