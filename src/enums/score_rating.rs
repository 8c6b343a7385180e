/// Traffic-light rating for a single 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRating {
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreRating {
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Good,
            70..=89 => Self::NeedsImprovement,
            _ => Self::Poor,
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Good => "🟢",
            Self::NeedsImprovement => "🟡",
            Self::Poor => "🔴",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Bra",
            Self::NeedsImprovement => "Behöver förbättras",
            Self::Poor => "Dålig",
        }
    }
}
