use std::fmt;

/// Qualitative strength tier of a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthRating {
    Weak,
    Medium,
    Strong,
}

impl StrengthRating {
    /// Map a 0-7 score to a tier: 0-2 weak, 3-4 medium, 5+ strong
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthRating::Weak,
            3..=4 => StrengthRating::Medium,
            _ => StrengthRating::Strong,
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthRating::Weak => "Weak",
            StrengthRating::Medium => "Medium",
            StrengthRating::Strong => "Strong",
        };
        f.write_str(label)
    }
}
