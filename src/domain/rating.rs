// src/domain/rating.rs

/// Letter grade for the overall score.
///
/// Thresholds are inclusive lower bounds, checked from the top down, so a
/// 6.0 is an A and a 5.99 is a B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    A,
    B,
    C,
    D,
}

impl Rating {
    pub fn from_score(score: f64) -> Self {
        if score >= 6.0 {
            return Rating::A;
        }
        if score >= 5.0 {
            return Rating::B;
        }
        if score >= 4.0 {
            return Rating::C;
        }
        Rating::D
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::A => "A-Rating: Top-Investment",
            Rating::B => "B-Rating: Solider Deal",
            Rating::C => "C-Rating: Durchschnittlich",
            Rating::D => "D-Rating: Hohes Risiko",
        }
    }

    /// CSS modifier used by the badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Rating::A => "rating-a",
            Rating::B => "rating-b",
            Rating::C => "rating-c",
            Rating::D => "rating-d",
        }
    }
}
