// src/domain/analysis.rs

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 7.0;
pub const NEUTRAL_SCORE: f64 = 4.0;
pub const DEFAULT_SCORE_DESCRIPTION: &str =
    "Die Analyse für diesen Bereich wurde erfolgreich berechnet.";
pub const NOT_SPECIFIED: &str = "Nicht angegeben";

/// The five fixed evaluation slots, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    Market,
    MacroLocation,
    MicroLocation,
    Condition,
    Energy,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 5] = [
        ScoreCategory::Market,
        ScoreCategory::MacroLocation,
        ScoreCategory::MicroLocation,
        ScoreCategory::Condition,
        ScoreCategory::Energy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScoreCategory::Market => "Marktanalyse (Preis-Leistung)",
            ScoreCategory::MacroLocation => "Makrolage",
            ScoreCategory::MicroLocation => "Mikrolage",
            ScoreCategory::Condition => "Bauzustand & Ausstattung",
            ScoreCategory::Energy => "Energieeffizienz",
        }
    }

    /// Section heading used on the dashboard and in the printed report.
    pub fn heading(self) -> &'static str {
        match self {
            ScoreCategory::Market => "Marktanalyse & Preisvalidierung",
            ScoreCategory::MacroLocation => "Makrolage & Zukunftsindex",
            ScoreCategory::MicroLocation => "Mikrolage & Umfeldanalyse",
            ScoreCategory::Condition => "Bauzustand & Ausstattung",
            ScoreCategory::Energy => "Energieeffizienz & GEG",
        }
    }

    /// Accent colour name; the stylesheet defines `accent-<name>` for each.
    pub fn accent(self) -> &'static str {
        match self {
            ScoreCategory::Market => "emerald",
            ScoreCategory::MacroLocation => "cyan",
            ScoreCategory::MicroLocation => "rose",
            ScoreCategory::Condition => "blue",
            ScoreCategory::Energy => "amber",
        }
    }

    /// Lowercase fragments that identify this slot inside a model-chosen label.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ScoreCategory::Market => &["markt", "preis"],
            ScoreCategory::MacroLocation => &["makro"],
            ScoreCategory::MicroLocation => &["mikro"],
            ScoreCategory::Condition => &["bau", "zustand"],
            ScoreCategory::Energy => &["energie"],
        }
    }

    pub fn matches(self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.keywords().iter().any(|k| label.contains(k))
    }
}

/// Clamps into the 1.0–7.0 score range. Non-finite input is treated as missing.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_SCORE, MAX_SCORE)
    } else {
        NEUTRAL_SCORE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub category: ScoreCategory,
    pub value: f64,
    pub description: String,
}

impl Score {
    pub fn neutral(category: ScoreCategory) -> Self {
        Self {
            category,
            value: NEUTRAL_SCORE,
            description: DEFAULT_SCORE_DESCRIPTION.to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Bar fill in percent of the maximum score.
    pub fn percent(&self) -> f64 {
        self.value / MAX_SCORE * 100.0
    }
}

/// One text per evaluation slot. Used both for the short dashboard
/// summaries and the long premium details.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryTexts {
    pub market: String,
    pub macro_location: String,
    pub micro_location: String,
    pub condition: String,
    pub energy: String,
}

impl CategoryTexts {
    pub fn get(&self, category: ScoreCategory) -> &str {
        match category {
            ScoreCategory::Market => &self.market,
            ScoreCategory::MacroLocation => &self.macro_location,
            ScoreCategory::MicroLocation => &self.micro_location,
            ScoreCategory::Condition => &self.condition,
            ScoreCategory::Energy => &self.energy,
        }
    }
}

/// The finished deep analysis. Built once, never patched afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub headline: String,
    pub location: String,
    pub price: String,
    pub property_type: String,
    pub living_space: String,

    pub summaries: CategoryTexts,
    pub conclusion: String,

    pub total_score: f64,
    pub total_score_explanation: String,
    pub scores: [Score; 5],

    pub details: CategoryTexts,

    /// The model's answer was cut off and had to be closed by the repair step.
    pub repaired: bool,
}

impl AnalysisResult {
    pub fn score(&self, category: ScoreCategory) -> &Score {
        // scores is always built in ScoreCategory::ALL order
        &self.scores[category as usize]
    }
}
