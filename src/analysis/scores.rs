// src/analysis/scores.rs

use crate::domain::analysis::{
    clamp_score, Score, ScoreCategory, DEFAULT_SCORE_DESCRIPTION, NEUTRAL_SCORE,
};
use serde::Deserialize;
use serde_json::Value;

/// A score entry as the model wrote it. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScore {
    pub label: Option<String>,
    pub value: Option<Value>,
    pub description: Option<String>,
}

impl RawScore {
    fn numeric_value(&self) -> Option<f64> {
        self.value.as_ref().and_then(numeric)
    }
}

/// Reads a model-supplied number. Numeric strings are accepted, including a
/// German decimal comma. Non-finite values count as missing.
pub fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    };
    parsed.filter(|v: &f64| v.is_finite())
}

/// Maps the model's free-form scores onto the five fixed slots.
///
/// For each slot the first entry whose label contains one of the slot's
/// keywords wins. Slots without a match get the neutral default. The result
/// is always in `ScoreCategory::ALL` order with every value clamped.
pub fn normalize_scores(raw: &[RawScore]) -> [Score; 5] {
    ScoreCategory::ALL.map(|category| {
        let found = raw.iter().find(|entry| {
            entry
                .label
                .as_deref()
                .map(|label| category.matches(label))
                .unwrap_or(false)
        });

        match found {
            Some(entry) => Score {
                category,
                value: clamp_score(entry.numeric_value().unwrap_or(NEUTRAL_SCORE)),
                description: entry
                    .description
                    .as_deref()
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .unwrap_or(DEFAULT_SCORE_DESCRIPTION)
                    .to_string(),
            },
            None => Score::neutral(category),
        }
    })
}
