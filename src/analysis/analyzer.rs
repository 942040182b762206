// src/analysis/analyzer.rs

use crate::analysis::prompts::{analysis_prompt, analysis_schema};
use crate::analysis::repair::extract_and_repair;
use crate::analysis::scores::{normalize_scores, numeric, RawScore};
use crate::analysis::AnalysisError;
use crate::domain::analysis::{clamp_score, CategoryTexts, NOT_SPECIFIED};
use crate::domain::{AnalysisResult, ListingQuery, PreScanResult};
use crate::gemini::{GenerationRequest, TextGenerator};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

/// The deep analysis as the model wrote it, before normalization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    headline: String,
    ort: String,
    preis: Option<String>,
    #[serde(rename = "type")]
    property_type: Option<String>,
    living_space: Option<String>,

    market_analysis: String,
    macro_location: String,
    micro_location: String,
    object_condition: String,
    energy_efficiency: String,
    fazit: String,

    total_score: Value,
    total_score_explanation: Option<String>,
    scores: Vec<RawScore>,
    premium_details: RawPremiumDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPremiumDetails {
    market_details: String,
    macro_details: String,
    micro_details: String,
    object_details: String,
    energy_details: String,
}

/// Deep analysis for a listing the user has confirmed.
pub fn analyze_listing(
    generator: &dyn TextGenerator,
    query: &ListingQuery,
    prescan: &PreScanResult,
) -> Result<AnalysisResult, AnalysisError> {
    let request = GenerationRequest {
        prompt: analysis_prompt(query, prescan),
        response_schema: analysis_schema(),
        web_search: false,
    };

    let generation = generator.generate(&request).map_err(|e| {
        warn!(error = %e, headline = %prescan.headline, "Deep analysis request failed");
        AnalysisError::AnalysisInterrupted(e.to_string())
    })?;

    if generation.hit_token_limit() {
        warn!(
            chars = generation.text.len(),
            "Deep analysis stopped at the output token limit"
        );
    }

    let result = parse_analysis(&generation.text, prescan)?;

    info!(
        headline = %result.headline,
        total_score = result.total_score,
        repaired = result.repaired,
        "Deep analysis finished"
    );
    Ok(result)
}

/// Turns raw model text into a complete `AnalysisResult`, or fails as a whole.
pub fn parse_analysis(raw: &str, prescan: &PreScanResult) -> Result<AnalysisResult, AnalysisError> {
    let extracted =
        extract_and_repair(raw).map_err(|e| AnalysisError::AnalysisInterrupted(e.to_string()))?;

    if extracted.repaired {
        warn!(
            chars = extracted.json.len(),
            "Deep analysis answer was truncated; closed it heuristically"
        );
    }

    let parsed: RawAnalysis = serde_json::from_str(&extracted.json).map_err(|e| {
        AnalysisError::AnalysisInterrupted(format!(
            "unreadable analysis (repaired: {}): {e}",
            extracted.repaired
        ))
    })?;

    let total_score = numeric(&parsed.total_score)
        .map(clamp_score)
        .ok_or_else(|| AnalysisError::AnalysisInterrupted("totalScore is not a number".into()))?;

    let first_of = |candidates: [Option<&str>; 2]| {
        candidates
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|v| !v.is_empty())
            .unwrap_or(NOT_SPECIFIED)
            .to_string()
    };

    Ok(AnalysisResult {
        headline: first_of([Some(parsed.headline.as_str()), Some(prescan.headline.as_str())]),
        location: parsed.ort.trim().to_string(),
        price: first_of([parsed.preis.as_deref(), prescan.price.as_deref()]),
        property_type: first_of([parsed.property_type.as_deref(), prescan.property_type.as_deref()]),
        living_space: first_of([parsed.living_space.as_deref(), prescan.living_space.as_deref()]),

        summaries: CategoryTexts {
            market: parsed.market_analysis,
            macro_location: parsed.macro_location,
            micro_location: parsed.micro_location,
            condition: parsed.object_condition,
            energy: parsed.energy_efficiency,
        },
        conclusion: parsed.fazit,

        total_score,
        total_score_explanation: parsed.total_score_explanation.unwrap_or_default(),
        scores: normalize_scores(&parsed.scores),

        details: CategoryTexts {
            market: parsed.premium_details.market_details,
            macro_location: parsed.premium_details.macro_details,
            micro_location: parsed.premium_details.micro_details,
            condition: parsed.premium_details.object_details,
            energy: parsed.premium_details.energy_details,
        },

        repaired: extracted.repaired,
    })
}
