// src/analysis/verifier.rs

use crate::analysis::prompts::{prescan_prompt, prescan_schema};
use crate::analysis::repair::slice_object;
use crate::analysis::AnalysisError;
use crate::domain::{ListingQuery, PreScanResult};
use crate::gemini::{GenerationRequest, TextGenerator};
use tracing::{info, warn};

/// Pre-scan: asks the model, with web search, whether the broker really lists
/// this property. One attempt; any failure means "no exact match".
pub fn verify_listing(
    generator: &dyn TextGenerator,
    query: &ListingQuery,
) -> Result<PreScanResult, AnalysisError> {
    let request = GenerationRequest {
        prompt: prescan_prompt(query),
        response_schema: prescan_schema(),
        web_search: true,
    };

    let generation = generator.generate(&request).map_err(|e| {
        warn!(error = %e, broker = %query.broker_name, "Pre-scan request failed");
        AnalysisError::VerificationFailed(e.to_string())
    })?;

    let prescan = parse_prescan(&generation.text)?;

    info!(
        broker = %query.broker_name,
        link = %prescan.broker_link,
        "Listing verified"
    );
    Ok(prescan)
}

pub fn parse_prescan(raw: &str) -> Result<PreScanResult, AnalysisError> {
    let json = slice_object(raw).map_err(|e| AnalysisError::VerificationFailed(e.to_string()))?;

    let prescan: PreScanResult = serde_json::from_str(json)
        .map_err(|e| AnalysisError::VerificationFailed(format!("unreadable pre-scan: {e}")))?;
    let prescan = prescan.normalized();

    if !prescan.is_confident() {
        return Err(AnalysisError::VerificationFailed(
            "pre-scan returned no headline or broker link".into(),
        ));
    }

    Ok(prescan)
}
