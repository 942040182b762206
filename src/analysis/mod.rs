mod analysis_error;
mod analyzer;
mod prompts;
pub mod repair;
pub mod scores;
mod verifier;

pub use analysis_error::{AnalysisError, ANALYSIS_INTERRUPTED_MESSAGE, VERIFICATION_FAILED_MESSAGE};
pub use analyzer::{analyze_listing, parse_analysis};
pub use verifier::{parse_prescan, verify_listing};
