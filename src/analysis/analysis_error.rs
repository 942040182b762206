use thiserror::Error;

pub const VERIFICATION_FAILED_MESSAGE: &str = "Trotz intensiver Suche konnte kein Objekt mit \
     100%iger Übereinstimmung bei diesem Makler gefunden werden.";

pub const ANALYSIS_INTERRUPTED_MESSAGE: &str = "Die Analyse wurde aufgrund der extremen \
     Datenmenge unterbrochen. Bitte starten Sie den Deep-Scan erneut.";

/// The two ways an AI step can fail. The reason is for logs only;
/// users always see the fixed message.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("verification failed: {0}")]
    VerificationFailed(String),
    #[error("analysis interrupted: {0}")]
    AnalysisInterrupted(String),
}

impl AnalysisError {
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::VerificationFailed(_) => VERIFICATION_FAILED_MESSAGE,
            AnalysisError::AnalysisInterrupted(_) => ANALYSIS_INTERRUPTED_MESSAGE,
        }
    }
}
