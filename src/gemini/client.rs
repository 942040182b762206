// client.rs
use crate::config::GeminiConfig;
use crate::gemini::models::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, GoogleSearch,
    RequestPart, Tool,
};
use crate::gemini::GeminiError;
use reqwest::blocking::{Client, Request};
use serde_json::Value;
use tracing::{debug, warn};

const JSON_MIME: &str = "application/json";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// One prompt plus the JSON shape the model must answer in.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: Value,
    /// Lets the model ground its answer with Google Search.
    pub web_search: bool,
}

/// Raw model output before any JSON handling.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub text: String,
    pub finish_reason: Option<String>,
}

impl Generation {
    /// True when the model stopped because it ran out of output tokens.
    pub fn hit_token_limit(&self) -> bool {
        self.finish_reason.as_deref() == Some("MAX_TOKENS")
    }
}

/// Anything that can turn a prompt into text. The analysis pipeline only
/// talks to this trait so it can run against canned answers in tests.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> Result<Generation, GeminiError>;
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        if config.api_key.trim().is_empty() {
            return Err(GeminiError::Config("Gemini API key is empty".into()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(network_error)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// The outgoing HTTP request. The key travels in a header so it never
    /// shows up in a URL.
    fn prepare(&self, body: &GenerateContentRequest<'_>) -> Result<Request, GeminiError> {
        self.client
            .post(self.endpoint_url())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(body)
            .build()
            .map_err(network_error)
    }

    pub fn build_body<'a>(request: &'a GenerationRequest) -> GenerateContentRequest<'a> {
        let tools = if request.web_search {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };

        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            tools,
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME,
                response_schema: &request.response_schema,
            },
        }
    }

    /// Pulls the answer text out of a decoded response: every text part of
    /// the first candidate, concatenated in order.
    pub fn extract_generation(response: GenerateContentResponse) -> Result<Generation, GeminiError> {
        let candidate = response
            .candidates
            .and_then(|candidates| candidates.into_iter().next());

        let Some(candidate) = candidate else {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(GeminiError::Blocked(reason));
        };

        let text: String = candidate
            .content
            .and_then(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        Ok(Generation {
            text,
            finish_reason: candidate.finish_reason,
        })
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<Generation, GeminiError> {
        let start = std::time::Instant::now();
        let body = Self::build_body(request);

        let http_request = self.prepare(&body)?;
        let resp = self.client.execute(http_request).map_err(network_error)?;

        let status = resp.status();
        let text = resp.text().map_err(network_error)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), model = %self.model, "Gemini request failed");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let decoded: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GeminiError::Decode(e.to_string()))?;
        let generation = Self::extract_generation(decoded)?;

        debug!(
            model = %self.model,
            elapsed_ms = start.elapsed().as_millis() as u64,
            chars = generation.text.len(),
            finish_reason = ?generation.finish_reason,
            "Gemini answered"
        );

        Ok(generation)
    }
}

/// reqwest prints the request URL in its errors; drop it before the text
/// reaches a log line.
fn network_error(e: reqwest::Error) -> GeminiError {
    GeminiError::Network(e.without_url().to_string())
}
