use crate::analysis::{parse_analysis, parse_prescan};
use crate::config::{AppConfig, GeminiConfig};
use crate::domain::AnalysisResult;
use crate::gemini::{GeminiError, Generation, GenerationRequest, TextGenerator};
use crate::session::SessionStore;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::collections::VecDeque;
use std::io::Read;
use std::sync::Mutex;
use std::time::Duration;

/// Answers prompts from a queue of canned replies and records every request.
pub struct FakeGenerator {
    replies: Mutex<VecDeque<Result<String, String>>>,
    seen: Mutex<Vec<GenerationRequest>>,
}

impl FakeGenerator {
    pub fn new(replies: Vec<Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl TextGenerator for FakeGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<Generation, GeminiError> {
        self.seen.lock().unwrap().push(request.clone());

        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(Generation {
                text,
                finish_reason: Some("STOP".to_string()),
            }),
            Some(Err(msg)) => Err(GeminiError::Network(msg)),
            None => Err(GeminiError::EmptyResponse),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        addr: "127.0.0.1:0".parse().unwrap(),
        max_workers: 1,
        session_ttl_secs: 3600,
        gemini: GeminiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-test".to_string(),
            base_url: "http://localhost:1".to_string(),
            timeout: Duration::from_secs(1),
        },
    }
}

pub fn test_app(replies: Vec<Result<String, String>>) -> AppState {
    let config = test_config();
    AppState {
        sessions: SessionStore::new(config.session_ttl_secs),
        config,
        generator: Box::new(FakeGenerator::new(replies)),
    }
}

pub fn prescan_json() -> String {
    r#"{"headline":"Altbau mit Balkon","description":"Helle Wohnung im 3. OG.","brokerLink":"https://muster-immobilien.de/expose/42"}"#
        .to_string()
}

/// A complete deep-analysis answer with `totalScoreExplanation` as last key.
pub fn sample_analysis_json() -> String {
    r#"{
  "headline": "Altbau mit Balkon",
  "ort": "80331 München",
  "preis": "450.000 €",
  "type": "Etagenwohnung",
  "livingSpace": "78 m²",
  "marketAnalysis": "Der Preis liegt **leicht über** dem Mittel.\n- Vergleichsobjekte teurer",
  "macroLocation": "Starker Wirtschaftsraum.",
  "microLocation": "Ruhige Seitenstraße.",
  "objectCondition": "Gepflegter Zustand.",
  "energyEfficiency": "Klasse D.",
  "fazit": "Solide Kaufgelegenheit.",
  "totalScore": 5.4,
  "scores": [
    { "label": "Marktanalyse", "value": 5.0, "description": "Fairer Preis" },
    { "label": "Makrolage", "value": 6.0, "description": "Wachstumsregion" },
    { "label": "Mikrolage", "value": 5.5, "description": "Gute Infrastruktur" },
    { "label": "Bauzustand", "value": 4.5, "description": "Kleiner Sanierungsbedarf" },
    { "label": "Energieeffizienz", "value": 3.5, "description": "Heizung alt" }
  ],
  "premiumDetails": {
    "marketDetails": "Markt lang",
    "macroDetails": "Makro lang",
    "microDetails": "Mikro lang",
    "objectDetails": "Objekt lang",
    "energyDetails": "Energie lang"
  },
  "totalScoreExplanation": "Gute Lage, fairer Preis."
}"#
    .to_string()
}

/// `sample_analysis_json` parsed against `prescan_json`.
pub fn sample_analysis() -> AnalysisResult {
    let prescan = parse_prescan(&prescan_json()).unwrap();
    parse_analysis(&sample_analysis_json(), &prescan).unwrap()
}

pub fn request(method: Method, uri: &str, cookie: Option<&str>, form: Option<&str>) -> Request {
    let mut req = Request::new(match form {
        Some(body) => Body::from(body.to_string()),
        None => Body::empty(),
    });
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();

    if let Some(sid) = cookie {
        req.headers_mut()
            .insert("Cookie", format!("sid={sid}").parse().unwrap());
    }
    if form.is_some() {
        req.headers_mut().insert(
            "Content-Type",
            "application/x-www-form-urlencoded".parse().unwrap(),
        );
    }
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// The `sid` value from a response's Set-Cookie header.
pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .and_then(|pair| pair.strip_prefix("sid="))
        .map(str::to_string)
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
