//! Google Gemini client.
//!
//! One `generateContent` call per tutorial, asking for JSON output that
//! matches [`GeneratedTutorial`] through a response schema.

use async_trait::async_trait;
use saber_tudo_core::config::GenerationSettings;
use serde::Deserialize;
use serde_json::{Value, json};
use std::fmt;

use crate::payload::GeneratedTutorial;
use crate::{GenerationError, Result, TutorialGenerator};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Upstream error messages, parsed or raw, are cut to this many bytes
const MAX_ERROR_BODY_BYTES: usize = 2048;

const SYSTEM_INSTRUCTION: &str = "Você é um editor sênior de um portal de 'Como Fazer'. Seus artigos são profundos, técnicos mas acessíveis, e muito detalhados.";

pub fn build_prompt(topic: &str) -> String {
    format!(
        "Crie um tutorial EXTREMAMENTE COMPLETO, LONGO e detalhado em PORTUGUÊS sobre: \"{}\". \
         O artigo deve parecer um post profissional de blog com mais de 1000 palavras de conteúdo útil. \
         Inclua contexto histórico ou teórico.",
        topic
    )
}

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// Schema the model's JSON output must follow
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "category": { "type": "STRING" },
            "estimatedTime": { "type": "STRING" },
            "difficulty": { "type": "STRING", "enum": ["Fácil", "Médio", "Difícil"] },
            "introduction": { "type": "STRING" },
            "context": {
                "type": "STRING",
                "description": "Texto longo com pelo menos 3 parágrafos sobre o contexto e a teoria do tema."
            },
            "materials": string_list(),
            "steps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["title", "description"]
                }
            },
            "tips": string_list(),
            "commonErrors": string_list(),
            "faq": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "answer": { "type": "STRING" }
                    },
                    "required": ["question", "answer"]
                }
            },
            "references": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "url": { "type": "STRING" }
                    },
                    "required": ["title", "url"]
                }
            },
            "conclusion": { "type": "STRING" }
        },
        "required": [
            "title", "category", "estimatedTime", "difficulty", "introduction",
            "context", "steps", "tips", "commonErrors", "faq", "references", "conclusion"
        ]
    })
}

/// Request body for `models/{model}:generateContent`
pub fn build_request_body(topic: &str) -> Value {
    json!({
        "contents": [
            { "role": "user", "parts": [{ "text": build_prompt(topic) }] }
        ],
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_INSTRUCTION }]
        },
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorObject,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    message: Option<String>,
}

/// Extract the tutorial from a `generateContent` response body.
///
/// The first candidate's text parts are joined and parsed as the tutorial
/// JSON. Missing candidates or text count as malformed.
pub fn parse_generate_response(body: &str) -> Result<GeneratedTutorial> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerationError::Malformed(
            "response has no candidate text".to_string(),
        ));
    }

    let tutorial: GeneratedTutorial = serde_json::from_str(text.trim())?;
    Ok(tutorial)
}

/// Turn a non-success response into an error, preferring the API's own message
fn upstream_error(status: u16, body: &str) -> GenerationError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .unwrap_or_else(|| body.to_string());
    GenerationError::Upstream {
        status,
        message: truncate(&message, MAX_ERROR_BODY_BYTES).to_string(),
    }
}

fn truncate(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key_env: String,
    api_key: Option<String>,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GeminiClient {
    /// A client without a key is still constructed; every call then fails
    /// with [`GenerationError::MissingCredentials`].
    pub fn new(settings: &GenerationSettings, api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("saber-tudo/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            api_key_env: settings.api_key_env.clone(),
            api_key,
        })
    }

    /// Build from settings, reading the key from the configured variable
    pub fn from_settings(settings: &GenerationSettings) -> Result<Self> {
        Self::new(settings, settings.api_key())
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl TutorialGenerator for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, topic: &str) -> Result<GeneratedTutorial> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GenerationError::MissingCredentials(self.api_key_env.clone()));
        };

        let response = self
            .http
            .post(self.url())
            .header(API_KEY_HEADER, api_key)
            .json(&build_request_body(topic))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = upstream_error(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), error = %err, "gemini request failed");
            return Err(err);
        }

        parse_generate_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saber_tudo_core::Config;

    fn wrap(text: &str) -> String {
        json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": text }] } }
            ]
        })
        .to_string()
    }

    fn tutorial_json() -> String {
        json!({
            "title": "Como Montar um Terrário",
            "category": "Jardinagem",
            "estimatedTime": "2 horas",
            "difficulty": "Médio",
            "introduction": "Um pequeno ecossistema de vidro.",
            "context": "Terrários surgiram no século XIX.\n\nA caixa de Ward mudou a botânica.",
            "materials": ["Pote de vidro", "Pedras"],
            "steps": [
                { "title": "Drenagem", "description": "Coloque pedras no fundo." },
                { "title": "Substrato", "description": "Adicione terra vegetal." }
            ],
            "tips": ["Evite sol direto."],
            "commonErrors": ["Regar demais."],
            "faq": [{ "question": "Precisa regar?", "answer": "Raramente." }],
            "references": [{ "title": "Terrário", "url": "https://pt.wikipedia.org/wiki/Terr%C3%A1rio" }],
            "conclusion": "Seu terrário está pronto."
        })
        .to_string()
    }

    #[test]
    fn test_parse_generate_response() {
        let tutorial = parse_generate_response(&wrap(&tutorial_json())).unwrap();
        assert_eq!(tutorial.title, "Como Montar um Terrário");
        assert_eq!(tutorial.steps.len(), 2);
        assert_eq!(tutorial.materials.as_deref().map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_parse_rejects_missing_candidates() {
        let result = parse_generate_response(r#"{"candidates": []}"#);
        assert!(matches!(result, Err(GenerationError::Malformed(_))));

        let result = parse_generate_response(r#"{}"#);
        assert!(matches!(result, Err(GenerationError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_non_json_text() {
        let result = parse_generate_response(&wrap("Desculpe, não posso ajudar."));
        assert!(matches!(result, Err(GenerationError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_incomplete_tutorial() {
        let result = parse_generate_response(&wrap(r#"{"title": "Só o título"}"#));
        assert!(matches!(result, Err(GenerationError::Malformed(_))));
    }

    #[test]
    fn test_request_body_shape() {
        let body = build_request_body("fazer kombucha");
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("\"fazer kombucha\""));
        assert!(prompt.contains("PORTUGUÊS"));
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(
            body["systemInstruction"]["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("editor sênior")
        );
    }

    #[test]
    fn test_schema_requires_everything_but_materials() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(!required.contains(&"materials"));
        assert!(required.contains(&"steps"));
        assert!(required.contains(&"commonErrors"));
        assert_eq!(required.len(), 12);
    }

    #[test]
    fn test_upstream_error_prefers_api_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        match upstream_error(400, body) {
            GenerationError::Upstream { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        match upstream_error(503, "Service Unavailable") {
            GenerationError::Upstream { message, .. } => assert_eq!(message, "Service Unavailable"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_upstream_error_message_is_bounded() {
        let long = "é".repeat(MAX_ERROR_BODY_BYTES);
        let envelope = json!({ "error": { "code": 500, "message": long } }).to_string();

        for body in [envelope.as_str(), long.as_str()] {
            match upstream_error(500, body) {
                GenerationError::Upstream { message, .. } => {
                    assert!(message.len() <= MAX_ERROR_BODY_BYTES);
                    assert!(message.starts_with("éé"));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("ação", 2), "a");
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn test_url_from_settings() {
        let config = Config::default();
        let client = GeminiClient::new(&config.generation, Some("k".to_string())).unwrap();
        assert_eq!(
            client.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(client.has_credentials());
        assert!(!format!("{:?}", client).contains("\"k\""));
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let config = Config::default();
        let client = GeminiClient::new(&config.generation, None).unwrap();
        let result = client.generate("qualquer coisa").await;
        assert!(matches!(result, Err(GenerationError::MissingCredentials(ref var)) if var == "API_KEY"));
    }
}
