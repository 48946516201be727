use super::{ModelProvider, ProviderError};
use crate::types::ContextTurn;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

// Request wire types. Field names follow the REST API's camelCase.

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

// Response wire types. Everything is optional: a blocked or empty answer
// still arrives as a 200 with no candidates.

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    /// Reads `GEMINI_API_KEY` (and the optional `GEMINI_MODEL` override)
    /// from the environment. A missing key is a configuration fault the
    /// caller should treat as fatal at startup.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            anyhow::anyhow!("GEMINI_API_KEY is not set. Add it to .env or the process environment.")
        })?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        })
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, ProviderError> {
        let url = format!("{API_BASE}/{}:generateContent?key={}", self.model, self.api_key);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        Ok(extract_text(parsed))
    }
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, ProviderError> {
        self.generate(&structured_request(prompt, schema)).await
    }

    async fn chat(
        &self,
        system_instruction: &str,
        history: &[ContextTurn],
        message: &str,
    ) -> Result<String, ProviderError> {
        self.generate(&chat_request(system_instruction, history, message))
            .await
    }
}

fn structured_request(prompt: &str, schema: &serde_json::Value) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            role: Some("user"),
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json",
            response_schema: schema.clone(),
        }),
    }
}

fn chat_request(system_instruction: &str, history: &[ContextTurn], message: &str) -> GenerateRequest {
    let mut contents: Vec<Content> = history
        .iter()
        .map(|turn| Content {
            role: Some(turn.role.as_wire()),
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        })
        .collect();
    contents.push(Content {
        role: Some("user"),
        parts: vec![Part {
            text: message.to_string(),
        }],
    });

    GenerateRequest {
        contents,
        system_instruction: Some(Content {
            role: None,
            parts: vec![Part {
                text: system_instruction.to_string(),
            }],
        }),
        generation_config: None,
    }
}

fn extract_text(response: GenerateResponse) -> String {
    let mut text = String::new();
    for candidate in response.candidates.into_iter().take(1) {
        if let Some(content) = candidate.content {
            for part in content.parts {
                text.push_str(&part.text);
            }
        }
    }
    text
}
