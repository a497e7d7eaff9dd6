use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{ExpansionError, QueryExpander};

const EXPANSION_PROMPT: &str = "You are an expert in generating search queries.

Given the original search query: {query},
generate an array of expanded search queries that include variations, aliases, and common misspellings of the name.
The expanded queries should help in finding the user across various social media platforms.
Return the expanded queries as a JSON object of the form {\"expandedQueries\": [\"...\"]}.
Do not include the original query in the expanded queries.
Limit the number of expanded queries to 10.
";

/// Query expansion backed by the Gemini `generateContent` endpoint.
pub struct GeminiExpander {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiExpander {
    pub fn new(api_key: String, model: String, api_base: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            api_base,
        }
    }

    pub fn prompt_for(query: &str) -> String {
        EXPANSION_PROMPT.replace("{query}", query)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    fn request_body(query: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(Self::prompt_for(query)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: json!({
                    "type": "OBJECT",
                    "properties": {
                        "expandedQueries": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["expandedQueries"]
                }),
            },
        }
    }
}

#[async_trait]
impl QueryExpander for GeminiExpander {
    async fn suggest(&self, query: &str) -> Result<Option<Vec<String>>, ExpansionError> {
        tracing::debug!(model = %self.model, api_base = %self.api_base, "gemini expansion request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(query))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status, "gemini api returned error");
            return Err(ExpansionError::Api { status, body });
        }

        let response: GenerateContentResponse = response.json().await?;
        parse_response(response)
    }
}

/// Pulls the suggestion list out of a Gemini response.
pub fn parse_response(
    response: GenerateContentResponse,
) -> Result<Option<Vec<String>>, ExpansionError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .filter(|text| !text.trim().is_empty())
        .ok_or(ExpansionError::MissingOutput)?;

    parse_output_text(&text)
}

/// Accepts `{"expandedQueries": [...]}` (field may be null or absent) or a
/// bare array, optionally wrapped in a markdown code fence.
pub fn parse_output_text(text: &str) -> Result<Option<Vec<String>>, ExpansionError> {
    let output: ModelOutput = serde_json::from_str(strip_code_fence(text))?;
    Ok(match output {
        ModelOutput::List(queries) => Some(queries),
        ModelOutput::Object { expanded_queries } => expanded_queries,
    })
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ModelOutput {
    List(Vec<String>),
    Object {
        #[serde(rename = "expandedQueries", default)]
        expanded_queries: Option<Vec<String>>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}
