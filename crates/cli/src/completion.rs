//! Groq chat-completion client for the opt-in `generate --refine` pass.
//!
//! The refine pass sends a fully rendered agreement to the Groq
//! OpenAI-compatible chat completions API for a wording pass, then feeds
//! the edited text back through the same delimiter parser — a refined
//! document is held to the same eleven-block validation as a rendered one.
//! Nothing else calls out to a model; the HTTP API never does.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Groq OpenAI-compatible chat completions endpoint.
const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Low sampling temperature keeps the edit close to deterministic.
const TEMPERATURE: f32 = 0.2;

/// Completion cap per request.
const MAX_TOKENS: u32 = 1024;

/// Configuration for the completion client.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Groq API key.
    pub api_key: String,
    /// Model identifier (defaults to llama3-70b-8192).
    pub model: String,
}

impl CompletionConfig {
    /// Create a config with the given API key and the default model.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a config with the given API key and model.
    pub fn with_model(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }

    /// Read the API key from the `GROQ_API_KEY` environment variable,
    /// overriding the default model when one is given.
    pub fn from_env(model: Option<&str>) -> Result<Self, CompletionError> {
        let api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(CompletionError::MissingApiKey)?;
        Ok(match model {
            Some(model) => Self::with_model(api_key, model.to_string()),
            None => Self::new(api_key),
        })
    }
}

/// Error type for completion calls.
#[derive(Debug)]
pub enum CompletionError {
    /// GROQ_API_KEY is not set.
    MissingApiKey,
    /// The API call failed (network, auth, rate limit).
    Api(String),
    /// The response could not be parsed.
    Parse(String),
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::MissingApiKey => {
                write!(f, "GROQ_API_KEY environment variable is not set")
            }
            CompletionError::Api(msg) => write!(f, "API error: {}", msg),
            CompletionError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for CompletionError {}

// ── Prompt construction ──────────────────────────────────────────────

/// Build the refine prompt. The rules pin down everything the parser and
/// templates depend on: marker lines, bracketed placeholders, and the
/// extracted values themselves.
pub fn build_refine_prompt(document: &str) -> String {
    format!(
        "You are a commercial contracts editor. Refine the wording of the vendor supply \
         agreement below for clarity and formality.\n\
         \n\
         Rules:\n\
         - Keep every [<NAME> BLOCK START] and [<NAME> BLOCK END] marker line exactly as it is.\n\
         - Keep every bracketed placeholder such as [BUYER ADDRESS] unchanged.\n\
         - Keep all numbers, dates, amounts, and party names unchanged.\n\
         - Return only the agreement text. No explanation, no markdown, no code fences.\n\
         \n\
         {}",
        document
    )
}

// ── Request / Response types ─────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// ── API call ─────────────────────────────────────────────────────────

/// Make a synchronous call to the Groq chat completions API. Returns the
/// trimmed text of the first choice.
pub fn complete(config: &CompletionConfig, prompt: &str) -> Result<String, CompletionError> {
    let request_body = ChatRequest {
        model: config.model.clone(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    };

    let agent = ureq::Agent::new_with_defaults();
    let response = agent
        .post(GROQ_API_URL)
        .header("authorization", &format!("Bearer {}", config.api_key))
        .header("content-type", "application/json")
        .send_json(&request_body)
        .map_err(|e| CompletionError::Api(format!("API request failed: {}", e)))?;

    let resp: ChatResponse = response
        .into_body()
        .read_json()
        .map_err(|e| CompletionError::Parse(format!("failed to parse API response: {}", e)))?;

    resp.choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            CompletionError::Parse("API response contained no completion text".to_string())
        })
}

/// Strip markdown code fences (```text ... ```) from a model response.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if text.starts_with("```") {
        // Skip the opening fence line (``` or ```text)
        let after_open = if let Some(nl) = text.find('\n') {
            &text[nl + 1..]
        } else {
            return text;
        };
        if let Some(close) = after_open.rfind("```") {
            return after_open[..close].trim();
        }
        return after_open.trim();
    }
    text
}
