use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::models::Article;

const GROQ_API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Fixed on-air persona. The opening and closing lines are part of the
/// station's identity and must survive any model swap.
const SYSTEM_PROMPT: &str = "You are the voice of NewsKernal, a futuristic tech news station. \
    Summarize these 5 stories into a tightly packed 120-second briefing. \
    Style: Professional, fast-paced, insightful. \
    Start with: 'This is NewsKernal. Here is your daily download.' \
    End with: 'System update complete. This was NewsKernal.' \
    Do not use emojis or markdown formatting.";

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

pub struct GroqScriptwriter {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqScriptwriter {
    pub fn new(api_key: String, model: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, model, GROQ_API_BASE_URL)
    }

    pub fn with_base_url(
        api_key: String,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
            base_url: base_url.into(),
        })
    }

    /// Turn the day's articles into one spoken-style briefing script.
    ///
    /// The first completion choice is taken verbatim; an empty completion is
    /// an error so a silent briefing is never synthesized.
    pub async fn write_script(&self, articles: &[Article]) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: briefing_prompt(articles),
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .context("Failed to send request to the chat API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!("Chat API returned error: {} - {}", status, error_text);
        }

        let chat_response = response
            .json::<ChatResponse>()
            .await
            .context("Failed to parse chat API response")?;

        let script = chat_response
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .unwrap_or("");

        if script.trim().is_empty() {
            anyhow::bail!("The model returned an empty script");
        }

        Ok(script.to_string())
    }
}

/// Render the articles for the model: one block per story, in fetch order,
/// exactly one blank line between blocks.
fn briefing_prompt(articles: &[Article]) -> String {
    articles
        .iter()
        .map(|article| format!("Headline: {}\nSummary: {}", article.title, article.description))
        .collect::<Vec<_>>()
        .join("\n\n")
}
