use anyhow::{Context, Result};
use futures::StreamExt;
use reqwest::Client;
use serde::Serialize;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

const GROQ_API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Neural TTS model behind the speech endpoint.
const SPEECH_MODEL: &str = "playai-tts";

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    response_format: &'a str,
}

pub struct SpeechSynthesizer {
    client: Client,
    api_key: String,
    voice: String,
    base_url: String,
}

impl SpeechSynthesizer {
    pub fn new(api_key: String, voice: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, voice, GROQ_API_BASE_URL)
    }

    pub fn with_base_url(
        api_key: String,
        voice: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        // Synthesis streams a couple of minutes of audio, so it gets a
        // longer timeout than the small JSON calls.
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            voice: voice.into(),
            base_url: base_url.into(),
        })
    }

    /// Stream synthesized speech for `text` into `path`, returning the byte
    /// count. The clip is fully written and flushed before this returns;
    /// nothing downstream ever sees partial audio.
    pub async fn synthesize_to_file(&self, text: &str, path: &Path) -> Result<u64> {
        let request = SpeechRequest {
            model: SPEECH_MODEL,
            voice: &self.voice,
            input: text,
            response_format: "mp3",
        };

        let response = self
            .client
            .post(format!("{}/audio/speech", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .context("Failed to reach the speech API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!("Speech API returned error: {} - {}", status, error_text);
        }

        let mut file = File::create(path)
            .await
            .with_context(|| format!("Failed to create audio file {}", path.display()))?;

        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.context("Audio stream ended with an error")?;
            file.write_all(&chunk)
                .await
                .context("Failed to write audio chunk")?;
            written += chunk.len() as u64;
        }

        file.flush()
            .await
            .with_context(|| format!("Failed to flush audio file {}", path.display()))?;

        Ok(written)
    }
}
