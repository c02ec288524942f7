use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;

use crate::models::BriefingMetadata;
use crate::newsdata::NewsdataClient;
use crate::scriptwriter::GroqScriptwriter;
use crate::speech::SpeechSynthesizer;
use crate::storage::SupabaseStorage;

/// Fixed object paths the player polls; every run overwrites both.
pub const AUDIO_OBJECT_PATH: &str = "public/latest_brief.mp3";
pub const METADATA_OBJECT_PATH: &str = "public/latest_data.json";

/// One full broadcast run: fetch, script, voice, publish.
///
/// Stages run strictly in order and any failure aborts the run. The audio is
/// uploaded before the metadata, so a consumer that sees a fresh `date` in
/// the metadata will also find fresh audio already in place. There is no
/// resumption: a failed run leaves whatever the previous run published, and
/// the next scheduled run starts over from the top.
pub async fn run(
    news: &NewsdataClient,
    scriptwriter: &GroqScriptwriter,
    synthesizer: &SpeechSynthesizer,
    storage: &SupabaseStorage,
    bucket: &str,
    audio_file: &Path,
) -> Result<()> {
    println!("🚀 NewsKernal engine starting... Target bucket: '{}'", bucket);

    println!("📰 Fetching world news...");
    let articles = news
        .fetch_headlines()
        .await
        .context("Failed to fetch headlines")?;

    if articles.is_empty() {
        anyhow::bail!("No news found. Aborting instead of publishing an empty briefing.");
    }

    println!("✅ Found {} stories.", articles.len());

    println!("🧠 NewsKernal AI is writing the script...");
    let script = scriptwriter
        .write_script(&articles)
        .await
        .context("Failed to write the briefing script")?;

    println!("🎙️ Synthesizing voice...");
    let audio_bytes = synthesizer
        .synthesize_to_file(&script, audio_file)
        .await
        .context("Failed to synthesize the briefing audio")?;
    println!(
        "✓ Saved {} bytes of audio to {}",
        audio_bytes,
        audio_file.display()
    );

    println!("☁️ Uploading MP3 to {}...", bucket);
    let audio = tokio::fs::read(audio_file)
        .await
        .with_context(|| format!("Failed to read audio file {}", audio_file.display()))?;
    storage
        .upload(bucket, AUDIO_OBJECT_PATH, audio, "audio/mpeg", true)
        .await
        .context("Failed to upload the briefing audio")?;

    println!("☁️ Uploading metadata to {}...", bucket);
    let metadata = BriefingMetadata::new(script, Local::now());
    let payload =
        serde_json::to_vec(&metadata).context("Failed to serialize briefing metadata")?;
    storage
        .upload(bucket, METADATA_OBJECT_PATH, payload, "application/json", true)
        .await
        .context("Failed to upload the briefing metadata")?;

    println!("✅ NewsKernal broadcast is live.");

    Ok(())
}
