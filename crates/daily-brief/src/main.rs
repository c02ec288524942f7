use anyhow::Result;
use clap::Parser;
use shared::{Config, GroqScriptwriter, NewsdataClient, SpeechSynthesizer, SupabaseStorage};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daily-brief")]
#[command(about = "Generate today's NewsKernal audio briefing and publish it to storage")]
struct Args {
    /// Storage bucket that serves the published briefing
    #[arg(short, long, default_value = "NewsKernal")]
    bucket: String,

    /// Chat model that writes the briefing script
    #[arg(short, long, default_value = "llama-3.1-8b-instant")]
    model: String,

    /// Voice used for speech synthesis
    #[arg(short, long, default_value = "Fritz-PlayAI")]
    voice: String,

    /// Local path for the synthesized audio before upload
    #[arg(short, long, default_value = "brief_today.mp3")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Secrets are checked before any client exists; a missing one fails the
    // run here, without a single network call.
    let config = Config::from_env()?;

    let news = NewsdataClient::new(config.newsdata_api_key)?;
    let scriptwriter = GroqScriptwriter::new(config.groq_api_key.clone(), args.model)?;
    let synthesizer = SpeechSynthesizer::new(config.groq_api_key, args.voice)?;
    let storage = SupabaseStorage::new(config.supabase_url, config.supabase_key)?;

    shared::pipeline::run(
        &news,
        &scriptwriter,
        &synthesizer,
        &storage,
        &args.bucket,
        &args.output,
    )
    .await
}
