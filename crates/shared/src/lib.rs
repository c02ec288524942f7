// Public modules
pub mod config;
pub mod models;
pub mod newsdata;
pub mod pipeline;
pub mod scriptwriter;
pub mod speech;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use models::{Article, BriefingMetadata};
pub use newsdata::NewsdataClient;
pub use scriptwriter::GroqScriptwriter;
pub use speech::SpeechSynthesizer;
pub use storage::SupabaseStorage;
