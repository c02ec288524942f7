use anyhow::{Context, Result};
use std::env;

/// The four secrets every run needs, read once at startup and never logged.
#[derive(Debug, Clone)]
pub struct Config {
    pub newsdata_api_key: String,
    pub groq_api_key: String,
    pub supabase_url: String,
    pub supabase_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        Self::from_lookup(&|name| env::var(name).ok())
    }

    /// Build the config from any variable source; tests substitute a map so
    /// the missing-secret path is checked without touching process env.
    fn from_lookup(get: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| {
            get(name).with_context(|| {
                format!(
                    "{} not found. Set it as an environment variable or add it to ~/.config/newskernal/.env",
                    name
                )
            })
        };

        Ok(Self {
            newsdata_api_key: var("NEWSDATA_API_KEY")?,
            groq_api_key: var("GROQ_API_KEY")?,
            supabase_url: var("SUPABASE_URL")?,
            supabase_key: var("SUPABASE_KEY")?,
        })
    }

    fn try_load_dotenv() {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/newskernal/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("newskernal").join(".env");
            if config_path.exists() && dotenvy::from_path(&config_path).is_ok() {
                return;
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                let _ = dotenvy::from_path(&home_path);
            }
        }

        // If none found, that's okay - environment variables might be set system-wide
    }
}
