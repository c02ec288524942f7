use anyhow::{Context, Result};
use reqwest::Client;

pub struct SupabaseStorage {
    client: Client,
    base_url: String,
    service_key: String,
}

impl SupabaseStorage {
    pub fn new(base_url: impl Into<String>, service_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            service_key,
        })
    }

    /// Upload one object into the bucket. With `upsert` an existing object at
    /// the same path is overwritten; readers see the old object or the new
    /// one, never a partial write (the store's guarantee, not ours).
    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        payload: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<()> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url.trim_end_matches('/'),
            bucket,
            path
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("Content-Type", content_type)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(payload)
            .send()
            .await
            .with_context(|| format!("Failed to reach the storage API for {}", path))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!(
                "Storage API returned error for {}: {} - {}",
                path,
                status,
                error_text
            );
        }

        Ok(())
    }
}
