use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::models::Article;

const NEWSDATA_BASE_URL: &str = "https://newsdata.io";

/// Category and language filters matching the broadcast's beat.
const CATEGORIES: &str = "technology,science";
const LANGUAGE: &str = "en";

/// Stories kept per run; the feed is assumed relevance-ranked.
const MAX_STORIES: usize = 5;

#[derive(Debug, Deserialize)]
struct NewsResponse {
    status: String,
    /// An array of articles on success; an error object when status is "error".
    #[serde(default)]
    results: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        let description = match raw.description {
            Some(desc) if !desc.trim().is_empty() => desc,
            _ => raw.title.clone(),
        };

        Self {
            title: raw.title,
            description,
        }
    }
}

pub struct NewsdataClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsdataClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, NEWSDATA_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// Fetch today's headlines: at most five stories, feed order preserved.
    ///
    /// A degraded feed (HTTP failure or an error status in the body) is an
    /// error here; an empty result list is not, so the caller decides what an
    /// empty day means.
    pub async fn fetch_headlines(&self) -> Result<Vec<Article>> {
        let url = format!(
            "{}/api/1/news?apikey={}&category={}&language={}",
            self.base_url, self.api_key, CATEGORIES, LANGUAGE
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach the news API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!("News API returned error: {} - {}", status, error_text);
        }

        let news_response = response
            .json::<NewsResponse>()
            .await
            .context("Failed to parse news API response")?;

        if news_response.status != "success" {
            anyhow::bail!("News API reported failure: {}", news_response.results);
        }

        let raw_articles: Vec<RawArticle> = serde_json::from_value(news_response.results)
            .context("Failed to parse news API results")?;

        Ok(raw_articles
            .into_iter()
            .take(MAX_STORIES)
            .map(Article::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_used_when_present() {
        let article = Article::from(RawArticle {
            title: "Chip shortage easing".to_string(),
            description: Some("Fabs report rising yields.".to_string()),
        });

        assert_eq!(article.title, "Chip shortage easing");
        assert_eq!(article.description, "Fabs report rising yields.");
    }

    #[test]
    fn test_missing_description_falls_back_to_title() {
        let article = Article::from(RawArticle {
            title: "Probe reaches orbit".to_string(),
            description: None,
        });

        assert_eq!(article.description, "Probe reaches orbit");
    }

    #[test]
    fn test_blank_description_falls_back_to_title() {
        let article = Article::from(RawArticle {
            title: "Kernel release".to_string(),
            description: Some("   ".to_string()),
        });

        assert_eq!(article.description, "Kernel release");
    }
}
