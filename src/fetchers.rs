use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::config::HomeConfig;
use crate::error::HomeError;
use crate::model::Recipe;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeHome/1.0)";

/// Where the home page gets its recipe collection from
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Read the full recipe collection in one request
    async fn fetch_all(&self) -> Result<Vec<Recipe>, HomeError>;
}

/// Fetches the recipe list with a single HTTP GET.
pub struct RequestFetcher {
    client: Client,
    url: String,
}

impl RequestFetcher {
    /// Create a fetcher for `url`. Without a timeout a hung request waits forever.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, HomeError> {
        Self::with_user_agent(url, timeout, DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(
        url: impl Into<String>,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, HomeError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn from_config(config: &HomeConfig) -> Result<Self, HomeError> {
        Self::with_user_agent(&config.api_url, config.timeout(), &config.user_agent)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecipeSource for RequestFetcher {
    async fn fetch_all(&self) -> Result<Vec<Recipe>, HomeError> {
        debug!("Fetching recipes from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HomeError::HttpStatus(status.as_u16(), body));
        }

        let body = response.text().await?;
        let recipes: Vec<Recipe> = serde_json::from_str(&body)?;
        debug!("Fetched {} recipes", recipes.len());
        Ok(recipes)
    }
}
