use std::time::Duration;

use crate::error::ImportError;

pub const DEFAULT_APP_LIST_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v2/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Added to the configured timeout for the HTTP client's own limit.
const CLIENT_TIMEOUT_MARGIN: Duration = Duration::from_secs(5);

/// Where the remote feeds live and how long to wait for them.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub app_list_url: String,
    /// No completion-time feed is fetched without one.
    pub completion_times_url: Option<String>,
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            app_list_url: DEFAULT_APP_LIST_URL.to_string(),
            completion_times_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client shared by the feed adapters.
pub struct FeedClient {
    http: reqwest::Client,
    config: FeedConfig,
}

impl FeedClient {
    pub fn new(config: FeedConfig) -> Result<Self, ImportError> {
        // Backstop only; the outer bound in `fetch_text` fires first.
        let http = reqwest::Client::builder()
            .timeout(config.timeout + CLIENT_TIMEOUT_MARGIN)
            .user_agent(concat!("appshelf/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http(http, config))
    }

    pub(crate) fn with_http(http: reqwest::Client, config: FeedConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetch the public title list payload.
    pub async fn fetch_app_list(&self) -> Result<String, ImportError> {
        self.fetch_text("public list", &self.config.app_list_url).await
    }

    /// Fetch the completion-time table.
    pub async fn fetch_completion_times(&self) -> Result<String, ImportError> {
        let url = self.config.completion_times_url.as_deref().ok_or_else(|| {
            ImportError::source_unavailable("no completion-time feed URL configured")
        })?;
        self.fetch_text("completion times", url).await
    }

    /// GET `url` as text, bounded by the configured timeout end to end.
    async fn fetch_text(&self, source_name: &str, url: &str) -> Result<String, ImportError> {
        log::info!("Downloading {source_name} from {url}");
        let text = tokio::time::timeout(self.config.timeout, self.get_text(source_name, url))
            .await
            .map_err(|_| ImportError::Timeout {
                source_name: source_name.to_string(),
                seconds: self.config.timeout.as_secs(),
            })??;
        log::info!("Downloaded {source_name} ({} bytes)", text.len());
        Ok(text)
    }

    async fn get_text(&self, source_name: &str, url: &str) -> Result<String, ImportError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ImportError::source_unavailable(format!(
                "{source_name} returned HTTP {status}"
            )));
        }
        Ok(resp.text().await?)
    }
}
