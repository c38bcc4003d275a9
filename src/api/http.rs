//! reqwest client for the dashboard endpoints (native builds).

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use serde::de::DeserializeOwned;
use url::Url;

use super::{
    ActionResponse, ApiError, DashboardApi, DashboardStats, ExtendResponse, SessionCheck,
    StatusUpdate, StockUpdate, CHECK_SESSION, EXTEND_SESSION, STATS, UPDATE_INVENTORY,
    UPDATE_ORDER_STATUS,
};
use crate::config::DashboardConfig;

pub struct HttpApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpApi {
    pub fn new(base_url: &str, session_cookie: Option<&str>) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::Url(e.to_string()))?;

        let mut headers = HeaderMap::new();
        if let Some(cookie) = session_cookie {
            let value =
                HeaderValue::from_str(cookie).map_err(|e| ApiError::Transport(e.to_string()))?;
            headers.insert(COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self { client, base })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, config.session_cookie.as_deref())
    }

    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(|e| ApiError::Url(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path)?;
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }
}

/// The backend answers JSON whatever the status code; anything that is not
/// JSON (a login redirect page, a proxy error) is a decode failure.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(100).collect();
        tracing::debug!("Non-JSON response ({}): {}", status, preview);
        ApiError::Decode(e.to_string())
    })
}

#[async_trait(?Send)]
impl DashboardApi for HttpApi {
    async fn update_inventory(&self, update: &StockUpdate) -> Result<ActionResponse, ApiError> {
        self.post_form(UPDATE_INVENTORY, &update.form_fields()).await
    }

    async fn update_order_status(&self, update: &StatusUpdate) -> Result<ActionResponse, ApiError> {
        self.post_form(UPDATE_ORDER_STATUS, &update.form_fields()).await
    }

    async fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json(STATS).await
    }

    async fn check_session(&self) -> Result<SessionCheck, ApiError> {
        self.get_json(CHECK_SESSION).await
    }

    async fn extend_session(&self) -> Result<ExtendResponse, ApiError> {
        self.post_form(EXTEND_SESSION, &[]).await
    }
}
