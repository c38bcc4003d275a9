//! Browser `fetch` client for the dashboard endpoints (wasm32 only).
//!
//! Same-origin relative URLs; the session cookie rides along by default.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use super::{
    ActionResponse, ApiError, DashboardApi, DashboardStats, ExtendResponse, SessionCheck,
    StatusUpdate, StockUpdate, CHECK_SESSION, EXTEND_SESSION, STATS, UPDATE_INVENTORY,
    UPDATE_ORDER_STATUS,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchApi;

impl FetchApi {
    pub fn new() -> Self {
        Self
    }
}

fn transport(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}

/// Send a request and decode its JSON body.
async fn send_json<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Transport("No window".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("Not a Response".into()))?;

    let json = JsFuture::from(resp.json().map_err(|e| ApiError::Decode(format!("{:?}", e)))?)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    tracing::debug!("GET {}", url);
    send_json(request).await
}

/// POST a multipart form, as a `<form>` submission would.
async fn post_form<T: DeserializeOwned>(
    url: &str,
    fields: &[(&'static str, String)],
) -> Result<T, ApiError> {
    let form = FormData::new().map_err(transport)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(transport)?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    tracing::debug!("POST {}", url);
    send_json(request).await
}

#[async_trait(?Send)]
impl DashboardApi for FetchApi {
    async fn update_inventory(&self, update: &StockUpdate) -> Result<ActionResponse, ApiError> {
        post_form(UPDATE_INVENTORY, &update.form_fields()).await
    }

    async fn update_order_status(&self, update: &StatusUpdate) -> Result<ActionResponse, ApiError> {
        post_form(UPDATE_ORDER_STATUS, &update.form_fields()).await
    }

    async fn stats(&self) -> Result<DashboardStats, ApiError> {
        get_json(STATS).await
    }

    async fn check_session(&self) -> Result<SessionCheck, ApiError> {
        get_json(CHECK_SESSION).await
    }

    async fn extend_session(&self) -> Result<ExtendResponse, ApiError> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        let request = Request::new_with_str_and_init(EXTEND_SESSION, &opts).map_err(transport)?;
        tracing::debug!("POST {}", EXTEND_SESSION);
        send_json(request).await
    }
}
