//! Backend endpoints the dashboard calls, their payloads, and the client seam.
//!
//! The browser build talks to the backend through `fetch` ([`fetch::FetchApi`]);
//! native builds use reqwest ([`http::HttpApi`]).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(feature = "native")]
pub mod http;

// =============================================================================
// Routes
// =============================================================================

pub const UPDATE_INVENTORY: &str = "/update_inventory";
pub const UPDATE_ORDER_STATUS: &str = "/update_order_status";
pub const DELETE_ORDER: &str = "/delete_order/{id}";
pub const STATS: &str = "/api/stats";
pub const CHECK_SESSION: &str = "/api/check_session";
pub const EXTEND_SESSION: &str = "/api/extend_session";
pub const LOGOUT: &str = "/logout";

// =============================================================================
// Request Types
// =============================================================================

/// Stock adjustment for one product variant (`/update_inventory` form).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub category: String,
    pub product_id: String,
    pub color: String,
    pub size: String,
    pub quantity_change: i64,
}

impl StockUpdate {
    /// Form fields in wire order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("category", self.category.clone()),
            ("product_id", self.product_id.clone()),
            ("color", self.color.clone()),
            ("size", self.size.clone()),
            ("quantity_change", self.quantity_change.to_string()),
        ]
    }
}

/// `/update_order_status` form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub order_id: String,
    pub status: String,
}

impl StatusUpdate {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("order_id", self.order_id.clone()),
            ("status", self.status.clone()),
        ]
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// `{success, message}` returned by the mutation endpoints.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub completed_orders: u64,
    pub total_revenue: f64,
}

impl DashboardStats {
    /// Display values in stat-card order.
    pub fn positional(&self) -> [String; 4] {
        [
            self.total_orders.to_string(),
            self.pending_orders.to_string(),
            self.completed_orders.to_string(),
            self.total_revenue.to_string(),
        ]
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionCheck {
    pub valid: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtendResponse {
    pub success: bool,
}

// =============================================================================
// Client
// =============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("invalid endpoint url: {0}")]
    Url(String),
}

/// The dashboard's view of the backend.
///
/// Single-threaded: the browser event loop (and the probe's current-thread
/// runtime) drive every call.
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn update_inventory(&self, update: &StockUpdate) -> Result<ActionResponse, ApiError>;

    async fn update_order_status(&self, update: &StatusUpdate) -> Result<ActionResponse, ApiError>;

    async fn stats(&self) -> Result<DashboardStats, ApiError>;

    async fn check_session(&self) -> Result<SessionCheck, ApiError>;

    async fn extend_session(&self) -> Result<ExtendResponse, ApiError>;
}
