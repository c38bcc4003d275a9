//! Recording backend for driving the dashboard without a server.
//!
//! Every call is recorded; replies are canned per endpoint. An endpoint
//! without a canned reply fails like a dropped connection.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use store_dashboard::api::{
    ActionResponse, ApiError, DashboardApi, DashboardStats, ExtendResponse, SessionCheck,
    StatusUpdate, StockUpdate,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    UpdateInventory(StockUpdate),
    UpdateOrderStatus(StatusUpdate),
    Stats,
    CheckSession,
    ExtendSession,
}

#[derive(Default)]
pub struct MockApi {
    calls: RefCell<Vec<Call>>,
    action: RefCell<Option<ActionResponse>>,
    stats: RefCell<Option<DashboardStats>>,
    session_valid: Cell<Option<bool>>,
    extend_success: Cell<Option<bool>>,
}

fn offline() -> ApiError {
    ApiError::Transport("connection refused".into())
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply for both mutation endpoints.
    pub fn answering(self, success: bool, message: &str) -> Self {
        *self.action.borrow_mut() = Some(ActionResponse {
            success,
            message: message.to_string(),
        });
        self
    }

    pub fn with_stats(self, stats: DashboardStats) -> Self {
        *self.stats.borrow_mut() = Some(stats);
        self
    }

    pub fn with_session(self, valid: bool) -> Self {
        self.session_valid.set(Some(valid));
        self
    }

    pub fn with_extend(self, success: bool) -> Self {
        self.extend_success.set(Some(success));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl DashboardApi for MockApi {
    async fn update_inventory(&self, update: &StockUpdate) -> Result<ActionResponse, ApiError> {
        self.record(Call::UpdateInventory(update.clone()));
        self.action.borrow().clone().ok_or_else(offline)
    }

    async fn update_order_status(&self, update: &StatusUpdate) -> Result<ActionResponse, ApiError> {
        self.record(Call::UpdateOrderStatus(update.clone()));
        self.action.borrow().clone().ok_or_else(offline)
    }

    async fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.record(Call::Stats);
        self.stats.borrow().clone().ok_or_else(offline)
    }

    async fn check_session(&self) -> Result<SessionCheck, ApiError> {
        self.record(Call::CheckSession);
        self.session_valid
            .get()
            .map(|valid| SessionCheck { valid })
            .ok_or_else(offline)
    }

    async fn extend_session(&self) -> Result<ExtendResponse, ApiError> {
        self.record(Call::ExtendSession);
        self.extend_success
            .get()
            .map(|success| ExtendResponse { success })
            .ok_or_else(offline)
    }
}
