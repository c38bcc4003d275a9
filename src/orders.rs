//! Order status vocabulary and the client-side order action policies.
//!
//! The page only shows order statuses as display text (English or Arabic,
//! whatever the backend stored). [`OrderStatus`] is the canonical form; the
//! substring matching in [`OrderStatus::classify`] is the compatibility shim
//! that maps display text onto it.

use serde::{Deserialize, Serialize};

/// Canonical order status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Completed,
}

impl OrderStatus {
    /// Terminal statuses are checked before the deletable ones.
    const CLASSIFY_ORDER: [OrderStatus; 5] = [
        OrderStatus::Delivered,
        OrderStatus::Completed,
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Completed => "completed",
        }
    }

    /// Display markers in both UI languages (lower-case).
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            OrderStatus::Pending => &["pending", "معلق"],
            OrderStatus::Confirmed => &["confirmed", "مؤكد"],
            OrderStatus::Shipped => &["shipped", "مشحون"],
            OrderStatus::Delivered => &["delivered", "تم التوصيل"],
            OrderStatus::Completed => &["completed", "مكتمل"],
        }
    }

    /// Delivered and completed orders are final from the dashboard's point of view.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Completed)
    }

    pub fn is_deletable(&self) -> bool {
        !self.is_terminal()
    }

    /// Case-insensitive substring match of any marker against display text.
    pub fn matches(&self, display: &str) -> bool {
        let lower = display.to_lowercase();
        self.markers().iter().any(|m| lower.contains(m))
    }

    /// Map display text onto a status. `None` when no marker matches.
    pub fn classify(display: &str) -> Option<OrderStatus> {
        Self::CLASSIFY_ORDER
            .into_iter()
            .find(|status| status.matches(display))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the delete policy for one order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteDecision {
    /// Delivered/completed: refused.
    Terminal(OrderStatus),
    /// No known marker: refused.
    Unknown,
    /// May be deleted after confirmation.
    Allowed(OrderStatus),
}

pub fn delete_decision(status_text: &str) -> DeleteDecision {
    match OrderStatus::classify(status_text) {
        Some(status) if status.is_terminal() => DeleteDecision::Terminal(status),
        Some(status) => DeleteDecision::Allowed(status),
        None => DeleteDecision::Unknown,
    }
}

/// Whether a row-bound status change must be refused.
pub fn status_change_locked(current_status: &str) -> bool {
    OrderStatus::Delivered.matches(current_status)
}

/// Order id as rendered in the first cell of an order row (`#1042`).
pub fn parse_order_id(cell_text: &str) -> String {
    cell_text.trim().replace('#', "")
}

/// Navigation target for deleting an order.
pub fn delete_route(order_id: &str) -> String {
    crate::api::DELETE_ORDER.replace("{id}", &urlencoding::encode(order_id))
}
