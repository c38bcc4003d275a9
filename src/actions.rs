//! Typed dispatch table for `data-action` controls.
//!
//! Host glue resolves the clicked element to an [`ActionName`] (from its
//! `data-action` attribute, or a legacy class), then builds an [`Action`]
//! from the element's data attributes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::api::StockUpdate;
use crate::orders::parse_order_id;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("{action}: missing attribute {attribute}")]
    MissingAttribute {
        action: ActionName,
        attribute: &'static str,
    },
    #[error("{action}: invalid {attribute} value {value:?}")]
    InvalidAttribute {
        action: ActionName,
        attribute: &'static str,
        value: String,
    },
}

/// What host glue should do with the triggering event afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Proceed,
    /// Prevent the default behavior (link follow, form submission).
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionName {
    AddVariant,
    RemoveVariant,
    UpdateStock,
    UpdateStatus,
    SetOrderStatus,
    DeleteOrder,
    FilterProducts,
    ToggleMenu,
    ExtendSession,
    Logout,
}

impl ActionName {
    pub const ALL: [ActionName; 10] = [
        ActionName::AddVariant,
        ActionName::RemoveVariant,
        ActionName::UpdateStock,
        ActionName::UpdateStatus,
        ActionName::SetOrderStatus,
        ActionName::DeleteOrder,
        ActionName::FilterProducts,
        ActionName::ToggleMenu,
        ActionName::ExtendSession,
        ActionName::Logout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionName::AddVariant => "add-variant",
            ActionName::RemoveVariant => "remove-variant",
            ActionName::UpdateStock => "update-stock",
            ActionName::UpdateStatus => "update-status",
            ActionName::SetOrderStatus => "set-order-status",
            ActionName::DeleteOrder => "delete-order",
            ActionName::FilterProducts => "filter-products",
            ActionName::ToggleMenu => "toggle-menu",
            ActionName::ExtendSession => "extend-session",
            ActionName::Logout => "logout",
        }
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionName {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ActionName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ActionError::UnknownAction(s.to_string()))
    }
}

/// Markup classes that predate `data-action` and still trigger actions.
pub const LEGACY_CLASSES: [(&str, ActionName); 2] = [
    ("update-status", ActionName::UpdateStatus),
    ("delete-order", ActionName::DeleteOrder),
];

/// Resolve the action an element triggers, if any.
///
/// `data-action` wins over legacy classes; an unrecognised `data-action`
/// is an error rather than a fall-through.
pub fn resolve_name(
    data_action: Option<&str>,
    has_class: impl Fn(&str) -> bool,
) -> Result<Option<ActionName>, ActionError> {
    if let Some(name) = data_action {
        return name.parse().map(Some);
    }
    Ok(LEGACY_CLASSES
        .iter()
        .find(|(class, _)| has_class(class))
        .map(|(_, name)| *name))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddVariant,
    RemoveVariant {
        id: u32,
    },
    UpdateStock(StockUpdate),
    /// Row-bound status change, guarded by the row's current status.
    UpdateStatus {
        order_id: String,
        status: String,
        current_status: String,
    },
    /// Status change without the row guard.
    SetOrderStatus {
        order_id: String,
        status: String,
    },
    DeleteOrder {
        order_id: String,
        status_text: String,
    },
    FilterProducts,
    ToggleMenu,
    ExtendSession,
    Logout,
}

impl Action {
    /// Build an action from an element's `data-*` attributes.
    ///
    /// `attr` receives the attribute name without the `data-` prefix
    /// (`"order-id"`, `"status"`, ...).
    pub fn from_attributes(
        name: ActionName,
        attr: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ActionError> {
        let required = |attribute: &'static str| {
            attr(attribute).ok_or(ActionError::MissingAttribute {
                action: name,
                attribute,
            })
        };

        let action = match name {
            ActionName::AddVariant => Action::AddVariant,
            ActionName::RemoveVariant => {
                let raw = required("variant-id")?;
                let id = raw.trim().parse().map_err(|_| ActionError::InvalidAttribute {
                    action: name,
                    attribute: "variant-id",
                    value: raw.clone(),
                })?;
                Action::RemoveVariant { id }
            }
            ActionName::UpdateStock => {
                let raw = required("change")?;
                let quantity_change =
                    raw.trim().parse().map_err(|_| ActionError::InvalidAttribute {
                        action: name,
                        attribute: "change",
                        value: raw.clone(),
                    })?;
                Action::UpdateStock(StockUpdate {
                    category: required("category")?,
                    product_id: required("product-id")?,
                    color: required("color")?,
                    size: required("size")?,
                    quantity_change,
                })
            }
            ActionName::UpdateStatus => Action::UpdateStatus {
                order_id: parse_order_id(&required("order-id")?),
                status: required("status")?,
                current_status: required("current-status")?.trim().to_string(),
            },
            ActionName::SetOrderStatus => Action::SetOrderStatus {
                order_id: parse_order_id(&required("order-id")?),
                status: required("status")?,
            },
            ActionName::DeleteOrder => Action::DeleteOrder {
                order_id: required("order-id")?,
                // An absent status is classified like any unknown one.
                status_text: attr("order-status").unwrap_or_default(),
            },
            ActionName::FilterProducts => Action::FilterProducts,
            ActionName::ToggleMenu => Action::ToggleMenu,
            ActionName::ExtendSession => Action::ExtendSession,
            ActionName::Logout => Action::Logout,
        };
        Ok(action)
    }

    /// Search runs on input events, which must keep their default.
    pub fn default_flow(&self) -> Flow {
        match self {
            Action::FilterProducts => Flow::Proceed,
            _ => Flow::Cancel,
        }
    }

    pub fn name(&self) -> ActionName {
        match self {
            Action::AddVariant => ActionName::AddVariant,
            Action::RemoveVariant { .. } => ActionName::RemoveVariant,
            Action::UpdateStock(_) => ActionName::UpdateStock,
            Action::UpdateStatus { .. } => ActionName::UpdateStatus,
            Action::SetOrderStatus { .. } => ActionName::SetOrderStatus,
            Action::DeleteOrder { .. } => ActionName::DeleteOrder,
            Action::FilterProducts => ActionName::FilterProducts,
            Action::ToggleMenu => ActionName::ToggleMenu,
            Action::ExtendSession => ActionName::ExtendSession,
            Action::Logout => ActionName::Logout,
        }
    }
}
