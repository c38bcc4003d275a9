//! Granted permissions and user role, as rendered into the page by the backend.
//!
//! This only drives what the UI shows; the backend enforces the same policy.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Grant that implies every other permission (admin role).
pub const ALL_PERMISSIONS: &str = "all_permissions";
pub const DELETE_ORDERS: &str = "delete_orders";

/// A named capability.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permission(String);

impl Permission {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Permission {
    fn from(name: &str) -> Self {
        Permission::new(name)
    }
}

/// Set of permissions granted to the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Permissions {
    granted: BTreeSet<Permission>,
}

impl Permissions {
    /// Parse the `data-user-permissions` attribute.
    ///
    /// Accepts the backend's session shape as JSON (`{"view_orders": true, ...}`)
    /// or as a rendered Python dict (`{'view_orders': True, ...}`), a JSON
    /// array of names, or a comma/whitespace separated list.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }

        let granted = match serde_json::from_str::<Value>(raw) {
            Err(_) if raw.starts_with('{') => dict_entries(raw),
            Ok(Value::Object(map)) => map
                .into_iter()
                .filter(|(_, v)| is_truthy(v))
                .map(|(k, _)| Permission::new(k))
                .collect(),
            Ok(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(Permission::new)
                .collect(),
            _ => SEPARATOR
                .split(raw)
                .filter(|s| !s.is_empty())
                .map(Permission::new)
                .collect(),
        };

        Self { granted }
    }

    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            granted: names.into_iter().map(Permission::new).collect(),
        }
    }

    pub fn has(&self, permission: &str) -> bool {
        self.granted.contains(&Permission::new(ALL_PERMISSIONS))
            || self.granted.contains(&Permission::new(permission))
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.granted.iter()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "false" && s != "0",
        _ => false,
    }
}

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\s]+").expect("separator pattern is valid"));

/// `'name': value` pairs of a dict literal, quoted either way.
static DICT_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]([^'"]+)['"]\s*:\s*('[^']*'|"[^"]*"|[^,}]+)"#)
        .expect("dict entry pattern is valid")
});

/// Truthy keys of a non-JSON dict literal (Python `True`/`False`/`None`).
fn dict_entries(raw: &str) -> BTreeSet<Permission> {
    DICT_ENTRY
        .captures_iter(raw)
        .filter(|caps| is_truthy_literal(caps[2].trim()))
        .map(|caps| Permission::new(&caps[1]))
        .collect()
}

fn unquote(value: &str) -> Option<&str> {
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .or_else(|| value.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
}

fn is_truthy_literal(value: &str) -> bool {
    match value {
        "True" | "true" => true,
        "False" | "false" | "None" | "null" | "''" | "\"\"" => false,
        other => match unquote(other) {
            Some(inner) => inner != "false" && inner != "0",
            None => other.parse::<f64>().is_ok_and(|n| n != 0.0),
        },
    }
}

/// Dashboard user role (`data-user-role`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    OrderManager,
    #[default]
    User,
}

impl Role {
    /// Unknown roles fall back to a plain user.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "admin" => Role::Admin,
            "order_manager" => Role::OrderManager,
            _ => Role::User,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "مدير النظام",
            Role::OrderManager => "مدير الطلبات",
            Role::User => "مستخدم",
        }
    }

    /// Page title with the role badge appended once.
    pub fn badge_title(&self, title: &str) -> Option<String> {
        let label = self.label();
        if title.contains(label) {
            None
        } else {
            Some(format!("{title} - {label}"))
        }
    }
}
