//! The dashboard controller.
//!
//! [`Dashboard`] owns all client-side state (variant counter, session flags,
//! parsed permissions) and drives a [`Page`] and a [`DashboardApi`]. Host glue
//! (the wasm entry point or the native probe) calls into it from event
//! listeners and timers.
//!
//! Everything runs on one thread. State sits in `RefCell`s and no borrow is
//! held across an `.await`.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use chrono::NaiveDateTime;

use crate::actions::{Action, Flow};
use crate::api::{self, ActionResponse, ApiError, DashboardApi, StatusUpdate, StockUpdate};
use crate::chrome;
use crate::clock;
use crate::config::DashboardConfig;
use crate::fragments::{self, SESSION_MODAL_ID};
use crate::messages;
use crate::orders::{self, DeleteDecision};
use crate::page::{Page, ToastKind};
use crate::permissions::{Permissions, Role, DELETE_ORDERS};
use crate::search;
use crate::session::SessionController;
use crate::variants::{row_dom_id, VariantEditor};

pub struct Dashboard {
    page: Rc<dyn Page>,
    api: Rc<dyn DashboardApi>,
    config: DashboardConfig,
    variants: RefCell<VariantEditor>,
    session: RefCell<SessionController>,
    permissions: RefCell<Permissions>,
    /// Orders whose delete navigation has been issued.
    pending_deletes: RefCell<HashSet<String>>,
}

impl Dashboard {
    pub fn new(page: Rc<dyn Page>, api: Rc<dyn DashboardApi>, config: DashboardConfig) -> Self {
        let session = SessionController::new(config.inactivity_warning_minutes);
        Self {
            page,
            api,
            config,
            variants: RefCell::new(VariantEditor::new()),
            session: RefCell::new(session),
            permissions: RefCell::new(Permissions::default()),
            pending_deletes: RefCell::new(HashSet::new()),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn session(&self) -> SessionController {
        self.session.borrow().clone()
    }

    pub fn variants_added(&self) -> u32 {
        self.variants.borrow().added()
    }

    /// One-shot page setup, run once the document is ready.
    pub fn init(&self) {
        tracing::info!("Initializing dashboard");

        self.tick_clock();

        self.page.install_menu_toggle(&fragments::menu_toggle());
        self.check_screen_size();

        if self.page.has_variant_container() {
            self.add_variant();
        }

        self.init_search();
        self.apply_permission_controls();
        self.apply_role_badge();
    }

    // =========================================================================
    // Clock & chrome
    // =========================================================================

    pub fn tick_clock(&self) {
        self.page.set_clock_text(&clock::now_text());
    }

    pub fn render_clock(&self, at: &NaiveDateTime) {
        self.page.set_clock_text(&clock::format_clock(at));
    }

    pub fn check_screen_size(&self) {
        let layout = chrome::layout_for(self.page.viewport_width(), self.config.mobile_breakpoint_px);
        self.page.set_menu_toggle_visible(layout.toggle_visible);
        if layout.retract_sidebar {
            self.page.set_sidebar_active(false);
        }
    }

    pub fn toggle_menu(&self) {
        let active = self.page.sidebar_active();
        self.page.set_sidebar_active(!active);
    }

    /// `data_url` is the chosen file read as a data URL; `None` when the
    /// selection was cleared.
    pub fn preview_image(&self, data_url: Option<&str>) {
        if let Some(src) = data_url {
            self.page.show_image_preview(src);
        }
    }

    // =========================================================================
    // Variant editor
    // =========================================================================

    /// Append a variant row. Returns the new row's id, or `None` when the
    /// page has no variant form.
    pub fn add_variant(&self) -> Option<u32> {
        if !self.page.has_variant_container() {
            return None;
        }
        let (id, added) = {
            let mut variants = self.variants.borrow_mut();
            let id = variants.allocate();
            (id, variants.added())
        };
        self.page
            .append_variant_row(&row_dom_id(id), &fragments::variant_row(id));
        self.page.set_variant_count(added);
        tracing::debug!("Added variant row {}", id);
        Some(id)
    }

    pub fn remove_variant(&self, id: u32) -> bool {
        self.page.remove_variant_row(&row_dom_id(id))
    }

    // =========================================================================
    // Inventory & orders
    // =========================================================================

    pub async fn update_stock(&self, update: StockUpdate) {
        tracing::debug!(
            "Stock update {}/{} {} {}: {:+}",
            update.category,
            update.product_id,
            update.color,
            update.size,
            update.quantity_change
        );
        let result = self.api.update_inventory(&update).await;
        self.report(result, messages::STOCK_ERROR_PREFIX);
    }

    /// Change an order's status after confirmation.
    ///
    /// `current_status` is the row's displayed status for row-bound controls;
    /// a delivered order is refused without a request. `None` skips the guard.
    pub async fn change_order_status(
        &self,
        order_id: &str,
        status: &str,
        current_status: Option<&str>,
    ) {
        if current_status.is_some_and(orders::status_change_locked) {
            self.page.alert(messages::DELIVERED_IS_FINAL);
            return;
        }
        if !self.page.confirm(messages::CONFIRM_STATUS_CHANGE) {
            return;
        }

        let update = StatusUpdate {
            order_id: order_id.to_string(),
            status: status.to_string(),
        };
        let result = self.api.update_order_status(&update).await;
        self.report(result, messages::ORDER_ERROR_PREFIX);
    }

    /// Status change from controls outside an order row: no delivered guard.
    pub async fn update_order_status_global(&self, order_id: &str, status: &str) {
        self.change_order_status(order_id, status, None).await
    }

    /// Delete an order by navigating to its delete route. Returns true when
    /// the navigation was issued.
    pub fn delete_order(&self, order_id: &str, status_text: &str) -> bool {
        if self.pending_deletes.borrow().contains(order_id) {
            tracing::debug!("Delete of order {} already in progress", order_id);
            return false;
        }

        match orders::delete_decision(status_text) {
            DeleteDecision::Terminal(status) => {
                tracing::debug!("Refusing to delete order {} ({})", order_id, status);
                self.page
                    .alert(&messages::delete_refused_terminal(order_id, status_text));
                false
            }
            DeleteDecision::Unknown => {
                tracing::debug!("Refusing to delete order {}: unknown status", order_id);
                self.page
                    .alert(&messages::delete_refused_unknown(order_id, status_text));
                false
            }
            DeleteDecision::Allowed(_) => {
                if !self.page.confirm(&messages::confirm_delete(order_id)) {
                    return false;
                }
                // Only a navigation that actually started locks the order.
                if !self.page.navigate(&orders::delete_route(order_id)) {
                    return false;
                }
                self.pending_deletes
                    .borrow_mut()
                    .insert(order_id.to_string());
                self.page
                    .mark_order_deleting(order_id, &fragments::deleting_label());
                true
            }
        }
    }

    /// Alert the outcome of a mutation; reload on success.
    fn report(&self, result: Result<ActionResponse, ApiError>, error_prefix: &str) {
        match result {
            Ok(response) if response.success => {
                self.page.alert(&response.message);
                self.page.reload();
            }
            Ok(response) => {
                self.page
                    .alert(&format!("{}{}", error_prefix, response.message));
            }
            Err(e) => {
                tracing::warn!("Request failed: {}", e);
                self.page.alert(messages::CONNECTION_ERROR);
            }
        }
    }

    // =========================================================================
    // Stats
    // =========================================================================

    pub async fn refresh_stats(&self) {
        let stats = match self.api.stats().await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!("Stats refresh failed: {}", e);
                return;
            }
        };

        let slots = self.page.stat_slot_count();
        for (index, value) in stats.positional().iter().enumerate().take(slots) {
            self.page.set_stat_slot(index, value);
        }
        tracing::debug!(
            "Stats: {} orders, {} pending, {} completed, revenue {}",
            stats.total_orders,
            stats.pending_orders,
            stats.completed_orders,
            stats.total_revenue
        );
    }

    // =========================================================================
    // Product search
    // =========================================================================

    pub fn filter_products(&self) {
        let Some(raw) = self.page.search_input() else {
            return;
        };
        let term = search::normalize_term(&raw);
        let products = self.page.product_nodes();
        let categories = self.page.category_sections();
        let outcome = search::filter(&term, &products, &categories);

        self.page.apply_filter(&outcome);

        self.page.set_search_stats(&search::stats_text(
            &raw,
            outcome.visible_products,
            outcome.visible_categories,
        ));
        self.page.set_no_results_visible(outcome.show_no_results);
        self.page
            .set_products_container_visible(!outcome.show_no_results);
    }

    pub fn init_search(&self) {
        let Some(raw) = self.page.search_input() else {
            return;
        };
        self.page.focus_search();
        let (products, categories) = search::initial_counts(
            &self.page.product_nodes(),
            &self.page.category_sections(),
        );
        self.page
            .set_search_stats(&search::stats_text(&raw, products, categories));
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    pub async fn poll_session(&self) {
        match self.api.check_session().await {
            Ok(check) if !check.valid => {
                tracing::info!("Session reported invalid");
                self.raise_session_warning();
            }
            Ok(_) => tracing::debug!("Session valid"),
            Err(e) => tracing::error!("Session check failed: {}", e),
        }
    }

    pub fn note_activity(&self) {
        self.session.borrow_mut().note_activity();
    }

    /// One inactivity minute elapsed.
    pub fn inactivity_tick(&self) {
        let due = self.session.borrow_mut().tick();
        if due {
            tracing::info!(
                "Inactive for {} minutes",
                self.config.inactivity_warning_minutes
            );
            self.raise_session_warning();
        }
    }

    /// Show the expiry warning unless it is already up. Returns true if shown.
    pub fn raise_session_warning(&self) -> bool {
        if !self.session.borrow_mut().mark_warned() {
            return false;
        }
        self.page
            .show_modal(SESSION_MODAL_ID, &fragments::session_warning_modal());
        true
    }

    pub async fn extend_session(&self) {
        match self.api.extend_session().await {
            Ok(response) if response.success => {
                self.session.borrow_mut().reset();
                self.page.hide_modal(SESSION_MODAL_ID);
                self.page.show_toast(
                    ToastKind::Success,
                    &fragments::toast(ToastKind::Success, messages::SESSION_EXTENDED),
                );
                tracing::info!("Session extended");
            }
            Ok(_) => tracing::warn!("Session extension refused"),
            Err(e) => tracing::error!("Failed to extend session: {}", e),
        }
    }

    pub fn logout(&self) {
        if !self.page.navigate(api::LOGOUT) {
            tracing::warn!("Logout navigation refused");
        }
    }

    // =========================================================================
    // Permissions
    // =========================================================================

    /// Read the user's grants from the page and hide what they may not use.
    pub fn apply_permission_controls(&self) {
        let permissions = self
            .page
            .user_permissions()
            .map(|raw| Permissions::parse(&raw))
            .unwrap_or_default();

        if !permissions.has(DELETE_ORDERS) {
            self.page.hide_delete_controls();
        }
        *self.permissions.borrow_mut() = permissions;
    }

    pub fn apply_role_badge(&self) {
        let Some(raw) = self.page.user_role() else {
            return;
        };
        let role = Role::parse(&raw);
        if let Some(title) = role.badge_title(&self.page.title()) {
            self.page.set_title(&title);
        }
    }

    /// Gate a form submission on its `data-required-permission`.
    pub fn submit_form(&self, required_permission: Option<&str>) -> Flow {
        let Some(required) = required_permission.map(str::trim).filter(|p| !p.is_empty()) else {
            return Flow::Proceed;
        };
        if self.permissions.borrow().has(required) {
            return Flow::Proceed;
        }
        tracing::debug!("Blocked form submission requiring {}", required);
        self.page.show_toast(
            ToastKind::Danger,
            &fragments::toast(ToastKind::Danger, messages::NOT_AUTHORIZED),
        );
        Flow::Cancel
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub async fn dispatch(&self, action: Action) -> Flow {
        tracing::debug!("Dispatching {}", action.name());
        let flow = action.default_flow();

        match action {
            Action::AddVariant => {
                self.add_variant();
            }
            Action::RemoveVariant { id } => {
                self.remove_variant(id);
            }
            Action::UpdateStock(update) => self.update_stock(update).await,
            Action::UpdateStatus {
                order_id,
                status,
                current_status,
            } => {
                self.change_order_status(&order_id, &status, Some(&current_status))
                    .await
            }
            Action::SetOrderStatus { order_id, status } => {
                self.update_order_status_global(&order_id, &status).await
            }
            Action::DeleteOrder {
                order_id,
                status_text,
            } => {
                self.delete_order(&order_id, &status_text);
            }
            Action::FilterProducts => self.filter_products(),
            Action::ToggleMenu => self.toggle_menu(),
            Action::ExtendSession => self.extend_session().await,
            Action::Logout => self.logout(),
        }

        flow
    }
}
