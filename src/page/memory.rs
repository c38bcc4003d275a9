//! In-memory [`Page`]: the headless probe drives it, and tests inspect it.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::{BTreeMap, VecDeque};

use super::{apply_filter_by_index, Page, ToastKind};
use crate::search::{CategorySection, FilterOutcome, ProductNode};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub html: String,
    pub visible: bool,
    pub times_shown: u32,
}

/// Everything the controller can observe or change. `None` means the page
/// has no such element.
#[derive(Debug, Clone)]
pub struct PageState {
    pub clock: Option<String>,
    pub viewport_width: u32,
    pub menu_toggle: Option<bool>,
    pub menu_toggle_installs: u32,
    pub sidebar_active: bool,
    pub image_preview: Option<String>,
    pub variant_rows: Option<Vec<(String, String)>>,
    pub variant_count: Option<u32>,
    pub deleting: Vec<(String, String)>,
    pub delete_controls_hidden: bool,
    pub stat_slots: Vec<String>,
    pub search_input: Option<String>,
    pub search_focused: bool,
    pub products: Vec<ProductNode>,
    pub categories: Vec<CategorySection>,
    pub category_labels: Vec<String>,
    pub no_results_visible: bool,
    pub products_container_visible: bool,
    pub search_stats: Option<String>,
    /// Filter passes applied through [`Page::apply_filter`].
    pub filter_passes: u32,
    pub modals: BTreeMap<String, ModalState>,
    pub toasts: Vec<(ToastKind, String)>,
    pub role: Option<String>,
    pub permissions: Option<String>,
    pub title: String,
    pub alerts: Vec<String>,
    pub confirms: Vec<String>,
    /// Scripted answers for `confirm`; falls back to `confirm_default`.
    pub confirm_answers: VecDeque<bool>,
    pub confirm_default: bool,
    pub navigations: Vec<String>,
    /// Refuse navigations (recorded nowhere) while set.
    pub navigation_blocked: bool,
    pub reloads: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            clock: None,
            viewport_width: 1280,
            menu_toggle: None,
            menu_toggle_installs: 0,
            sidebar_active: false,
            image_preview: None,
            variant_rows: None,
            variant_count: None,
            deleting: Vec::new(),
            delete_controls_hidden: false,
            stat_slots: Vec::new(),
            search_input: None,
            search_focused: false,
            products: Vec::new(),
            categories: Vec::new(),
            category_labels: Vec::new(),
            no_results_visible: false,
            products_container_visible: true,
            search_stats: None,
            filter_passes: 0,
            modals: BTreeMap::new(),
            toasts: Vec::new(),
            role: None,
            permissions: None,
            title: String::new(),
            alerts: Vec::new(),
            confirms: Vec::new(),
            confirm_answers: VecDeque::new(),
            confirm_default: true,
            navigations: Vec::new(),
            navigation_blocked: false,
            reloads: 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryPage {
    state: RefCell<PageState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Ref<'_, PageState> {
        self.state.borrow()
    }

    pub fn state_mut(&self) -> RefMut<'_, PageState> {
        self.state.borrow_mut()
    }

    pub fn with_clock(self) -> Self {
        self.state.borrow_mut().clock = Some(String::new());
        self
    }

    pub fn with_viewport(self, width: u32) -> Self {
        self.state.borrow_mut().viewport_width = width;
        self
    }

    pub fn with_variant_form(self) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.variant_rows = Some(Vec::new());
            state.variant_count = Some(0);
        }
        self
    }

    pub fn with_image_preview(self) -> Self {
        self.state.borrow_mut().image_preview = Some(String::new());
        self
    }

    pub fn with_stat_slots(self, count: usize) -> Self {
        self.state.borrow_mut().stat_slots = vec![String::new(); count];
        self
    }

    /// Product catalog: one entry per category, each a list of
    /// `(name, model, description)`.
    pub fn with_catalog(self, categories: &[&[(&str, &str, &str)]]) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.search_input = Some(String::new());
            for items in categories {
                let mut indices = Vec::new();
                for (name, model, description) in items.iter() {
                    indices.push(state.products.len());
                    state
                        .products
                        .push(ProductNode::new(name, model, description));
                }
                state.category_labels.push(format!("{} منتج", indices.len()));
                state.categories.push(CategorySection {
                    products: indices,
                    hidden: false,
                });
            }
            state.search_stats = Some(String::new());
        }
        self
    }

    pub fn with_search(self, input: &str) -> Self {
        self.state.borrow_mut().search_input = Some(input.to_string());
        self
    }

    pub fn with_role(self, role: &str) -> Self {
        self.state.borrow_mut().role = Some(role.to_string());
        self
    }

    pub fn with_permissions(self, permissions: &str) -> Self {
        self.state.borrow_mut().permissions = Some(permissions.to_string());
        self
    }

    pub fn with_title(self, title: &str) -> Self {
        self.state.borrow_mut().title = title.to_string();
        self
    }

    pub fn answer_confirms(self, answers: &[bool]) -> Self {
        self.state.borrow_mut().confirm_answers = answers.iter().copied().collect();
        self
    }

    pub fn set_navigation_blocked(&self, blocked: bool) {
        self.state.borrow_mut().navigation_blocked = blocked;
    }

    pub fn set_search(&self, input: &str) {
        self.state.borrow_mut().search_input = Some(input.to_string());
    }

    pub fn set_viewport(&self, width: u32) {
        self.state.borrow_mut().viewport_width = width;
    }

    pub fn visible_products(&self) -> Vec<usize> {
        self.state
            .borrow()
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.hidden)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn variant_row_ids(&self) -> Vec<String> {
        self.state
            .borrow()
            .variant_rows
            .as_ref()
            .map(|rows| rows.iter().map(|(id, _)| id.clone()).collect())
            .unwrap_or_default()
    }
}

impl Page for MemoryPage {
    fn set_clock_text(&self, text: &str) {
        if let Some(clock) = self.state.borrow_mut().clock.as_mut() {
            *clock = text.to_string();
        }
    }

    fn viewport_width(&self) -> u32 {
        self.state.borrow().viewport_width
    }

    fn install_menu_toggle(&self, _html: &str) {
        let mut state = self.state.borrow_mut();
        if state.menu_toggle.is_none() {
            state.menu_toggle = Some(false);
            state.menu_toggle_installs += 1;
        }
    }

    fn set_menu_toggle_visible(&self, visible: bool) {
        if let Some(toggle) = self.state.borrow_mut().menu_toggle.as_mut() {
            *toggle = visible;
        }
    }

    fn sidebar_active(&self) -> bool {
        self.state.borrow().sidebar_active
    }

    fn set_sidebar_active(&self, active: bool) {
        self.state.borrow_mut().sidebar_active = active;
    }

    fn show_image_preview(&self, src: &str) {
        if let Some(preview) = self.state.borrow_mut().image_preview.as_mut() {
            *preview = src.to_string();
        }
    }

    fn has_variant_container(&self) -> bool {
        self.state.borrow().variant_rows.is_some()
    }

    fn append_variant_row(&self, dom_id: &str, html: &str) {
        if let Some(rows) = self.state.borrow_mut().variant_rows.as_mut() {
            rows.push((dom_id.to_string(), html.to_string()));
        }
    }

    fn remove_variant_row(&self, dom_id: &str) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(rows) = state.variant_rows.as_mut() else {
            return false;
        };
        let before = rows.len();
        rows.retain(|(id, _)| id != dom_id);
        rows.len() != before
    }

    fn set_variant_count(&self, count: u32) {
        if let Some(field) = self.state.borrow_mut().variant_count.as_mut() {
            *field = count;
        }
    }

    fn mark_order_deleting(&self, order_id: &str, label_html: &str) {
        self.state
            .borrow_mut()
            .deleting
            .push((order_id.to_string(), label_html.to_string()));
    }

    fn hide_delete_controls(&self) {
        self.state.borrow_mut().delete_controls_hidden = true;
    }

    fn stat_slot_count(&self) -> usize {
        self.state.borrow().stat_slots.len()
    }

    fn set_stat_slot(&self, index: usize, text: &str) {
        if let Some(slot) = self.state.borrow_mut().stat_slots.get_mut(index) {
            *slot = text.to_string();
        }
    }

    fn search_input(&self) -> Option<String> {
        self.state.borrow().search_input.clone()
    }

    fn focus_search(&self) {
        let mut state = self.state.borrow_mut();
        if state.search_input.is_some() {
            state.search_focused = true;
        }
    }

    fn product_nodes(&self) -> Vec<ProductNode> {
        self.state.borrow().products.clone()
    }

    fn set_product_hidden(&self, index: usize, hidden: bool) {
        if let Some(product) = self.state.borrow_mut().products.get_mut(index) {
            product.hidden = hidden;
        }
    }

    fn category_sections(&self) -> Vec<CategorySection> {
        self.state.borrow().categories.clone()
    }

    fn set_category_hidden(&self, index: usize, hidden: bool) {
        if let Some(section) = self.state.borrow_mut().categories.get_mut(index) {
            section.hidden = hidden;
        }
    }

    fn set_category_count(&self, index: usize, label: &str) {
        if let Some(slot) = self.state.borrow_mut().category_labels.get_mut(index) {
            *slot = label.to_string();
        }
    }

    fn apply_filter(&self, outcome: &FilterOutcome) {
        self.state.borrow_mut().filter_passes += 1;
        apply_filter_by_index(self, outcome);
    }

    fn set_no_results_visible(&self, visible: bool) {
        self.state.borrow_mut().no_results_visible = visible;
    }

    fn set_products_container_visible(&self, visible: bool) {
        self.state.borrow_mut().products_container_visible = visible;
    }

    fn set_search_stats(&self, text: &str) {
        if let Some(stats) = self.state.borrow_mut().search_stats.as_mut() {
            *stats = text.to_string();
        }
    }

    fn show_modal(&self, modal_id: &str, html: &str) {
        let mut state = self.state.borrow_mut();
        let modal = state
            .modals
            .entry(modal_id.to_string())
            .or_insert_with(|| ModalState {
                html: html.to_string(),
                ..Default::default()
            });
        modal.visible = true;
        modal.times_shown += 1;
    }

    fn hide_modal(&self, modal_id: &str) {
        if let Some(modal) = self.state.borrow_mut().modals.get_mut(modal_id) {
            modal.visible = false;
        }
    }

    fn show_toast(&self, kind: ToastKind, html: &str) {
        self.state.borrow_mut().toasts.push((kind, html.to_string()));
    }

    fn user_role(&self) -> Option<String> {
        self.state.borrow().role.clone()
    }

    fn user_permissions(&self) -> Option<String> {
        self.state.borrow().permissions.clone()
    }

    fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    fn set_title(&self, title: &str) {
        self.state.borrow_mut().title = title.to_string();
    }

    fn alert(&self, message: &str) {
        tracing::debug!("alert: {}", message);
        self.state.borrow_mut().alerts.push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.confirms.push(message.to_string());
        let default = state.confirm_default;
        state.confirm_answers.pop_front().unwrap_or(default)
    }

    fn navigate(&self, url: &str) -> bool {
        let mut state = self.state.borrow_mut();
        if state.navigation_blocked {
            return false;
        }
        state.navigations.push(url.to_string());
        true
    }

    fn reload(&self) {
        self.state.borrow_mut().reloads += 1;
    }
}
