//! The page the dashboard controller drives.
//!
//! [`Page`] is the contract between the controller and the server-rendered
//! markup (`#current-time`, `.sidebar`, `.product-item`, ...). Methods on a
//! missing element are silent no-ops; getters report absence with `None`/`false`.

use crate::messages;
use crate::search::{CategorySection, FilterOutcome, ProductNode};

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod memory;

pub use memory::MemoryPage;

/// Toast colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Danger,
}

pub trait Page {
    // =========================================================================
    // Clock
    // =========================================================================

    fn set_clock_text(&self, text: &str);

    // =========================================================================
    // Responsive chrome
    // =========================================================================

    fn viewport_width(&self) -> u32;

    /// Inject the mobile menu toggle button (once).
    fn install_menu_toggle(&self, html: &str);

    fn set_menu_toggle_visible(&self, visible: bool);

    fn sidebar_active(&self) -> bool;

    fn set_sidebar_active(&self, active: bool);

    // =========================================================================
    // Product form
    // =========================================================================

    fn show_image_preview(&self, src: &str);

    fn has_variant_container(&self) -> bool;

    fn append_variant_row(&self, dom_id: &str, html: &str);

    /// Returns false when no such row exists.
    fn remove_variant_row(&self, dom_id: &str) -> bool;

    fn set_variant_count(&self, count: u32);

    // =========================================================================
    // Orders & stats
    // =========================================================================

    /// Disable an order's delete control and swap in the spinner label.
    fn mark_order_deleting(&self, order_id: &str, label_html: &str);

    fn hide_delete_controls(&self);

    fn stat_slot_count(&self) -> usize;

    fn set_stat_slot(&self, index: usize, text: &str);

    // =========================================================================
    // Product search
    // =========================================================================

    /// Raw `#productSearch` value; `None` when the page has no search box.
    fn search_input(&self) -> Option<String>;

    fn focus_search(&self);

    fn product_nodes(&self) -> Vec<ProductNode>;

    fn set_product_hidden(&self, index: usize, hidden: bool);

    fn category_sections(&self) -> Vec<CategorySection>;

    fn set_category_hidden(&self, index: usize, hidden: bool);

    fn set_category_count(&self, index: usize, label: &str);

    /// Apply one filter pass to the product cards and category sections.
    /// Hosts where each indexed lookup re-queries the document override this
    /// to resolve the nodes once.
    fn apply_filter(&self, outcome: &FilterOutcome) {
        apply_filter_by_index(self, outcome);
    }

    fn set_no_results_visible(&self, visible: bool);

    fn set_products_container_visible(&self, visible: bool);

    fn set_search_stats(&self, text: &str);

    // =========================================================================
    // Session modal & toasts
    // =========================================================================

    /// Insert the modal markup if no element with `modal_id` exists, then show it.
    fn show_modal(&self, modal_id: &str, html: &str);

    fn hide_modal(&self, modal_id: &str);

    fn show_toast(&self, kind: ToastKind, html: &str);

    // =========================================================================
    // Identity
    // =========================================================================

    fn user_role(&self) -> Option<String>;

    fn user_permissions(&self) -> Option<String>;

    fn title(&self) -> String;

    fn set_title(&self, title: &str);

    // =========================================================================
    // Dialogs & navigation
    // =========================================================================

    fn alert(&self, message: &str);

    /// Blocking confirmation dialog.
    fn confirm(&self, message: &str) -> bool;

    /// Start a full navigation. Returns false if the host refused it.
    fn navigate(&self, url: &str) -> bool;

    fn reload(&self);
}

/// Per-index rendering of a [`FilterOutcome`]. Count labels are rewritten
/// only for categories that stay visible.
pub fn apply_filter_by_index<P: Page + ?Sized>(page: &P, outcome: &FilterOutcome) {
    for (index, visible) in outcome.product_visible.iter().enumerate() {
        page.set_product_hidden(index, !visible);
    }
    for (index, count) in outcome.category_counts.iter().enumerate() {
        if *count > 0 {
            page.set_category_hidden(index, false);
            page.set_category_count(index, &messages::category_count(*count));
        } else {
            page.set_category_hidden(index, true);
        }
    }
}
