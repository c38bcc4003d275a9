//! [`Page`] over the live document (wasm32 only).
//!
//! Visibility uses the stylesheet's `hidden` class, except for the menu
//! toggle and delete controls which carry inline `display` like the
//! server templates expect. Bootstrap modals and toasts are driven through
//! `window.bootstrap` when it is loaded.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement, Window};

use super::{Page, ToastKind};
use crate::chrome::{self, Rect, Size, Viewport};
use crate::messages;
use crate::search::{CategorySection, FilterOutcome, ProductNode};

const HIDDEN: &str = "hidden";
const DELETE_CONTROLS: &str = ".delete-order, [data-action=\"delete-order\"]";
const TOAST_CONTAINER_CLASS: &str = "toast-container position-fixed top-0 end-0 p-3";

pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn first(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn all(&self, selector: &str) -> Vec<Element> {
        select_all(self.document.as_ref(), selector)
    }

    fn body_attribute(&self, name: &str) -> Option<String> {
        self.document.body()?.get_attribute(name)
    }

    /// Place a shown dropdown menu next to its toggle.
    pub fn place_dropdown(&self, toggle: &Element, menu: &HtmlElement) {
        let rect = toggle.get_bounding_client_rect();
        let number = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let viewport = Viewport {
            width: number(self.window.inner_width()),
            height: number(self.window.inner_height()),
            scroll_x: self.window.scroll_x().unwrap_or(0.0),
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
        };
        let placement = chrome::position_dropdown(
            Rect {
                top: rect.top(),
                left: rect.left(),
                right: rect.right(),
                bottom: rect.bottom(),
            },
            Size {
                width: menu.offset_width() as f64,
                height: menu.offset_height() as f64,
            },
            viewport,
        );

        let style = menu.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("bottom", "auto");
        let _ = style.set_property("right", "auto");
        let _ = style.set_property("top", &format!("{}px", placement.top));
        let _ = style.set_property("left", &format!("{}px", placement.left));
    }

    /// `window.bootstrap[component].getOrCreateInstance(el)[method]()`.
    fn bootstrap_call(&self, component: &str, el: &Element, method: &str) -> Option<()> {
        let bootstrap = Reflect::get(&self.window, &"bootstrap".into()).ok()?;
        if bootstrap.is_undefined() {
            return None;
        }
        let class = Reflect::get(&bootstrap, &component.into()).ok()?;
        let factory: Function = Reflect::get(&class, &"getOrCreateInstance".into())
            .ok()?
            .dyn_into()
            .ok()?;
        let instance = factory.call1(&class, el).ok()?;
        let method: Function = Reflect::get(&instance, &method.into())
            .ok()?
            .dyn_into()
            .ok()?;
        method.call0(&instance).ok()?;
        Some(())
    }

    fn toast_container(&self) -> Option<Element> {
        if let Some(container) = self.by_id("toastContainer") {
            return Some(container);
        }
        let container = self.document.create_element("div").ok()?;
        container.set_id("toastContainer");
        container.set_class_name(TOAST_CONTAINER_CLASS);
        set_style(&container, "z-index", "9999");
        self.document.body()?.append_child(&container).ok()?;
        Some(container)
    }
}

fn select_all(root: &JsValue, selector: &str) -> Vec<Element> {
    let list = if let Some(doc) = root.dyn_ref::<Document>() {
        doc.query_selector_all(selector)
    } else if let Some(el) = root.dyn_ref::<Element>() {
        el.query_selector_all(selector)
    } else {
        return Vec::new();
    };
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_hidden(el: &Element, hidden: bool) {
    let classes = el.class_list();
    let _ = if hidden {
        classes.add_1(HIDDEN)
    } else {
        classes.remove_1(HIDDEN)
    };
}

fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

fn set_display(el: &Element, value: &str) {
    set_style(el, "display", value);
}

impl Page for BrowserPage {
    fn set_clock_text(&self, text: &str) {
        if let Some(el) = self.by_id("current-time") {
            el.set_text_content(Some(text));
        }
    }

    fn viewport_width(&self) -> u32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .map(|w| w.max(0.0) as u32)
            .unwrap_or(0)
    }

    fn install_menu_toggle(&self, html: &str) {
        if self.first(".mobile-menu-toggle").is_some() {
            return;
        }
        if let Some(body) = self.document.body() {
            let _ = body.insert_adjacent_html("beforeend", html);
        }
    }

    fn set_menu_toggle_visible(&self, visible: bool) {
        if let Some(toggle) = self.first(".mobile-menu-toggle") {
            set_display(&toggle, if visible { "flex" } else { "none" });
        }
    }

    fn sidebar_active(&self) -> bool {
        self.first(".sidebar")
            .map(|s| s.class_list().contains("active"))
            .unwrap_or(false)
    }

    fn set_sidebar_active(&self, active: bool) {
        if let Some(sidebar) = self.first(".sidebar") {
            let _ = sidebar.class_list().toggle_with_force("active", active);
        }
    }

    fn show_image_preview(&self, src: &str) {
        let Some(preview) = self.by_id("imagePreview") else {
            return;
        };
        if let Some(img) = preview.dyn_ref::<HtmlImageElement>() {
            img.set_src(src);
        }
        set_display(&preview, "block");
    }

    fn has_variant_container(&self) -> bool {
        self.by_id("variantsContainer").is_some()
    }

    fn append_variant_row(&self, _dom_id: &str, html: &str) {
        if let Some(container) = self.by_id("variantsContainer") {
            let _ = container.insert_adjacent_html("beforeend", html);
        }
    }

    fn remove_variant_row(&self, dom_id: &str) -> bool {
        match self.by_id(dom_id) {
            Some(row) => {
                row.remove();
                true
            }
            None => false,
        }
    }

    fn set_variant_count(&self, count: u32) {
        if let Some(field) = self
            .by_id("variantCount")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            field.set_value(&count.to_string());
        }
    }

    fn mark_order_deleting(&self, order_id: &str, label_html: &str) {
        for control in self.all(DELETE_CONTROLS) {
            if control.get_attribute("data-order-id").as_deref() == Some(order_id) {
                control.set_inner_html(label_html);
                let _ = control.set_attribute("disabled", "");
                let _ = control.class_list().add_1("disabled");
            }
        }
    }

    fn hide_delete_controls(&self) {
        for control in self.all(DELETE_CONTROLS) {
            set_display(&control, "none");
        }
    }

    fn stat_slot_count(&self) -> usize {
        self.all(".stat-card .stat-number").len()
    }

    fn set_stat_slot(&self, index: usize, text: &str) {
        if let Some(slot) = self.all(".stat-card .stat-number").get(index) {
            slot.set_text_content(Some(text));
        }
    }

    fn search_input(&self) -> Option<String> {
        self.by_id("productSearch")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
    }

    fn focus_search(&self) {
        if let Some(input) = self
            .by_id("productSearch")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = input.focus();
        }
    }

    fn product_nodes(&self) -> Vec<ProductNode> {
        self.all(".product-item")
            .iter()
            .map(|item| {
                let attr = |name: &str| item.get_attribute(name).unwrap_or_default();
                let mut node =
                    ProductNode::new(&attr("data-name"), &attr("data-model"), &attr("data-description"));
                node.hidden = item.class_list().contains(HIDDEN);
                node
            })
            .collect()
    }

    fn set_product_hidden(&self, index: usize, hidden: bool) {
        if let Some(item) = self.all(".product-item").get(index) {
            set_hidden(item, hidden);
        }
    }

    fn category_sections(&self) -> Vec<CategorySection> {
        let sections = self.all(".category-section");
        let mut grouped: Vec<CategorySection> = sections
            .iter()
            .map(|section| CategorySection {
                products: Vec::new(),
                hidden: section.class_list().contains(HIDDEN),
            })
            .collect();

        // One walk over the cards; each finds its section among the few sections.
        for (index, item) in self.all(".product-item").iter().enumerate() {
            let Some(owner) = item.closest(".category-section").ok().flatten() else {
                continue;
            };
            if let Some(section) = sections
                .iter()
                .position(|s| s.is_same_node(Some(&*owner)))
                .and_then(|i| grouped.get_mut(i))
            {
                section.products.push(index);
            }
        }
        grouped
    }

    fn set_category_hidden(&self, index: usize, hidden: bool) {
        if let Some(section) = self.all(".category-section").get(index) {
            set_hidden(section, hidden);
        }
    }

    fn set_category_count(&self, index: usize, label: &str) {
        if let Some(counter) = self
            .all(".category-section")
            .get(index)
            .and_then(|s| s.query_selector(".category-product-count").ok().flatten())
        {
            counter.set_text_content(Some(label));
        }
    }

    fn apply_filter(&self, outcome: &FilterOutcome) {
        for (item, visible) in self.all(".product-item").iter().zip(&outcome.product_visible) {
            set_hidden(item, !visible);
        }
        for (section, count) in self
            .all(".category-section")
            .iter()
            .zip(&outcome.category_counts)
        {
            if *count == 0 {
                set_hidden(section, true);
                continue;
            }
            set_hidden(section, false);
            if let Some(counter) = section
                .query_selector(".category-product-count")
                .ok()
                .flatten()
            {
                counter.set_text_content(Some(&messages::category_count(*count)));
            }
        }
    }

    fn set_no_results_visible(&self, visible: bool) {
        if let Some(panel) = self.by_id("noResults") {
            set_hidden(&panel, !visible);
        }
    }

    fn set_products_container_visible(&self, visible: bool) {
        if let Some(container) = self.by_id("productsContainer") {
            set_hidden(&container, !visible);
        }
    }

    fn set_search_stats(&self, text: &str) {
        if let Some(stats) = self.by_id("searchStats") {
            stats.set_text_content(Some(text));
        }
    }

    fn show_modal(&self, modal_id: &str, html: &str) {
        if self.by_id(modal_id).is_none() {
            if let Some(body) = self.document.body() {
                let _ = body.insert_adjacent_html("beforeend", html);
            }
        }
        let Some(modal) = self.by_id(modal_id) else {
            return;
        };
        if self.bootstrap_call("Modal", &modal, "show").is_none() {
            let _ = modal.class_list().add_1("show");
            set_display(&modal, "block");
        }
    }

    fn hide_modal(&self, modal_id: &str) {
        let Some(modal) = self.by_id(modal_id) else {
            return;
        };
        if self.bootstrap_call("Modal", &modal, "hide").is_none() {
            let _ = modal.class_list().remove_1("show");
            set_display(&modal, "none");
        }
    }

    fn show_toast(&self, _kind: ToastKind, html: &str) {
        let Some(container) = self.toast_container() else {
            return;
        };
        let _ = container.insert_adjacent_html("beforeend", html);
        if let Some(toast) = container.last_element_child() {
            if self.bootstrap_call("Toast", &toast, "show").is_none() {
                let _ = toast.class_list().add_1("show");
            }
        }
    }

    fn user_role(&self) -> Option<String> {
        self.first("[data-user-role]")?.get_attribute("data-user-role")
    }

    fn user_permissions(&self) -> Option<String> {
        self.body_attribute("data-user-permissions")
    }

    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn navigate(&self, url: &str) -> bool {
        match self.window.location().set_href(url) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Navigation to {} failed: {:?}", url, e);
                false
            }
        }
    }

    fn reload(&self) {
        let _ = self.window.location().reload();
    }
}
