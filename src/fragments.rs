//! HTML fragments the dashboard injects into the server-rendered page.
//!
//! Components are rendered to strings with `dioxus::ssr` and handed to the
//! [`Page`](crate::page::Page), which inserts them as markup.

use dioxus::prelude::*;

use crate::messages;
use crate::page::ToastKind;
use crate::variants::row_dom_id;

pub const SESSION_MODAL_ID: &str = "sessionWarningModal";

// =============================================================================
// Components
// =============================================================================

/// One repeatable color/size/quantity row of the product form.
#[component]
pub fn VariantRow(id: u32) -> Element {
    let row_id = row_dom_id(id);

    rsx! {
        div { class: "variant-item", id: "{row_id}",
            div { class: "row g-2 align-items-center",
                div { class: "col-md-3",
                    label { class: "form-label", {messages::VARIANT_COLOR} }
                    input {
                        r#type: "text",
                        class: "form-control",
                        name: "color_{id}",
                        placeholder: messages::VARIANT_COLOR_PLACEHOLDER,
                        required: true,
                    }
                }
                div { class: "col-md-3",
                    label { class: "form-label", {messages::VARIANT_SIZE} }
                    input {
                        r#type: "text",
                        class: "form-control",
                        name: "size_{id}",
                        placeholder: "M",
                        required: true,
                    }
                }
                div { class: "col-md-3",
                    label { class: "form-label", {messages::VARIANT_QUANTITY} }
                    input {
                        r#type: "number",
                        class: "form-control",
                        name: "quantity_{id}",
                        value: "10",
                        min: "0",
                        required: true,
                    }
                }
                div { class: "col-md-3",
                    label { class: "form-label", "\u{a0}" }
                    div {
                        button {
                            r#type: "button",
                            class: "btn btn-danger btn-sm w-100",
                            "data-action": "remove-variant",
                            "data-variant-id": "{id}",
                            i { class: "fas fa-trash" }
                            " "
                            {messages::VARIANT_REMOVE}
                        }
                    }
                }
            }
        }
    }
}

/// Session expiry warning, inserted once and reused.
#[component]
pub fn SessionWarningModal() -> Element {
    rsx! {
        div { class: "modal fade", id: SESSION_MODAL_ID, tabindex: "-1",
            div { class: "modal-dialog",
                div { class: "modal-content",
                    div { class: "modal-header bg-warning",
                        h5 { class: "modal-title",
                            i { class: "fas fa-exclamation-triangle me-2" }
                            {messages::SESSION_WARNING_TITLE}
                        }
                    }
                    div { class: "modal-body",
                        p { {messages::SESSION_WARNING_BODY} }
                        p { {messages::SESSION_WARNING_QUESTION} }
                    }
                    div { class: "modal-footer",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            "data-action": "logout",
                            {messages::LOGOUT}
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-primary",
                            "data-action": "extend-session",
                            {messages::EXTEND_SESSION}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Toast(success: bool, message: String) -> Element {
    let (bg, icon) = if success {
        ("success", "check-circle")
    } else {
        ("danger", "exclamation-triangle")
    };

    rsx! {
        div {
            class: "toast align-items-center text-white bg-{bg} border-0",
            role: "alert",
            div { class: "d-flex",
                div { class: "toast-body",
                    i { class: "fas fa-{icon} me-2" }
                    "{message}"
                }
                button {
                    r#type: "button",
                    class: "btn-close btn-close-white me-2 m-auto",
                    "data-bs-dismiss": "toast",
                }
            }
        }
    }
}

#[component]
pub fn MenuToggle() -> Element {
    rsx! {
        button {
            class: "mobile-menu-toggle",
            r#type: "button",
            "data-action": "toggle-menu",
            i { class: "fas fa-bars" }
        }
    }
}

#[component]
pub fn DeletingLabel() -> Element {
    rsx! {
        i { class: "fas fa-spinner fa-spin" }
        " "
        {messages::DELETING_LABEL}
    }
}

// =============================================================================
// Rendering
// =============================================================================

pub fn variant_row(id: u32) -> String {
    dioxus::ssr::render_element(rsx! { VariantRow { id } })
}

pub fn session_warning_modal() -> String {
    dioxus::ssr::render_element(rsx! { SessionWarningModal {} })
}

pub fn toast(kind: ToastKind, message: &str) -> String {
    let success = kind == ToastKind::Success;
    let message = message.to_string();
    dioxus::ssr::render_element(rsx! { Toast { success, message } })
}

pub fn menu_toggle() -> String {
    dioxus::ssr::render_element(rsx! { MenuToggle {} })
}

pub fn deleting_label() -> String {
    dioxus::ssr::render_element(rsx! { DeletingLabel {} })
}
