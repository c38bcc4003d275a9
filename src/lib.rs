//! Store Dashboard - client-side controller for the store back office
//!
//! Wires the server-rendered admin pages to the backend:
//! - Stock adjustments and order status changes with alert feedback
//! - Guarded order deletion
//! - Live stats cards and product search
//! - Session expiry warning and extension
//! - Permission-gated controls and the role badge
//!
//! The controller ([`controller::Dashboard`]) is host-agnostic. In the browser
//! it runs over the DOM ([`page::browser`]) and `fetch` ([`api::fetch`]);
//! natively over [`page::MemoryPage`] and reqwest ([`api::http`]).

pub mod actions;
pub mod api;
pub mod chrome;
pub mod clock;
pub mod config;
pub mod controller;
pub mod fragments;
pub mod logging;
pub mod messages;
pub mod orders;
pub mod page;
pub mod permissions;
pub mod search;
pub mod session;
pub mod variants;

#[cfg(target_arch = "wasm32")]
pub mod web;
