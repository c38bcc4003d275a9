//! Dashboard flows driven end to end over an in-memory page and a
//! recording backend.

mod mock_api;

use std::rc::Rc;

use mock_api::{Call, MockApi};
use store_dashboard::actions::{Action, ActionName, Flow};
use store_dashboard::api::{DashboardStats, StatusUpdate, StockUpdate};
use store_dashboard::config::DashboardConfig;
use store_dashboard::controller::Dashboard;
use store_dashboard::fragments::SESSION_MODAL_ID;
use store_dashboard::messages;
use store_dashboard::page::{MemoryPage, Page, ToastKind};
use tokio_test::block_on;

// =============================================================================
// Test utilities
// =============================================================================

fn setup(page: MemoryPage, api: MockApi) -> (Rc<MemoryPage>, Rc<MockApi>, Dashboard) {
    let page = Rc::new(page);
    let api = Rc::new(api);
    let dashboard = Dashboard::new(page.clone(), api.clone(), DashboardConfig::default());
    (page, api, dashboard)
}

fn shoe_update() -> StockUpdate {
    StockUpdate {
        category: "shoes".into(),
        product_id: "17".into(),
        color: "red".into(),
        size: "42".into(),
        quantity_change: 5,
    }
}

/// Two categories: shoes (Red Shoe, Trail Boot) and shirts (Blue Shirt).
fn catalog_page() -> MemoryPage {
    MemoryPage::new().with_catalog(&[
        &[
            ("Red Shoe", "RS100", "leather running shoe"),
            ("Trail Boot", "TB7", "waterproof"),
        ],
        &[("Blue Shirt", "BS200", "cotton")],
    ])
}

// =============================================================================
// Responsive chrome
// =============================================================================

mod chrome {
    use super::*;

    #[test]
    fn desktop_widths_hide_toggle_and_retract_sidebar() {
        for width in [992, 1200, 1920] {
            let (page, _, dash) = setup(MemoryPage::new().with_viewport(width), MockApi::new());
            dash.init();
            page.set_sidebar_active(true);

            dash.check_screen_size();

            let state = page.state();
            assert_eq!(state.menu_toggle, Some(false), "width {}", width);
            assert!(!state.sidebar_active, "width {}", width);
        }
    }

    #[test]
    fn mobile_width_shows_toggle_and_keeps_sidebar() {
        let (page, _, dash) = setup(MemoryPage::new().with_viewport(600), MockApi::new());
        dash.init();
        assert_eq!(page.state().menu_toggle, Some(true));

        dash.toggle_menu();
        assert!(page.state().sidebar_active);
        dash.check_screen_size();
        assert!(page.state().sidebar_active);

        dash.toggle_menu();
        assert!(!page.state().sidebar_active);
    }

    #[test]
    fn resize_to_desktop_retracts_open_sidebar() {
        let (page, _, dash) = setup(MemoryPage::new().with_viewport(600), MockApi::new());
        dash.init();
        dash.toggle_menu();

        page.set_viewport(1280);
        dash.check_screen_size();

        assert!(!page.state().sidebar_active);
        assert_eq!(page.state().menu_toggle_installs, 1);
    }

    #[test]
    fn image_preview_only_with_file() {
        let (page, _, dash) = setup(MemoryPage::new().with_image_preview(), MockApi::new());
        dash.preview_image(None);
        assert_eq!(page.state().image_preview.as_deref(), Some(""));

        dash.preview_image(Some("data:image/png;base64,AAAA"));
        assert_eq!(
            page.state().image_preview.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }
}

// =============================================================================
// Variant editor
// =============================================================================

mod variants {
    use super::*;

    #[test]
    fn ids_are_sequential_and_never_reused() {
        let (page, _, dash) = setup(MemoryPage::new().with_variant_form(), MockApi::new());

        let ids: Vec<u32> = (0..4).filter_map(|_| dash.add_variant()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);

        assert!(dash.remove_variant(2));
        assert_eq!(
            page.variant_row_ids(),
            vec!["variant-0", "variant-1", "variant-3"]
        );
        assert_eq!(page.state().variant_count, Some(4));

        assert!(!dash.remove_variant(2));
        assert_eq!(dash.add_variant(), Some(4));
        assert_eq!(page.state().variant_count, Some(5));
    }

    #[test]
    fn missing_container_does_not_advance_counter() {
        let (_, _, dash) = setup(MemoryPage::new(), MockApi::new());
        assert_eq!(dash.add_variant(), None);
        assert_eq!(dash.variants_added(), 0);
        assert!(!dash.remove_variant(0));
    }

    #[test]
    fn init_adds_one_row() {
        let (page, _, dash) = setup(MemoryPage::new().with_variant_form(), MockApi::new());
        dash.init();
        assert_eq!(page.variant_row_ids(), vec!["variant-0"]);
        let state = page.state();
        let (_, html) = &state.variant_rows.as_ref().unwrap()[0];
        assert!(html.contains(r#"name="quantity_0""#));
    }
}

// =============================================================================
// Inventory
// =============================================================================

mod inventory {
    use super::*;

    #[test]
    fn success_alerts_and_reloads() {
        let (page, api, dash) = setup(
            MemoryPage::new(),
            MockApi::new().answering(true, "تم تحديث المخزون"),
        );
        block_on(dash.update_stock(shoe_update()));

        assert_eq!(api.calls(), vec![Call::UpdateInventory(shoe_update())]);
        let state = page.state();
        assert_eq!(state.alerts, vec!["تم تحديث المخزون"]);
        assert_eq!(state.reloads, 1);
    }

    #[test]
    fn refusal_alerts_prefixed_message() {
        let (page, _, dash) = setup(
            MemoryPage::new(),
            MockApi::new().answering(false, "الكمية غير كافية"),
        );
        block_on(dash.update_stock(shoe_update()));

        let state = page.state();
        assert_eq!(state.alerts, vec!["خطأ: الكمية غير كافية"]);
        assert_eq!(state.reloads, 0);
    }

    #[test]
    fn transport_failure_alerts_connection_error() {
        let (page, api, dash) = setup(MemoryPage::new(), MockApi::new());
        block_on(dash.update_stock(shoe_update()));

        assert_eq!(api.calls().len(), 1);
        let state = page.state();
        assert_eq!(state.alerts, vec![messages::CONNECTION_ERROR]);
        assert_eq!(state.reloads, 0);
    }
}

// =============================================================================
// Order status & deletion
// =============================================================================

mod orders {
    use super::*;

    #[test]
    fn delivered_row_is_locked() {
        for current in ["تم التوصيل", "Delivered", "DELIVERED"] {
            let (page, api, dash) = setup(MemoryPage::new(), MockApi::new().answering(true, "ok"));
            block_on(dash.change_order_status("1042", "pending", Some(current)));

            assert!(api.calls().is_empty());
            let state = page.state();
            assert_eq!(state.alerts, vec![messages::DELIVERED_IS_FINAL]);
            assert!(state.confirms.is_empty());
        }
    }

    #[test]
    fn declined_confirmation_sends_nothing() {
        let (page, api, dash) = setup(
            MemoryPage::new().answer_confirms(&[false]),
            MockApi::new().answering(true, "ok"),
        );
        block_on(dash.change_order_status("1042", "shipped", Some("مؤكد")));

        assert!(api.calls().is_empty());
        assert!(page.state().alerts.is_empty());
    }

    #[test]
    fn confirmed_change_posts_and_reloads() {
        let (page, api, dash) = setup(MemoryPage::new(), MockApi::new().answering(true, "تم التحديث"));
        block_on(dash.change_order_status("1042", "shipped", Some("معلق")));

        assert_eq!(
            api.calls(),
            vec![Call::UpdateOrderStatus(StatusUpdate {
                order_id: "1042".into(),
                status: "shipped".into(),
            })]
        );
        let state = page.state();
        assert_eq!(state.confirms, vec![messages::CONFIRM_STATUS_CHANGE]);
        assert_eq!(state.alerts, vec!["تم التحديث"]);
        assert_eq!(state.reloads, 1);
    }

    #[test]
    fn global_change_has_no_row_guard() {
        let (_, api, dash) = setup(MemoryPage::new(), MockApi::new().answering(true, "ok"));
        block_on(dash.update_order_status_global("7", "pending"));
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn refused_change_alerts_prefixed_message() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new().answering(false, "غير مسموح"));
        block_on(dash.change_order_status("7", "pending", None));
        assert_eq!(page.state().alerts, vec!["حدث خطأ: غير مسموح"]);
    }

    #[test]
    fn terminal_orders_never_navigate() {
        for status in ["Delivered", "تم التوصيل", "completed", "مكتمل"] {
            let (page, _, dash) = setup(MemoryPage::new(), MockApi::new());
            assert!(!dash.delete_order("1042", status));

            let state = page.state();
            assert!(state.navigations.is_empty(), "status {}", status);
            assert!(state.confirms.is_empty());
            assert_eq!(
                state.alerts,
                vec![messages::delete_refused_terminal("1042", status)]
            );
        }
    }

    #[test]
    fn pending_order_navigates_after_confirm() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new());
        assert!(dash.delete_order("1042", "Pending"));

        let state = page.state();
        assert_eq!(state.confirms, vec![messages::confirm_delete("1042")]);
        assert_eq!(state.navigations, vec!["/delete_order/1042"]);
        assert_eq!(state.deleting.len(), 1);
        assert_eq!(state.deleting[0].0, "1042");
        assert!(state.deleting[0].1.contains(messages::DELETING_LABEL));
    }

    #[test]
    fn unknown_status_is_refused() {
        for status in ["cancelled", ""] {
            let (page, _, dash) = setup(MemoryPage::new(), MockApi::new());
            assert!(!dash.delete_order("9", status));

            let state = page.state();
            assert!(state.navigations.is_empty());
            assert!(state.confirms.is_empty());
            assert_eq!(state.alerts, vec![messages::delete_refused_unknown("9", status)]);
        }
    }

    #[test]
    fn declined_delete_can_be_retried() {
        let (page, _, dash) = setup(MemoryPage::new().answer_confirms(&[false]), MockApi::new());
        assert!(!dash.delete_order("5", "مشحون"));
        assert!(page.state().navigations.is_empty());

        assert!(dash.delete_order("5", "مشحون"));
        assert_eq!(page.state().navigations, vec!["/delete_order/5"]);
    }

    #[test]
    fn second_delete_while_pending_is_ignored() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new());
        assert!(dash.delete_order("5", "confirmed"));
        assert!(!dash.delete_order("5", "confirmed"));

        let state = page.state();
        assert_eq!(state.navigations.len(), 1);
        assert_eq!(state.confirms.len(), 1);
    }

    #[test]
    fn failed_navigation_leaves_order_deletable() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new());
        page.set_navigation_blocked(true);

        assert!(!dash.delete_order("5", "pending"));
        assert!(page.state().deleting.is_empty());

        page.set_navigation_blocked(false);
        assert!(dash.delete_order("5", "pending"));

        let state = page.state();
        assert_eq!(state.navigations, vec!["/delete_order/5"]);
        assert_eq!(state.deleting.len(), 1);
        assert_eq!(state.confirms.len(), 2);
    }

    #[test]
    fn delete_route_is_url_encoded() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new());
        dash.delete_order("A/1 b", "pending");
        assert_eq!(page.state().navigations, vec!["/delete_order/A%2F1%20b"]);
    }
}

// =============================================================================
// Stats
// =============================================================================

mod stats {
    use super::*;

    fn sample() -> DashboardStats {
        DashboardStats {
            total_orders: 12,
            pending_orders: 3,
            completed_orders: 7,
            total_revenue: 1250.5,
        }
    }

    #[test]
    fn binds_positionally() {
        let (page, _, dash) = setup(
            MemoryPage::new().with_stat_slots(4),
            MockApi::new().with_stats(sample()),
        );
        block_on(dash.refresh_stats());
        assert_eq!(page.state().stat_slots, vec!["12", "3", "7", "1250.5"]);
    }

    #[test]
    fn fewer_slots_write_only_those_present() {
        let (page, _, dash) = setup(
            MemoryPage::new().with_stat_slots(2),
            MockApi::new().with_stats(sample()),
        );
        block_on(dash.refresh_stats());
        assert_eq!(page.state().stat_slots, vec!["12", "3"]);
    }

    #[test]
    fn failure_is_silent() {
        let (page, api, dash) = setup(MemoryPage::new().with_stat_slots(4), MockApi::new());
        block_on(dash.refresh_stats());

        assert_eq!(api.calls(), vec![Call::Stats]);
        let state = page.state();
        assert!(state.alerts.is_empty());
        assert!(state.toasts.is_empty());
        assert!(state.stat_slots.iter().all(String::is_empty));
    }
}

// =============================================================================
// Product search
// =============================================================================

mod search {
    use super::*;

    #[test]
    fn model_match_shows_single_product() {
        let page = MemoryPage::new().with_catalog(&[
            &[("Red Shoe", "RS100", "")],
            &[("Blue Shirt", "BS200", "")],
        ]);
        let (page, _, dash) = setup(page.with_search("rs100"), MockApi::new());
        dash.filter_products();

        assert_eq!(page.visible_products(), vec![0]);
        let state = page.state();
        assert!(!state.categories[0].hidden);
        assert!(state.categories[1].hidden);
        assert_eq!(state.category_labels[0], "1 منتج");
        assert_eq!(
            state.search_stats.as_deref(),
            Some("عرض 1 منتج في 1 فئة - نتائج البحث عن: \"rs100\"")
        );
        assert!(!state.no_results_visible);
        assert!(state.products_container_visible);
    }

    #[test]
    fn stats_echo_trimmed_input_case() {
        let (page, _, dash) = setup(catalog_page().with_search("  RS100 "), MockApi::new());
        dash.filter_products();

        assert_eq!(page.visible_products(), vec![0]);
        assert_eq!(
            page.state().search_stats.as_deref(),
            Some("عرض 1 منتج في 1 فئة - نتائج البحث عن: \"RS100\"")
        );
    }

    #[test]
    fn description_matches() {
        let (page, _, dash) = setup(catalog_page().with_search("cotton"), MockApi::new());
        dash.filter_products();
        assert_eq!(page.visible_products(), vec![2]);
    }

    #[test]
    fn zero_matches_show_no_results_panel() {
        let (page, _, dash) = setup(catalog_page().with_search("zzz"), MockApi::new());
        dash.filter_products();

        assert!(page.visible_products().is_empty());
        let state = page.state();
        assert!(state.no_results_visible);
        assert!(!state.products_container_visible);
        assert!(state.categories.iter().all(|c| c.hidden));
    }

    #[test]
    fn empty_term_restores_everything() {
        let (page, _, dash) = setup(catalog_page().with_search("shoe"), MockApi::new());
        dash.filter_products();
        assert_eq!(page.visible_products(), vec![0]);
        assert_eq!(page.state().category_labels[0], "1 منتج");

        page.set_search("   ");
        dash.filter_products();

        assert_eq!(page.visible_products(), vec![0, 1, 2]);
        let state = page.state();
        assert_eq!(state.category_labels, vec!["2 منتج", "1 منتج"]);
        assert!(state.categories.iter().all(|c| !c.hidden));
        assert_eq!(state.search_stats.as_deref(), Some(messages::ALL_PRODUCTS_SHOWN));
        assert!(!state.no_results_visible);
        assert!(state.products_container_visible);
    }

    #[test]
    fn each_search_applies_one_batched_pass() {
        let (page, _, dash) = setup(catalog_page().with_search("boot"), MockApi::new());
        dash.filter_products();
        assert_eq!(page.state().filter_passes, 1);
        assert_eq!(page.visible_products(), vec![1]);

        page.set_search("shirt");
        dash.filter_products();

        let state = page.state();
        assert_eq!(state.filter_passes, 2);
        assert!(state.categories[0].hidden);
        assert!(!state.categories[1].hidden);
        assert_eq!(state.category_labels, vec!["1 منتج", "1 منتج"]);
    }

    #[test]
    fn no_search_box_is_a_no_op() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new());
        dash.filter_products();
        dash.init_search();
        let state = page.state();
        assert!(state.search_stats.is_none());
        assert!(!state.search_focused);
    }

    #[test]
    fn init_focuses_and_counts_visible_nodes() {
        let (page, _, dash) = setup(catalog_page().with_search("x"), MockApi::new());
        page.state_mut().products[1].hidden = true;
        dash.init_search();

        let state = page.state();
        assert!(state.search_focused);
        assert_eq!(
            state.search_stats.as_deref(),
            Some("عرض 2 منتج في 2 فئة - نتائج البحث عن: \"x\"")
        );
    }
}

// =============================================================================
// Session lifecycle
// =============================================================================

mod session {
    use super::*;

    fn modal_shown(page: &MemoryPage) -> u32 {
        page.state()
            .modals
            .get(SESSION_MODAL_ID)
            .map(|m| m.times_shown)
            .unwrap_or(0)
    }

    #[test]
    fn warning_shown_once_for_poll_and_inactivity() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new().with_session(false));

        block_on(dash.poll_session());
        for _ in 0..25 {
            dash.inactivity_tick();
        }
        block_on(dash.poll_session());

        assert_eq!(modal_shown(&page), 1);
        assert!(page.state().modals[SESSION_MODAL_ID].visible);
    }

    #[test]
    fn inactivity_warns_at_exactly_25_minutes() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new());
        for _ in 0..24 {
            dash.inactivity_tick();
        }
        assert_eq!(modal_shown(&page), 0);

        dash.inactivity_tick();
        assert_eq!(modal_shown(&page), 1);

        for _ in 0..10 {
            dash.inactivity_tick();
        }
        assert_eq!(modal_shown(&page), 1);
    }

    #[test]
    fn activity_resets_idle_counter() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new());
        for _ in 0..20 {
            dash.inactivity_tick();
        }
        dash.note_activity();
        for _ in 0..24 {
            dash.inactivity_tick();
        }
        assert_eq!(modal_shown(&page), 0);
        assert_eq!(dash.session().idle_minutes(), 24);
    }

    #[test]
    fn extend_clears_warning_and_toasts() {
        let (page, api, dash) = setup(
            MemoryPage::new(),
            MockApi::new().with_session(false).with_extend(true),
        );
        block_on(dash.poll_session());
        block_on(dash.extend_session());

        assert!(api.calls().contains(&Call::ExtendSession));
        assert!(!dash.session().warning_shown());
        assert_eq!(dash.session().idle_minutes(), 0);
        {
            let state = page.state();
            assert!(!state.modals[SESSION_MODAL_ID].visible);
            assert_eq!(state.toasts.len(), 1);
            assert_eq!(state.toasts[0].0, ToastKind::Success);
            assert!(state.toasts[0].1.contains(messages::SESSION_EXTENDED));
        }

        // The warning may come back after a successful extension.
        block_on(dash.poll_session());
        assert_eq!(modal_shown(&page), 2);
    }

    #[test]
    fn failed_extend_keeps_warning() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new().with_extend(false));
        assert!(dash.raise_session_warning());
        block_on(dash.extend_session());

        assert!(dash.session().warning_shown());
        let state = page.state();
        assert!(state.modals[SESSION_MODAL_ID].visible);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn poll_failures_are_silent() {
        for api in [MockApi::new().with_session(true), MockApi::new()] {
            let (page, _, dash) = setup(MemoryPage::new(), api);
            block_on(dash.poll_session());
            assert_eq!(modal_shown(&page), 0);
            assert!(page.state().alerts.is_empty());
        }
    }

    #[test]
    fn logout_navigates() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new());
        dash.logout();
        assert_eq!(page.state().navigations, vec!["/logout"]);
    }
}

// =============================================================================
// Permissions & role badge
// =============================================================================

mod permissions {
    use super::*;

    #[test]
    fn delete_controls_follow_permission() {
        let cases = [
            ("", true),
            ("view_orders,edit_orders", true),
            ("delete_orders_archive", true),
            (r#"{"delete_orders": false}"#, true),
            (r#"{"delete_orders": true}"#, false),
            (r#"["view_orders", "delete_orders"]"#, false),
            ("all_permissions", false),
            ("{'all_permissions': True, 'delete_orders': True}", false),
            ("{'view_orders': True, 'delete_orders': False}", true),
        ];
        for (raw, hidden) in cases {
            let (page, _, dash) = setup(MemoryPage::new().with_permissions(raw), MockApi::new());
            dash.apply_permission_controls();
            assert_eq!(page.state().delete_controls_hidden, hidden, "{}", raw);
        }
    }

    #[test]
    fn unauthorized_submit_is_cancelled() {
        let (page, _, dash) = setup(
            MemoryPage::new().with_permissions("view_orders edit_orders"),
            MockApi::new(),
        );
        dash.init();

        assert_eq!(dash.submit_form(Some("manage_products")), Flow::Cancel);
        assert_eq!(dash.submit_form(Some("edit_orders")), Flow::Proceed);
        assert_eq!(dash.submit_form(None), Flow::Proceed);

        let state = page.state();
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].0, ToastKind::Danger);
        assert!(state.toasts[0].1.contains(messages::NOT_AUTHORIZED));
    }

    #[test]
    fn all_permissions_allows_any_form() {
        let (_, _, dash) = setup(
            MemoryPage::new().with_permissions(r#"{"all_permissions": true}"#),
            MockApi::new(),
        );
        dash.apply_permission_controls();
        assert_eq!(dash.submit_form(Some("manage_users")), Flow::Proceed);
    }

    #[test]
    fn role_badge_in_title() {
        let cases = [
            ("admin", "لوحة التحكم - مدير النظام"),
            ("order_manager", "لوحة التحكم - مدير الطلبات"),
            ("guest", "لوحة التحكم - مستخدم"),
        ];
        for (role, expected) in cases {
            let (page, _, dash) = setup(
                MemoryPage::new().with_role(role).with_title("لوحة التحكم"),
                MockApi::new(),
            );
            dash.init();
            assert_eq!(page.state().title, expected);
        }
    }

    #[test]
    fn no_role_leaves_title() {
        let (page, _, dash) = setup(MemoryPage::new().with_title("لوحة التحكم"), MockApi::new());
        dash.apply_role_badge();
        assert_eq!(page.state().title, "لوحة التحكم");
    }
}

// =============================================================================
// Dispatch
// =============================================================================

mod dispatch {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn delete_action_navigates_and_cancels_default() {
        let (page, _, dash) = setup(MemoryPage::new(), MockApi::new());
        let action = Action::from_attributes(
            ActionName::DeleteOrder,
            lookup(&[("order-id", "9"), ("order-status", "shipped")]),
        )
        .unwrap();

        assert_eq!(block_on(dash.dispatch(action)), Flow::Cancel);
        assert_eq!(page.state().navigations, vec!["/delete_order/9"]);
    }

    #[test]
    fn stock_action_posts_update() {
        let (_, api, dash) = setup(MemoryPage::new(), MockApi::new().answering(true, "ok"));
        let action = Action::from_attributes(
            ActionName::UpdateStock,
            lookup(&[
                ("category", "shoes"),
                ("product-id", "17"),
                ("color", "red"),
                ("size", "42"),
                ("change", "5"),
            ]),
        )
        .unwrap();

        block_on(dash.dispatch(action));
        assert_eq!(api.calls(), vec![Call::UpdateInventory(shoe_update())]);
    }

    #[test]
    fn row_status_action_guards_delivered() {
        let (page, api, dash) = setup(MemoryPage::new(), MockApi::new().answering(true, "ok"));
        let action = Action::from_attributes(
            ActionName::UpdateStatus,
            lookup(&[
                ("order-id", "#1042"),
                ("status", "pending"),
                ("current-status", "تم التوصيل"),
            ]),
        )
        .unwrap();

        block_on(dash.dispatch(action));
        assert!(api.calls().is_empty());
        assert_eq!(page.state().alerts, vec![messages::DELIVERED_IS_FINAL]);
    }

    #[test]
    fn variant_and_search_actions() {
        let (page, _, dash) = setup(
            catalog_page().with_variant_form().with_search("boot"),
            MockApi::new(),
        );

        block_on(dash.dispatch(Action::AddVariant));
        block_on(dash.dispatch(Action::AddVariant));
        block_on(dash.dispatch(Action::RemoveVariant { id: 0 }));
        assert_eq!(page.variant_row_ids(), vec!["variant-1"]);

        assert_eq!(block_on(dash.dispatch(Action::FilterProducts)), Flow::Proceed);
        assert_eq!(page.visible_products(), vec![1]);
    }
}
