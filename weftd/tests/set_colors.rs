//! End-to-end tests for the set-colors command against a live host

use std::collections::BTreeMap;
use weft_core::{Request, Value};
use weftd::colors::ColorTable;
use weftd::dispatch::Dispatcher;
use weftd::inventory::WindowId;
use weftd::notify::WindowEvent;
use weftd::state::Host;

fn host_with_one_window() -> (Host, WindowId) {
    let mut host = Host::new(ColorTable::startup_defaults());
    let tab = host.inventory.add_tab("main");
    let window = host.new_window(tab, "shell");
    (host, window)
}

fn color_map(entries: &[(&str, Option<u32>)]) -> Value {
    let map: BTreeMap<String, Value> = entries
        .iter()
        .map(|&(name, value)| (name.to_string(), Value::from(value)))
        .collect();
    Value::Map(map)
}

fn set_colors_request(colors: Value, extra: &[(&str, Value)]) -> Request {
    let mut payload = BTreeMap::new();
    payload.insert("colors".to_string(), colors);
    for (name, value) in extra {
        payload.insert((*name).to_string(), value.clone());
    }
    Request {
        cmd: "set-colors".to_string(),
        payload,
    }
}

#[test]
fn active_window_scenario() {
    // args ["foreground=#ff0000", "background=#000000"], all/configured/reset
    // false, one active window: live changes, configured does not, exactly
    // one background-change and one refresh notification, null response.
    let (mut host, window) = host_with_one_window();
    let dispatcher = Dispatcher::builtin().unwrap();

    let configured_before = host.configured.clone();
    let request = set_colors_request(
        color_map(&[("foreground", Some(0xff0000)), ("background", Some(0x000000))]),
        &[],
    );
    let response = dispatcher.dispatch(&mut host, &request).unwrap();
    assert!(response.is_ok());
    assert!(response.data.is_none());

    let live = &host.inventory.window(window).unwrap().colors;
    assert_eq!(live.get("foreground"), Some(Some(0xff0000)));
    assert_eq!(live.get("background"), Some(Some(0x000000)));
    assert_eq!(host.configured, configured_before);

    let events = host.notifier.drain();
    assert_eq!(
        events,
        vec![
            WindowEvent::BackgroundChanged(window),
            WindowEvent::Refresh(window),
        ]
    );
}

#[test]
fn applying_twice_is_idempotent() {
    let (mut host, window) = host_with_one_window();
    let dispatcher = Dispatcher::builtin().unwrap();
    let request = set_colors_request(color_map(&[("foreground", Some(0x336699))]), &[]);

    assert!(dispatcher.dispatch(&mut host, &request).unwrap().is_ok());
    let first = host.inventory.window(window).unwrap().colors.clone();

    assert!(dispatcher.dispatch(&mut host, &request).unwrap().is_ok());
    let second = host.inventory.window(window).unwrap().colors.clone();
    assert_eq!(first, second);
}

#[test]
fn reset_restores_startup_values() {
    let (mut host, window) = host_with_one_window();
    let dispatcher = Dispatcher::builtin().unwrap();
    let startup = host.startup_colors().clone();

    // Mutate live and configured away from startup
    let mutate = set_colors_request(
        color_map(&[("foreground", Some(0x00ff00)), ("cursor", None)]),
        &[("configured", Value::Bool(true)), ("all", Value::Bool(true))],
    );
    assert!(dispatcher.dispatch(&mut host, &mutate).unwrap().is_ok());
    assert_ne!(host.configured.snapshot(), startup);

    // Reset overrides prior changes with the startup snapshot
    let reset = set_colors_request(
        color_map(&[]),
        &[
            ("reset", Value::Bool(true)),
            ("all", Value::Bool(true)),
            ("configured", Value::Bool(true)),
        ],
    );
    assert!(dispatcher.dispatch(&mut host, &reset).unwrap().is_ok());

    assert_eq!(host.configured.snapshot(), startup);
    assert_eq!(host.inventory.window(window).unwrap().colors.snapshot(), startup);
}

#[test]
fn configured_scope_isolation() {
    let (mut host, window) = host_with_one_window();
    let dispatcher = Dispatcher::builtin().unwrap();

    let request = set_colors_request(color_map(&[("background", Some(0x123456))]), &[]);
    assert!(dispatcher.dispatch(&mut host, &request).unwrap().is_ok());

    let live = &host.inventory.window(window).unwrap().colors;
    assert_eq!(live.get("background"), Some(Some(0x123456)));
    assert_eq!(host.configured.get("background"), Some(Some(0x000000)));
}

#[test]
fn configured_flag_updates_shared_table() {
    let (mut host, _) = host_with_one_window();
    let dispatcher = Dispatcher::builtin().unwrap();

    let request = set_colors_request(
        color_map(&[("background", Some(0x123456))]),
        &[("configured", Value::Bool(true))],
    );
    assert!(dispatcher.dispatch(&mut host, &request).unwrap().is_ok());
    assert_eq!(host.configured.get("background"), Some(Some(0x123456)));
}

#[test]
fn null_clears_live_but_not_configured() {
    let (mut host, window) = host_with_one_window();
    let dispatcher = Dispatcher::builtin().unwrap();

    let request = set_colors_request(
        color_map(&[("cursor", None)]),
        &[("configured", Value::Bool(true))],
    );
    assert!(dispatcher.dispatch(&mut host, &request).unwrap().is_ok());

    let live = &host.inventory.window(window).unwrap().colors;
    assert_eq!(live.get("cursor"), Some(None));
    // The configured table never picks up an implicit null
    assert_eq!(host.configured.get("cursor"), Some(Some(0xcccccc)));
}

#[test]
fn empty_match_is_a_successful_no_op() {
    let (mut host, window) = host_with_one_window();
    let dispatcher = Dispatcher::builtin().unwrap();

    let request = set_colors_request(
        color_map(&[("foreground", Some(0xff0000))]),
        &[("match_window", Value::from("title:nonexistent"))],
    );
    let response = dispatcher.dispatch(&mut host, &request).unwrap();
    assert!(response.is_ok());

    let live = &host.inventory.window(window).unwrap().colors;
    assert_eq!(live.get("foreground"), Some(Some(0xdddddd)));
    assert!(host.notifier.queued().is_empty());
}

#[test]
fn background_notification_precedes_refresh_across_windows() {
    let mut host = Host::new(ColorTable::startup_defaults());
    let tab = host.inventory.add_tab("main");
    let w1 = host.new_window(tab, "one");
    let w2 = host.new_window(tab, "two");
    let dispatcher = Dispatcher::builtin().unwrap();

    let request = set_colors_request(
        color_map(&[("background", Some(0x222222))]),
        &[("all", Value::Bool(true))],
    );
    assert!(dispatcher.dispatch(&mut host, &request).unwrap().is_ok());

    let events = host.notifier.drain();
    for w in [w1, w2] {
        let bg = events
            .iter()
            .position(|e| *e == WindowEvent::BackgroundChanged(w))
            .unwrap();
        let refresh = events
            .iter()
            .position(|e| *e == WindowEvent::Refresh(w))
            .unwrap();
        assert!(bg < refresh);
    }
}

#[test]
fn tab_match_applies_to_member_windows() {
    let mut host = Host::new(ColorTable::startup_defaults());
    let tab1 = host.inventory.add_tab("main");
    let w1 = host.new_window(tab1, "shell");
    let tab2 = host.inventory.add_tab("editor");
    let w2 = host.new_window(tab2, "vim");
    let dispatcher = Dispatcher::builtin().unwrap();

    let request = set_colors_request(
        color_map(&[("foreground", Some(0xabcdef))]),
        &[("match_tab", Value::from("title:main"))],
    );
    assert!(dispatcher.dispatch(&mut host, &request).unwrap().is_ok());

    assert_eq!(
        host.inventory.window(w1).unwrap().colors.get("foreground"),
        Some(Some(0xabcdef))
    );
    assert_eq!(
        host.inventory.window(w2).unwrap().colors.get("foreground"),
        Some(Some(0xdddddd))
    );
}
