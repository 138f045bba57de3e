//! Target resolution for remote commands
//!
//! Turns the match fields of a payload into an ordered, de-duplicated list
//! of live window ids. Tab matches expand to their member windows. Stale
//! references are dropped silently. An empty result is valid; whether zero
//! targets is acceptable is left to the command.

use crate::inventory::{Inventory, WindowId};
use weft_core::Result;

/// Resolve the windows a command applies to.
///
/// With `all` set, every live window is selected. Otherwise window and tab
/// match expressions contribute targets, and when both are absent the
/// currently active window is the sole target.
pub fn resolve_targets(
    inventory: &Inventory,
    match_window: Option<&str>,
    match_tab: Option<&str>,
    all: bool,
) -> Result<Vec<WindowId>> {
    let mut targets: Vec<WindowId> = Vec::new();

    if all {
        targets.extend(inventory.windows().map(|w| w.id));
    } else {
        if let Some(expr) = match_window {
            targets.extend(inventory.match_windows(expr)?);
        }
        if let Some(expr) = match_tab {
            for tab in inventory.match_tabs(expr)? {
                targets.extend(inventory.tab_windows(tab));
            }
        }
        if match_window.is_none() && match_tab.is_none() {
            targets.extend(inventory.active_window());
        }
    }

    // De-duplicate preserving first occurrence, dropping stale ids
    let mut seen = std::collections::BTreeSet::new();
    targets.retain(|id| inventory.window(*id).is_some() && seen.insert(*id));
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::ColorTable;

    fn sample() -> Inventory {
        let mut inv = Inventory::new();
        let tab = inv.add_tab("main");
        inv.add_window(tab, "shell", ColorTable::startup_defaults());
        inv.add_window(tab, "logs", ColorTable::startup_defaults());
        let tab2 = inv.add_tab("editor");
        inv.add_window(tab2, "vim", ColorTable::startup_defaults());
        inv
    }

    #[test]
    fn test_defaults_to_active_window() {
        let inv = sample();
        let targets = resolve_targets(&inv, None, None, false).unwrap();
        assert_eq!(targets, vec![WindowId(3)]);
    }

    #[test]
    fn test_all_selects_every_window() {
        let inv = sample();
        let targets = resolve_targets(&inv, None, None, true).unwrap();
        assert_eq!(targets, vec![WindowId(1), WindowId(2), WindowId(3)]);
    }

    #[test]
    fn test_tab_match_expands_to_members() {
        let inv = sample();
        let targets = resolve_targets(&inv, None, Some("title:main"), false).unwrap();
        assert_eq!(targets, vec![WindowId(1), WindowId(2)]);
    }

    #[test]
    fn test_window_and_tab_matches_deduplicate() {
        let inv = sample();
        let targets = resolve_targets(&inv, Some("id:1"), Some("title:main"), false).unwrap();
        assert_eq!(targets, vec![WindowId(1), WindowId(2)]);
    }

    #[test]
    fn test_stale_windows_dropped() {
        let mut inv = sample();
        inv.close_window(WindowId(2));
        let targets = resolve_targets(&inv, None, Some("title:main"), false).unwrap();
        assert_eq!(targets, vec![WindowId(1)]);
    }

    #[test]
    fn test_empty_match_is_not_an_error() {
        let inv = sample();
        let targets = resolve_targets(&inv, Some("title:nonexistent"), None, false).unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn test_bad_expression_is_an_error() {
        let inv = sample();
        assert!(resolve_targets(&inv, Some("garbage"), None, false).is_err());
    }

    #[test]
    fn test_empty_inventory_has_no_targets() {
        let mut inv = Inventory::new();
        inv.add_tab("empty");
        let targets = resolve_targets(&inv, None, None, false).unwrap();
        assert!(targets.is_empty());
    }
}
