//! Host process state

use crate::colors::{ColorMap, ColorTable};
use crate::inventory::{Inventory, TabId, WindowId};
use crate::notify::Notifier;

/// All mutable state of the running host, plus the immutable startup color
/// snapshot captured once at initialization.
///
/// Single-owner and single-threaded: commands run to completion inside the
/// host's event loop, so no locking is needed.
#[derive(Debug)]
pub struct Host {
    pub inventory: Inventory,
    /// Shared configured colors, applied to new windows
    pub configured: ColorTable,
    pub notifier: Notifier,
    /// Colors at process startup; never reinitialized
    startup_colors: ColorMap,
}

impl Host {
    /// Build a host around the configured color table, capturing the startup
    /// snapshot before anything can mutate it.
    pub fn new(configured: ColorTable) -> Self {
        let startup_colors = configured.snapshot();
        Self {
            inventory: Inventory::new(),
            configured,
            notifier: Notifier::new(),
            startup_colors,
        }
    }

    /// The immutable startup color snapshot.
    pub fn startup_colors(&self) -> &ColorMap {
        &self.startup_colors
    }

    /// Create a window seeded with the current configured colors.
    pub fn new_window(&mut self, tab: TabId, title: impl Into<String>) -> WindowId {
        self.inventory
            .add_window(tab, title, self.configured.clone())
    }
}
