//! Live window and tab inventory
//!
//! Windows and tabs are owned by the host process and referenced by id.
//! Match expressions (`all`, `id:N`, `title:TEXT`) select them without the
//! caller ever holding a direct reference.

use crate::colors::ColorTable;
use std::collections::BTreeMap;
use weft_core::{CommandError, Result};

/// Identifier for a live window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

/// Identifier for a live tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TabId(pub u64);

/// A live window. Owns its color table.
#[derive(Debug, Clone)]
pub struct Window {
    pub id: WindowId,
    pub tab: TabId,
    pub title: String,
    pub colors: ColorTable,
}

/// A live tab grouping windows.
#[derive(Debug, Clone)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    /// Member windows in creation order; may hold ids of windows that have
    /// since closed, which lookups drop silently.
    pub windows: Vec<WindowId>,
}

/// A parsed match expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchExpr {
    All,
    Id(u64),
    Title(String),
}

impl MatchExpr {
    /// Parse `all`, `id:N`, or `title:TEXT`.
    pub fn parse(expr: &str) -> Result<Self> {
        let expr = expr.trim();
        if expr == "all" {
            return Ok(MatchExpr::All);
        }
        let Some((field, query)) = expr.split_once(':') else {
            return Err(CommandError::Host(format!(
                "invalid match expression '{expr}', expected FIELD:QUERY"
            )));
        };
        match field {
            "id" => query
                .parse::<u64>()
                .map(MatchExpr::Id)
                .map_err(|_| CommandError::Host(format!("invalid id in match expression '{expr}'"))),
            "title" => Ok(MatchExpr::Title(query.to_string())),
            _ => Err(CommandError::Host(format!(
                "unknown match field '{field}' in '{expr}'"
            ))),
        }
    }
}

/// The host's window/tab inventory.
#[derive(Debug, Default)]
pub struct Inventory {
    windows: BTreeMap<WindowId, Window>,
    tabs: BTreeMap<TabId, Tab>,
    active_window: Option<WindowId>,
    active_tab: Option<TabId>,
    next_window_id: u64,
    next_tab_id: u64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tab. The first tab becomes active.
    pub fn add_tab(&mut self, title: impl Into<String>) -> TabId {
        self.next_tab_id += 1;
        let id = TabId(self.next_tab_id);
        self.tabs.insert(
            id,
            Tab {
                id,
                title: title.into(),
                windows: Vec::new(),
            },
        );
        if self.active_tab.is_none() {
            self.active_tab = Some(id);
        }
        id
    }

    /// Create a window in a tab and focus it.
    pub fn add_window(
        &mut self,
        tab: TabId,
        title: impl Into<String>,
        colors: ColorTable,
    ) -> WindowId {
        self.next_window_id += 1;
        let id = WindowId(self.next_window_id);
        self.windows.insert(
            id,
            Window {
                id,
                tab,
                title: title.into(),
                colors,
            },
        );
        if let Some(t) = self.tabs.get_mut(&tab) {
            t.windows.push(id);
        }
        self.active_window = Some(id);
        self.active_tab = Some(tab);
        id
    }

    /// Close a window. Its id stays in the owning tab's member list and is
    /// dropped lazily during resolution.
    pub fn close_window(&mut self, id: WindowId) {
        self.windows.remove(&id);
        if self.active_window == Some(id) {
            self.active_window = self.windows.keys().next_back().copied();
        }
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// All live windows in creation order.
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.active_window
    }

    pub fn active_tab(&self) -> Option<TabId> {
        self.active_tab
    }

    /// Windows selected by a match expression, in creation order.
    pub fn match_windows(&self, expr: &str) -> Result<Vec<WindowId>> {
        let expr = MatchExpr::parse(expr)?;
        let matched = self
            .windows
            .values()
            .filter(|w| match &expr {
                MatchExpr::All => true,
                MatchExpr::Id(id) => w.id.0 == *id,
                MatchExpr::Title(query) => w.title.contains(query.as_str()),
            })
            .map(|w| w.id)
            .collect();
        Ok(matched)
    }

    /// Tabs selected by a match expression, in creation order.
    pub fn match_tabs(&self, expr: &str) -> Result<Vec<TabId>> {
        let expr = MatchExpr::parse(expr)?;
        let matched = self
            .tabs
            .values()
            .filter(|t| match &expr {
                MatchExpr::All => true,
                MatchExpr::Id(id) => t.id.0 == *id,
                MatchExpr::Title(query) => t.title.contains(query.as_str()),
            })
            .map(|t| t.id)
            .collect();
        Ok(matched)
    }

    /// Member windows of a tab that are still alive.
    pub fn tab_windows(&self, id: TabId) -> Vec<WindowId> {
        self.tabs
            .get(&id)
            .map(|t| {
                t.windows
                    .iter()
                    .filter(|w| self.windows.contains_key(w))
                    .copied()
                    .collect()
            })
            .unwrap_or_default()
    }
}
