//! Redraw notification queue
//!
//! Commands queue notifications after mutation; the event loop drains the
//! queue and drives the redraw subsystem. Queueing the same notification
//! twice is a no-op, so callers may notify unconditionally.

use crate::inventory::WindowId;

/// A per-window notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window's default background changed. Always delivered before the
    /// window's refresh so redraw logic observes the new background first.
    BackgroundChanged(WindowId),
    /// The window should repaint.
    Refresh(WindowId),
}

/// Ordered, coalescing notification queue.
#[derive(Debug, Default)]
pub struct Notifier {
    queue: Vec<WindowEvent>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a background-change notification for a window.
    pub fn background_changed(&mut self, id: WindowId) {
        self.push(WindowEvent::BackgroundChanged(id));
    }

    /// Queue a refresh notification for a window.
    pub fn refresh(&mut self, id: WindowId) {
        self.push(WindowEvent::Refresh(id));
    }

    fn push(&mut self, event: WindowEvent) {
        if !self.queue.contains(&event) {
            self.queue.push(event);
        }
    }

    /// Pending notifications in delivery order.
    pub fn queued(&self) -> &[WindowEvent] {
        &self.queue
    }

    /// Take all pending notifications.
    pub fn drain(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.queue)
    }
}
