//! Disclosure-with-data state holder
//!
//! Tracks whether an overlay or panel is visible and which item it is
//! currently operating on. One instance belongs to one rendered screen;
//! shells build it while handling a request and hand it to the template.

use serde::Serialize;

/// Visibility flag plus the item currently being acted upon.
///
/// `open_with` stores the payload and shows the panel in one step;
/// `close` hides the panel and drops the payload. There is no state in
/// which the panel is visible without a payload.
#[derive(Debug, Clone, Serialize)]
pub struct Disclosure<T> {
    visible: bool,
    item: Option<T>,
}

impl<T> Disclosure<T> {
    /// Create a closed disclosure with no item
    pub fn new() -> Self {
        Self {
            visible: false,
            item: None,
        }
    }

    /// Show the panel with the given item
    pub fn open_with(&mut self, item: T) {
        self.item = Some(item);
        self.visible = true;
    }

    /// Hide the panel and clear the item
    pub fn close(&mut self) {
        self.item = None;
        self.visible = false;
    }

    /// Whether the panel is visible
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// The item currently being acted upon, if any
    pub fn current(&self) -> Option<&T> {
        self.item.as_ref()
    }
}

impl<T> Default for Disclosure<T> {
    fn default() -> Self {
        Self::new()
    }
}
