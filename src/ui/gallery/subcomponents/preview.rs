// SPDX-License-Identifier: MPL-2.0
//! Fullscreen single-item preview.
//!
//! While a preview is bound the overlay holds two page-wide resources: the
//! scroll-lock that freezes the gallery behind it and the dismissal-key
//! listener. Both are RAII guards, so closing the preview or dropping the
//! overlay (the gallery unmounting) releases them.

use crate::catalog::CatalogItem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Page-wide resources shared by everything rendered in the window.
#[derive(Debug, Clone, Default)]
pub struct PageResources {
    scroll_locks: Arc<AtomicUsize>,
    dismiss_listeners: Arc<AtomicUsize>,
}

impl PageResources {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Freezes background scrolling until the guard is dropped.
    #[must_use]
    pub fn lock_scroll(&self) -> ScrollLock {
        self.scroll_locks.fetch_add(1, Ordering::SeqCst);
        ScrollLock {
            holders: Arc::clone(&self.scroll_locks),
        }
    }

    /// Registers interest in the dismissal key until the guard is dropped.
    #[must_use]
    pub fn listen_for_dismiss(&self) -> DismissListener {
        self.dismiss_listeners.fetch_add(1, Ordering::SeqCst);
        DismissListener {
            listeners: Arc::clone(&self.dismiss_listeners),
        }
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock_holders() > 0
    }

    #[must_use]
    pub fn scroll_lock_holders(&self) -> usize {
        self.scroll_locks.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_listening_for_dismiss(&self) -> bool {
        self.dismiss_listener_count() > 0
    }

    #[must_use]
    pub fn dismiss_listener_count(&self) -> usize {
        self.dismiss_listeners.load(Ordering::SeqCst)
    }
}

/// Held while background scrolling is suppressed.
#[derive(Debug)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Held while the dismissal key should close the preview.
#[derive(Debug)]
pub struct DismissListener {
    listeners: Arc<AtomicUsize>,
}

impl Drop for DismissListener {
    fn drop(&mut self) {
        self.listeners.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Messages for the preview sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close button was pressed.
    CloseRequested,
    /// A press landed on the dimmed backdrop.
    BackdropPressed,
    /// A press landed on the content surface. Never reaches the backdrop.
    SurfacePressed,
    /// The dismissal key was pressed.
    DismissKey,
}

/// Effects produced by the preview sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Closed,
}

/// Preview binding plus the resources it holds while bound.
#[derive(Debug)]
pub struct PreviewOverlay {
    resources: PageResources,
    binding: Option<CatalogItem>,
    scroll_lock: Option<ScrollLock>,
    dismiss_listener: Option<DismissListener>,
}

impl PreviewOverlay {
    #[must_use]
    pub fn new(resources: PageResources) -> Self {
        Self {
            resources,
            binding: None,
            scroll_lock: None,
            dismiss_listener: None,
        }
    }

    /// Handle a preview message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::CloseRequested | Message::BackdropPressed => self.close_effect(),
            Message::DismissKey => {
                // The listener only exists while open, but key events can be
                // queued behind the close that dropped it.
                if self.dismiss_listener.is_some() {
                    self.close_effect()
                } else {
                    Effect::None
                }
            }
            Message::SurfacePressed => Effect::None,
        }
    }

    /// Binds `item`, replacing any current binding.
    pub fn open(&mut self, item: CatalogItem) {
        log::debug!("preview opened for item {}", item.id);
        self.binding = Some(item);
        if self.scroll_lock.is_none() {
            self.scroll_lock = Some(self.resources.lock_scroll());
        }
        if self.dismiss_listener.is_none() {
            self.dismiss_listener = Some(self.resources.listen_for_dismiss());
        }
    }

    /// Clears the binding and releases held resources.
    ///
    /// Returns `false` if nothing was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.binding.take().is_some();
        self.scroll_lock = None;
        self.dismiss_listener = None;
        if was_open {
            log::debug!("preview closed");
        }
        was_open
    }

    fn close_effect(&mut self) -> Effect {
        if self.close() {
            Effect::Closed
        } else {
            Effect::None
        }
    }

    #[must_use]
    pub fn binding(&self) -> Option<&CatalogItem> {
        self.binding.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.binding.is_some()
    }

    #[must_use]
    pub fn resources(&self) -> &PageResources {
        &self.resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32) -> CatalogItem {
        CatalogItem::new(id, format!("Item {id}"), "Test", format!("{id}.png"))
    }

    #[test]
    fn open_binds_item_and_acquires_resources() {
        let resources = PageResources::new();
        let mut overlay = PreviewOverlay::new(resources.clone());

        overlay.open(item(5));

        assert_eq!(overlay.binding().map(|i| i.id), Some(5));
        assert!(resources.is_scroll_locked());
        assert_eq!(resources.dismiss_listener_count(), 1);
    }

    #[test]
    fn reopening_replaces_binding_without_stacking() {
        let resources = PageResources::new();
        let mut overlay = PreviewOverlay::new(resources.clone());

        overlay.open(item(5));
        overlay.open(item(9));

        assert_eq!(overlay.binding().map(|i| i.id), Some(9));
        assert_eq!(resources.scroll_lock_holders(), 1);
        assert_eq!(resources.dismiss_listener_count(), 1);
    }

    #[test]
    fn close_releases_everything() {
        let resources = PageResources::new();
        let mut overlay = PreviewOverlay::new(resources.clone());
        overlay.open(item(5));

        assert!(overlay.close());
        assert!(overlay.binding().is_none());
        assert!(!resources.is_scroll_locked());
        assert!(!resources.is_listening_for_dismiss());
    }

    #[test]
    fn close_without_open_is_a_noop() {
        let resources = PageResources::new();
        let mut overlay = PreviewOverlay::new(resources.clone());

        assert!(!overlay.close());
        assert!(!overlay.close());
        assert_eq!(resources.scroll_lock_holders(), 0);
        assert_eq!(resources.dismiss_listener_count(), 0);
    }

    #[test]
    fn repeated_cycles_do_not_leak() {
        let resources = PageResources::new();
        let mut overlay = PreviewOverlay::new(resources.clone());

        for id in 0..50 {
            overlay.open(item(id));
            assert_eq!(resources.scroll_lock_holders(), 1);
            overlay.close();
        }
        assert_eq!(resources.scroll_lock_holders(), 0);
        assert_eq!(resources.dismiss_listener_count(), 0);
    }

    #[test]
    fn dropping_an_open_overlay_releases_resources() {
        let resources = PageResources::new();
        {
            let mut overlay = PreviewOverlay::new(resources.clone());
            overlay.open(item(3));
            assert!(resources.is_scroll_locked());
        }
        assert!(!resources.is_scroll_locked());
        assert!(!resources.is_listening_for_dismiss());
    }

    #[test]
    fn surface_press_does_not_close() {
        let mut overlay = PreviewOverlay::new(PageResources::new());
        overlay.open(item(1));

        assert_eq!(overlay.handle(Message::SurfacePressed), Effect::None);
        assert!(overlay.is_open());

        assert_eq!(overlay.handle(Message::BackdropPressed), Effect::Closed);
        assert!(!overlay.is_open());
    }

    #[test]
    fn dismiss_key_closes_only_while_open() {
        let mut overlay = PreviewOverlay::new(PageResources::new());
        assert_eq!(overlay.handle(Message::DismissKey), Effect::None);

        overlay.open(item(1));
        assert_eq!(overlay.handle(Message::DismissKey), Effect::Closed);
        assert_eq!(overlay.handle(Message::DismissKey), Effect::None);
    }

    #[test]
    fn explicit_close_request_closes() {
        let mut overlay = PreviewOverlay::new(PageResources::new());
        overlay.open(item(2));
        assert_eq!(overlay.handle(Message::CloseRequested), Effect::Closed);
        assert_eq!(overlay.handle(Message::CloseRequested), Effect::None);
    }
}
