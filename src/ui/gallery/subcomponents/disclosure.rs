// SPDX-License-Identifier: MPL-2.0
//! Incremental disclosure of catalog items.
//!
//! The controller owns the visible subset of a fixed catalog and reveals
//! more of it in batches. A reveal is split in two steps: [`request_more`]
//! moves the state to `Loading` and hands out a [`RevealTicket`], and
//! [`complete_reveal`] appends the batch once the caller's deferred
//! continuation fires. Only the ticket handed out last is honored, so a
//! continuation that outlives its controller (or a superseded one) cannot
//! mutate anything.
//!
//! [`request_more`]: DisclosureController::request_more
//! [`complete_reveal`]: DisclosureController::complete_reveal

use crate::catalog::{ensure_unique_ids, Catalog, CatalogError, CatalogItem, ItemId};
use crate::ui::state::BatchSize;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Source of controller session ids. Never reused within a process.
static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Where the controller is in its reveal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisclosureState {
    #[default]
    Idle,
    /// A reveal was requested and its continuation has not fired yet.
    Loading,
    /// Every catalog item is visible. Terminal.
    Exhausted,
}

/// Identifies one pending reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealTicket {
    session: u64,
    sequence: u64,
}

/// Result of completing a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// `count` items were appended; `exhausted` tells whether the catalog ran out.
    Appended { count: usize, exhausted: bool },
    /// Nothing was left to reveal; the controller is now exhausted.
    NothingLeft,
    /// The ticket was stale or no reveal was pending. Nothing changed.
    Ignored,
}

/// Messages for the disclosure sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user asked for more items.
    RequestMore,
    /// The deferred continuation for `ticket` fired.
    RevealReady(RevealTicket),
}

/// Effects produced by the disclosure sub-component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The caller must deliver `Message::RevealReady(ticket)` later.
    ScheduleReveal(RevealTicket),
    /// A reveal finished.
    Revealed(RevealOutcome),
}

/// Owns the visible items and the reveal state machine.
#[derive(Debug, Clone)]
pub struct DisclosureController {
    catalog: Arc<Catalog>,
    visible: Vec<CatalogItem>,
    visible_ids: HashSet<ItemId>,
    state: DisclosureState,
    batch_size: BatchSize,
    session: u64,
    next_sequence: u64,
    pending: Option<RevealTicket>,
}

impl DisclosureController {
    /// Starts with the first `seed_len` catalog items visible.
    pub fn from_prefix(
        catalog: Arc<Catalog>,
        seed_len: usize,
        batch_size: BatchSize,
    ) -> Result<Self, CatalogError> {
        let seed = catalog.prefix(seed_len)?;
        Self::with_seed(catalog, seed, batch_size)
    }

    /// Starts with `seed` visible, ahead of any catalog item.
    ///
    /// Seed items whose id also appears in the catalog count as already
    /// revealed.
    pub fn with_seed(
        catalog: Arc<Catalog>,
        seed: Vec<CatalogItem>,
        batch_size: BatchSize,
    ) -> Result<Self, CatalogError> {
        ensure_unique_ids(&seed)?;
        let visible_ids: HashSet<ItemId> = seed.iter().map(|item| item.id).collect();

        let mut controller = Self {
            catalog,
            visible: seed,
            visible_ids,
            state: DisclosureState::Idle,
            batch_size,
            session: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            next_sequence: 0,
            pending: None,
        };
        if controller.remaining() == 0 {
            controller.state = DisclosureState::Exhausted;
        }
        Ok(controller)
    }

    /// Handle a disclosure message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::RequestMore => match self.request_more() {
                Some(ticket) => Effect::ScheduleReveal(ticket),
                None => Effect::None,
            },
            Message::RevealReady(ticket) => match self.complete_reveal(ticket) {
                RevealOutcome::Ignored => Effect::None,
                outcome => Effect::Revealed(outcome),
            },
        }
    }

    /// Enters `Loading` and returns the ticket the continuation must carry.
    ///
    /// Returns `None` while loading or once exhausted.
    pub fn request_more(&mut self) -> Option<RevealTicket> {
        if self.state != DisclosureState::Idle {
            log::trace!("reveal request ignored in state {:?}", self.state);
            return None;
        }

        let ticket = RevealTicket {
            session: self.session,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.pending = Some(ticket);
        self.state = DisclosureState::Loading;
        log::debug!(
            "reveal requested ({} visible, {} remaining)",
            self.visible.len(),
            self.remaining()
        );
        Some(ticket)
    }

    /// Appends the next batch if `ticket` is the pending one.
    pub fn complete_reveal(&mut self, ticket: RevealTicket) -> RevealOutcome {
        if self.state != DisclosureState::Loading || self.pending != Some(ticket) {
            log::trace!("stale reveal ticket {:?} dropped", ticket);
            return RevealOutcome::Ignored;
        }
        self.pending = None;

        let batch: Vec<CatalogItem> = self
            .catalog
            .items()
            .iter()
            .filter(|item| !self.visible_ids.contains(&item.id))
            .take(self.batch_size.value())
            .cloned()
            .collect();

        if batch.is_empty() {
            self.state = DisclosureState::Exhausted;
            log::debug!("reveal found nothing left; gallery exhausted");
            return RevealOutcome::NothingLeft;
        }

        let count = batch.len();
        for item in batch {
            self.visible_ids.insert(item.id);
            self.visible.push(item);
        }

        let exhausted = self.remaining() == 0;
        self.state = if exhausted {
            DisclosureState::Exhausted
        } else {
            DisclosureState::Idle
        };
        log::debug!(
            "revealed {} item(s), {} visible, state {:?}",
            count,
            self.visible.len(),
            self.state
        );
        RevealOutcome::Appended { count, exhausted }
    }

    /// Requests and completes a reveal in one step.
    pub fn reveal_now(&mut self) -> RevealOutcome {
        match self.request_more() {
            Some(ticket) => self.complete_reveal(ticket),
            None => RevealOutcome::Ignored,
        }
    }

    #[must_use]
    pub fn visible(&self) -> &[CatalogItem] {
        &self.visible
    }

    /// Number of visible items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn state(&self) -> DisclosureState {
        self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == DisclosureState::Loading
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == DisclosureState::Exhausted
    }

    /// Catalog items not yet visible.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.catalog
            .items()
            .iter()
            .filter(|item| !self.visible_ids.contains(&item.id))
            .count()
    }

    #[must_use]
    pub fn batch_size(&self) -> BatchSize {
        self.batch_size
    }

    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&CatalogItem> {
        if !self.visible_ids.contains(&id) {
            return None;
        }
        self.visible.iter().find(|item| item.id == id)
    }
}
