// SPDX-License-Identifier: MPL-2.0
//! Certificate gallery component encapsulating state and update logic.
//!
//! The component owns the two gallery controllers and turns their effects
//! into Iced tasks: a scheduled reveal becomes a timer whose completion is
//! delivered back as [`disclosure::Message::RevealReady`].

use crate::catalog::{data, Catalog, ItemId};
use crate::config::GalleryConfig;
use crate::error::Result;
use crate::ui::gallery::subcomponents::disclosure::{
    self, DisclosureController, RevealOutcome, RevealTicket,
};
use crate::ui::gallery::subcomponents::preview::{self, PageResources, PreviewOverlay};
use crate::ui::state::RevealDelay;
use crate::ui::widgets::animated_spinner;
use iced::{time, Subscription, Task};
use std::sync::Arc;
use std::time::Duration;

/// Spinner animation period while a reveal is pending.
const SPINNER_FRAME: Duration = Duration::from_millis(16);

/// Messages emitted by the gallery widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Disclosure(disclosure::Message),
    Preview(preview::Message),
    /// A card was selected. Resolved against the visible items.
    OpenPreview(ItemId),
    SpinnerTick,
}

impl Message {
    /// Shorthand for the "expand collection" button.
    #[must_use]
    pub fn request_more() -> Self {
        Message::Disclosure(disclosure::Message::RequestMore)
    }

    /// Shorthand for selecting a card.
    #[must_use]
    pub fn open(id: ItemId) -> Self {
        Message::OpenPreview(id)
    }
}

/// Complete gallery state. Dropped when the certificates screen unmounts.
#[derive(Debug)]
pub struct State {
    disclosure: DisclosureController,
    preview: PreviewOverlay,
    reveal_delay: RevealDelay,
    spinner_rotation: f32,
}

impl State {
    /// Builds the gallery over the bundled certificate data.
    pub fn new(resources: PageResources, config: &GalleryConfig) -> Result<Self> {
        let catalog = Arc::new(data::archive_catalog()?);
        let disclosure = DisclosureController::with_seed(
            catalog,
            data::seed_certificates(),
            config.batch_size(),
        )?;
        Ok(Self::from_parts(
            disclosure,
            PreviewOverlay::new(resources),
            config.reveal_delay(),
        ))
    }

    /// Builds the gallery over an arbitrary catalog with a prefix seed.
    pub fn with_catalog(
        catalog: Catalog,
        seed_len: usize,
        resources: PageResources,
        config: &GalleryConfig,
    ) -> Result<Self> {
        let disclosure =
            DisclosureController::from_prefix(Arc::new(catalog), seed_len, config.batch_size())?;
        Ok(Self::from_parts(
            disclosure,
            PreviewOverlay::new(resources),
            config.reveal_delay(),
        ))
    }

    fn from_parts(
        disclosure: DisclosureController,
        preview: PreviewOverlay,
        reveal_delay: RevealDelay,
    ) -> Self {
        Self {
            disclosure,
            preview,
            reveal_delay,
            spinner_rotation: 0.0,
        }
    }

    pub fn handle(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Disclosure(disclosure::Message::RequestMore)
                if self.reveal_delay.is_immediate() =>
            {
                log_reveal(self.disclosure.reveal_now());
                Task::none()
            }
            Message::Disclosure(msg) => match self.disclosure.handle(msg) {
                disclosure::Effect::ScheduleReveal(ticket) => {
                    self.spinner_rotation = 0.0;
                    Task::perform(
                        wait_for_reveal(self.reveal_delay.as_duration(), ticket),
                        |ticket| Message::Disclosure(disclosure::Message::RevealReady(ticket)),
                    )
                }
                disclosure::Effect::Revealed(outcome) => {
                    log_reveal(outcome);
                    Task::none()
                }
                disclosure::Effect::None => Task::none(),
            },
            Message::Preview(msg) => {
                self.preview.handle(msg);
                Task::none()
            }
            Message::OpenPreview(id) => {
                match self.disclosure.find(id) {
                    Some(item) => self.preview.open(item.clone()),
                    None => log::warn!("Ignoring preview request for hidden item {}", id),
                }
                Task::none()
            }
            Message::SpinnerTick => {
                if self.disclosure.is_loading() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
                Task::none()
            }
        }
    }

    /// Spinner animation, only while a reveal is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.disclosure.is_loading() {
            time::every(SPINNER_FRAME).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    #[must_use]
    pub fn disclosure(&self) -> &DisclosureController {
        &self.disclosure
    }

    #[must_use]
    pub fn preview(&self) -> &PreviewOverlay {
        &self.preview
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

fn log_reveal(outcome: RevealOutcome) {
    match outcome {
        RevealOutcome::Appended {
            count,
            exhausted: true,
        } => log::info!("Revealed the last {} certificate(s)", count),
        RevealOutcome::Appended { count, .. } => log::debug!("Revealed {} certificate(s)", count),
        RevealOutcome::NothingLeft => log::info!("No certificates left to reveal"),
        RevealOutcome::Ignored => {}
    }
}

/// Resolves to `ticket` once `delay` has elapsed.
pub async fn wait_for_reveal(delay: Duration, ticket: RevealTicket) -> RevealTicket {
    tokio::time::sleep(delay).await;
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;
    use crate::ui::gallery::subcomponents::disclosure::DisclosureState;

    fn config(batch_size: usize, reveal_delay_ms: u64) -> GalleryConfig {
        GalleryConfig {
            batch_size: Some(batch_size),
            reveal_delay_ms: Some(reveal_delay_ms),
        }
    }

    fn small_catalog(len: u32) -> Catalog {
        let items = (1..=len)
            .map(|id| CatalogItem::new(id, format!("Item {id}"), "Test", format!("{id}.png")))
            .collect();
        Catalog::new(items).expect("unique ids")
    }

    /// Pulls the ticket out of the controller by requesting directly.
    fn pending_ticket(state: &mut State) -> RevealTicket {
        state
            .disclosure
            .request_more()
            .expect("controller should accept the request")
    }

    #[test]
    fn bundled_gallery_starts_with_seed_visible() {
        let state = State::new(PageResources::new(), &GalleryConfig::default())
            .expect("bundled data is valid");
        let ids: Vec<_> = state.disclosure().visible().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(state.disclosure().state(), DisclosureState::Idle);
        assert!(!state.preview().is_open());
    }

    #[test]
    fn delayed_request_enters_loading() {
        let mut state =
            State::with_catalog(small_catalog(5), 1, PageResources::new(), &config(2, 800))
                .expect("valid catalog");
        let _task = state.handle(Message::request_more());
        assert!(state.disclosure().is_loading());
        assert_eq!(state.disclosure().count(), 1);

        // A second press while loading changes nothing
        let _task = state.handle(Message::request_more());
        assert!(state.disclosure().is_loading());
        assert_eq!(state.disclosure().count(), 1);
    }

    #[test]
    fn zero_delay_reveals_synchronously() {
        let mut state =
            State::with_catalog(small_catalog(5), 1, PageResources::new(), &config(2, 0))
                .expect("valid catalog");
        let _task = state.handle(Message::request_more());
        assert_eq!(state.disclosure().count(), 3);
        assert_eq!(state.disclosure().state(), DisclosureState::Idle);
    }

    #[test]
    fn reveal_ready_appends_batch() {
        let mut state =
            State::with_catalog(small_catalog(3), 1, PageResources::new(), &config(2, 800))
                .expect("valid catalog");
        let ticket = pending_ticket(&mut state);
        let _task = state.handle(Message::Disclosure(disclosure::Message::RevealReady(ticket)));
        assert_eq!(state.disclosure().count(), 3);
        assert!(state.disclosure().is_exhausted());
    }

    #[test]
    fn ticket_from_previous_mount_is_ignored() {
        let resources = PageResources::new();
        let mut old =
            State::with_catalog(small_catalog(5), 1, resources.clone(), &config(2, 800))
                .expect("valid catalog");
        let stale = pending_ticket(&mut old);
        drop(old);

        let mut fresh = State::with_catalog(small_catalog(5), 1, resources, &config(2, 800))
            .expect("valid catalog");
        let _task = fresh.handle(Message::request_more());
        let _task = fresh.handle(Message::Disclosure(disclosure::Message::RevealReady(stale)));
        assert_eq!(fresh.disclosure().count(), 1);
        assert!(fresh.disclosure().is_loading());
    }

    #[test]
    fn spinner_only_turns_while_loading() {
        let mut state =
            State::with_catalog(small_catalog(5), 1, PageResources::new(), &config(2, 800))
                .expect("valid catalog");
        let _task = state.handle(Message::SpinnerTick);
        assert_eq!(state.spinner_rotation(), 0.0);

        let _task = state.handle(Message::request_more());
        let _task = state.handle(Message::SpinnerTick);
        assert!(state.spinner_rotation() > 0.0);
    }

    #[test]
    fn opening_preview_locks_page_until_closed() {
        let resources = PageResources::new();
        let mut state = State::new(resources.clone(), &GalleryConfig::default())
            .expect("bundled data is valid");
        let item = state.disclosure().visible()[0].clone();

        let _task = state.handle(Message::open(item.id));
        assert!(resources.is_scroll_locked());
        assert!(resources.is_listening_for_dismiss());

        let _task = state.handle(Message::Preview(preview::Message::SurfacePressed));
        assert!(state.preview().is_open());

        let _task = state.handle(Message::Preview(preview::Message::DismissKey));
        assert!(!state.preview().is_open());
        assert!(!resources.is_scroll_locked());
        assert!(!resources.is_listening_for_dismiss());
    }

    #[test]
    fn unmounting_with_open_preview_releases_page() {
        let resources = PageResources::new();
        let mut state = State::new(resources.clone(), &GalleryConfig::default())
            .expect("bundled data is valid");
        let item = state.disclosure().visible()[1].clone();
        let _task = state.handle(Message::open(item.id));
        assert_eq!(resources.scroll_lock_holders(), 1);

        drop(state);
        assert_eq!(resources.scroll_lock_holders(), 0);
        assert_eq!(resources.dismiss_listener_count(), 0);
    }

    #[test]
    fn opening_a_hidden_item_is_ignored() {
        let resources = PageResources::new();
        let mut state = State::with_catalog(small_catalog(5), 1, resources.clone(), &config(2, 0))
            .expect("valid catalog");

        let _task = state.handle(Message::open(3));
        assert!(!state.preview().is_open());
        assert!(!resources.is_scroll_locked());

        let _task = state.handle(Message::request_more());
        let _task = state.handle(Message::open(3));
        assert_eq!(state.preview().binding().map(|item| item.id), Some(3));
        assert_eq!(resources.scroll_lock_holders(), 1);
    }

    #[test]
    fn final_batch_leaves_gallery_settled() {
        let mut state =
            State::with_catalog(small_catalog(3), 1, PageResources::new(), &config(2, 800))
                .expect("valid catalog");
        let ticket = pending_ticket(&mut state);
        let _task = state.handle(Message::Disclosure(disclosure::Message::RevealReady(ticket)));
        assert!(state.disclosure().is_exhausted());

        let _task = state.handle(Message::request_more());
        let _task = state.handle(Message::SpinnerTick);
        assert!(state.disclosure().is_exhausted());
        assert_eq!(state.spinner_rotation(), 0.0);
        assert_eq!(state.disclosure().count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_for_reveal_fires_after_delay() {
        let mut state =
            State::with_catalog(small_catalog(5), 1, PageResources::new(), &config(2, 800))
                .expect("valid catalog");
        let ticket = pending_ticket(&mut state);

        let start = tokio::time::Instant::now();
        let returned = wait_for_reveal(Duration::from_millis(800), ticket).await;
        assert_eq!(returned, ticket);
        assert!(start.elapsed() >= Duration::from_millis(800));
    }
}
