// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard routing depends on page resources rather than on the screen: the
//! Escape key is only listened to while something registered a dismissal
//! listener (the certificate preview).

use super::Message;
use crate::ui::gallery::component;
use crate::ui::gallery::subcomponents::preview::{self, PageResources};
use iced::{event, keyboard, Event, Subscription};

/// Escape listener, active only while a dismissal listener is registered.
pub fn create_dismiss_subscription(resources: &PageResources) -> Subscription<Message> {
    if !resources.is_listening_for_dismiss() {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| {
        if is_dismiss_key(&event) {
            Some(Message::Gallery(component::Message::Preview(
                preview::Message::DismissKey,
            )))
        } else {
            None
        }
    })
}

/// Gallery-owned subscriptions (spinner animation), if the gallery is mounted.
pub fn create_gallery_subscription(gallery: Option<&component::State>) -> Subscription<Message> {
    gallery.map_or_else(Subscription::none, |state| {
        state.subscription().map(Message::Gallery)
    })
}

fn is_dismiss_key(event: &Event) -> bool {
    matches!(
        event,
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        })
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::mouse;

    #[test]
    fn mouse_events_are_not_dismiss_keys() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(!is_dismiss_key(&event));
    }

    #[test]
    fn window_events_are_not_dismiss_keys() {
        let event = Event::Window(iced::window::Event::Focused);
        assert!(!is_dismiss_key(&event));
    }
}
