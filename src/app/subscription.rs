// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use crate::config::defaults::NOTIFICATION_TICK_MS;
use crate::ui::navbar;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Escape closes the navbar menu unless a widget already used the key.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::Navbar(navbar::Message::CloseMenu)),
            _ => None,
        }
    })
}

/// Drives toast timers while any toast is alive.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Refreshes the departure countdown once per second while it is shown.
pub fn create_countdown_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_secs(1)).map(|_| Message::CountdownTick)
    } else {
        Subscription::none()
    }
}
