// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screen components turn their messages into events; the handlers here turn
//! those events into backend calls, toasts and navigation.

use super::message::Redirect;
use super::{persistence, Message, Screen};
use crate::api::BookingApi;
use crate::config::defaults::REDIRECT_DELAY_MS;
use crate::config::Config;
use crate::domain::User;
use crate::error::{Error, Result};
use crate::forms::booking::{failure_message, BookingForm};
use crate::ui::account::{self, Event as AccountEvent};
use crate::ui::booking_details::{self, Event as DetailsEvent};
use crate::ui::booking_form::{self, Event as BookingFormEvent};
use crate::ui::bookings::{self, Event as BookingsEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Severity};
use crate::ui::scroll_to_top;
use crate::ui::search::{self, Event as SearchEvent};
use crate::ui::theming::ThemeMode;
use chrono::Local;
use iced::Task;
use std::future::Future;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const BOOKING_CREATED: &str = "Booking created successfully!";
pub const BOOKING_CANCELLED: &str = "Booking cancelled successfully!";
pub const CANCEL_FAILED: &str = "Cancellation failed. Please try again.";
pub const DOWNLOAD_PENDING: &str = "Download feature will be implemented soon";
pub const SHARE_COPIED: &str = "Booking URL copied to clipboard";
pub const SHARE_FAILED: &str = "Failed to copy URL";
pub const REGISTERED: &str = "Registration successful! Please sign in.";
pub const SIGNED_OUT: &str = "Signed out";

/// Mutable view of the application state handed to every handler.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub api: Option<&'a BookingApi>,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a PathBuf>,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub scroll_offset: &'a mut f32,
    pub user: &'a mut Option<User>,
    pub search: &'a mut search::State,
    pub booking_form: &'a mut Option<booking_form::State>,
    pub bookings: &'a mut bookings::State,
    pub booking_details: &'a mut booking_details::State,
    pub account: &'a mut account::State,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notifications.notify(message, severity, Instant::now());
    }

    /// Reports a failed backend call when failure toasts are enabled.
    fn notify_failure(&mut self, message: impl Into<String>) {
        if self.config.api.notify_on_failure {
            self.notify(message, Severity::Error);
        }
    }

    /// Runs a backend call on the runtime and maps its result to a message.
    fn perform<T, F, Fut>(
        &self,
        call: F,
        to_message: impl Fn(Result<T>) -> Message + Send + 'static,
    ) -> Task<Message>
    where
        T: Send + 'static,
        F: FnOnce(BookingApi) -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        match self.api {
            Some(api) => Task::perform(call(api.clone()), to_message),
            None => Task::done(to_message(Err(Error::Config(
                "backend client is not available".to_string(),
            )))),
        }
    }
}

/// Switches screen, closes the menu and starts any load the screen needs.
pub fn navigate(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;
    *ctx.menu_open = false;
    *ctx.scroll_offset = 0.0;

    let load = match target {
        Screen::Bookings => load_bookings(ctx),
        _ => Task::none(),
    };

    Task::batch([scroll_to_top::scroll_to_top(), load])
}

/// Opens the details screen. `None` shows the missing-id error.
pub fn open_booking(ctx: &mut UpdateContext<'_>, booking_id: Option<u64>) -> Task<Message> {
    let navigation = navigate(ctx, Screen::BookingDetails);
    match ctx.booking_details.open(booking_id) {
        Some(id) => Task::batch([navigation, load_booking(ctx, id)]),
        None => navigation,
    }
}

fn load_bookings(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.bookings.start_loading();
    ctx.perform(
        |api| async move { api.list_bookings().await },
        Message::BookingsLoaded,
    )
}

fn load_booking(ctx: &UpdateContext<'_>, id: u64) -> Task<Message> {
    ctx.perform(
        move |api| async move { api.fetch_booking(id).await },
        move |result| Message::BookingLoaded { id, result },
    )
}

/// Schedules a follow-up navigation after the success toast had time to show.
fn redirect_later(redirect: Redirect) -> Task<Message> {
    Task::perform(
        async { tokio::time::sleep(Duration::from_millis(REDIRECT_DELAY_MS)).await },
        move |()| Message::Redirect(redirect),
    )
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(target) => navigate(ctx, target),
        NavbarEvent::CycleTheme => {
            *ctx.theme_mode = ctx.theme_mode.next();
            persistence::persist_theme(ctx.config, ctx.config_dir.cloned(), *ctx.theme_mode);
            Task::none()
        }
        NavbarEvent::Logout => ctx.perform(
            |api| async move { api.logout().await },
            Message::LoggedOut,
        ),
    }
}

pub fn handle_search_message(
    ctx: &mut UpdateContext<'_>,
    message: search::Message,
) -> Task<Message> {
    match search::update(ctx.search, message) {
        SearchEvent::None => Task::none(),
        SearchEvent::Invalid(err) => {
            ctx.notify(err.to_string(), Severity::Error);
            Task::none()
        }
        SearchEvent::Search(query) => ctx.perform(
            move |api| async move { api.search(&query).await },
            Message::SearchCompleted,
        ),
        SearchEvent::Book(option) => {
            *ctx.booking_form = Some(booking_form::State::new(BookingForm::new(option)));
            navigate(ctx, Screen::BookingForm)
        }
    }
}

pub fn handle_search_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<crate::domain::TravelOption>>,
) -> Task<Message> {
    match result {
        Ok(options) => {
            log::debug!("search returned {} option(s)", options.len());
            ctx.search.set_results(options);
        }
        Err(err) => {
            ctx.search.search_failed();
            ctx.notify_failure(err.user_message());
        }
    }
    Task::none()
}

pub fn handle_booking_form_message(
    ctx: &mut UpdateContext<'_>,
    message: booking_form::Message,
) -> Task<Message> {
    let Some(state) = ctx.booking_form.as_mut() else {
        return Task::none();
    };

    match booking_form::update(state, message) {
        BookingFormEvent::None => Task::none(),
        BookingFormEvent::Back => navigate(ctx, Screen::Search),
        BookingFormEvent::Invalid(err) => {
            ctx.notify(err.to_string(), Severity::Error);
            Task::none()
        }
        BookingFormEvent::Submit(booking) => ctx.perform(
            move |api| async move { api.create_booking(&booking).await },
            Message::BookingCreated,
        ),
    }
}

pub fn handle_booking_created(
    ctx: &mut UpdateContext<'_>,
    result: Result<serde_json::Value>,
) -> Task<Message> {
    if let Some(state) = ctx.booking_form.as_mut() {
        state.finish_submit();
    }

    match result {
        Ok(_) => {
            ctx.notify(BOOKING_CREATED, Severity::Success);
            redirect_later(Redirect::Bookings)
        }
        Err(err) => {
            log::warn!("booking failed: {err}");
            ctx.notify_failure(failure_message(&err));
            Task::none()
        }
    }
}

pub fn handle_bookings_message(
    ctx: &mut UpdateContext<'_>,
    message: bookings::Message,
) -> Task<Message> {
    match bookings::update(message) {
        BookingsEvent::Refresh => load_bookings(ctx),
        BookingsEvent::Open(id) => open_booking(ctx, Some(id)),
        BookingsEvent::Cancel(id) => cancel_booking(ctx, id),
    }
}

pub fn handle_bookings_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<crate::domain::Booking>>,
) -> Task<Message> {
    match result {
        Ok(list) => ctx.bookings.set_bookings(list),
        Err(err) => {
            let message = err.user_message();
            ctx.bookings.load_failed(message.clone());
            ctx.notify_failure(message);
        }
    }
    Task::none()
}

pub fn handle_details_message(
    ctx: &mut UpdateContext<'_>,
    message: booking_details::Message,
) -> Task<Message> {
    match booking_details::update(ctx.booking_details, message) {
        DetailsEvent::None => Task::none(),
        DetailsEvent::Back => navigate(ctx, Screen::Bookings),
        DetailsEvent::Reload(id) => load_booking(ctx, id),
        DetailsEvent::Cancel(id) => cancel_booking(ctx, id),
        DetailsEvent::Download(_) => {
            ctx.notify(DOWNLOAD_PENDING, Severity::Info);
            Task::none()
        }
        DetailsEvent::Share(id) => share_booking(ctx, id),
    }
}

pub fn handle_booking_loaded(
    ctx: &mut UpdateContext<'_>,
    id: u64,
    result: Result<crate::domain::Booking>,
) -> Task<Message> {
    // Responses for a booking no longer on screen are dropped.
    if ctx.booking_details.booking_id() != Some(id) {
        return Task::none();
    }

    match result {
        Ok(booking) => ctx
            .booking_details
            .set_booking(booking, Local::now().naive_local()),
        Err(err) => {
            log::warn!("{}: {err}", booking_details::LOAD_FAILED);
            let details = match &err {
                Error::Rejected(rejection) => rejection.details.clone(),
                _ => Vec::new(),
            };
            ctx.booking_details.load_failed(err.user_message(), details);
        }
    }
    Task::none()
}

fn cancel_booking(ctx: &mut UpdateContext<'_>, id: u64) -> Task<Message> {
    ctx.perform(
        move |api| async move { api.cancel_booking(id).await },
        move |result| Message::BookingCancelled { id, result },
    )
}

pub fn handle_booking_cancelled(
    ctx: &mut UpdateContext<'_>,
    id: u64,
    result: Result<crate::domain::Acknowledgement>,
) -> Task<Message> {
    match result {
        Ok(_) => {
            ctx.notify(BOOKING_CANCELLED, Severity::Success);
            redirect_later(Redirect::ReloadBooking(id))
        }
        Err(err) => {
            let message = err.user_message();
            ctx.notify_failure(if message.is_empty() {
                CANCEL_FAILED.to_string()
            } else {
                message
            });
            Task::none()
        }
    }
}

fn share_booking(ctx: &UpdateContext<'_>, id: u64) -> Task<Message> {
    let Some(api) = ctx.api else {
        return Task::done(Message::ShareCopied {
            url: String::new(),
            clipboard: None,
        });
    };
    let url = api.booking_url(id);

    iced::clipboard::write::<Message>(url.clone()).chain(
        iced::clipboard::read().map(move |clipboard| Message::ShareCopied {
            url: url.clone(),
            clipboard,
        }),
    )
}

/// Confirms the copy by reading the clipboard back.
pub fn handle_share_copied(
    ctx: &mut UpdateContext<'_>,
    url: &str,
    clipboard: Option<&str>,
) -> Task<Message> {
    if !url.is_empty() && clipboard == Some(url) {
        ctx.notify(SHARE_COPIED, Severity::Success);
    } else {
        log::warn!("clipboard did not take the booking URL");
        ctx.notify(SHARE_FAILED, Severity::Error);
    }
    Task::none()
}

pub fn handle_redirect(ctx: &mut UpdateContext<'_>, redirect: Redirect) -> Task<Message> {
    match redirect {
        Redirect::Bookings => navigate(ctx, Screen::Bookings),
        Redirect::ReloadBooking(id) => {
            // Refresh whichever screen shows the booking.
            match *ctx.screen {
                Screen::BookingDetails if ctx.booking_details.booking_id() == Some(id) => {
                    load_booking(ctx, id)
                }
                Screen::Bookings => load_bookings(ctx),
                _ => Task::none(),
            }
        }
    }
}

pub fn handle_account_message(
    ctx: &mut UpdateContext<'_>,
    message: account::Message,
) -> Task<Message> {
    match account::update(ctx.account, message) {
        AccountEvent::None => Task::none(),
        AccountEvent::Invalid(err) => {
            ctx.notify(err.to_string(), Severity::Error);
            Task::none()
        }
        AccountEvent::Login { username, password } => ctx.perform(
            move |api| async move { api.login(&username, &password).await },
            Message::LoggedIn,
        ),
        AccountEvent::Register(new_account) => ctx.perform(
            move |api| async move { api.register(&new_account).await },
            Message::Registered,
        ),
    }
}

pub fn handle_logged_in(
    ctx: &mut UpdateContext<'_>,
    result: Result<crate::domain::LoginResponse>,
) -> Task<Message> {
    ctx.account.finish_submit();
    ctx.account.clear_secrets();

    match result {
        Ok(response) => {
            log::info!("signed in as {}", response.user.username);
            ctx.notify(response.message, Severity::Success);
            *ctx.user = Some(response.user);
            navigate(ctx, Screen::Bookings)
        }
        Err(err) => {
            ctx.notify_failure(err.user_message());
            Task::none()
        }
    }
}

pub fn handle_registered(
    ctx: &mut UpdateContext<'_>,
    result: Result<serde_json::Value>,
) -> Task<Message> {
    match result {
        Ok(_) => {
            ctx.account.registered();
            ctx.notify(REGISTERED, Severity::Success);
        }
        Err(err) => {
            ctx.account.finish_submit();
            ctx.notify_failure(err.user_message());
        }
    }
    Task::none()
}

pub fn handle_logged_out(
    ctx: &mut UpdateContext<'_>,
    result: Result<crate::domain::Acknowledgement>,
) -> Task<Message> {
    match result {
        Ok(ack) => {
            *ctx.user = None;
            let message = if ack.message.is_empty() {
                SIGNED_OUT.to_string()
            } else {
                ack.message
            };
            ctx.notify(message, Severity::Success);
            navigate(ctx, Screen::Account)
        }
        Err(err) => {
            ctx.notify_failure(err.user_message());
            Task::none()
        }
    }
}
