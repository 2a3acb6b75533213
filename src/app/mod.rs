// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the booking screens.
//!
//! The `App` struct wires the screens to the backend client and the toast
//! queue, and translates messages into side effects such as requests,
//! delayed redirects or config persistence.

mod message;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Redirect};
pub use screen::Screen;

use crate::api::BookingApi;
use crate::config::{self, Config};
use crate::domain::User;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::infrastructure::ReqwestTransport;
use crate::ui::notifications::{self, Severity};
use crate::ui::theming::ThemeMode;
use crate::ui::{account, booking_details, booking_form, bookings, scroll_to_top, search};
use chrono::Local;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    /// `None` when the backend client could not be built from the config.
    api: Option<BookingApi>,
    config: Config,
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Vertical offset of the page scrollable.
    scroll_offset: f32,
    user: Option<User>,
    search: search::State,
    booking_form: Option<booking_form::State>,
    bookings: bookings::State,
    booking_details: booking_details::State,
    account: account::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.user.is_some())
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the backend client for a base URL.
pub fn build_api(base_url: &str, csrf_cookie: &str) -> Result<BookingApi> {
    let transport = Arc::new(ReqwestTransport::new()?);
    let gateway = Gateway::new(transport, base_url, csrf_cookie)?;
    Ok(BookingApi::new(gateway))
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            api: None,
            config: Config::default(),
            config_dir: None,
            theme_mode: ThemeMode::System,
            menu_open: false,
            scroll_offset: 0.0,
            user: None,
            search: search::State::default(),
            booking_form: None,
            bookings: bookings::State::default(),
            booking_details: booking_details::State::default(),
            account: account::State::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Loads the config, builds the backend client and opens the start
    /// screen requested by the flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (mut config, config_warning) = config::load_with_override(config_dir.clone());

        if let Some(base_url) = flags.base_url {
            config.api.base_url = base_url;
        }

        let mut app = App {
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::new().with_timing(
                config.notifications.duration(),
                config.notifications.exit_transition(),
            ),
            config_dir,
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            log::warn!("{warning}");
            app.notifications
                .notify(warning, Severity::Warning, Instant::now());
        }

        match build_api(&config.api.base_url, &config.api.csrf_cookie) {
            Ok(api) => {
                log::info!("using backend at {}", api.gateway().base_url());
                app.api = Some(api);
            }
            Err(err) => {
                log::error!("cannot reach backend: {err}");
                app.notifications
                    .notify(err.user_message(), Severity::Error, Instant::now());
            }
        }
        app.config = config;

        let task = match flags.booking_id {
            Some(raw) => {
                let id = raw.trim().parse::<u64>().ok();
                app.update_context(|ctx| update::open_booking(ctx, id))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        format!("{} - Travel Desk", self.screen.title())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let countdown_sub = subscription::create_countdown_subscription(
            self.screen == Screen::BookingDetails && self.booking_details.needs_countdown(),
        );

        Subscription::batch([event_sub, tick_sub, countdown_sub])
    }

    fn update_context<R>(&mut self, f: impl FnOnce(&mut update::UpdateContext<'_>) -> R) -> R {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            api: self.api.as_ref(),
            config: &mut self.config,
            config_dir: self.config_dir.as_ref(),
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            scroll_offset: &mut self.scroll_offset,
            user: &mut self.user,
            search: &mut self.search,
            booking_form: &mut self.booking_form,
            bookings: &mut self.bookings,
            booking_details: &mut self.booking_details,
            account: &mut self.account,
            notifications: &mut self.notifications,
        };
        f(&mut ctx)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => {
                self.update_context(|ctx| update::handle_navbar_message(ctx, msg))
            }
            Message::Search(msg) => {
                self.update_context(|ctx| update::handle_search_message(ctx, msg))
            }
            Message::BookingForm(msg) => {
                self.update_context(|ctx| update::handle_booking_form_message(ctx, msg))
            }
            Message::Bookings(msg) => {
                self.update_context(|ctx| update::handle_bookings_message(ctx, msg))
            }
            Message::BookingDetails(msg) => {
                self.update_context(|ctx| update::handle_details_message(ctx, msg))
            }
            Message::Account(msg) => {
                self.update_context(|ctx| update::handle_account_message(ctx, msg))
            }
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg, Instant::now());
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::CountdownTick => {
                self.booking_details.tick(Local::now().naive_local());
                Task::none()
            }
            Message::Scrolled(offset) => {
                self.scroll_offset = offset;
                Task::none()
            }
            Message::ScrollToTop => {
                self.scroll_offset = 0.0;
                scroll_to_top::scroll_to_top()
            }
            Message::SearchCompleted(result) => {
                self.update_context(|ctx| update::handle_search_completed(ctx, result))
            }
            Message::BookingCreated(result) => {
                self.update_context(|ctx| update::handle_booking_created(ctx, result))
            }
            Message::BookingsLoaded(result) => {
                self.update_context(|ctx| update::handle_bookings_loaded(ctx, result))
            }
            Message::BookingLoaded { id, result } => {
                self.update_context(|ctx| update::handle_booking_loaded(ctx, id, result))
            }
            Message::BookingCancelled { id, result } => {
                self.update_context(|ctx| update::handle_booking_cancelled(ctx, id, result))
            }
            Message::LoggedIn(result) => {
                self.update_context(|ctx| update::handle_logged_in(ctx, result))
            }
            Message::LoggedOut(result) => {
                self.update_context(|ctx| update::handle_logged_out(ctx, result))
            }
            Message::Registered(result) => {
                self.update_context(|ctx| update::handle_registered(ctx, result))
            }
            Message::ShareCopied { url, clipboard } => self.update_context(|ctx| {
                update::handle_share_copied(ctx, &url, clipboard.as_deref())
            }),
            Message::Redirect(redirect) => {
                self.update_context(|ctx| update::handle_redirect(ctx, redirect))
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            theme_mode: self.theme_mode,
            menu_open: self.menu_open,
            scroll_offset: self.scroll_offset,
            user: self.user.as_ref(),
            search: &self.search,
            booking_form: self.booking_form.as_ref(),
            bookings: &self.bookings,
            booking_details: &self.booking_details,
            account: &self.account,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::fixtures::booking_json;
    use crate::error::Error;
    use crate::gateway::Rejection;
    use crate::ui::notifications::Notification;

    fn test_app() -> App {
        let mut app = App::default();
        app.api = Some(build_api("http://127.0.0.1:8000", "csrftoken").unwrap());
        app
    }

    fn messages(app: &App) -> Vec<String> {
        app.notifications
            .visible()
            .map(|n: &Notification| n.message().to_string())
            .collect()
    }

    fn rejected(message: &str) -> Error {
        Error::Rejected(Rejection {
            status: 400,
            message: message.into(),
            details: Vec::new(),
        })
    }

    #[test]
    fn title_follows_screen() {
        let mut app = test_app();
        assert_eq!(app.title(), "Search - Travel Desk");
        app.screen = Screen::Bookings;
        assert_eq!(app.title(), "My Bookings - Travel Desk");
    }

    #[test]
    fn navbar_navigation_switches_screen() {
        let mut app = test_app();
        let _ = app.update(Message::Navbar(crate::ui::navbar::Message::OpenAccount));
        assert_eq!(app.screen, Screen::Account);
    }

    #[test]
    fn theme_toggle_cycles_mode() {
        let mut app = test_app();
        let _ = app.update(Message::Navbar(crate::ui::navbar::Message::CycleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn invalid_search_shows_error_toast() {
        let mut app = test_app();
        let _ = app.update(Message::Search(search::Message::Submit));
        assert_eq!(messages(&app), vec!["Please fill in all required fields"]);
    }

    #[test]
    fn failed_search_toast_respects_config_flag() {
        let mut app = test_app();
        let _ = app.update(Message::SearchCompleted(Err(rejected("Server down"))));
        assert_eq!(messages(&app), vec!["Server down"]);

        let mut quiet = test_app();
        quiet.config.api.notify_on_failure = false;
        let _ = quiet.update(Message::SearchCompleted(Err(rejected("Server down"))));
        assert!(messages(&quiet).is_empty());
    }

    #[test]
    fn booking_created_toasts_success() {
        let mut app = test_app();
        let _ = app.update(Message::BookingCreated(Ok(serde_json::json!({}))));
        assert_eq!(messages(&app), vec![update::BOOKING_CREATED]);
    }

    #[test]
    fn booking_failure_unwraps_backend_detail() {
        let mut app = test_app();
        let _ = app.update(Message::BookingCreated(Err(rejected(
            "[ErrorDetail(string='Not enough seats', code='invalid')]",
        ))));
        assert_eq!(messages(&app), vec!["Not enough seats"]);
    }

    #[test]
    fn failed_booking_toast_respects_config_flag() {
        let mut quiet = test_app();
        quiet.config.api.notify_on_failure = false;
        let _ = quiet.update(Message::BookingCreated(Err(rejected("Not enough seats"))));
        assert!(messages(&quiet).is_empty());
    }

    #[test]
    fn redirect_to_bookings_switches_screen() {
        let mut app = test_app();
        let _ = app.update(Message::Redirect(Redirect::Bookings));
        assert_eq!(app.screen, Screen::Bookings);
        assert!(app.bookings.is_loading());
    }

    #[test]
    fn startup_with_unparseable_id_shows_details_error() {
        let mut app = test_app();
        let _ = app.update_context(|ctx| update::open_booking(ctx, None));
        assert_eq!(app.screen, Screen::BookingDetails);
        assert!(!app.booking_details.is_loading());
    }

    #[test]
    fn loaded_booking_is_applied_only_when_current() {
        let mut app = test_app();
        let _ = app.update_context(|ctx| update::open_booking(ctx, Some(11)));
        let booking: crate::domain::Booking =
            serde_json::from_value(booking_json(11, "confirmed")).unwrap();

        let _ = app.update(Message::BookingLoaded {
            id: 12,
            result: Ok(booking.clone()),
        });
        assert!(app.booking_details.booking().is_none());

        let _ = app.update(Message::BookingLoaded {
            id: 11,
            result: Ok(booking),
        });
        assert_eq!(app.booking_details.booking().map(|b| b.booking_id), Some(11));
    }

    #[test]
    fn cancel_outcomes_toast() {
        let mut app = test_app();
        let _ = app.update(Message::BookingCancelled {
            id: 3,
            result: Ok(crate::domain::Acknowledgement {
                message: "Booking cancelled successfully".into(),
            }),
        });
        let _ = app.update(Message::BookingCancelled {
            id: 3,
            result: Err(rejected("")),
        });
        assert_eq!(
            messages(&app),
            vec![update::BOOKING_CANCELLED, update::CANCEL_FAILED]
        );
    }

    #[test]
    fn share_toast_depends_on_clipboard_read_back() {
        let mut app = test_app();
        let url = "http://127.0.0.1:8000/booking-details/?id=3".to_string();
        let _ = app.update(Message::ShareCopied {
            url: url.clone(),
            clipboard: Some(url.clone()),
        });
        let _ = app.update(Message::ShareCopied {
            url,
            clipboard: None,
        });
        assert_eq!(messages(&app), vec![update::SHARE_COPIED, update::SHARE_FAILED]);
    }

    #[test]
    fn download_shows_info_toast() {
        let mut app = test_app();
        let booking: crate::domain::Booking =
            serde_json::from_value(booking_json(11, "confirmed")).unwrap();
        app.booking_details
            .set_booking(booking, Local::now().naive_local());
        let _ = app.update(Message::BookingDetails(booking_details::Message::Download));
        assert_eq!(messages(&app), vec![update::DOWNLOAD_PENDING]);
    }

    #[test]
    fn logout_clears_user() {
        let mut app = test_app();
        app.user = Some(User {
            id: 1,
            username: "asha".into(),
            email: "asha@example.com".into(),
            first_name: "Asha".into(),
            last_name: String::new(),
        });
        let _ = app.update(Message::LoggedOut(Ok(crate::domain::Acknowledgement {
            message: "Logout successful".into(),
        })));
        assert!(app.user.is_none());
        assert_eq!(app.screen, Screen::Account);
    }

    #[test]
    fn scroll_offset_tracks_scrollable() {
        let mut app = test_app();
        let _ = app.update(Message::Scrolled(420.0));
        assert_eq!(app.scroll_offset, 420.0);
        let _ = app.update(Message::ScrollToTop);
        assert_eq!(app.scroll_offset, 0.0);
    }

    #[test]
    fn view_renders_every_screen() {
        let mut app = test_app();
        for screen in [
            Screen::Search,
            Screen::BookingForm,
            Screen::Bookings,
            Screen::BookingDetails,
            Screen::Account,
        ] {
            app.screen = screen;
            let _element = app.view();
        }
    }
}
