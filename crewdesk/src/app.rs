#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::features::Features;
use crate::features::notice::NoticeEvent;
use crate::features::prefs::{PrefsEvent, PrefsFeature};
use crate::features::profile::ProfileEvent;
use crate::features::shell::ShellEvent;
use crate::fonts::FontsConfig;
use crate::services::ApiClient;
use crate::state::State;
use crate::theme::ThemeManager;
use crate::ui::widgets::{dashboard, header, sidebar};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 480.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 360.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

const DEFAULT_EMPLOYEE_ID: u64 = 1;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    IcedReady,
    Header(header::HeaderEvent),
    Sidebar(sidebar::SidebarEvent),
    Dashboard(dashboard::DashboardEvent),
    Shell(ShellEvent),
    Prefs(PrefsEvent),
    Profile(ProfileEvent),
    Notice(NoticeEvent),
    Window(iced::window::Event),
}

pub(crate) struct App {
    state: State,
    features: Features,
    theme_manager: ThemeManager,
    fonts: FontsConfig,
    api: ApiClient,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let api = ApiClient::from_env();
        let features =
            Features::new(PrefsFeature::load(), employee_id_from_env());
        let window_size = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };
        let state = State::new(window_size);

        let app = App {
            state,
            features,
            theme_manager: ThemeManager::new(),
            fonts: FontsConfig::default(),
            api,
        };

        (app, Task::done(()).map(|_: ()| Event::IcedReady))
    }

    pub(crate) fn title(&self) -> String {
        String::from("Crewdesk")
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        view::view(self)
    }
}

/// Employee record this session edits; auth is out of scope, so the id
/// comes from the environment.
fn employee_id_from_env() -> u64 {
    std::env::var("CREWDESK_EMPLOYEE_ID")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_EMPLOYEE_ID)
}
