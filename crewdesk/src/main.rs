mod app;
mod features;
mod fonts;
mod guards;
mod helpers;
mod icons;
mod services;
mod state;
mod theme;
mod ui;

use env_logger::Env;
use iced::{Size, window};

use crate::app::{
    App, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .antialiasing(true)
        .window(window::Settings {
            size: Size {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT,
            },
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            ..window::Settings::default()
        })
        .resizable(true)
        .subscription(App::subscription)
        .run()
}
