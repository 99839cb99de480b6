// SPDX-License-Identifier: GPL-3.0-only

mod app;
mod config;
mod controls;
mod i18n;
mod logging;
mod ui;
mod views;

use crate::config::Config;
use crate::ui::app::APP_ID;

fn main() -> anyhow::Result<()> {
    let config = Config::load(APP_ID);
    logging::init(&config);

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    if !nix::unistd::geteuid().is_root() {
        tracing::warn!("not running as root; mount, format and tune operations will fail");
    }

    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(520.0, 420.0))
        .size_limits(cosmic::iced::Limits::NONE.min_width(360.0).min_height(240.0));

    cosmic::app::run::<app::AppModel>(settings, ())?;

    Ok(())
}
