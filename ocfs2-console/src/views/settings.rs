// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{Element, cosmic_theme, iced::Alignment, iced::Length, theme, widget};
use ocfs2_sys::tools::ToolInfo;

use crate::{app::Message, config::Config, fl};

pub fn settings<'a>(config: &Config) -> Element<'a, Message> {
    let cosmic_theme::Spacing {
        space_s, space_m, ..
    } = theme::active().cosmic().spacing;

    let mount_section = widget::container(
        widget::column()
            .push(widget::text::title4(fl!("settings-volumes")))
            .push(
                widget::text_input(fl!("default-mountpoint"), config.default_mountpoint.clone())
                    .label(fl!("default-mountpoint"))
                    .on_input(Message::DefaultMountpointChanged),
            )
            .spacing(space_s)
            .align_x(Alignment::Start),
    )
    .width(Length::Fill);

    let logging_level_options = vec![
        "Error".to_string(),
        "Warn".to_string(),
        "Info".to_string(),
        "Debug".to_string(),
        "Trace".to_string(),
    ];

    let logging_level_dropdown = widget::dropdown(
        logging_level_options,
        Some(config.log_level.to_index()),
        Message::LogLevelChanged,
    )
    .width(cosmic::iced::Length::Shrink);

    let logging_section = widget::container(
        widget::column()
            .push(widget::text::title4(fl!("settings-logging")))
            .push(widget::text::caption(fl!("log-level")))
            .push(logging_level_dropdown)
            .push(
                widget::checkbox(fl!("log-to-disk"), config.log_to_disk)
                    .on_toggle(Message::ToggleLogToDisk),
            )
            .spacing(space_s)
            .align_x(Alignment::Start),
    )
    .width(Length::Fill);

    widget::column()
        .push(mount_section)
        .push(logging_section)
        .spacing(space_m)
        .width(Length::Fill)
        .into()
}

pub fn settings_footer<'a>(tools: &[ToolInfo]) -> Element<'a, Message> {
    let cosmic_theme::Spacing {
        space_xxs, space_s, ..
    } = theme::active().cosmic().spacing;

    let hash = env!("VERGEN_GIT_SHA");
    let short_hash: String = hash.chars().take(7).collect();
    let date = env!("VERGEN_GIT_COMMIT_DATE");

    let version_footer = widget::container(
        widget::row::with_capacity(2)
            .push(widget::Space::new(Length::Fill, 0))
            .push(widget::text::caption(fl!(
                "git-description",
                version = env!("CARGO_PKG_VERSION"),
                hash = short_hash,
                date = date
            )))
            .spacing(space_xxs)
            .align_y(Alignment::Center)
            .width(Length::Fill),
    )
    .padding([0, 0, 3, 0])
    .width(Length::Fill);

    let missing_tools: Vec<_> = tools.iter().filter(|t| !t.available).collect();

    if missing_tools.is_empty() {
        return widget::column()
            .push(version_footer)
            .width(Length::Fill)
            .into();
    }

    let mut tools_list = widget::column().spacing(space_xxs);
    for tool in &missing_tools {
        tools_list = tools_list.push(widget::text::caption(format!(
            "• {} ({}) - {}",
            tool.command, tool.package_hint, tool.purpose
        )));
    }

    let warning_callout = widget::container(
        widget::column()
            .push(widget::text::caption(fl!("tools-missing-desc")))
            .push(tools_list)
            .spacing(space_xxs),
    )
    .padding([space_s, space_s, space_s, space_s])
    .width(Length::Fill)
    .style(|theme| {
        let cosmic = theme.cosmic();
        widget::container::Style {
            icon_color: Some(cosmic.warning_color().into()),
            text_color: Some(cosmic.warning_color().into()),
            background: None,
            border: cosmic::iced::Border {
                color: cosmic.warning_color().into(),
                width: 1.0,
                radius: cosmic.corner_radii.radius_s.into(),
            },
            shadow: cosmic::iced::Shadow::default(),
        }
    });

    widget::column()
        .push(warning_callout)
        .push(version_footer)
        .spacing(space_s)
        .width(Length::Fill)
        .into()
}
