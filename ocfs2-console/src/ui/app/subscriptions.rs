// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use super::Message;
use crate::config::Config;
use cosmic::Application;
use cosmic::iced::{Subscription, time};

use super::state::AppModel;

const BUSY_TICK: Duration = Duration::from_millis(50);

/// Register subscriptions for this application.
pub(crate) fn subscription(app: &AppModel) -> Subscription<Message> {
    let mut subscriptions = vec![
        // Watch for application configuration changes.
        app.core
            .watch_config::<Config>(<AppModel as Application>::APP_ID)
            .map(|update| Message::UpdateConfig(update.config)),
    ];

    // Animate the busy indicator only while it is on screen.
    if app.busy.as_ref().is_some_and(|busy| busy.visible) {
        subscriptions.push(time::every(BUSY_TICK).map(|_| Message::BusyTick));
    }

    Subscription::batch(subscriptions)
}
