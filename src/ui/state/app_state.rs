use dioxus::prelude::{use_signal, Signal};

use crate::usecase::services::schedule_session::ScheduleSession;

pub struct AppState {
    pub session: Signal<ScheduleSession>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: use_signal(ScheduleSession::new),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
