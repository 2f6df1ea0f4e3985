mod app;

mod domain {
    pub mod entities {
        pub mod assignment;
        pub mod cell;
        pub mod subject;
    }
}

mod infra {
    pub mod config {
        pub mod settings;
    }
    pub mod import {
        pub mod xlsx;
    }
}

mod platform {
    pub mod desktop {
        pub mod blocking;
    }
}

mod ui {
    pub mod state {
        pub mod app_state;
    }
}

mod usecase {
    pub mod ports {
        pub mod decoder;
    }
    pub mod services {
        pub mod assignment_parser;
        pub mod import_service;
        pub mod schedule_session;
        pub mod subject_filter;
    }
}


use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::infra::config::settings::{default_webview_data_dir, AppConfig};

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    // Dioxus may already have installed a global subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    init_tracing(&config.log_filter);
    if let Some(err) = config_error {
        tracing::warn!(error = %format!("{err:#}"), "using default configuration");
    }

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");
    tracing::info!(data_dir = %webview_data_dir.display(), "starting {}", config.title);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(config.title.clone()))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);
}
