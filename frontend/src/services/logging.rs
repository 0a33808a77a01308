use gloo::net::http::Request;
use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen_futures::spawn_local;

use super::config::{LogLevel, PortalConfig};

thread_local! {
    static CONFIG: RefCell<PortalConfig> = RefCell::new(PortalConfig::default());
}

#[derive(Debug, Serialize)]
struct LogRequest {
    level: &'static str,
    message: String,
    component: String,
}

pub struct Logger;

impl Logger {
    /// Replace the logging settings (level filter, remote forwarding)
    pub fn configure(config: PortalConfig) {
        CONFIG.with(|current| *current.borrow_mut() = config);
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        let (min_level, remote_url) = CONFIG.with(|config| {
            let config = config.borrow();
            let remote_url = config
                .remote_logging
                .then(|| format!("{}/api/logs", config.api_base_url));
            (config.min_log_level, remote_url)
        });

        if level < min_level {
            return;
        }

        let line = format!("[{}] {}", component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(&line),
            LogLevel::Info => gloo::console::info!(&line),
            LogLevel::Warn => gloo::console::warn!(&line),
            LogLevel::Error => gloo::console::error!(&line),
        }

        let Some(url) = remote_url else {
            return;
        };

        let request = LogRequest {
            level: level.as_str(),
            message: message.to_string(),
            component: component.to_string(),
        };

        // Fire and forget; a failed forward must not produce more logging
        spawn_local(async move {
            if let Ok(request) = Request::post(&url).json(&request) {
                let _ = request.send().await;
            }
        });
    }
}
