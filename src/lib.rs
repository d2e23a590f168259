use leptos::ev;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use crate::domain::{
    errors::AppError,
    logging::{LogComponent, get_logger, install_logging},
};
use crate::config::{PageConfig, init_config};
use crate::event_utils::{EventOptions, event_listener_with_options};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};
use crate::presentation::wasm_api::{CONFIG_GLOBAL, config_from_global, initialize_page};

pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

/// Module entry: install logging, then bind the page once the DOM is ready
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (page, rejected) = match config_from_global() {
        Ok(page) => (page, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    let config = init_config(page);
    install_logging(
        Box::new(ConsoleLogger::new(config.log_level)),
        Box::new(BrowserTimeProvider::new()),
    );

    if let Some(e) = rejected {
        get_logger().warn(
            LogComponent::Presentation("Start"),
            &format!("Ignoring window.{}: {:?}", CONFIG_GLOBAL, e),
        );
    }
    get_logger().info(LogComponent::Presentation("Start"), "Portfolio UI module loaded");

    if let Err(e) = schedule_page_initialization() {
        get_logger().error(
            LogComponent::Presentation("Start"),
            &format!("Could not schedule page initialization: {:?}", e),
        );
    }
}

fn schedule_page_initialization() -> Result<(), JsValue> {
    let document: Document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    if is_dom_ready(&document.ready_state()) {
        run_page_initialization();
        return Ok(());
    }

    let options = EventOptions { once: true, ..EventOptions::default() };
    event_listener_with_options(
        document.as_ref(),
        ev::Custom::<Event>::new("DOMContentLoaded"),
        &options,
        |_| run_page_initialization(),
    )
    .map_err(AppError::from)?
    .forget();
    Ok(())
}

/// `document.readyState` is past `"loading"` ("interactive" or "complete")
fn is_dom_ready(ready_state: &str) -> bool {
    ready_state != "loading"
}

fn run_page_initialization() {
    if let Err(e) = initialize_page() {
        get_logger().error(
            LogComponent::Presentation("Start"),
            &format!("Page initialization failed: {:?}", e),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::is_dom_ready;

    #[test]
    fn binds_right_away_once_parsing_is_done() {
        assert!(!is_dom_ready("loading"));
        assert!(is_dom_ready("interactive"));
        assert!(is_dom_ready("complete"));
    }
}
