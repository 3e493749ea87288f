use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod analytics;
mod app;
mod config;
mod controller;
mod device;
mod dom;
mod error;
mod hover;
mod lifecycle;
mod media;
mod navigation;
mod particles;
mod reveal;
mod scroll;
mod styles;
mod typewriter;

use app::Enhancer;
use error::Result;

const HOST_ID: &str = "portfolio-enhancer";

/// The element yew mounts into, hidden and appended to `<body>`.
fn mount_host() -> Result<HtmlElement> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let inserted = styles::inject(&document)?;
    log::debug!("Supplemental styles {}", if inserted { "injected" } else { "already present" });

    if let Some(host) = dom::by_id::<HtmlElement>(&document, HOST_ID) {
        return Ok(host);
    }
    let host = document.create_element("div")?.unchecked_into::<HtmlElement>();
    host.set_id(HOST_ID);
    host.set_hidden(true);
    dom::body(&document)?.append_child(&host)?;
    Ok(host)
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    match mount_host() {
        Ok(host) => {
            log::info!("Starting page enhancements");
            yew::Renderer::<Enhancer>::with_root(host.into()).render();
        }
        Err(e) => log::error!("Could not start page enhancements: {}", e),
    }
}
