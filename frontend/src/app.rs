use yew::prelude::*;

use crate::config::Config;
use crate::controller::PageController;

/// Renders nothing. Its job is to own the page controller for as long as it
/// is mounted.
#[function_component(Enhancer)]
pub fn enhancer() -> Html {
    use_effect_with_deps(
        move |_| {
            let controller = web_sys::window().and_then(|window| {
                let config = window
                    .document()
                    .map(|document| Config::load(&document))
                    .unwrap_or_default();
                match PageController::install(&window, &config) {
                    Ok(controller) => Some(controller),
                    Err(e) => {
                        log::error!("Page enhancements unavailable: {}", e);
                        None
                    }
                }
            });
            move || drop(controller)
        },
        (),
    );

    html! {}
}
