use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::debug;

use crate::api::PersonClient;
use crate::config::Config;
use crate::ui::components::*;
use crate::ui::context::DirectoryContext;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Personnel")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let config = use_hook(Config::load);
    use_context_provider(ConfirmDialogContext::new);
    use_context_provider(|| DirectoryContext::new(PersonClient::new(config.api_base_url.clone())));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Directory {}
        ConfirmDialog {}
    }
}
