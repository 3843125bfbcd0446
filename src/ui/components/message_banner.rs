use crate::ui::context::DirectoryContext;
use dioxus::prelude::*;

/// Dismissable error and success banners
#[component]
pub fn MessageBanners() -> Element {
    let ctx = use_context::<DirectoryContext>();

    let error = ctx.state.read().error.clone();
    let success = ctx.state.read().success.clone();

    let ctx_error = ctx.clone();
    let ctx_success = ctx.clone();

    rsx! {
        if let Some(message) = error {
            div { class: "banner banner-error",
                p { class: "banner-text", "{message}" }
                button {
                    class: "banner-dismiss",
                    onclick: move |_| ctx_error.clear_error(),
                    "×"
                }
            }
        }
        if let Some(message) = success {
            div { class: "banner banner-success",
                p { class: "banner-text", "{message}" }
                button {
                    class: "banner-dismiss",
                    onclick: move |_| ctx_success.clear_success(),
                    "×"
                }
            }
        }
    }
}
