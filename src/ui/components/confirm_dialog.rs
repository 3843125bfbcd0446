use crate::ui::components::dialog_context::ConfirmDialogContext;
use dioxus::prelude::*;

#[component]
pub fn ConfirmDialog() -> Element {
    let dialog = use_context::<ConfirmDialogContext>();
    let dialog_for_cancel = dialog.clone();
    let dialog_for_confirm = dialog.clone();
    let dialog_for_overlay = dialog.clone();

    rsx! {
        if *dialog.is_open.read() {
            div {
                class: "dialog-overlay",
                onclick: move |_| {
                    dialog_for_overlay.hide();
                },
                div {
                    class: "dialog",
                    onclick: move |evt| evt.stop_propagation(),
                    h2 { class: "dialog-title", "{dialog.title()}" }
                    p { class: "dialog-message", "{dialog.message()}" }
                    div { class: "dialog-actions",
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                dialog_for_cancel.hide();
                            },
                            "Cancel"
                        }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| {
                                dialog_for_confirm.confirm();
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
