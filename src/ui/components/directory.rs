use crate::ui::components::{MessageBanners, PersonCard, PersonFormModal, Toolbar};
use crate::ui::context::DirectoryContext;
use dioxus::prelude::*;

/// The single page of the app: toolbar, messages, stats, the card grid and
/// the create/edit modal.
#[component]
pub fn Directory() -> Element {
    let ctx = use_context::<DirectoryContext>();

    let ctx_for_load = ctx.clone();
    use_effect(move || {
        ctx_for_load.load_all();
    });

    // A pending debounce timer must not fire into a dead view
    let ctx_for_drop = ctx.clone();
    use_drop(move || {
        ctx_for_drop.cancel_pending();
    });

    let persons = ctx.state.read().persons.clone();
    let loading = ctx.state.read().loading;
    let search_term = ctx.state.read().search_term.clone();
    let search_mode = ctx.state.read().search_mode;
    let modal_open = ctx.state.read().modal_open;

    let status = if loading {
        "Loading..."
    } else if persons.is_empty() {
        "Ready"
    } else {
        "Connected"
    };

    let ctx_for_add = ctx.clone();
    let ctx_for_test = ctx.clone();

    rsx! {
        div { class: "page",
            Toolbar {}
            MessageBanners {}

            div { class: "stats-row",
                div { class: "stat-card",
                    p { class: "stat-label", "Total Persons" }
                    p { class: "stat-value", "{persons.len()}" }
                }
                div { class: "stat-card",
                    p { class: "stat-label", "Search Type" }
                    p { class: "stat-value stat-value-mode", "{search_mode.label()}" }
                }
                div { class: "stat-card",
                    p { class: "stat-label", "Status" }
                    p { class: "stat-value", "{status}" }
                }
            }

            if loading {
                div { class: "spinner-wrap",
                    div { class: "spinner" }
                    p { class: "loading-text", "Loading data..." }
                }
            } else if persons.is_empty() {
                div { class: "empty-state",
                    h3 { class: "empty-title", "No persons found" }
                    p { class: "empty-text",
                        if search_term.is_empty() {
                            "Start by adding your first person"
                        } else {
                            "No results for \"{search_term}\""
                        }
                    }
                    div { class: "empty-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| ctx_for_add.open_create(),
                            "Add First Person"
                        }
                        button {
                            class: "btn btn-success",
                            onclick: move |_| ctx_for_test.test_connection(),
                            "Test Connection"
                        }
                    }
                }
            } else {
                div { class: "person-grid",
                    for person in persons {
                        PersonCard { key: "{person.id:?}", person: person.clone() }
                    }
                }
            }

            if modal_open {
                PersonFormModal {}
            }
        }
    }
}
