use crate::state::SearchMode;
use crate::ui::context::DirectoryContext;
use dioxus::prelude::*;

/// Header card: title, action buttons and the search controls
#[component]
pub fn Toolbar() -> Element {
    let ctx = use_context::<DirectoryContext>();

    let api_base_url = ctx.api_base_url();
    let loading = ctx.state.read().loading;
    let search_term = ctx.state.read().search_term.clone();
    let search_mode = ctx.state.read().search_mode;

    let ctx_test = ctx.clone();
    let ctx_count = ctx.clone();
    let ctx_add = ctx.clone();
    let ctx_input = ctx.clone();
    let ctx_enter = ctx.clone();
    let ctx_search = ctx.clone();
    let ctx_clear = ctx.clone();
    let ctx_by_name = ctx.clone();
    let ctx_by_department = ctx.clone();

    rsx! {
        div { class: "header-card",
            div { class: "header-row",
                div { class: "header-title-group",
                    h1 { class: "app-title", "Person Management System" }
                    p { class: "app-subtitle", "Manage your personnel database" }
                    p { class: "api-url", "API: {api_base_url}" }
                }
                div { class: "header-actions",
                    button {
                        class: "btn btn-success",
                        disabled: loading,
                        onclick: move |_| ctx_test.test_connection(),
                        if loading { "Testing..." } else { "Test Connection" }
                    }
                    button {
                        class: "btn btn-secondary",
                        disabled: loading,
                        onclick: move |_| ctx_count.fetch_count(),
                        "Get Count"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| ctx_add.open_create(),
                        "Add Person"
                    }
                }
            }

            div { class: "search-section",
                div { class: "search-row",
                    input {
                        class: "search-input",
                        r#type: "text",
                        placeholder: "Search by {search_mode.label()}...",
                        value: "{search_term}",
                        oninput: move |event: FormEvent| {
                            ctx_input.search_input(event.value());
                        },
                        onkeydown: move |event: KeyboardEvent| {
                            if event.key() == Key::Enter {
                                ctx_enter.run_search();
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: loading,
                        onclick: move |_| ctx_search.run_search(),
                        "Search"
                    }
                    if !search_term.is_empty() {
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| ctx_clear.clear_search(),
                            "Clear"
                        }
                    }
                }

                div { class: "mode-toggle",
                    span { class: "search-label", "Search Type" }
                    button {
                        class: if search_mode == SearchMode::Name {
                            "mode-btn mode-btn-active"
                        } else {
                            "mode-btn"
                        },
                        onclick: move |_| ctx_by_name.set_search_mode(SearchMode::Name),
                        "By Name"
                    }
                    button {
                        class: if search_mode == SearchMode::Department {
                            "mode-btn mode-btn-active"
                        } else {
                            "mode-btn"
                        },
                        onclick: move |_| ctx_by_department.set_search_mode(SearchMode::Department),
                        "By Department"
                    }
                }
            }
        }
    }
}
