use crate::ui::context::DirectoryContext;
use dioxus::prelude::*;

/// Create/edit modal. Nine inputs mirroring the Person fields; validation
/// runs on submit, not per keystroke.
#[component]
pub fn PersonFormModal() -> Element {
    let ctx = use_context::<DirectoryContext>();
    let mut state = ctx.state;

    let form = ctx.state.read().form.clone();
    let editing = ctx.state.read().editing.is_some();
    let loading = ctx.state.read().loading;

    let ctx_close = ctx.clone();
    let ctx_cancel = ctx.clone();
    let ctx_submit = ctx.clone();

    let (title, subtitle) = if editing {
        ("Edit Person", "Update person details")
    } else {
        ("Add New Person", "Fill in the required information")
    };

    let submit_label = match (loading, editing) {
        (true, true) => "Updating...",
        (true, false) => "Creating...",
        (false, true) => "Update Person",
        (false, false) => "Create Person",
    };

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal",
                div { class: "modal-header",
                    div {
                        h2 { class: "modal-title", "{title}" }
                        p { class: "modal-subtitle", "{subtitle}" }
                    }
                    button {
                        class: "modal-close",
                        onclick: move |_| ctx_close.close_modal(),
                        "×"
                    }
                }

                div { class: "form-grid",
                    div { class: "form-field",
                        label { class: "form-label", "Name *" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{form.name}",
                            oninput: move |event: FormEvent| state.write().form.name = event.value(),
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", "Age *" }
                        input {
                            class: "form-input",
                            r#type: "number",
                            min: "1",
                            value: "{form.age}",
                            oninput: move |event: FormEvent| state.write().form.age = event.value(),
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", "Nom (Last Name) *" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{form.nom}",
                            oninput: move |event: FormEvent| state.write().form.nom = event.value(),
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", "Prenom (First Name) *" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{form.prenom}",
                            oninput: move |event: FormEvent| state.write().form.prenom = event.value(),
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", "Email *" }
                        input {
                            class: "form-input",
                            r#type: "email",
                            value: "{form.email}",
                            oninput: move |event: FormEvent| state.write().form.email = event.value(),
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", "Phone" }
                        input {
                            class: "form-input",
                            r#type: "tel",
                            value: "{form.telephone}",
                            oninput: move |event: FormEvent| state.write().form.telephone = event.value(),
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", "Position" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{form.poste}",
                            oninput: move |event: FormEvent| state.write().form.poste = event.value(),
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", "Department" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{form.departement}",
                            oninput: move |event: FormEvent| state.write().form.departement = event.value(),
                        }
                    }
                    div { class: "form-field form-field-wide",
                        label { class: "form-label", "Hire Date (yyyy-mm-dd)" }
                        input {
                            class: "form-input",
                            r#type: "date",
                            value: "{form.date_embauche}",
                            oninput: move |event: FormEvent| state.write().form.date_embauche = event.value(),
                        }
                        p { class: "form-hint", "Format: yyyy-mm-dd (e.g., 2024-01-15)" }
                    }
                }

                div { class: "modal-actions",
                    button {
                        class: "btn btn-primary btn-wide",
                        disabled: loading,
                        onclick: move |_| ctx_submit.submit(),
                        "{submit_label}"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| ctx_cancel.close_modal(),
                        "Cancel"
                    }
                }
            }
        }
    }
}
