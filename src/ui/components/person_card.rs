use crate::api::Person;
use crate::ui::components::dialog_context::ConfirmDialogContext;
use crate::ui::context::DirectoryContext;
use dioxus::prelude::*;

/// One record rendered as a card with edit and delete actions
#[component]
pub fn PersonCard(person: Person) -> Element {
    let ctx = use_context::<DirectoryContext>();
    let dialog = use_context::<ConfirmDialogContext>();

    let ctx_edit = ctx.clone();
    let edit_target = person.clone();
    let delete_id = person.id;

    rsx! {
        div { class: "person-card",
            div { class: "person-card-header",
                div {
                    h3 { class: "person-name", "{person.name}" }
                    p { class: "person-subtitle", "{person.prenom} {person.nom}" }
                    span { class: "person-age", "Age: {person.age}" }
                }
                div { class: "person-card-actions",
                    button {
                        class: "icon-btn",
                        title: "Edit",
                        onclick: move |_| ctx_edit.edit_person(edit_target.clone()),
                        "Edit"
                    }
                    button {
                        class: "icon-btn icon-btn-danger",
                        title: "Delete",
                        onclick: move |_| {
                            if let Some(id) = delete_id {
                                let ctx = ctx.clone();
                                dialog.show(
                                    "Delete person",
                                    "Are you sure you want to delete this person?",
                                    move || ctx.delete_person(id),
                                );
                            }
                        },
                        "Delete"
                    }
                }
            }

            div { class: "person-details",
                div { class: "detail-row",
                    p { class: "detail-label", "Email" }
                    p { class: "detail-value", "{person.email}" }
                }
                if !person.telephone.is_empty() {
                    div { class: "detail-row",
                        p { class: "detail-label", "Phone" }
                        p { class: "detail-value", "{person.telephone}" }
                    }
                }
                if !person.poste.is_empty() {
                    div { class: "detail-row",
                        p { class: "detail-label", "Position" }
                        p { class: "detail-value", "{person.poste}" }
                    }
                }
                if !person.departement.is_empty() {
                    div { class: "detail-row",
                        p { class: "detail-label", "Department" }
                        p { class: "detail-value", "{person.departement}" }
                    }
                }
                if !person.date_embauche.is_empty() {
                    div { class: "detail-row",
                        p { class: "detail-label", "Hire Date" }
                        p { class: "detail-value", "{person.date_embauche}" }
                    }
                }
            }

            if let Some(id) = person.id {
                div { class: "person-card-footer",
                    p { class: "person-id", "ID: {id}" }
                }
            }
        }
    }
}
