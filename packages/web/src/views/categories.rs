//! Category inventory: fetch once, local search, CRUD through a dialog,
//! patch-in-place reconciliation.

use dioxus::prelude::*;

use api::{Category, CategoryDraft};
use ui::collection::{remove_by_id, upsert_by_id};
use ui::{
    make_client, use_require_auth, ConfirmDialog, MessageBanner, Severity, Spinner,
};

#[component]
pub fn Categories() -> Element {
    let _session = use_require_auth();
    let mut categories = use_signal(Vec::<Category>::new);
    let mut search = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut message = use_signal(|| Option::<(Severity, String)>::None);

    // Dialog state: `editing` keeps the category being edited, `None` while
    // creating.
    let mut show_dialog = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Category>::None);
    let mut form_name = use_signal(String::new);
    let mut form_description = use_signal(String::new);

    let mut pending_delete = use_signal(|| Option::<Category>::None);

    let _loader = use_resource(move || async move {
        let client = make_client().await;
        match client.list_categories().await {
            Ok(list) => categories.set(list),
            Err(e) => message.set(Some((Severity::Error, e.to_string()))),
        }
        loading.set(false);
    });

    let term = search().trim().to_lowercase();
    let filtered: Vec<Category> = categories()
        .iter()
        .filter(|c| {
            term.is_empty()
                || c.name.to_lowercase().contains(&term)
                || c.description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&term))
        })
        .cloned()
        .collect();

    let mut open_new = move |_| {
        editing.set(None);
        form_name.set(String::new());
        form_description.set(String::new());
        show_dialog.set(true);
    };

    let mut open_edit = move |category: Category| {
        form_name.set(category.name.clone());
        form_description.set(category.description.clone().unwrap_or_default());
        editing.set(Some(category));
        show_dialog.set(true);
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let name = form_name().trim().to_string();
            if name.is_empty() {
                message.set(Some((Severity::Error, "El nombre es obligatorio".into())));
                return;
            }
            let description = form_description().trim().to_string();
            let draft = CategoryDraft {
                name,
                description: if description.is_empty() {
                    None
                } else {
                    Some(description)
                },
            };

            saving.set(true);
            let client = make_client().await;
            let result = match editing() {
                Some(category) => client.update_category(category.id, &draft).await,
                None => client.create_category(&draft).await,
            };
            match result {
                Ok(saved) => {
                    upsert_by_id(&mut categories.write(), saved, |c| c.id);
                    show_dialog.set(false);
                    message.set(Some((Severity::Success, "Categoría guardada".into())));
                }
                Err(e) => message.set(Some((Severity::Error, e.to_string()))),
            }
            saving.set(false);
        });
    };

    let handle_delete = move |_| {
        spawn(async move {
            let Some(category) = pending_delete() else {
                return;
            };
            pending_delete.set(None);
            let client = make_client().await;
            match client.delete_category(category.id).await {
                Ok(()) => {
                    remove_by_id(&mut categories.write(), category.id, |c| c.id);
                    message.set(Some((Severity::Success, "Categoría eliminada".into())));
                }
                Err(e) => message.set(Some((Severity::Error, e.to_string()))),
            }
        });
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-head",
                h1 { "Categorías" }
                button { class: "btn btn-primary", onclick: move |evt| open_new(evt), "Nueva categoría" }
            }

            if let Some((severity, text)) = message() {
                MessageBanner { severity, text }
            }

            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Buscar categorías...",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }

            if loading() {
                Spinner {}
            } else if filtered.is_empty() {
                div { class: "empty-state", p { "No hay categorías que mostrar." } }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Nombre" }
                            th { "Descripción" }
                            th { "" }
                        }
                    }
                    tbody {
                        for category in filtered {
                            tr {
                                key: "{category.id}",
                                td { "{category.name}" }
                                td { {category.description.clone().unwrap_or_default()} }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "btn btn-small",
                                        onclick: {
                                            let category = category.clone();
                                            move |_| open_edit(category.clone())
                                        },
                                        "Editar"
                                    }
                                    button {
                                        class: "btn btn-small btn-danger",
                                        onclick: {
                                            let category = category.clone();
                                            move |_| pending_delete.set(Some(category.clone()))
                                        },
                                        "Eliminar"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if show_dialog() {
                div {
                    class: "dialog-overlay",
                    form {
                        class: "dialog",
                        onsubmit: handle_save,
                        h3 {
                            if editing().is_some() { "Editar categoría" } else { "Nueva categoría" }
                        }
                        label { "Nombre" }
                        input {
                            r#type: "text",
                            value: form_name(),
                            oninput: move |evt| form_name.set(evt.value()),
                        }
                        label { "Descripción" }
                        textarea {
                            value: form_description(),
                            oninput: move |evt| form_description.set(evt.value()),
                        }
                        div {
                            class: "dialog-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| show_dialog.set(false),
                                "Cancelar"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Guardando..." } else { "Guardar" }
                            }
                        }
                    }
                }
            }

            if let Some(category) = pending_delete() {
                ConfirmDialog {
                    title: "Confirmar eliminación",
                    message: format!("¿Seguro que deseas eliminar la categoría \"{}\"?", category.name),
                    on_accept: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
