//! Ingredient inventory. The category dropdown loads independently and an
//! error there just leaves it empty.

use dioxus::prelude::*;

use api::{Category, Product, ProductDraft, ProductUpdate};
use ui::collection::{remove_by_id, upsert_by_id};
use ui::{
    make_client, use_require_auth, ConfirmDialog, MessageBanner, Severity, Spinner,
};

#[component]
pub fn Ingredients() -> Element {
    let _session = use_require_auth();
    let mut products = use_signal(Vec::<Product>::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut search = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut message = use_signal(|| Option::<(Severity, String)>::None);

    let mut show_dialog = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Product>::None);
    let mut form_name = use_signal(String::new);
    let mut form_price = use_signal(String::new);
    let mut form_category = use_signal(|| Option::<i64>::None);

    let mut pending_delete = use_signal(|| Option::<Product>::None);

    let _loader = use_resource(move || async move {
        let client = make_client().await;
        match client.list_products().await {
            Ok(list) => products.set(list),
            Err(e) => message.set(Some((Severity::Error, e.to_string()))),
        }
        loading.set(false);

        match client.list_categories().await {
            Ok(list) => categories.set(list),
            // The dropdown simply stays empty.
            Err(e) => tracing::warn!("cargando categorías para el desplegable: {e}"),
        }
    });

    let category_name = move |id: i64| -> String {
        categories()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Sin categoría".to_string())
    };

    let term = search().trim().to_lowercase();
    let filtered: Vec<Product> = products()
        .iter()
        .filter(|p| {
            term.is_empty()
                || p.name.to_lowercase().contains(&term)
                || category_name(p.category_id).to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    let mut open_new = move |_| {
        editing.set(None);
        form_name.set(String::new());
        form_price.set(String::new());
        form_category.set(None);
        show_dialog.set(true);
    };

    let mut open_edit = move |product: Product| {
        form_name.set(product.name.clone());
        form_price.set(format!("{:.2}", product.price));
        form_category.set(Some(product.category_id));
        editing.set(Some(product));
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
            let Ok(price) = form_price().trim().parse::<f64>() else {
                message.set(Some((Severity::Error, "Precio no válido".into())));
                return;
            };
            if price <= 0.0 {
                message.set(Some((
                    Severity::Error,
                    "El precio debe ser mayor que cero".into(),
                )));
                return;
            }
            let Some(category_id) = form_category() else {
                message.set(Some((Severity::Error, "Selecciona una categoría".into())));
                return;
            };

            saving.set(true);
            let client = make_client().await;
            let result = match editing() {
                Some(product) => {
                    let update = ProductUpdate {
                        name: Some(name),
                        price: Some(price),
                        category_id: Some(category_id),
                    };
                    client.update_product(product.id, &update).await
                }
                None => {
                    let draft = ProductDraft {
                        name,
                        price,
                        category_id,
                    };
                    client.create_product(&draft).await
                }
            };
            match result {
                Ok(saved) => {
                    upsert_by_id(&mut products.write(), saved, |p| p.id);
                    show_dialog.set(false);
                    message.set(Some((Severity::Success, "Ingrediente guardado".into())));
                }
                Err(e) => message.set(Some((Severity::Error, e.to_string()))),
            }
            saving.set(false);
        });
    };

    let handle_delete = move |_| {
        spawn(async move {
            let Some(product) = pending_delete() else {
                return;
            };
            pending_delete.set(None);
            let client = make_client().await;
            match client.delete_product(product.id).await {
                Ok(()) => {
                    remove_by_id(&mut products.write(), product.id, |p| p.id);
                    message.set(Some((Severity::Success, "Ingrediente eliminado".into())));
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
                h1 { "Ingredientes" }
                button { class: "btn btn-primary", onclick: move |evt| open_new(evt), "Nuevo ingrediente" }
            }

            if let Some((severity, text)) = message() {
                MessageBanner { severity, text }
            }

            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Buscar por nombre o categoría...",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }

            if loading() {
                Spinner {}
            } else if filtered.is_empty() {
                div { class: "empty-state", p { "No hay ingredientes que mostrar." } }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Nombre" }
                            th { "Precio" }
                            th { "Categoría" }
                            th { "" }
                        }
                    }
                    tbody {
                        for product in filtered {
                            tr {
                                key: "{product.id}",
                                td { "{product.name}" }
                                td { {format!("${:.2}", product.price)} }
                                td {
                                    {product.category_name.clone().unwrap_or_else(|| category_name(product.category_id))}
                                }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "btn btn-small",
                                        onclick: {
                                            let product = product.clone();
                                            move |_| open_edit(product.clone())
                                        },
                                        "Editar"
                                    }
                                    button {
                                        class: "btn btn-small btn-danger",
                                        onclick: {
                                            let product = product.clone();
                                            move |_| pending_delete.set(Some(product.clone()))
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
                            if editing().is_some() { "Editar ingrediente" } else { "Nuevo ingrediente" }
                        }
                        label { "Nombre" }
                        input {
                            r#type: "text",
                            value: form_name(),
                            oninput: move |evt| form_name.set(evt.value()),
                        }
                        label { "Precio (USD)" }
                        input {
                            r#type: "number",
                            min: "0.01",
                            step: "0.01",
                            value: form_price(),
                            oninput: move |evt| form_price.set(evt.value()),
                        }
                        label { "Categoría" }
                        select {
                            onchange: move |evt| {
                                form_category.set(evt.value().parse::<i64>().ok());
                            },
                            option {
                                value: "",
                                selected: form_category().is_none(),
                                "Selecciona..."
                            }
                            for category in categories() {
                                option {
                                    key: "{category.id}",
                                    value: "{category.id}",
                                    selected: form_category() == Some(category.id),
                                    "{category.name}"
                                }
                            }
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

            if let Some(product) = pending_delete() {
                ConfirmDialog {
                    title: "Confirmar eliminación",
                    message: format!("¿Estás seguro de que deseas eliminar \"{}\"?", product.name),
                    on_accept: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
