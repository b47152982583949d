//! Recipe edit: the form plus image attachment management. New files are
//! listed locally and uploaded concurrently on save; a file that fails to
//! upload is reported but does not block the rest of the save.

use dioxus::prelude::*;
use futures::future::join_all;

use api::{Recipe, RecipeUpdate};
use ui::{make_client, use_require_auth, MessageBanner, Severity, Spinner};

use crate::Route;

#[component]
pub fn RecipeEdit(id: i64) -> Element {
    let _session = use_require_auth();
    let mut recipe = use_signal(|| Option::<Recipe>::None);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut message = use_signal(|| Option::<(Severity, String)>::None);
    let nav = use_navigator();

    let mut form_name = use_signal(String::new);
    let mut form_content = use_signal(String::new);
    let mut form_price = use_signal(String::new);
    let mut form_calories = use_signal(String::new);

    // Files picked but not yet uploaded: (name, bytes).
    let mut new_files = use_signal(Vec::<(String, Vec<u8>)>::new);

    let _loader = use_resource(move || async move {
        let client = make_client().await;
        match client.get_recipe(id).await {
            Ok(r) => {
                form_name.set(r.name.clone());
                form_content.set(if r.instructions.is_empty() {
                    r.description.clone()
                } else {
                    r.instructions.clone()
                });
                form_price.set(r.price.map(|p| format!("{p:.2}")).unwrap_or_default());
                form_calories.set(r.calories.map(|c| format!("{c:.0}")).unwrap_or_default());
                recipe.set(Some(r));
            }
            Err(e) => message.set(Some((Severity::Error, e.to_string()))),
        }
        loading.set(false);
    });

    let pick_files = move |evt: FormEvent| {
        if let Some(engine) = evt.files() {
            spawn(async move {
                for name in engine.files() {
                    match engine.read_file(&name).await {
                        Some(bytes) => new_files.write().push((name, bytes)),
                        None => tracing::warn!("no se pudo leer el archivo {name}"),
                    }
                }
            });
        }
    };

    let remove_remote_image = move |image_id: i64| {
        spawn(async move {
            let client = make_client().await;
            match client.delete_image(image_id).await {
                Ok(()) => {
                    if let Some(r) = &mut *recipe.write() {
                        r.images.retain(|img| img.id != Some(image_id));
                    }
                }
                Err(_) => {
                    message.set(Some((
                        Severity::Error,
                        "No se pudo eliminar la imagen".into(),
                    )));
                }
            }
        });
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(r) = recipe() else {
                return;
            };
            let name = form_name().trim().to_string();
            let content = form_content().trim().to_string();
            if name.is_empty() || content.is_empty() {
                message.set(Some((
                    Severity::Error,
                    "Nombre e instrucciones son obligatorios".into(),
                )));
                return;
            }

            let update = RecipeUpdate {
                name,
                content,
                price: form_price().trim().parse::<f64>().ok(),
                calories: form_calories().trim().parse::<f64>().ok(),
            };

            saving.set(true);
            let client = make_client().await;
            if let Err(e) = client.update_recipe(r.id, &update).await {
                saving.set(false);
                message.set(Some((Severity::Error, e.to_string())));
                return;
            }

            // Upload the new images concurrently; count the failures but let
            // the save finish either way.
            let files = new_files();
            let uploads = files.into_iter().map(|(file_name, bytes)| {
                let client = client.clone();
                async move {
                    let result = client.upload_image(r.id, &file_name, bytes).await;
                    (file_name, result)
                }
            });
            let failed: Vec<String> = join_all(uploads)
                .await
                .into_iter()
                .filter_map(|(file_name, result)| result.err().map(|_| file_name))
                .collect();

            new_files.set(Vec::new());
            saving.set(false);

            if failed.is_empty() {
                message.set(Some((
                    Severity::Success,
                    "La receta se actualizó correctamente".into(),
                )));
            } else {
                tracing::warn!("imágenes sin subir: {}", failed.join(", "));
                message.set(Some((
                    Severity::Warn,
                    format!(
                        "La receta se actualizó, pero no se pudieron subir: {}",
                        failed.join(", ")
                    ),
                )));
            }
            nav.push(Route::RecipeDetail { id: r.id });
        });
    };

    rsx! {
        div {
            class: "page",

            if let Some((severity, text)) = message() {
                MessageBanner { severity, text }
            }

            if loading() {
                Spinner {}
            } else if let Some(r) = recipe() {
                div {
                    class: "page-head",
                    h1 { "Editar receta" }
                    Link {
                        to: Route::RecipeDetail { id: r.id },
                        class: "btn btn-secondary",
                        "Volver"
                    }
                }

                form {
                    class: "edit-form",
                    onsubmit: handle_save,

                    label { "Nombre" }
                    input {
                        r#type: "text",
                        value: form_name(),
                        oninput: move |evt| form_name.set(evt.value()),
                    }

                    label { "Instrucciones (markdown)" }
                    textarea {
                        class: "edit-content",
                        value: form_content(),
                        oninput: move |evt| form_content.set(evt.value()),
                    }

                    div {
                        class: "edit-row",
                        div {
                            label { "Precio (USD)" }
                            input {
                                r#type: "number",
                                min: "0",
                                step: "0.01",
                                value: form_price(),
                                oninput: move |evt| form_price.set(evt.value()),
                            }
                        }
                        div {
                            label { "Calorías" }
                            input {
                                r#type: "number",
                                min: "0",
                                step: "1",
                                value: form_calories(),
                                oninput: move |evt| form_calories.set(evt.value()),
                            }
                        }
                    }

                    h2 { "Imágenes" }
                    div {
                        class: "image-manager",
                        for image in &r.images {
                            div {
                                key: "{image.url}",
                                class: "image-item",
                                img { src: "{image.url}", alt: "{r.name}" }
                                if let Some(image_id) = image.id {
                                    button {
                                        r#type: "button",
                                        class: "btn btn-small btn-danger",
                                        onclick: move |_| remove_remote_image(image_id),
                                        "Eliminar"
                                    }
                                }
                            }
                        }
                        for (index, (file_name, _)) in new_files().into_iter().enumerate() {
                            div {
                                key: "{index}-{file_name}",
                                class: "image-item image-item-pending",
                                span { "{file_name}" }
                                button {
                                    r#type: "button",
                                    class: "btn btn-small btn-danger",
                                    onclick: move |_| {
                                        new_files.write().remove(index);
                                    },
                                    "Quitar"
                                }
                            }
                        }
                    }
                    label {
                        class: "btn btn-secondary file-picker",
                        "Añadir imágenes"
                        input {
                            r#type: "file",
                            accept: "image/*",
                            multiple: true,
                            onchange: pick_files,
                        }
                    }

                    div {
                        class: "edit-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Guardando..." } else { "Guardar cambios" }
                        }
                    }
                }
            } else {
                div { class: "empty-state", p { "Receta no encontrada." } }
            }
        }
    }
}
