//! Recipe detail: gallery, stats, sanitized instructions, email send.

use dioxus::prelude::*;

use api::Recipe;
use ui::markdown::detail_html;
use ui::{make_client, use_session, MessageBanner, Severity, Spinner, StarRating};

use crate::Route;

#[component]
pub fn RecipeDetail(id: i64) -> Element {
    let session = use_session();
    // Track the id in a signal so the loader re-runs on route param change.
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let mut recipe = use_signal(|| Option::<Recipe>::None);
    let mut loading = use_signal(|| true);
    let mut sending = use_signal(|| false);
    let mut message = use_signal(|| Option::<(Severity, String)>::None);

    let _loader = use_resource(move || {
        let recipe_id = id_signal();
        async move {
            loading.set(true);
            let client = make_client().await;
            match client.get_recipe(recipe_id).await {
                Ok(r) => recipe.set(Some(r)),
                Err(e) => {
                    tracing::error!("cargando receta {recipe_id}: {e}");
                    message.set(Some((Severity::Error, e.to_string())));
                }
            }
            loading.set(false);
        }
    });

    let send_email = move |_| {
        spawn(async move {
            let Some(r) = recipe() else {
                return;
            };
            sending.set(true);
            let client = make_client().await;
            match client.email_recipe(r.id).await {
                Ok(()) => message.set(Some((
                    Severity::Success,
                    "La receta ha sido enviada a tu correo".into(),
                ))),
                Err(_) => message.set(Some((
                    Severity::Error,
                    "No se pudo enviar la receta por correo".into(),
                ))),
            }
            sending.set(false);
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
                    class: "detail-head",
                    h1 { "{r.name}" }
                    div {
                        class: "detail-meta",
                        span { class: "tag tag-info", "{r.difficulty}" }
                        span { "{r.preparation_time} min" }
                        span { "{r.servings} personas" }
                        if let Some(price) = r.price {
                            span { {format!("${price:.2}")} }
                        }
                        if let Some(calories) = r.calories {
                            span { {format!("{calories:.0} kcal")} }
                        }
                        if let Some(rating) = r.average_rating {
                            StarRating { value: rating, count: r.total_ratings }
                        }
                    }
                    div {
                        class: "detail-actions",
                        if session().is_authenticated() {
                            button {
                                class: "btn btn-secondary",
                                disabled: sending(),
                                onclick: send_email,
                                if sending() { "Enviando..." } else { "Enviar por correo" }
                            }
                        }
                        if session().user.as_ref().map(|u| u.id) == Some(r.user_id) {
                            Link {
                                to: Route::RecipeEdit { id: r.id },
                                class: "btn btn-primary",
                                "Editar"
                            }
                        }
                    }
                }

                if !r.images.is_empty() {
                    div {
                        class: "gallery",
                        for image in &r.images {
                            img {
                                key: "{image.url}",
                                src: "{image.url}",
                                alt: "{r.name}",
                                loading: "lazy",
                            }
                        }
                    }
                }

                if !r.description.is_empty() {
                    p { class: "detail-description", "{r.description}" }
                }

                if !r.ingredients.is_empty() {
                    div {
                        class: "detail-ingredients",
                        h2 { "Ingredientes" }
                        ul {
                            for line in &r.ingredients {
                                li {
                                    key: "{line.id}",
                                    {format!(
                                        "{} × {} (${:.2})",
                                        line.quantity, line.product_name, line.product_price
                                    )}
                                }
                            }
                        }
                    }
                }

                div {
                    class: "markdown-body detail-instructions",
                    dangerous_inner_html: detail_html(if r.instructions.is_empty() {
                        &r.description
                    } else {
                        &r.instructions
                    }),
                }
            } else {
                div { class: "empty-state", p { "Receta no encontrada." } }
            }
        }
    }
}
